pub mod aggregator;
pub mod coordinate;
pub mod generic;
pub mod replace;
pub mod rules;
pub mod traversal;

pub mod element;
pub mod notation;

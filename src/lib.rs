//! Sentence aggregation for rule-based natural language generation.
//!
//! Two independently planned sentence trees that differ in exactly one
//! element are merged into one tree in which that element becomes a
//! coordination: "John is a boy" + "John is tall" => "John is a boy and is
//! tall". Trees go in and a tree comes out; realization into text happens
//! downstream.
//!
//! - [`structure`] holds the tree model and its bracketed text notation.
//! - [`aggregation::rules`] has the cheap pattern-specific rules.
//! - [`aggregation::generic`] has the exhaustive single-substitution search.
//! - [`aggregation::aggregator`] chains both according to [`config`].

pub mod aggregation;
pub mod config;
pub mod structure;

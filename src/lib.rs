//! Cost Tree
//!
//! Turns a flat mapping of slash-delimited keys to (cost, count) pairs
//! into a sortable cost-breakdown tree where every ancestor carries the
//! totals of its descendants.
//!
//! Data flows through the modules in order:
//!
//! ```text
//! flat map -> aggregator (tree, sort) -> formatter -> presenter -> render surface
//! ```
//!
//! `view::ViewState` ties the pipeline to the three user-selectable
//! axes (mode, sort key, time unit).
//!
//! ## Getting Started
//!
//! ```bash
//! cost-tree render --input costs.json --sort avg --unit ms
//! cost-tree --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod formatter;
pub mod output;
pub mod parser;
pub mod presenter;
pub mod utils;
pub mod view;

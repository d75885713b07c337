//! Aggregation of flat cost maps into sorted cost trees.
//!
//! This module transforms flat path -> cost maps into:
//! - An arena-backed tree with ancestor totals
//! - Sibling orderings by total or average cost

pub mod sorter;
pub mod tree_builder;

// Re-export main types and functions
pub use sorter::{sorted_children, SortKey};
pub use tree_builder::{build_tree, split_path, CostTree, NodeId, TreeNode};

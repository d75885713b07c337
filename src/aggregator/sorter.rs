//! Ordering of sibling nodes.
//!
//! Siblings are ranked descending either by total cost or by average cost
//! per instance. Ranking always uses raw deciseconds; unit conversion is
//! monotonic and cannot change the order.

use super::tree_builder::{CostTree, NodeId, TreeNode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ranking key for siblings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Total cost of the subtree
    #[default]
    Total,
    /// Cost per instance, `cost / max(count, 1)`
    Avg,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Total => "total",
            SortKey::Avg => "avg",
        }
    }

    /// Human-readable label for summaries
    pub fn description(&self) -> &'static str {
        match self {
            SortKey::Total => "Total time",
            SortKey::Avg => "Average time per instance",
        }
    }

    /// The value a node is ranked by
    pub fn rank(&self, node: &TreeNode) -> f64 {
        match self {
            SortKey::Total => node.cost,
            SortKey::Avg => node.average_cost(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" => Ok(SortKey::Total),
            "avg" | "average" => Ok(SortKey::Avg),
            other => Err(format!("unknown sort key '{}' (expected total or avg)", other)),
        }
    }
}

/// Order sibling ids descending by the ranking value
///
/// **Public** - used by the presenter at every level
///
/// Ties keep their input order (stable sort), but callers should not
/// rely on any particular order between equal values.
pub fn sorted_children(tree: &CostTree, siblings: &[NodeId], key: SortKey) -> Vec<NodeId> {
    let mut ids = siblings.to_vec();
    ids.sort_by(|&a, &b| key.rank(&tree[b]).total_cmp(&key.rank(&tree[a])));
    ids
}

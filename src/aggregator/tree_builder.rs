//! Build a nested cost tree from a flat path -> cost map.
//!
//! Every key is split on `/` and walked from the root, creating nodes on
//! the way. Each visited node accumulates the entry's cost and count, so
//! an ancestor always carries the totals of everything below it. Only the
//! final segment receives the entry as its direct figures.
//!
//! Example:
//! ```text
//! A/B  10 (2x)        A  18 (4x)  direct 3 (1x)
//! A/C   5 (1x)   =>   ├─ B 10 (2x)
//! A     3 (1x)        └─ C  5 (1x)
//! ```
//!
//! Nodes live in an arena and refer to each other by `NodeId`.

use crate::formatter::average;
use crate::parser::schema::{CostEntry, FlatCostMap};
use crate::utils::config::PATH_SEPARATOR;
use log::debug;
use std::collections::HashMap;
use std::ops::Index;

/// Index of a node inside its `CostTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One path segment at one depth
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Segment name
    pub name: String,

    /// Full slash-joined path from the root to this node
    pub path: String,

    /// `direct_cost` of this node plus the cost of all descendants
    pub cost: f64,

    /// `direct_count` of this node plus the count of all descendants
    pub count: u64,

    /// Cost of the flat entry whose key is exactly this path (0 if none)
    pub direct_cost: f64,

    /// Count of the flat entry whose key is exactly this path (0 if none)
    pub direct_count: u64,

    /// The path that created this node ended here
    pub is_leaf: bool,

    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl TreeNode {
    fn new(name: &str, path: &str, is_leaf: bool, parent: Option<NodeId>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            cost: 0.0,
            count: 0,
            direct_cost: 0.0,
            direct_count: 0,
            is_leaf,
            parent,
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Cost per instance over the whole subtree
    pub fn average_cost(&self) -> f64 {
        average(self.cost, self.count)
    }

    /// Cost per instance of the direct entry only
    pub fn direct_average_cost(&self) -> f64 {
        average(self.direct_cost, self.direct_count)
    }
}

/// Aggregated cost tree stored as an arena of nodes
#[derive(Debug, Clone, Default)]
pub struct CostTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
    // Children are scoped per parent: (parent, segment) -> child
    lookup: HashMap<(Option<NodeId>, String), NodeId>,
}

impl CostTree {
    /// Top-level nodes, in creation order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Look a node up by its slash-delimited path
    ///
    /// The lookup uses the same splitting rule as the build, so
    /// `"/A//B/"` finds the node for `"A/B"`.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let segments = split_path(path);
        if segments.is_empty() {
            return None;
        }

        let mut parent = None;
        for segment in segments {
            let id = *self.lookup.get(&(parent, segment.to_string()))?;
            parent = Some(id);
        }
        parent
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of the top-level costs
    pub fn total_cost(&self) -> f64 {
        self.roots.iter().map(|&id| self[id].cost).sum()
    }

    /// Sum of the top-level counts, saturating at `u64::MAX`
    pub fn total_count(&self) -> u64 {
        self.roots
            .iter()
            .fold(0u64, |acc, &id| acc.saturating_add(self[id].count))
    }

    /// Number of edges between the node and its top-level ancestor
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self[parent].parent;
        }
        depth
    }

    /// All node ids, depth-first pre-order in creation order
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self[id].children.iter().rev().copied());
        }

        order
    }

    fn child_or_insert(
        &mut self,
        parent: Option<NodeId>,
        segment: &str,
        path: &str,
        is_last: bool,
    ) -> NodeId {
        let key = (parent, segment.to_string());
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(segment, path, is_last, parent));
        self.lookup.insert(key, id);

        match parent {
            Some(parent_id) => self.nodes[parent_id.0].children.push(id),
            None => self.roots.push(id),
        }

        id
    }

    fn insert_entry(&mut self, segments: &[&str], entry: &CostEntry) {
        let last = segments.len().saturating_sub(1);
        let mut parent = None;
        let mut built = String::new();

        for (i, segment) in segments.iter().enumerate() {
            if !built.is_empty() {
                built.push(PATH_SEPARATOR);
            }
            built.push_str(segment);

            let id = self.child_or_insert(parent, segment, &built, i == last);
            let node = &mut self.nodes[id.0];
            node.cost += entry.cost;
            node.count = node.count.saturating_add(entry.count);

            if i == last {
                node.direct_cost = entry.cost;
                node.direct_count = entry.count;
            }

            parent = Some(id);
        }
    }
}

impl Index<NodeId> for CostTree {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }
}

/// Split a flat key into its non-empty segments
///
/// Leading, trailing and repeated separators are ignored.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Build the aggregated tree for a flat cost map
///
/// **Public** - main entry point for aggregation
///
/// Keys with no segments are skipped. Keys that normalize to the same
/// path (`A/B`, `/A//B/`) share a node; the later entry's figures replace
/// the earlier ones, so a node's totals never count a replaced entry.
pub fn build_tree(flat: &FlatCostMap) -> CostTree {
    debug!("Building cost tree from {} flat entries", flat.len());

    // Collapse keys that normalize to the same path before walking, keeping
    // first-seen order so node creation matches the document
    let mut entries: Vec<(Vec<&str>, CostEntry)> = Vec::with_capacity(flat.len());
    let mut positions: HashMap<Vec<&str>, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (key, entry) in flat.iter() {
        let segments = split_path(key);
        if segments.is_empty() {
            debug!("Skipping flat key with no path segments: {:?}", key);
            skipped += 1;
            continue;
        }

        match positions.get(&segments) {
            Some(&pos) => {
                debug!("Flat key {:?} replaces an earlier entry for the same path", key);
                entries[pos].1 = *entry;
            }
            None => {
                positions.insert(segments.clone(), entries.len());
                entries.push((segments, *entry));
            }
        }
    }

    let mut tree = CostTree::default();
    for (segments, entry) in &entries {
        tree.insert_entry(segments, entry);
    }

    debug!(
        "Built cost tree: {} nodes, {} top-level, {} keys skipped",
        tree.len(),
        tree.roots().len(),
        skipped
    );

    tree
}

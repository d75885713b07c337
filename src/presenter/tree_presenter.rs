//! Presentation walk over an aggregated cost tree.
//!
//! The presenter turns a `CostTree` into display-ready records. It sorts
//! each level, converts and formats every figure, and hands out a
//! synthetic id per node so a render surface can remember which nodes
//! are collapsed. The walk itself holds no expand/collapse state.

use super::summary::Summary;
use crate::aggregator::{sorted_children, CostTree, NodeId, SortKey};
use crate::formatter::{format_number, percentage, FormatConfig, Severity, TimeUnit};
use crate::utils::config::DEFAULT_PRECISION;
use log::debug;
use serde::{Deserialize, Serialize};

/// Figures of the flat entry attached to an inner node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectFigures {
    pub cost: f64,
    pub count: u64,
    pub avg_cost: f64,
}

/// One display-ready node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationNode {
    /// Synthetic id, unique within one render pass
    pub id: u64,

    /// Segment name
    pub name: String,

    /// Full slash-joined path
    pub path: String,

    /// 0 for top-level nodes
    pub depth: usize,

    /// Converted and formatted subtree cost
    pub cost: f64,

    /// Converted and formatted cost per instance
    pub avg_cost: f64,

    /// Instances in the subtree
    pub count: u64,

    /// Share of the global total
    pub percentage: f64,

    pub severity: Severity,

    /// Has children to expand
    pub expandable: bool,

    /// Present only for nodes with children and a positive direct cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct: Option<DirectFigures>,

    /// Child records, already sorted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PresentationNode>,
}

impl PresentationNode {
    /// Element id used by HTML render surfaces
    pub fn dom_id(&self) -> String {
        format!("node{}", self.id)
    }
}

/// Everything one render pass produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub summary: Summary,
    pub nodes: Vec<PresentationNode>,
}

impl Presentation {
    /// Total number of records, at every depth
    pub fn node_count(&self) -> usize {
        flatten(&self.nodes).len()
    }
}

/// Flatten nested records into pre-order sequence
pub fn flatten(nodes: &[PresentationNode]) -> Vec<&PresentationNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&PresentationNode> = nodes.iter().rev().collect();

    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }

    out
}

/// Settings shared by every level of one walk
struct WalkContext<'a> {
    sort: SortKey,
    unit: &'a TimeUnit,
    config: &'a FormatConfig,
    converted_total: f64,
}

/// Walks a cost tree and emits presentation records
#[derive(Debug, Default)]
pub struct TreePresenter {
    next_id: u64,
}

impl TreePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present the whole tree
    ///
    /// **Public** - main entry point for a render pass
    ///
    /// # Arguments
    /// * `tree` - Aggregated tree for the selected mode
    /// * `total_cost` - Raw total of the selected flat map; every node's
    ///   percentage is measured against this one figure
    /// * `sort` - Ranking applied at every level
    /// * `unit` - Display unit
    /// * `config` - Number formatting switches
    ///
    /// Ids restart at 1 on every call, so presenting the same tree twice
    /// yields identical records.
    pub fn present(
        &mut self,
        tree: &CostTree,
        total_cost: f64,
        sort: SortKey,
        unit: &TimeUnit,
        config: &FormatConfig,
    ) -> Vec<PresentationNode> {
        self.next_id = 0;

        let ctx = WalkContext {
            sort,
            unit,
            config,
            converted_total: unit.convert(total_cost),
        };

        let nodes = self.present_level(tree, tree.roots(), &ctx, 0);
        debug!("Presented {} nodes sorted by {}", self.next_id, sort);
        nodes
    }

    /// Highest id handed out by the last pass
    pub fn last_id(&self) -> u64 {
        self.next_id
    }

    fn present_level(
        &mut self,
        tree: &CostTree,
        siblings: &[NodeId],
        ctx: &WalkContext<'_>,
        depth: usize,
    ) -> Vec<PresentationNode> {
        sorted_children(tree, siblings, ctx.sort)
            .into_iter()
            .map(|id| self.present_node(tree, id, ctx, depth))
            .collect()
    }

    fn present_node(
        &mut self,
        tree: &CostTree,
        id: NodeId,
        ctx: &WalkContext<'_>,
        depth: usize,
    ) -> PresentationNode {
        self.next_id += 1;
        let synthetic_id = self.next_id;

        let node = &tree[id];
        let display =
            |raw: f64| format_number(ctx.unit.convert(raw), DEFAULT_PRECISION, ctx.config);

        let converted_cost = ctx.unit.convert(node.cost);
        let pct = percentage(converted_cost, ctx.converted_total, ctx.config);
        let expandable = node.has_children();

        let direct = (expandable && node.direct_cost > 0.0).then(|| DirectFigures {
            cost: display(node.direct_cost),
            count: node.direct_count,
            avg_cost: display(node.direct_average_cost()),
        });

        let children = self.present_level(tree, &node.children, ctx, depth + 1);

        PresentationNode {
            id: synthetic_id,
            name: node.name.clone(),
            path: node.path.clone(),
            depth,
            cost: format_number(converted_cost, DEFAULT_PRECISION, ctx.config),
            avg_cost: display(node.average_cost()),
            count: node.count,
            percentage: pct,
            severity: Severity::from_percentage(pct),
            expandable,
            direct,
            children,
        }
    }
}

/// Present a tree with a fresh presenter
pub fn present_tree(
    tree: &CostTree,
    total_cost: f64,
    sort: SortKey,
    unit: &TimeUnit,
    config: &FormatConfig,
) -> Vec<PresentationNode> {
    TreePresenter::new().present(tree, total_cost, sort, unit, config)
}

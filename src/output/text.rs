//! Plain-text rendering of a presentation for the terminal.
//!
//! This is the CLI's render surface. Every node is printed expanded;
//! `max_depth` stands in for collapsing.

use crate::formatter::Severity;
use crate::presenter::{Presentation, PresentationNode, Summary};
use colored::{ColoredString, Colorize};

/// Text rendering switches
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    /// Deepest level printed (0 = top-level only); `None` prints all
    pub max_depth: Option<usize>,

    /// Colour node names by severity
    pub color: bool,
}

/// Render the summary header and the tree
pub fn render_text(presentation: &Presentation, options: &TextOptions) -> String {
    let mut lines = render_summary(&presentation.summary);
    lines.push(String::new());

    if presentation.nodes.is_empty() {
        lines.push("  (no entries)".to_string());
    }

    let unit = presentation.summary.time_unit.label();
    for node in &presentation.nodes {
        render_node(node, unit, options, &mut lines);
    }

    lines.join("\n")
}

/// Summary header lines
pub fn render_summary(summary: &Summary) -> Vec<String> {
    let unit = summary.time_unit.label();
    let rule = "=".repeat(summary.title.chars().count());

    vec![
        summary.title.clone(),
        rule,
        format!(
            "Total Time:      {} {} ({}s)",
            summary.total_cost, unit, summary.total_cost_seconds
        ),
        format!("Total Instances: {}", summary.total_count),
        format!("Total Types:     {}", summary.types),
        format!("Average Cost:    {} {} per instance", summary.avg_cost, unit),
        format!("Sorting by:      {}", summary.sort_description()),
    ]
}

fn render_node(
    node: &PresentationNode,
    unit: &str,
    options: &TextOptions,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(node.depth);
    let collapsed = options.max_depth.is_some_and(|max| node.depth >= max);

    let marker = match (node.expandable, collapsed) {
        (false, _) => " ",
        (true, false) => "▼",
        (true, true) => "▶",
    };

    let mut line = format!(
        "{}{} {} - {}{} ({}x) {}{} avg",
        indent,
        marker,
        paint(&node.name, node.severity, options.color),
        node.cost,
        unit,
        node.count,
        node.avg_cost,
        unit
    );

    if let Some(direct) = &node.direct {
        line.push_str(&format!(
            " (direct: {}{}, {}x, {}{} avg)",
            direct.cost, unit, direct.count, direct.avg_cost, unit
        ));
    }

    line.push_str(&format!(" ({}%)", node.percentage));
    lines.push(line);

    if !collapsed {
        for child in &node.children {
            render_node(child, unit, options, lines);
        }
    }
}

fn paint(name: &str, severity: Severity, color: bool) -> ColoredString {
    if !color {
        return name.normal();
    }
    match severity {
        Severity::High => name.red().bold(),
        Severity::Medium => name.yellow(),
        Severity::Low => name.green(),
    }
}

//! Summary statistics over the selected flat map.

use crate::aggregator::SortKey;
use crate::formatter::{average, format_number, FormatConfig, TimeUnit};
use crate::parser::schema::{FlatCostMap, Mode};
use crate::utils::config::{AVERAGE_PRECISION, DECISECONDS_PER_SECOND, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};

/// Header figures for one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mode: Mode,
    pub sort: SortKey,
    pub time_unit: TimeUnit,

    /// "Initialization Cost Analysis" or its late variant
    pub title: String,

    /// Converted and formatted total cost
    pub total_cost: f64,

    /// Total cost in seconds, whatever the selected unit
    pub total_cost_seconds: f64,

    /// Total instance count
    pub total_count: u64,

    /// Number of distinct flat keys
    pub types: usize,

    /// Converted cost per instance, formatted with extra precision
    pub avg_cost: f64,
}

impl Summary {
    /// Label for the active ranking
    pub fn sort_description(&self) -> &'static str {
        self.sort.description()
    }
}

pub fn title_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Init => "Initialization Cost Analysis",
        Mode::Late => "Late Initialization Cost Analysis",
    }
}

/// Compute the summary for a flat map
///
/// Keys that the tree build skips still count here: the summary
/// describes the flat map as supplied.
pub fn summarize(
    flat: &FlatCostMap,
    mode: Mode,
    sort: SortKey,
    unit: &TimeUnit,
    config: &FormatConfig,
) -> Summary {
    let total_cost = flat.total_cost();
    let total_count = flat.total_count();

    Summary {
        mode,
        sort,
        time_unit: unit.clone(),
        title: title_for(mode).to_string(),
        total_cost: format_number(unit.convert(total_cost), DEFAULT_PRECISION, config),
        total_cost_seconds: format_number(
            total_cost / DECISECONDS_PER_SECOND,
            DEFAULT_PRECISION,
            config,
        ),
        total_count,
        types: flat.len(),
        avg_cost: format_number(
            unit.convert(average(total_cost, total_count)),
            AVERAGE_PRECISION,
            config,
        ),
    }
}

use crate::parser::{read_cost_data, Mode};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a cost data document and print per-mode totals
pub fn validate_data_file(file_path: PathBuf) -> Result<()> {
    println!("Validating cost data: {}", file_path.display());

    let data = read_cost_data(&file_path)
        .with_context(|| format!("Invalid cost data in {}", file_path.display()))?;

    let Some(data) = data else {
        println!("✓ Valid document (null, no data)");
        return Ok(());
    };

    println!("✓ Valid cost data JSON");
    for mode in [Mode::Init, Mode::Late] {
        let flat = data.select(mode);
        println!(
            "  {}: {} keys, total cost {} ds, {} instances",
            mode,
            flat.len(),
            flat.total_cost(),
            flat.total_count()
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Cost Tree Schemas");
    println!("Report Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Input document:");
        println!("  init: object             - path -> {{cost, count}} for initialization");
        println!("  late: object             - path -> {{cost, count}} for late initialization");
        println!("    cost: number           - Cost in deciseconds (missing = 0)");
        println!("    count: number          - Instance count (missing = 0)");
        println!();
        println!("Report:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string     - RFC 3339 timestamp");
        println!("  presentation.summary     - Totals for the selected mode");
        println!("  presentation.nodes       - Sorted tree records");
        println!("    id: number             - Synthetic id, pre-order from 1");
        println!("    cost / avg_cost: number - Converted, formatted figures");
        println!("    percentage: number     - Share of the global total");
        println!("    severity: string       - low | medium | high");
        println!("    direct: object?        - Own entry of an inner node");
        println!("    children: array?       - Child records");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Cost Tree v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Aggregates flat slash-delimited cost maps into sortable breakdown trees.");
}

//! Selection report formatting.
//!
//! Pure functions: (SelectionReport, OutputFormat) to String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, SelectionReport};

/// Format a selection report for output.
pub fn format_selection(report: &SelectionReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

/// Format only the chosen indices, one per line.
///
/// Useful when labels contain spaces and the output feeds a script.
pub fn format_indices(report: &SelectionReport) -> String {
    let mut out = String::new();
    for item in &report.chosen {
        out.push_str(&format!("{}\n", item.index));
    }
    out
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

/// One chosen label per line, nothing else. Pipe-friendly.
fn format_human(report: &SelectionReport) -> String {
    let mut out = String::new();
    for item in &report.chosen {
        out.push_str(&format!("{}\n", item.label));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &SelectionReport) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize selection report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

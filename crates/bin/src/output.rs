//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use dotcollection::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals
    Human,
    /// One JSON document per command
    Json,
}

/// Renders a value for the terminal: text bare, everything else as JSON.
pub fn human_value(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        other => other.to_json_string(),
    }
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    println!("{}", format_row(headers.iter().copied(), &widths));
    for row in rows {
        println!("{}", format_row(row.iter().map(String::as_str), &widths));
    }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    line.join("  ").trim_end().to_string()
}

/// Shortens a rendered value to `max` characters for table cells.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

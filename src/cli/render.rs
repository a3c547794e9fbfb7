//! Plain-text rendering for CLI output
//!
//! Pure formatting: these functions build strings, the command layer prints
//! them.

use crate::report::{ActiveFilter, ReportRecord};

const COLUMNS: [&str; 8] = [
    "ID", "DATE", "EMPLOYEE", "ASSET", "TYPE", "EVENT", "MIN", "STATUS",
];

/// Renders one page of records as an aligned table
pub fn table(records: &[&ReportRecord]) -> String {
    let mut rows: Vec<[String; 8]> = Vec::with_capacity(records.len());
    for r in records {
        rows.push([
            r.id.to_string(),
            r.date.to_string(),
            r.employee_name.clone(),
            r.asset_name.clone(),
            r.asset_type.as_str().to_string(),
            r.event_type.as_str().to_string(),
            r.duration_minutes.to_string(),
            r.status.as_str().to_string(),
        ]);
    }

    let mut widths: [usize; 8] = [0; 8];
    for (i, header) in COLUMNS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, header) in COLUMNS.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&pad(header, widths[i]));
    }
    out.push('\n');
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&pad(cell, widths[i]));
        }
        out.push('\n');
    }
    out
}

/// Renders the pagination footer, e.g. `page 2/5 (117 records)`
pub fn footer(page: usize, total_pages: usize, filtered_count: usize) -> String {
    format!("page {page}/{total_pages} ({filtered_count} records)")
}

/// Renders active-filter chips, one per line
pub fn chips(chips: &[ActiveFilter]) -> String {
    if chips.is_empty() {
        return "no active filters\n".to_string();
    }
    let mut out = String::new();
    for chip in chips {
        out.push_str(&format!("[{}] {}: {}\n", chip.id, chip.label, chip.value));
    }
    out
}

/// Pads with spaces on the right, by character count
fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut out = String::with_capacity(width);
    out.push_str(s);
    for _ in len..width {
        out.push(' ');
    }
    out
}

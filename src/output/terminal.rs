//! Terminal output utilities.
//!
//! Provides formatting helpers and the conflict table for terminal output.

use crate::models::{Conflict, Severity};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One table line per conflict, without colour.
pub fn format_conflict_row(i: usize, conflict: &Conflict) -> String {
    let [a, b] = &conflict.resources;
    format!(
        "{cnt},{severity},{kind},{cidr_a},{name_a},{cidr_b},{name_b},{description}",
        cnt = format_field(i, 5),
        severity = format_field(conflict.severity, 10),
        kind = format_field(conflict.conflict_type, 10),
        cidr_a = format_field(&a.cidr, 20),
        name_a = format_field(&a.name, 24),
        cidr_b = format_field(&b.cidr, 20),
        name_b = format_field(&b.name, 24),
        description = format_field(&conflict.description, 0),
    )
}

/// Print the conflict table to stdout, critical rows in red and warnings in yellow.
pub fn print_conflicts(conflicts: &[Conflict]) {
    if conflicts.is_empty() {
        println!("{}", "No conflicts detected.".green());
        return;
    }

    println!(
        r#""cnt", "severity",  "type",        "cidr_a",                "name_a",           "cidr_b",                "name_b",  "description""#
    );
    for (i, conflict) in conflicts.iter().enumerate() {
        let row = format_conflict_row(i + 1, conflict);
        match conflict.severity {
            Severity::Critical => println!("{}", row.red()),
            Severity::Warning => println!("{}", row.yellow()),
        }
    }
    for conflict in conflicts
        .iter()
        .filter(|c| c.severity == Severity::Critical)
    {
        println!("#{}# {} {}", "IMPACT".on_red(), conflict.id, conflict.impact);
    }
}

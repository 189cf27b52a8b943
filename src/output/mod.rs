//! Output formatting for conflict data.
//!
//! This module handles formatting and outputting conflicts:
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::conflicts_to_json;
pub use terminal::{format_conflict_row, format_field, print_conflicts};

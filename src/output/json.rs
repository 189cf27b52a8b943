//! JSON output for the presentation layer.

use crate::models::Conflict;
use std::error::Error;

/// Serialize conflicts as a pretty JSON array (`[]` when there are none).
pub fn conflicts_to_json(conflicts: &[Conflict]) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(conflicts)
        .map_err(|e| format!("Error serializing conflicts: {e}").into())
}

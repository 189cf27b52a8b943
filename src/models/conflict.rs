//! Conflict records produced by the overlap scan.

use super::AddressRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship between two CIDRs as seen from the first one.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CidrRelation {
    /// Disjoint, different families, unparsable, or a partial IPv6 overlap.
    #[serde(rename = "none")]
    Unrelated,
    /// Shared addresses, neither contains the other (IPv4 only).
    Overlap,
    /// First range lies completely inside the second.
    Subset,
    /// First range completely contains the second.
    Superset,
}

impl CidrRelation {
    /// The conflict this relation represents, if any.
    pub fn conflict_type(self) -> Option<ConflictType> {
        match self {
            CidrRelation::Unrelated => None,
            CidrRelation::Overlap => Some(ConflictType::Overlap),
            CidrRelation::Subset => Some(ConflictType::Subset),
            CidrRelation::Superset => Some(ConflictType::Superset),
        }
    }
}

/// Kind of collision reported for a pair of ranges.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConflictType {
    /// Partial overlap.
    Overlap,
    /// First range lies inside the second.
    Subset,
    /// First range contains the second.
    Superset,
}

impl ConflictType {
    /// Containment is critical, a partial overlap is a warning.
    pub fn severity(self) -> Severity {
        match self {
            ConflictType::Subset | ConflictType::Superset => Severity::Critical,
            ConflictType::Overlap => Severity::Warning,
        }
    }
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConflictType::Overlap => "overlap",
            ConflictType::Subset => "subset",
            ConflictType::Superset => "superset",
        };
        f.write_str(s)
    }
}

/// How urgently a conflict needs re-addressing.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Critical => f.write_str("critical"),
        }
    }
}

/// Two address ranges that collide.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// `conflict-{idA}-{idB}`, URL safe, at most 64 chars.
    pub id: String,
    /// Derived from `conflict_type`.
    pub severity: Severity,
    #[serde(rename = "type")]
    pub conflict_type: ConflictType,
    /// One sentence naming both ranges and their relation.
    pub description: String,
    /// Snapshots of both ranges in comparison order.
    pub resources: [AddressRange; 2],
    /// Consequence of leaving the conflict in place.
    pub impact: String,
    /// When the scan built this record.
    pub detected_at: DateTime<Utc>,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity, self.conflict_type, self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_type() {
        assert_eq!(ConflictType::Subset.severity(), Severity::Critical);
        assert_eq!(ConflictType::Superset.severity(), Severity::Critical);
        assert_eq!(ConflictType::Overlap.severity(), Severity::Warning);
    }

    #[test]
    fn test_relation_serializes_none() {
        assert_eq!(
            serde_json::to_string(&CidrRelation::Unrelated).unwrap(),
            "\"none\""
        );
        assert_eq!(
            serde_json::to_string(&CidrRelation::Superset).unwrap(),
            "\"superset\""
        );
        assert_eq!(CidrRelation::Unrelated.conflict_type(), None);
    }
}

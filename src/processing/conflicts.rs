//! Conflict detection across a list of address ranges.
//!
//! Every unordered pair is compared once with [`classify_overlap`]; each
//! nested or overlapping pair becomes a [`Conflict`].

use super::overlap::classify_overlap;
use crate::models::{AddressRange, Conflict, ConflictType, Severity};
use chrono::Utc;
use itertools::Itertools;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Longest conflict identifier, in characters.
pub const MAX_CONFLICT_ID_LEN: usize = 64;

/// Matches every character not allowed in a conflict identifier.
static CONFLICT_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_conflict_id_regex() -> &'static Regex {
    CONFLICT_ID_REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").expect("Invalid Regex"))
}

/// Find all CIDR conflicts among `ranges`.
///
/// Pairs are evaluated in input order (`i < j`) and a pair of identifiers is
/// only evaluated once, even when the caller passes duplicates. Ranges that
/// don't parse produce no conflicts.
pub fn find_conflicts(ranges: &[AddressRange]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let mut checked: HashSet<(&str, &str)> = HashSet::new();

    for (range_a, range_b) in ranges.iter().tuple_combinations() {
        let pair_key = if range_a.id <= range_b.id {
            (range_a.id.as_str(), range_b.id.as_str())
        } else {
            (range_b.id.as_str(), range_a.id.as_str())
        };
        if !checked.insert(pair_key) {
            log::trace!("pair {pair_key:?} already checked");
            continue;
        }

        let relation = classify_overlap(&range_a.cidr, &range_b.cidr);
        if let Some(conflict_type) = relation.conflict_type() {
            log::debug!("{conflict_type}: {} <-> {}", range_a.cidr, range_b.cidr);
            conflicts.push(build_conflict(range_a, range_b, conflict_type));
        }
    }

    log::info!(
        "Compared {} ranges ({} pairs), found {} conflict(s)",
        ranges.len(),
        checked.len(),
        conflicts.len()
    );
    conflicts
}

/// Build the conflict record for an already classified pair.
pub fn build_conflict(
    range_a: &AddressRange,
    range_b: &AddressRange,
    conflict_type: ConflictType,
) -> Conflict {
    let same_subscription = range_a.subscription_id == range_b.subscription_id;
    Conflict {
        id: conflict_id(&range_a.id, &range_b.id),
        severity: conflict_type.severity(),
        conflict_type,
        description: conflict_description(range_a, range_b, conflict_type),
        resources: [range_a.clone(), range_b.clone()],
        impact: impact_description(conflict_type, same_subscription),
        detected_at: Utc::now(),
    }
}

/// `conflict-{id_a}-{id_b}` with everything but ASCII letters and digits
/// replaced by `-`, cut to [`MAX_CONFLICT_ID_LEN`].
pub fn conflict_id(id_a: &str, id_b: &str) -> String {
    let raw = format!("conflict-{id_a}-{id_b}");
    get_conflict_id_regex()
        .replace_all(&raw, "-")
        .chars()
        .take(MAX_CONFLICT_ID_LEN)
        .collect()
}

fn conflict_description(
    range_a: &AddressRange,
    range_b: &AddressRange,
    conflict_type: ConflictType,
) -> String {
    match conflict_type {
        ConflictType::Subset => format!(
            "{} is completely contained within {}",
            range_a.cidr, range_b.cidr
        ),
        ConflictType::Superset => {
            format!("{} completely contains {}", range_a.cidr, range_b.cidr)
        }
        ConflictType::Overlap => format!(
            "{} and {} have overlapping address ranges",
            range_a.cidr, range_b.cidr
        ),
    }
}

fn impact_description(conflict_type: ConflictType, same_subscription: bool) -> String {
    let base = match conflict_type.severity() {
        Severity::Critical => {
            "Cannot peer these ranges; routing conflicts if connected via VPN/interconnect"
        }
        Severity::Warning => {
            "Partial address conflict may cause routing issues if peered or connected"
        }
    };

    if same_subscription {
        format!("{base}. Resources are in the same subscription - consider re-addressing.")
    } else {
        base.to_string()
    }
}

/// Log conflicts as warnings, one line per resource.
pub fn log_conflicts(conflicts: &[Conflict]) {
    if conflicts.is_empty() {
        log::info!("No CIDR conflicts found.");
        return;
    }

    let critical = conflicts
        .iter()
        .filter(|c| c.severity == Severity::Critical)
        .count();
    log::warn!(
        "Found {} CIDR conflict(s), {} critical:",
        conflicts.len(),
        critical
    );

    for conflict in conflicts {
        log::warn!("  {conflict}");
        for range in &conflict.resources {
            log::warn!(
                "    - {range}, Resource group: {}",
                range.resource_group
            );
        }
    }
}

//! CIDR overlap classification.
//!
//! Compares two address prefixes and reports whether one contains the
//! other or they partly share addresses. Malformed input never errors, it
//! simply classifies as [`CidrRelation::Unrelated`].

use crate::models::{is_ipv6_notation, Cidr, CidrRelation, Ipv4, Ipv6};

/// Usable host addresses in a prefix.
///
/// IPv4 subtracts the 5 Azure reserved addresses (floored at 0), IPv6 is
/// capped at 65534. Malformed input returns 0.
///
/// # Examples
/// ```
/// use azure_ipam::processing::compute_usable_addresses;
/// assert_eq!(compute_usable_addresses("10.0.0.0/24"), 251);
/// assert_eq!(compute_usable_addresses("not-a-cidr"), 0);
/// ```
pub fn compute_usable_addresses(cidr: &str) -> u64 {
    match cidr.parse::<Cidr>() {
        Ok(cidr) => cidr.usable_addresses(),
        Err(e) => {
            log::debug!("compute_usable_addresses('{cidr}') unparsable: {e}");
            0
        }
    }
}

/// Classify how `cidr_a` relates to `cidr_b`.
///
/// `Subset` means every address of `cidr_a` lies in `cidr_b`, `Superset`
/// the reverse. Partial overlap is only detected for IPv4.
pub fn classify_overlap(cidr_a: &str, cidr_b: &str) -> CidrRelation {
    // Different address families can't overlap
    if is_ipv6_notation(cidr_a) != is_ipv6_notation(cidr_b) {
        return CidrRelation::Unrelated;
    }

    let (a, b) = match (cidr_a.parse::<Cidr>(), cidr_b.parse::<Cidr>()) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("classify_overlap('{cidr_a}', '{cidr_b}') skipped: {e}");
            return CidrRelation::Unrelated;
        }
    };

    match (a, b) {
        (Cidr::V4(a), Cidr::V4(b)) => classify_v4(&a, &b),
        (Cidr::V6(a), Cidr::V6(b)) => classify_v6(&a, &b),
        _ => CidrRelation::Unrelated,
    }
}

fn classify_v4(a: &Ipv4, b: &Ipv4) -> CidrRelation {
    if a.is_in_subnet(b) {
        return CidrRelation::Subset;
    }
    if b.is_in_subnet(a) {
        return CidrRelation::Superset;
    }

    log::trace!(
        "compare {a} [{}-{}] with {b} [{}-{}]",
        a.lo(),
        a.hi(),
        b.lo(),
        b.hi()
    );
    if a.start() <= b.end() && b.start() <= a.end() {
        CidrRelation::Overlap
    } else {
        CidrRelation::Unrelated
    }
}

fn classify_v6(a: &Ipv6, b: &Ipv6) -> CidrRelation {
    if a.is_in_subnet(b) {
        CidrRelation::Subset
    } else if b.is_in_subnet(a) {
        CidrRelation::Superset
    } else {
        // IPv6 partial overlap is not detected
        CidrRelation::Unrelated
    }
}

//! Address range processing logic.
//!
//! This module contains the conflict engine and its helpers:
//! - [`overlap`] - CIDR parsing outcomes and pairwise classification
//! - [`conflicts`] - Conflict detection across a list of ranges
//! - [`ranges`] - Inventory to address-range conversion
//! - [`utilization`] - Subnet usage figures

mod conflicts;
mod overlap;
mod ranges;
mod utilization;

// Re-export public functions
pub use conflicts::{
    build_conflict, conflict_id, find_conflicts, log_conflicts, MAX_CONFLICT_ID_LEN,
};
pub use overlap::{classify_overlap, compute_usable_addresses};
pub use ranges::filter_subscriptions;
pub use utilization::{log_subnet_usage, subnet_usage, SubnetUsage};

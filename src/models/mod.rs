//! Domain models for the Azure IPAM scan.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`], [`Ipv6`] and [`Cidr`] - parsed address ranges
//! - [`AddressRange`] - a named range handed to conflict detection
//! - [`Conflict`] - the result of comparing two ranges
//! - [`VnetRecord`] and [`SubnetRecord`] - raw resource graph rows

mod address_range;
mod cidr;
mod conflict;
mod ipv4;
mod ipv6;
mod subnet;
mod vnet;

// Re-export public types
pub use address_range::{AddressRange, RangeKind};
pub use cidr::{is_ipv6_notation, Cidr};
pub use conflict::{CidrRelation, Conflict, ConflictType, Severity};
pub use ipv4::{get_cidr_mask, num_az_hosts, Ipv4, AZURE_RESERVED_IPS, MAX_LENGTH};
pub use ipv6::{Ipv6, MAX_LENGTH_V6, MAX_REPORTED_V6_HOSTS};
pub use subnet::SubnetRecord;
pub use vnet::VnetRecord;

//! Azure Virtual Network (VNet) data model.

use super::{AddressRange, RangeKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One VNet address prefix row from the resource graph.
///
/// The graph query expands `addressSpace.addressPrefixes`, so a VNet with
/// several prefixes shows up once per prefix with the same `id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VnetRecord {
    /// Resource ID of the virtual network.
    pub id: String,
    /// Name of the virtual network.
    pub name: String,
    /// Azure region location.
    pub location: String,
    /// Resource group holding the resource.
    pub resource_group: String,
    /// Azure subscription ID.
    pub subscription_id: String,
    /// One of the VNet address-space prefixes.
    pub address_prefix: String,
}

impl VnetRecord {
    /// The prefix as a conflict-scan input.
    pub fn address_range(&self) -> AddressRange {
        AddressRange {
            id: self.id.clone(),
            name: self.name.clone(),
            cidr: self.address_prefix.clone(),
            location: self.location.clone(),
            subscription_id: self.subscription_id.clone(),
            resource_group: self.resource_group.clone(),
            kind: RangeKind::Network,
        }
    }
}

impl fmt::Display for VnetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({}, {})",
            self.name, self.address_prefix, self.location, self.subscription_id
        )
    }
}

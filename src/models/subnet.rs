//! Azure subnet data model.

use super::{AddressRange, RangeKind};
use serde::{Deserialize, Serialize};

/// One subnet row from the resource graph.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SubnetRecord {
    /// Resource ID of the containing VNet.
    pub vnet_id: String,
    /// Name of the virtual network containing this subnet.
    pub vnet_name: String,
    /// Resource ID of the subnet.
    pub subnet_id: String,
    /// Name of the subnet.
    pub subnet_name: String,
    /// CIDR block of the subnet (None if not configured, or IPv6-only with `addressPrefixes`).
    pub address_prefix: Option<String>,
    /// Azure region location.
    pub location: String,
    /// Resource group holding the resource.
    pub resource_group: String,
    /// Azure subscription ID.
    pub subscription_id: String,
    /// Number of IP configurations (NICs) using this subnet.
    pub ip_configurations_count: Option<u32>,
}

impl SubnetRecord {
    /// The subnet as a conflict-scan input, if it has a prefix.
    pub fn address_range(&self) -> Option<AddressRange> {
        let cidr = self.address_prefix.as_ref()?;
        Some(AddressRange {
            id: self.subnet_id.clone(),
            name: self.subnet_name.clone(),
            cidr: cidr.clone(),
            location: self.location.clone(),
            subscription_id: self.subscription_id.clone(),
            resource_group: self.resource_group.clone(),
            kind: RangeKind::Subnet,
        })
    }
}

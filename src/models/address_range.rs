//! Named address range fed into conflict detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an [`AddressRange`] came from.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    /// A VNet address-space prefix.
    #[serde(alias = "vnet")]
    Network,
    /// A subnet address prefix.
    Subnet,
}

/// One address prefix of a VNet or subnet, tagged with its Azure metadata.
///
/// The `cidr` stays a string: inventory may carry malformed prefixes and
/// those must still reach the conflict scan (which ignores them).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressRange {
    /// Azure resource ID.
    pub id: String,
    /// Display name of the VNet or subnet.
    pub name: String,
    /// Address prefix, e.g. `10.0.0.0/24` or `fd00::/64`.
    pub cidr: String,
    /// Azure region location.
    pub location: String,
    /// Azure subscription ID.
    pub subscription_id: String,
    /// Resource group name.
    pub resource_group: String,
    #[serde(rename = "type")]
    pub kind: RangeKind,
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' [{}] ({}, {})",
            match self.kind {
                RangeKind::Network => "VNET",
                RangeKind::Subnet => "SUBNET",
            },
            self.name,
            self.cidr,
            self.location,
            self.subscription_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let range = AddressRange {
            id: "/subscriptions/s1/vnet-a".to_string(),
            name: "vnet-a".to_string(),
            cidr: "10.0.0.0/16".to_string(),
            location: "australiaeast".to_string(),
            subscription_id: "s1".to_string(),
            resource_group: "rg-net".to_string(),
            kind: RangeKind::Network,
        };
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(json["subscriptionId"], "s1");
        assert_eq!(json["resourceGroup"], "rg-net");
        assert_eq!(json["type"], "network");
    }

    #[test]
    fn test_vnet_alias() {
        let json = r#"{"id":"v1","name":"v1","cidr":"10.0.0.0/16","location":"l",
            "subscriptionId":"s","resourceGroup":"rg","type":"vnet"}"#;
        let range: AddressRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.kind, RangeKind::Network);
    }
}

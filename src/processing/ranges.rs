//! Turn the raw inventory into conflict-scan input.

use crate::azure::Inventory;
use crate::models::AddressRange;

impl Inventory {
    /// All VNet address prefixes, optionally followed by subnet prefixes.
    ///
    /// Subnets without an address prefix are skipped.
    pub fn address_ranges(&self, include_subnets: bool) -> Vec<AddressRange> {
        let mut ranges: Vec<AddressRange> = self
            .vnets
            .iter()
            .map(|vnet| {
                log::trace!("VNET: {vnet}");
                vnet.address_range()
            })
            .collect();

        if include_subnets {
            let before = ranges.len();
            ranges.extend(self.subnets.iter().filter_map(|s| s.address_range()));
            log::debug!(
                "Added {} of {} subnets to the scan",
                ranges.len() - before,
                self.subnets.len()
            );
        }

        log::info!(
            "Built {} address ranges from {} VNet prefixes",
            ranges.len(),
            self.vnets.len()
        );
        ranges
    }
}

/// Keep only ranges in the given subscriptions. An empty list keeps everything.
pub fn filter_subscriptions(
    ranges: Vec<AddressRange>,
    subscriptions: &[String],
) -> Vec<AddressRange> {
    if subscriptions.is_empty() {
        return ranges;
    }

    let original_count = ranges.len();
    let ranges: Vec<AddressRange> = ranges
        .into_iter()
        .filter(|r| subscriptions.contains(&r.subscription_id))
        .collect();

    let filtered_count = original_count - ranges.len();
    if filtered_count > 0 {
        log::info!(
            "Filtered out {} ranges outside subscriptions {:?}",
            filtered_count,
            subscriptions
        );
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RangeKind, SubnetRecord, VnetRecord};

    fn inventory() -> Inventory {
        Inventory {
            vnets: vec![
                VnetRecord {
                    id: "/s1/vnet-hub".to_string(),
                    name: "vnet-hub".to_string(),
                    subscription_id: "s1".to_string(),
                    address_prefix: "10.0.0.0/16".to_string(),
                    ..Default::default()
                },
                VnetRecord {
                    id: "/s2/vnet-spoke".to_string(),
                    name: "vnet-spoke".to_string(),
                    subscription_id: "s2".to_string(),
                    address_prefix: "10.1.0.0/16".to_string(),
                    ..Default::default()
                },
            ],
            subnets: vec![
                SubnetRecord {
                    subnet_id: "/s1/vnet-hub/snet-a".to_string(),
                    subscription_id: "s1".to_string(),
                    address_prefix: Some("10.0.1.0/24".to_string()),
                    ..Default::default()
                },
                SubnetRecord {
                    subnet_id: "/s1/vnet-hub/snet-empty".to_string(),
                    subscription_id: "s1".to_string(),
                    address_prefix: None,
                    ..Default::default()
                },
            ],
        }
    }

    #[test]
    fn test_address_ranges_vnets_only() {
        let ranges = inventory().address_ranges(false);
        assert_eq!(ranges.len(), 2);
        assert!(ranges.iter().all(|r| r.kind == RangeKind::Network));
    }

    #[test]
    fn test_address_ranges_with_subnets() {
        let ranges = inventory().address_ranges(true);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[2].kind, RangeKind::Subnet);
        assert_eq!(ranges[2].cidr, "10.0.1.0/24");
    }

    #[test]
    fn test_filter_subscriptions() {
        let ranges = inventory().address_ranges(true);
        assert_eq!(filter_subscriptions(ranges.clone(), &[]).len(), 3);

        let only_s2 = filter_subscriptions(ranges, &["s2".to_string()]);
        assert_eq!(only_s2.len(), 1);
        assert_eq!(only_s2[0].name, "vnet-spoke");
    }
}

//! Subnet utilization figures.

use super::overlap::compute_usable_addresses;
use crate::models::SubnetRecord;

/// Address usage of a single subnet.
#[derive(Debug, Clone, PartialEq)]
pub struct SubnetUsage {
    pub subnet_name: String,
    pub vnet_name: String,
    pub address_prefix: String,
    /// IP configurations (NICs, private endpoints, ...) attached.
    pub used_ips: u64,
    /// Usable addresses after the Azure reservation.
    pub total_ips: u64,
    /// `used / total * 100`, one decimal.
    pub utilization_percent: f64,
}

impl SubnetUsage {
    pub fn new(subnet: &SubnetRecord) -> SubnetUsage {
        let address_prefix = subnet.address_prefix.clone().unwrap_or_default();
        let total_ips = compute_usable_addresses(&address_prefix);
        let used_ips = u64::from(subnet.ip_configurations_count.unwrap_or(0));
        let utilization_percent = if total_ips > 0 {
            (used_ips as f64 / total_ips as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        SubnetUsage {
            subnet_name: subnet.subnet_name.clone(),
            vnet_name: subnet.vnet_name.clone(),
            address_prefix,
            used_ips,
            total_ips,
            utilization_percent,
        }
    }
}

/// Usage for every subnet, busiest first.
pub fn subnet_usage(subnets: &[SubnetRecord]) -> Vec<SubnetUsage> {
    let mut usage: Vec<SubnetUsage> = subnets.iter().map(SubnetUsage::new).collect();
    usage.sort_by(|a, b| b.utilization_percent.total_cmp(&a.utilization_percent));
    usage
}

/// Log the `top` busiest subnets.
pub fn log_subnet_usage(usage: &[SubnetUsage], top: usize) {
    for u in usage.iter().take(top) {
        log::info!(
            "SUBNET '{}' in '{}' {} used {}/{} ({}%)",
            u.subnet_name,
            u.vnet_name,
            u.address_prefix,
            u.used_ips,
            u.total_ips,
            u.utilization_percent
        );
    }
}

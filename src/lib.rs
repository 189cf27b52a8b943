//! Azure IPAM conflict scan.
//!
//! Collects VNet and subnet address prefixes across subscriptions and
//! reports every pair of ranges that nest or overlap.
//!
//! # Modules
//! - [`models`] - Domain models (Ipv4, Ipv6, AddressRange, Conflict)
//! - [`azure`] - Azure CLI and Graph API interaction
//! - [`processing`] - Conflict detection and subnet usage
//! - [`output`] - Output formatting (terminal table, JSON)
//! - [`config`] - Runtime configuration

pub mod azure;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use models::AddressRange;
use std::error::Error;

/// Load the inventory (cache or Azure) and turn it into scan input.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file
/// * `subscriptions` - Subscription IDs to keep, empty keeps all
/// * `include_subnets` - Add subnet prefixes next to VNet prefixes
pub async fn get_address_ranges(
    cache_file: Option<&str>,
    subscriptions: &[String],
    include_subnets: bool,
) -> Result<Vec<AddressRange>, Box<dyn Error>> {
    let inventory = azure::read_inventory_cache(cache_file, subscriptions).await?;

    if include_subnets {
        let usage = processing::subnet_usage(&inventory.subnets);
        processing::log_subnet_usage(&usage, config::TOP_SUBNETS_LOGGED);
    }

    let ranges = inventory.address_ranges(include_subnets);
    // a cache may hold more subscriptions than asked for
    Ok(processing::filter_subscriptions(ranges, subscriptions))
}

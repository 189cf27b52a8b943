//! Cache management for inventory data.
//!
//! Provides caching functionality to avoid repeated Azure Graph API calls.

use super::graph::{run_az_cli_graph, Inventory};
use std::error::Error;
use std::path::Path;

/// Default cache file name for today (UTC).
pub fn default_cache_file() -> String {
    format!(
        "inventory_cache_{}.json",
        chrono::Utc::now().format("%Y-%m-%d")
    )
}

/// Read inventory from cache file, or fetch from Azure if cache doesn't exist.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses default naming.
/// * `subscriptions` - Subscriptions to query when the cache has to be filled.
///
/// # Returns
/// * `Ok(Inventory)` - The inventory from cache or Azure
/// * `Err` - If cache file specified but doesn't exist, or Azure query fails
pub async fn read_inventory_cache(
    cache_file: Option<&str>,
    subscriptions: &[String],
) -> Result<Inventory, Box<dyn Error>> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => default_cache_file(),
    };

    let inventory = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let inventory = run_az_cli_graph(subscriptions).await?;
            log::info!("Parsed JSON data received from Azure CLI");

            let json = serde_json::to_string(&inventory)
                .map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            inventory
        }
    };

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_inventory_cache() {
        let test_cache = "src/tests/test_data/inventory_test_cache_01.json";
        let data = read_inventory_cache(Some(test_cache), &[])
            .await
            .expect("Error reading inventory cache");
        assert_eq!(data.vnets.len(), 7, "Wrong vnet count in test sample.");
        assert_eq!(data.vnets[0].name, "vnet-hub-aue");
        assert_eq!(data.subnets.len(), 4);
        assert!(data.subnets[3].address_prefix.is_none());
    }

    #[tokio::test]
    async fn test_missing_cache_file() {
        let err = read_inventory_cache(Some("src/tests/test_data/does_not_exist.json"), &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_default_cache_file_name() {
        let name = default_cache_file();
        assert!(name.starts_with("inventory_cache_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "inventory_cache_2024-01-01.json".len());
    }
}

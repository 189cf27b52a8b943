//! Azure Resource Graph query execution.
//!
//! Handles querying Azure Resource Graph for VNet and subnet address prefixes.

use super::cli;
use crate::config;
use crate::models::{SubnetRecord, VnetRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

/// Skip-token parameter once the graph reports no further pages.
const LAST_PAGE: &str = "--skip-token null";

/// One row per VNet address-space prefix.
const VNET_QUERY: &str = r#"resources
        | where type =~ "microsoft.network/virtualnetworks"
        | mv-expand address_prefix = properties.addressSpace.addressPrefixes
        | project id
                ,name
                ,location
                ,resource_group=resourceGroup
                ,subscription_id=subscriptionId
                ,address_prefix=tostring(address_prefix)
        | sort by name asc"#;

/// One row per subnet.
const SUBNET_QUERY: &str = r#"resources
        | where type =~ "microsoft.network/virtualnetworks"
        | mv-expand subnet = properties.subnets
        | project vnet_id=id
                ,vnet_name=name
                ,subnet_id=tostring(subnet.id)
                ,subnet_name=tostring(subnet.name)
                ,address_prefix=tostring(subnet.properties.addressPrefix)
                ,location
                ,resource_group=resourceGroup
                ,subscription_id=subscriptionId
                ,ip_configurations_count=array_length(subnet.properties.ipConfigurations)
        | sort by vnet_name asc"#;

/// One page of an `az graph query` response.
#[derive(Deserialize, Debug)]
#[serde(bound = "T: DeserializeOwned")]
struct GraphPage<T> {
    data: Vec<T>,
    /// Token for pagination (if more results available).
    skip_token: Option<String>,
    /// Total number of records matching the query.
    total_records: Option<u32>,
    /// Count of records in this response.
    count: i32,
}

/// Everything the conflict scan needs from Azure.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Inventory {
    pub vnets: Vec<VnetRecord>,
    #[serde(default)]
    pub subnets: Vec<SubnetRecord>,
}

/// Fetch VNet prefixes and subnets, running both queries concurrently.
///
/// `subscriptions` scopes the queries; empty means every subscription the
/// logged-in account can see.
pub async fn run_az_cli_graph(subscriptions: &[String]) -> Result<Inventory, Box<dyn Error>> {
    let (vnets, subnets) = futures::try_join!(
        run_graph_query::<VnetRecord>("vnets", VNET_QUERY, subscriptions),
        run_graph_query::<SubnetRecord>("subnets", SUBNET_QUERY, subscriptions),
    )?;

    // tostring() of a missing addressPrefix (multi-prefix subnets) is ""
    let subnets = subnets
        .into_iter()
        .map(|mut s: SubnetRecord| {
            if s.address_prefix.as_deref().is_some_and(|p| p.is_empty() || p == "null") {
                s.address_prefix = None;
            }
            s
        })
        .collect();

    Ok(Inventory { vnets, subnets })
}

/// Execute one resource graph query, following skip tokens until done.
async fn run_graph_query<T: DeserializeOwned>(
    label: &str,
    query: &str,
    subscriptions: &[String],
) -> Result<Vec<T>, Box<dyn Error>> {
    let mut rows: Vec<T> = Vec::new();
    let mut skip_token_param: String = String::new();
    let mut count_blocks_returned = 0;
    let mut total: i32 = 0;

    let subscriptions_param = if subscriptions.is_empty() {
        String::new()
    } else {
        format!("--subscriptions {}", subscriptions.join(" "))
    };

    while skip_token_param != LAST_PAGE {
        let cmd = graph_query_command(query, &skip_token_param, &subscriptions_param);
        let output = cli::run(&cmd).await?;

        let json_parsed: GraphPage<T> = parse_graph_page(&output).map_err(|e| {
            log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
            format!("{label}: error parsing JSON block {count_blocks_returned}: {e}")
        })?;

        let skip_token_new = json_parsed
            .skip_token
            .clone()
            .unwrap_or_else(|| "null".to_string());
        let skip_token_new = format!("--skip-token {skip_token_new}");

        if skip_token_new == skip_token_param {
            return Err(format!("{label}: skip token not unique - possible infinite loop").into());
        }
        skip_token_param = skip_token_new;

        let count = json_parsed.count;
        total += count;
        rows.extend(json_parsed.data);

        log::info!(
            "{label}: got block#{count_blocks_returned:2} record_count=+{count:3} => {total:3} of {total_records:?}",
            total_records = json_parsed.total_records,
        );

        if let Some(pause) = page_pause(&skip_token_param) {
            tokio::time::sleep(pause).await;
        }
        count_blocks_returned += 1;
    }

    if usize::try_from(total).ok() != Some(rows.len()) {
        return Err(format!(
            "{label}: count mismatch: reported={} != received={}",
            total,
            rows.len()
        )
        .into());
    }

    log::info!("{label}: got {} records from az graph query", rows.len());
    Ok(rows)
}

fn graph_query_command(query: &str, skip_token_param: &str, subscriptions_param: &str) -> String {
    format!(
        "az graph query --first {page} {skip_token_param} {subscriptions_param} -q '{query}' --output json",
        page = config::GRAPH_PAGE_SIZE,
    )
}

/// Rate limiting pause before the next page, none after the last one.
fn page_pause(skip_token_param: &str) -> Option<Duration> {
    (skip_token_param != LAST_PAGE).then(|| Duration::from_millis(config::SLEEP_MSEC * 5))
}

fn parse_graph_page<T: DeserializeOwned>(output: &str) -> Result<GraphPage<T>, String> {
    let mut json_block_deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut json_block_deserializer)
        .map_err(|e| format!("path={} error={}", e.path(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_command_args() {
        let cmd = graph_query_command(VNET_QUERY, "", "");
        let args = cli::split_args(&cmd);
        assert_eq!(
            args,
            vec!["az", "graph", "query", "--first", "50", "-q", VNET_QUERY, "--output", "json"]
        );
    }

    #[test]
    fn test_next_page_command_args() {
        let cmd = graph_query_command(SUBNET_QUERY, "--skip-token abc", "--subscriptions s1 s2");
        let args = cli::split_args(&cmd);
        assert_eq!(args[5..10], ["--skip-token", "abc", "--subscriptions", "s1", "s2"]);
        assert_eq!(args[11], SUBNET_QUERY);
    }

    #[test]
    fn test_no_pause_after_last_page() {
        assert_eq!(page_pause(LAST_PAGE), None);
        assert_eq!(
            page_pause("--skip-token abc"),
            Some(Duration::from_millis(config::SLEEP_MSEC * 5))
        );
    }

    #[test]
    fn test_parse_vnet_page() {
        let json = r#"{
            "count": 2,
            "data": [
                {"id": "/s1/vnet-hub", "name": "vnet-hub", "location": "australiaeast",
                 "resource_group": "rg-net", "subscription_id": "s1", "address_prefix": "10.0.0.0/16"},
                {"id": "/s1/vnet-hub", "name": "vnet-hub", "location": "australiaeast",
                 "resource_group": "rg-net", "subscription_id": "s1", "address_prefix": "fd00:10::/48"}
            ],
            "skip_token": null,
            "total_records": 2
        }"#;
        let page: GraphPage<VnetRecord> = parse_graph_page(json).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.data[1].address_prefix, "fd00:10::/48");
        assert!(page.skip_token.is_none());
        assert_eq!(page.total_records, Some(2));
    }

    #[test]
    fn test_parse_error_has_path() {
        let json = r#"{"count": 1, "data": [{"id": 5}], "skip_token": null, "total_records": 1}"#;
        let err = parse_graph_page::<VnetRecord>(json).unwrap_err();
        assert!(err.contains("data[0].id"), "{err}");
    }

    #[test]
    fn test_parse_subnet_page() {
        let json = r#"{
            "count": 1,
            "data": [
                {"vnet_id": "/s1/vnet-hub", "vnet_name": "vnet-hub", "subnet_id": "/s1/vnet-hub/snet-a",
                 "subnet_name": "snet-a", "address_prefix": "10.0.1.0/24", "location": "australiaeast",
                 "resource_group": "rg-net", "subscription_id": "s1", "ip_configurations_count": 4}
            ],
            "skip_token": "abc",
            "total_records": 10
        }"#;
        let page: GraphPage<SubnetRecord> = parse_graph_page(json).unwrap();
        assert_eq!(page.data[0].ip_configurations_count, Some(4));
        assert_eq!(page.skip_token.as_deref(), Some("abc"));
    }
}

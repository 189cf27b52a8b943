//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded by `main`).

use std::env;

/// Base pause between graph pages, to stay under the resource graph throttle.
pub const SLEEP_MSEC: u64 = 200;

/// Rows requested per graph page.
pub const GRAPH_PAGE_SIZE: u32 = 50;

/// Busiest subnets logged when subnets are part of the scan.
pub const TOP_SUBNETS_LOGGED: usize = 10;

/// How conflicts are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// `IPAM_CACHE_FILE`: use this inventory cache instead of the dated default.
    pub cache_file: Option<String>,
    /// `IPAM_SUBSCRIPTIONS`: comma separated subscription IDs, empty means all.
    pub subscriptions: Vec<String>,
    /// `IPAM_INCLUDE_SUBNETS`: also scan subnet prefixes.
    pub include_subnets: bool,
    /// `IPAM_OUTPUT`: `table` or `json`.
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_file = lookup("IPAM_CACHE_FILE").filter(|f| !f.trim().is_empty());
        let subscriptions = lookup("IPAM_SUBSCRIPTIONS")
            .map(|s| parse_list(&s))
            .unwrap_or_default();
        let include_subnets = lookup("IPAM_INCLUDE_SUBNETS")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let output = match lookup("IPAM_OUTPUT").map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "json" => OutputFormat::Json,
            Some(v) if v != "table" && !v.is_empty() => {
                log::warn!("Unknown IPAM_OUTPUT '{v}', using table");
                OutputFormat::Table
            }
            _ => OutputFormat::Table,
        };

        Config {
            cache_file,
            subscriptions,
            include_subnets,
            output,
        }
    }
}

fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

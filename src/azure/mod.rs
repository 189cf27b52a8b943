//! Azure CLI and Graph API interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`cache`] - Caching of inventory data
//! - [`graph`] - Azure Resource Graph queries

mod cache;
mod cli;
mod graph;

// Re-export public types and functions
pub use cache::{default_cache_file, read_inventory_cache};
pub use cli::run;
pub use graph::{run_az_cli_graph, Inventory};

use azure_ipam::config::{Config, OutputFormat};
use azure_ipam::get_address_ranges;
use azure_ipam::output::{conflicts_to_json, print_conflicts};
use azure_ipam::processing::{find_conflicts, log_conflicts};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())
        .map_err(|e| format!("Error initializing log4rs: {e}"))?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = Config::from_env();
    log::debug!("{config:?}");

    let ranges = get_address_ranges(
        config.cache_file.as_deref(),
        &config.subscriptions,
        config.include_subnets,
    )
    .await?;

    let conflicts = find_conflicts(&ranges);
    log_conflicts(&conflicts);

    match config.output {
        OutputFormat::Json => println!("{}", conflicts_to_json(&conflicts)?),
        OutputFormat::Table => print_conflicts(&conflicts),
    }

    Ok(())
}

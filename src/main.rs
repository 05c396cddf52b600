use houzz_harvester_lib::{config, exporter, logger};
use houzz_harvester_lib::{CheckpointStore, ChromeClient, HarvestConfig, Harvester, Result};

use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();
    info!("Starting Houzz harvest...");

    let client = ChromeClient::connect(config::WEBDRIVER_URL).await?;
    let store = CheckpointStore::new(config::OUTPUT_JSON);
    let harvester = Harvester::new(client, store, HarvestConfig::default());

    let results = harvester.run().await?;
    info!("Harvest finished: {} businesses collected.", results.len());

    exporter::export_table(&results, config::OUTPUT_XLSX)?;
    info!("Excel created: {}", config::OUTPUT_XLSX);

    harvester.into_client().quit().await?;
    Ok(())
}

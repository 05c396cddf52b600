use std::time::Duration;

use log::{info, warn};

use crate::browser::PageClient;
use crate::checkpoint::CheckpointStore;
use crate::config;
use crate::error::Result;
use crate::extractor::{BusinessExtractor, BusinessRecord};
use crate::paginator;

/// Knobs for one harvest run. `Default` is the reference configuration from
/// `config`; tests shrink the range and zero the delays.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub base_url: String,
    pub start_index: usize,
    pub end_index: usize,
    pub index_step: usize,
    pub listing_settle: Duration,
    pub post_scroll_settle: Duration,
    pub business_settle: Duration,
    pub business_sleep: Duration,
    pub page_sleep: Duration,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        HarvestConfig {
            base_url: config::BASE_URL.to_string(),
            start_index: config::START_FI,
            end_index: config::END_FI,
            index_step: config::STEP,
            listing_settle: config::LISTING_SETTLE,
            post_scroll_settle: config::POST_SCROLL_SETTLE,
            business_settle: config::BUSINESS_SETTLE,
            business_sleep: config::BUSINESS_SLEEP,
            page_sleep: config::PAGE_SLEEP,
        }
    }
}

/// Drives the end-to-end pipeline: walk the listing pages, visit every newly
/// discovered business, extract, checkpoint, pace. Strictly sequential; the
/// only suspension points are navigations and fixed delays.
///
/// Navigation and storage errors are not caught here. They abort the run,
/// and that is safe: every saved record was already durable, so the next run
/// re-discovers the rest and skips what it has.
pub struct Harvester<C: PageClient> {
    client: C,
    store: CheckpointStore,
    extractor: BusinessExtractor,
    config: HarvestConfig,
}

impl<C: PageClient + Sync> Harvester<C> {
    pub fn new(client: C, store: CheckpointStore, config: HarvestConfig) -> Self {
        Harvester {
            client,
            store,
            extractor: BusinessExtractor::new(),
            config,
        }
    }

    /// Hands the page client back, e.g. to shut the browser session down
    /// after the run.
    pub fn into_client(self) -> C {
        self.client
    }

    pub async fn run(&self) -> Result<Vec<BusinessRecord>> {
        let mut results = self.store.load()?;
        let mut visited = CheckpointStore::derive_visited(&results);

        let pages = paginator::listing_urls(
            &self.config.base_url,
            self.config.start_index,
            self.config.end_index,
            self.config.index_step,
        );

        for (fi, list_url) in pages {
            info!("Listing page fi={}: {}", fi, list_url);
            let html = paginator::fetch_listing(
                &self.client,
                &list_url,
                self.config.listing_settle,
                self.config.post_scroll_settle,
            )
            .await?;

            let links = paginator::discover_business_links(&html, &list_url);
            info!("Found {} candidate businesses", links.len());

            for url in links {
                if visited.contains(&url) {
                    info!("Skip (saved): {}", url);
                    continue;
                }

                info!("Visiting: {}", url);
                self.client.navigate(&url).await?;
                self.client.wait(self.config.business_settle).await;
                let page = self.client.page_source().await?;

                match self.extractor.extract(&url, &page) {
                    Some(record) => {
                        self.store.append(&mut results, record)?;
                        visited.insert(url);
                        info!("Business saved ({} total)", results.len());
                    }
                    None => warn!("Business detail section not found: {}", url),
                }

                self.client.wait(self.config.business_sleep).await;
            }

            info!(
                "Listing page fi={} done. Sleeping {}s.",
                fi,
                self.config.page_sleep.as_secs()
            );
            self.client.wait(self.config.page_sleep).await;
        }

        Ok(results)
    }
}

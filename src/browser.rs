use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::{
    CapabilitiesHelper, ChromiumLikeCapabilities, DesiredCapabilities, PageLoadStrategy, WebDriver,
};

use crate::config;
use crate::error::Result;

/// The rendering capability the pipeline needs from a browser: navigate,
/// settle, trigger lazy loading, hand back the rendered markup. Everything
/// else (selectors, filtering, field extraction) happens outside the browser
/// on the returned page source.
#[async_trait]
pub trait PageClient {
    /// Navigate to `url`. Returns as soon as the markup is attached; it does
    /// not wait for the page to go network-idle.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Markup of the currently rendered page.
    async fn page_source(&self) -> Result<String>;

    /// Scroll the viewport to the bottom so lazily rendered content loads.
    async fn scroll_to_bottom(&self) -> Result<()>;

    /// Cooperative fixed delay.
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// `PageClient` backed by a Chrome session behind a WebDriver endpoint.
pub struct ChromeClient {
    driver: WebDriver,
}

impl ChromeClient {
    pub async fn connect(webdriver_url: &str) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_page_load_strategy(PageLoadStrategy::Eager)?;
        caps.add_arg("--headless=new")?;
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-setuid-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg("--disable-blink-features=AutomationControlled")?;
        caps.add_arg(&format!("--user-agent={}", config::USER_AGENT))?;
        caps.add_arg(&format!(
            "--window-size={},{}",
            config::WINDOW_WIDTH,
            config::WINDOW_HEIGHT
        ))?;

        let driver = WebDriver::new(webdriver_url, caps).await?;
        driver.set_page_load_timeout(config::NAV_TIMEOUT).await?;

        Ok(ChromeClient { driver })
    }

    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

#[async_trait]
impl PageClient for ChromeClient {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn page_source(&self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    async fn scroll_to_bottom(&self) -> Result<()> {
        self.driver
            .execute("window.scrollTo(0, document.body.scrollHeight);", Vec::new())
            .await?;
        Ok(())
    }
}

mod consts;
mod error;
mod parsing;
mod selectors;

use reqwest::Client;

use std::collections::BTreeSet;

pub use crate::consts::{PAGE_URLS, USER_AGENT};
pub use crate::error::Error;
use crate::error::Result;
pub use crate::parsing::*;

/// Client for fetching pages and scraping their image references.
#[derive(Debug, Clone)]
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(PageClient { client })
    }

    /// The underlying HTTP client, shared with the downloader.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetch a page and decode its body as UTF-8. Invalid bytes fail the page.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        let html = String::from_utf8(bytes.to_vec())?;
        Ok(html)
    }

    /// Fetch a page and extract the absolute URLs of its images.
    pub async fn scrape(&self, url: &str) -> Result<Vec<String>> {
        let html = self.fetch_page(url).await?;
        extract_image_urls(&html, url)
    }

    /// Scrape every page in turn and merge the results into one set.
    /// A page that fails contributes nothing.
    pub async fn collect_image_urls<S: AsRef<str>>(&self, pages: &[S]) -> BTreeSet<String> {
        let mut images = BTreeSet::new();
        for page in pages {
            let page = page.as_ref();
            tracing::info!("Scraping: {}", page);
            match self.scrape(page).await {
                Ok(urls) => {
                    tracing::debug!("Found {} image references on {}", urls.len(), page);
                    images.extend(urls);
                }
                Err(e) => tracing::warn!("Error scraping {}: {}", page, e),
            }
        }
        images
    }
}

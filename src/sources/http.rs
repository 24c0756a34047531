use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

use crate::errors::{PodcatcherError, PodcatcherResult};
use crate::sources::traits::FeedFetcher;

/// Some podcast hosts refuse requests without a browser user agent
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/65.0.3325.230 Safari/537.36";

pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpFeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for HttpFeedFetcher {
    fn fetch(&self, url: &str) -> PodcatcherResult<Vec<u8>> {
        tracing::debug!(url, "Fetching feed");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(PodcatcherError::FeedParse(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let bytes = response.bytes()?;
        Ok(bytes.to_vec())
    }
}

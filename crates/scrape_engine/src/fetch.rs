use std::time::Duration;

use log::debug;

use crate::ScrapeError;

/// Identifying User-Agent sent with the single request.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; MediumScraper/1.0)";
/// Overall deadline for the request, matching the mirror's slow responses.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// Process-wide read-only request configuration, passed into the fetcher
/// rather than held as shared state.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Performs the one outbound GET of a run.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ScrapeError> {
        reqwest::Client::builder()
            .user_agent(&self.settings.user_agent)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ScrapeError::Network(err.to_string()))
    }

    /// Fetch `url` and return the response body as text.
    ///
    /// Fails on any non-success status. There are no retries; a transport
    /// failure or timeout aborts the whole run.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| ScrapeError::InvalidInput(err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!("fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        return ScrapeError::Timeout(err.to_string());
    }
    ScrapeError::Network(err.to_string())
}

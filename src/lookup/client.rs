//! HTTP client for the public country list

use super::{parse_countries, CountryOption, CountrySource, LookupError};
use async_trait::async_trait;
use std::time::Duration;

/// Fetches the country list from a restcountries.com-compatible endpoint
pub struct RestCountriesClient {
    http: reqwest::Client,
    url: String,
}

impl RestCountriesClient {
    /// Create a client for `url`, failing requests that take longer than `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_countries(&self) -> Result<Vec<CountryOption>, LookupError> {
        tracing::debug!(url = %self.url, "fetching country list");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        let options = parse_countries(&body)?;
        tracing::info!(count = options.len(), "country list loaded");
        Ok(options)
    }
}

//! Remote country lookup
//!
//! Fetches the country list once per registration screen mount and turns it
//! into label/value options ordered by label.

mod client;
mod traits;

pub use client::RestCountriesClient;
pub use traits::CountrySource;

#[cfg(test)]
pub use traits::MockCountrySource;

use serde::Deserialize;
use std::cmp::Ordering;
use thiserror::Error;

/// Default endpoint for the country list
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";

/// A single dropdown entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub label: String,
    pub value: String,
}

impl CountryOption {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            value: name,
        }
    }
}

/// Errors raised while fetching the country list
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed country list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One element of the REST payload, `{"name": {"common": "..."}}`
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountry {
    pub name: RestCountryName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryName {
    pub common: String,
}

/// Decode a raw response body into sorted options
pub fn parse_countries(body: &str) -> Result<Vec<CountryOption>, LookupError> {
    let countries: Vec<RestCountry> = serde_json::from_str(body)?;
    Ok(into_options(countries))
}

/// Map countries to options and sort ascending by label
pub fn into_options(countries: Vec<RestCountry>) -> Vec<CountryOption> {
    let mut options: Vec<CountryOption> = countries
        .into_iter()
        .map(|c| CountryOption::new(c.name.common))
        .collect();
    sort_options(&mut options);
    options
}

/// Order options ascending by label
pub fn sort_options(options: &mut [CountryOption]) {
    options.sort_by(|a, b| compare_labels(&a.label, &b.label));
}

/// Case- and accent-insensitive label ordering, raw label as tiebreak
fn compare_labels(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(label: &str) -> String {
    label.chars().map(fold_char).collect()
}

// Latin-1 letters fold onto their base letter so "Åland" sorts with the A's
fn fold_char(c: char) -> char {
    match c {
        'À'..='Å' | 'à'..='å' => 'a',
        'Ç' | 'ç' => 'c',
        'È'..='Ë' | 'è'..='ë' => 'e',
        'Ì'..='Ï' | 'ì'..='ï' => 'i',
        'Ñ' | 'ñ' => 'n',
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' => 'o',
        'Ù'..='Ü' | 'ù'..='ü' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        _ => c.to_ascii_lowercase(),
    }
}

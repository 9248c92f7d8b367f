//! Trait abstraction for the country source to enable mocking in tests

use super::{CountryOption, LookupError};
use async_trait::async_trait;

/// Anything that can produce the country option list
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch every country, mapped to options and sorted by label
    async fn fetch_countries(&self) -> Result<Vec<CountryOption>, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_source_is_usable_as_shared_trait_object() {
        let mut mock = MockCountrySource::new();
        mock.expect_fetch_countries()
            .times(1)
            .returning(|| Ok(vec![CountryOption::new("Peru")]));
        let source: Arc<dyn CountrySource> = Arc::new(mock);

        let options = tokio_test::block_on(source.fetch_countries()).unwrap();
        assert_eq!(options, vec![CountryOption::new("Peru")]);
    }
}

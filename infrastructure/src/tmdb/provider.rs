//! TMDb adapter for the [`MovieProvider`] port.
//!
//! Talks to the TMDb v3 REST API with an API key passed as a query
//! parameter. Search returns the first result of page one (TMDb orders by
//! relevance); similar-movies listings are re-ranked through
//! [`rank_similar`] so that the filter-and-sort contract lives in one
//! place regardless of provider ordering.

use async_trait::async_trait;
use reelbot_application::{MovieProvider, ProviderError};
use reelbot_domain::{rank_similar, MovieRecord};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A paged TMDb listing; only the results matter here.
#[derive(Debug, Deserialize)]
struct ListingPage {
    #[serde(default)]
    results: Vec<MovieRecord>,
}

/// TMDb-backed movie provider.
pub struct TmdbProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<Option<T>, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        let mut params = vec![
            ("api_key", self.api_key.as_str()),
            ("language", "en-US"),
        ];
        params.extend_from_slice(extra_params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ProviderError::UnexpectedResponse(format!(
                "TMDb returned {} for {}",
                response.status(),
                path
            )));
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| ProviderError::UnexpectedResponse(e.to_string()))
    }
}

#[async_trait]
impl MovieProvider for TmdbProvider {
    async fn search(&self, title: &str) -> Result<Option<MovieRecord>, ProviderError> {
        debug!("Searching TMDb for '{}'", title);
        let page: Option<ListingPage> = self
            .get_json("/search/movie", &[("query", title), ("page", "1")])
            .await?;
        Ok(page.and_then(|p| p.results.into_iter().next()))
    }

    async fn details(&self, movie_id: u64) -> Result<Option<MovieRecord>, ProviderError> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }

    async fn similar(
        &self,
        movie_id: u64,
        min_score: f64,
    ) -> Result<Vec<MovieRecord>, ProviderError> {
        let page: Option<ListingPage> = self
            .get_json(&format!("/movie/{}/similar", movie_id), &[("page", "1")])
            .await?;
        let results = page.map(|p| p.results).unwrap_or_default();
        Ok(rank_similar(results, min_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_page_parses_tmdb_payload() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 27205,
                    "title": "Inception",
                    "vote_average": 8.8,
                    "release_date": "2010-07-16",
                    "overview": "Cobb steals secrets from dreams.",
                    "popularity": 29.1,
                    "adult": false,
                    "genre_ids": [28, 878]
                },
                {
                    "id": 64635,
                    "title": "Sparse Entry"
                }
            ],
            "total_pages": 3,
            "total_results": 55
        }"#;

        let page: ListingPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].id, 27205);
        assert_eq!(page.results[0].vote_average, 8.8);
        // unknown provider fields are ignored, missing ones defaulted
        assert_eq!(page.results[1].popularity, 0.0);
        assert_eq!(page.results[1].release_date, "");
    }

    #[test]
    fn test_listing_page_tolerates_missing_results() {
        let page: ListingPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }
}

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::transform::place_from_record;
use crate::domain::place::Place;
use crate::domain::ports::{FetchObserver, PlacesApi, TracingObserver};
use crate::utils::error::{PlacesError, Result};

/// Fallback category list used when the collection cannot be fetched, so a
/// category selector never ends up empty.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "tourism",
    "natural",
    "historic",
    "cultural",
    "entertainment",
    "sport",
    "religion",
];

/// HTTP client for the places collection endpoint. Cheap to clone; holds no
/// mutable state, so concurrent calls simply issue independent requests.
#[derive(Clone)]
pub struct PlacesClient {
    config: ClientConfig,
    client: reqwest::Client,
    observer: Arc<dyn FetchObserver>,
}

impl PlacesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: ClientConfig, observer: Arc<dyn FetchObserver>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(PlacesError::Network)?;

        Ok(Self {
            config,
            client,
            observer,
        })
    }

    fn places_url(&self) -> String {
        format!("{}/places", self.config.base_url.trim_end_matches('/'))
    }

    fn fail(&self, url: &str, error: PlacesError) -> PlacesError {
        self.observer.on_error(url, &error);
        error
    }
}

#[async_trait]
impl PlacesApi for PlacesClient {
    async fn fetch_all_places(&self) -> Result<Vec<Place>> {
        let url = self.places_url();
        self.observer.on_request(&url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Err(self.fail(&url, classify_transport_error(e))),
        };

        let status = response.status();
        self.observer.on_response(&url, status.as_u16());

        if !status.is_success() {
            return Err(self.fail(
                &url,
                PlacesError::Api {
                    status: status.as_u16(),
                },
            ));
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(self.fail(&url, PlacesError::Timeout)),
            Err(_) => return Err(self.fail(&url, PlacesError::MalformedResponse)),
        };

        let Value::Array(records) = body else {
            return Err(self.fail(&url, PlacesError::MalformedResponse));
        };

        tracing::debug!("Fetched {} place records", records.len());
        Ok(records.iter().map(place_from_record).collect())
    }

    async fn fetch_places_by_category(&self, category: &str) -> Result<Vec<Place>> {
        let places = self.fetch_all_places().await?;

        let category = category.trim();
        if category.is_empty() || category == "all" {
            return Ok(places);
        }

        let wanted = category.to_lowercase();
        Ok(places
            .into_iter()
            .filter(|place| place.category() == wanted)
            .collect())
    }

    async fn list_categories(&self) -> Vec<String> {
        match self.fetch_all_places().await {
            Ok(places) => places
                .iter()
                .map(|place| place.category().to_string())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            Err(e) => {
                tracing::warn!("Category fetch failed ({}), using default list", e);
                let mut categories: Vec<String> =
                    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
                categories.sort();
                categories
            }
        }
    }
}

fn classify_transport_error(error: reqwest::Error) -> PlacesError {
    if error.is_timeout() {
        PlacesError::Timeout
    } else {
        PlacesError::Network(error)
    }
}

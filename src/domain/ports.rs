use async_trait::async_trait;

use crate::domain::place::Place;
use crate::utils::error::{PlacesError, Result};

/// Read side of the exploration API, as consumed by a UI layer.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Fetches every place from the collection endpoint. One entity per raw
    /// record: records that fail validation come back as placeholders.
    async fn fetch_all_places(&self) -> Result<Vec<Place>>;

    /// Fetches all places, filtered by category. An empty filter or the
    /// literal `"all"` returns everything.
    async fn fetch_places_by_category(&self, category: &str) -> Result<Vec<Place>>;

    /// Distinct categories observed in the collection, sorted. Never fails:
    /// a fetch failure yields the fixed default category list instead.
    async fn list_categories(&self) -> Vec<String>;
}

/// Hook invoked around each outgoing request, so callers can observe the
/// request lifecycle without the client writing anywhere itself.
pub trait FetchObserver: Send + Sync {
    fn on_request(&self, url: &str);
    fn on_response(&self, url: &str, status: u16);
    fn on_error(&self, url: &str, error: &PlacesError);
}

/// Default observer: forwards lifecycle events to tracing.
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_request(&self, url: &str) {
        tracing::debug!("Making API request to: {}", url);
    }

    fn on_response(&self, url: &str, status: u16) {
        tracing::debug!("API response from {}: {}", url, status);
    }

    fn on_error(&self, url: &str, error: &PlacesError) {
        tracing::error!("API request to {} failed: {}", url, error);
    }
}

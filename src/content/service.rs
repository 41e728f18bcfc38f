use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::api::client::ApiClient;
use crate::content::cache::CacheRecord;
use crate::content::model::Carousel;
use crate::content::transform::transform_carousels;
use crate::errors::FetchError;
use crate::helpers::time::now_millis;
use crate::session::manager::SessionManager;

/// The cache gate over the content fetch.
///
/// A fresh, non-empty cache answers without touching the session or the
/// network; everything else goes ensure-token → fetch → transform → stamp.
/// The record lock is held across the fetch, so concurrent callers
/// serialize and the second one becomes a cache hit.
pub struct CarouselService {
    client: Arc<ApiClient>,
    session: Arc<SessionManager>,
    record: Mutex<CacheRecord>,
}

impl CarouselService {
    pub fn new(client: Arc<ApiClient>, session: Arc<SessionManager>) -> Self {
        Self {
            client,
            session,
            record: Mutex::new(CacheRecord::new()),
        }
    }

    /// Return the carousels, from cache when allowed.
    ///
    /// `force` bypasses freshness entirely. A successful empty result is
    /// stamped like any other, but the non-empty condition below means the
    /// next call refetches anyway — genuinely empty content is fetched
    /// every time. On failure the record is left exactly as it was.
    pub async fn fetch_carousels(&self, force: bool) -> Result<Vec<Carousel>, FetchError> {
        let mut record = self.record.lock().await;

        if !force && record.is_fresh(now_millis()) && !record.is_empty() {
            debug!("returning cached carousels ({})", record.carousels().len());
            return Ok(record.carousels().to_vec());
        }

        let auth = self.session.ensure_valid_token().await?;
        let raw = self.client.fetch_content(&auth).await?;
        let carousels = transform_carousels(raw);
        info!("fetched {} carousels", carousels.len());

        record.replace(carousels.clone(), now_millis());
        Ok(carousels)
    }

    /// Read the cached content without fetching.
    pub async fn carousels(&self) -> Vec<Carousel> {
        self.record.lock().await.carousels().to_vec()
    }

    /// Cached carousels of one kind (`poster` / `thumb`).
    pub async fn carousels_by_kind(&self, kind: &str) -> Vec<Carousel> {
        self.record
            .lock()
            .await
            .carousels()
            .iter()
            .filter(|carousel| carousel.kind == kind)
            .cloned()
            .collect()
    }

    pub async fn last_fetched(&self) -> Option<i64> {
        self.record.lock().await.last_fetched()
    }

    /// Drop the cached content and its stamp (the logout path).
    pub async fn clear(&self) {
        self.record.lock().await.clear();
        debug!("carousel cache cleared");
    }
}

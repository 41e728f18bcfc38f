use crate::content::model::Carousel;
use crate::utils::constants::CACHE_DURATION_MS;

/// Cached fetch result plus the moment it was stamped.
///
/// `last_fetched` is written only on a successful fetch; a failure never
/// touches the record, so stale content stays readable. "Fresh but empty"
/// (a successful empty fetch) differs from "never fetched" only by the
/// stamp being set.
#[derive(Debug, Default)]
pub struct CacheRecord {
    carousels: Vec<Carousel>,
    last_fetched: Option<i64>,
}

impl CacheRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the record is inside [`CACHE_DURATION_MS`] of its stamp.
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        self.last_fetched
            .is_some_and(|at| now_ms - at < CACHE_DURATION_MS)
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    pub fn last_fetched(&self) -> Option<i64> {
        self.last_fetched
    }

    /// Replace the content and stamp the fetch time. Success path only.
    pub fn replace(&mut self, carousels: Vec<Carousel>, fetched_at: i64) {
        self.carousels = carousels;
        self.last_fetched = Some(fetched_at);
    }

    /// Drop content and stamp, back to the never-fetched state.
    pub fn clear(&mut self) {
        self.carousels.clear();
        self.last_fetched = None;
    }
}

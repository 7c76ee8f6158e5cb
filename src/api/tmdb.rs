use super::client::{ApiClient, ApiError};
use crate::models::{Show, SyncRunSummary, TmdbPage};

/// Passthrough endpoints mirroring the feeds the daily sync pipeline ingests.
/// Used by the diagnostic page only.
impl ApiClient {
    /// Get the popular shows feed
    pub async fn get_tmdb_popular(&self) -> Result<TmdbPage<Show>, ApiError> {
        self.get("/api/v1/tmdb/popular").await
    }

    /// Get the weekly trending shows feed
    pub async fn get_tmdb_trending(&self) -> Result<TmdbPage<Show>, ApiError> {
        self.get("/api/v1/tmdb/trending").await
    }

    /// Get the airing-today feed
    pub async fn get_tmdb_airing_today(&self) -> Result<TmdbPage<Show>, ApiError> {
        self.get("/api/v1/tmdb/airing-today").await
    }

    /// Get the summary of the latest daily sync run
    pub async fn get_sync_latest(&self) -> Result<SyncRunSummary, ApiError> {
        self.get("/api/v1/tmdb/sync/latest").await
    }
}

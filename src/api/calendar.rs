use super::client::{ApiClient, ApiError};
use crate::models::EpisodeAiring;

impl ApiClient {
    /// Get upcoming episode airings for the next N days
    pub async fn get_upcoming_airings(&self, days: u32) -> Result<Vec<EpisodeAiring>, ApiError> {
        self.get(&format!("/api/v1/calendar/upcoming?days={}", days))
            .await
    }

    /// Get episodes of tracked shows airing today
    pub async fn get_airing_today(&self) -> Result<Vec<EpisodeAiring>, ApiError> {
        self.get("/api/v1/calendar/today").await
    }
}

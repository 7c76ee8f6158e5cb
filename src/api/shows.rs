use super::client::{ApiClient, ApiError};
use crate::models::{DashboardStats, MyShowsResponse, TrackedPatch, TrackedShow};

impl ApiClient {
    /// Get all shows the user is tracking
    pub async fn get_my_shows(&self) -> Result<MyShowsResponse, ApiError> {
        self.get("/api/v1/shows").await
    }

    /// Update status or progress for a tracked show
    pub async fn update_tracked_show(
        &self,
        show_id: i64,
        patch: &TrackedPatch,
    ) -> Result<TrackedShow, ApiError> {
        self.patch(&format!("/api/v1/shows/{}", show_id), patch)
            .await
    }

    /// Stop tracking a show
    pub async fn remove_tracked_show(&self, show_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/v1/shows/{}", show_id)).await
    }

    /// Get aggregate tracking stats for the dashboard
    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/api/v1/stats").await
    }
}

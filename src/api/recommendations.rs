use super::client::{ApiClient, ApiError};
use crate::models::RecommendationsResponse;

impl ApiClient {
    /// Get recommended shows for the user
    pub async fn get_recommendations(&self) -> Result<RecommendationsResponse, ApiError> {
        self.get("/api/v1/recommendations").await
    }
}

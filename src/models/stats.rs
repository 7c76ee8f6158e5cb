use serde::{Deserialize, Serialize};

/// Aggregate tracking stats shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub shows_tracked: i32,
    pub shows_watching: i32,
    pub episodes_watched: i32,
    pub airing_this_week: i32,
}

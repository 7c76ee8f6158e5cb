use serde::{Deserialize, Serialize};

use super::show::Show;

/// Watch status of a tracked show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    Watching,
    PlanToWatch,
    Completed,
    Dropped,
}

impl WatchStatus {
    /// Display name for badges
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watching => "Watching",
            Self::PlanToWatch => "Plan to Watch",
            Self::Completed => "Completed",
            Self::Dropped => "Dropped",
        }
    }

    /// CSS modifier for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Watching => "status-badge watching",
            Self::PlanToWatch => "status-badge plan",
            Self::Completed => "status-badge completed",
            Self::Dropped => "status-badge dropped",
        }
    }
}

/// A show the user is tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedShow {
    pub show: Show,
    pub status: WatchStatus,
    pub episodes_watched: i32,
    pub episodes_total: Option<i32>,
    pub next_air_date: Option<String>,
    pub updated_at: String,
}

impl TrackedShow {
    /// Progress text like "12 / 62 episodes"
    pub fn progress_text(&self) -> String {
        match self.episodes_total {
            Some(total) => format!("{} / {} episodes", self.episodes_watched, total),
            None => format!("{} episodes", self.episodes_watched),
        }
    }
}

/// Tracked shows list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyShowsResponse {
    pub shows: Vec<TrackedShow>,
}

/// Patch request for updating a tracked show
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackedPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes_watched: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_status_round_trips_as_snake_case() {
        let json = serde_json::to_string(&WatchStatus::PlanToWatch).unwrap();
        assert_eq!(json, "\"plan_to_watch\"");
        let back: WatchStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WatchStatus::PlanToWatch);
    }

    #[test]
    fn patch_skips_unset_fields() {
        let patch = TrackedPatch {
            episodes_watched: Some(5),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, "{\"episodes_watched\":5}");
    }

    #[test]
    fn progress_text_with_and_without_total() {
        let show: Show = serde_json::from_str(r#"{"show_id": 1, "title": "T"}"#).unwrap();
        let mut tracked = TrackedShow {
            show,
            status: WatchStatus::Watching,
            episodes_watched: 12,
            episodes_total: Some(62),
            next_air_date: None,
            updated_at: "2026-08-01T00:00:00Z".to_string(),
        };
        assert_eq!(tracked.progress_text(), "12 / 62 episodes");
        tracked.episodes_total = None;
        assert_eq!(tracked.progress_text(), "12 episodes");
    }
}

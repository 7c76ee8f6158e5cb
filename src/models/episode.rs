use serde::{Deserialize, Serialize};

/// An upcoming episode airing for a tracked show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeAiring {
    pub show_id: i64,
    pub show_title: String,
    pub season_number: i32,
    pub episode_number: i32,
    pub episode_title: Option<String>,
    pub air_date: String,
}

impl EpisodeAiring {
    /// Episode code like "S02E05"
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season_number, self.episode_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_code_is_zero_padded() {
        let airing = EpisodeAiring {
            show_id: 1,
            show_title: "Severance".to_string(),
            season_number: 2,
            episode_number: 5,
            episode_title: None,
            air_date: "2026-09-04".to_string(),
        };
        assert_eq!(airing.code(), "S02E05");
    }
}

use serde::{Deserialize, Serialize};

use super::show::Show;

/// Which TMDB feed a recommendation was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Popular,
    Trending,
    AiringToday,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Trending => "Trending",
            Self::AiringToday => "Airing Today",
        }
    }
}

/// A recommended show with its ranking score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub show: Show,
    pub score: f64,
    pub source: RecommendationSource,
}

/// Recommendations list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

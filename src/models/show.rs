use serde::{Deserialize, Serialize};

/// TV show metadata as normalized by the TMDB ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub show_id: i64,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub original_language: Option<String>,
}

impl Show {
    /// Year of the first air date, for display next to the title
    pub fn first_air_year(&self) -> Option<&str> {
        self.first_air_date.as_deref().and_then(|d| d.get(..4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pipeline_payload() {
        let json = r#"{
            "show_id": 1396,
            "title": "Breaking Bad",
            "original_title": "Breaking Bad",
            "overview": "A chemistry teacher turns to crime.",
            "popularity": 245.1,
            "vote_average": 8.9,
            "vote_count": 12345,
            "first_air_date": "2008-01-20",
            "genre_ids": [18, 80],
            "origin_country": ["US"],
            "poster_path": "/poster.jpg",
            "backdrop_path": null,
            "original_language": "en"
        }"#;
        let show: Show = serde_json::from_str(json).unwrap();
        assert_eq!(show.show_id, 1396);
        assert_eq!(show.title, "Breaking Bad");
        assert_eq!(show.genre_ids, vec![18, 80]);
        assert_eq!(show.first_air_year(), Some("2008"));
    }

    #[test]
    fn missing_list_fields_default_to_empty() {
        let json = r#"{"show_id": 1, "title": "Minimal"}"#;
        let show: Show = serde_json::from_str(json).unwrap();
        assert!(show.genre_ids.is_empty());
        assert!(show.origin_country.is_empty());
        assert_eq!(show.first_air_year(), None);
    }
}

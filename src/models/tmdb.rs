use serde::{Deserialize, Serialize};

/// Paged list envelope returned by the TMDB passthrough endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbPage<T> {
    pub page: i32,
    pub results: Vec<T>,
    pub total_pages: i32,
    pub total_results: i32,
}

/// Summary of the latest daily sync run of the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRunSummary {
    pub message: String,
    pub date: String,
    pub execution_id: String,
    pub files_stored: Vec<String>,
    pub total_shows: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Show;

    #[test]
    fn deserializes_sync_run_summary() {
        let json = r#"{
            "message": "TMDB sync completed successfully",
            "date": "2026-08-29",
            "execution_id": "abc-123",
            "files_stored": [
                "bronze/tmdb/shows/popular_shows/dt=2026-08-29/abc-123.json"
            ],
            "total_shows": 60
        }"#;
        let summary: SyncRunSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_shows, 60);
        assert_eq!(summary.files_stored.len(), 1);
    }

    #[test]
    fn deserializes_paged_show_list() {
        let json = r#"{
            "page": 1,
            "results": [{"show_id": 7, "title": "Andor"}],
            "total_pages": 50,
            "total_results": 1000
        }"#;
        let page: TmdbPage<Show> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Andor");
    }
}

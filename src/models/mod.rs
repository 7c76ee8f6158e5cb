pub mod episode;
pub mod recommendation;
pub mod show;
pub mod stats;
pub mod tmdb;
pub mod tracked;

pub use episode::EpisodeAiring;
pub use recommendation::{Recommendation, RecommendationSource, RecommendationsResponse};
pub use show::Show;
pub use stats::DashboardStats;
pub use tmdb::{SyncRunSummary, TmdbPage};
pub use tracked::{MyShowsResponse, TrackedPatch, TrackedShow, WatchStatus};

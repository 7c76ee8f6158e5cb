pub mod calendar;
pub mod dashboard;
pub mod landing;
pub mod layout;
pub mod my_shows;
pub mod recommendations;
pub mod tmdb_testing;

pub use calendar::Calendar;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use my_shows::MyShows;
pub use recommendations::Recommendations;
pub use tmdb_testing::TmdbTesting;

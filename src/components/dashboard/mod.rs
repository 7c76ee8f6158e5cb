pub mod airing_today_card;
pub mod continue_watching_card;
pub mod dashboard;
pub mod stats_card;

pub use dashboard::Dashboard;

pub mod calendar;
pub mod client;
pub mod recommendations;
pub mod shows;
pub mod tmdb;

pub use client::{ApiClient, ApiError};

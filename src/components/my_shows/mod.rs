pub mod my_shows;
pub mod show_card;

pub use my_shows::MyShows;

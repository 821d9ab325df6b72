pub mod config;
pub mod genre;
pub mod mood;
pub mod recommend;
pub mod spotify;

/// Application name for XDG paths
pub const APP_NAME: &str = "moodtune";

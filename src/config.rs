use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::genre::GenreTable;

/// Application configuration loaded from TOML config file.
/// All fields have sensible defaults — the config file is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Genre table to use when the CLI doesn't pick one (unset = by mood source).
    pub table: Option<GenreTable>,
    /// Spotify API settings.
    pub spotify: SpotifyConfig,
}

/// Spotify API configuration.
///
/// Credentials here are the lowest-priority source; the CLI fills them in from
/// flags or the environment before handing this to `SpotifyClient::new`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Playlists to request per search.
    pub playlist_limit: usize,
    /// Tracks to list per playlist. 0 = don't fetch tracks.
    pub track_limit: usize,
    /// Client-credentials token endpoint.
    pub auth_url: String,
    /// Web API base URL.
    pub api_base: String,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            playlist_limit: 3,
            track_limit: 3,
            auth_url: "https://accounts.spotify.com/api/token".to_string(),
            api_base: "https://api.spotify.com/v1".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from `~/.config/moodtune/config.toml`, or from `path` if given.
    /// Returns default config if file doesn't exist.
    /// Logs a warning if the file exists but can't be parsed.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path.map(Path::to_path_buf).or_else(Self::config_path);
        match config_path {
            Some(path) if path.exists() => match std::fs::read_to_string(&path) {
                Ok(contents) => match Self::parse(&contents) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", path.display());
                        config
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Get the config file path.
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME)
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.table, None);
        assert_eq!(config.spotify.client_id, None);
        assert_eq!(config.spotify.playlist_limit, 3);
        assert_eq!(config.spotify.track_limit, 3);
        assert_eq!(config.spotify.api_base, "https://api.spotify.com/v1");
    }

    #[test]
    fn test_partial_spotify_section() {
        let config = AppConfig::parse(
            r#"
            table = "emotion"

            [spotify]
            client_id = "abc"
            client_secret = "xyz"
            playlist_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.table, Some(GenreTable::Emotion));
        assert_eq!(config.spotify.client_id.as_deref(), Some("abc"));
        assert_eq!(config.spotify.client_secret.as_deref(), Some("xyz"));
        assert_eq!(config.spotify.playlist_limit, 5);
        assert_eq!(config.spotify.track_limit, 3);
        assert_eq!(config.spotify.auth_url, "https://accounts.spotify.com/api/token");
    }

    #[test]
    fn test_unknown_table_is_an_error() {
        assert!(AppConfig::parse(r#"table = "jazz""#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/moodtune/config.toml")));
        assert_eq!(config.spotify.playlist_limit, 3);
        assert_eq!(config.table, None);
    }
}

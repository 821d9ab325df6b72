pub mod models;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::SpotifyConfig;
use crate::genre::Genre;
use models::{SearchResponse, TokenResponse, TrackPage};
pub use models::{Playlist, Track};

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error(
        "Spotify credentials not found. Pass --client-id/--client-secret, set \
         SPOTIFY_CLIENT_ID/SPOTIFY_CLIENT_SECRET, or add them to [spotify] in the config file"
    )]
    MissingCredentials,
    #[error("Spotify authentication failed: {0}")]
    Auth(String),
    #[error("HTTP request failed ({context}): {message}")]
    Http { context: String, message: String },
    #[error("Spotify returned an invalid response: {0}")]
    MalformedResponse(String),
    #[error("No playlists found for genre '{genre}'")]
    NoPlaylists { genre: Genre },
}

/// Largest `limit` the search endpoint accepts.
pub const MAX_SEARCH_LIMIT: usize = 50;
/// Largest `limit` the playlist-tracks endpoint accepts.
pub const MAX_TRACK_LIMIT: usize = 100;

/// Something that can find playlists for a genre.
///
/// The pipeline only talks to this trait, so the Spotify client can be
/// swapped for a stub in tests.
pub trait PlaylistSearch {
    fn search_playlists(&self, genre: Genre) -> Result<Vec<Playlist>, PlaylistError>;
}

/// Blocking Spotify Web API client using the client-credentials flow.
pub struct SpotifyClient {
    client_id: String,
    client_secret: String,
    config: SpotifyConfig,
}

impl SpotifyClient {
    /// Build a client from explicit configuration. Fails without making any
    /// request if either credential is missing or blank.
    pub fn new(config: SpotifyConfig) -> Result<Self, PlaylistError> {
        let client_id =
            non_blank(config.client_id.as_deref()).ok_or(PlaylistError::MissingCredentials)?;
        let client_secret =
            non_blank(config.client_secret.as_deref()).ok_or(PlaylistError::MissingCredentials)?;

        let mut config = config;
        config.playlist_limit = config.playlist_limit.clamp(1, MAX_SEARCH_LIMIT);
        config.track_limit = config.track_limit.min(MAX_TRACK_LIMIT);

        Ok(Self {
            client_id,
            client_secret,
            config,
        })
    }

    /// Exchange the client credentials for an app access token.
    fn fetch_token(&self) -> Result<String, PlaylistError> {
        log::debug!("Requesting token from {}", self.config.auth_url);

        let mut response = ureq::post(&self.config.auth_url)
            .send_form([
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .map_err(|e| match e {
                ureq::Error::StatusCode(code @ (400 | 401 | 403)) => {
                    PlaylistError::Auth(format!("token endpoint returned HTTP {code}"))
                }
                other => http_error("token request", other),
            })?;

        let token: TokenResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| PlaylistError::MalformedResponse(format!("token response: {e}")))?;
        Ok(token.access_token)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, String)],
    ) -> Result<T, PlaylistError> {
        let url = format!("{}/{}", self.config.api_base.trim_end_matches('/'), path);
        log::debug!("Fetching {url}");

        let mut request = ureq::get(&url).header("Authorization", format!("Bearer {token}"));
        for (key, value) in query {
            request = request.query(*key, value);
        }

        let mut response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(401) => {
                PlaylistError::Auth(format!("{path} rejected the access token"))
            }
            other => http_error(path, other),
        })?;

        response
            .body_mut()
            .read_json()
            .map_err(|e| PlaylistError::MalformedResponse(format!("{path}: {e}")))
    }

    fn fetch_tracks(&self, playlist_id: &str, token: &str) -> Result<Vec<Track>, PlaylistError> {
        let page: TrackPage = self.get_json(
            &format!("playlists/{playlist_id}/tracks"),
            token,
            &[("limit", self.config.track_limit.to_string())],
        )?;
        Ok(page.into_tracks())
    }
}

impl PlaylistSearch for SpotifyClient {
    fn search_playlists(&self, genre: Genre) -> Result<Vec<Playlist>, PlaylistError> {
        let token = self.fetch_token()?;

        let search: SearchResponse = self.get_json(
            "search",
            &token,
            &[
                ("q", format!("playlist {genre}")),
                ("type", "playlist".to_string()),
                ("limit", self.config.playlist_limit.to_string()),
            ],
        )?;

        let page = search.playlists.ok_or_else(|| {
            PlaylistError::MalformedResponse("missing 'playlists' object".into())
        })?;
        let mut playlists = page.into_playlists();
        if playlists.is_empty() {
            return Err(PlaylistError::NoPlaylists { genre });
        }

        if self.config.track_limit == 0 {
            return Ok(playlists);
        }

        for playlist in &mut playlists {
            let Some(id) = playlist.id.as_deref() else {
                log::warn!("Playlist '{}' has no id, skipping tracks", playlist.name);
                continue;
            };
            match self.fetch_tracks(id, &token) {
                Ok(tracks) => playlist.tracks = tracks,
                Err(e) => log::warn!("Failed to fetch tracks for '{}': {e}", playlist.name),
            }
        }

        Ok(playlists)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn http_error(context: &str, e: ureq::Error) -> PlaylistError {
    PlaylistError::Http {
        context: context.to_string(),
        message: e.to_string(),
    }
}

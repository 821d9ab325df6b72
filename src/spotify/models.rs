use serde::{Deserialize, Serialize};

/// Shown when Spotify returns a playlist without a name.
pub const UNNAMED_PLAYLIST: &str = "Unnamed Playlist";
/// Shown when a track comes back without a name.
pub const UNKNOWN_TRACK: &str = "Unknown Track";
/// Placeholder link when a playlist has no external URL.
pub const MISSING_URL: &str = "#";

/// A playlist ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub id: Option<String>,
    pub name: String,
    pub url: String,
    pub image_url: Option<String>,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<String>,
    pub preview_url: Option<String>,
}

impl Track {
    /// Artist names joined for display.
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

// Wire types. Every field is optional because the API (and proxies in
// front of it) return partial or null-laden objects.

/// Client-credentials token response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

/// `GET /search?type=playlist` response (partial — we only need `playlists`).
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub playlists: Option<PlaylistPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistPage {
    pub items: Option<Vec<Option<PlaylistObject>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistObject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub external_urls: Option<ExternalUrls>,
    pub images: Option<Vec<Option<Image>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Image {
    pub url: Option<String>,
}

/// `GET /playlists/{id}/tracks` response.
#[derive(Debug, Deserialize)]
pub(crate) struct TrackPage {
    pub items: Option<Vec<Option<TrackItem>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackObject {
    pub name: Option<String>,
    pub artists: Option<Vec<Option<Artist>>>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Artist {
    pub name: Option<String>,
}

impl PlaylistPage {
    /// Non-null playlists, normalized, with empty track lists.
    pub fn into_playlists(self) -> Vec<Playlist> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(Playlist::from)
            .collect()
    }
}

impl From<PlaylistObject> for Playlist {
    fn from(p: PlaylistObject) -> Self {
        let url = p
            .external_urls
            .and_then(|u| u.spotify)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| MISSING_URL.to_string());

        // Only the first image counts, and only if it has a URL
        let image_url = p
            .images
            .and_then(|images| images.into_iter().next().flatten())
            .and_then(|img| img.url)
            .filter(|u| !u.is_empty());

        Playlist {
            id: p.id.filter(|id| !id.is_empty()),
            name: p.name.unwrap_or_else(|| UNNAMED_PLAYLIST.to_string()),
            url,
            image_url,
            tracks: Vec::new(),
        }
    }
}

impl TrackPage {
    /// Tracks with null items and null `track` objects skipped.
    pub fn into_tracks(self) -> Vec<Track> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|item| item.track)
            .map(Track::from)
            .collect()
    }
}

impl From<TrackObject> for Track {
    fn from(t: TrackObject) -> Self {
        Track {
            name: t.name.unwrap_or_else(|| UNKNOWN_TRACK.to_string()),
            artists: t
                .artists
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .filter_map(|a| a.name)
                .collect(),
            preview_url: t.preview_url.filter(|u| !u.is_empty()),
        }
    }
}

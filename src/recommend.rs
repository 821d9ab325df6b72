use serde::Serialize;

use crate::genre::{Genre, GenreTable};
use crate::mood::{Detection, Mood, MoodSource};
use crate::spotify::{Playlist, PlaylistError, PlaylistSearch};

/// Everything one request produced, ready to render or serialize.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub mood: Mood,
    pub source: MoodSource,
    pub table: GenreTable,
    pub genre: Genre,
    pub playlists: Vec<Playlist>,
}

impl Recommendation {
    /// The mood and genre of a request whose search came back empty.
    pub fn without_playlists(detection: Detection, table: Option<GenreTable>) -> Self {
        let (table, genre) = preview(&detection, table);
        Recommendation {
            mood: detection.mood,
            source: detection.source,
            table,
            genre,
            playlists: Vec::new(),
        }
    }
}

/// Pick the genre for a detected mood without touching the network.
///
/// `table` pins a genre table; `None` picks one from the mood's source.
pub fn preview(detection: &Detection, table: Option<GenreTable>) -> (GenreTable, Genre) {
    let table = table.unwrap_or_else(|| GenreTable::for_source(detection.source));
    (table, table.select(&detection.mood))
}

/// Detected mood → genre → playlists, with a single search call.
pub fn recommend_from_detection(
    detection: Detection,
    table: Option<GenreTable>,
    search: &dyn PlaylistSearch,
) -> Result<Recommendation, PlaylistError> {
    let (table, genre) = preview(&detection, table);
    log::info!(
        "Mood {} ({:?}) → genre '{genre}' via {table} table",
        detection.mood,
        detection.source
    );

    let playlists = search.search_playlists(genre)?;
    log::debug!("Got {} playlists for '{genre}'", playlists.len());

    Ok(Recommendation {
        mood: detection.mood,
        source: detection.source,
        table,
        genre,
        playlists,
    })
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mood::{Mood, MoodSource};

/// Music genre used as the playlist search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Pop,
    Acoustic,
    Rock,
    Dance,
    Ambient,
    Chill,
    Metal,
}

/// Genre for any mood a table doesn't list.
pub const DEFAULT_GENRE: Genre = Genre::Chill;

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Pop => "pop",
            Genre::Acoustic => "acoustic",
            Genre::Rock => "rock",
            Genre::Dance => "dance",
            Genre::Ambient => "ambient",
            Genre::Chill => "chill",
            Genre::Metal => "metal",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named mood → genre lookup tables.
///
/// `Text` is the three-mood table used when the mood came from text polarity;
/// `Emotion` covers the full vocabulary of the image emotion model. Both fall
/// back to [`DEFAULT_GENRE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenreTable {
    Text,
    Emotion,
}

const TEXT_TABLE: &[(Mood, Genre)] = &[
    (Mood::Happy, Genre::Pop),
    (Mood::Sad, Genre::Acoustic),
    (Mood::Neutral, Genre::Chill),
];

const EMOTION_TABLE: &[(Mood, Genre)] = &[
    (Mood::Happy, Genre::Pop),
    (Mood::Sad, Genre::Acoustic),
    (Mood::Angry, Genre::Rock),
    (Mood::Surprise, Genre::Dance),
    (Mood::Fear, Genre::Ambient),
    (Mood::Neutral, Genre::Chill),
    (Mood::Disgust, Genre::Metal),
];

impl GenreTable {
    /// Table to use when the caller didn't pin one: image moods get the full
    /// emotion table, text moods the three-entry one.
    pub fn for_source(source: MoodSource) -> Self {
        match source {
            MoodSource::Image => GenreTable::Emotion,
            MoodSource::Text => GenreTable::Text,
        }
    }

    pub fn entries(&self) -> &'static [(Mood, Genre)] {
        match self {
            GenreTable::Text => TEXT_TABLE,
            GenreTable::Emotion => EMOTION_TABLE,
        }
    }

    pub fn select(&self, mood: &Mood) -> Genre {
        self.entries()
            .iter()
            .find(|(m, _)| m == mood)
            .map(|&(_, g)| g)
            .unwrap_or(DEFAULT_GENRE)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GenreTable::Text => "text",
            GenreTable::Emotion => "emotion",
        }
    }
}

impl fmt::Display for GenreTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Select a genre for a mood using the full emotion table.
pub fn select_genre(mood: &Mood) -> Genre {
    GenreTable::Emotion.select(mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_table_mapping() {
        assert_eq!(select_genre(&Mood::Happy), Genre::Pop);
        assert_eq!(select_genre(&Mood::Sad), Genre::Acoustic);
        assert_eq!(select_genre(&Mood::Neutral), Genre::Chill);
        assert_eq!(select_genre(&Mood::Angry), Genre::Rock);
        assert_eq!(select_genre(&Mood::Surprise), Genre::Dance);
        assert_eq!(select_genre(&Mood::Fear), Genre::Ambient);
        assert_eq!(select_genre(&Mood::Disgust), Genre::Metal);
    }

    #[test]
    fn genre_strings() {
        assert_eq!(select_genre(&Mood::Happy).as_str(), "pop");
        assert_eq!(select_genre(&Mood::Disgust).to_string(), "metal");
        assert_eq!(serde_json::to_string(&Genre::Ambient).unwrap(), r#""ambient""#);
    }

    #[test]
    fn unknown_mood_falls_back_to_chill() {
        assert_eq!(select_genre(&Mood::Other("Contempt".into())), Genre::Chill);
        assert_eq!(select_genre(&Mood::Other(String::new())), Genre::Chill);
    }

    #[test]
    fn text_table_only_knows_three_moods() {
        let t = GenreTable::Text;
        assert_eq!(t.select(&Mood::Happy), Genre::Pop);
        assert_eq!(t.select(&Mood::Sad), Genre::Acoustic);
        assert_eq!(t.select(&Mood::Neutral), Genre::Chill);
        for mood in [Mood::Angry, Mood::Surprise, Mood::Fear, Mood::Disgust] {
            assert_eq!(t.select(&mood), Genre::Chill, "{mood}");
        }
    }

    #[test]
    fn tables_agree_on_shared_moods() {
        for (mood, genre) in GenreTable::Text.entries() {
            assert_eq!(GenreTable::Emotion.select(mood), *genre);
        }
    }

    #[test]
    fn emotion_table_covers_every_known_mood() {
        assert_eq!(GenreTable::Emotion.entries().len(), Mood::KNOWN.len());
        for mood in Mood::KNOWN {
            assert!(GenreTable::Emotion.entries().iter().any(|(m, _)| *m == mood));
        }
    }

    #[test]
    fn table_for_source() {
        assert_eq!(GenreTable::for_source(MoodSource::Image), GenreTable::Emotion);
        assert_eq!(GenreTable::for_source(MoodSource::Text), GenreTable::Text);
    }
}

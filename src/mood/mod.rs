pub mod classify;
pub mod detect;

pub use classify::{
    classify_mood_from_label, classify_mood_from_sentiment_label, classify_mood_from_text,
    HAPPY_THRESHOLD, SAD_THRESHOLD,
};
pub use detect::{detect_mood, Detection, DetectError, MoodSource, Signal};

use std::fmt;

use serde::{Serialize, Serializer};

/// Discrete mood category.
///
/// The text path only ever yields `Happy`, `Sad` or `Neutral`. The image path
/// passes the emotion model's label through, so it can produce any of the
/// seven known emotions, or `Other` for a label outside that vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Angry,
    Surprise,
    Fear,
    Disgust,
    /// Capitalized label the emotion model produced that we don't recognize.
    Other(String),
}

impl Mood {
    /// The seven emotions the image model can report.
    pub const KNOWN: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Surprise,
        Mood::Fear,
        Mood::Neutral,
        Mood::Disgust,
    ];

    pub fn name(&self) -> &str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
            Mood::Angry => "Angry",
            Mood::Surprise => "Surprise",
            Mood::Fear => "Fear",
            Mood::Disgust => "Disgust",
            Mood::Other(label) => label,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Mood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

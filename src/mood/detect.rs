use serde::Serialize;
use thiserror::Error;

use super::{classify_mood_from_label, Mood};

/// Output of an external model: the value it produced, or why it failed.
pub type Signal<T> = Result<T, String>;

/// Which input the mood came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodSource {
    Image,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub mood: Mood,
    pub source: MoodSource,
}

#[derive(Error, Debug, PartialEq)]
pub enum DetectError {
    #[error("No mood input given (need an emotion label or some text sentiment)")]
    NoInput,
    #[error("Text mood detection failed: {0}")]
    TextFailed(String),
}

/// Resolve a mood from the image signal first and the text signal second.
///
/// `text` is only evaluated when there is no image signal or the image model
/// failed. Its `Ok` value is the mood already classified from text (see
/// `classify_mood_from_text` / `classify_mood_from_sentiment_label`).
pub fn detect_mood<F>(emotion: Option<Signal<String>>, text: F) -> Result<Detection, DetectError>
where
    F: FnOnce() -> Option<Signal<Mood>>,
{
    match emotion {
        Some(Ok(label)) => {
            let mood = classify_mood_from_label(&label);
            log::info!("Detected mood from image: {mood}");
            return Ok(Detection {
                mood,
                source: MoodSource::Image,
            });
        }
        Some(Err(e)) => {
            log::warn!("Emotion detection failed ({e}), falling back to text-based mood detection");
        }
        None => {}
    }

    match text() {
        Some(Ok(mood)) => {
            log::info!("Detected mood from text: {mood}");
            Ok(Detection {
                mood,
                source: MoodSource::Text,
            })
        }
        Some(Err(e)) => Err(DetectError::TextFailed(e)),
        None => Err(DetectError::NoInput),
    }
}

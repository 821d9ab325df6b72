use super::Mood;

/// Polarity strictly above this is `Happy`.
pub const HAPPY_THRESHOLD: f64 = 0.2;
/// Polarity strictly below this is `Sad`.
pub const SAD_THRESHOLD: f64 = -0.2;

/// Classify a text polarity score into a mood.
///
/// Scores are expected in [-1.0, 1.0] but any value is accepted. The
/// thresholds are exclusive, so exactly ±0.2 is `Neutral`. NaN compares false
/// against both thresholds and lands in `Neutral` as well.
pub fn classify_mood_from_text(score: f64) -> Mood {
    if score > HAPPY_THRESHOLD {
        Mood::Happy
    } else if score < SAD_THRESHOLD {
        Mood::Sad
    } else {
        Mood::Neutral
    }
}

/// Pass an emotion label from an image model through as a mood.
///
/// Only capitalization is normalized ("angry", "ANGRY" → `Angry`). Labels
/// outside the known vocabulary are kept as `Mood::Other` rather than
/// rejected, so the genre table's fallback decides what they map to.
pub fn classify_mood_from_label(label: &str) -> Mood {
    let normalized = capitalize(label.trim());
    match normalized.as_str() {
        "Happy" => Mood::Happy,
        "Sad" => Mood::Sad,
        "Neutral" => Mood::Neutral,
        "Angry" => Mood::Angry,
        "Surprise" => Mood::Surprise,
        "Fear" => Mood::Fear,
        "Disgust" => Mood::Disgust,
        _ => Mood::Other(normalized),
    }
}

/// Classify a text sentiment label (e.g. "POSITIVE" from a transformer
/// pipeline) into a mood. Anything that isn't positive or negative is neutral.
pub fn classify_mood_from_sentiment_label(label: &str) -> Mood {
    match label.trim().to_lowercase().as_str() {
        "positive" => Mood::Happy,
        "negative" => Mood::Sad,
        _ => Mood::Neutral,
    }
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_scores_are_happy() {
        for s in [0.2001, 0.21, 0.5, 0.6, 1.0, 42.0, f64::INFINITY] {
            assert_eq!(classify_mood_from_text(s), Mood::Happy, "score {s}");
        }
    }

    #[test]
    fn negative_scores_are_sad() {
        for s in [-0.2001, -0.21, -0.5, -1.0, -42.0, f64::NEG_INFINITY] {
            assert_eq!(classify_mood_from_text(s), Mood::Sad, "score {s}");
        }
    }

    #[test]
    fn middle_band_is_neutral() {
        for s in [-0.2, -0.1999, -0.05, 0.0, -0.0, 0.1, 0.1999, 0.2] {
            assert_eq!(classify_mood_from_text(s), Mood::Neutral, "score {s}");
        }
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(classify_mood_from_text(HAPPY_THRESHOLD), Mood::Neutral);
        assert_eq!(classify_mood_from_text(SAD_THRESHOLD), Mood::Neutral);
    }

    #[test]
    fn nan_is_neutral() {
        assert_eq!(classify_mood_from_text(f64::NAN), Mood::Neutral);
    }

    #[test]
    fn label_capitalization_is_normalized() {
        assert_eq!(classify_mood_from_label("angry"), Mood::Angry);
        assert_eq!(classify_mood_from_label("ANGRY"), Mood::Angry);
        assert_eq!(classify_mood_from_label("aNgRy"), Mood::Angry);
        assert_eq!(classify_mood_from_label("  happy\n"), Mood::Happy);
        assert_eq!(classify_mood_from_label("surprise"), Mood::Surprise);
        assert_eq!(classify_mood_from_label("fear"), Mood::Fear);
        assert_eq!(classify_mood_from_label("disgust"), Mood::Disgust);
        assert_eq!(classify_mood_from_label("neutral"), Mood::Neutral);
        assert_eq!(classify_mood_from_label("sad"), Mood::Sad);
    }

    #[test]
    fn every_known_mood_round_trips_through_its_name() {
        for mood in Mood::KNOWN {
            assert_eq!(classify_mood_from_label(mood.name()), mood);
            assert_eq!(classify_mood_from_label(&mood.name().to_lowercase()), mood);
        }
    }

    #[test]
    fn unknown_labels_pass_through() {
        assert_eq!(
            classify_mood_from_label("CONTEMPT"),
            Mood::Other("Contempt".to_string())
        );
        assert_eq!(classify_mood_from_label(""), Mood::Other(String::new()));
    }

    #[test]
    fn sentiment_labels() {
        assert_eq!(classify_mood_from_sentiment_label("POSITIVE"), Mood::Happy);
        assert_eq!(classify_mood_from_sentiment_label("negative"), Mood::Sad);
        assert_eq!(classify_mood_from_sentiment_label("Neutral"), Mood::Neutral);
        assert_eq!(classify_mood_from_sentiment_label("mixed"), Mood::Neutral);
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("hAPPY"), "Happy");
    }
}

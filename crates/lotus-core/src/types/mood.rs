//! Mood label produced by the sentiment classifier.
//!
//! The hosted model returns "positive", "neutral", or "negative". Any other
//! label is lowercased and passed through verbatim so the display layer can
//! still show it.

use serde::{Deserialize, Serialize};

/// Coarse sentiment label attached to a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Positive,
    Neutral,
    Negative,
    /// Unrecognized label, preserved as returned (lowercased).
    #[serde(untagged)]
    Other(String),
}

impl MoodLabel {
    /// Parse a classifier label, case-insensitively.
    pub fn parse(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        match lower.as_str() {
            "positive" => MoodLabel::Positive,
            "neutral" => MoodLabel::Neutral,
            "negative" => MoodLabel::Negative,
            _ => MoodLabel::Other(lower),
        }
    }

    /// The display form used inside generated responses.
    pub fn as_str(&self) -> &str {
        match self {
            MoodLabel::Positive => "positive",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Negative => "negative",
            MoodLabel::Other(s) => s,
        }
    }
}

impl std::fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Offline fallback recommendation generator.
//!
//! When the hosted completion call is unavailable, this module still
//! produces a personalized reply: it scans the journal text for thematic
//! signals, selects coping exercises from an ordered rule table, pads the
//! selection to exactly three distinct entries, and wraps them in the same
//! markup the primary path produces.
//!
//! Everything here is a pure function over the input text and process-wide
//! constant tables; nothing blocks, fails, or outlives a single request.

pub mod catalog;
pub mod response;
pub mod rules;
pub mod signals;

pub use catalog::Exercise;
pub use rules::SELECTION_SIZE;
pub use signals::{EmotionTag, InterestTag, SignalSet, ThemeTag};

use tracing::debug;

use crate::types::MoodLabel;

/// Generate the complete fallback reply for a journal entry.
///
/// Total over any string input, including the empty string.
pub fn generate(entry: &str, mood: &MoodLabel) -> String {
    let signals = SignalSet::extract(entry);
    let candidates = rules::select_candidates(&signals);
    let selection = rules::fill_selection(candidates);
    debug!(
        themes = signals.themes.len(),
        interests = signals.interests.len(),
        emotions = signals.emotions.len(),
        exercises = ?selection.iter().map(|e| e.id).collect::<Vec<_>>(),
        "Fallback selection computed"
    );
    response::assemble(&selection, mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let entry = "I'm so stressed about my deadline at work and feel frustrated";
        let mood = MoodLabel::Negative;
        assert_eq!(generate(entry, &mood), generate(entry, &mood));
    }

    #[test]
    fn test_generate_handles_empty_entry() {
        let body = generate("", &MoodLabel::Neutral);
        assert!(body.contains("<strong>"));
        assert!(body.contains("<p>1. "));
        assert!(body.contains("<p>3. "));
    }

    #[test]
    fn test_generate_embeds_matched_exercises() {
        let body = generate(
            "I'm so stressed about my deadline at work and feel frustrated",
            &MoodLabel::Negative,
        );
        assert!(body.contains("Three Good Things at Work"));
        assert!(body.contains("90-second pause"));
        assert!(body.contains("work containment ritual"));
    }
}

//! Assembly of the fallback reply body.
//!
//! The output must be structurally indistinguishable from the primary
//! completion path: HTML paragraphs with a single `<strong>` span labeling
//! the exercise list. The display layer consumes the `<p>` structure, so the
//! assembler emits clean single-line paragraphs separated by blank lines.

use super::catalog::Exercise;
use crate::types::MoodLabel;

/// Assemble the final fallback response from the selected exercises and the
/// externally supplied mood label. Byte-deterministic for identical input.
pub fn assemble(selection: &[&Exercise], mood: &MoodLabel) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "<p>Thank you for sharing your thoughts with me today. I notice from your journal entry that you're experiencing some {} emotions.</p>\n\n",
        mood.as_str()
    ));
    out.push_str(
        "<p>Your words reveal layers of what you're going through right now. I sense this is an important moment for reflection on the feelings you've expressed.</p>\n\n",
    );
    out.push_str(
        "<p>I appreciate the vulnerability and thoughtfulness in your writing. The way you've articulated your experience shows a level of self-awareness that's really valuable.</p>\n\n",
    );
    out.push_str(
        "<p><strong>Based on what you've shared, here are some personalized practices that might support you:</strong></p>\n",
    );

    for (i, exercise) in selection.iter().enumerate() {
        out.push_str(&format!("<p>{}. {}</p>\n", i + 1, exercise.text));
    }

    out.push_str(
        "\n<p>Remember that your feelings are valid, and it's okay to experience the full range of emotions. I'm here whenever you need to reflect or process what's happening in your life.</p>",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::catalog::GENERAL_POOL;

    #[test]
    fn test_assembly_is_idempotent() {
        let selection: Vec<_> = GENERAL_POOL.iter().copied().collect();
        let mood = MoodLabel::Negative;
        assert_eq!(assemble(&selection, &mood), assemble(&selection, &mood));
    }

    #[test]
    fn test_mood_label_appears_in_opening() {
        let selection: Vec<_> = GENERAL_POOL.iter().copied().collect();
        let body = assemble(&selection, &MoodLabel::Positive);
        assert!(body.starts_with("<p>Thank you for sharing"));
        assert!(body.contains("experiencing some positive emotions"));
    }

    #[test]
    fn test_exercises_are_one_indexed_paragraphs() {
        let selection: Vec<_> = GENERAL_POOL.iter().copied().collect();
        let body = assemble(&selection, &MoodLabel::Neutral);
        for (i, exercise) in selection.iter().enumerate() {
            assert!(body.contains(&format!("<p>{}. {}</p>", i + 1, exercise.text)));
        }
    }

    #[test]
    fn test_single_strong_span() {
        let selection: Vec<_> = GENERAL_POOL.iter().copied().collect();
        let body = assemble(&selection, &MoodLabel::Neutral);
        assert_eq!(body.matches("<strong>").count(), 1);
        assert_eq!(body.matches("</strong>").count(), 1);
    }

    #[test]
    fn test_balanced_paragraph_markup() {
        let selection: Vec<_> = GENERAL_POOL.iter().copied().collect();
        let body = assemble(&selection, &MoodLabel::Other("mixed".to_string()));
        assert_eq!(body.matches("<p>").count(), body.matches("</p>").count());
        // opening + reflection + affirmation + intro + 3 exercises + closing
        assert_eq!(body.matches("<p>").count(), 8);
    }
}

//! Declarative rule table driving exercise selection, plus the fill
//! controller that guarantees exactly three distinct exercises.
//!
//! Table order is the priority order: when more than three rules match, the
//! earliest entries win. The whole table is evaluated on every call.

use super::catalog::{self, Exercise, GENERAL_POOL};
use super::signals::{EmotionTag, InterestTag, SignalSet, ThemeTag};

/// Number of exercises in every final selection.
pub const SELECTION_SIZE: usize = 3;

/// A (predicate, candidate) pair.
pub struct RuleEntry {
    pub applies: fn(&SignalSet) -> bool,
    pub exercise: &'static Exercise,
}

/// The ordered rule table. Candidate ids are unique by construction.
pub static RULE_TABLE: &[RuleEntry] = &[
    // Work-related entries.
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Work) && s.has_emotion(EmotionTag::Frustration),
        exercise: &catalog::THREE_GOOD_THINGS_AT_WORK,
    },
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Work) && s.has_theme(ThemeTag::Stress),
        exercise: &catalog::NINETY_SECOND_PAUSE,
    },
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Work),
        exercise: &catalog::WORK_CONTAINMENT_RITUAL,
    },
    // Relationship-focused entries.
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Relationships) && s.has_theme(ThemeTag::Sadness),
        exercise: &catalog::CONNECTION_LETTER,
    },
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Relationships),
        exercise: &catalog::ACTIVE_LISTENING_PLUS,
    },
    // Sleep and rest entries.
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Sleep),
        exercise: &catalog::FOUR_SEVEN_EIGHT_BREATHING,
    },
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Sleep),
        exercise: &catalog::WORRY_DROP_RITUAL,
    },
    // Health-focused entries.
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Health),
        exercise: &catalog::BODY_APPRECIATION_SCAN,
    },
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::Health) && s.has_theme(ThemeTag::Stress),
        exercise: &catalog::SYMPTOM_SCHEDULING,
    },
    // Future planning entries.
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::FuturePlanning) && s.has_emotion(EmotionTag::Confusion),
        exercise: &catalog::VALUES_COMPASS,
    },
    RuleEntry {
        applies: |s| s.has_theme(ThemeTag::FuturePlanning) && s.has_emotion(EmotionTag::Hope),
        exercise: &catalog::POSSIBILITY_PORTFOLIO,
    },
    // Interest-only entries.
    RuleEntry {
        applies: |s| s.has_interest(InterestTag::Creative),
        exercise: &catalog::EMOTIONAL_COLOR_MAPPING,
    },
    RuleEntry {
        applies: |s| s.has_interest(InterestTag::Nature),
        exercise: &catalog::SENSORY_NATURE_IMMERSION,
    },
    RuleEntry {
        applies: |s| s.has_interest(InterestTag::PhysicalActivity) && s.has_theme(ThemeTag::Stress),
        exercise: &catalog::MICRO_MOVEMENTS,
    },
    RuleEntry {
        applies: |s| s.has_interest(InterestTag::Mindfulness) && s.has_emotion(EmotionTag::Confusion),
        exercise: &catalog::RAIN_TECHNIQUE,
    },
    // General wellbeing entries, only when no theme was detected.
    RuleEntry {
        applies: |s| s.no_themes() && s.has_emotion(EmotionTag::Frustration),
        exercise: &catalog::ALTERNATIVE_PERSPECTIVES,
    },
    RuleEntry {
        applies: |s| s.no_themes() && s.has_emotion(EmotionTag::Gratitude),
        exercise: &catalog::SPECIFIC_GRATITUDE,
    },
    RuleEntry {
        applies: |s| s.no_themes(),
        exercise: &catalog::VALUES_BASED_DECISION_FILTER,
    },
];

/// Evaluate every rule in table order and collect matching candidates.
pub fn select_candidates(signals: &SignalSet) -> Vec<&'static Exercise> {
    RULE_TABLE
        .iter()
        .filter(|entry| (entry.applies)(signals))
        .map(|entry| entry.exercise)
        .collect()
}

/// Pad or truncate the candidate list to exactly [`SELECTION_SIZE`] items.
///
/// Padding iterates the general pool once, skipping ids already selected. If
/// that single pass cannot reach the target (pool exhausted), a second pass
/// appends pool entries regardless of duplication rather than looping - the
/// fill is bounded in all cases.
pub fn fill_selection(mut candidates: Vec<&'static Exercise>) -> Vec<&'static Exercise> {
    if candidates.len() >= SELECTION_SIZE {
        candidates.truncate(SELECTION_SIZE);
        return candidates;
    }

    for &exercise in GENERAL_POOL {
        if candidates.len() >= SELECTION_SIZE {
            break;
        }
        if candidates.iter().all(|c| c.id != exercise.id) {
            candidates.push(exercise);
        }
    }

    // Fail closed: tolerate duplicates over an unbounded loop.
    for &exercise in GENERAL_POOL {
        if candidates.len() >= SELECTION_SIZE {
            break;
        }
        candidates.push(exercise);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_stress_frustration_priority_order() {
        let signals =
            SignalSet::extract("I'm so stressed about my deadline at work and feel frustrated");
        let candidates = select_candidates(&signals);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "three_good_things_at_work",
                "ninety_second_pause",
                "work_containment_ritual",
            ]
        );

        let selection = fill_selection(candidates);
        let ids: Vec<&str> = selection.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "three_good_things_at_work",
                "ninety_second_pause",
                "work_containment_ritual",
            ]
        );
    }

    #[test]
    fn test_no_signals_selects_pool_in_order() {
        let signals = SignalSet::extract("The sky is blue today");
        let candidates = select_candidates(&signals);
        // Theme set is empty, so the unconditional no-theme entry fires.
        let ids: Vec<&str> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["values_based_decision_filter"]);

        let selection = fill_selection(candidates);
        let ids: Vec<&str> = selection.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "values_based_decision_filter",
                "self_compassion_practice",
                "mental_subtraction",
            ]
        );
    }

    #[test]
    fn test_empty_candidates_fill_entirely_from_pool() {
        let selection = fill_selection(Vec::new());
        let ids: Vec<&str> = selection.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "self_compassion_practice",
                "mental_subtraction",
                "grounding_3_3_3",
            ]
        );
    }

    #[test]
    fn test_nature_walk_pads_without_duplicates() {
        let signals =
            SignalSet::extract("I went for a walk outside in the park and felt calm");
        let candidates = select_candidates(&signals);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["sensory_nature_immersion"]);

        let selection = fill_selection(candidates);
        let ids: Vec<&str> = selection.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "sensory_nature_immersion",
                "self_compassion_practice",
                "mental_subtraction",
            ]
        );
    }

    #[test]
    fn test_selection_always_three_and_distinct() {
        let texts = [
            "",
            "The sky is blue today",
            "work work work deadline boss meeting stress anxiety frustrated",
            "my friend and family make me sad and lonely, can't sleep, health worries, \
             uncertain future, hope things improve, grateful for art and nature walks",
        ];
        for text in texts {
            let selection = fill_selection(select_candidates(&SignalSet::extract(text)));
            assert_eq!(selection.len(), SELECTION_SIZE, "text: {text:?}");
            let mut ids: Vec<&str> = selection.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), SELECTION_SIZE, "duplicates for text: {text:?}");
        }
    }

    #[test]
    fn test_full_table_evaluated_no_early_exit() {
        // Work and relationship themes both match; truncation favors the
        // earlier work entries but the relationship entry was still produced.
        let signals = SignalSet::extract(
            "work deadline stress frustrated, and my friend is sad and lonely",
        );
        let candidates = select_candidates(&signals);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id).collect();
        assert!(ids.contains(&"connection_letter"));
        assert!(ids.contains(&"active_listening_plus"));

        let selection = fill_selection(candidates);
        let ids: Vec<&str> = selection.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                "three_good_things_at_work",
                "ninety_second_pause",
                "work_containment_ritual",
            ]
        );
    }

    #[test]
    fn test_mindfulness_confusion_rain() {
        let signals = SignalSet::extract("I meditate but feel confused about everything");
        let candidates = select_candidates(&signals);
        let ids: Vec<&str> = candidates.iter().map(|c| c.id).collect();
        assert!(ids.contains(&"rain_technique"));
    }
}

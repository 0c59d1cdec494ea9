//! Thematic signal extraction over journal text.
//!
//! Every tag is detected by literal substring containment over a single
//! lowercased copy of the entry. There is no tokenization and no word
//! boundary handling; the relaxed policy is deliberate for the fallback
//! path (e.g. "frustrat" catches "frustrated" and "frustrating").

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Broad life-topic signal detected in journal text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ThemeTag {
    Stress,
    Sadness,
    Happiness,
    Relationships,
    Work,
    Sleep,
    Health,
    FuturePlanning,
}

impl ThemeTag {
    /// Keyword fragments whose presence sets this tag.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ThemeTag::Stress => &[
                "stress",
                "anxiety",
                "worried",
                "overwhelmed",
                "pressure",
                "tense",
                "nervous",
                "panic",
            ],
            ThemeTag::Sadness => &[
                "sad", "down", "depressed", "unhappy", "lonely", "miss", "grief", "loss", "hurt",
            ],
            ThemeTag::Happiness => &[
                "happy",
                "joy",
                "excited",
                "grateful",
                "wonderful",
                "pleased",
                "delighted",
                "content",
            ],
            ThemeTag::Relationships => &[
                "friend",
                "partner",
                "family",
                "relationship",
                "boyfriend",
                "girlfriend",
                "husband",
                "wife",
                "mom",
                "dad",
                "parent",
                "child",
            ],
            ThemeTag::Work => &[
                "work", "job", "career", "boss", "project", "deadline", "colleague", "office",
                "meeting",
            ],
            ThemeTag::Sleep => &[
                "sleep",
                "tired",
                "insomnia",
                "rest",
                "exhausted",
                "fatigue",
                "bed",
                "dream",
            ],
            ThemeTag::Health => &[
                "health", "sick", "pain", "doctor", "illness", "symptom", "body", "physical",
            ],
            ThemeTag::FuturePlanning => &[
                "future",
                "plan",
                "goal",
                "dream",
                "aspiration",
                "hope",
                "worry about",
                "uncertain",
            ],
        }
    }
}

/// Activity preference usable to personalize a suggested exercise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InterestTag {
    PhysicalActivity,
    Mindfulness,
    Creative,
    Nature,
}

impl InterestTag {
    /// Keyword fragments whose presence sets this tag.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            InterestTag::PhysicalActivity => {
                &["exercise", "workout", "run", "gym", "walk", "yoga", "fitness"]
            }
            InterestTag::Mindfulness => &[
                "meditate",
                "meditation",
                "mindfulness",
                "breathe",
                "breathing",
                "calm",
            ],
            InterestTag::Creative => &[
                "art", "write", "create", "music", "play", "paint", "draw", "sing", "creative",
            ],
            InterestTag::Nature => &[
                "nature", "outside", "outdoors", "park", "garden", "hike", "trees", "plants",
            ],
        }
    }
}

/// Fine-grained affect signal beyond the coarse sentiment label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmotionTag {
    Frustration,
    Hope,
    Confusion,
    Gratitude,
}

impl EmotionTag {
    /// Keyword fragments whose presence sets this tag.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            EmotionTag::Frustration => &["frustrat", "annoy", "irritate", "upset", "bothered"],
            EmotionTag::Hope => &["hope", "optimistic", "looking forward", "better", "improve"],
            EmotionTag::Confusion => &[
                "confus",
                "uncertain",
                "not sure",
                "don't know",
                "unclear",
                "lost",
            ],
            EmotionTag::Gratitude => &["grateful", "thankful", "appreciate", "blessed"],
        }
    }
}

/// The three signal sets computed once per journal entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalSet {
    pub themes: HashSet<ThemeTag>,
    pub interests: HashSet<InterestTag>,
    pub emotions: HashSet<EmotionTag>,
}

impl SignalSet {
    /// Extract all signals from the given journal text.
    ///
    /// Pure function of the lowercased content: identical input always
    /// yields an identical set.
    pub fn extract(text: &str) -> Self {
        let lower = text.to_lowercase();

        let themes = ThemeTag::iter()
            .filter(|tag| tag.keywords().iter().any(|kw| lower.contains(kw)))
            .collect();
        let interests = InterestTag::iter()
            .filter(|tag| tag.keywords().iter().any(|kw| lower.contains(kw)))
            .collect();
        let emotions = EmotionTag::iter()
            .filter(|tag| tag.keywords().iter().any(|kw| lower.contains(kw)))
            .collect();

        Self {
            themes,
            interests,
            emotions,
        }
    }

    pub fn has_theme(&self, tag: ThemeTag) -> bool {
        self.themes.contains(&tag)
    }

    pub fn has_interest(&self, tag: InterestTag) -> bool {
        self.interests.contains(&tag)
    }

    pub fn has_emotion(&self, tag: EmotionTag) -> bool {
        self.emotions.contains(&tag)
    }

    /// True when no theme was detected at all.
    pub fn no_themes(&self) -> bool {
        self.themes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_empty_sets() {
        let signals = SignalSet::extract("");
        assert!(signals.themes.is_empty());
        assert!(signals.interests.is_empty());
        assert!(signals.emotions.is_empty());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let upper = SignalSet::extract("I am SO STRESSED about everything");
        let lower = SignalSet::extract("i am so stressed about everything");
        assert!(upper.has_theme(ThemeTag::Stress));
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_substring_matching_without_boundaries() {
        // "frustrat" is a fragment, not a word
        let signals = SignalSet::extract("this is frustrating");
        assert!(signals.has_emotion(EmotionTag::Frustration));
    }

    #[test]
    fn test_multiple_categories_detected_independently() {
        let signals =
            SignalSet::extract("I'm so stressed about my deadline at work and feel frustrated");
        assert!(signals.has_theme(ThemeTag::Stress));
        assert!(signals.has_theme(ThemeTag::Work));
        assert!(signals.has_emotion(EmotionTag::Frustration));
        assert!(signals.interests.is_empty());
    }

    #[test]
    fn test_neutral_text_sets_nothing() {
        let signals = SignalSet::extract("The sky is blue today");
        assert!(signals.no_themes());
        assert!(signals.interests.is_empty());
        assert!(signals.emotions.is_empty());
    }

    #[test]
    fn test_walk_in_the_park() {
        let signals = SignalSet::extract("I went for a walk outside in the park and felt calm");
        assert!(signals.has_interest(InterestTag::Nature));
        assert!(signals.has_interest(InterestTag::PhysicalActivity));
        assert!(signals.has_interest(InterestTag::Mindfulness));
        assert!(signals.no_themes());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "Grateful for my family, though work keeps me up at night";
        assert_eq!(SignalSet::extract(text), SignalSet::extract(text));
    }

    #[test]
    fn test_multi_word_fragment() {
        let signals = SignalSet::extract("I keep thinking I don't know what comes next");
        assert!(signals.has_emotion(EmotionTag::Confusion));
    }
}

//! Compile-time catalog of coping exercises.
//!
//! Each exercise carries a stable identifier so deduplication can compare by
//! identity. The general pool is used only to pad a short selection and is
//! disjoint by id from every rule-table candidate.

/// An immutable (identifier, display text) pair.
#[derive(Debug, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub text: &'static str,
}

// Work-related exercises.

pub static THREE_GOOD_THINGS_AT_WORK: Exercise = Exercise {
    id: "three_good_things_at_work",
    text: "Try the 'Three Good Things at Work' exercise: At the end of each workday this week, write down three things that went well at work, no matter how small. For each positive event, note your role in it. This practice can help rebalance your perspective when work frustrations feel overwhelming.",
};

pub static NINETY_SECOND_PAUSE: Exercise = Exercise {
    id: "ninety_second_pause",
    text: "Practice the '90-second pause' technique when work stress arises: Set a timer for 90 seconds and focus only on your breathing while acknowledging the stress sensation in your body. Research shows most emotional reactions biochemically last about 90 seconds if we don't continue to feed them with thoughts. This gives you a reset button during challenging workdays.",
};

pub static WORK_CONTAINMENT_RITUAL: Exercise = Exercise {
    id: "work_containment_ritual",
    text: "Create a 'work containment ritual' to separate your professional and personal life. At the end of your workday, write down your top three priorities for tomorrow, then physically close your laptop or put away work materials while saying 'Work is complete for today.' This creates a psychological boundary that can prevent work stress from spilling into your personal time.",
};

// Relationship-focused exercises.

pub static CONNECTION_LETTER: Exercise = Exercise {
    id: "connection_letter",
    text: "Write a 'connection letter' (unsent) to the person you're missing or having challenges with. Express your feelings honestly without judgment, then ask yourself what core need is being revealed through these emotions. Often, relationship difficulties point to important values like security, recognition, or understanding.",
};

pub static ACTIVE_LISTENING_PLUS: Exercise = Exercise {
    id: "active_listening_plus",
    text: "Practice 'active listening plus' in your next important conversation: Give your full attention, avoid interrupting, and summarize what you've heard. Then add the 'plus' - ask one curious question that invites deeper sharing. This demonstrates genuine interest beyond just hearing words.",
};

// Sleep and rest exercises.

pub static FOUR_SEVEN_EIGHT_BREATHING: Exercise = Exercise {
    id: "four_seven_eight_breathing",
    text: "Try the '4-7-8 breathing technique' before bed: Inhale quietly through your nose for 4 seconds, hold your breath for 7 seconds, then exhale completely through your mouth for 8 seconds. Repeat 4 times. This pattern helps activate your parasympathetic nervous system, countering the sleep-disrupting effects of stress.",
};

pub static WORRY_DROP_RITUAL: Exercise = Exercise {
    id: "worry_drop_ritual",
    text: "Create a 'worry drop' ritual before sleep: Keep a dedicated notepad by your bed. When racing thoughts arise, write them down completely, then visualize physically placing them in a container until morning. Tell yourself, 'I've saved these thoughts and can address them tomorrow with a fresher mind.'",
};

// Health-focused exercises.

pub static BODY_APPRECIATION_SCAN: Exercise = Exercise {
    id: "body_appreciation_scan",
    text: "Practice a 3-minute body appreciation scan: Starting at your feet and moving upward, acknowledge something each part of your body allows you to do, regardless of pain or limitation. This shifts focus from what's wrong to what's still working, which research shows can actually reduce perceived pain intensity.",
};

pub static SYMPTOM_SCHEDULING: Exercise = Exercise {
    id: "symptom_scheduling",
    text: "Try 'symptom scheduling' for health anxiety: Set aside 5-10 minutes twice daily to focus completely on physical sensations and health concerns. Outside these times, when health worries arise, gently remind yourself they'll be addressed during the next scheduled session. This prevents health concerns from constantly interrupting your day.",
};

// Future planning exercises.

pub static VALUES_COMPASS: Exercise = Exercise {
    id: "values_compass",
    text: "Use the 'Values Compass' exercise: List 5-7 core values (like connection, growth, security, etc.) Then rate how satisfied you feel with each one currently (1-10) and identify one small action for your highest priority value. When feeling uncertain about the future, this reconnects you with what matters most.",
};

pub static POSSIBILITY_PORTFOLIO: Exercise = Exercise {
    id: "possibility_portfolio",
    text: "Create a 'possibility portfolio' where you write down different versions of your future without judging them. Include scenarios you're excited about alongside ones you're afraid of. For each, note one small step you could take to explore it. This transforms vague future anxiety into concrete options.",
};

// Interest-based exercises.

pub static EMOTIONAL_COLOR_MAPPING: Exercise = Exercise {
    id: "emotional_color_mapping",
    text: "Try 'emotional color mapping': Choose colors that represent different feelings you're experiencing. Without planning, create an abstract image using these colors. Once complete, notice which colors dominate, which are in conflict, and where they harmonize. This provides visual insight into your emotional landscape.",
};

pub static SENSORY_NATURE_IMMERSION: Exercise = Exercise {
    id: "sensory_nature_immersion",
    text: "Practice 'sensory nature immersion': Find a natural space (even a small park or garden) and spend 10 minutes systematically noticing something new through each sense. What subtle sounds, textures, or scents have you overlooked before? Research shows this practice reduces stress hormones more effectively than the same time spent in urban settings.",
};

pub static MICRO_MOVEMENTS: Exercise = Exercise {
    id: "micro_movements",
    text: "Incorporate 'micro-movements' throughout your day: Set a timer for once each hour and do 60 seconds of gentle movement (stretching, marching in place, or dancing to one song). These brief physical interludes interrupt stress cycles and release tension that accumulates when we're stationary.",
};

pub static RAIN_TECHNIQUE: Exercise = Exercise {
    id: "rain_technique",
    text: "Practice the 'RAIN' technique when feeling overwhelmed: Recognize the emotion, Allow it to be there without judgment, Investigate where you feel it in your body, and Nurture yourself with self-compassion. This approach helps you relate differently to difficult emotions without being controlled by them.",
};

// General wellbeing exercises used when no theme is detected.

pub static ALTERNATIVE_PERSPECTIVES: Exercise = Exercise {
    id: "alternative_perspectives",
    text: "Try the 'alternative perspectives' exercise: Write down a situation that's frustrating you. Then write three completely different interpretations of the same event. This cognitive flexibility practice helps reduce the feeling that your initial negative interpretation is the only possible truth.",
};

pub static SPECIFIC_GRATITUDE: Exercise = Exercise {
    id: "specific_gratitude",
    text: "Practice 'specific gratitude': Instead of just listing what you're grateful for, describe exactly how it affects you. For example, rather than 'I'm grateful for my friend,' try 'I'm grateful for how my friend remembered that small detail about my preference, which made me feel truly seen.' This depth amplifies the positive emotional impact.",
};

pub static VALUES_BASED_DECISION_FILTER: Exercise = Exercise {
    id: "values_based_decision_filter",
    text: "Experiment with a 'values-based decision filter': Identify your top three personal values (such as connection, growth, authenticity, etc.) When facing choices, ask yourself which option best honors these values. This creates clarity when you feel conflicted about what to do next.",
};

// Padding pool, iterated in order when the rule table selects fewer than
// three exercises. Must stay disjoint by id from the rule-table candidates.

pub static SELF_COMPASSION_PRACTICE: Exercise = Exercise {
    id: "self_compassion_practice",
    text: "Try a brief self-compassion practice: Place your hand on your heart, take three deep breaths, and tell yourself, 'This is a moment of difficulty. Difficulty is part of living. May I be kind to myself in this moment.' Research shows this simple practice can reduce stress hormones and increase feelings of connection.",
};

pub static MENTAL_SUBTRACTION: Exercise = Exercise {
    id: "mental_subtraction",
    text: "Experiment with 'mental subtraction': Identify something positive in your life, then imagine it never happened. Consider how different your life would be without this person, experience, or opportunity. This practice counteracts hedonic adaptation - our tendency to take positive aspects of life for granted.",
};

pub static GROUNDING_3_3_3: Exercise = Exercise {
    id: "grounding_3_3_3",
    text: "Practice the '3-3-3 grounding technique' when feeling overwhelmed: Name 3 things you can see, 3 things you can hear, and move 3 parts of your body. This simple exercise activates different parts of your brain and nervous system, creating an immediate shift in your emotional state.",
};

/// General-purpose pool used only for padding, in fixed order.
pub static GENERAL_POOL: &[&Exercise] = &[
    &SELF_COMPASSION_PRACTICE,
    &MENTAL_SUBTRACTION,
    &GROUNDING_3_3_3,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::rules::RULE_TABLE;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = HashSet::new();
        for entry in RULE_TABLE {
            assert!(
                seen.insert(entry.exercise.id),
                "duplicate rule-table id: {}",
                entry.exercise.id
            );
        }
        for exercise in GENERAL_POOL {
            assert!(
                seen.insert(exercise.id),
                "pool id collides with catalog: {}",
                exercise.id
            );
        }
    }

    #[test]
    fn test_general_pool_covers_minimum_fill() {
        // The fill controller needs at least three pool entries that can
        // never appear in a rule-derived candidate list.
        assert!(GENERAL_POOL.len() >= 3);
    }
}

use crate::core::calculator::Answers;
use crate::core::score::Level;
use serde::Serialize;

pub const MAX_LOW_SLEEP_SCORE: u32 = 12;
pub const MAX_MODERATE_SLEEP_SCORE: u32 = 20;

pub const SLEEP_TIPS: [&str; 4] = [
    "Set a \"digital sunset\" 1 hour before bed",
    "Keep your phone outside the bedroom",
    "Use night mode or blue light filters after sunset",
    "Replace late-night scrolling with reading or journaling",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SleepImpact {
    pub score: u32,
    pub level: Level,
    pub title: String,
    pub message: String,
    pub tips: Vec<String>,
}

pub fn sleep_score(answers: &Answers) -> u32 {
    answers.values().map(|value| u32::from(*value)).sum()
}

pub fn level_for_sleep_score(score: u32) -> Level {
    match score {
        0..=MAX_LOW_SLEEP_SCORE => Level::Low,
        13..=MAX_MODERATE_SLEEP_SCORE => Level::Moderate,
        _ => Level::High,
    }
}

/// Returns `None` when the optional sleep section was skipped.
pub fn classify(answers: &Answers) -> Option<SleepImpact> {
    if answers.is_empty() {
        return None;
    }

    let score = sleep_score(answers);
    let level = level_for_sleep_score(score);
    let (title, message) = match level {
        Level::High => (
            "Significant Sleep Impact Detected",
            "Your digital habits appear to be significantly affecting your sleep quality. This can impact your energy, focus, and overall well-being.",
        ),
        Level::Moderate => (
            "Moderate Sleep Impact",
            "Some of your digital habits may be affecting your sleep. Small adjustments could help improve your rest quality.",
        ),
        Level::Low => (
            "Healthy Sleep Habits",
            "Your digital habits don't seem to significantly impact your sleep. Keep maintaining these healthy boundaries!",
        ),
    };

    let tips = if level == Level::Low {
        Vec::new()
    } else {
        SLEEP_TIPS.iter().map(|tip| tip.to_string()).collect()
    };

    tracing::debug!(score, level = level.as_str(), "classified sleep impact");

    Some(SleepImpact {
        score,
        level,
        title: title.to_string(),
        message: message.to_string(),
        tips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(values: [u8; 6]) -> Answers {
        (101..=106).zip(values).collect()
    }

    #[test]
    fn classifies_sleep_boundaries() {
        assert_eq!(level_for_sleep_score(6), Level::Low);
        assert_eq!(level_for_sleep_score(12), Level::Low);
        assert_eq!(level_for_sleep_score(13), Level::Moderate);
        assert_eq!(level_for_sleep_score(20), Level::Moderate);
        assert_eq!(level_for_sleep_score(21), Level::High);
        assert_eq!(level_for_sleep_score(30), Level::High);
    }

    #[test]
    fn skipped_section_has_no_impact() {
        assert!(classify(&Answers::new()).is_none());
    }

    #[test]
    fn picks_canned_message_per_level() {
        let low = classify(&sheet([2, 2, 2, 2, 2, 2])).unwrap();
        assert_eq!(low.score, 12);
        assert_eq!(low.level, Level::Low);
        assert_eq!(low.title, "Healthy Sleep Habits");
        assert!(low.tips.is_empty());

        let moderate = classify(&sheet([3, 2, 2, 2, 2, 2])).unwrap();
        assert_eq!(moderate.score, 13);
        assert_eq!(moderate.level, Level::Moderate);
        assert_eq!(moderate.tips.len(), SLEEP_TIPS.len());

        let high = classify(&sheet([4, 4, 4, 3, 3, 3])).unwrap();
        assert_eq!(high.score, 21);
        assert_eq!(high.level, Level::High);
        assert_eq!(high.title, "Significant Sleep Impact Detected");
    }
}

use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::fmt;

pub const MAX_LOW_SCORE: u32 = 24;
pub const MAX_MODERATE_SCORE: u32 = 42;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Digital Distraction",
            Self::Moderate => "Moderate Digital Distraction",
            Self::High => "High Digital Distraction",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Low => {
                "Great job! You demonstrate healthy digital habits and strong focus. Your relationship with technology appears balanced, allowing you to stay productive and present."
            }
            Self::Moderate => {
                "You have a mixed relationship with digital devices. While you manage some areas well, there are opportunities to improve your focus and reduce distractions."
            }
            Self::High => {
                "Digital distractions significantly impact your daily life. Don't worry, awareness is the first step. With intentional changes, you can regain control over your focus and time."
            }
        }
    }

    /// Capitalized form used by the assessment record.
    pub fn title(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    pub fn colored(self, text: &str) -> ColoredString {
        match self {
            Self::Low => text.green().bold(),
            Self::Moderate => text.yellow().bold(),
            Self::High => text.red().bold(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn level_for_score(total: u32) -> Level {
    match total {
        0..=MAX_LOW_SCORE => Level::Low,
        25..=MAX_MODERATE_SCORE => Level::Moderate,
        _ => Level::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_level_boundaries() {
        assert_eq!(level_for_score(0), Level::Low);
        assert_eq!(level_for_score(24), Level::Low);
        assert_eq!(level_for_score(25), Level::Moderate);
        assert_eq!(level_for_score(42), Level::Moderate);
        assert_eq!(level_for_score(43), Level::High);
        assert_eq!(level_for_score(60), Level::High);
    }

    #[test]
    fn level_lookup_is_static() {
        assert_eq!(Level::Moderate.label(), "Moderate Digital Distraction");
        assert_eq!(Level::High.title(), "High");
        assert_eq!(serde_json::to_string(&Level::Low).unwrap(), "\"low\"");
    }
}

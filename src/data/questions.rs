use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Notifications,
    Multitasking,
    Scrolling,
    Avoidance,
    Anxiety,
    TimeManagement,
}

impl Category {
    /// Fixed iteration order used by every aggregation and tie-break.
    pub const ALL: [Category; 6] = [
        Self::Notifications,
        Self::Multitasking,
        Self::Scrolling,
        Self::Avoidance,
        Self::Anxiety,
        Self::TimeManagement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::Multitasking => "multitasking",
            Self::Scrolling => "scrolling",
            Self::Avoidance => "avoidance",
            Self::Anxiety => "anxiety",
            Self::TimeManagement => "time-management",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Notification Dependency",
            Self::Multitasking => "Multitasking Habits",
            Self::Scrolling => "Mindless Scrolling",
            Self::Avoidance => "Digital Avoidance",
            Self::Anxiety => "Phone Anxiety",
            Self::TimeManagement => "Time Management",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Self::Notifications => {
                "Try enabling 'Do Not Disturb' during focused work sessions and batch-check notifications at set intervals."
            }
            Self::Multitasking => {
                "Practice single-tasking by closing unnecessary tabs and apps. Focus on one task until completion."
            }
            Self::Scrolling => {
                "Set specific times for social media use and use app timers to limit mindless browsing."
            }
            Self::Avoidance => {
                "When tempted to reach for your phone, pause and identify the task you're avoiding. Break it into smaller steps."
            }
            Self::Anxiety => {
                "Gradually increase phone-free periods. Start with 15 minutes and build up. Keep your phone in another room during focused time."
            }
            Self::TimeManagement => {
                "Use time-blocking techniques and set clear boundaries for device usage during productive hours."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: Category,
}

pub static QUESTIONS: [Question; 12] = [
    Question {
        id: 1,
        text: "I check my phone for notifications even when I'm in the middle of an important task.",
        category: Category::Notifications,
    },
    Question {
        id: 2,
        text: "I switch between apps or browser tabs without finishing what I started.",
        category: Category::Multitasking,
    },
    Question {
        id: 3,
        text: "I scroll through social media without a specific purpose.",
        category: Category::Scrolling,
    },
    Question {
        id: 4,
        text: "I get distracted by online content (videos, news, memes) when I should be studying or working.",
        category: Category::Scrolling,
    },
    Question {
        id: 5,
        text: "I use my phone as a way to avoid or postpone work.",
        category: Category::Avoidance,
    },
    Question {
        id: 6,
        text: "I have trouble concentrating on a single activity because of digital interruptions.",
        category: Category::Multitasking,
    },
    Question {
        id: 7,
        text: "I feel compelled to respond to messages or notifications immediately.",
        category: Category::Notifications,
    },
    Question {
        id: 8,
        text: "I find myself mindlessly browsing the internet or apps.",
        category: Category::Scrolling,
    },
    Question {
        id: 9,
        text: "I feel anxious or restless when I cannot check my phone.",
        category: Category::Anxiety,
    },
    Question {
        id: 10,
        text: "My digital habits have caused missed deadlines or reduced performance.",
        category: Category::TimeManagement,
    },
    Question {
        id: 11,
        text: "I lose track of time while using my phone.",
        category: Category::TimeManagement,
    },
    Question {
        id: 12,
        text: "I feel that my phone use interferes with my ability to focus on important tasks.",
        category: Category::Avoidance,
    },
];

pub const ANSWER_OPTIONS: [(u8, &str); 5] = [
    (1, "Never"),
    (2, "Rarely"),
    (3, "Sometimes"),
    (4, "Often"),
    (5, "Always"),
];

static QUESTION_INDEX: Lazy<HashMap<u32, &'static Question>> =
    Lazy::new(|| QUESTIONS.iter().map(|question| (question.id, question)).collect());

static MEMBER_COUNTS: Lazy<HashMap<Category, u32>> = Lazy::new(|| {
    let mut counts = HashMap::new();
    for question in &QUESTIONS {
        *counts.entry(question.category).or_insert(0) += 1;
    }
    counts
});

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTION_INDEX.get(&id).copied()
}

/// Number of questions in the category's fixed set, independent of answers.
pub fn member_count(category: Category) -> u32 {
    MEMBER_COUNTS.get(&category).copied().unwrap_or(0)
}

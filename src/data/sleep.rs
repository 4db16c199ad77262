use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SleepQuestion {
    pub id: u32,
    pub text: &'static str,
}

pub static SLEEP_QUESTIONS: [SleepQuestion; 6] = [
    SleepQuestion {
        id: 101,
        text: "I use my phone or digital devices close to bedtime.",
    },
    SleepQuestion {
        id: 102,
        text: "I find it difficult to fall asleep after using my phone at night.",
    },
    SleepQuestion {
        id: 103,
        text: "I often stay up later than planned because of digital content.",
    },
    SleepQuestion {
        id: 104,
        text: "My sleep quality feels reduced due to screen usage.",
    },
    SleepQuestion {
        id: 105,
        text: "I feel tired or low on energy during the day.",
    },
    SleepQuestion {
        id: 106,
        text: "I lose sleep because I keep checking my phone at night.",
    },
];

pub fn is_sleep_question(id: u32) -> bool {
    SLEEP_QUESTIONS.iter().any(|question| question.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_ids_are_disjoint_from_base_questions() {
        for question in &SLEEP_QUESTIONS {
            assert!(crate::data::questions::question(question.id).is_none());
        }
        assert!(is_sleep_question(101));
        assert!(is_sleep_question(106));
        assert!(!is_sleep_question(107));
    }
}

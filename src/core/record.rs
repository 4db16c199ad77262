use crate::core::calculator::{self, Answers};
use crate::core::score;
use crate::data::weak_areas;
use crate::utils::answers::AnswerInput;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const RECORD_ANSWER_THRESHOLD: u8 = 4;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Responses {
    pub digital_distraction: BTreeMap<String, u8>,
    pub sleep_impact: Option<BTreeMap<String, u8>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub total_score: u32,
    pub distraction_level: String,
}

/// Submission-shaped snapshot of one assessment. Personal details are not
/// part of the record.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub responses: Responses,
    pub scores: Scores,
    pub weak_areas: Vec<String>,
}

impl AssessmentRecord {
    pub fn build(input: &AnswerInput) -> Self {
        let total_score = calculator::total_score(&input.answers);
        let level = score::level_for_score(total_score);

        Self {
            responses: Responses {
                digital_distraction: keyed(&input.answers),
                sleep_impact: if input.sleep.is_empty() {
                    None
                } else {
                    Some(keyed(&input.sleep))
                },
            },
            scores: Scores {
                total_score,
                distraction_level: level.title().to_string(),
            },
            weak_areas: flagged_areas(&input.answers),
        }
    }
}

/// Distinct area names of every question answered 4 or higher, in question
/// id order.
pub fn flagged_areas(answers: &Answers) -> Vec<String> {
    let mut areas: Vec<String> = Vec::new();
    for (id, value) in answers {
        if *value < RECORD_ANSWER_THRESHOLD {
            continue;
        }
        let Some(name) = weak_areas::record_area_name(*id) else {
            continue;
        };
        if !areas.iter().any(|area| area == name) {
            areas.push(name.to_string());
        }
    }
    areas
}

pub fn write_record(record: &AssessmentRecord, path: &Path) -> Result<()> {
    let content =
        serde_json::to_string_pretty(record).context("failed to serialize assessment record")?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote assessment record");
    Ok(())
}

fn keyed(answers: &Answers) -> BTreeMap<String, u8> {
    answers
        .iter()
        .map(|(id, value)| (format!("q{id}"), *value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(answers: &[(u32, u8)], sleep: &[(u32, u8)]) -> AnswerInput {
        AnswerInput {
            answers: answers.iter().copied().collect(),
            sleep: sleep.iter().copied().collect(),
        }
    }

    #[test]
    fn flags_areas_once_in_question_order() {
        let areas = flagged_areas(&input(&[(11, 5), (3, 4), (10, 4), (8, 5), (1, 3)], &[]).answers);
        assert_eq!(
            areas,
            vec!["Mindless Scrolling".to_string(), "Time Blindness".to_string()]
        );
    }

    #[test]
    fn builds_submission_shaped_json() {
        let record = AssessmentRecord::build(&input(&[(1, 5), (7, 4), (9, 2)], &[(101, 3)]));
        assert_eq!(record.scores.total_score, 11);
        assert_eq!(record.scores.distraction_level, "Low");
        assert_eq!(
            record.weak_areas,
            vec![
                "Notification Dependency".to_string(),
                "Urgency & FOMO".to_string()
            ]
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["responses"]["digitalDistraction"]["q1"], 5);
        assert_eq!(json["responses"]["sleepImpact"]["q101"], 3);
        assert_eq!(json["scores"]["distractionLevel"], "Low");
        assert!(json["weakAreas"].is_array());
    }

    #[test]
    fn skipped_sleep_section_serializes_as_null() {
        let record = AssessmentRecord::build(&input(&[(1, 5)], &[]));
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["responses"]["sleepImpact"].is_null());
    }

    #[test]
    fn writes_record_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        let record = AssessmentRecord::build(&input(&[(2, 4)], &[]));
        write_record(&record, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"digitalDistraction\""));
        assert!(content.contains("Multitasking Habits"));
    }
}

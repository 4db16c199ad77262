use crate::config::StrengthFallback;
use crate::core::score::{self, Level};
use crate::data::questions::{self, QUESTIONS};
use crate::data::Category;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::BTreeMap;

pub type Answers = BTreeMap<u32, u8>;

pub const WEAK_AREA_THRESHOLD: f64 = 3.0;
pub const STRENGTH_THRESHOLD: f64 = 2.5;
pub const MAX_WEAK_AREAS: usize = 3;
pub const MAX_STRENGTHS: usize = 2;

pub const STRENGTH_MESSAGES: [&str; 5] = [
    "You maintain focus on important tasks",
    "You have healthy notification habits",
    "You use social media intentionally",
    "You manage your screen time effectively",
    "You stay present and avoid digital distractions",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryAggregate {
    pub total: u32,
    pub count: u32,
}

impl CategoryAggregate {
    pub fn average(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        f64::from(self.total) / f64::from(self.count)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub key: Category,
    pub category: String,
    pub total: u32,
    pub count: u32,
    pub average: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeakArea {
    pub key: Category,
    pub category: String,
    pub score: f64,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultData {
    pub total_score: u32,
    pub level: Level,
    pub level_label: String,
    pub level_description: String,
    pub strengths: Vec<String>,
    pub weak_areas: Vec<WeakArea>,
    pub improvement_tips: Vec<String>,
    pub category_scores: Vec<CategoryScore>,
}

pub fn compute(answers: &Answers) -> ResultData {
    compute_with(answers, StrengthFallback::Random, &mut rand::thread_rng())
}

/// Same as [`compute`], with the fallback strength rule and its random source
/// supplied by the caller.
pub fn compute_with<R: Rng + ?Sized>(
    answers: &Answers,
    fallback: StrengthFallback,
    rng: &mut R,
) -> ResultData {
    let total_score = total_score(answers);
    let level = score::level_for_score(total_score);
    let category_scores = category_scores(answers);

    let weak_areas = weak_areas(&category_scores);
    let mut strengths = strengths(&category_scores);
    if strengths.is_empty() && level != Level::High {
        if let Some(message) = fallback_strength(&category_scores, fallback, rng) {
            strengths.push(message);
        }
    }

    let improvement_tips = weak_areas.iter().map(|area| area.tip.clone()).collect();

    tracing::debug!(
        total_score,
        level = level.as_str(),
        weak_areas = weak_areas.len(),
        strengths = strengths.len(),
        "computed assessment result"
    );

    ResultData {
        total_score,
        level,
        level_label: level.label().to_string(),
        level_description: level.description().to_string(),
        strengths,
        weak_areas,
        improvement_tips,
        category_scores,
    }
}

pub fn total_score(answers: &Answers) -> u32 {
    answers.values().map(|value| u32::from(*value)).sum()
}

/// Sums one category's answers. The count follows the question table, so
/// unanswered members still divide.
pub fn aggregate(answers: &Answers, category: Category) -> CategoryAggregate {
    let total = QUESTIONS
        .iter()
        .filter(|question| question.category == category)
        .filter_map(|question| answers.get(&question.id))
        .map(|value| u32::from(*value))
        .sum();
    CategoryAggregate {
        total,
        count: questions::member_count(category),
    }
}

pub fn category_scores(answers: &Answers) -> Vec<CategoryScore> {
    Category::ALL
        .iter()
        .map(|category| {
            let data = aggregate(answers, *category);
            CategoryScore {
                key: *category,
                category: category.label().to_string(),
                total: data.total,
                count: data.count,
                average: data.average(),
            }
        })
        .collect()
}

fn weak_areas(scores: &[CategoryScore]) -> Vec<WeakArea> {
    let mut candidates: Vec<&CategoryScore> = scores
        .iter()
        .filter(|score| score.average > WEAK_AREA_THRESHOLD)
        .collect();
    // stable: equal averages keep category order
    candidates.sort_by(|a, b| b.average.total_cmp(&a.average));

    candidates
        .into_iter()
        .take(MAX_WEAK_AREAS)
        .map(|score| WeakArea {
            key: score.key,
            category: score.category.clone(),
            score: score.average,
            tip: score.key.tip().to_string(),
        })
        .collect()
}

fn strengths(scores: &[CategoryScore]) -> Vec<String> {
    scores
        .iter()
        .filter(|score| score.average < STRENGTH_THRESHOLD)
        .take(MAX_STRENGTHS)
        .map(|score| strength_message(score.key))
        .collect()
}

pub fn strength_message(category: Category) -> String {
    format!("You manage {} well", category.label().to_lowercase())
}

fn fallback_strength<R: Rng + ?Sized>(
    scores: &[CategoryScore],
    fallback: StrengthFallback,
    rng: &mut R,
) -> Option<String> {
    match fallback {
        StrengthFallback::Random => STRENGTH_MESSAGES
            .choose(rng)
            .map(|message| message.to_string()),
        StrengthFallback::LowestAverage => scores
            .iter()
            .min_by(|a, b| a.average.total_cmp(&b.average))
            .map(|score| {
                format!(
                    "Your strongest area is {}",
                    score.key.label().to_lowercase()
                )
            }),
    }
}

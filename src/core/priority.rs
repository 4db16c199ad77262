use crate::core::calculator::Answers;
use crate::data::questions;
use crate::data::weak_areas::{self, WeakAreaDetail};
use crate::data::Category;
use serde::Serialize;

pub const PRIORITY_ANSWER_THRESHOLD: u8 = 4;
pub const MAX_PRIORITY_AREAS: usize = 2;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityArea {
    pub category: Category,
    pub total_score: u32,
    pub max_score: u32,
    pub count: u32,
    pub detail: &'static WeakAreaDetail,
}

/// Ranks categories by the summed raw score of their questions answered 4 or
/// higher. This differs from the weak-area ranking on purpose: it sums raw
/// answers instead of averaging, and filters per question instead of per
/// category.
pub fn priority_areas(answers: &Answers) -> Vec<PriorityArea> {
    let mut critical: Vec<(u32, u8, Category)> = answers
        .iter()
        .filter(|(_, value)| **value >= PRIORITY_ANSWER_THRESHOLD)
        .filter_map(|(id, value)| {
            questions::question(*id).map(|question| (*id, *value, question.category))
        })
        .collect();
    // highest answers first; categories enter the ranking in this order
    critical.sort_by(|a, b| b.1.cmp(&a.1));

    let mut grouped: Vec<(Category, u32, u32)> = Vec::new();
    for (_, value, category) in critical {
        match grouped.iter_mut().find(|(seen, _, _)| *seen == category) {
            Some((_, total, count)) => {
                *total += u32::from(value);
                *count += 1;
            }
            None => grouped.push((category, u32::from(value), 1)),
        }
    }
    grouped.sort_by(|a, b| b.1.cmp(&a.1));

    grouped
        .into_iter()
        .filter_map(|(category, total_score, count)| {
            weak_areas::detail_for(category).map(|detail| PriorityArea {
                category,
                total_score,
                max_score: count * u32::from(questions::MAX_ANSWER),
                count,
                detail,
            })
        })
        .take(MAX_PRIORITY_AREAS)
        .collect()
}

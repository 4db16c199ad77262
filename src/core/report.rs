use crate::config::ReportConfig;
use crate::core::batch::BatchReport;
use crate::core::calculator::{ResultData, STRENGTH_THRESHOLD, WEAK_AREA_THRESHOLD};
use crate::core::priority::PriorityArea;
use crate::core::score::Level;
use crate::core::sleep::SleepImpact;
use crate::data::Question;
use crate::data::questions::{self, ANSWER_OPTIONS, QUESTIONS};
use crate::data::sleep::{SLEEP_QUESTIONS, SleepQuestion};
use colored::Colorize;
use serde::Serialize;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub result: ResultData,
    pub sleep: Option<SleepImpact>,
    pub priority_areas: Vec<PriorityArea>,
    pub missing_questions: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    #[serde(flatten)]
    pub result: ResultData,
    pub sleep_impact: Option<SleepImpact>,
    pub priority_areas: Vec<PriorityArea>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_questions: Vec<u32>,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            result: report.result.clone(),
            sleep_impact: report.sleep.clone(),
            priority_areas: report.priority_areas.clone(),
            missing_questions: report.missing_questions.clone(),
        }
    }
}

pub fn print_human(report: &FinalReport, cfg: &ReportConfig) {
    let result = &report.result;
    println!(
        "Distraction Score: {}/60 ({})",
        result.total_score,
        result.level.colored(&result.level_label)
    );
    println!("{}", result.level_description);

    if !report.missing_questions.is_empty() {
        println!();
        println!(
            "{} unanswered questions counted as 0: {}",
            "note:".yellow().bold(),
            join_ids(&report.missing_questions)
        );
    }

    if cfg.show_category_scores {
        println!();
        println!("{}", "Category Breakdown".bold());
        for score in &result.category_scores {
            println!(
                "{:<24} {} {:.1}/5",
                score.category,
                bar(score.average),
                score.average
            );
        }
    }

    if !result.strengths.is_empty() {
        println!();
        println!("{} ({})", "STRENGTHS".green().bold(), result.strengths.len());
        for strength in &result.strengths {
            println!("+ {}", strength);
        }
    }

    if !result.weak_areas.is_empty() {
        println!();
        println!(
            "{} ({})",
            "AREAS TO IMPROVE".yellow().bold(),
            result.weak_areas.len()
        );
        for area in &result.weak_areas {
            println!("[{:.1}] {}", area.score, area.category);
            println!("-> tip: {}", area.tip);
        }
    }

    if cfg.show_priority_areas {
        print_priority_areas(&report.priority_areas);
    }

    if let Some(sleep) = &report.sleep {
        print_sleep(sleep);
    }
}

fn print_priority_areas(areas: &[PriorityArea]) {
    println!();
    println!("{}", "PRIORITY FOCUS AREAS".bold());
    if areas.is_empty() {
        println!("No critical areas need immediate attention. Keep up the healthy habits.");
        return;
    }

    for area in areas {
        println!(
            "{} ({}/{})",
            area.detail.title.red().bold(),
            area.total_score,
            area.max_score
        );
        println!("{}", area.detail.description);
        println!("why it matters: {}", area.detail.why_it_matters);
        println!("today: {}", area.detail.quick_action);
        println!(
            "{}: {} <{}>",
            area.detail.resource.kind.action(),
            area.detail.resource.title,
            area.detail.resource.url
        );
        println!("tool: {} <{}>", area.detail.tool.name, area.detail.tool.url);
    }
}

pub fn print_sleep(sleep: &SleepImpact) {
    println!();
    println!(
        "{} {}",
        "SLEEP".blue().bold(),
        sleep.level.colored(&sleep.title)
    );
    println!("score: {}/30", sleep.score);
    println!("{}", sleep.message);
    for tip in &sleep.tips {
        println!("- {}", tip);
    }
}

pub fn print_sleep_skipped() {
    println!("Sleep section skipped; answer questions 101-106 to see your sleep impact.");
}

pub fn print_batch(report: &BatchReport) {
    println!("Scored {} answer sheets", report.entries.len());
    for entry in &report.entries {
        println!(
            "{:>2}/60 {:<8} {}",
            entry.total_score,
            entry.level.colored(entry.level.as_str()),
            entry.file
        );
    }

    if !report.skipped.is_empty() {
        println!();
        println!("{} ({})", "SKIPPED".yellow().bold(), report.skipped.len());
        for skipped in &report.skipped {
            println!("{} - {}", skipped.file, skipped.reason);
        }
    }

    println!();
    println!(
        "low: {}  moderate: {}  high: {}",
        report.counts.low, report.counts.moderate, report.counts.high
    );
}

pub fn print_questions() {
    let scale = ANSWER_OPTIONS
        .iter()
        .map(|(value, label)| format!("{value}={label}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Answer scale: {}", scale);
    println!();
    for question in &QUESTIONS {
        println!(
            "{:>3}. [{}] {}",
            question.id,
            question.category.key(),
            question.text
        );
    }
    println!();
    println!("{} (optional)", "Sleep".bold());
    for question in &SLEEP_QUESTIONS {
        println!("{:>3}. {}", question.id, question.text);
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionCatalog {
    pub scale: Vec<ScaleOption>,
    pub questions: Vec<Question>,
    pub sleep: Vec<SleepQuestion>,
}

#[derive(Debug, Serialize)]
pub struct ScaleOption {
    pub value: u8,
    pub label: &'static str,
}

impl QuestionCatalog {
    pub fn build() -> Self {
        Self {
            scale: ANSWER_OPTIONS
                .iter()
                .map(|(value, label)| ScaleOption {
                    value: *value,
                    label: *label,
                })
                .collect(),
            questions: QUESTIONS.to_vec(),
            sleep: SLEEP_QUESTIONS.to_vec(),
        }
    }
}

fn bar(average: f64) -> String {
    let max = f64::from(questions::MAX_ANSWER);
    let filled = ((average / max) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let level = if average > WEAK_AREA_THRESHOLD {
        Level::High
    } else if average < STRENGTH_THRESHOLD {
        Level::Low
    } else {
        Level::Moderate
    };
    format!(
        "{}{}",
        level.colored(&"#".repeat(filled)),
        ".".repeat(BAR_WIDTH - filled)
    )
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrengthFallback;
    use crate::core::calculator::{self, Answers};
    use crate::core::{priority, sleep};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_report() -> FinalReport {
        let answers: Answers = QUESTIONS.iter().map(|q| (q.id, 4)).collect();
        let sleep_answers: Answers = SLEEP_QUESTIONS.iter().map(|q| (q.id, 2)).collect();
        FinalReport {
            result: calculator::compute_with(
                &answers,
                StrengthFallback::Random,
                &mut StdRng::seed_from_u64(1),
            ),
            sleep: sleep::classify(&sleep_answers),
            priority_areas: priority::priority_areas(&answers),
            missing_questions: Vec::new(),
        }
    }

    #[test]
    fn json_report_flattens_result_fields() {
        let report = sample_report();
        let json = serde_json::to_value(JsonReport::from(&report)).unwrap();
        assert_eq!(json["totalScore"], 48);
        assert_eq!(json["level"], "high");
        assert_eq!(json["levelLabel"], "High Digital Distraction");
        assert_eq!(json["weakAreas"].as_array().unwrap().len(), 3);
        assert_eq!(json["sleepImpact"]["level"], "low");
        assert_eq!(json["priorityAreas"][0]["category"], "scrolling");
        assert!(json["priorityAreas"][0]["detail"]["quickAction"].is_string());
        assert!(json.get("missingQuestions").is_none());
    }

    #[test]
    fn bar_is_bounded() {
        colored::control::set_override(false);
        assert_eq!(bar(0.0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(5.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(2.5).len(), BAR_WIDTH);
    }

    #[test]
    fn question_catalog_lists_everything() {
        let catalog = QuestionCatalog::build();
        assert_eq!(catalog.scale.len(), 5);
        assert_eq!(catalog.questions.len(), 12);
        assert_eq!(catalog.sleep.len(), 6);
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["questions"][9]["category"], "time-management");
    }
}

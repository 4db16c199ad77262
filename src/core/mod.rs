pub mod batch;
pub mod calculator;
pub mod priority;
pub mod record;
pub mod report;
pub mod score;
pub mod sleep;

use crate::config::Config;
use crate::core::report::FinalReport;
use crate::utils::answers::AnswerInput;
use anyhow::{Result, bail};
use rand::Rng;

pub fn run_assessment(input: &AnswerInput, cfg: &Config, strict: bool) -> Result<FinalReport> {
    run_assessment_with(input, cfg, strict, &mut rand::thread_rng())
}

pub fn run_assessment_with<R: Rng + ?Sized>(
    input: &AnswerInput,
    cfg: &Config,
    strict: bool,
    rng: &mut R,
) -> Result<FinalReport> {
    check_completeness(input, strict || cfg.general.strict)?;
    tracing::debug!(fallback = %cfg.general.strength_fallback, "running assessment");

    let result = calculator::compute_with(&input.answers, cfg.general.strength_fallback, rng);
    let sleep = sleep::classify(&input.sleep);
    let priority_areas = priority::priority_areas(&input.answers);

    Ok(FinalReport {
        result,
        sleep,
        priority_areas,
        missing_questions: input.missing_questions(),
    })
}

pub fn check_completeness(input: &AnswerInput, strict: bool) -> Result<()> {
    let missing = input.missing_questions();
    let missing_sleep = input.missing_sleep_questions();
    if missing.is_empty() && missing_sleep.is_empty() {
        return Ok(());
    }

    if strict {
        if !missing.is_empty() {
            bail!(
                "{} of 12 questions unanswered (missing ids: {:?})",
                missing.len(),
                missing
            );
        }
        bail!(
            "sleep section started but {} of 6 questions unanswered (missing ids: {:?})",
            missing_sleep.len(),
            missing_sleep
        );
    }

    tracing::warn!(
        missing = missing.len(),
        missing_sleep = missing_sleep.len(),
        "incomplete answer sheet; unanswered questions count as 0"
    );
    Ok(())
}

use crate::core::calculator::Answers;
use crate::data::questions::{self, MAX_ANSWER, MIN_ANSWER, QUESTIONS};
use crate::data::sleep::{self, SLEEP_QUESTIONS};
use crate::utils::fs::{SheetFormat, sheet_format};
use anyhow::{Context, Result, anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*q?(\d+)\s*[=:]\s*(-?\d+)\s*$").expect("valid answer token regex")
});
static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*q?(\d+)\s*$").expect("valid answer key regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerInput {
    pub answers: Answers,
    pub sleep: Answers,
}

impl AnswerInput {
    pub fn missing_questions(&self) -> Vec<u32> {
        QUESTIONS
            .iter()
            .map(|question| question.id)
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    /// Only meaningful once the sleep section was started.
    pub fn missing_sleep_questions(&self) -> Vec<u32> {
        if self.sleep.is_empty() {
            return Vec::new();
        }
        SLEEP_QUESTIONS
            .iter()
            .map(|question| question.id)
            .filter(|id| !self.sleep.contains_key(id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_questions().is_empty() && self.missing_sleep_questions().is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSheet {
    answers: BTreeMap<String, i64>,
    sleep: BTreeMap<String, i64>,
}

pub fn load_sheet(path: &Path) -> Result<AnswerInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading answer sheet {}", path.display()))?;
    let parsed = match sheet_format(path) {
        Some(SheetFormat::Json) => parse_sheet_json(&content),
        Some(SheetFormat::Toml) => parse_sheet_toml(&content),
        None => bail!(
            "unsupported answer sheet {} (expected .json or .toml)",
            path.display()
        ),
    };

    parsed.with_context(|| format!("invalid answer sheet {}", path.display()))
}

pub fn parse_sheet_json(content: &str) -> Result<AnswerInput> {
    let raw = serde_json::from_str::<RawSheet>(content).context("failed parsing answer sheet")?;
    from_raw(raw)
}

pub fn parse_sheet_toml(content: &str) -> Result<AnswerInput> {
    let raw = toml::from_str::<RawSheet>(content).context("failed parsing answer sheet")?;
    from_raw(raw)
}

fn from_raw(raw: RawSheet) -> Result<AnswerInput> {
    let mut input = AnswerInput::default();
    for (key, value) in raw.answers {
        let id = parse_key(&key)?;
        if input.answers.contains_key(&id) {
            bail!("question {id} answered twice");
        }
        insert_answer(&mut input.answers, id, value)?;
    }
    for (key, value) in raw.sleep {
        let id = parse_key(&key)?;
        if input.sleep.contains_key(&id) {
            bail!("sleep question {id} answered twice");
        }
        insert_sleep_answer(&mut input.sleep, id, value)?;
    }
    Ok(input)
}

/// Builds the input from an optional sheet plus inline tokens; tokens win.
pub fn collect_input(
    sheet: Option<&Path>,
    answer_tokens: &[String],
    sleep_tokens: &[String],
) -> Result<AnswerInput> {
    let mut input = match sheet {
        Some(path) => load_sheet(path)?,
        None => AnswerInput::default(),
    };

    for token in answer_tokens {
        let (id, value) = parse_token(token)?;
        insert_answer(&mut input.answers, id, value)
            .with_context(|| format!("invalid --answer {token}"))?;
    }
    for token in sleep_tokens {
        let (id, value) = parse_token(token)?;
        insert_sleep_answer(&mut input.sleep, id, value)
            .with_context(|| format!("invalid --sleep-answer {token}"))?;
    }

    Ok(input)
}

pub fn parse_token(token: &str) -> Result<(u32, i64)> {
    let caps = TOKEN_RE
        .captures(token)
        .ok_or_else(|| anyhow!("expected ID=VALUE, got `{token}`"))?;
    let id = caps[1]
        .parse::<u32>()
        .with_context(|| format!("question id out of range in `{token}`"))?;
    let value = caps[2]
        .parse::<i64>()
        .with_context(|| format!("answer value out of range in `{token}`"))?;
    Ok((id, value))
}

fn parse_key(key: &str) -> Result<u32> {
    let caps = KEY_RE
        .captures(key)
        .ok_or_else(|| anyhow!("invalid question key `{key}` (expected `7` or `q7`)"))?;
    caps[1]
        .parse::<u32>()
        .with_context(|| format!("question id out of range in `{key}`"))
}

fn insert_answer(answers: &mut Answers, id: u32, value: i64) -> Result<()> {
    if questions::question(id).is_none() {
        if sleep::is_sleep_question(id) {
            bail!("question {id} is a sleep question; answer it in the sleep section");
        }
        bail!("unknown question id {id}");
    }
    answers.insert(id, checked_value(id, value)?);
    Ok(())
}

fn insert_sleep_answer(answers: &mut Answers, id: u32, value: i64) -> Result<()> {
    if !sleep::is_sleep_question(id) {
        bail!("unknown sleep question id {id}");
    }
    answers.insert(id, checked_value(id, value)?);
    Ok(())
}

fn checked_value(id: u32, value: i64) -> Result<u8> {
    match u8::try_from(value) {
        Ok(value) if (MIN_ANSWER..=MAX_ANSWER).contains(&value) => Ok(value),
        _ => bail!("answer for question {id} must be between {MIN_ANSWER} and {MAX_ANSWER}, got {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inline_tokens() {
        assert_eq!(parse_token("7=4").unwrap(), (7, 4));
        assert_eq!(parse_token("q12:5").unwrap(), (12, 5));
        assert_eq!(parse_token(" Q3 = 1 ").unwrap(), (3, 1));
        assert!(parse_token("seven=4").is_err());
        assert!(parse_token("7").is_err());
    }

    #[test]
    fn parses_json_sheet_with_both_key_styles() {
        let input = parse_sheet_json(
            r#"{ "answers": { "1": 5, "q2": 4 }, "sleep": { "q101": 3 } }"#,
        )
        .unwrap();
        assert_eq!(input.answers.get(&1), Some(&5));
        assert_eq!(input.answers.get(&2), Some(&4));
        assert_eq!(input.sleep.get(&101), Some(&3));
        assert_eq!(input.missing_questions().len(), 10);
        assert_eq!(input.missing_sleep_questions(), vec![102, 103, 104, 105, 106]);
        assert!(!input.is_complete());
    }

    #[test]
    fn parses_toml_sheet_without_sleep_section() {
        let content = (1..=12)
            .map(|id| format!("q{id} = 3"))
            .collect::<Vec<_>>()
            .join("\n");
        let input = parse_sheet_toml(&format!("[answers]\n{content}\n")).unwrap();
        assert_eq!(input.answers.len(), 12);
        assert!(input.sleep.is_empty());
        assert!(input.missing_sleep_questions().is_empty());
        assert!(input.is_complete());
    }

    #[test]
    fn rejects_out_of_range_and_unknown_ids() {
        assert!(parse_sheet_json(r#"{ "answers": { "1": 6 } }"#).is_err());
        assert!(parse_sheet_json(r#"{ "answers": { "1": 0 } }"#).is_err());
        assert!(parse_sheet_json(r#"{ "answers": { "13": 3 } }"#).is_err());
        assert!(parse_sheet_json(r#"{ "answers": { "101": 3 } }"#).is_err());
        assert!(parse_sheet_json(r#"{ "sleep": { "1": 3 } }"#).is_err());
        assert!(parse_sheet_json(r#"{ "answers": { "abc": 3 } }"#).is_err());
    }

    #[test]
    fn inline_tokens_override_sheet_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        fs::write(&path, r#"{ "answers": { "1": 2, "2": 2 } }"#).unwrap();

        let input = collect_input(
            Some(&path),
            &["1=5".to_string()],
            &["104:2".to_string()],
        )
        .unwrap();
        assert_eq!(input.answers.get(&1), Some(&5));
        assert_eq!(input.answers.get(&2), Some(&2));
        assert_eq!(input.sleep.get(&104), Some(&2));

        assert!(collect_input(None, &["1=9".to_string()], &[]).is_err());
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.yaml");
        fs::write(&path, "answers: {}").unwrap();
        assert!(load_sheet(&path).is_err());
    }

    #[test]
    fn rejects_same_question_under_two_keys() {
        let err = parse_sheet_json(r#"{ "answers": { "1": 2, "q1": 5 } }"#).unwrap_err();
        assert!(format!("{err:#}").contains("question 1 answered twice"));

        let err = parse_sheet_toml("[sleep]\n101 = 2\nq101 = 3\n").unwrap_err();
        assert!(format!("{err:#}").contains("sleep question 101 answered twice"));
    }
}

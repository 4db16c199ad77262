use crate::config::Config;
use crate::core::calculator;
use crate::core::score::Level;
use crate::utils::answers;
use crate::utils::fs::{relative_path, sheet_format};
use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub file: String,
    pub total_score: u32,
    pub level: Level,
    pub weak_areas: Vec<String>,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedSheet {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LevelCounts {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

impl LevelCounts {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match entry.level {
                Level::Low => counts.low += 1,
                Level::Moderate => counts.moderate += 1,
                Level::High => counts.high += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub skipped: Vec<SkippedSheet>,
    pub counts: LevelCounts,
}

pub fn run_batch(root: &Path, cfg: &Config) -> Result<BatchReport> {
    if !root.exists() {
        bail!("path does not exist: {}", root.display());
    }
    if !root.is_dir() {
        bail!("path is not a directory: {}", root.display());
    }

    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || should_visit(entry, &cfg.batch.exclude))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let file = err
                    .path()
                    .map(|path| relative_path(root, path))
                    .unwrap_or_else(|| root.display().to_string());
                tracing::warn!(file = %file, "skipping unreadable path: {err}");
                skipped.push(SkippedSheet {
                    file,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() || sheet_format(entry.path()).is_none() {
            continue;
        }

        let file = relative_path(root, entry.path());
        let input = match answers::load_sheet(entry.path()) {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!(file = %file, "skipping answer sheet: {err:#}");
                skipped.push(SkippedSheet {
                    file,
                    reason: format!("{err:#}"),
                });
                continue;
            }
        };

        if input.answers.is_empty() {
            skipped.push(SkippedSheet {
                file,
                reason: "no answers found".to_string(),
            });
            continue;
        }

        let complete = input.is_complete();
        if !complete && cfg.general.strict {
            skipped.push(SkippedSheet {
                file,
                reason: format!(
                    "incomplete: {} questions unanswered",
                    input.missing_questions().len() + input.missing_sleep_questions().len()
                ),
            });
            continue;
        }

        // strengths are not reported here, so the fallback rule does not matter
        let result = calculator::compute(&input.answers);
        entries.push(BatchEntry {
            file,
            total_score: result.total_score,
            level: result.level,
            weak_areas: result
                .weak_areas
                .into_iter()
                .map(|area| area.category)
                .collect(),
            complete,
        });
    }

    let counts = LevelCounts::from_entries(&entries);
    Ok(BatchReport {
        entries,
        skipped,
        counts,
    })
}

fn should_visit(entry: &DirEntry, excludes: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }

    let dir_name = entry.file_name().to_string_lossy();
    !excludes
        .iter()
        .any(|excluded| excluded.eq_ignore_ascii_case(&dir_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn full_sheet(value: u8) -> String {
        let answers = (1..=12)
            .map(|id| format!("\"{id}\": {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ \"answers\": {{ {answers} }} }}")
    }

    #[test]
    fn scores_sheets_and_skips_bad_ones() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("team")).unwrap();
        fs::create_dir_all(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("a.json"), full_sheet(1)).unwrap();
        fs::write(dir.path().join("team").join("b.json"), full_sheet(5)).unwrap();
        fs::write(dir.path().join("target").join("c.json"), full_sheet(5)).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("empty.toml"), "[general]\njson = true\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let report = run_batch(dir.path(), &Config::default()).unwrap();
        let files: Vec<&str> = report.entries.iter().map(|e| e.file.as_str()).collect();
        assert_eq!(files, vec!["a.json", "team/b.json"]);
        assert_eq!(report.entries[0].level, Level::Low);
        assert_eq!(report.entries[1].total_score, 60);
        assert_eq!(report.entries[1].weak_areas.len(), 3);
        assert_eq!(report.counts.low, 1);
        assert_eq!(report.counts.high, 1);

        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.file.as_str()).collect();
        assert_eq!(skipped, vec!["broken.json", "empty.toml"]);
    }

    #[test]
    fn strict_mode_skips_incomplete_sheets() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("partial.json"), r#"{ "answers": { "1": 5 } }"#).unwrap();

        let report = run_batch(dir.path(), &Config::default()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert!(!report.entries[0].complete);

        let mut cfg = Config::default();
        cfg.general.strict = true;
        let report = run_batch(dir.path(), &cfg).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_batch(&dir.path().join("missing"), &Config::default()).is_err());
    }

    #[test]
    fn excluded_name_only_applies_below_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("target");
        fs::create_dir_all(root.join("team")).unwrap();
        fs::create_dir_all(root.join("node_modules")).unwrap();
        fs::write(root.join("team").join("a.json"), full_sheet(5)).unwrap();
        fs::write(root.join("node_modules").join("b.json"), full_sheet(5)).unwrap();

        let report = run_batch(&root, &Config::default()).unwrap();
        let files: Vec<&str> = report.entries.iter().map(|e| e.file.as_str()).collect();
        assert_eq!(files, vec!["team/a.json"]);
        assert_eq!(report.counts.high, 1);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_link_is_listed_as_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), full_sheet(2)).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.json"), dir.path().join("link.json"))
            .unwrap();

        let report = run_batch(dir.path(), &Config::default()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].file, "link.json");
        assert!(!report.skipped[0].reason.is_empty());
    }
}

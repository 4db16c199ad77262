use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "focuscheck",
    version,
    about = "Digital distraction self-assessment: score, weak areas, and sleep impact"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score an answer sheet and print the full result.
    Check(InputArgs),
    /// Classify only the optional sleep section.
    Sleep(InputArgs),
    /// Print the submission-shaped assessment record.
    Export(ExportArgs),
    /// Score every answer sheet under a directory.
    Batch(BatchArgs),
    /// List the questions and answer scale.
    Questions(QuestionsArgs),
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct InputArgs {
    /// JSON or TOML answer sheet with `answers` and optional `sleep` tables.
    #[arg(long)]
    pub answers: Option<PathBuf>,
    #[arg(long = "answer", value_name = "ID=VALUE")]
    pub answer: Vec<String>,
    #[arg(long = "sleep-answer", value_name = "ID=VALUE")]
    pub sleep_answer: Vec<String>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    /// Fail instead of warning when questions are unanswered.
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    pub fn has_answer_source(&self) -> bool {
        self.answers.is_some() || !self.answer.is_empty()
    }
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct QuestionsArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the settings file (default: ./focuscheck.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

mod cli;
mod config;
mod core;
mod data;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{BatchArgs, Cli, Commands, ExportArgs, InputArgs};
use config::LoadedConfig;
use std::path::{Path, PathBuf};
use utils::answers::{self, AnswerInput};

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    let filter = std::env::var("FOCUSCHECK_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Sleep(args) => run_sleep(args),
        Commands::Export(args) => run_export(args),
        Commands::Batch(args) => run_batch(args),
        Commands::Questions(args) => {
            if args.json {
                let catalog = core::report::QuestionCatalog::build();
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                core::report::print_questions();
            }
            Ok(0)
        }
        Commands::Init(args) => {
            let cwd = std::env::current_dir()?;
            let path = config::init_target(args.config.as_deref(), &cwd);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_check(args: InputArgs) -> Result<i32> {
    let loaded = load_config(args.config.as_deref())?;
    require_answer_source(&args)?;
    let input = read_input(&args)?;
    let report = core::run_assessment(&input, &loaded.config, args.strict)?;

    if args.json || loaded.config.general.json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report, &loaded.config.report);
    }

    Ok(0)
}

fn run_sleep(args: InputArgs) -> Result<i32> {
    let loaded = load_config(args.config.as_deref())?;
    let input = read_input(&args)?;

    let missing = input.missing_sleep_questions();
    if !missing.is_empty() && (args.strict || loaded.config.general.strict) {
        bail!(
            "sleep section started but {} of 6 questions unanswered (missing ids: {:?})",
            missing.len(),
            missing
        );
    }

    let impact = core::sleep::classify(&input.sleep);
    if args.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&impact)?);
    } else {
        match &impact {
            Some(impact) => core::report::print_sleep(impact),
            None => core::report::print_sleep_skipped(),
        }
    }

    Ok(0)
}

fn run_export(args: ExportArgs) -> Result<i32> {
    let loaded = load_config(args.input.config.as_deref())?;
    require_answer_source(&args.input)?;
    let input = read_input(&args.input)?;
    core::check_completeness(&input, args.input.strict || loaded.config.general.strict)?;

    let record = core::record::AssessmentRecord::build(&input);
    match &args.out {
        Some(path) => {
            let path = resolve_path(&std::env::current_dir()?, path);
            core::record::write_record(&record, &path)?;
            println!("wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&record)?),
    }

    Ok(0)
}

fn run_batch(args: BatchArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(args.config.as_deref())?;
    let root = resolve_path(&cwd, &args.path);
    let report = core::batch::run_batch(&root, &loaded.config)?;

    if args.json || loaded.config.general.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        core::report::print_batch(&report);
    }

    if report.skipped.is_empty() { Ok(0) } else { Ok(1) }
}

fn load_config(path: Option<&Path>) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(path, &cwd)?;
    tracing::debug!(source = %loaded.source, "using focuscheck settings");
    Ok(loaded)
}

/// An empty sheet is still scored; only a run with no answer source at all is a usage error.
fn require_answer_source(args: &InputArgs) -> Result<()> {
    if !args.has_answer_source() {
        bail!("no answers given; pass --answers FILE or --answer ID=VALUE");
    }
    Ok(())
}

fn read_input(args: &InputArgs) -> Result<AnswerInput> {
    let cwd = std::env::current_dir()?;
    let sheet = args.answers.as_ref().map(|path| resolve_path(&cwd, path));
    answers::collect_input(sheet.as_deref(), &args.answer, &args.sleep_answer)
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

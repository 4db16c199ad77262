use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "focuscheck.toml";

/// Where the settings in effect came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Local(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(path) => write!(f, "{} (--config)", path.display()),
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub report: ReportConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub json: bool,
    pub strict: bool,
    pub strength_fallback: StrengthFallback,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthFallback {
    #[default]
    Random,
    LowestAverage,
}

impl fmt::Display for StrengthFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::LowestAverage => write!(f, "lowest-average"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub show_priority_areas: bool,
    pub show_category_scores: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_priority_areas: true,
            show_category_scores: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub exclude: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            exclude: vec![
                "target".to_string(),
                ".git".to_string(),
                "node_modules".to_string(),
            ],
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    let (path, source) = match cli_config_path {
        Some(path) => {
            if !path.exists() {
                bail!(
                    "focuscheck settings not found at {} (passed with --config)",
                    path.display()
                );
            }
            (path.to_path_buf(), ConfigSource::Flag(path.to_path_buf()))
        }
        None => {
            let local_path = cwd.join(CONFIG_FILE_NAME);
            if !local_path.exists() {
                tracing::debug!(
                    cwd = %cwd.display(),
                    "no {CONFIG_FILE_NAME} in working directory, scoring with built-in settings"
                );
                return Ok(LoadedConfig {
                    config: Config::default(),
                    source: ConfigSource::Defaults,
                });
            }
            (local_path.clone(), ConfigSource::Local(local_path))
        }
    };

    let config = read_config(&path)?;
    tracing::debug!(
        path = %path.display(),
        fallback = %config.general.strength_fallback,
        strict = config.general.strict,
        "loaded focuscheck settings"
    );
    Ok(LoadedConfig { config, source })
}

/// Target of `focuscheck init`: the `--config` path when given, otherwise
/// `focuscheck.toml` in the working directory.
pub fn init_target(cli_config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    match cli_config_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(CONFIG_FILE_NAME),
    }
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing focuscheck settings: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content)
        .with_context(|| format!("failed writing focuscheck settings to {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    let body = toml::to_string_pretty(&Config::default())
        .context("failed to serialize default focuscheck settings")?;
    Ok(format!(
        "# strength_fallback: \"random\" or \"lowest-average\"\n# strict: reject answer sheets with unanswered questions\n\n{body}"
    ))
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading focuscheck settings {}", path.display()))?;
    toml::from_str::<Config>(&content)
        .with_context(|| format!("invalid focuscheck settings in {}", path.display()))
}

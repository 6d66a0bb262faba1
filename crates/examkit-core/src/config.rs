//! examkit configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::ExamKind;
use crate::store::ExamStore;

/// Environment variable overriding the exam base directory.
pub const BASE_DIR_ENV: &str = "EXAMKIT_BASE_DIR";

/// Top-level examkit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamkitConfig {
    /// Directory holding one `<name>.txt` file per exam.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Duration assumed for a practice exam until its file is loaded.
    #[serde(default = "default_practice_minutes")]
    pub practice_duration_minutes: f64,
    /// Duration assumed for a final exam until its file is loaded.
    #[serde(default = "default_final_minutes")]
    pub final_duration_minutes: f64,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from("./exams")
}
fn default_practice_minutes() -> f64 {
    30.0
}
fn default_final_minutes() -> f64 {
    60.0
}

impl Default for ExamkitConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            practice_duration_minutes: default_practice_minutes(),
            final_duration_minutes: default_final_minutes(),
        }
    }
}

impl ExamkitConfig {
    /// Default duration for an exam of `kind`.
    pub fn default_duration(&self, kind: ExamKind) -> Result<Duration> {
        let minutes = match kind {
            ExamKind::Practice => self.practice_duration_minutes,
            ExamKind::Final => self.final_duration_minutes,
        };
        Duration::try_from_secs_f64(minutes * 60.0)
            .with_context(|| format!("invalid {kind} duration in config: {minutes} minutes"))
    }

    /// Exam store rooted at the configured base directory.
    pub fn store(&self) -> ExamStore {
        ExamStore::new(&self.base_dir)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `examkit.toml` in the current directory
/// 2. `~/.config/examkit/config.toml`
///
/// Environment variable override: `EXAMKIT_BASE_DIR`.
pub fn load_config() -> Result<ExamkitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamkitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examkit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => ExamkitConfig::default(),
    };

    if let Ok(dir) = std::env::var(BASE_DIR_ENV) {
        if !dir.trim().is_empty() {
            config.base_dir = PathBuf::from(dir);
        }
    }

    tracing::debug!(base_dir = %config.base_dir.display(), "config loaded");
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<ExamkitConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<ExamkitConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examkit"))
}

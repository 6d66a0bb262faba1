pub mod create;
pub mod init;
pub mod list;
pub mod take;

use std::path::PathBuf;

use anyhow::Result;

use examkit_core::{load_config_from, ExamKind, ExamkitConfig};

/// Load the config, letting `--base-dir` win over every other source.
pub fn load_config(config_path: Option<PathBuf>, base_dir: Option<PathBuf>) -> Result<ExamkitConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(dir) = base_dir {
        config.base_dir = dir;
    }
    Ok(config)
}

fn parse_kind(kind: &str) -> Result<ExamKind> {
    kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))
}

//! The `examkit init` command.

use std::path::Path;

use anyhow::{Context, Result};

use examkit_core::ExamkitConfig;

pub fn execute(config: &ExamkitConfig) -> Result<()> {
    if Path::new("examkit.toml").exists() {
        println!("examkit.toml already exists, skipping.");
    } else {
        std::fs::write("examkit.toml", SAMPLE_CONFIG)?;
        println!("Created examkit.toml");
    }

    let base_dir = &config.base_dir;
    if base_dir.is_dir() {
        println!("{} already exists, skipping.", base_dir.display());
    } else {
        std::fs::create_dir_all(base_dir)
            .with_context(|| format!("failed to create {}", base_dir.display()))?;
        println!("Created exam directory {}", base_dir.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: examkit create --kind practice --name Midterm --duration 30");
    println!("  2. Run: examkit take --kind practice --name Midterm");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# examkit configuration

# Directory holding one <name>.txt file per exam.
# EXAMKIT_BASE_DIR and --base-dir override this.
base_dir = "./exams"

# Durations assumed when a student opens an exam, until its file is loaded.
practice_duration_minutes = 30
final_duration_minutes = 60
"#;

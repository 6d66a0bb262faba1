//! The `examkit take` command.

use std::io::{self, Write};

use anyhow::Result;

use examkit_core::{Exam, ExamkitConfig, LoadOutcome};

pub fn execute(config: &ExamkitConfig, kind: String, name: String) -> Result<()> {
    let kind = super::parse_kind(&kind)?;
    let store = config.store();
    let mut exam = store.create(kind, &name, config.default_duration(kind)?)?;

    let announce = |_: &Exam| println!("Exam has started!");
    exam.start(&[&announce]);

    let mut rendered: Vec<u8> = Vec::new();
    if exam.show(&mut rendered)? == LoadOutcome::Absent {
        println!("No exam file found at {}", exam.file_path().display());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&rendered)?;
    stdout.flush()?;

    Ok(())
}

//! The `examkit list` command.

use anyhow::Result;
use comfy_table::Table;

use examkit_core::ExamkitConfig;

pub fn execute(config: &ExamkitConfig, format: String) -> Result<()> {
    let store = config.store();
    let summaries = store.list()?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        "table" => {
            if summaries.is_empty() {
                println!(
                    "No exams found in {}. Run `examkit create` to author one.",
                    store.base_dir().display()
                );
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Exam", "Duration (min)", "Questions", "Total marks"]);
            for s in &summaries {
                table.add_row(vec![
                    s.name.clone(),
                    s.duration_minutes.to_string(),
                    s.question_count.to_string(),
                    s.total_marks.to_string(),
                ]);
            }
            println!("{table}");
        }
        other => anyhow::bail!("unknown format '{other}', expected table or json"),
    }

    Ok(())
}

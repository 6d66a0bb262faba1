//! The `examkit create` command.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use examkit_core::{ChooseOneQuestion, Exam, ExamkitConfig};

use crate::prompt::Prompter;

pub fn execute(config: &ExamkitConfig, kind: String, name: String, duration: f64) -> Result<()> {
    let kind = super::parse_kind(&kind)?;
    let duration = Duration::try_from_secs_f64(duration * 60.0)
        .with_context(|| format!("invalid duration: {duration} minutes"))?;

    let store = config.store();
    let mut exam = store.create(kind, &name, duration)?;

    println!("Creating a {kind} exam...");
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    author_questions(&mut exam, &mut prompter)?;

    store.save(&exam)?;
    println!("Exam saved to {}", exam.file_path().display());
    println!("Exam created and saved successfully.");

    Ok(())
}

/// Prompt for every question of `exam`. Marks and indices are checked here;
/// the core accepts whatever it is given.
fn author_questions<R: BufRead, W: Write>(
    exam: &mut Exam,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let count: usize = prompter.ask_parsed("Enter the number of questions:", |_| true)?;
    tracing::debug!(exam = exam.name(), count, "authoring questions");

    for i in 1..=count {
        let header = prompter.ask(&format!("Enter question {i} header:"))?;
        let body = prompter.ask(&format!("Enter question {i} body:"))?;
        let mark: i32 =
            prompter.ask_parsed(&format!("Enter question {i} mark:"), |m| *m >= 0)?;
        let option_count: usize = prompter.ask_parsed(
            &format!("Enter the number of options for question {i}:"),
            |n| *n >= 1,
        )?;

        let mut options = Vec::with_capacity(option_count);
        for j in 1..=option_count {
            options.push(prompter.ask(&format!("Enter option {j}:"))?);
        }

        let correct_index: usize = prompter.ask_parsed(
            "Enter the index of the correct answer (0-based):",
            |idx| *idx < option_count,
        )?;

        exam.add_question(ChooseOneQuestion::new(
            header,
            body,
            mark,
            options,
            correct_index,
        )?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use examkit_core::{ExamKind, Question};

    #[test]
    fn authors_questions_from_input() {
        let input = "1\nQ1\n2+2=?\n5\n3\n3\n4\n5\n1\n";
        let mut prompter = Prompter::new(input.as_bytes(), Vec::<u8>::new());
        let mut exam = Exam::new(
            ExamKind::Practice,
            "Midterm",
            Duration::from_secs(1800),
            "Midterm.txt",
        );

        author_questions(&mut exam, &mut prompter).unwrap();

        assert_eq!(exam.number_of_questions(), 1);
        let Question::ChooseOne(q) = &exam.questions()[0];
        assert_eq!(q.header(), "Q1");
        assert_eq!(q.body(), "2+2=?");
        assert_eq!(q.mark(), 5);
        assert_eq!(q.options(), ["3", "4", "5"]);
        assert_eq!(q.correct_index(), 1);
    }

    #[test]
    fn reprompts_for_out_of_range_index() {
        let input = "1\nH\nB\n1\n2\nyes\nno\n2\n0\n";
        let mut prompter = Prompter::new(input.as_bytes(), Vec::<u8>::new());
        let mut exam = Exam::new(ExamKind::Final, "f", Duration::from_secs(60), "f.txt");

        author_questions(&mut exam, &mut prompter).unwrap();

        let Question::ChooseOne(q) = &exam.questions()[0];
        assert_eq!(q.correct_index(), 0);
    }

    #[test]
    fn truncated_input_fails() {
        let mut prompter = Prompter::new("2\nQ1\n".as_bytes(), Vec::<u8>::new());
        let mut exam = Exam::new(ExamKind::Final, "f", Duration::from_secs(60), "f.txt");
        assert!(author_questions(&mut exam, &mut prompter).is_err());
    }
}

//! Console rendering of exams.

use std::io::Write;

use crate::model::{Exam, ExamKind, Question};

/// Write a human-readable listing of `exam` to `out`.
///
/// Practice exams mark the correct option of each question; final exams
/// list options without revealing which one is correct.
pub fn render_exam(exam: &Exam, out: &mut dyn Write) -> std::io::Result<()> {
    let reveal = match exam.kind() {
        ExamKind::Practice => {
            writeln!(out, "Practice Exam:")?;
            true
        }
        ExamKind::Final => {
            writeln!(out, "Final Exam:")?;
            false
        }
    };
    writeln!(out, "Duration: {} minutes", exam.duration_minutes())?;
    writeln!(out, "Number of Questions: {}", exam.number_of_questions())?;

    for question in exam.questions() {
        render_question(question, reveal, out)?;
    }
    Ok(())
}

fn render_question(question: &Question, reveal: bool, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Header: {}", question.header())?;
    writeln!(out, "Body: {}", question.body())?;
    writeln!(out, "Mark: {}", question.mark())?;
    for (i, answer) in question.answers().iter().enumerate() {
        if reveal && answer.is_correct {
            writeln!(out, "Option {}: {} (Correct)", i + 1, answer.text)?;
        } else {
            writeln!(out, "Option {}: {}", i + 1, answer.text)?;
        }
    }
    writeln!(out)
}

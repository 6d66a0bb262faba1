//! Core data model types for examkit.
//!
//! An [`Exam`] owns an ordered list of [`Question`]s and moves through the
//! lifecycle `Queued -> Starting -> Finished`. Its backing file is the
//! durable copy: [`Exam::show`] always reloads from disk before rendering.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ExamError;
use crate::format;
use crate::render;

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Answer text as shown to the student.
    pub text: String,
    /// Whether this is the correct answer.
    pub is_correct: bool,
}

/// A question with several options of which exactly one is correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooseOneQuestion {
    header: String,
    body: String,
    mark: i32,
    options: Vec<String>,
    correct_index: usize,
}

impl ChooseOneQuestion {
    /// Build a question. Fails if `correct_index` does not point at an option.
    pub fn new(
        header: impl Into<String>,
        body: impl Into<String>,
        mark: i32,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, ExamError> {
        if correct_index >= options.len() {
            return Err(ExamError::InvalidQuestion(format!(
                "correct index {correct_index} is out of range for {} option(s)",
                options.len()
            )));
        }

        Ok(Self {
            header: header.into(),
            body: body.into(),
            mark,
            options,
            correct_index,
        })
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn mark(&self) -> i32 {
        self.mark
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 0-based index of the correct option.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Answers derived from the options, with only `correct_index` marked correct.
    pub fn answers(&self) -> Vec<Answer> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, text)| Answer {
                text: text.clone(),
                is_correct: i == self.correct_index,
            })
            .collect()
    }
}

/// Any question an exam can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    ChooseOne(ChooseOneQuestion),
}

impl Question {
    pub fn header(&self) -> &str {
        match self {
            Question::ChooseOne(q) => q.header(),
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Question::ChooseOne(q) => q.body(),
        }
    }

    pub fn mark(&self) -> i32 {
        match self {
            Question::ChooseOne(q) => q.mark(),
        }
    }

    pub fn answers(&self) -> Vec<Answer> {
        match self {
            Question::ChooseOne(q) => q.answers(),
        }
    }
}

impl From<ChooseOneQuestion> for Question {
    fn from(q: ChooseOneQuestion) -> Self {
        Question::ChooseOne(q)
    }
}

/// Which kind of exam this is. Practice exams reveal the correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamKind {
    Practice,
    Final,
}

impl fmt::Display for ExamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExamKind::Practice => write!(f, "practice"),
            ExamKind::Final => write!(f, "final"),
        }
    }
}

impl FromStr for ExamKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "practice" | "p" => Ok(ExamKind::Practice),
            "final" | "f" => Ok(ExamKind::Final),
            other => Err(format!("unknown exam kind: {other}")),
        }
    }
}

/// Lifecycle stage of an exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamMode {
    Queued,
    Starting,
    Finished,
}

/// Result of reloading an exam from its backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; carries the number of questions loaded.
    Loaded { questions: usize },
    /// No file exists at the exam's path. The question list is now empty.
    Absent,
}

/// Notified synchronously when an exam starts.
pub trait ExamListener {
    fn on_started(&self, exam: &Exam);
}

impl<F> ExamListener for F
where
    F: Fn(&Exam),
{
    fn on_started(&self, exam: &Exam) {
        self(exam)
    }
}

/// An exam and the file it is persisted to.
#[derive(Debug, Clone)]
pub struct Exam {
    kind: ExamKind,
    name: String,
    duration: Duration,
    questions: Vec<Question>,
    mode: ExamMode,
    file_path: PathBuf,
}

impl Exam {
    /// Create a queued exam with no questions.
    pub fn new(
        kind: ExamKind,
        name: impl Into<String>,
        duration: Duration,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            duration,
            questions: Vec::new(),
            mode: ExamMode::Queued,
            file_path: file_path.into(),
        }
    }

    pub fn kind(&self) -> ExamKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Duration expressed in (possibly fractional) minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration.as_secs_f64() / 60.0
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn number_of_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn mode(&self) -> ExamMode {
        self.mode
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a question. No duplicate or content checks are made.
    pub fn add_question(&mut self, question: impl Into<Question>) {
        self.questions.push(question.into());
    }

    /// Move to `Starting` and notify every listener in order.
    pub fn start(&mut self, listeners: &[&dyn ExamListener]) {
        self.mode = ExamMode::Starting;
        tracing::debug!(exam = %self.name, listeners = listeners.len(), "exam started");
        for listener in listeners {
            listener.on_started(self);
        }
    }

    /// Write this exam to its backing file, replacing any previous content.
    pub fn save(&self) -> Result<(), ExamError> {
        format::save(self)
    }

    /// Replace duration and questions with the contents of the backing file.
    ///
    /// A missing file clears the questions and yields [`LoadOutcome::Absent`].
    /// A malformed file leaves the exam untouched.
    pub fn reload(&mut self) -> Result<LoadOutcome, ExamError> {
        match format::load_file(&self.file_path)? {
            Some(contents) => {
                self.duration = contents.duration;
                self.questions = contents.questions;
                Ok(LoadOutcome::Loaded {
                    questions: self.questions.len(),
                })
            }
            None => {
                self.questions.clear();
                Ok(LoadOutcome::Absent)
            }
        }
    }

    /// Reload from disk, finish the exam, and render every question to `out`.
    ///
    /// Does not require [`Exam::start`] to have been called first. Once the
    /// reload succeeds the exam is `Finished` and holds the file contents,
    /// even if writing to `out` then fails with [`ExamError::Output`].
    pub fn show(&mut self, out: &mut dyn Write) -> Result<LoadOutcome, ExamError> {
        let outcome = self.reload()?;
        self.mode = ExamMode::Finished;
        render::render_exam(self, out).map_err(ExamError::Output)?;
        Ok(outcome)
    }
}

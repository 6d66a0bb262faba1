//! Exam error types.
//!
//! A missing exam file is deliberately absent from this list: loading a file
//! that does not exist is reported through [`LoadOutcome::Absent`] instead.
//!
//! [`LoadOutcome::Absent`]: crate::model::LoadOutcome::Absent

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, saving or loading an exam.
#[derive(Debug, Error)]
pub enum ExamError {
    /// The exam file is malformed or truncated.
    #[error("{}", format_message(.line, .message))]
    Format {
        /// 1-based line number, when the problem can be pinned to a line.
        line: Option<usize>,
        message: String,
    },

    /// Reading or writing the exam file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering an exam to its output failed.
    #[error("failed to write exam output: {0}")]
    Output(#[source] std::io::Error),

    /// A question was built with a correct index outside its options.
    #[error("invalid question: {0}")]
    InvalidQuestion(String),

    /// The exam name cannot be used as a file name.
    #[error("invalid exam name: {0:?}")]
    InvalidName(String),
}

fn format_message(line: &Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("malformed exam file (line {line}): {message}"),
        None => format!("malformed exam file: {message}"),
    }
}

impl ExamError {
    pub(crate) fn format_at(line: usize, message: impl Into<String>) -> Self {
        ExamError::Format {
            line: Some(line),
            message: message.into(),
        }
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        ExamError::Format {
            line: None,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExamError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error comes from a malformed exam file.
    pub fn is_format(&self) -> bool {
        matches!(self, ExamError::Format { .. })
    }
}

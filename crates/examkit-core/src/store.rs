//! Directory of exam files, one `<name>.txt` per exam.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::error::ExamError;
use crate::format;
use crate::model::Exam;
use crate::model::ExamKind;

/// File extension used for exam files.
pub const EXAM_EXTENSION: &str = "txt";

/// Summary of a stored exam, used for listings.
#[derive(Debug, Clone, Serialize)]
pub struct ExamSummary {
    pub name: String,
    pub duration_minutes: f64,
    pub question_count: usize,
    pub total_marks: i64,
}

/// Exam files rooted at a base directory.
#[derive(Debug, Clone)]
pub struct ExamStore {
    base_dir: PathBuf,
}

impl ExamStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file backing the exam called `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, ExamError> {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\'])
        {
            return Err(ExamError::InvalidName(name.to_string()));
        }
        Ok(self
            .base_dir
            .join(format!("{trimmed}.{EXAM_EXTENSION}")))
    }

    /// A fresh, queued exam backed by this store.
    pub fn create(&self, kind: ExamKind, name: &str, duration: Duration) -> Result<Exam, ExamError> {
        let path = self.path_for(name)?;
        Ok(Exam::new(kind, name.trim(), duration, path))
    }

    pub fn save(&self, exam: &Exam) -> Result<(), ExamError> {
        exam.save()
    }

    /// Summaries of every readable exam in the base directory, sorted by name.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list(&self) -> Result<Vec<ExamSummary>, ExamError> {
        if !self.base_dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries =
            std::fs::read_dir(&self.base_dir).map_err(|e| ExamError::io(&self.base_dir, e))?;

        let mut summaries = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ExamError::io(&self.base_dir, e))?;
            let path = entry.path();

            if !path.is_file() || !path.extension().is_some_and(|ext| ext == EXAM_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match format::load_file(&path) {
                Ok(Some(contents)) => summaries.push(ExamSummary {
                    name: name.to_string(),
                    duration_minutes: contents.duration.as_secs_f64() / 60.0,
                    question_count: contents.questions.len(),
                    total_marks: contents.questions.iter().map(|q| i64::from(q.mark())).sum(),
                }),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }

        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }
}

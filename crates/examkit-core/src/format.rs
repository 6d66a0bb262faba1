//! Flat-text exam file format.
//!
//! An exam file is a `Duration` and a `NumberOfQuestions` line followed by
//! one record per question:
//!
//! ```text
//! Duration: 30
//! NumberOfQuestions: 1
//! Header: Q1
//! Body: 2+2=?
//! Mark: 5
//! Options: 3|4|5
//! CorrectIndex: 1
//!
//! ```
//!
//! Lines are read by key rather than by position, so fields within the
//! preamble or a record may appear in any order. Records end at a blank
//! line or at end of file. Option text is joined with `|` and nothing is
//! escaped: a `|` or newline inside any text does not survive a round trip.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::error::ExamError;
use crate::model::{ChooseOneQuestion, Exam, Question};

const DURATION: &str = "Duration";
const NUMBER_OF_QUESTIONS: &str = "NumberOfQuestions";
const HEADER: &str = "Header";
const BODY: &str = "Body";
const MARK: &str = "Mark";
const OPTIONS: &str = "Options";
const CORRECT_INDEX: &str = "CorrectIndex";

const OPTION_SEPARATOR: &str = "|";

/// What an exam file holds: everything except the exam's kind and name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamContents {
    pub duration: Duration,
    pub questions: Vec<Question>,
}

/// Write `exam` in the exam file format.
pub fn write_exam<W: Write + ?Sized>(exam: &Exam, w: &mut W) -> std::io::Result<()> {
    w.write_all(to_text(exam).as_bytes())
}

/// Render `exam` to a string in the exam file format.
pub fn to_text(exam: &Exam) -> String {
    let mut text = String::new();

    text.push_str(&format!("{DURATION}: {}\n", exam.duration_minutes()));
    text.push_str(&format!(
        "{NUMBER_OF_QUESTIONS}: {}\n",
        exam.number_of_questions()
    ));
    for question in exam.questions() {
        match question {
            Question::ChooseOne(q) => {
                text.push_str(&format!("{HEADER}: {}\n", q.header()));
                text.push_str(&format!("{BODY}: {}\n", q.body()));
                text.push_str(&format!("{MARK}: {}\n", q.mark()));
                text.push_str(&format!(
                    "{OPTIONS}: {}\n",
                    q.options().join(OPTION_SEPARATOR)
                ));
                text.push_str(&format!("{CORRECT_INDEX}: {}\n", q.correct_index()));
                text.push('\n');
            }
        }
    }

    text
}

/// Save `exam` to its file path, creating the parent directory if needed.
pub fn save(exam: &Exam) -> Result<(), ExamError> {
    let path = exam.file_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExamError::io(parent, e))?;
    }
    std::fs::write(path, to_text(exam)).map_err(|e| ExamError::io(path, e))?;
    tracing::info!(
        path = %path.display(),
        questions = exam.number_of_questions(),
        "exam saved"
    );
    Ok(())
}

/// Load an exam file. Returns `Ok(None)` if no file exists at `path`.
pub fn load_file(path: &Path) -> Result<Option<ExamContents>, ExamError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("no exam file found at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(ExamError::io(path, e)),
    };

    let contents = parse_exam_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        questions = contents.questions.len(),
        "exam loaded"
    );
    Ok(Some(contents))
}

/// Fields of one question record as they are collected.
#[derive(Default)]
struct RecordBuilder {
    first_line: usize,
    header: Option<String>,
    body: Option<String>,
    mark: Option<i32>,
    options: Option<Vec<String>>,
    correct_index: Option<usize>,
}

impl RecordBuilder {
    fn set(&mut self, line_no: usize, key: &str, value: &str) -> Result<(), ExamError> {
        let duplicate = match key {
            HEADER => self.header.replace(text_value(value).to_string()).is_some(),
            BODY => self.body.replace(text_value(value).to_string()).is_some(),
            MARK => self.mark.replace(parse_number(line_no, key, value)?).is_some(),
            OPTIONS => self
                .options
                .replace(
                    text_value(value)
                        .split(OPTION_SEPARATOR)
                        .map(String::from)
                        .collect(),
                )
                .is_some(),
            CORRECT_INDEX => self
                .correct_index
                .replace(parse_number(line_no, key, value)?)
                .is_some(),
            other => {
                return Err(ExamError::format_at(
                    line_no,
                    format!("unknown key '{other}'"),
                ))
            }
        };

        if duplicate {
            return Err(ExamError::format_at(
                line_no,
                format!("duplicate key '{key}' in question record"),
            ));
        }
        Ok(())
    }

    fn finish(self) -> Result<Question, ExamError> {
        let line = self.first_line;
        let missing =
            |key: &str| ExamError::format_at(line, format!("question record is missing '{key}'"));

        let header = self.header.ok_or_else(|| missing(HEADER))?;
        let body = self.body.ok_or_else(|| missing(BODY))?;
        let mark = self.mark.ok_or_else(|| missing(MARK))?;
        let options = self.options.ok_or_else(|| missing(OPTIONS))?;
        let correct_index = self.correct_index.ok_or_else(|| missing(CORRECT_INDEX))?;

        let question = ChooseOneQuestion::new(header, body, mark, options, correct_index)
            .map_err(|e| ExamError::format_at(line, e.to_string()))?;
        Ok(question.into())
    }
}

/// Text after `Key:` minus the single space the writer puts after the colon.
fn text_value(value: &str) -> &str {
    value.strip_prefix(' ').unwrap_or(value)
}

fn parse_number<T: std::str::FromStr>(
    line_no: usize,
    key: &str,
    value: &str,
) -> Result<T, ExamError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|_| ExamError::format_at(line_no, format!("invalid {key} value '{value}'")))
}

/// Minutes to a `Duration`. Values past `Duration::MAX` saturate, so any
/// duration the writer produces loads back.
fn parse_duration(line_no: usize, value: &str) -> Result<Duration, ExamError> {
    let minutes: f64 = parse_number(line_no, DURATION, value)?;
    if !minutes.is_finite() || minutes < 0.0 {
        return Err(ExamError::format_at(
            line_no,
            format!("invalid {DURATION} value '{}'", value.trim()),
        ));
    }
    Ok(Duration::try_from_secs_f64(minutes * 60.0).unwrap_or(Duration::MAX))
}

/// Parse the text of an exam file.
pub fn parse_exam_str(content: &str) -> Result<ExamContents, ExamError> {
    let mut duration = None;
    let mut declared = None;
    let mut questions = Vec::new();
    let mut record: Option<RecordBuilder> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;

        if raw.trim().is_empty() {
            if let Some(builder) = record.take() {
                questions.push(builder.finish()?);
            }
            continue;
        }

        let Some((key, value)) = raw.split_once(':') else {
            return Err(ExamError::format_at(
                line_no,
                format!("expected 'Key: value', found '{raw}'"),
            ));
        };
        let key = key.trim();

        match key {
            DURATION | NUMBER_OF_QUESTIONS if record.is_some() || !questions.is_empty() => {
                return Err(ExamError::format_at(
                    line_no,
                    format!("'{key}' must come before the first question"),
                ));
            }
            DURATION => {
                if duration.replace(parse_duration(line_no, value)?).is_some() {
                    return Err(ExamError::format_at(line_no, "duplicate 'Duration'"));
                }
            }
            NUMBER_OF_QUESTIONS => {
                let count: usize = parse_number(line_no, key, value)?;
                if declared.replace(count).is_some() {
                    return Err(ExamError::format_at(
                        line_no,
                        "duplicate 'NumberOfQuestions'",
                    ));
                }
            }
            _ => {
                if record.is_none() && (duration.is_none() || declared.is_none()) {
                    return Err(ExamError::format_at(
                        line_no,
                        "'Duration' and 'NumberOfQuestions' must come before the first question",
                    ));
                }
                record
                    .get_or_insert_with(|| RecordBuilder {
                        first_line: line_no,
                        ..RecordBuilder::default()
                    })
                    .set(line_no, key, value)?;
            }
        }
    }

    if let Some(builder) = record.take() {
        questions.push(builder.finish()?);
    }

    let duration = duration.ok_or_else(|| ExamError::format("missing 'Duration'"))?;
    let declared = declared.ok_or_else(|| ExamError::format("missing 'NumberOfQuestions'"))?;

    if questions.len() != declared {
        return Err(ExamError::format(format!(
            "expected {declared} question(s), found {}",
            questions.len()
        )));
    }

    Ok(ExamContents {
        duration,
        questions,
    })
}

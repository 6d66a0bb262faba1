//! examkit-core — exam model, flat-text exam format, and rendering.
//!
//! An [`Exam`] is built in memory, saved to a `<name>.txt` file under the
//! configured base directory, and later reloaded and rendered for a student.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod render;
pub mod store;

pub use config::{load_config, load_config_from, ExamkitConfig};
pub use error::ExamError;
pub use model::{
    Answer, ChooseOneQuestion, Exam, ExamKind, ExamListener, ExamMode, LoadOutcome, Question,
};
pub use store::{ExamStore, ExamSummary};

//! End-to-end exam workflows through the library API.

use std::time::Duration;

use examkit_core::{
    ChooseOneQuestion, Exam, ExamKind, ExamMode, ExamStore, LoadOutcome, Question,
};

fn midterm_question() -> ChooseOneQuestion {
    ChooseOneQuestion::new(
        "Q1",
        "2+2=?",
        5,
        vec!["3".into(), "4".into(), "5".into()],
        1,
    )
    .unwrap()
}

fn author(store: &ExamStore, kind: ExamKind) -> Exam {
    let mut exam = store
        .create(kind, "Midterm", Duration::from_secs(30 * 60))
        .unwrap();
    exam.add_question(midterm_question());
    store.save(&exam).unwrap();
    exam
}

fn take(store: &ExamStore, kind: ExamKind) -> (Exam, String) {
    let mut exam = store
        .create(kind, "Midterm", Duration::from_secs(60))
        .unwrap();
    exam.start(&[]);
    let mut out: Vec<u8> = Vec::new();
    let outcome = exam.show(&mut out).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded { questions: 1 });
    (exam, String::from_utf8(out).unwrap())
}

#[test]
fn practice_exam_marks_correct_option() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(dir.path());
    author(&store, ExamKind::Practice);

    let (exam, text) = take(&store, ExamKind::Practice);

    assert_eq!(exam.mode(), ExamMode::Finished);
    assert_eq!(exam.duration(), Duration::from_secs(30 * 60));
    assert!(text.contains("Option 2: 4 (Correct)\n"));
    assert!(text.contains("Option 1: 3\n"));
    assert!(text.contains("Option 3: 5\n"));
    assert_eq!(text.matches("(Correct)").count(), 1);
}

#[test]
fn final_exam_hides_correct_option() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(dir.path());
    author(&store, ExamKind::Final);

    let (_, text) = take(&store, ExamKind::Final);

    assert!(text.starts_with("Final Exam:\n"));
    assert!(text.contains("Option 2: 4\n"));
    assert!(!text.contains("(Correct)"));
}

#[test]
fn round_trip_preserves_questions() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(dir.path());

    let mut exam = store
        .create(ExamKind::Final, "Finals", Duration::from_secs_f64(42.25 * 60.0))
        .unwrap();
    let specs: [(&str, &str, i32, &[&str], usize); 3] = [
        ("Q1", "Pick the prime", 2, &["4", "6", "7"], 2),
        ("Q2", "Largest planet?", 3, &["Jupiter", "Mars"], 0),
        ("Q3", "Negative marks allowed?", -1, &["yes"], 0),
    ];
    for (header, body, mark, options, index) in specs {
        let options = options.iter().map(|o| o.to_string()).collect();
        exam.add_question(ChooseOneQuestion::new(header, body, mark, options, index).unwrap());
    }
    assert_eq!(exam.number_of_questions(), 3);
    store.save(&exam).unwrap();

    let mut loaded = store
        .create(ExamKind::Final, "Finals", Duration::ZERO)
        .unwrap();
    assert_eq!(loaded.number_of_questions(), 0);
    assert_eq!(loaded.reload().unwrap(), LoadOutcome::Loaded { questions: 3 });

    assert!((loaded.duration_minutes() - 42.25).abs() < 1e-9);
    assert_eq!(loaded.number_of_questions(), loaded.questions().len());
    assert_eq!(loaded.questions(), exam.questions());

    for question in loaded.questions() {
        let Question::ChooseOne(q) = question;
        let answers = question.answers();
        let correct: Vec<usize> = answers
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.is_correct.then_some(i))
            .collect();
        assert_eq!(correct, vec![q.correct_index()]);
        assert!(q.correct_index() < q.options().len());
    }
}

#[test]
fn missing_exam_leaves_questions_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(dir.path());

    let mut exam = store
        .create(ExamKind::Practice, "Ghost", Duration::from_secs(60))
        .unwrap();
    assert_eq!(exam.reload().unwrap(), LoadOutcome::Absent);
    assert!(exam.questions().is_empty());
}

#[test]
fn truncated_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ExamStore::new(dir.path());
    let exam = author(&store, ExamKind::Practice);

    let text = std::fs::read_to_string(exam.file_path()).unwrap();
    let truncated = text.replace("NumberOfQuestions: 1", "NumberOfQuestions: 4");
    std::fs::write(exam.file_path(), truncated).unwrap();

    let mut reloaded = store
        .create(ExamKind::Practice, "Midterm", Duration::from_secs(60))
        .unwrap();
    let err = reloaded.reload().unwrap_err();
    assert!(err.is_format());
}

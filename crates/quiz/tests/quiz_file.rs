//! Loading question banks from disk.
//!
//! No mocks. Uses tempfiles.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use quiz::{Quiz, QuizError};
use tempfile::{NamedTempFile, TempDir};

const BANK: &str = r#"{
  "QuestionsList": [
    { "QuestionText": "Largest ocean?", "AnswerText": ["Atlantic", "Pacific"], "Answer": 1 },
    { "QuestionText": "Smallest prime?", "AnswerText": ["1", "2", "3"], "Answer": 1 },
    { "QuestionText": "H2O is?", "AnswerText": ["Water", "Salt"], "Answer": 0 }
  ]
}"#;

fn bank_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write bank");
    file
}

#[test]
fn test_load_bank_from_disk() {
    let file = bank_file(BANK);
    let quiz = Quiz::load(file.path()).expect("load");
    assert_eq!(quiz.question_count(), 3);
    assert_eq!(quiz.question(2).unwrap().response(0), Some("Water"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let err = Quiz::load(&dir.path().join("questions.json")).unwrap_err();
    assert!(matches!(err, QuizError::Io(msg) if msg.contains("questions.json")));
}

#[test]
fn test_invalid_file_is_parse_error() {
    let file = bank_file("QuestionsList = []");
    assert!(matches!(
        Quiz::load(file.path()).unwrap_err(),
        QuizError::Parse(_)
    ));
}

#[test]
fn test_full_run_through_loaded_bank() {
    let file = bank_file(BANK);
    let mut quiz = Quiz::load(file.path()).expect("load");
    quiz.record_answer(0, 1).unwrap();
    quiz.record_answer(1, 0).unwrap();
    quiz.record_answer(2, 0).unwrap();
    assert!(quiz.is_complete());
    assert_eq!(quiz.correct_count(), 2);
    let score = quiz.percentage_score();
    assert!((score - 200.0 / 3.0).abs() < 1e-3, "expected ~66.7, got {score}");
}

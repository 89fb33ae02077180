//! Quiz — a loaded question bank plus the user's answers.

use std::path::Path;

use crate::bank::{load_questions, parse_questions, QuizError};
use crate::question::Question;

/// A quiz in progress.
///
/// Owned by the application and handed to the screens that need it; there is
/// no process-wide "current quiz".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Quiz over an already validated list of questions.
    ///
    /// # Errors
    ///
    /// `Empty` if `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Quiz { questions })
    }

    /// Parse a JSON question bank (see [`crate::bank`]).
    ///
    /// # Errors
    ///
    /// Any [`parse_questions`] error.
    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        Self::new(parse_questions(json)?)
    }

    /// Load a JSON question bank from disk.
    ///
    /// # Errors
    ///
    /// Any [`load_questions`] error.
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        Self::new(load_questions(path)?)
    }

    /// Total questions in the quiz.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Question at zero-based `index`, or `None`.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// All questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Record the user's `response` to question `index`, replacing any
    /// earlier answer.
    ///
    /// # Errors
    ///
    /// `QuestionOutOfRange` or `ResponseOutOfRange`; the quiz is unchanged.
    pub fn record_answer(&mut self, index: usize, response: usize) -> Result<(), QuizError> {
        let question = self
            .questions
            .get_mut(index)
            .ok_or(QuizError::QuestionOutOfRange(index))?;
        if !question.select(response) {
            return Err(QuizError::ResponseOutOfRange {
                question: index,
                response,
            });
        }
        tracing::debug!(
            question = index,
            response,
            correct = question.is_correct(),
            "answer recorded"
        );
        Ok(())
    }

    /// Number of questions the user has answered.
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    /// Number of questions answered correctly.
    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct()).count()
    }

    /// `true` once every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.questions.iter().all(Question::is_answered)
    }

    /// Correct answers as a percentage of answered questions (`0.0..=100.0`).
    ///
    /// Returns 0 when nothing has been answered yet.
    #[allow(clippy::cast_precision_loss)] // question counts are tiny
    pub fn percentage_score(&self) -> f32 {
        let answered = self.answered_count();
        if answered == 0 {
            return 0.0;
        }
        self.correct_count() as f32 * 100.0 / answered as f32
    }

    /// Clear every answer so the quiz can be taken again.
    pub fn reset(&mut self) {
        self.questions.iter_mut().for_each(Question::clear_selection);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        let questions = (0..4)
            .map(|i| {
                Question::new(
                    format!("Question {i}"),
                    vec!["a".into(), "b".into(), "c".into()],
                    i % 3,
                )
            })
            .collect();
        Quiz::new(questions).expect("non-empty")
    }

    #[test]
    fn test_quiz_rejects_no_questions() {
        assert_eq!(Quiz::new(Vec::new()), Err(QuizError::Empty));
    }

    #[test]
    fn test_quiz_counts_start_at_zero() {
        let q = quiz();
        assert_eq!(q.question_count(), 4);
        assert_eq!(q.answered_count(), 0);
        assert_eq!(q.correct_count(), 0);
        assert_eq!(q.percentage_score(), 0.0);
        assert!(!q.is_complete());
    }

    #[test]
    fn test_quiz_score_is_over_answered_questions() {
        let mut q = quiz();
        q.record_answer(0, 0).expect("valid"); // correct
        q.record_answer(1, 0).expect("valid"); // wrong (correct is 1)
        assert_eq!(q.answered_count(), 2);
        assert_eq!(q.correct_count(), 1);
        assert!((q.percentage_score() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_quiz_record_answer_bounds() {
        let mut q = quiz();
        assert_eq!(q.record_answer(9, 0), Err(QuizError::QuestionOutOfRange(9)));
        assert_eq!(
            q.record_answer(0, 3),
            Err(QuizError::ResponseOutOfRange {
                question: 0,
                response: 3
            })
        );
        assert_eq!(q.answered_count(), 0);
    }

    #[test]
    fn test_quiz_complete_and_reset() {
        let mut q = quiz();
        for i in 0..4 {
            q.record_answer(i, i % 3).expect("valid");
        }
        assert!(q.is_complete());
        assert_eq!(q.percentage_score(), 100.0);

        q.reset();
        assert_eq!(q.answered_count(), 0);
        assert!(!q.is_complete());
    }

    #[test]
    fn test_quiz_from_json() {
        let q = Quiz::from_json(
            r#"{ "QuestionsList": [ { "QuestionText": "x", "AnswerText": ["y"], "Answer": 0 } ] }"#,
        )
        .expect("valid");
        assert_eq!(q.question(0).map(Question::text), Some("x"));
    }
}

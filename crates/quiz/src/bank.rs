//! Question bank file format.
//!
//! The bank is a JSON document using the key layout of the property-list
//! question files:
//!
//! ```json
//! {
//!   "QuestionsList": [
//!     {
//!       "QuestionText": "Which planet is closest to the Sun?",
//!       "AnswerText": ["Venus", "Mercury", "Mars"],
//!       "Answer": 1
//!     }
//!   ]
//! }
//! ```
//!
//! `Answer` is the zero-based index of the correct entry in `AnswerText`.

use std::path::Path;

use serde::Deserialize;

use crate::question::Question;

/// Question bank loading / quiz bookkeeping errors
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)] // Re-exported at the crate root as quiz::QuizError
pub enum QuizError {
    /// The document is not valid JSON or does not match the layout.
    Parse(String),
    /// The file could not be read.
    Io(String),
    /// The bank contains no questions.
    Empty,
    /// Question `question` has no responses.
    NoResponses {
        /// Zero-based question index.
        question: usize,
    },
    /// The declared correct answer does not exist.
    AnswerOutOfRange {
        /// Zero-based question index.
        question: usize,
        /// Declared answer index.
        answer: usize,
        /// Number of responses the question has.
        responses: usize,
    },
    /// No question at this index.
    QuestionOutOfRange(usize),
    /// The question has no such response.
    ResponseOutOfRange {
        /// Zero-based question index.
        question: usize,
        /// Requested response index.
        response: usize,
    },
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Parse(msg) => write!(f, "Parse error: {}", msg),
            QuizError::Io(msg) => write!(f, "IO error: {}", msg),
            QuizError::Empty => write!(f, "Question bank is empty"),
            QuizError::NoResponses { question } => {
                write!(f, "Question {} has no responses", question)
            }
            QuizError::AnswerOutOfRange {
                question,
                answer,
                responses,
            } => write!(
                f,
                "Question {}: answer {} out of range ({} responses)",
                question, answer, responses
            ),
            QuizError::QuestionOutOfRange(index) => write!(f, "No question at index {}", index),
            QuizError::ResponseOutOfRange { question, response } => {
                write!(f, "Question {} has no response {}", question, response)
            }
        }
    }
}

impl std::error::Error for QuizError {}

#[derive(Debug, Deserialize)]
struct JsonBank {
    #[serde(rename = "QuestionsList")]
    questions: Vec<JsonQuestion>,
}

#[derive(Debug, Deserialize)]
struct JsonQuestion {
    #[serde(rename = "QuestionText")]
    text: String,
    #[serde(rename = "AnswerText")]
    responses: Vec<String>,
    #[serde(rename = "Answer")]
    answer: usize,
}

/// Parse and validate a question bank.
///
/// # Errors
///
/// `Parse` for malformed JSON, `Empty` for a bank without questions,
/// `NoResponses` / `AnswerOutOfRange` for an invalid question.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, QuizError> {
    let parsed: JsonBank =
        serde_json::from_str(json).map_err(|e| QuizError::Parse(e.to_string()))?;

    if parsed.questions.is_empty() {
        return Err(QuizError::Empty);
    }

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(index, q)| {
            if q.responses.is_empty() {
                return Err(QuizError::NoResponses { question: index });
            }
            if q.answer >= q.responses.len() {
                return Err(QuizError::AnswerOutOfRange {
                    question: index,
                    answer: q.answer,
                    responses: q.responses.len(),
                });
            }
            Ok(Question::new(q.text, q.responses, q.answer))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(questions = questions.len(), "question bank parsed");
    Ok(questions)
}

/// Read and parse a question bank file.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_questions`].
pub fn load_questions(path: &Path) -> Result<Vec<Question>, QuizError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| QuizError::Io(format!("{}: {}", path.display(), e)))?;
    parse_questions(&json)
}

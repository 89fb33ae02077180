//! Question — one multiple-choice question and the user's answer to it.

/// A single question of the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    responses: Vec<String>,
    correct_response: usize,
    selected_response: Option<usize>,
}

impl Question {
    /// Build an unanswered question.
    ///
    /// Callers are expected to have validated `correct_response` against
    /// `responses`; [`crate::bank::parse_questions`] does.
    pub fn new(text: impl Into<String>, responses: Vec<String>, correct_response: usize) -> Self {
        Question {
            text: text.into(),
            responses,
            correct_response,
            selected_response: None,
        }
    }

    /// Question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Possible responses, in display order.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Text of response `index`, if it exists.
    pub fn response(&self, index: usize) -> Option<&str> {
        self.responses.get(index).map(String::as_str)
    }

    /// Index of the correct response.
    pub fn correct_response(&self) -> usize {
        self.correct_response
    }

    /// Index of the user's response, `None` until answered.
    pub fn selected_response(&self) -> Option<usize> {
        self.selected_response
    }

    /// `true` once the user picked a response.
    pub fn is_answered(&self) -> bool {
        self.selected_response.is_some()
    }

    /// `true` if the user picked the correct response.
    pub fn is_correct(&self) -> bool {
        self.selected_response == Some(self.correct_response)
    }

    /// Record (or overwrite) the user's response. Returns `false` and leaves
    /// the question untouched if `response` is out of range.
    pub fn select(&mut self, response: usize) -> bool {
        if response >= self.responses.len() {
            return false;
        }
        self.selected_response = Some(response);
        true
    }

    /// Forget the user's response.
    pub fn clear_selection(&mut self) {
        self.selected_response = None;
    }
}

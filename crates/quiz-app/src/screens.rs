//! Quiz screens — main menu, one screen per question, results.
//!
//! Screens receive the shared [`Quiz`] through their constructors and never
//! touch the navigator; they only translate user input into a [`Segue`] the
//! flow then resolves.

use std::cell::RefCell;
use std::rc::Rc;

use quiz::Quiz;
use ui::Screen;

use crate::config::APP_NAME;
use crate::flow::Segue;

/// User input already decoded from a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pick the zero-based response / menu item.
    Choice(usize),
    /// Start the quiz from the menu.
    Start,
    /// Take the quiz again from the results screen.
    Restart,
    /// Go back to the main menu.
    Menu,
}

/// A screen of the quiz application.
pub trait QuizScreen: Screen {
    /// Text lines of the screen, top to bottom.
    fn render(&self) -> Vec<String>;

    /// The segue `input` triggers on this screen, if any.
    fn handle(&self, input: Input) -> Option<Segue>;

    /// Question index for question screens.
    fn question_index(&self) -> Option<usize> {
        None
    }
}

/// Main menu.
pub struct MenuScreen {
    quiz: Rc<RefCell<Quiz>>,
}

impl MenuScreen {
    /// Menu for `quiz`.
    pub fn new(quiz: Rc<RefCell<Quiz>>) -> Self {
        Self { quiz }
    }
}

impl Screen for MenuScreen {
    fn name(&self) -> &str {
        "menu"
    }
}

impl QuizScreen for MenuScreen {
    fn render(&self) -> Vec<String> {
        let count = self.quiz.borrow().question_count();
        vec![
            APP_NAME.to_owned(),
            String::new(),
            format!("{count} questions"),
            String::new(),
            "[s] start   [q] quit".to_owned(),
        ]
    }

    fn handle(&self, input: Input) -> Option<Segue> {
        match input {
            Input::Start | Input::Choice(_) => Some(Segue::Start),
            Input::Restart | Input::Menu => None,
        }
    }
}

/// One question of the quiz.
pub struct QuestionScreen {
    quiz: Rc<RefCell<Quiz>>,
    index: usize,
    name: String,
}

impl QuestionScreen {
    /// Screen showing question `index` of `quiz`.
    pub fn new(quiz: Rc<RefCell<Quiz>>, index: usize) -> Self {
        Self {
            quiz,
            index,
            name: format!("question-{}", index.saturating_add(1)),
        }
    }
}

impl Screen for QuestionScreen {
    fn name(&self) -> &str {
        &self.name
    }
}

impl QuizScreen for QuestionScreen {
    fn render(&self) -> Vec<String> {
        let quiz = self.quiz.borrow();
        let Some(question) = quiz.question(self.index) else {
            return vec![format!("(no question {})", self.index)];
        };
        let mut lines = vec![
            format!(
                "Question {} of {}",
                self.index.saturating_add(1),
                quiz.question_count()
            ),
            question.text().to_owned(),
            String::new(),
        ];
        for (i, response) in question.responses().iter().enumerate() {
            let marker = if question.selected_response() == Some(i) {
                '>'
            } else {
                ' '
            };
            lines.push(format!("{marker} {}) {response}", i.saturating_add(1)));
        }
        lines.push(String::new());
        lines.push("[1-9] answer   [m] menu   [q] quit".to_owned());
        lines
    }

    fn handle(&self, input: Input) -> Option<Segue> {
        match input {
            Input::Choice(response) => {
                let responses = self
                    .quiz
                    .borrow()
                    .question(self.index)
                    .map_or(0, |q| q.responses().len());
                (response < responses).then_some(Segue::Answer {
                    question: self.index,
                    response,
                })
            }
            Input::Menu => Some(Segue::Menu),
            Input::Start | Input::Restart => None,
        }
    }

    fn question_index(&self) -> Option<usize> {
        Some(self.index)
    }
}

/// Score summary.
pub struct ResultsScreen {
    quiz: Rc<RefCell<Quiz>>,
}

impl ResultsScreen {
    /// Results of `quiz`.
    pub fn new(quiz: Rc<RefCell<Quiz>>) -> Self {
        Self { quiz }
    }
}

impl Screen for ResultsScreen {
    fn name(&self) -> &str {
        "results"
    }

    fn on_appear(&self) {
        let quiz = self.quiz.borrow();
        tracing::info!(
            correct = quiz.correct_count(),
            answered = quiz.answered_count(),
            score = quiz.percentage_score(),
            "quiz finished"
        );
    }
}

impl QuizScreen for ResultsScreen {
    fn render(&self) -> Vec<String> {
        let quiz = self.quiz.borrow();
        vec![
            "Results".to_owned(),
            String::new(),
            format!(
                "Correct: {} / {}",
                quiz.correct_count(),
                quiz.question_count()
            ),
            format!("Score:   {:.0}%", quiz.percentage_score()),
            String::new(),
            "[r] restart   [m] menu   [q] quit".to_owned(),
        ]
    }

    fn handle(&self, input: Input) -> Option<Segue> {
        match input {
            Input::Restart => Some(Segue::Restart),
            Input::Menu => Some(Segue::Menu),
            Input::Start | Input::Choice(_) => None,
        }
    }
}

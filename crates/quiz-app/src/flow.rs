//! Flow graph — the named edges between quiz screens.
//!
//! ```text
//!            start            answer (n-1 times)        answer (last)
//!   menu ──────────► q1 ───────────────────► qN ──────────────────► results
//!    ▲                ▲                                                │
//!    │                └──────────── restart (unwind) ──────────────────┤
//!    └───────────────────────────── menu (unwind) ─────────────────────┘
//! ```
//!
//! Each fired [`Segue`] is resolved into a [`Binding`]: forward edges create
//! their destination screen and push it, unwind edges pop back to a screen
//! already on the stack.

use std::cell::RefCell;
use std::rc::Rc;

use quiz::{Quiz, QuizError};
use ui::{
    Binding, BindingOutcome, NavigationBinding, NavigationError, Navigator, PushBinding,
    RootBinding, TransitionAnimator,
};

use crate::screens::{MenuScreen, QuestionScreen, QuizScreen, ResultsScreen};

/// A named edge of the flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segue {
    /// Menu → first question. Resets previous answers.
    Start,
    /// Question → next question, or → results after the last one.
    Answer {
        /// Zero-based question index.
        question: usize,
        /// Zero-based response index.
        response: usize,
    },
    /// Results → first question (unwind). Resets answers.
    Restart,
    /// Anywhere → menu (unwind).
    Menu,
}

impl Segue {
    /// Edge name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Segue::Start => "start",
            Segue::Answer { .. } => "answer",
            Segue::Restart => "restart",
            Segue::Menu => "menu",
        }
    }
}

/// Error firing a segue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The navigator refused the binding.
    Navigation(NavigationError),
    /// The quiz refused the answer.
    Quiz(QuizError),
}

impl From<NavigationError> for FlowError {
    fn from(e: NavigationError) -> Self {
        Self::Navigation(e)
    }
}

impl From<QuizError> for FlowError {
    fn from(e: QuizError) -> Self {
        Self::Quiz(e)
    }
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowError::Navigation(e) => write!(f, "Navigation failed: {}", e),
            FlowError::Quiz(e) => write!(f, "Quiz update failed: {}", e),
        }
    }
}

impl std::error::Error for FlowError {}

/// Screen navigator used throughout the application.
pub type QuizNavigator<A> = Navigator<dyn QuizScreen, A>;

/// Resolves segues into bindings, creating destination screens on demand.
pub struct Flow {
    quiz: Rc<RefCell<Quiz>>,
    menu: Rc<dyn QuizScreen>,
    first_question: Option<Rc<dyn QuizScreen>>,
    animated: bool,
}

impl Flow {
    /// Flow over `quiz`; `animated` is forwarded to every push / unwind.
    pub fn new(quiz: Rc<RefCell<Quiz>>, animated: bool) -> Self {
        let menu: Rc<dyn QuizScreen> = Rc::new(MenuScreen::new(Rc::clone(&quiz)));
        Self {
            quiz,
            menu,
            first_question: None,
            animated,
        }
    }

    /// The root edge installing the menu.
    pub fn root_binding(&self) -> Binding<dyn QuizScreen> {
        RootBinding::new(Rc::clone(&self.menu)).into()
    }

    /// The menu screen.
    pub fn menu(&self) -> &Rc<dyn QuizScreen> {
        &self.menu
    }

    /// Shared quiz.
    pub fn quiz(&self) -> &Rc<RefCell<Quiz>> {
        &self.quiz
    }

    /// Resolve `segue` into the binding to apply.
    ///
    /// `Start` resets the quiz and `Answer` records the answer here. The
    /// reset of `Restart` is left to [`Flow::fire`], which only performs it
    /// once the unwind has been applied.
    ///
    /// # Errors
    ///
    /// `Quiz` if the answer is invalid; `Navigation(NotFound)` for a restart
    /// with no first question on the stack (never started, or the menu was
    /// shown since).
    pub fn resolve(&mut self, segue: Segue) -> Result<Binding<dyn QuizScreen>, FlowError> {
        let binding = match segue {
            Segue::Start => {
                self.quiz.borrow_mut().reset();
                let first = self.question_screen(0);
                self.first_question = Some(Rc::clone(&first));
                PushBinding::new(first)
            }
            Segue::Answer { question, response } => {
                self.quiz.borrow_mut().record_answer(question, response)?;
                let next = question.saturating_add(1);
                let has_next = next < self.quiz.borrow().question_count();
                let destination: Rc<dyn QuizScreen> = if has_next {
                    self.question_screen(next)
                } else {
                    Rc::new(ResultsScreen::new(Rc::clone(&self.quiz)))
                };
                PushBinding::new(destination)
            }
            Segue::Restart => {
                let first = self
                    .first_question
                    .as_ref()
                    .map(Rc::clone)
                    .ok_or(NavigationError::NotFound)?;
                PushBinding::unwind_to(first)
            }
            Segue::Menu => PushBinding::unwind_to(Rc::clone(&self.menu)),
        };
        Ok(binding.with_animated(self.animated).into())
    }

    /// Fire `segue` against `navigator`.
    ///
    /// A navigator still fading rejects the segue with
    /// `TransitionInProgress`. On any error the quiz is left untouched.
    ///
    /// # Errors
    ///
    /// See [`Flow::resolve`]; plus any navigator error.
    pub fn fire<A: TransitionAnimator<dyn QuizScreen>>(
        &mut self,
        segue: Segue,
        navigator: &mut QuizNavigator<A>,
    ) -> Result<BindingOutcome<dyn QuizScreen>, FlowError> {
        if navigator.is_transitioning() {
            tracing::warn!(segue = segue.name(), "segue fired during a transition");
            return Err(NavigationError::TransitionInProgress.into());
        }
        let binding = self.resolve(segue)?;
        tracing::debug!(
            segue = segue.name(),
            destination = binding.destination().name(),
            "segue fired"
        );
        let outcome = binding.resolve_and_apply(navigator)?;
        match segue {
            Segue::Restart => self.quiz.borrow_mut().reset(),
            // The first question screen left the stack with everything above the menu.
            Segue::Menu => self.first_question = None,
            Segue::Start | Segue::Answer { .. } => {}
        }
        Ok(outcome)
    }

    fn question_screen(&self, index: usize) -> Rc<dyn QuizScreen> {
        Rc::new(QuestionScreen::new(Rc::clone(&self.quiz), index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use ui::{FadeAnimator, FadeConfig, ManualClock};

    fn setup() -> (Flow, QuizNavigator<FadeAnimator<ManualClock>>) {
        let quiz = Quiz::from_json(crate::config::BUNDLED_QUESTIONS).expect("bundled bank");
        let flow = Flow::new(Rc::new(RefCell::new(quiz)), false);
        let mut nav = Navigator::new(FadeAnimator::with_config(
            ManualClock::new(),
            FadeConfig::INSTANT,
        ));
        flow.root_binding().resolve_and_apply(&mut nav).unwrap();
        (flow, nav)
    }

    fn top(nav: &QuizNavigator<FadeAnimator<ManualClock>>) -> String {
        nav.current_screen().unwrap().name().to_owned()
    }

    #[test]
    fn test_segue_names() {
        assert_eq!(Segue::Restart.name(), "restart");
        assert_eq!(
            Segue::Answer {
                question: 0,
                response: 0
            }
            .name(),
            "answer"
        );
    }

    #[test]
    fn test_start_pushes_first_question() {
        let (mut flow, mut nav) = setup();
        flow.fire(Segue::Start, &mut nav).unwrap();
        assert_eq!(top(&nav), "question-1");
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_invalid_answer_does_not_navigate() {
        let (mut flow, mut nav) = setup();
        flow.fire(Segue::Start, &mut nav).unwrap();
        let err = flow
            .fire(
                Segue::Answer {
                    question: 0,
                    response: 99,
                },
                &mut nav,
            )
            .err();
        assert!(matches!(err, Some(FlowError::Quiz(_))));
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_restart_before_start_is_not_found() {
        let (mut flow, mut nav) = setup();
        assert_eq!(
            flow.fire(Segue::Restart, &mut nav).err(),
            Some(FlowError::Navigation(NavigationError::NotFound))
        );
    }

    #[test]
    fn test_menu_unwinds_to_root() {
        let (mut flow, mut nav) = setup();
        flow.fire(Segue::Start, &mut nav).unwrap();
        flow.fire(
            Segue::Answer {
                question: 0,
                response: 0,
            },
            &mut nav,
        )
        .unwrap();
        let outcome = flow.fire(Segue::Menu, &mut nav).unwrap();
        assert!(matches!(outcome, BindingOutcome::Unwound(ref removed) if removed.len() == 2));
        assert_eq!(top(&nav), "menu");
    }

    #[test]
    fn test_restart_after_menu_keeps_answers() {
        let (mut flow, mut nav) = setup();
        flow.fire(Segue::Start, &mut nav).unwrap();
        flow.fire(
            Segue::Answer {
                question: 0,
                response: 1,
            },
            &mut nav,
        )
        .unwrap();
        flow.fire(Segue::Menu, &mut nav).unwrap();

        assert_eq!(
            flow.fire(Segue::Restart, &mut nav).err(),
            Some(FlowError::Navigation(NavigationError::NotFound))
        );
        assert_eq!(flow.quiz().borrow().answered_count(), 1);
        assert_eq!(top(&nav), "menu");
    }

    #[test]
    fn test_restart_resets_after_unwinding() {
        let (mut flow, mut nav) = setup();
        flow.fire(Segue::Start, &mut nav).unwrap();
        flow.fire(
            Segue::Answer {
                question: 0,
                response: 1,
            },
            &mut nav,
        )
        .unwrap();

        flow.fire(Segue::Restart, &mut nav).unwrap();
        assert_eq!(top(&nav), "question-1");
        assert_eq!(nav.depth(), 2);
        assert_eq!(flow.quiz().borrow().answered_count(), 0);
    }

    #[test]
    fn test_flow_error_display() {
        let err = FlowError::from(NavigationError::NotFound);
        assert_eq!(
            err.to_string(),
            "Navigation failed: Screen is not on the navigation stack"
        );
    }
}

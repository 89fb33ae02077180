//! Application driver — owns the navigator and the flow, routes input.

use std::cell::RefCell;
use std::rc::Rc;

use quiz::Quiz;
use ui::{Clock, FadeAnimator, NavigationBinding, NavigationError};

use crate::config::AppConfig;
use crate::flow::{Flow, FlowError, QuizNavigator};
use crate::render::render_layers;
use crate::screens::Input;

/// One decoded line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the application.
    Quit,
    /// Forward to the visible screen.
    Input(Input),
}

/// Decode a line typed by the user.
///
/// Numbers are 1-based on screen and 0-based in [`Input::Choice`].
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "s" | "start" => return Some(Command::Input(Input::Start)),
        "r" | "restart" => return Some(Command::Input(Input::Restart)),
        "m" | "menu" => return Some(Command::Input(Input::Menu)),
        _ => {}
    }
    let number: usize = line.parse().ok()?;
    number
        .checked_sub(1)
        .map(|choice| Command::Input(Input::Choice(choice)))
}

/// The running quiz application.
pub struct QuizApp<C: Clock> {
    navigator: QuizNavigator<FadeAnimator<C>>,
    flow: Flow,
}

impl<C: Clock> QuizApp<C> {
    /// Application over `quiz`; call [`activate`](Self::activate) before use.
    pub fn new(quiz: Quiz, config: &AppConfig, clock: C) -> Self {
        let flow = Flow::new(Rc::new(RefCell::new(quiz)), config.animate);
        let navigator = QuizNavigator::new(FadeAnimator::with_config(clock, config.fade));
        Self { navigator, flow }
    }

    /// Install the main menu as the root screen.
    ///
    /// # Errors
    ///
    /// `InvalidState` if already activated.
    pub fn activate(&mut self) -> Result<(), NavigationError> {
        self.flow
            .root_binding()
            .resolve_and_apply(&mut self.navigator)?;
        tracing::info!(
            questions = self.flow.quiz().borrow().question_count(),
            "quiz activated"
        );
        Ok(())
    }

    /// Route `input` to the visible screen.
    ///
    /// Returns `true` if it fired a segue, `false` if the screen ignored it.
    ///
    /// # Errors
    ///
    /// Any [`FlowError`]; nothing changes when one is returned.
    pub fn handle(&mut self, input: Input) -> Result<bool, FlowError> {
        let screen = self.navigator.current_screen()?;
        let Some(segue) = screen.handle(input) else {
            tracing::trace!(screen = screen.name(), "input ignored");
            return Ok(false);
        };
        self.flow.fire(segue, &mut self.navigator)?;
        Ok(true)
    }

    /// Advance the running fade. Returns `true` on the turn it settles.
    pub fn tick(&mut self) -> bool {
        self.navigator.tick()
    }

    /// Current frame as text.
    pub fn render(&self) -> String {
        render_layers(&self.navigator.layers())
    }

    /// `true` while a fade is running.
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    /// The screen navigator.
    pub fn navigator(&self) -> &QuizNavigator<FadeAnimator<C>> {
        &self.navigator
    }

    /// The shared quiz.
    pub fn quiz(&self) -> &Rc<RefCell<Quiz>> {
        self.flow.quiz()
    }
}

//! Application configuration and constants
//!
//! Central values used by the binary and the event loop. Command-line
//! parsing lives in `main.rs`; it only fills in an [`AppConfig`].

use std::path::PathBuf;

use quiz::{Quiz, QuizError};
use ui::FadeConfig;

/// The application name
pub const APP_NAME: &str = "Quiz";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event-loop tick period (~60 Hz), drives fade progress.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Question bank compiled into the binary.
pub const BUNDLED_QUESTIONS: &str = include_str!("../assets/questions.json");

/// Runtime configuration for the quiz application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Cross-fade timing.
    pub fade: FadeConfig,
    /// Whether forward / unwind transitions are animated.
    pub animate: bool,
    /// Question bank to load instead of the bundled one.
    pub questions: Option<PathBuf>,
}

impl AppConfig {
    /// Default configuration: bundled questions, default fade
    pub const DEFAULT: Self = Self {
        fade: FadeConfig::DEFAULT,
        animate: true,
        questions: None,
    };

    /// No animations at all (scripted runs, tests)
    pub const INSTANT: Self = Self {
        fade: FadeConfig::INSTANT,
        animate: false,
        questions: None,
    };

    /// Load the configured question bank, falling back to the bundled one.
    ///
    /// # Errors
    ///
    /// Any error from reading or validating the bank.
    pub fn load_quiz(&self) -> Result<Quiz, QuizError> {
        match &self.questions {
            Some(path) => Quiz::load(path),
            None => Quiz::from_json(BUNDLED_QUESTIONS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

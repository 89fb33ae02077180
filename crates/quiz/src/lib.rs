//! Quiz model — question bank loading, answer bookkeeping, scoring.
//!
//! # Modules
//!
//! - [`question`] — `Question` record and the user's selected response
//! - [`bank`] — JSON question file format and validation
//! - [`quiz`] — `Quiz` statistics over a loaded bank

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod bank;
pub mod question;
#[allow(clippy::module_inception)] // quiz::quiz::Quiz reads fine; re-exported at the root
pub mod quiz;

// Top-level re-exports for convenience
pub use bank::{load_questions, parse_questions, QuizError};
pub use question::Question;
pub use quiz::Quiz;

//! Quiz application — screens, flow graph and text front end on top of the
//! `ui` navigator and the `quiz` model.

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod config;
pub mod flow;
pub mod render;
pub mod screens;

pub use app::{parse_command, Command, QuizApp};
pub use config::AppConfig;
pub use flow::{Flow, FlowError, Segue};

//! Terminal quiz.
//!
//! Reads one command per line from stdin and redraws the screen every tick
//! while a cross-fade runs.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

use quiz_app::config::{AppConfig, APP_NAME, APP_VERSION, TICK_INTERVAL_MS};
use quiz_app::{parse_command, Command, QuizApp};
use ui::{FadeConfig, SystemClock};

#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Multiple-choice quiz in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Question bank (JSON); the bundled bank is used when omitted
    #[arg(long)]
    questions: Option<PathBuf>,
    /// Cross-fade length in milliseconds
    #[arg(long, default_value_t = FadeConfig::DEFAULT.duration_ms)]
    fade_ms: u32,
    /// Switch screens without fading
    #[arg(long)]
    no_animation: bool,
    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            fade: FadeConfig {
                duration_ms: self.fade_ms,
                ..FadeConfig::DEFAULT
            },
            animate: !self.no_animation,
            questions: self.questions.clone(),
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn draw(app: &QuizApp<SystemClock>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    // Clear screen, cursor home.
    write!(stdout, "\x1b[2J\x1b[H{}> ", app.render()).context("Failed to draw screen")?;
    stdout.flush().context("Failed to flush stdout")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    tracing::info!(app = APP_NAME, version = APP_VERSION, "starting");

    let config = cli.app_config();
    let quiz = config.load_quiz().with_context(|| match &config.questions {
        Some(path) => format!("Failed to load questions from {}", path.display()),
        None => "Bundled question bank is invalid".to_owned(),
    })?;

    let mut app = QuizApp::new(quiz, &config, SystemClock::new());
    app.activate().context("Failed to install the main menu")?;
    draw(&app)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(Duration::from_millis(TICK_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Input(input)) => {
                        // Rejected input (mid-fade, invalid answer) is logged
                        // and the frame is simply redrawn.
                        if let Err(e) = app.handle(input) {
                            tracing::warn!(error = %e, "input rejected");
                        }
                    }
                    None => tracing::debug!(line = %line, "unknown command"),
                }
                draw(&app)?;
            }
            _ = ticker.tick(), if app.is_transitioning() => {
                app.tick();
                draw(&app)?;
            }
        }
    }

    let quiz = app.quiz().borrow();
    tracing::info!(
        answered = quiz.answered_count(),
        correct = quiz.correct_count(),
        "exiting"
    );
    println!();
    Ok(())
}

//! Text renderer for the navigator's layers.
//!
//! A terminal cannot blend two screens, so a frame shows the layer with the
//! highest opacity (ties go to the upper layer) plus a one-line fade status
//! while a transition runs.

use ui::Layer;

use crate::config::{APP_NAME, APP_VERSION};
use crate::screens::QuizScreen;

const RULE_WIDTH: usize = 40;

/// Render one frame.
pub fn render_layers(layers: &[Layer<dyn QuizScreen>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{APP_NAME} v{APP_VERSION}\n"));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    let Some(visible) = dominant(layers) else {
        out.push_str("(no screen)\n");
        return out;
    };
    for line in visible.screen.render() {
        out.push_str(&line);
        out.push('\n');
    }

    if layers.len() > 1 {
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        let fades = layers
            .iter()
            .map(|layer| format!("{} {}%", layer.screen.name(), percent(layer.alpha)))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&format!("fading: {fades}\n"));
    }
    out
}

fn dominant(layers: &[Layer<dyn QuizScreen>]) -> Option<&Layer<dyn QuizScreen>> {
    layers
        .iter()
        .rev()
        .reduce(|best, layer| if layer.alpha > best.alpha { layer } else { best })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
fn percent(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::screens::{MenuScreen, ResultsScreen};
    use quiz::Quiz;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn screens() -> (Rc<dyn QuizScreen>, Rc<dyn QuizScreen>) {
        let quiz = Rc::new(RefCell::new(
            Quiz::from_json(crate::config::BUNDLED_QUESTIONS).expect("bundled bank"),
        ));
        (
            Rc::new(MenuScreen::new(Rc::clone(&quiz))),
            Rc::new(ResultsScreen::new(quiz)),
        )
    }

    #[test]
    fn test_idle_frame_has_no_fade_line() {
        let (menu, _) = screens();
        let frame = render_layers(&[Layer {
            screen: menu,
            alpha: 1.0,
        }]);
        assert!(frame.starts_with(APP_NAME));
        assert!(frame.contains("[s] start"));
        assert!(!frame.contains("fading:"));
    }

    #[test]
    fn test_fade_shows_most_opaque_layer() {
        let (menu, results) = screens();
        let early = render_layers(&[
            Layer {
                screen: Rc::clone(&menu),
                alpha: 1.0,
            },
            Layer {
                screen: Rc::clone(&results),
                alpha: 0.25,
            },
        ]);
        assert!(early.contains("[s] start"));
        assert!(early.contains("fading: menu 100% | results 25%"));

        let late = render_layers(&[
            Layer {
                screen: menu,
                alpha: 1.0,
            },
            Layer {
                screen: results,
                alpha: 1.0,
            },
        ]);
        assert!(late.contains("Results"));
    }

    #[test]
    fn test_empty_frame() {
        assert!(render_layers(&[]).contains("(no screen)"));
    }
}

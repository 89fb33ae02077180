//! Cross-fade transitions between two screens.
//!
//! A transition is either forward (push: the destination fades in on top of
//! the source) or backward (pop: the source fades out, revealing the
//! destination beneath). Both look alike on screen but differ in which layer
//! is structurally on top, which the renderer needs to know.
//!
//! Timing is polled rather than callback driven: the navigator calls
//! [`TransitionAnimator::begin`] once and then [`TransitionAnimator::poll`]
//! on every event-loop turn until it reports [`Progress::Settled`].

use alloc::rc::Rc;

use crate::clock::Clock;

/// Direction of a transition relative to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Push / root install: destination ends up above the source.
    Forward,
    /// Pop: the source is removed from above the destination.
    Backward,
}

impl Direction {
    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

/// One transition, alive from the moment an operation starts it until it settles.
pub struct TransitionRequest<S: ?Sized> {
    /// Forward or backward.
    pub direction: Direction,
    /// Outgoing screen; `None` when installing into an empty container.
    pub from: Option<Rc<S>>,
    /// Incoming screen, the new top of the stack.
    pub to: Rc<S>,
    /// Whether the fade is played or the change is applied immediately.
    pub animated: bool,
}

impl<S: ?Sized> TransitionRequest<S> {
    /// Forward request (`from → to`).
    pub fn forward(from: Option<Rc<S>>, to: Rc<S>, animated: bool) -> Self {
        Self {
            direction: Direction::Forward,
            from,
            to,
            animated,
        }
    }

    /// Backward request (`from → to`).
    pub fn backward(from: Option<Rc<S>>, to: Rc<S>, animated: bool) -> Self {
        Self {
            direction: Direction::Backward,
            from,
            to,
            animated,
        }
    }
}

impl<S: ?Sized> Clone for TransitionRequest<S> {
    fn clone(&self) -> Self {
        Self {
            direction: self.direction,
            from: self.from.clone(),
            to: Rc::clone(&self.to),
            animated: self.animated,
        }
    }
}

/// Blend state of a running fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    /// Direction of the running transition.
    pub direction: Direction,
    /// Eased progress in `0.0..=1.0`.
    pub progress: f32,
    /// Opacity of the outgoing screen.
    pub from_alpha: f32,
    /// Opacity of the incoming screen.
    pub to_alpha: f32,
}

impl FadeFrame {
    /// Frame for `direction` at eased progress `t`.
    pub fn at(direction: Direction, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        match direction {
            Direction::Forward => Self {
                direction,
                progress: t,
                from_alpha: 1.0,
                to_alpha: t,
            },
            Direction::Backward => Self {
                direction,
                progress: t,
                from_alpha: 1.0 - t,
                to_alpha: 1.0,
            },
        }
    }

    /// `true` if the incoming screen is drawn above the outgoing one.
    pub fn incoming_on_top(&self) -> bool {
        self.direction == Direction::Forward
    }
}

/// Result of starting or polling a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Still fading; the frame to draw this turn.
    Running(FadeFrame),
    /// The incoming screen is fully settled (or nothing is running).
    Settled,
}

/// Plays the visual part of a stack change.
///
/// Contract:
/// - `begin` with `animated == false` must return [`Progress::Settled`];
///   the end state is identical to the animated path.
/// - After `begin` returned `Running`, `poll` eventually returns `Settled`
///   and keeps returning it until the next `begin`.
/// - There is no cancellation; the navigator never calls `begin` while a
///   transition is running.
pub trait TransitionAnimator<S: ?Sized> {
    /// Start a transition.
    fn begin(&mut self, request: &TransitionRequest<S>) -> Progress;

    /// Advance the running transition.
    fn poll(&mut self) -> Progress;

    /// Current frame, `None` when idle.
    fn frame(&self) -> Option<FadeFrame>;
}

/// Easing applied to linear fade progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadeCurve {
    /// Constant rate.
    Linear,
    /// Smoothstep: slow start, slow end.
    #[default]
    EaseInOut,
}

impl FadeCurve {
    /// Map linear progress `t` (`0.0..=1.0`) through the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            FadeCurve::Linear => t,
            FadeCurve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Cross-fade timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeConfig {
    /// Length of an animated fade. Zero settles every transition on `begin`.
    pub duration_ms: u32,
    /// Easing curve.
    pub curve: FadeCurve,
}

impl FadeConfig {
    /// Default fade (~300ms, eased)
    pub const DEFAULT: Self = Self {
        duration_ms: 300,
        curve: FadeCurve::EaseInOut,
    };

    /// Short fade (~150ms, linear)
    pub const QUICK: Self = Self {
        duration_ms: 150,
        curve: FadeCurve::Linear,
    };

    /// No fade at all, even for animated requests
    pub const INSTANT: Self = Self {
        duration_ms: 0,
        curve: FadeCurve::Linear,
    };
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveFade {
    direction: Direction,
    started_ms: u64,
}

/// Clock-driven cross-fade animator.
pub struct FadeAnimator<C: Clock> {
    clock: C,
    config: FadeConfig,
    active: Option<ActiveFade>,
}

impl<C: Clock> FadeAnimator<C> {
    /// Animator with the default fade.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, FadeConfig::DEFAULT)
    }

    /// Animator with custom timing.
    pub fn with_config(clock: C, config: FadeConfig) -> Self {
        Self {
            clock,
            config,
            active: None,
        }
    }

    /// Timing in use.
    pub fn config(&self) -> FadeConfig {
        self.config
    }

    fn elapsed_ms(&self, active: &ActiveFade) -> u64 {
        self.clock.now_ms().saturating_sub(active.started_ms)
    }

    #[allow(clippy::cast_precision_loss)] // sub-millisecond precision is irrelevant for a fade
    fn frame_for(&self, active: &ActiveFade) -> FadeFrame {
        let elapsed = self.elapsed_ms(active) as f32;
        let linear = elapsed / self.config.duration_ms.max(1) as f32;
        FadeFrame::at(active.direction, self.config.curve.apply(linear))
    }
}

impl<C: Clock, S: ?Sized> TransitionAnimator<S> for FadeAnimator<C> {
    fn begin(&mut self, request: &TransitionRequest<S>) -> Progress {
        if !request.animated || self.config.duration_ms == 0 {
            self.active = None;
            return Progress::Settled;
        }
        let active = ActiveFade {
            direction: request.direction,
            started_ms: self.clock.now_ms(),
        };
        self.active = Some(active);
        Progress::Running(self.frame_for(&active))
    }

    fn poll(&mut self) -> Progress {
        let Some(active) = self.active else {
            return Progress::Settled;
        };
        if self.elapsed_ms(&active) >= u64::from(self.config.duration_ms) {
            self.active = None;
            return Progress::Settled;
        }
        let frame = self.frame_for(&active);
        tracing::trace!(
            direction = active.direction.name(),
            progress = frame.progress,
            "fade frame"
        );
        Progress::Running(frame)
    }

    fn frame(&self) -> Option<FadeFrame> {
        self.active.as_ref().map(|active| self.frame_for(active))
    }
}

//! Declarative bindings fired by a flow definition.
//!
//! A flow definition (a storyboard-like graph of named edges) resolves the
//! destination screen of an edge, wraps it in a binding, and hands the
//! binding to [`NavigationBinding::resolve_and_apply`]. Each binding turns
//! into exactly one navigator call:
//!
//! | Binding | Call |
//! |---------|------|
//! | [`RootBinding`] | `set_screens([destination], animated = false)` |
//! | [`PushBinding`], `unwind = false` | `push(destination, animated)` |
//! | [`PushBinding`], `unwind = true` | `pop_to(destination, animated)` |

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::NavigationError;
use crate::navigation::Navigator;
use crate::screen::Screen;
use crate::transition::TransitionAnimator;

/// What a binding did to the navigator.
pub enum BindingOutcome<S: ?Sized> {
    /// A root screen was installed.
    Installed,
    /// The destination was pushed.
    Pushed,
    /// The stack was unwound to the destination; the removed screens, top first.
    Unwound(Vec<Rc<S>>),
}

/// Something a flow edge can apply to a navigator.
pub trait NavigationBinding<S: ?Sized + Screen> {
    /// Resolve the destination and perform the single navigator call.
    ///
    /// # Errors
    ///
    /// Whatever the navigator call returns; nothing is retried.
    fn resolve_and_apply<A: TransitionAnimator<S>>(
        self,
        navigator: &mut Navigator<S, A>,
    ) -> Result<BindingOutcome<S>, NavigationError>;
}

/// Installs the initial screen of a navigator. Never animated.
pub struct RootBinding<S: ?Sized> {
    destination: Rc<S>,
}

impl<S: ?Sized> RootBinding<S> {
    /// Binding installing `destination` as the only screen.
    pub fn new(destination: Rc<S>) -> Self {
        Self { destination }
    }

    /// Screen that will become the root.
    pub fn destination(&self) -> &Rc<S> {
        &self.destination
    }
}

impl<S: ?Sized + Screen> NavigationBinding<S> for RootBinding<S> {
    /// Fails with `InvalidState` if the navigator already has a root: a root
    /// edge fires once per activation.
    fn resolve_and_apply<A: TransitionAnimator<S>>(
        self,
        navigator: &mut Navigator<S, A>,
    ) -> Result<BindingOutcome<S>, NavigationError> {
        if navigator.is_active() {
            tracing::warn!(
                destination = self.destination.name(),
                "root binding fired on an active navigator"
            );
            return Err(NavigationError::InvalidState);
        }
        navigator.set_screens(vec![self.destination], false)?;
        Ok(BindingOutcome::Installed)
    }
}

/// Moves forward to, or unwinds back to, a destination screen.
pub struct PushBinding<S: ?Sized> {
    destination: Rc<S>,
    unwind: bool,
    animated: bool,
}

impl<S: ?Sized> PushBinding<S> {
    /// Animated forward push of `destination`.
    pub fn new(destination: Rc<S>) -> Self {
        Self {
            destination,
            unwind: false,
            animated: true,
        }
    }

    /// Animated unwind back to `destination`.
    pub fn unwind_to(destination: Rc<S>) -> Self {
        Self::new(destination).with_unwind(true)
    }

    /// `true` selects `pop_to`, `false` selects `push`.
    #[must_use]
    pub fn with_unwind(mut self, unwind: bool) -> Self {
        self.unwind = unwind;
        self
    }

    /// Forwarded unchanged to the navigator.
    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Target screen.
    pub fn destination(&self) -> &Rc<S> {
        &self.destination
    }

    /// Whether this binding unwinds instead of pushing.
    pub fn is_unwind(&self) -> bool {
        self.unwind
    }

    /// Whether the transition is animated.
    pub fn is_animated(&self) -> bool {
        self.animated
    }
}

impl<S: ?Sized + Screen> NavigationBinding<S> for PushBinding<S> {
    fn resolve_and_apply<A: TransitionAnimator<S>>(
        self,
        navigator: &mut Navigator<S, A>,
    ) -> Result<BindingOutcome<S>, NavigationError> {
        if self.unwind {
            let removed = navigator.pop_to(&self.destination, self.animated)?;
            Ok(BindingOutcome::Unwound(removed))
        } else {
            navigator.push(self.destination, self.animated)?;
            Ok(BindingOutcome::Pushed)
        }
    }
}

/// Either binding, for flow graphs that store edges of both kinds.
pub enum Binding<S: ?Sized> {
    /// Root install.
    Root(RootBinding<S>),
    /// Push or unwind.
    Push(PushBinding<S>),
}

impl<S: ?Sized> Binding<S> {
    /// Screen the binding navigates to.
    pub fn destination(&self) -> &Rc<S> {
        match self {
            Binding::Root(root) => root.destination(),
            Binding::Push(push) => push.destination(),
        }
    }
}

impl<S: ?Sized + Screen> NavigationBinding<S> for Binding<S> {
    fn resolve_and_apply<A: TransitionAnimator<S>>(
        self,
        navigator: &mut Navigator<S, A>,
    ) -> Result<BindingOutcome<S>, NavigationError> {
        match self {
            Binding::Root(root) => root.resolve_and_apply(navigator),
            Binding::Push(push) => push.resolve_and_apply(navigator),
        }
    }
}

impl<S: ?Sized> From<RootBinding<S>> for Binding<S> {
    fn from(binding: RootBinding<S>) -> Self {
        Binding::Root(binding)
    }
}

impl<S: ?Sized> From<PushBinding<S>> for Binding<S> {
    fn from(binding: PushBinding<S>) -> Self {
        Binding::Push(binding)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::screen::same_screen;
    use crate::screen::testing::Probe;
    use crate::transition::{FadeAnimator, FadeConfig};

    fn navigator() -> Navigator<Probe, FadeAnimator<ManualClock>> {
        Navigator::new(FadeAnimator::with_config(
            ManualClock::new(),
            FadeConfig::DEFAULT,
        ))
    }

    #[test]
    fn test_root_binding_installs_without_animation() {
        let mut nav = navigator();
        let menu = Probe::new("menu");
        let outcome = RootBinding::new(Rc::clone(&menu))
            .resolve_and_apply(&mut nav)
            .unwrap();
        assert!(matches!(outcome, BindingOutcome::Installed));
        assert!(same_screen(&nav.current_screen().unwrap(), &menu));
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn test_root_binding_fires_once() {
        let mut nav = navigator();
        RootBinding::new(Probe::new("menu"))
            .resolve_and_apply(&mut nav)
            .unwrap();
        let second = RootBinding::new(Probe::new("other")).resolve_and_apply(&mut nav);
        assert_eq!(second.err(), Some(NavigationError::InvalidState));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_binding_forwards_animated_flag() {
        let mut nav = navigator();
        RootBinding::new(Probe::new("menu"))
            .resolve_and_apply(&mut nav)
            .unwrap();

        PushBinding::new(Probe::new("q1"))
            .with_animated(false)
            .resolve_and_apply(&mut nav)
            .unwrap();
        assert!(!nav.is_transitioning());

        PushBinding::new(Probe::new("q2"))
            .resolve_and_apply(&mut nav)
            .unwrap();
        assert!(nav.is_transitioning());
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_unwind_binding_pops_to_destination() {
        let mut nav = navigator();
        let menu = Probe::new("menu");
        nav.set_screens(
            vec![Rc::clone(&menu), Probe::new("q1"), Probe::new("results")],
            false,
        )
        .unwrap();

        let binding: Binding<Probe> = PushBinding::unwind_to(Rc::clone(&menu))
            .with_animated(false)
            .into();
        assert!(same_screen(binding.destination(), &menu));

        match binding.resolve_and_apply(&mut nav).unwrap() {
            BindingOutcome::Unwound(removed) => {
                let names: Vec<_> = removed.iter().map(|s| s.name).collect();
                assert_eq!(names, ["results", "q1"]);
            }
            _ => panic!("expected an unwind"),
        }
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_unwind_to_unknown_screen_surfaces_not_found() {
        let mut nav = navigator();
        RootBinding::new(Probe::new("menu"))
            .resolve_and_apply(&mut nav)
            .unwrap();
        let result = PushBinding::unwind_to(Probe::new("ghost")).resolve_and_apply(&mut nav);
        assert_eq!(result.err().map(|e| e.name()), Some("not_found"));
    }
}

//! Navigation container — a [`ScreenStack`] plus the transition that follows each change.
//!
//! Every operation mutates the stack synchronously and then hands a
//! [`TransitionRequest`] to the animator. Non-animated requests settle before
//! the operation returns; animated ones settle on a later [`Navigator::tick`].
//! While a transition is in flight every mutating call is rejected with
//! [`NavigationError::TransitionInProgress`] and the stack is left untouched.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::NavigationError;
use crate::screen::{same_screen, Screen};
use crate::stack::ScreenStack;
use crate::transition::{Direction, Progress, TransitionAnimator, TransitionRequest};

type SettledHook<S> = Box<dyn FnMut(&TransitionRequest<S>)>;

/// A screen to draw this frame with its opacity, listed bottom to top.
pub struct Layer<S: ?Sized> {
    /// Screen to draw.
    pub screen: Rc<S>,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

/// Stack-based screen container.
pub struct Navigator<S: ?Sized + Screen, A: TransitionAnimator<S>> {
    stack: ScreenStack<S>,
    animator: A,
    in_flight: Option<TransitionRequest<S>>,
    on_settled: Option<SettledHook<S>>,
}

impl<S: ?Sized + Screen, A: TransitionAnimator<S>> Navigator<S, A> {
    /// Create an inactive navigator; install a root with
    /// [`set_screens`](Self::set_screens) or a [`RootBinding`](crate::RootBinding).
    pub fn new(animator: A) -> Self {
        Navigator {
            stack: ScreenStack::new(),
            animator,
            in_flight: None,
            on_settled: None,
        }
    }

    /// Register the completion observer, called exactly once per transition
    /// after it has settled.
    pub fn set_on_settled(&mut self, hook: impl FnMut(&TransitionRequest<S>) + 'static) {
        self.on_settled = Some(Box::new(hook));
    }

    /// Replace the whole stack.
    ///
    /// If the top changes, a forward transition runs from the old top (if
    /// any) to the new one.
    ///
    /// # Errors
    ///
    /// `TransitionInProgress`, `InvalidState` (empty list) or
    /// `DuplicateScreen` (same screen listed twice).
    pub fn set_screens(&mut self, screens: Vec<Rc<S>>, animated: bool) -> Result<(), NavigationError> {
        self.ensure_idle("set_screens")?;
        let from = self.stack.top().ok().map(Rc::clone);
        self.stack
            .set(screens)
            .map_err(|err| rejected("set_screens", err))?;
        let to = Rc::clone(self.stack.top()?);
        match from {
            Some(ref old) if same_screen(old, &to) => {
                tracing::debug!(top = to.name(), depth = self.stack.len(), "stack replaced, top unchanged");
            }
            _ => self.start(TransitionRequest::forward(from, to, animated)),
        }
        Ok(())
    }

    /// Push `screen` and fade it in over the current top.
    ///
    /// # Errors
    ///
    /// `TransitionInProgress`, or `DuplicateScreen` if `screen` is already on
    /// the stack (no transition runs).
    pub fn push(&mut self, screen: Rc<S>, animated: bool) -> Result<(), NavigationError> {
        self.ensure_idle("push")?;
        let from = self.stack.top().ok().map(Rc::clone);
        self.stack
            .push(Rc::clone(&screen))
            .map_err(|err| rejected("push", err))?;
        self.start(TransitionRequest::forward(from, screen, animated));
        Ok(())
    }

    /// Pop every screen above `screen` and fade the old top out.
    ///
    /// Returns the removed screens top-to-bottom; the caller decides whether
    /// to keep or drop them. If `screen` is already on top nothing happens and
    /// an empty vector is returned.
    ///
    /// # Errors
    ///
    /// `TransitionInProgress`, or `NotFound` if `screen` is not on the stack.
    pub fn pop_to(&mut self, screen: &Rc<S>, animated: bool) -> Result<Vec<Rc<S>>, NavigationError> {
        self.ensure_idle("pop_to")?;
        let from = self.stack.top().ok().map(Rc::clone);
        let removed = self
            .stack
            .pop_to(screen)
            .map_err(|err| rejected("pop_to", err))?;
        if removed.is_empty() {
            tracing::debug!(target_screen = screen.name(), "pop_to target already on top");
        } else {
            self.start(TransitionRequest::backward(from, Rc::clone(screen), animated));
        }
        Ok(removed)
    }

    /// Pop the top screen (one level back).
    ///
    /// # Errors
    ///
    /// `EmptyStack` before activation, `InvalidState` at the root,
    /// `TransitionInProgress` while a transition runs.
    pub fn pop(&mut self, animated: bool) -> Result<Rc<S>, NavigationError> {
        self.ensure_idle("pop")?;
        self.stack.top().map_err(|err| rejected("pop", err))?;
        let target = match self.stack.below_top() {
            Some(target) => Rc::clone(target),
            None => return Err(rejected("pop", NavigationError::InvalidState)),
        };
        let removed = self.pop_to(&target, animated)?;
        removed
            .into_iter()
            .next()
            .ok_or(NavigationError::InvalidState)
    }

    /// The visible screen.
    ///
    /// # Errors
    ///
    /// `EmptyStack` before activation.
    pub fn current_screen(&self) -> Result<Rc<S>, NavigationError> {
        self.stack.top().map(Rc::clone)
    }

    /// Advance a running transition. Returns `true` on the turn it settles.
    pub fn tick(&mut self) -> bool {
        if self.in_flight.is_none() {
            return false;
        }
        match self.animator.poll() {
            Progress::Running(_) => false,
            Progress::Settled => {
                if let Some(request) = self.in_flight.take() {
                    self.settle(&request);
                }
                true
            }
        }
    }

    /// Screens to draw this frame, bottom to top.
    ///
    /// Idle: just the top at full opacity. During a forward fade the
    /// destination is above the source; during a backward fade the source is
    /// above the destination.
    pub fn layers(&self) -> Vec<Layer<S>> {
        let (Some(request), Some(frame)) = (self.in_flight.as_ref(), self.animator.frame()) else {
            return self
                .stack
                .top()
                .map(|top| {
                    vec![Layer {
                        screen: Rc::clone(top),
                        alpha: 1.0,
                    }]
                })
                .unwrap_or_default();
        };

        let incoming = Layer {
            screen: Rc::clone(&request.to),
            alpha: frame.to_alpha,
        };
        let Some(from) = request.from.as_ref() else {
            return vec![incoming];
        };
        let outgoing = Layer {
            screen: Rc::clone(from),
            alpha: frame.from_alpha,
        };
        if frame.incoming_on_top() {
            vec![outgoing, incoming]
        } else {
            vec![incoming, outgoing]
        }
    }

    /// `true` while an animated transition has not settled.
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The transition currently in flight, if any.
    pub fn in_flight(&self) -> Option<&TransitionRequest<S>> {
        self.in_flight.as_ref()
    }

    /// `true` once a root has been installed.
    pub fn is_active(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Number of screens on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Screens from root to top.
    pub fn screens(&self) -> &[Rc<S>] {
        self.stack.as_slice()
    }

    /// `true` if `screen` is anywhere on the stack.
    pub fn contains(&self, screen: &Rc<S>) -> bool {
        self.stack.contains(screen)
    }

    /// The animator driving transitions.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    fn ensure_idle(&self, op: &'static str) -> Result<(), NavigationError> {
        if self.in_flight.is_some() {
            return Err(rejected(op, NavigationError::TransitionInProgress));
        }
        Ok(())
    }

    fn start(&mut self, request: TransitionRequest<S>) {
        tracing::debug!(
            direction = request.direction.name(),
            from = request.from.as_ref().map(|s| s.name()),
            to = request.to.name(),
            animated = request.animated,
            depth = self.stack.len(),
            "transition started"
        );
        match self.animator.begin(&request) {
            Progress::Settled => self.settle(&request),
            Progress::Running(_) => self.in_flight = Some(request),
        }
    }

    fn settle(&mut self, request: &TransitionRequest<S>) {
        if let Some(from) = request.from.as_ref() {
            if !same_screen(from, &request.to) {
                from.on_disappear();
            }
        }
        request.to.on_appear();
        tracing::debug!(
            direction = request.direction.name(),
            top = request.to.name(),
            depth = self.stack.len(),
            unwound = request.direction == Direction::Backward,
            "transition settled"
        );
        if let Some(hook) = self.on_settled.as_mut() {
            hook(request);
        }
    }
}

fn rejected(op: &'static str, err: NavigationError) -> NavigationError {
    tracing::warn!(op, error = err.name(), "navigation request rejected");
    err
}

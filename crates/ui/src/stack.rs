//! `ScreenStack` — ordered navigation history, root first, current last.
//!
//! Unlike a bounded embedded stack, capacity is unbounded; the invariants are
//! about identity instead: no screen may appear twice, and once initialized
//! the stack is never empty (the navigator only ever replaces it wholesale
//! with a non-empty list or pops down to a screen that stays on it).

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::error::NavigationError;
use crate::screen::same_screen;

/// Ordered sequence of screens; the last element is the visible one.
pub struct ScreenStack<S: ?Sized> {
    screens: Vec<Rc<S>>,
}

impl<S: ?Sized> ScreenStack<S> {
    /// Create an empty, uninitialized stack.
    #[must_use]
    pub const fn new() -> Self {
        ScreenStack {
            screens: Vec::new(),
        }
    }

    /// Replace the whole stack with `screens` (root first).
    ///
    /// # Errors
    ///
    /// `InvalidState` if `screens` is empty, `DuplicateScreen` if the same
    /// screen appears twice. The stack is left untouched on error.
    pub fn set(&mut self, screens: Vec<Rc<S>>) -> Result<(), NavigationError> {
        if screens.is_empty() {
            return Err(NavigationError::InvalidState);
        }
        let has_duplicate = screens.iter().enumerate().any(|(i, screen)| {
            screens
                .iter()
                .take(i)
                .any(|earlier| same_screen(earlier, screen))
        });
        if has_duplicate {
            return Err(NavigationError::DuplicateScreen);
        }
        self.screens = screens;
        Ok(())
    }

    /// Append `screen` as the new top.
    ///
    /// # Errors
    ///
    /// `DuplicateScreen` if `screen` is already anywhere in the stack.
    pub fn push(&mut self, screen: Rc<S>) -> Result<(), NavigationError> {
        if self.contains(&screen) {
            return Err(NavigationError::DuplicateScreen);
        }
        self.screens.push(screen);
        Ok(())
    }

    /// Remove every screen above `screen` and return them top-to-bottom.
    ///
    /// Returns an empty vector when `screen` is already the top.
    ///
    /// # Errors
    ///
    /// `NotFound` if `screen` is not in the stack.
    pub fn pop_to(&mut self, screen: &Rc<S>) -> Result<Vec<Rc<S>>, NavigationError> {
        let pos = self.position(screen).ok_or(NavigationError::NotFound)?;
        let mut removed = self.screens.split_off(pos.saturating_add(1));
        removed.reverse();
        Ok(removed)
    }

    /// The current (visible) screen.
    ///
    /// # Errors
    ///
    /// `EmptyStack` before the stack has been initialized.
    pub fn top(&self) -> Result<&Rc<S>, NavigationError> {
        self.screens.last().ok_or(NavigationError::EmptyStack)
    }

    /// Screen directly beneath the top, if any.
    pub fn below_top(&self) -> Option<&Rc<S>> {
        self.screens
            .len()
            .checked_sub(2)
            .and_then(|i| self.screens.get(i))
    }

    /// Zero-based position of `screen`, root = 0.
    pub fn position(&self, screen: &Rc<S>) -> Option<usize> {
        self.screens.iter().position(|s| same_screen(s, screen))
    }

    /// `true` if `screen` is anywhere in the stack.
    pub fn contains(&self, screen: &Rc<S>) -> bool {
        self.position(screen).is_some()
    }

    /// Number of screens on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// `true` before initialization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Screens from root to top.
    pub fn as_slice(&self) -> &[Rc<S>] {
        &self.screens
    }

    /// Iterate from root to top.
    pub fn iter(&self) -> core::slice::Iter<'_, Rc<S>> {
        self.screens.iter()
    }
}

impl<S: ?Sized> Default for ScreenStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::ScreenStack;
    use crate::error::NavigationError;
    use crate::screen::same_screen;
    use crate::screen::testing::Probe;
    use alloc::rc::Rc;

    fn names(stack: &ScreenStack<Probe>) -> Vec<&'static str> {
        stack.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_stack_starts_empty() {
        let stack: ScreenStack<Probe> = ScreenStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top().err(), Some(NavigationError::EmptyStack));
    }

    #[test]
    fn test_set_rejects_empty_list() {
        let mut stack: ScreenStack<Probe> = ScreenStack::new();
        assert_eq!(stack.set(Vec::new()), Err(NavigationError::InvalidState));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_set_rejects_duplicate_identity() {
        let a = Probe::new("a");
        let mut stack = ScreenStack::new();
        stack.set(vec![Probe::new("root")]).unwrap();
        let result = stack.set(vec![Rc::clone(&a), Probe::new("b"), a]);
        assert_eq!(result, Err(NavigationError::DuplicateScreen));
        assert_eq!(names(&stack), ["root"]);
    }

    #[test]
    fn test_set_replaces_whole_stack() {
        let mut stack = ScreenStack::new();
        stack.set(vec![Probe::new("a"), Probe::new("b")]).unwrap();
        stack.set(vec![Probe::new("c")]).unwrap();
        assert_eq!(names(&stack), ["c"]);
    }

    #[test]
    fn test_push_appends_top() {
        let mut stack = ScreenStack::new();
        stack.set(vec![Probe::new("menu")]).unwrap();
        let question = Probe::new("question");
        stack.push(Rc::clone(&question)).unwrap();
        assert!(same_screen(stack.top().unwrap(), &question));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_push_duplicate_deep_in_stack_fails() {
        let root = Probe::new("root");
        let mut stack = ScreenStack::new();
        stack.set(vec![Rc::clone(&root)]).unwrap();
        stack.push(Probe::new("next")).unwrap();
        assert_eq!(stack.push(root), Err(NavigationError::DuplicateScreen));
        assert_eq!(names(&stack), ["root", "next"]);
    }

    #[test]
    fn test_pop_to_returns_removed_top_first() {
        let (a, b, c, d) = (
            Probe::new("a"),
            Probe::new("b"),
            Probe::new("c"),
            Probe::new("d"),
        );
        let mut stack = ScreenStack::new();
        stack.set(vec![a, Rc::clone(&b), c, d]).unwrap();

        let removed = stack.pop_to(&b).unwrap();
        let removed_names: Vec<_> = removed.iter().map(|s| s.name).collect();
        assert_eq!(removed_names, ["d", "c"]);
        assert_eq!(names(&stack), ["a", "b"]);
    }

    #[test]
    fn test_pop_to_top_is_noop() {
        let top = Probe::new("top");
        let mut stack = ScreenStack::new();
        stack.set(vec![Probe::new("root"), Rc::clone(&top)]).unwrap();
        assert!(stack.pop_to(&top).unwrap().is_empty());
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_pop_to_missing_screen_fails() {
        let mut stack = ScreenStack::new();
        stack.set(vec![Probe::new("root")]).unwrap();
        let stranger = Probe::new("stranger");
        assert_eq!(stack.pop_to(&stranger).err(), Some(NavigationError::NotFound));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_below_top() {
        let root = Probe::new("root");
        let mut stack = ScreenStack::new();
        stack.set(vec![Rc::clone(&root)]).unwrap();
        assert!(stack.below_top().is_none());
        stack.push(Probe::new("next")).unwrap();
        assert!(same_screen(stack.below_top().unwrap(), &root));
    }
}

//! Screen trait — the externally-owned unit of content the navigator stacks.
//!
//! Screens are shared through `Rc`; two handles name the same screen when
//! they point at the same allocation ([`same_screen`]). The navigator never
//! creates or drops screens, it only decides which ones are on the stack.

use alloc::rc::Rc;

/// A unit of displayable content managed by a [`Navigator`](crate::Navigator).
pub trait Screen {
    /// Short label used in log fields and debug output.
    fn name(&self) -> &str;

    /// Called once a transition that brings this screen on top has settled.
    fn on_appear(&self) {}

    /// Called once a transition that takes this screen off the top has settled.
    fn on_disappear(&self) {}
}

/// Identity comparison: `true` if both handles point at the same screen.
#[must_use]
pub fn same_screen<S: ?Sized>(a: &Rc<S>, b: &Rc<S>) -> bool {
    Rc::ptr_eq(a, b)
}

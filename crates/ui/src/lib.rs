//! Screen container layer — screen stack, cross-fade transitions, declarative bindings.
//!
//! The [`Navigator`] owns an ordered [`ScreenStack`] and drives a
//! [`TransitionAnimator`] whenever the stack changes. [`RootBinding`] and
//! [`PushBinding`] are the entry points used by a flow definition to install
//! the first screen and to move forward or unwind.
//!
//! ```text
//! flow edge fires ─► Binding ─► Navigator ─► ScreenStack (sync)
//!                                   │
//!                                   └─────► TransitionAnimator ─► settled (tick)
//! ```
//!
//! This crate is `no_std` + `alloc` by default; the `std` feature adds
//! [`SystemClock`] and `std::error::Error` for [`NavigationError`].

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod binding;
pub mod clock;
pub mod error;
pub mod navigation;
pub mod screen;
pub mod stack;
pub mod transition;

pub use binding::{Binding, BindingOutcome, NavigationBinding, PushBinding, RootBinding};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use error::NavigationError;
pub use navigation::{Layer, Navigator};
pub use screen::Screen;
pub use stack::ScreenStack;
pub use transition::{
    Direction, FadeAnimator, FadeConfig, FadeCurve, FadeFrame, Progress, TransitionAnimator,
    TransitionRequest,
};

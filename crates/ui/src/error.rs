//! Navigation error taxonomy.
//!
//! Every variant signals a malformed flow graph or a misbehaving caller.
//! None of them is expected in correct operation, so they are returned to the
//! caller instead of being absorbed.

/// Error returned by [`ScreenStack`](crate::ScreenStack) and
/// [`Navigator`](crate::Navigator) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)] // Re-exported at the crate root as ui::NavigationError
pub enum NavigationError {
    /// Empty root stack, a second root install, or a pop at the root.
    InvalidState,
    /// The screen is already somewhere in the stack.
    DuplicateScreen,
    /// The pop-to target is not in the stack.
    NotFound,
    /// The stack has not been initialized.
    EmptyStack,
    /// An animated transition has not settled yet.
    TransitionInProgress,
}

impl NavigationError {
    /// Short machine-friendly name, used as a structured log field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidState => "invalid_state",
            Self::DuplicateScreen => "duplicate_screen",
            Self::NotFound => "not_found",
            Self::EmptyStack => "empty_stack",
            Self::TransitionInProgress => "transition_in_progress",
        }
    }
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidState => write!(f, "Invalid navigation state"),
            Self::DuplicateScreen => write!(f, "Screen is already on the navigation stack"),
            Self::NotFound => write!(f, "Screen is not on the navigation stack"),
            Self::EmptyStack => write!(f, "Navigation stack is empty"),
            Self::TransitionInProgress => write!(f, "A transition is already in progress"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NavigationError {}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::NavigationError;

    #[test]
    fn test_error_display_is_human_readable() {
        let msg = NavigationError::TransitionInProgress.to_string();
        assert_eq!(msg, "A transition is already in progress");
    }

    #[test]
    fn test_error_names_are_distinct() {
        let all = [
            NavigationError::InvalidState,
            NavigationError::DuplicateScreen,
            NavigationError::NotFound,
            NavigationError::EmptyStack,
            NavigationError::TransitionInProgress,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}

//! Cooperative cancellation for in-flight operations.
//!
//! A screen hands a [`CancelToken`] to each usecase invocation and
//! cancels it on teardown. The invocation checks the token immediately
//! before applying its result to a relay; a cancelled token suppresses
//! both the success and the failure application. Side effects that
//! already ran are not rolled back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag shared between a screen and its in-flight
/// operations.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token cancelled. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// True once `cancel` has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_uncancelled() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn test_cancel_is_visible_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();

        token.cancel();
        assert!(clone.is_cancelled());

        // Idempotent.
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_fresh_tokens_are_independent() {
        let first = CancelToken::new();
        let second = CancelToken::new();
        first.cancel();
        assert!(!second.is_cancelled());
    }
}

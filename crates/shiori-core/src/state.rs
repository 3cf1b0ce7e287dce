//! Per-operation loading state.
//!
//! Every remote operation a screen runs moves through the same four
//! states: `Standby` before anything happens, `Loading` while the call is
//! in flight, then `Done` with the value or `Failed` with the error.
//! Frontends bind indicators and error presentation to these states.
//!
//! Transitions are unconditional. A holder may apply any state at any
//! time and the latest write wins; discipline comes from the usecases,
//! which emit exactly one terminal state per invocation.

/// Lifecycle of one asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState<T, E> {
    /// No request has been made, or the holder was reset.
    #[default]
    Standby,
    /// A request is in flight.
    Loading,
    /// The request succeeded.
    Done(T),
    /// The request failed.
    Failed(E),
}

impl<T, E> LoadingState<T, E> {
    /// True before any request was made.
    #[must_use]
    pub fn is_standby(&self) -> bool {
        matches!(self, Self::Standby)
    }

    /// True while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once the operation succeeded.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// True once the operation failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// True once the operation reached `Done` or `Failed`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Failed(_))
    }

    /// The success value, when `Done`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Done(value) => Some(value),
            _ => None,
        }
    }

    /// The error value, when `Failed`.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Consume into the success value, when `Done`.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            _ => None,
        }
    }

    /// Consume into the error value, when `Failed`.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Borrowing projection of both payloads.
    pub fn as_ref(&self) -> LoadingState<&T, &E> {
        match self {
            Self::Standby => LoadingState::Standby,
            Self::Loading => LoadingState::Loading,
            Self::Done(value) => LoadingState::Done(value),
            Self::Failed(error) => LoadingState::Failed(error),
        }
    }

    /// Map the success payload, leaving other states untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadingState<U, E> {
        match self {
            Self::Standby => LoadingState::Standby,
            Self::Loading => LoadingState::Loading,
            Self::Done(value) => LoadingState::Done(f(value)),
            Self::Failed(error) => LoadingState::Failed(error),
        }
    }

    /// Map the error payload, leaving other states untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> LoadingState<T, F> {
        match self {
            Self::Standby => LoadingState::Standby,
            Self::Loading => LoadingState::Loading,
            Self::Done(value) => LoadingState::Done(value),
            Self::Failed(error) => LoadingState::Failed(f(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = LoadingState<u32, String>;

    #[test]
    fn test_default_is_standby() {
        assert!(State::default().is_standby());
    }

    #[test]
    fn test_exactly_one_predicate_holds() {
        let states = [
            State::Standby,
            State::Loading,
            State::Done(1),
            State::Failed("boom".to_string()),
        ];
        for state in &states {
            let hits = [
                state.is_standby(),
                state.is_loading(),
                state.is_done(),
                state.is_failed(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(hits, 1, "state {state:?} must match exactly one predicate");
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!State::Standby.is_terminal());
        assert!(!State::Loading.is_terminal());
        assert!(State::Done(1).is_terminal());
        assert!(State::Failed("x".to_string()).is_terminal());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(State::Done(7).value(), Some(&7));
        assert_eq!(State::Done(7).error(), None);
        assert_eq!(State::Failed("x".to_string()).error().map(String::as_str), Some("x"));
        assert_eq!(State::Loading.value(), None);
        assert_eq!(State::Done(7).into_value(), Some(7));
        assert_eq!(State::Failed("x".to_string()).into_error().as_deref(), Some("x"));
    }

    #[test]
    fn test_map_touches_only_done() {
        assert_eq!(State::Done(2).map(|v| v * 10), LoadingState::Done(20));
        assert_eq!(
            State::Loading.map(|v| v * 10),
            LoadingState::<u32, String>::Loading
        );
        assert_eq!(
            State::Failed("e".to_string()).map_err(|e| e.len()),
            LoadingState::<u32, usize>::Failed(1)
        );
    }
}

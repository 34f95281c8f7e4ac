//! Lifecycle of a single asynchronous attempt.

/// The observable state of one asynchronous attempt to produce a value.
///
/// Producers emit at most one `Loading` followed by exactly one terminal
/// `Success` or `Error`; an `Outcome` never transports more than one
/// attempt. Consumers are expected to `match` exhaustively so that new
/// variants cannot be silently ignored.
///
/// Error messages are already user-presentable; the raw failure that
/// produced them stays on the producer's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The attempt is still in flight.
    Loading,
    /// The attempt finished and produced a value.
    Success(T),
    /// The attempt failed with a presentable message.
    Error(String),
}

impl<T> Outcome<T> {
    /// Returns `true` while the attempt is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading)
    }

    /// Returns the produced value, if the attempt succeeded.
    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if the attempt failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Maps the success value, leaving `Loading` and `Error` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Loading => Outcome::Loading,
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Error(message) => Outcome::Error(message),
        }
    }
}

//! Provides the `state` value sent with the authorization request.
use rand::{Rng, distr::Alphanumeric};

/// Length of the `state` value used by `CodeRequest::generate`.
pub const DEFAULT_STATE_LEN: usize = 16;

/// A random alphanumeric value echoed back by Google on the callback.
///
/// It marks a single authorization request. Nothing in this crate checks it on the way back.
/// # Example
/// ```rust,no_run
/// use google_web_login::state::State;
///
/// let state = State::new(16);
/// assert_eq!(state.value().len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct State(pub(crate) String);

impl State {
    /// Generates `length` characters drawn from `[A-Za-z0-9]`.
    /// The thread-local generator is seeded from the OS, so this never fails.
    pub fn new(length: usize) -> Self {
        let value = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();
        Self(value)
    }

    /// Returns the state as a string reference.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_LEN)
    }
}

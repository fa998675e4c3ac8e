//! Whether a search state is discovered for the first time or was reached before.

/// The outcome of offering a state to a visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seen<T> {
    /// The state was unknown and has been recorded now
    New(T),
    /// The state had already been recorded; the earlier record wins
    Old(T),
}

impl<T> Seen<T> {
    /// Returns `Some(T)` if the state is new, `None` if it's old.
    #[allow(clippy::new_ret_no_self, clippy::wrong_self_convention)]
    pub fn new(self) -> Option<T> {
        match self {
            Seen::New(x) => Some(x),
            Seen::Old(_) => None,
        }
    }
}

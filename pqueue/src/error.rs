use std::error::Error;
use std::fmt;

/// Returned by `pop`/`peek` on a queue with no elements. Precondition
/// violation; not recoverable inside the queue itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl fmt::Display for EmptyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty container")
    }
}

impl Error for EmptyContainer {}

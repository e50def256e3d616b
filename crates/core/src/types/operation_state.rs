use serde::Serialize;
use std::fmt;

/// Lifecycle of an operation as reported by the timelock. A cancelled
/// operation reads as `Unset` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationState {
    Unset,
    Waiting,
    Ready,
    Done,
}

impl OperationState {
    pub fn from_flags(pending: bool, ready: bool, done: bool) -> Self {
        if done {
            OperationState::Done
        } else if ready {
            OperationState::Ready
        } else if pending {
            OperationState::Waiting
        } else {
            OperationState::Unset
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationState::Unset => "unset",
            OperationState::Waiting => "waiting",
            OperationState::Ready => "ready",
            OperationState::Done => "done",
        };
        f.write_str(name)
    }
}

use serde::{Deserialize, Serialize};

/// Whether a privileged call runs now or is scheduled behind the timelock.
/// `delay_seconds` only matters when `schedule` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchDecision {
    pub schedule: bool,
    pub delay_seconds: u64,
}

impl DispatchDecision {
    pub fn immediate() -> Self {
        Self {
            schedule: false,
            delay_seconds: 0,
        }
    }

    pub fn scheduled(delay_seconds: u64) -> Self {
        Self {
            schedule: true,
            delay_seconds,
        }
    }
}

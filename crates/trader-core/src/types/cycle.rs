//! Trading cycle state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the trading cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CycleState {
    #[default]
    Idle,
    Running,
}

impl CycleState {
    pub fn is_running(&self) -> bool {
        matches!(self, CycleState::Running)
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleState::Idle => write!(f, "idle"),
            CycleState::Running => write!(f, "running"),
        }
    }
}

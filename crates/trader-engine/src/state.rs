//! State published to observers of the trading cycle.

use serde::Serialize;
use trader_core::types::{CycleState, Decision, IndicatorSnapshot};

/// Status messages shown to the user.
pub mod status {
    use trader_core::error::TransportError;

    pub const READY: &str = "Press start to begin trading.";
    pub const STARTED: &str = "Live trading started...";
    pub const STOPPED: &str = "Trading stopped.";

    /// Message published when the decision service fails.
    pub fn transport_failure(err: &TransportError) -> String {
        format!("Decision service error ({}). Check the backend server.", err)
    }
}

/// Everything an observer needs to render the monitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorState {
    /// Display ticker, upper-cased
    pub ticker: String,
    /// Last applied decision
    pub decision: Decision,
    /// Confidence reported with the decision
    pub confidence: Option<f64>,
    /// Indicators the last applied decision was made on
    pub snapshot: Option<IndicatorSnapshot>,
    pub cycle: CycleState,
    pub status: String,
    /// Incremented on every start
    pub generation: u64,
    /// Tick number of the last applied decision within the generation
    pub tick: u64,
}

impl MonitorState {
    pub fn initial(ticker: &str) -> Self {
        Self {
            ticker: ticker.trim().to_uppercase(),
            decision: Decision::Hold,
            confidence: None,
            snapshot: None,
            cycle: CycleState::Idle,
            status: status::READY.to_string(),
            generation: 0,
            tick: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.cycle.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trader_core::error::TransportError;

    #[test]
    fn test_initial_state() {
        let state = MonitorState::initial(" aapl ");
        assert_eq!(state.ticker, "AAPL");
        assert_eq!(state.decision, Decision::Hold);
        assert_eq!(state.cycle, CycleState::Idle);
        assert_eq!(state.status, status::READY);
        assert!(!state.is_running());
    }

    #[test]
    fn test_transport_failure_message() {
        let msg = status::transport_failure(&TransportError::Status {
            status: 500,
            body: String::new(),
        });
        assert!(msg.contains("status 500"));
        assert!(msg.contains("Check the backend server"));
    }
}

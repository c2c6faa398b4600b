//! Trading decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading action produced by a decision gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl Decision {
    /// Index into a `[BUY, SELL, HOLD]` probability vector.
    pub fn index(&self) -> usize {
        match self {
            Decision::Buy => 0,
            Decision::Sell => 1,
            Decision::Hold => 2,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Decision::Buy => "BUY",
            Decision::Sell => "SELL",
            Decision::Hold => "HOLD",
        };
        write!(f, "{}", s)
    }
}

/// A decision together with the confidence the strategy reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecisionOutcome {
    pub decision: Decision,
    /// Probability or confidence in 0..1, when the strategy provides one.
    pub confidence: Option<f64>,
}

impl DecisionOutcome {
    pub fn new(decision: Decision) -> Self {
        Self {
            decision,
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

impl From<Decision> for DecisionOutcome {
    fn from(decision: Decision) -> Self {
        Self::new(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_wire_format() {
        assert_eq!(serde_json::to_string(&Decision::Buy).unwrap(), "\"BUY\"");
        let parsed: Decision = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(parsed, Decision::Sell);
        assert!(serde_json::from_str::<Decision>("\"buy\"").is_err());
    }

    #[test]
    fn test_decision_index_order() {
        let order = [Decision::Buy, Decision::Sell, Decision::Hold];
        for (i, d) in order.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
        assert_eq!(Decision::default(), Decision::Hold);
    }
}

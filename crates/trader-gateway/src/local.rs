//! Local scoring-model gateway.

use async_trait::async_trait;
use trader_core::error::TransportError;
use trader_core::traits::DecisionGateway;
use trader_core::types::{Decision, DecisionOutcome, IndicatorSnapshot};

/// Probability a class must exceed before it is acted on.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Model scoring the `[ma, rsi]` feature pair.
pub trait ScoringModel: Send + Sync {
    /// Probabilities in `[BUY, SELL, HOLD]` order.
    fn predict(&self, features: [f64; 2]) -> [f64; 3];
}

/// Apply the high-confidence policy to a probability vector.
///
/// BUY wins if its probability is strictly above `threshold`, then SELL;
/// everything else, ties included, resolves to HOLD.
pub fn decide_from_scores(scores: &[f64; 3], threshold: f64) -> Decision {
    if scores[Decision::Buy.index()] > threshold {
        Decision::Buy
    } else if scores[Decision::Sell.index()] > threshold {
        Decision::Sell
    } else {
        Decision::Hold
    }
}

/// Gateway that evaluates a model in-process. Never fails.
#[derive(Debug, Clone)]
pub struct LocalGateway<M> {
    model: Option<M>,
    threshold: f64,
}

impl<M: ScoringModel> LocalGateway<M> {
    pub fn new(model: M) -> Self {
        Self {
            model: Some(model),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Gateway with no model; every decision is HOLD.
    pub fn unloaded() -> Self {
        Self {
            model: None,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "Threshold must be between 0 and 1"
        );
        self.threshold = threshold;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score the snapshot and pick an action.
    pub fn evaluate(&self, snapshot: &IndicatorSnapshot) -> DecisionOutcome {
        let Some(model) = &self.model else {
            return DecisionOutcome::new(Decision::Hold);
        };

        let scores = model.predict(snapshot.features());
        let decision = decide_from_scores(&scores, self.threshold);
        DecisionOutcome::new(decision).with_confidence(scores[decision.index()])
    }
}

#[async_trait]
impl<M: ScoringModel + 'static> DecisionGateway for LocalGateway<M> {
    async fn decide(&self, snapshot: &IndicatorSnapshot) -> Result<DecisionOutcome, TransportError> {
        Ok(self.evaluate(snapshot))
    }

    fn name(&self) -> &str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScores([f64; 3]);

    impl ScoringModel for FixedScores {
        fn predict(&self, _features: [f64; 2]) -> [f64; 3] {
            self.0
        }
    }

    fn snapshot() -> IndicatorSnapshot {
        IndicatorSnapshot::new(150.0, Some(149.0), Some(55.0))
    }

    #[test]
    fn test_policy_thresholds() {
        assert_eq!(decide_from_scores(&[0.8, 0.1, 0.1], 0.7), Decision::Buy);
        assert_eq!(decide_from_scores(&[0.1, 0.8, 0.1], 0.7), Decision::Sell);
        assert_eq!(decide_from_scores(&[0.5, 0.5, 0.0], 0.7), Decision::Hold);
        assert_eq!(decide_from_scores(&[0.1, 0.1, 0.8], 0.7), Decision::Hold);
        // Exactly at the threshold is not enough.
        assert_eq!(decide_from_scores(&[0.7, 0.3, 0.0], 0.7), Decision::Hold);
    }

    #[tokio::test]
    async fn test_local_buy() {
        let gateway = LocalGateway::new(FixedScores([0.8, 0.1, 0.1]));
        let outcome = gateway.decide(&snapshot()).await.unwrap();

        assert_eq!(outcome.decision, Decision::Buy);
        assert_eq!(outcome.confidence, Some(0.8));
    }

    #[tokio::test]
    async fn test_local_low_confidence_holds() {
        let gateway = LocalGateway::new(FixedScores([0.5, 0.5, 0.0]));
        let outcome = gateway.decide(&snapshot()).await.unwrap();

        assert_eq!(outcome.decision, Decision::Hold);
        assert_eq!(outcome.confidence, Some(0.0));
    }

    #[tokio::test]
    async fn test_unloaded_model_holds() {
        let gateway: LocalGateway<FixedScores> = LocalGateway::unloaded();
        assert!(!gateway.is_loaded());

        let outcome = gateway.decide(&snapshot()).await.unwrap();
        assert_eq!(outcome, DecisionOutcome::new(Decision::Hold));
    }

    #[test]
    fn test_custom_threshold() {
        let gateway = LocalGateway::new(FixedScores([0.6, 0.2, 0.2])).with_threshold(0.5);
        assert_eq!(gateway.evaluate(&snapshot()).decision, Decision::Buy);
    }
}

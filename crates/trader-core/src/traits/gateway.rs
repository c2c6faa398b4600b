//! Decision gateway trait definition.

use crate::error::TransportError;
use crate::types::{DecisionOutcome, IndicatorSnapshot};
use async_trait::async_trait;

/// Capability that turns indicator values into a trading action.
///
/// Implementations may call a remote service or evaluate a local model;
/// the trading cycle only ever sees this trait.
#[async_trait]
pub trait DecisionGateway: Send + Sync {
    /// Ask for a decision given the current price, moving average and RSI.
    ///
    /// # Arguments
    /// * `snapshot` - Indicator values computed on this tick
    ///
    /// # Returns
    /// The decision, or a transport error when the backing service failed
    async fn decide(&self, snapshot: &IndicatorSnapshot) -> Result<DecisionOutcome, TransportError>;

    /// Get the gateway name.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Decision;

    struct ThresholdGateway;

    #[async_trait]
    impl DecisionGateway for ThresholdGateway {
        async fn decide(
            &self,
            snapshot: &IndicatorSnapshot,
        ) -> Result<DecisionOutcome, TransportError> {
            match snapshot.rsi {
                Some(rsi) if rsi < 30.0 => Ok(Decision::Buy.into()),
                Some(rsi) if rsi > 70.0 => Ok(Decision::Sell.into()),
                Some(_) => Ok(Decision::Hold.into()),
                None => Err(TransportError::InvalidResponse("no rsi".into())),
            }
        }

        fn name(&self) -> &str {
            "threshold"
        }
    }

    #[tokio::test]
    async fn test_gateway_as_trait_object() {
        let gateway: Box<dyn DecisionGateway> = Box::new(ThresholdGateway);

        let buy = gateway
            .decide(&IndicatorSnapshot::new(100.0, Some(101.0), Some(20.0)))
            .await
            .unwrap();
        assert_eq!(buy.decision, Decision::Buy);

        let err = gateway
            .decide(&IndicatorSnapshot::new(100.0, None, None))
            .await;
        assert!(err.is_err());
        assert_eq!(gateway.name(), "threshold");
    }
}

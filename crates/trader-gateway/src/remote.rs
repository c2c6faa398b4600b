//! Remote decision service gateway.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use trader_core::error::TransportError;
use trader_core::traits::DecisionGateway;
use trader_core::types::{Decision, DecisionOutcome, IndicatorSnapshot};
use tracing::debug;

use crate::http::HttpClient;

const TRADE_DECISION_PATH: &str = "trade-decision";

/// Body of `POST /api/trade-decision`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeDecisionRequest {
    pub close_price: f64,
    pub moving_average: f64,
    pub rsi_value: f64,
}

impl From<&IndicatorSnapshot> for TradeDecisionRequest {
    fn from(snapshot: &IndicatorSnapshot) -> Self {
        Self {
            close_price: snapshot.price,
            moving_average: snapshot.wire_moving_average(),
            rsi_value: snapshot.wire_rsi(),
        }
    }
}

/// Successful response of the decision service. Extra fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeDecisionResponse {
    pub action: Decision,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl From<TradeDecisionResponse> for DecisionOutcome {
    fn from(resp: TradeDecisionResponse) -> Self {
        DecisionOutcome {
            decision: resp.action,
            confidence: resp.confidence,
        }
    }
}

/// Gateway that asks the decision service over HTTP.
///
/// No retries: any failure is reported to the caller as-is.
#[derive(Debug, Clone)]
pub struct RemoteGateway {
    http: HttpClient,
}

impl RemoteGateway {
    /// Create a gateway for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl DecisionGateway for RemoteGateway {
    async fn decide(&self, snapshot: &IndicatorSnapshot) -> Result<DecisionOutcome, TransportError> {
        let request = TradeDecisionRequest::from(snapshot);
        let response: TradeDecisionResponse =
            self.http.post_json(TRADE_DECISION_PATH, &request).await?;

        debug!(
            price = request.close_price,
            action = %response.action,
            "decision service answered"
        );
        Ok(response.into())
    }

    fn name(&self) -> &str {
        "remote"
    }
}

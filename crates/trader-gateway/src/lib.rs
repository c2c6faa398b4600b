//! Decision gateways.
//!
//! Two interchangeable strategies implement [`DecisionGateway`]:
//! - [`RemoteGateway`] posts the indicators to a decision service
//! - [`LocalGateway`] evaluates a [`ScoringModel`] in-process
//!
//! The crate also ships the HTTP client for the backtest service.
//!
//! [`DecisionGateway`]: trader_core::traits::DecisionGateway

mod backtest;
mod http;
mod local;
mod model;
mod remote;

#[cfg(test)]
mod test_support;

pub use backtest::HttpBacktestService;
pub use http::{HttpClient, DEFAULT_TIMEOUT};
pub use local::{decide_from_scores, LocalGateway, ScoringModel, DEFAULT_THRESHOLD};
pub use model::{Activation, DenseLayer, DenseNetwork, DEFAULT_LAYOUT, DEFAULT_WEIGHT_STD};
pub use remote::{RemoteGateway, TradeDecisionRequest, TradeDecisionResponse};

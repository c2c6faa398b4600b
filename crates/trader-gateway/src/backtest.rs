//! HTTP client for the backtest service.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use trader_core::error::TransportError;
use trader_core::traits::BacktestService;
use trader_core::types::BacktestReport;

use crate::http::HttpClient;

const BACKTEST_PATH: &str = "backtest";

#[derive(Debug, Serialize)]
struct BacktestRequest<'a> {
    ticker: &'a str,
}

/// `POST /api/backtest` client.
#[derive(Debug, Clone)]
pub struct HttpBacktestService {
    http: HttpClient,
}

impl HttpBacktestService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Self {
            http: HttpClient::new(base_url, timeout)?,
        })
    }
}

#[async_trait]
impl BacktestService for HttpBacktestService {
    async fn backtest(&self, ticker: &str) -> Result<BacktestReport, TransportError> {
        self.http
            .post_json(BACKTEST_PATH, &BacktestRequest { ticker })
            .await
    }

    fn name(&self) -> &str {
        "http"
    }
}

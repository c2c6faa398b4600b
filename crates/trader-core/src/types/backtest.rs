//! Backtest report and log types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Default number of lines the backtest log keeps.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Result returned by the backtest service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    /// Suggested hedging strategy
    pub recommendation: String,
    /// Confidence in 0..1
    pub confidence: f64,
    /// Free-form explanation
    pub reasoning: String,
}

impl BacktestReport {
    /// Confidence rendered as a whole percentage.
    pub fn confidence_percent(&self) -> f64 {
        (self.confidence * 100.0).round()
    }

    /// Human-readable multi-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Recommendation: {}\nConfidence: {:.0}%\nReasoning: {}",
            self.recommendation,
            self.confidence_percent(),
            self.reasoning
        )
    }
}

/// One timestamped log line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Append-only log with a fixed number of retained lines.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl BacktestLog {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a message stamped with the current local time.
    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(Local::now(), message);
    }

    /// Append a message with an explicit timestamp.
    pub fn push_at(&mut self, at: DateTime<Local>, message: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            at,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for BacktestLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_wire_format() {
        let json = r#"{"recommendation":"partial_hedge","confidence":0.82,"reasoning":"trend volume fell"}"#;
        let report: BacktestReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.recommendation, "partial_hedge");
        assert_eq!(report.confidence_percent(), 82.0);
        assert!(report.summary().contains("Confidence: 82%"));
    }

    #[test]
    fn test_log_entry_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        let mut log = BacktestLog::default();
        log.push_at(at, "requesting backtest");

        assert_eq!(log.lines(), vec!["[09:05:07] requesting backtest".to_string()]);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = BacktestLog::new(3);
        for i in 0..5 {
            log.push(format!("line {}", i));
        }

        assert_eq!(log.len(), 3);
        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
        assert_eq!(log.last().unwrap().message, "line 4");
    }
}

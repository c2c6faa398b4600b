//! Plain console rendering of the published monitor state.

use std::fmt::Write as _;
use std::io::{self, Write};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use trader_engine::{BacktestState, MonitorState};

fn fmt_value(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "--".to_string(),
    }
}

/// One status line for the current monitor state.
pub fn render_line(state: &MonitorState) -> String {
    let mut line = format!("[{}] {:<7}", state.ticker, state.cycle.to_string().to_uppercase());

    if let Some(snapshot) = &state.snapshot {
        let _ = write!(
            line,
            " #{:<4} price {:>8.2} | MA {:>8} | RSI {:>6}",
            state.tick,
            snapshot.price,
            fmt_value(snapshot.moving_average, 2),
            fmt_value(snapshot.rsi, 1),
        );
    }

    let _ = write!(line, " | {}", state.decision);
    if let Some(confidence) = state.confidence {
        let _ = write!(line, " ({:.0}%)", confidence * 100.0);
    }
    let _ = write!(line, " | {}", state.status);
    line
}

/// Backtest log lines followed by the report, if any.
pub fn render_backtest(state: &BacktestState) -> Vec<String> {
    let mut lines = state.log.lines();
    if let Some(report) = &state.report {
        lines.extend(report.summary().lines().map(str::to_string));
    }
    lines
}

/// Print a line for every state change until the controller goes away.
pub async fn follow<W: Write>(rx: watch::Receiver<MonitorState>, mut out: W) -> io::Result<()> {
    let mut stream = WatchStream::new(rx);
    while let Some(state) = stream.next().await {
        writeln!(out, "{}", render_line(&state))?;
        out.flush()?;
    }
    Ok(())
}

//! Console monitoring and logging setup.

mod console;
mod logging;

pub use console::{follow, render_backtest, render_line};
pub use logging::setup_logging;

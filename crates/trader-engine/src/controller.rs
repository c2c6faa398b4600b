//! Trading cycle controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use trader_core::error::{TraderError, TraderResult, TransportError};
use trader_core::traits::{DecisionGateway, PriceSource};
use trader_core::types::{CycleState, Decision, DecisionOutcome, IndicatorSnapshot, PriceWindow};
use trader_indicators::{IndicatorEngine, IndicatorPeriods};
use tracing::{debug, info, warn};

use crate::state::{status, MonitorState};

/// Tick period when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Ticker shown before the user picks one.
pub const DEFAULT_TICKER: &str = "AAPL";

/// Trading cycle configuration.
#[derive(Debug, Clone)]
pub struct CycleConfig {
    pub ticker: String,
    pub interval: Duration,
    pub periods: IndicatorPeriods,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            ticker: DEFAULT_TICKER.to_string(),
            interval: DEFAULT_INTERVAL,
            periods: IndicatorPeriods::default(),
        }
    }
}

/// Owns the periodic tick and its start/stop lifecycle.
///
/// Every `start` mints a new generation; decisions that come back for an
/// older generation, or for a tick older than one already applied, are
/// dropped. The timer is released on `stop`, on a gateway failure, and
/// when the controller is dropped.
pub struct CycleController {
    shared: Arc<Shared>,
    gateway: Arc<dyn DecisionGateway>,
    engine: IndicatorEngine,
    interval: Duration,
}

impl CycleController {
    /// Create an idle controller.
    pub fn new(
        gateway: Arc<dyn DecisionGateway>,
        source: Box<dyn PriceSource>,
        config: CycleConfig,
    ) -> Self {
        assert!(!config.interval.is_zero(), "Interval must be greater than 0");
        let (updates, _) = watch::channel(MonitorState::initial(&config.ticker));

        let inner = CycleInner {
            state: CycleState::Idle,
            generation: 0,
            window: PriceWindow::new(),
            source,
            timer: None,
            issued: 0,
            applied: 0,
        };

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                updates,
            }),
            gateway,
            engine: IndicatorEngine::new(config.periods),
            interval: config.interval,
        }
    }

    /// Receive every published state change.
    pub fn subscribe(&self) -> watch::Receiver<MonitorState> {
        self.shared.updates.subscribe()
    }

    /// Latest published state.
    pub fn current(&self) -> MonitorState {
        self.shared.updates.borrow().clone()
    }

    pub fn state(&self) -> CycleState {
        self.shared.lock().state
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running()
    }

    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }

    /// Number of prices currently in the window.
    pub fn window_len(&self) -> usize {
        self.shared.lock().window.len()
    }

    /// Change the displayed ticker.
    pub fn set_ticker(&self, ticker: &str) {
        let ticker = ticker.trim().to_uppercase();
        self.shared.updates.send_modify(|s| s.ticker = ticker);
    }

    /// Start the cycle; if it is already running, stop it instead.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&self) -> TraderResult<CycleState> {
        let handle = Handle::try_current().map_err(|e| TraderError::Runtime(e.to_string()))?;

        let mut inner = self.shared.lock();
        if inner.state.is_running() {
            drop(inner);
            return Ok(self.stop());
        }

        inner.generation += 1;
        inner.issued = 0;
        inner.applied = 0;
        inner.window.clear();
        inner.source.reset();
        inner.state = CycleState::Running;
        let generation = inner.generation;

        let task = handle.spawn(run_timer(
            Arc::clone(&self.shared),
            Arc::clone(&self.gateway),
            self.engine.clone(),
            self.interval,
            generation,
        ));
        inner.timer = Some(task.abort_handle());

        self.shared.updates.send_modify(|s| {
            s.cycle = CycleState::Running;
            s.decision = Decision::Hold;
            s.confidence = None;
            s.snapshot = None;
            s.status = status::STARTED.to_string();
            s.generation = generation;
            s.tick = 0;
        });

        info!(
            generation,
            gateway = self.gateway.name(),
            interval_ms = self.interval.as_millis() as u64,
            "trading cycle started"
        );
        Ok(CycleState::Running)
    }

    /// Stop the cycle. Does nothing when already idle.
    pub fn stop(&self) -> CycleState {
        let mut inner = self.shared.lock();
        if !inner.state.is_running() {
            return CycleState::Idle;
        }
        self.shared.halt(&mut inner, status::STOPPED.to_string());
        info!(generation = inner.generation, "trading cycle stopped");
        CycleState::Idle
    }

    /// Flip between running and idle.
    pub fn toggle(&self) -> TraderResult<CycleState> {
        if self.is_running() {
            Ok(self.stop())
        } else {
            self.start()
        }
    }
}

impl Drop for CycleController {
    fn drop(&mut self) {
        let mut inner = self.shared.lock();
        if inner.state.is_running() {
            self.shared.halt(&mut inner, status::STOPPED.to_string());
            debug!(generation = inner.generation, "controller dropped while running");
        }
    }
}

struct Shared {
    inner: Mutex<CycleInner>,
    updates: watch::Sender<MonitorState>,
}

struct CycleInner {
    state: CycleState,
    generation: u64,
    window: PriceWindow,
    source: Box<dyn PriceSource>,
    timer: Option<AbortHandle>,
    /// Ticks issued in this generation
    issued: u64,
    /// Newest tick whose decision was published
    applied: u64,
}

/// A decision request issued by one tick.
struct PendingDecision {
    generation: u64,
    tick: u64,
    snapshot: IndicatorSnapshot,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, CycleInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Transition to idle, release the timer and publish `message`.
    fn halt(&self, inner: &mut CycleInner, message: String) {
        inner.state = CycleState::Idle;
        release_timer(inner);
        self.updates.send_modify(|s| {
            s.cycle = CycleState::Idle;
            s.status = message;
        });
    }

    /// Synchronous part of a tick: next price, window, indicators.
    fn tick(&self, engine: &IndicatorEngine, generation: u64) -> Option<PendingDecision> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        if inner.generation != generation || !inner.state.is_running() {
            return None;
        }

        let price = inner.source.next_price();
        let view = inner.window.append(price);
        let snapshot = engine.snapshot(price, &view);
        inner.issued += 1;

        debug!(
            generation,
            tick = inner.issued,
            price,
            ma = ?snapshot.moving_average,
            rsi = ?snapshot.rsi,
            "tick"
        );

        Some(PendingDecision {
            generation,
            tick: inner.issued,
            snapshot,
        })
    }

    /// Apply a gateway result if it still belongs to the live cycle.
    fn resolve(&self, pending: PendingDecision, result: Result<DecisionOutcome, TransportError>) {
        let mut inner = self.lock();
        if inner.generation != pending.generation || !inner.state.is_running() {
            debug!(
                generation = pending.generation,
                tick = pending.tick,
                "discarding result from a finished cycle"
            );
            return;
        }

        match result {
            Ok(outcome) => {
                if pending.tick <= inner.applied {
                    debug!(
                        tick = pending.tick,
                        applied = inner.applied,
                        "discarding out-of-order decision"
                    );
                    return;
                }
                inner.applied = pending.tick;
                self.updates.send_modify(|s| {
                    s.decision = outcome.decision;
                    s.confidence = outcome.confidence;
                    s.snapshot = Some(pending.snapshot);
                    s.tick = pending.tick;
                });
                debug!(tick = pending.tick, decision = %outcome.decision, "decision applied");
            }
            Err(err) => {
                warn!(error = %err, tick = pending.tick, "decision request failed, stopping cycle");
                self.halt(&mut inner, status::transport_failure(&err));
            }
        }
    }
}

fn release_timer(inner: &mut CycleInner) {
    if let Some(timer) = inner.timer.take() {
        timer.abort();
    }
}

async fn run_timer(
    shared: Arc<Shared>,
    gateway: Arc<dyn DecisionGateway>,
    engine: IndicatorEngine,
    period: Duration,
    generation: u64,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let Some(pending) = shared.tick(&engine, generation) else {
            break;
        };

        // Requests are not serialized; `resolve` sorts out late arrivals.
        let shared = Arc::clone(&shared);
        let gateway = Arc::clone(&gateway);
        tokio::spawn(async move {
            let result = gateway.decide(&pending.snapshot).await;
            shared.resolve(pending, result);
        });
    }
}

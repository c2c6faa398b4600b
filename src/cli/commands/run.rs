//! Live trading cycle command.

use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;
use tokio::sync::watch;
use trader_config::{AppConfig, GatewaySettings, GatewayStrategy};
use trader_core::traits::DecisionGateway;
use trader_engine::{status, CycleConfig, CycleController, MonitorState, RandomWalk};
use trader_gateway::{DenseNetwork, LocalGateway, RemoteGateway};
use trader_indicators::IndicatorEngine;
use trader_monitor::{follow, render_line};
use tracing::{info, warn};

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, mut config: AppConfig) -> Result<()> {
    if let Some(strategy) = args.strategy {
        config.gateway.strategy = strategy.into();
    }
    if let Some(ticker) = args.ticker {
        config.cycle.ticker = ticker;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.cycle.interval_ms = interval_ms;
    }
    if let Some(seed) = args.seed {
        config.cycle.seed = Some(seed);
    }
    if let Some(base_url) = args.base_url {
        config.gateway.base_url = base_url;
    }
    config.validate().map_err(anyhow::Error::msg)?;

    let gateway = build_gateway(&config.gateway)?;

    let mut walk = RandomWalk::new(config.cycle.initial_price, config.cycle.max_step);
    if let Some(seed) = config.cycle.seed {
        walk = walk.with_seed(seed);
    }

    let controller = CycleController::new(
        gateway,
        Box::new(walk),
        CycleConfig {
            ticker: config.cycle.ticker.clone(),
            interval: config.cycle.interval(),
            periods: config.cycle.periods(),
        },
    );

    info!(
        ticker = %config.cycle.ticker,
        gateway = controller.gateway_name(),
        interval_ms = config.cycle.interval_ms,
        warmup_ticks = IndicatorEngine::new(config.cycle.periods()).warmup(),
        "Starting trading cycle"
    );

    let printer = tokio::spawn(follow(controller.subscribe(), io::stdout()));
    controller.start()?;

    let mut rx = controller.subscribe();
    let finished = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for ctrl-c")?;
            info!("Interrupt received");
            None
        }
        state = wait_until_done(&mut rx, args.ticks) => state,
    };

    controller.stop();
    printer.abort();
    let last = controller.current();
    println!("{}", render_line(&last));

    match finished {
        Some(state) if !state.is_running() && state.status != status::STOPPED => {
            warn!(status = %state.status, "Trading cycle ended with an error");
            anyhow::bail!("{}", state.status)
        }
        _ => Ok(()),
    }
}

/// Resolve once the cycle goes idle or `ticks` decisions have been applied.
async fn wait_until_done(
    rx: &mut watch::Receiver<MonitorState>,
    ticks: Option<u64>,
) -> Option<MonitorState> {
    let done = rx
        .wait_for(|s| !s.is_running() || ticks.is_some_and(|n| s.tick >= n))
        .await
        .ok()?;
    Some(done.clone())
}

/// Build the configured gateway.
///
/// A local model file that fails to load leaves the gateway without a model,
/// so every decision is HOLD.
fn build_gateway(settings: &GatewaySettings) -> Result<Arc<dyn DecisionGateway>> {
    match settings.strategy {
        GatewayStrategy::Remote => {
            let gateway = RemoteGateway::new(settings.base_url.clone(), settings.timeout())
                .context("Failed to create decision service client")?;
            info!(base_url = gateway.base_url(), "Using decision service");
            Ok(Arc::new(gateway))
        }
        GatewayStrategy::Local => {
            let gateway = match &settings.model_path {
                Some(path) => match DenseNetwork::load(path) {
                    Ok(model) => LocalGateway::new(model),
                    Err(e) => {
                        warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to load model, falling back to HOLD"
                        );
                        LocalGateway::unloaded()
                    }
                },
                None => LocalGateway::new(DenseNetwork::with_seed(settings.model_seed)?),
            };
            Ok(Arc::new(gateway.with_threshold(settings.threshold)))
        }
    }
}

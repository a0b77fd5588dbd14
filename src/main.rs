mod config;
mod engine;
mod events;
mod execution;
mod market;
mod quoting;
mod simulation;
mod trading;
mod types;

#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;
use crate::engine::QuotingEngine;
use crate::execution::dry_run::DryRunQuoter;
use crate::market::broker::Broker;
use crate::simulation::simulated_broker::SimulatedBroker;
use crate::types::side::Side;

#[derive(Debug, Clone, Parser)]
struct Args {
    #[arg(long, default_value = "quoting.yml")]
    pub config: PathBuf,

    /// Stop after this many market data ticks.
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Overrides `active_on_start` from the config file.
    #[arg(long)]
    pub active: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("quoting_engine=debug".parse().unwrap()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = EngineConfig::load(&args.config)?;
    let instrument = config.instrument()?;

    info!(%instrument, config = %args.config.display(), "starting dry-run quoting engine");

    let broker = SimulatedBroker::new(instrument.clone(), config.simulation.clone());
    let quoter = DryRunQuoter::new(instrument.clone());
    let mut engine = QuotingEngine::new(broker, quoter);

    engine
        .on_new_trading_decision()
        .subscribe(|decision| debug!(%decision, time = %decision.time, "decision published"));
    engine
        .on_active_changed()
        .subscribe(|active| info!(active = *active, "trader active status changed"));

    engine.update_parameters(config.quoting);
    let parameters = *engine.parameters().latest();
    let decision_observers = engine.on_new_trading_decision().subscriber_count();
    info!(%parameters, decision_observers, "engine wired");

    engine.change_active_status(args.active.unwrap_or(config.active_on_start));

    let mut ticker = tokio::time::interval(Duration::from_millis(config.simulation.tick_interval_ms));
    let reload_every = config.reload_interval_secs.map(Duration::from_secs);
    let mut last_reload = Instant::now();
    let mut ticks: u64 = 0;
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                engine.broker_mut().step();
                engine.on_market_data();
                ticks += 1;

                if let Some(every) = reload_every {
                    if last_reload.elapsed() >= every {
                        last_reload = Instant::now();
                        match EngineConfig::load(&args.config) {
                            Ok(reloaded) => engine.update_parameters(reloaded.quoting),
                            Err(error) => warn!("config reload failed, keeping parameters: {error:?}"),
                        }
                    }
                }

                if args.ticks.is_some_and(|limit| ticks >= limit) {
                    info!(ticks, "tick limit reached");
                    break;
                }
            }

            signal = &mut shutdown => {
                match signal {
                    Ok(()) => info!(ticks, "interrupted"),
                    Err(error) => error!("failed to listen for ctrl-c, stopping: {error:?}"),
                }
                break;
            }
        }
    }

    engine.change_active_status(false);

    let fair_value = engine
        .fair_value_agent()
        .latest_fair_value()
        .map(|fair_value| fair_value.price.to_string());
    let last_quote = engine
        .quote_generator()
        .latest_quote()
        .map(|quote| quote.to_string());
    let last_decision = engine
        .trader()
        .latest_decision()
        .map(|decision| decision.to_string());
    let active = engine.trader().is_active();
    let base_position = engine
        .broker()
        .position(instrument.base())
        .map(|position| position.amount);

    let stats = engine.quoter().stats();
    info!(
        ?fair_value,
        ?last_quote,
        ?last_decision,
        active,
        ?base_position,
        resting_bid = engine.quoter().resting(Side::Bid).is_some(),
        resting_ask = engine.quoter().resting(Side::Ask).is_some(),
        placed = stats.placed,
        modified = stats.modified,
        cancelled = stats.cancelled,
        unsent = stats.unsent,
        "dry run finished"
    );

    Ok(())
}

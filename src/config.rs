use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::warn;

use crate::types::{instrument::Instrument, quoting_parameters::QuotingParameters};

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Traded pair as `BASE/QUOTE`.
    pub instrument: String,

    /// Operator quoting parameters, re-read on every reload.
    #[serde(default)]
    pub quoting: QuotingParameters,

    #[serde(default)]
    pub active_on_start: bool,

    /// Re-read `quoting` from disk at this interval. Disabled when absent.
    #[serde(default)]
    pub reload_interval_secs: Option<u64>,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub initial_mid: f64,

    /// Distance from mid to each best level.
    pub half_spread: f64,

    /// Largest mid move per tick, drawn uniformly in both directions.
    pub volatility: f64,

    pub level_spacing: f64,
    pub depth: usize,
    pub level_size: f64,

    /// Per-tick chance of dropping the session while connected.
    pub disconnect_probability: f64,

    /// Per-tick chance of restoring the session while disconnected.
    pub reconnect_probability: f64,

    pub tick_interval_ms: u64,
    pub base_balance: f64,
    pub quote_balance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            initial_mid: 100.0,
            half_spread: 0.05,
            volatility: 0.02,
            level_spacing: 0.05,
            depth: 5,
            level_size: 1.0,
            disconnect_probability: 0.0,
            reconnect_probability: 0.5,
            tick_interval_ms: 250,
            base_balance: 1.0,
            quote_balance: 10_000.0,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::from_yaml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(raw).context("failed to parse engine config")?;

        config.validate().context("engine config validation failed")?;

        Ok(config)
    }

    pub fn instrument(&self) -> Result<Instrument> {
        self.instrument.parse()
    }

    fn validate(&self) -> Result<()> {
        self.instrument()?;

        if self.quoting.width < 0.0 {
            warn!(width = self.quoting.width, "negative quoting width; quotes will cross");
        }
        if self.reload_interval_secs == Some(0) {
            bail!("reload_interval_secs must be > 0");
        }

        self.simulation
            .validate()
            .context("invalid simulation settings")
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_mid <= 0.0 {
            bail!("initial_mid must be > 0");
        }
        if self.half_spread <= 0.0 {
            bail!("half_spread must be > 0");
        }
        if self.volatility < 0.0 {
            bail!("volatility must be >= 0");
        }
        if self.level_spacing <= 0.0 {
            bail!("level_spacing must be > 0");
        }
        if self.depth == 0 {
            bail!("depth must be >= 1");
        }
        if self.level_size <= 0.0 {
            bail!("level_size must be > 0");
        }
        for (name, probability) in [
            ("disconnect_probability", self.disconnect_probability),
            ("reconnect_probability", self.reconnect_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                bail!("{name} must be within [0, 1]");
            }
        }
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = EngineConfig::from_yaml("instrument: btc/usd\n").unwrap();

        assert_eq!(config.instrument().unwrap().to_string(), "BTC/USD");
        assert_eq!(config.quoting, QuotingParameters::default());
        assert!(!config.active_on_start);
        assert!(config.reload_interval_secs.is_none());
        assert_eq!(config.simulation.depth, 5);
    }

    #[test]
    fn test_full_config() {
        let raw = r#"
instrument: ETH/EUR
quoting:
  width: 0.5
  size: 0.25
active_on_start: true
reload_interval_secs: 10
simulation:
  seed: 42
  initial_mid: 2500.0
  depth: 3
"#;

        let config = EngineConfig::from_yaml(raw).unwrap();

        assert_eq!(config.quoting, QuotingParameters::new(0.5, 0.25));
        assert!(config.active_on_start);
        assert_eq!(config.reload_interval_secs, Some(10));
        assert_eq!(config.simulation.seed, 42);
        assert_eq!(config.simulation.initial_mid, 2500.0);
        assert_eq!(config.simulation.half_spread, 0.05);
    }

    #[test]
    fn test_negative_width_is_allowed() {
        let raw = "instrument: BTC/USD\nquoting:\n  width: -0.1\n  size: 0.01\n";
        assert!(EngineConfig::from_yaml(raw).is_ok());
    }

    #[test]
    fn test_rejects_bad_instrument() {
        let error = EngineConfig::from_yaml("instrument: BTCUSD\n").unwrap_err();
        assert!(format!("{error:#}").contains("invalid instrument symbol"));
    }

    #[test]
    fn test_rejects_bad_simulation_settings() {
        let raw = "instrument: BTC/USD\nsimulation:\n  disconnect_probability: 1.5\n";
        let error = EngineConfig::from_yaml(raw).unwrap_err();
        assert!(format!("{error:#}").contains("disconnect_probability must be within [0, 1]"));

        let raw = "instrument: BTC/USD\nsimulation:\n  depth: 0\n";
        assert!(EngineConfig::from_yaml(raw).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = EngineConfig::load(Path::new("does-not-exist.yml")).unwrap_err();
        assert!(error.to_string().contains("does-not-exist.yml"));
    }
}

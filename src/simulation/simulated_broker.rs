use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::{
    config::SimulationConfig,
    market::broker::{Broker, ConnectivityStatus},
    types::{
        instrument::{Currency, Instrument},
        order_book::{OrderBook, PriceLevel},
        position::CurrencyPosition,
    },
};

/// Random-walk book standing in for a venue feed in dry runs.
#[derive(Debug)]
pub struct SimulatedBroker {
    instrument: Instrument,
    config: SimulationConfig,
    rng: StdRng,
    mid: f64,
    book: Option<OrderBook>,
    status: ConnectivityStatus,
}

impl SimulatedBroker {
    pub fn new(instrument: Instrument, config: SimulationConfig) -> Self {
        Self {
            instrument,
            rng: StdRng::seed_from_u64(config.seed),
            mid: config.initial_mid,
            config,
            book: None,
            status: ConnectivityStatus::Connected,
        }
    }

    /// Advances the walk by one tick and rebuilds the book around the new mid.
    pub fn step(&mut self) {
        self.step_connectivity();

        let drift = self
            .rng
            .random_range(-self.config.volatility..=self.config.volatility);
        let floor = self.config.half_spread
            + self.config.level_spacing * self.config.depth as f64;
        self.mid = (self.mid + drift).max(floor);

        let book = self.build_book();
        debug!(
            instrument = %self.instrument,
            mid = self.mid,
            spread = ?book.spread(),
            "simulated book"
        );
        self.book = Some(book);
    }

    fn step_connectivity(&mut self) {
        let next = match self.status {
            ConnectivityStatus::Connected
                if self.rng.random_bool(self.config.disconnect_probability) =>
            {
                ConnectivityStatus::Disconnected
            }
            ConnectivityStatus::Disconnected
                if self.rng.random_bool(self.config.reconnect_probability) =>
            {
                ConnectivityStatus::Connected
            }
            current => current,
        };

        if next != self.status {
            match next {
                ConnectivityStatus::Disconnected => warn!(status = %next, "venue session dropped"),
                ConnectivityStatus::Connected => info!(status = %next, "venue session restored"),
            }
            self.status = next;
        }
    }

    fn build_book(&self) -> OrderBook {
        let levels = 0..self.config.depth;
        let offset = |level: usize| self.config.half_spread + self.config.level_spacing * level as f64;
        let size = |level: usize| self.config.level_size * (level + 1) as f64;

        let bids = levels
            .clone()
            .map(|level| PriceLevel::new(self.mid - offset(level), size(level)))
            .collect();
        let asks = levels
            .map(|level| PriceLevel::new(self.mid + offset(level), size(level)))
            .collect();

        OrderBook::new(bids, asks, Utc::now())
    }
}

impl Broker for SimulatedBroker {
    fn current_book(&self) -> Option<&OrderBook> {
        self.book.as_ref()
    }

    fn connect_status(&self) -> ConnectivityStatus {
        self.status
    }

    fn position(&self, currency: &Currency) -> Option<CurrencyPosition> {
        let amount = if currency == self.instrument.base() {
            self.config.base_balance
        } else if currency == self.instrument.quote() {
            self.config.quote_balance
        } else {
            return None;
        };

        Some(CurrencyPosition::new(currency.clone(), amount, 0.0))
    }
}

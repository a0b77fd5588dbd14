use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::price::Price;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PriceLevel {
    pub price: Price,
    pub size: f64,
}

impl PriceLevel {
    pub fn new(price: impl Into<Price>, size: f64) -> Self {
        Self {
            price: price.into(),
            size,
        }
    }
}

/// Snapshot of the venue book as handed over by the broker.
///
/// Bids are ordered best (highest) first, asks best (lowest) first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBook {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub time: DateTime<Utc>,
}

impl OrderBook {
    pub fn new(bids: Vec<PriceLevel>, asks: Vec<PriceLevel>, time: DateTime<Utc>) -> Self {
        Self { bids, asks, time }
    }

    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn mid_price(&self) -> Option<Price> {
        let bid = self.best_bid()?.price.as_f64();
        let ask = self.best_ask()?.price.as_f64();
        Some(Price::new((ask + bid) / 2.0))
    }

    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() || self.asks.is_empty()
    }
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => write!(
                f,
                "{}x{} / {}x{} ({} levels)",
                bid.size,
                bid.price,
                ask.price,
                ask.size,
                self.bids.len().min(self.asks.len())
            ),
            _ => write!(f, "<empty book>"),
        }
    }
}

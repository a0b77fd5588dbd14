use std::fmt;

use chrono::{DateTime, Utc};

use crate::types::{price::Price, side::Side};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuoteAction {
    New,
    Cancel,
}

impl fmt::Display for QuoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteAction::New => write!(f, "New"),
            QuoteAction::Cancel => write!(f, "Cancel"),
        }
    }
}

/// One side of a candidate quote. `price` and `size` are only set for `New`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quote {
    pub action: QuoteAction,
    pub side: Side,
    pub time: DateTime<Utc>,
    pub price: Option<Price>,
    pub size: Option<f64>,
}

impl Quote {
    pub fn new(side: Side, time: DateTime<Utc>, price: Price, size: f64) -> Self {
        Self {
            action: QuoteAction::New,
            side,
            time,
            price: Some(price),
            size: Some(size),
        }
    }

    pub fn cancel(side: Side, time: DateTime<Utc>) -> Self {
        Self {
            action: QuoteAction::Cancel,
            side,
            time,
            price: None,
            size: None,
        }
    }

    /// Stop quote for the same side and time; price and size are dropped.
    pub fn to_cancel(&self) -> Self {
        Self::cancel(self.side, self.time)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.side)?;
        if let (Some(price), Some(size)) = (self.price, self.size) {
            write!(f, " {size}@{price}")?;
        }
        write!(f, " t={}", self.time.format("%H:%M:%S%.3f"))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwoSidedQuote {
    pub bid: Quote,
    pub ask: Quote,
}

impl TwoSidedQuote {
    pub fn new(bid: Quote, ask: Quote) -> Self {
        Self { bid, ask }
    }
}

impl fmt::Display for TwoSidedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] | [{}]", self.bid, self.ask)
    }
}

use std::fmt;

use crate::types::{instrument::Currency, order_book::OrderBook, position::CurrencyPosition};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectivityStatus {
    Connected,
    Disconnected,
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => write!(f, "connected"),
            Self::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Venue-side collaborator: owns the book, the session and the balances.
///
/// Its "market data changed" signal is delivered by calling
/// `QuotingEngine::on_market_data` after the book has been updated.
pub trait Broker {
    fn current_book(&self) -> Option<&OrderBook>;
    fn connect_status(&self) -> ConnectivityStatus;
    fn position(&self, currency: &Currency) -> Option<CurrencyPosition>;
}

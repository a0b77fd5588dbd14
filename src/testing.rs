use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};

use crate::execution::Quoter;
use crate::market::broker::{Broker, ConnectivityStatus};
use crate::types::{
    decision::QuoteSent,
    instrument::Currency,
    order_book::{OrderBook, PriceLevel},
    position::CurrencyPosition,
    quote::{Quote, QuoteAction},
};

pub fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub fn book(best_bid: f64, best_ask: f64) -> OrderBook {
    OrderBook::new(
        vec![PriceLevel::new(best_bid, 1.0), PriceLevel::new(best_bid - 0.5, 2.0)],
        vec![PriceLevel::new(best_ask, 1.0), PriceLevel::new(best_ask + 0.5, 2.0)],
        fixed_time(),
    )
}

#[derive(Debug)]
pub struct StubBroker {
    pub book: Option<OrderBook>,
    pub status: ConnectivityStatus,
    pub positions: HashMap<Currency, CurrencyPosition>,
}

impl StubBroker {
    pub fn without_book() -> Self {
        Self {
            book: None,
            status: ConnectivityStatus::Connected,
            positions: HashMap::new(),
        }
    }

    pub fn with_book(book: OrderBook) -> Self {
        Self {
            book: Some(book),
            ..Self::without_book()
        }
    }
}

impl Broker for StubBroker {
    fn current_book(&self) -> Option<&OrderBook> {
        self.book.as_ref()
    }

    fn connect_status(&self) -> ConnectivityStatus {
        self.status
    }

    fn position(&self, currency: &Currency) -> Option<CurrencyPosition> {
        self.positions.get(currency).cloned()
    }
}

/// Records every quote it receives. Replies from `scripted` first, then
/// `First` for new quotes and `Delete` for cancels.
#[derive(Debug, Default)]
pub struct RecordingQuoter {
    pub received: Vec<Quote>,
    pub scripted: VecDeque<QuoteSent>,
}

impl RecordingQuoter {
    pub fn scripted(replies: impl IntoIterator<Item = QuoteSent>) -> Self {
        Self {
            received: Vec::new(),
            scripted: replies.into_iter().collect(),
        }
    }
}

impl Quoter for RecordingQuoter {
    fn update_quote(&mut self, quote: Quote) -> QuoteSent {
        self.received.push(quote);
        if let Some(reply) = self.scripted.pop_front() {
            return reply;
        }
        match quote.action {
            QuoteAction::New => QuoteSent::First,
            QuoteAction::Cancel => QuoteSent::Delete,
        }
    }
}

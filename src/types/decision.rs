use std::fmt;

use chrono::{DateTime, Utc};

/// Outcome reported by the execution collaborator for a single quote update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuoteSent {
    First,
    Modify,
    UnsentDuplicate,
    Delete,
    UnsentDelete,
    UnableToSend,
}

impl fmt::Display for QuoteSent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuoteSent::First => "First",
            QuoteSent::Modify => "Modify",
            QuoteSent::UnsentDuplicate => "UnsentDuplicate",
            QuoteSent::Delete => "Delete",
            QuoteSent::UnsentDelete => "UnsentDelete",
            QuoteSent::UnableToSend => "UnableToSend",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TradingDecision {
    pub bid_action: QuoteSent,
    pub ask_action: QuoteSent,
    pub time: DateTime<Utc>,
}

impl TradingDecision {
    pub fn new(bid_action: QuoteSent, ask_action: QuoteSent, time: DateTime<Utc>) -> Self {
        Self {
            bid_action,
            ask_action,
            time,
        }
    }
}

impl fmt::Display for TradingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BidAction: {}, AskAction: {}",
            self.bid_action, self.ask_action
        )
    }
}

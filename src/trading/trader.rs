use chrono::Utc;
use tracing::info;

use crate::events::Event;
use crate::execution::Quoter;
use crate::market::broker::{Broker, ConnectivityStatus};
use crate::types::{
    decision::TradingDecision,
    instrument::Currency,
    quote::{Quote, TwoSidedQuote},
};

/// Turns candidate quotes into submit-or-cancel decisions.
///
/// Starts inactive. While inactive, or while the broker is not connected,
/// every candidate is converted into cancels for both sides.
#[derive(Debug, Default)]
pub struct Trader {
    active: bool,
    latest_decision: Option<TradingDecision>,
    active_changed: Event<bool>,
    new_trading_decision: Event<TradingDecision>,
}

impl Trader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn latest_decision(&self) -> Option<&TradingDecision> {
        self.latest_decision.as_ref()
    }

    pub fn active_changed(&mut self) -> &mut Event<bool> {
        &mut self.active_changed
    }

    pub fn new_trading_decision(&mut self) -> &mut Event<TradingDecision> {
        &mut self.new_trading_decision
    }

    /// Flips the activation flag and re-decides on the latest quote.
    /// Setting the flag to its current value does nothing.
    pub fn change_active_status(
        &mut self,
        to: bool,
        quote: Option<&TwoSidedQuote>,
        broker: &dyn Broker,
        quoter: &mut dyn Quoter,
    ) {
        if self.active == to {
            return;
        }

        self.active = to;
        info!(active = to, "changing active status");

        self.send_quote(quote, broker, quoter);
        self.active_changed.notify(&self.active);
    }

    /// Decision procedure, run on every new quote and on activation changes.
    pub fn send_quote(
        &mut self,
        quote: Option<&TwoSidedQuote>,
        broker: &dyn Broker,
        quoter: &mut dyn Quoter,
    ) {
        let Some(quote) = quote else {
            return;
        };

        let (bid_quote, ask_quote) = if self.active && Self::is_broker_active(broker) {
            (quote.bid, quote.ask)
        } else {
            // NOTE: cancels are crossed, the bid slot carries the ask's stop and
            // vice versa. Unconfirmed against the venue contract; do not
            // straighten without signoff.
            (Self::convert_to_stop_quote(&quote.ask), Self::convert_to_stop_quote(&quote.bid))
        };

        let ask_action = quoter.update_quote(ask_quote);
        let bid_action = quoter.update_quote(bid_quote);

        let decision = self
            .latest_decision
            .insert(TradingDecision::new(bid_action, ask_action, Utc::now()));
        self.new_trading_decision.notify(decision);
        info!(%decision, %quote, "new trading decision");
    }

    fn convert_to_stop_quote(quote: &Quote) -> Quote {
        quote.to_cancel()
    }

    fn is_broker_active(broker: &dyn Broker) -> bool {
        broker.connect_status() == ConnectivityStatus::Connected
    }

    /// Not consulted by the decision procedure yet; kept for inventory-aware
    /// quoting.
    #[allow(dead_code)]
    pub fn has_enough_position(broker: &dyn Broker, currency: &Currency, min_amount: f64) -> bool {
        broker
            .position(currency)
            .is_some_and(|position| position.amount > min_amount)
    }
}

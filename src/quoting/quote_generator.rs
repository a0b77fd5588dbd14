use chrono::Utc;
use tracing::debug;

use crate::events::Event;
use crate::types::{
    fair_value::FairValue,
    price::Price,
    quote::{Quote, TwoSidedQuote},
    quoting_parameters::QuotingParameters,
    side::Side,
};

/// Derives a symmetric two-sided quote around fair value.
///
/// There is no change gate here: every upstream trigger produces a new quote
/// and a notification, even when nothing moved.
#[derive(Debug, Default)]
pub struct QuoteGenerator {
    latest_quote: Option<TwoSidedQuote>,
    new_quote: Event<TwoSidedQuote>,
}

impl QuoteGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest_quote(&self) -> Option<&TwoSidedQuote> {
        self.latest_quote.as_ref()
    }

    pub fn new_quote(&mut self) -> &mut Event<TwoSidedQuote> {
        &mut self.new_quote
    }

    /// Handles both "new fair value" and "new parameters". Always reads the
    /// latest of each; returns `false` while there is no fair value yet.
    pub fn handle_new_fair_value(
        &mut self,
        fair_value: Option<&FairValue>,
        parameters: &QuotingParameters,
    ) -> bool {
        let Some(fair_value) = fair_value else {
            return false;
        };

        let bid_price = (fair_value.price - parameters.width).max(Price::ZERO);
        let ask_price = fair_value.price + parameters.width;

        // TODO: stamp with the book's exchange time once the broker exposes a
        // trustworthy one; wall clock is used for now.
        let time = Utc::now();
        let bid = Quote::new(Side::Bid, time, bid_price, parameters.size);
        let ask = Quote::new(Side::Ask, time, ask_price, parameters.size);

        let quote = self.latest_quote.insert(TwoSidedQuote::new(bid, ask));
        debug!(%quote, "new quote");
        self.new_quote.notify(quote);

        true
    }
}

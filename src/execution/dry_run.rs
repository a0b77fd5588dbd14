use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    execution::Quoter,
    types::{
        decision::QuoteSent,
        instrument::Instrument,
        price::Price,
        quote::{Quote, QuoteAction},
        side::Side,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct RestingOrder {
    pub order_id: String,
    pub price: Price,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunStats {
    pub placed: u64,
    pub modified: u64,
    pub cancelled: u64,
    pub unsent: u64,
}

/// Paper quoter: keeps one resting order per side and never touches a venue.
#[derive(Debug)]
pub struct DryRunQuoter {
    instrument: Instrument,
    bid: Option<RestingOrder>,
    ask: Option<RestingOrder>,
    stats: DryRunStats,
}

impl DryRunQuoter {
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            bid: None,
            ask: None,
            stats: DryRunStats::default(),
        }
    }

    pub fn resting(&self, side: Side) -> Option<&RestingOrder> {
        match side {
            Side::Bid => self.bid.as_ref(),
            Side::Ask => self.ask.as_ref(),
        }
    }

    pub fn stats(&self) -> DryRunStats {
        self.stats
    }

    fn place(&mut self, quote: &Quote) -> QuoteSent {
        let (Some(price), Some(size)) = (quote.price, quote.size) else {
            warn!(%quote, "new quote without price or size");
            return QuoteSent::UnableToSend;
        };

        let slot = match quote.side {
            Side::Bid => &mut self.bid,
            Side::Ask => &mut self.ask,
        };

        let outcome = match slot.as_ref() {
            Some(resting) if is_same_order(resting, price, size) => QuoteSent::UnsentDuplicate,
            Some(_) => QuoteSent::Modify,
            None => QuoteSent::First,
        };

        if outcome != QuoteSent::UnsentDuplicate {
            let order_id = Uuid::new_v4().to_string();
            info!(
                instrument = %self.instrument,
                side = %quote.side,
                %order_id,
                %price,
                size,
                ?outcome,
                "placing quote"
            );
            *slot = Some(RestingOrder {
                order_id,
                price,
                size,
            });
        }

        match outcome {
            QuoteSent::First => self.stats.placed += 1,
            QuoteSent::Modify => self.stats.modified += 1,
            _ => self.stats.unsent += 1,
        }

        outcome
    }

    fn cancel(&mut self, quote: &Quote) -> QuoteSent {
        let slot = match quote.side {
            Side::Bid => &mut self.bid,
            Side::Ask => &mut self.ask,
        };

        match slot.take() {
            Some(resting) => {
                info!(
                    instrument = %self.instrument,
                    side = %quote.side,
                    order_id = %resting.order_id,
                    "cancelling quote"
                );
                self.stats.cancelled += 1;
                QuoteSent::Delete
            }
            None => {
                self.stats.unsent += 1;
                QuoteSent::UnsentDelete
            }
        }
    }
}

impl Quoter for DryRunQuoter {
    fn update_quote(&mut self, quote: Quote) -> QuoteSent {
        match quote.action {
            QuoteAction::New => self.place(&quote),
            QuoteAction::Cancel => self.cancel(&quote),
        }
    }
}

fn is_same_order(resting: &RestingOrder, price: Price, size: f64) -> bool {
    (resting.price - price).abs() < 1e-12 && (resting.size - size).abs() < 1e-12
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn quoter() -> DryRunQuoter {
        DryRunQuoter::new(Instrument::new("BTC", "USD"))
    }

    fn bid(price: f64, size: f64) -> Quote {
        Quote::new(Side::Bid, Utc::now(), Price::new(price), size)
    }

    #[test]
    fn test_first_then_duplicate() {
        let mut quoter = quoter();

        assert_eq!(quoter.update_quote(bid(99.8, 1.0)), QuoteSent::First);
        let order_id = quoter.resting(Side::Bid).unwrap().order_id.clone();

        assert_eq!(quoter.update_quote(bid(99.8, 1.0)), QuoteSent::UnsentDuplicate);
        assert_eq!(quoter.resting(Side::Bid).unwrap().order_id, order_id);
        assert!(quoter.resting(Side::Ask).is_none());
    }

    #[test]
    fn test_price_change_modifies_with_new_order_id() {
        let mut quoter = quoter();
        quoter.update_quote(bid(99.8, 1.0));
        let order_id = quoter.resting(Side::Bid).unwrap().order_id.clone();

        assert_eq!(quoter.update_quote(bid(99.7, 1.0)), QuoteSent::Modify);

        let resting = quoter.resting(Side::Bid).unwrap();
        assert_ne!(resting.order_id, order_id);
        assert_eq!(resting.price, Price::new(99.7));
    }

    #[test]
    fn test_cancel_outcomes() {
        let mut quoter = quoter();
        let cancel = Quote::cancel(Side::Bid, Utc::now());

        assert_eq!(quoter.update_quote(cancel), QuoteSent::UnsentDelete);

        quoter.update_quote(bid(99.8, 1.0));
        assert_eq!(quoter.update_quote(cancel), QuoteSent::Delete);
        assert!(quoter.resting(Side::Bid).is_none());

        let stats = quoter.stats();
        assert_eq!(stats.placed, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.unsent, 1);
    }

    #[test]
    fn test_sides_rest_independently() {
        let mut quoter = quoter();
        let ask = Quote::new(Side::Ask, Utc::now(), Price::new(100.2), 1.0);

        assert_eq!(quoter.update_quote(bid(99.8, 1.0)), QuoteSent::First);
        assert_eq!(quoter.update_quote(ask), QuoteSent::First);
        assert_eq!(
            quoter.update_quote(Quote::cancel(Side::Ask, Utc::now())),
            QuoteSent::Delete
        );

        assert_eq!(quoter.resting(Side::Bid).unwrap().price, Price::new(99.8));
        assert!(quoter.resting(Side::Ask).is_none());
    }

    #[test]
    fn test_new_quote_without_price_is_unsendable() {
        let mut quoter = quoter();
        let mut quote = bid(99.8, 1.0);
        quote.price = None;

        assert_eq!(quoter.update_quote(quote), QuoteSent::UnableToSend);
        assert!(quoter.resting(Side::Bid).is_none());
    }
}

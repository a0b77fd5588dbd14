use tracing::debug;

use crate::events::Event;
use crate::market::broker::Broker;
use crate::types::fair_value::FairValue;

/// Fair values closer than this are treated as the same value.
const FAIR_VALUE_EPSILON: f64 = 1e-3;

#[derive(Debug, Default)]
pub struct FairValueAgent {
    latest_fair_value: Option<FairValue>,
    new_value: Event<FairValue>,
}

impl FairValueAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest_fair_value(&self) -> Option<&FairValue> {
        self.latest_fair_value.as_ref()
    }

    pub fn new_value(&mut self) -> &mut Event<FairValue> {
        &mut self.new_value
    }

    /// Recomputes the mid from the broker's book. Returns `true` when a new
    /// fair value was accepted and announced.
    pub fn recalc_markets(&mut self, broker: &dyn Broker) -> bool {
        let Some(book) = broker.current_book().filter(|book| !book.is_empty()) else {
            return false;
        };

        let Some(mid) = book.mid_price() else {
            return false;
        };

        let fair_value = FairValue::new(mid, book.clone());
        if Self::fair_values_are_same(&fair_value, self.latest_fair_value.as_ref()) {
            return false;
        }

        debug!(fair_value = %fair_value.price, "new fair value");
        let fair_value = self.latest_fair_value.insert(fair_value);
        self.new_value.notify(fair_value);

        true
    }

    fn fair_values_are_same(next: &FairValue, previous: Option<&FairValue>) -> bool {
        match previous {
            None => false,
            Some(previous) => (next.price - previous.price).abs() < FAIR_VALUE_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::testing::{StubBroker, book};

    fn counting_agent() -> (FairValueAgent, Arc<AtomicUsize>) {
        let mut agent = FairValueAgent::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        agent.new_value().subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (agent, count)
    }

    #[test]
    fn test_no_book_is_skipped() {
        let (mut agent, count) = counting_agent();
        let broker = StubBroker::without_book();

        assert!(!agent.recalc_markets(&broker));
        assert!(agent.latest_fair_value().is_none());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_one_sided_book_is_skipped() {
        let (mut agent, count) = counting_agent();
        let mut broker = StubBroker::with_book(book(99.9, 100.1));
        broker.book.as_mut().unwrap().asks.clear();

        assert!(!agent.recalc_markets(&broker));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_value_is_always_a_change() {
        let (mut agent, count) = counting_agent();
        let broker = StubBroker::with_book(book(99.9, 100.1));

        assert!(agent.recalc_markets(&broker));

        let fair_value = agent.latest_fair_value().unwrap();
        assert!((fair_value.price.as_f64() - 100.0).abs() < 1e-9);
        assert_eq!(fair_value.reference_book, book(99.9, 100.1));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sub_threshold_jitter_is_suppressed() {
        let (mut agent, count) = counting_agent();
        let mut broker = StubBroker::with_book(book(99.9, 100.1));
        agent.recalc_markets(&broker);

        // mid moves by 0.0005
        broker.book = Some(book(99.9, 100.101));
        assert!(!agent.recalc_markets(&broker));

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!((agent.latest_fair_value().unwrap().price.as_f64() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_above_threshold_fires_again() {
        let (mut agent, count) = counting_agent();
        let mut broker = StubBroker::with_book(book(99.9, 100.1));
        agent.recalc_markets(&broker);

        // mid moves by 0.0015
        broker.book = Some(book(99.901, 100.102));
        assert!(agent.recalc_markets(&broker));

        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!((agent.latest_fair_value().unwrap().price.as_f64() - 100.0015).abs() < 1e-9);
    }

    #[test]
    fn test_gate_compares_against_last_accepted_value() {
        let (mut agent, count) = counting_agent();
        let mut broker = StubBroker::with_book(book(99.9, 100.1));
        agent.recalc_markets(&broker);

        // two small steps that add up to more than the threshold
        broker.book = Some(book(99.9006, 100.1006));
        agent.recalc_markets(&broker);
        broker.book = Some(book(99.9012, 100.1012));
        agent.recalc_markets(&broker);

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}

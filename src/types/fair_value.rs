use std::fmt;

use crate::types::{order_book::OrderBook, price::Price};

#[derive(Debug, Clone, PartialEq)]
pub struct FairValue {
    pub price: Price,
    pub reference_book: OrderBook,
}

impl FairValue {
    pub fn new(price: Price, reference_book: OrderBook) -> Self {
        Self {
            price,
            reference_book,
        }
    }
}

impl fmt::Display for FairValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fv={} book=[{}]", self.price, self.reference_book)
    }
}

use crate::types::instrument::Currency;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyPosition {
    pub currency: Currency,
    /// Free balance available for new orders.
    pub amount: f64,
    /// Balance locked in resting orders.
    pub held_amount: f64,
}

impl CurrencyPosition {
    pub fn new(currency: Currency, amount: f64, held_amount: f64) -> Self {
        Self {
            currency,
            amount,
            held_amount,
        }
    }
}

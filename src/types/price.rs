use std::fmt;
use std::ops::{Add, Sub};

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Accepts any sign; a negative quoting width can produce a negative ask.
    pub fn new(value: f64) -> Self {
        Price(value)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    pub fn max(self, other: Price) -> Price {
        Price(self.0.max(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.4}", self.0)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::new(value)
    }
}

impl Add<f64> for Price {
    type Output = Price;

    fn add(self, rhs: f64) -> Price {
        Price::new(self.0 + rhs)
    }
}

impl Sub<f64> for Price {
    type Output = Price;

    fn sub(self, rhs: f64) -> Price {
        Price::new(self.0 - rhs)
    }
}

impl Sub for Price {
    type Output = f64;

    fn sub(self, rhs: Price) -> f64 {
        self.0 - rhs.0
    }
}

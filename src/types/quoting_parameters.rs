use std::fmt;

use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
pub struct QuotingParameters {
    /// Offset from fair value on each side, in quote currency.
    pub width: f64,

    /// Order quantity per side, in base currency.
    pub size: f64,
}

impl QuotingParameters {
    pub fn new(width: f64, size: f64) -> Self {
        Self { width, size }
    }
}

impl Default for QuotingParameters {
    fn default() -> Self {
        Self {
            width: 0.2,
            size: 0.01,
        }
    }
}

impl fmt::Display for QuotingParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width={} size={}", self.width, self.size)
    }
}

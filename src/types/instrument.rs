use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl AsRef<str>) -> Self {
        Currency(code.as_ref().trim().to_uppercase())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Instrument {
    base: Currency,
    quote: Currency,
}

impl Instrument {
    pub fn new(base: impl AsRef<str>, quote: impl AsRef<str>) -> Self {
        Self {
            base: Currency::new(base),
            quote: Currency::new(quote),
        }
    }

    pub fn base(&self) -> &Currency {
        &self.base
    }

    pub fn quote(&self) -> &Currency {
        &self.quote
    }
}

impl FromStr for Instrument {
    type Err = anyhow::Error;

    fn from_str(symbol: &str) -> Result<Self> {
        if let Some((base, quote)) = symbol.split_once('/') {
            if !base.trim().is_empty() && !quote.trim().is_empty() {
                return Ok(Self::new(base, quote));
            }
        }

        bail!("invalid instrument symbol: {symbol}");
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.base, self.quote)
    }
}

impl fmt::Debug for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instrument({})", self)
    }
}

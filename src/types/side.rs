use std::{fmt, str::FromStr};

use anyhow::{Result, anyhow};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "BID"),
            Side::Ask => write!(f, "ASK"),
        }
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "BID" | "BUY" => Ok(Self::Bid),
            "ASK" | "SELL" => Ok(Self::Ask),
            other => Err(anyhow!("unknown side: {other}")),
        }
    }
}

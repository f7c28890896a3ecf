//! Values of the `/market_movers` endpoint.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::interval::TimeFormat;

/// Market whose movers are requested; becomes the last path segment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Market {
    #[default]
    Stocks,
    Etf,
    MutualFunds,
    Forex,
    Crypto,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Market::Stocks => "stocks",
            Market::Etf => "etf",
            Market::MutualFunds => "mutual_funds",
            Market::Forex => "forex",
            Market::Crypto => "crypto",
        })
    }
}

/// Whether to list the biggest gainers or losers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Gainers,
    Losers,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Gainers => "gainers",
            Direction::Losers => "losers",
        })
    }
}

/// One instrument in a market movers listing.
///
/// Unlike series values, the numbers here arrive as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMover {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub mic_code: String,
    #[serde(deserialize_with = "inferred_datetime")]
    pub datetime: NaiveDateTime,
    pub last: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub change: f64,
    pub percent_change: f64,
}

fn inferred_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    TimeFormat::infer(&raw)
        .parse(&raw)
        .map_err(|e| serde::de::Error::custom(format!("failed to parse value datetime '{raw}': {e}")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMoversResponse {
    pub values: Vec<MarketMover>,
    pub status: String,
}

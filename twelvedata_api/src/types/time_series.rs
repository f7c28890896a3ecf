//! Values of the `/time_series` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::decode::{decode_via_record, Encoder, Fields, ParseError, RawValue, Record};
use super::meta::{Meta, Response};

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub struct TimeSeriesValue {
    pub datetime: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Zero when the API leaves volume empty, as it does for currency pairs.
    pub volume: f64,
}

impl Record for TimeSeriesValue {
    fn decode(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            datetime: fields.datetime()?,
            open: fields.number("open")?,
            high: fields.number("high")?,
            low: fields.number("low")?,
            close: fields.number("close")?,
            volume: fields.number_or_zero("volume")?,
        })
    }

    fn encode(&self, out: &mut Encoder) {
        out.datetime(&self.datetime)
            .number("open", self.open)
            .number("high", self.high)
            .number("low", self.low)
            .number("close", self.close)
            .number("volume", self.volume);
    }
}

decode_via_record!(TimeSeriesValue);

pub type TimeSeriesResponse = Response<Meta, TimeSeriesValue>;

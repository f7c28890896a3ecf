//! Values and descriptors of the technical indicator endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::decode::{decode_via_record, Encoder, Fields, ParseError, RawValue, Record};
use super::meta::{IndicatorMeta, Response};

/// Price bar attached to indicator values when `include_ohlc` was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Ohlc {
    /// Decodes the bar if the observation carries one.
    fn decode_optional(fields: &Fields<'_>) -> Result<Option<Self>, ParseError> {
        if !fields.contains("open") {
            return Ok(None);
        }
        Ok(Some(Self {
            open: fields.number("open")?,
            high: fields.number("high")?,
            low: fields.number("low")?,
            close: fields.number("close")?,
        }))
    }

    fn encode_optional(ohlc: &Option<Self>, out: &mut Encoder) {
        if let Some(bar) = ohlc {
            out.number("open", bar.open)
                .number("high", bar.high)
                .number("low", bar.low)
                .number("close", bar.close);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmaIndicator {
    pub name: String,
    pub series_type: String,
    pub time_period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub struct EmaValue {
    pub datetime: NaiveDateTime,
    pub ema: f64,
    pub ohlc: Option<Ohlc>,
}

impl Record for EmaValue {
    fn decode(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            datetime: fields.datetime()?,
            ema: fields.number("ema")?,
            ohlc: Ohlc::decode_optional(fields)?,
        })
    }

    fn encode(&self, out: &mut Encoder) {
        out.datetime(&self.datetime).number("ema", self.ema);
        Ohlc::encode_optional(&self.ohlc, out);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdIndicator {
    pub name: String,
    pub series_type: String,
    pub fast_period: u32,
    pub slow_period: u32,
    pub signal_period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub struct MacdValue {
    pub datetime: NaiveDateTime,
    pub macd: f64,
    pub macd_signal: f64,
    /// Histogram: `macd - macd_signal`.
    pub macd_hist: f64,
    pub ohlc: Option<Ohlc>,
}

impl Record for MacdValue {
    fn decode(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            datetime: fields.datetime()?,
            macd: fields.number("macd")?,
            macd_signal: fields.number("macd_signal")?,
            macd_hist: fields.number("macd_hist")?,
            ohlc: Ohlc::decode_optional(fields)?,
        })
    }

    fn encode(&self, out: &mut Encoder) {
        out.datetime(&self.datetime)
            .number("macd", self.macd)
            .number("macd_signal", self.macd_signal)
            .number("macd_hist", self.macd_hist);
        Ohlc::encode_optional(&self.ohlc, out);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiIndicator {
    pub name: String,
    pub series_type: String,
    pub time_period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub struct RsiValue {
    pub datetime: NaiveDateTime,
    pub rsi: f64,
    pub ohlc: Option<Ohlc>,
}

impl Record for RsiValue {
    fn decode(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            datetime: fields.datetime()?,
            rsi: fields.number("rsi")?,
            ohlc: Ohlc::decode_optional(fields)?,
        })
    }

    fn encode(&self, out: &mut Encoder) {
        out.datetime(&self.datetime).number("rsi", self.rsi);
        Ohlc::encode_optional(&self.ohlc, out);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochasticIndicator {
    pub name: String,
    pub fast_k_period: u32,
    pub slow_k_period: u32,
    pub slow_d_period: u32,
    pub slow_kma_type: String,
    pub slow_dma_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub struct StochasticValue {
    pub datetime: NaiveDateTime,
    pub slow_k: f64,
    pub slow_d: f64,
    pub ohlc: Option<Ohlc>,
}

impl Record for StochasticValue {
    fn decode(fields: &Fields<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            datetime: fields.datetime()?,
            slow_k: fields.number("slow_k")?,
            slow_d: fields.number("slow_d")?,
            ohlc: Ohlc::decode_optional(fields)?,
        })
    }

    fn encode(&self, out: &mut Encoder) {
        out.datetime(&self.datetime)
            .number("slow_k", self.slow_k)
            .number("slow_d", self.slow_d);
        Ohlc::encode_optional(&self.ohlc, out);
    }
}

decode_via_record!(EmaValue, MacdValue, RsiValue, StochasticValue);

pub type EmaResponse = Response<IndicatorMeta<EmaIndicator>, EmaValue>;
pub type MacdResponse = Response<IndicatorMeta<MacdIndicator>, MacdValue>;
pub type RsiResponse = Response<IndicatorMeta<RsiIndicator>, RsiValue>;
pub type StochasticResponse = Response<IndicatorMeta<StochasticIndicator>, StochasticValue>;

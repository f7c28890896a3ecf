use serde::{Deserialize, Serialize};

/// Instrument metadata returned alongside every series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub symbol: String,
    /// Interval as echoed by the API (e.g. `1h`, `1min`).
    pub interval: String,
    pub currency: String,
    /// Base currency, only sent for currency pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_base: Option<String>,
    /// Quote currency, only sent for currency pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_quote: Option<String>,
    pub exchange_timezone: String,
    pub exchange: String,
    pub mic_code: String,
    #[serde(rename = "type")]
    pub instrument_type: String,
}

/// Metadata of an indicator series: the instrument plus the indicator's parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMeta<I> {
    #[serde(flatten)]
    pub meta: Meta,
    pub indicator: I,
}

/// The `{meta, values, status}` envelope shared by series endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<M, V> {
    pub meta: M,
    pub values: Vec<V>,
    pub status: String,
}

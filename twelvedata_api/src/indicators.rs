//! Technical indicator endpoints, computed server side.

use crate::{
    client::{Requester, DEFAULT_BASE_URL},
    query::{EmaQuery, MacdQuery, RsiQuery, StochasticQuery},
    transport::{HttpTransport, Transport},
    types::{EmaResponse, Interval, MacdResponse, RsiResponse, StochasticResponse, TimeFormats},
    Error,
};

/// Client for the technical indicator endpoints.
#[derive(Clone, Debug)]
pub struct IndicatorsClient<T = HttpTransport> {
    requester: Requester<T>,
}

impl IndicatorsClient<HttpTransport> {
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(api_key, HttpTransport::new()?))
    }
}

impl<T: Transport> IndicatorsClient<T> {
    pub fn with_transport(api_key: &str, transport: T) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, transport)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            requester: Requester::new(base_url, api_key, transport),
        }
    }

    pub fn with_time_formats(self, formats: TimeFormats) -> Self {
        Self {
            requester: self.requester.with_time_formats(formats),
        }
    }

    /// Exponential moving average.
    pub fn ema(&self, symbol: &str, interval: Interval, query: &EmaQuery) -> Result<EmaResponse, Error> {
        self.requester.get_series("/ema", symbol, interval, query)
    }

    /// Moving average convergence/divergence with its signal line and histogram.
    pub fn macd(
        &self,
        symbol: &str,
        interval: Interval,
        query: &MacdQuery,
    ) -> Result<MacdResponse, Error> {
        self.requester.get_series("/macd", symbol, interval, query)
    }

    /// Relative strength index.
    pub fn rsi(&self, symbol: &str, interval: Interval, query: &RsiQuery) -> Result<RsiResponse, Error> {
        self.requester.get_series("/rsi", symbol, interval, query)
    }

    /// Stochastic oscillator (%K and %D).
    pub fn stochastic(
        &self,
        symbol: &str,
        interval: Interval,
        query: &StochasticQuery,
    ) -> Result<StochasticResponse, Error> {
        self.requester.get_series("/stoch", symbol, interval, query)
    }
}

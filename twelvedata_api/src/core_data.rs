//! Core data endpoints: time series and market movers.

use crate::{
    client::{Requester, DEFAULT_BASE_URL},
    query::{MarketMoversQuery, TimeSeriesQuery},
    transport::{HttpTransport, Transport},
    types::{Interval, MarketMoversResponse, TimeFormats, TimeSeriesResponse},
    Error,
};

/// Client for the core data endpoints.
#[derive(Clone, Debug)]
pub struct CoreClient<T = HttpTransport> {
    requester: Requester<T>,
}

impl CoreClient<HttpTransport> {
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(api_key, HttpTransport::new()?))
    }
}

impl<T: Transport> CoreClient<T> {
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

    /// Fetches OHLCV bars for `symbol` at `interval`.
    pub fn time_series(
        &self,
        symbol: &str,
        interval: Interval,
        query: &TimeSeriesQuery,
    ) -> Result<TimeSeriesResponse, Error> {
        self.requester
            .get_series("/time_series", symbol, interval, query)
    }

    /// Fetches the biggest gainers or losers of a market.
    pub fn market_movers(&self, query: &MarketMoversQuery) -> Result<MarketMoversResponse, Error> {
        self.requester.get_json(&query.path(), query)
    }
}

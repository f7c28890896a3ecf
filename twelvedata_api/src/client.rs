//! HTTP client for the Twelve Data REST API.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    core_data::CoreClient,
    indicators::IndicatorsClient,
    query::Query,
    transport::{truncate_body, HttpTransport, Transport},
    types::{check_status, decode_response, Interval, Record, Response, TimeFormats},
    Error,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.twelvedata.com";

/// Environment variable read by [`TwelveData::from_env`].
pub const API_KEY_ENV: &str = "TWELVEDATA_API_KEY";

/// Client for both endpoint groups of the API.
///
/// Each call is a single blocking request; the client holds no mutable state
/// and can be shared across threads when the transport can.
#[derive(Clone, Debug)]
pub struct TwelveData<T = HttpTransport> {
    /// Time series and market movers.
    pub core: CoreClient<T>,
    /// EMA, MACD, RSI and Stochastic.
    pub indicators: IndicatorsClient<T>,
}

impl TwelveData<HttpTransport> {
    /// Creates a client against the production API with the default transport.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Ok(Self::with_transport(api_key, HttpTransport::new()?))
    }

    /// Like [`TwelveData::new`], reading the key from `TWELVEDATA_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| Error::MissingApiKey(API_KEY_ENV))?;
        Self::new(&api_key)
    }
}

impl<T: Transport + Clone> TwelveData<T> {
    pub fn with_transport(api_key: &str, transport: T) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, transport)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            core: CoreClient::with_base_url(base_url, api_key, transport.clone()),
            indicators: IndicatorsClient::with_base_url(base_url, api_key, transport),
        }
    }

    /// Replaces the interval to time format table of both groups.
    pub fn with_time_formats(self, formats: TimeFormats) -> Self {
        Self {
            core: self.core.with_time_formats(formats.clone()),
            indicators: self.indicators.with_time_formats(formats),
        }
    }
}

/// Request plumbing shared by the endpoint groups: URL building, fetching, decoding.
#[derive(Clone)]
pub(crate) struct Requester<T> {
    base_api_url: String,
    api_key: String,
    formats: Arc<TimeFormats>,
    transport: T,
}

impl<T: fmt::Debug> fmt::Debug for Requester<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester")
            .field("base_api_url", &self.base_api_url)
            .field("api_key", &"<redacted>")
            .field("formats", &self.formats)
            .field("transport", &self.transport)
            .finish()
    }
}

impl<T: Transport> Requester<T> {
    pub(crate) fn new(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            formats: Arc::new(TimeFormats::default()),
            transport,
        }
    }

    pub(crate) fn with_time_formats(mut self, formats: TimeFormats) -> Self {
        self.formats = Arc::new(formats);
        self
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|source| {
            tracing::error!("Invalid URL constructed: {}", source);
            Error::InvalidUrl {
                url: self.base_api_url.clone(),
                source,
            }
        })
    }

    /// Builds the URL of a per-symbol series endpoint.
    fn series_url(
        &self,
        path: &str,
        symbol: &str,
        interval: Interval,
        query: &impl Query,
    ) -> Result<Url, Error> {
        let mut url = self.get_url(path)?;
        let time_format = self.formats.format_for(interval)?;
        url.query_pairs_mut()
            .append_pair("symbol", symbol)
            .append_pair("interval", interval.as_str())
            .append_pair("apikey", &self.api_key);
        Ok(query.add_to_url(&url, time_format))
    }

    fn fetch(&self, url: &Url) -> Result<Vec<u8>, Error> {
        tracing::debug!(path = url.path(), "GET");
        self.transport.get(url)
    }

    /// Fetches a `{meta, values, status}` series and decodes every value.
    pub(crate) fn get_series<M, V>(
        &self,
        path: &str,
        symbol: &str,
        interval: Interval,
        query: &impl Query,
    ) -> Result<Response<M, V>, Error>
    where
        M: DeserializeOwned,
        V: Record,
    {
        let url = self.series_url(path, symbol, interval, query)?;
        let body = self.fetch(&url)?;
        decode_response(&body).map_err(|e| log_decode_failure(e, &body))
    }

    /// Fetches an endpoint whose values are plain JSON, with only the API key as base parameter.
    pub(crate) fn get_json<R>(&self, path: &str, query: &impl Query) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let mut url = self.get_url(path)?;
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        // No date parameters on these endpoints; the format is unused.
        let url = query.add_to_url(&url, crate::types::TimeFormat::DateTime);
        let body = self.fetch(&url)?;
        decode_json(&body).map_err(|e| log_decode_failure(e, &body))
    }
}

fn decode_json<R: DeserializeOwned>(body: &[u8]) -> Result<R, Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    check_status(&value)?;
    Ok(serde_json::from_value(value)?)
}

fn log_decode_failure(err: Error, body: &[u8]) -> Error {
    let snippet = truncate_body(&String::from_utf8_lossy(body));
    tracing::error!("Failed to parse resource: {} | body: {}", err, snippet);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::TimeSeriesQuery;

    fn requester() -> Requester<fn(&Url) -> Result<Vec<u8>, Error>> {
        fn unreachable_transport(_: &Url) -> Result<Vec<u8>, Error> {
            Err(Error::RequestFailed("not called".to_string()))
        }
        Requester::new("https://api.twelvedata.com/", "demo", unreachable_transport)
    }

    #[test]
    fn series_url_carries_base_parameters_first() {
        let url = requester()
            .series_url("/time_series", "AAPL", Interval::OneDay, &TimeSeriesQuery::default())
            .unwrap();
        assert_eq!(url.path(), "/time_series");
        assert_eq!(
            url.query(),
            Some("symbol=AAPL&interval=1day&apikey=demo&outputsize=0")
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let requester = Requester::new("not a url", "demo", |_: &Url| -> Result<Vec<u8>, Error> {
            Ok(Vec::new())
        });
        let err = requester.get_url("/ema").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn symbols_are_percent_encoded() {
        let url = requester()
            .series_url("/time_series", "EUR/USD", Interval::OneHour, &TimeSeriesQuery::default())
            .unwrap();
        assert!(url.query().unwrap().starts_with("symbol=EUR%2FUSD&"));
    }
}

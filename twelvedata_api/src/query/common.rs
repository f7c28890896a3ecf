//! Shared query infrastructure: the [`Query`] and [`SeriesQuery`] traits and [`QueryCommon`] fields.

use chrono::NaiveDateTime;
use url::Url;

use crate::types::TimeFormat;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// Dates are rendered with `time_format`, the format of the requested interval.
    fn add_to_url(&self, url: &Url, time_format: TimeFormat) -> Url;
}

/// Builder methods for the filters shared by the series and indicator endpoints.
pub trait SeriesQuery: Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Restricts the instrument to an exchange (e.g. `NASDAQ`).
    fn with_exchange(mut self, exchange: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().exchange = Some(exchange.to_string());
        self
    }

    /// Restricts the instrument to a market identifier code (e.g. `XNGS`).
    fn with_mic_code(mut self, mic_code: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().mic_code = Some(mic_code.to_string());
        self
    }

    fn with_country(mut self, country: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().country = Some(country.to_string());
        self
    }

    /// Price series the indicator is computed on (`open`, `high`, `low`, `close`).
    fn with_series_type(mut self, series_type: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().series_type = Some(series_type.to_string());
        self
    }

    /// Instrument type, sent as `type` (e.g. `Common Stock`, `ETF`).
    fn with_instrument_type(mut self, instrument_type: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().instrument_type = Some(instrument_type.to_string());
        self
    }

    fn with_output_size(mut self, output_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().output_size = output_size;
        self
    }

    /// Asks indicator endpoints to attach the price bar to every value.
    fn with_include_ohlc(mut self, include_ohlc: bool) -> Self
    where
        Self: Sized,
    {
        self.get_common().include_ohlc = include_ohlc;
        self
    }

    fn with_start_date(mut self, start_date: NaiveDateTime) -> Self
    where
        Self: Sized,
    {
        self.get_common().start_date = Some(start_date);
        self
    }

    fn with_end_date(mut self, end_date: NaiveDateTime) -> Self
    where
        Self: Sized,
    {
        self.get_common().end_date = Some(end_date);
        self
    }
}

/// Fields shared by the time series and indicator queries. Unset fields are
/// left to the API's defaults.
#[derive(Clone, Debug, Default)]
pub struct QueryCommon {
    pub exchange: Option<String>,
    pub mic_code: Option<String>,
    pub country: Option<String>,
    pub series_type: Option<String>,
    pub instrument_type: Option<String>,
    /// Number of values to return. See [`QueryCommon::add_to_url`] for how it is sent.
    pub output_size: u32,
    pub include_ohlc: bool,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
}

impl QueryCommon {
    /// Appends the common filter parameters to the URL.
    ///
    /// `outputsize` is only sent while it is still zero; a non-zero size never
    /// reaches the API. Probably an inverted check, reproduced as observed.
    ///
    /// `start_date` and `end_date` are rendered with `time_format`, the layout
    /// of the requested interval. For daily and coarser intervals this drops
    /// the time of day, so ranges are whole days.
    pub fn add_to_url(&self, url: &Url, time_format: TimeFormat) -> Url {
        let mut url = url.clone();
        if let Some(exchange) = &self.exchange {
            url.query_pairs_mut().append_pair("exchange", exchange);
        }
        if let Some(mic_code) = &self.mic_code {
            url.query_pairs_mut().append_pair("mic_code", mic_code);
        }
        if let Some(country) = &self.country {
            url.query_pairs_mut().append_pair("country", country);
        }
        if let Some(series_type) = &self.series_type {
            url.query_pairs_mut().append_pair("series_type", series_type);
        }
        if let Some(instrument_type) = &self.instrument_type {
            url.query_pairs_mut().append_pair("type", instrument_type);
        }
        if self.output_size == 0 {
            url.query_pairs_mut()
                .append_pair("outputsize", &self.output_size.to_string());
        }
        if self.include_ohlc {
            url.query_pairs_mut().append_pair("include_ohlc", "true");
        }
        if let Some(start_date) = &self.start_date {
            url.query_pairs_mut()
                .append_pair("start_date", &time_format.render(start_date));
        }
        if let Some(end_date) = &self.end_date {
            url.query_pairs_mut()
                .append_pair("end_date", &time_format.render(end_date));
        }
        url
    }
}

/// Appends `name=value` when a period is set; zero means "API default".
pub(crate) fn append_period(url: &mut Url, name: &str, value: u32) {
    if value > 0 {
        url.query_pairs_mut().append_pair(name, &value.to_string());
    }
}

//! Typed client for the Twelve Data market data API.
//!
//! Two endpoint groups are exposed: core data ([`CoreClient`]) and technical
//! indicators ([`IndicatorsClient`]), grouped under [`TwelveData`]. Each call
//! builds the query URL, performs one GET through a [`Transport`] and decodes
//! the string-encoded numbers and datetimes of the response into typed values.
//!
//! ```no_run
//! use twelvedata_api::{types::Interval, SeriesQuery, TimeSeriesQuery, TwelveData};
//!
//! # fn main() -> Result<(), twelvedata_api::Error> {
//! let client = TwelveData::from_env()?;
//! let series = client.core.time_series(
//!     "AAPL",
//!     Interval::OneDay,
//!     &TimeSeriesQuery::default().with_exchange("NASDAQ"),
//! )?;
//! println!("{} bars, latest close {}", series.values.len(), series.values[0].close);
//! # Ok(())
//! # }
//! ```

mod client;
mod core_data;
mod errors;
mod indicators;
mod query;
pub mod transport;
pub mod types;
pub use self::client::{TwelveData, API_KEY_ENV, DEFAULT_BASE_URL};
pub use self::core_data::CoreClient;
pub use self::errors::Error;
pub use self::indicators::IndicatorsClient;
pub use self::query::{
    EmaQuery, MacdQuery, MarketMoversQuery, Query, QueryCommon, RsiQuery, SeriesQuery,
    StochasticQuery, TimeSeriesQuery,
};
pub use self::transport::{HttpTransport, Transport};

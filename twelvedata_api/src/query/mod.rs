mod common;
pub use self::common::{Query, QueryCommon, SeriesQuery};

mod time_series;
pub use self::time_series::TimeSeriesQuery;

mod market_movers;
pub use self::market_movers::MarketMoversQuery;

mod ema;
pub use self::ema::EmaQuery;

mod macd;
pub use self::macd::MacdQuery;

mod rsi;
pub use self::rsi::RsiQuery;

mod stochastic;
pub use self::stochastic::StochasticQuery;

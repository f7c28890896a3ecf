mod decode;
pub use self::decode::{
    decode_response, decode_value, encode_value, parse_decimal, Encoder, Fields, ParseError, RawValue, Record,
};
pub(crate) use self::decode::check_status;

mod interval;
pub use self::interval::{Interval, TimeFormat, TimeFormats};

mod meta;
pub use self::meta::{IndicatorMeta, Meta, Response};

mod time_series;
pub use self::time_series::{TimeSeriesResponse, TimeSeriesValue};

mod market_movers;
pub use self::market_movers::{Direction, Market, MarketMover, MarketMoversResponse};

mod indicators;
pub use self::indicators::{
    EmaIndicator, EmaResponse, EmaValue, MacdIndicator, MacdResponse, MacdValue, Ohlc,
    RsiIndicator, RsiResponse, RsiValue, StochasticIndicator, StochasticResponse, StochasticValue,
};

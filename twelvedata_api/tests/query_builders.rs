use chrono::NaiveDateTime;
use twelvedata_api::types::{Direction, Market, TimeFormat};
use twelvedata_api::{
    EmaQuery, MacdQuery, MarketMoversQuery, Query, RsiQuery, SeriesQuery, StochasticQuery,
    TimeSeriesQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn datetime(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

#[test]
fn time_series_query_defaults() {
    let url = TimeSeriesQuery::default().add_to_url(&base_url(), TimeFormat::DateTime);
    assert_eq!(url.query(), Some("outputsize=0"));
}

#[test]
fn output_size_is_only_sent_when_zero() {
    let url = TimeSeriesQuery::default()
        .with_output_size(30)
        .add_to_url(&base_url(), TimeFormat::DateTime);
    assert_eq!(url.query(), None);

    let url = EmaQuery::default()
        .with_output_size(5000)
        .add_to_url(&base_url(), TimeFormat::DateTime);
    assert!(!url.query().unwrap_or_default().contains("outputsize"));
}

#[test]
fn time_series_query_with_all_filters() {
    let url = TimeSeriesQuery::default()
        .with_exchange("NASDAQ")
        .with_mic_code("XNGS")
        .with_country("United States")
        .with_series_type("close")
        .with_instrument_type("Common Stock")
        .with_output_size(30)
        .with_start_date(datetime("2023-08-24 09:30:00"))
        .with_end_date(datetime("2023-08-24 16:00:00"))
        .add_to_url(&base_url(), TimeFormat::DateTime);
    insta::assert_snapshot!(
        url.query().unwrap(),
        @"exchange=NASDAQ&mic_code=XNGS&country=United+States&series_type=close&type=Common+Stock&start_date=2023-08-24+09%3A30%3A00&end_date=2023-08-24+16%3A00%3A00"
    );
}

#[test]
fn dates_follow_interval_format() {
    let url = TimeSeriesQuery::default()
        .with_start_date(datetime("2023-08-01 09:30:00"))
        .with_end_date(datetime("2023-08-24 16:00:00"))
        .add_to_url(&base_url(), TimeFormat::Date);
    let query = url.query().unwrap();
    assert!(query.contains("start_date=2023-08-01&"));
    assert!(query.ends_with("end_date=2023-08-24"));
}

#[test]
fn include_ohlc_only_when_set() {
    let url = RsiQuery::default().add_to_url(&base_url(), TimeFormat::DateTime);
    assert!(!url.query().unwrap().contains("include_ohlc"));

    let url = RsiQuery::default()
        .with_include_ohlc(true)
        .add_to_url(&base_url(), TimeFormat::DateTime);
    assert!(url.query().unwrap().contains("include_ohlc=true"));
}

#[test]
fn ema_and_rsi_time_period() {
    let url = EmaQuery::default()
        .with_time_period(9)
        .add_to_url(&base_url(), TimeFormat::DateTime);
    assert_eq!(url.query(), Some("outputsize=0&time_period=9"));

    let url = RsiQuery::default()
        .with_time_period(14)
        .with_series_type("open")
        .add_to_url(&base_url(), TimeFormat::DateTime);
    assert_eq!(url.query(), Some("series_type=open&outputsize=0&time_period=14"));
}

#[test]
fn macd_periods() {
    let url = MacdQuery::default()
        .with_fast_period(12)
        .with_slow_period(26)
        .with_signal_period(9)
        .add_to_url(&base_url(), TimeFormat::DateTime);
    let query = url.query().unwrap();
    assert!(query.contains("fast_period=12"));
    assert!(query.contains("slow_period=26"));
    assert!(query.contains("signal_period=9"));

    let url = MacdQuery::default().add_to_url(&base_url(), TimeFormat::DateTime);
    assert!(!url.query().unwrap().contains("period"));
}

#[test]
fn stochastic_periods_and_ma_types() {
    let url = StochasticQuery::default()
        .with_fast_k_period(14)
        .with_slow_kma_type("SMA")
        .add_to_url(&base_url(), TimeFormat::DateTime);
    insta::assert_snapshot!(url.query().unwrap(), @"outputsize=0&fast_k_period=14&slow_kma_type=SMA");

    let url = StochasticQuery::default()
        .with_slow_k_period(1)
        .with_slow_d_period(3)
        .with_slow_dma_type("EMA")
        .add_to_url(&base_url(), TimeFormat::DateTime);
    let query = url.query().unwrap();
    assert!(query.contains("slow_k_period=1"));
    assert!(query.contains("slow_d_period=3"));
    assert!(query.contains("slow_dma_type=EMA"));
    assert!(!query.contains("slow_kma_type"));
}

#[test]
fn market_movers_query_defaults() {
    let query = MarketMoversQuery::default();
    assert_eq!(query.market, Market::Stocks);
    let url = query.add_to_url(&base_url(), TimeFormat::DateTime);
    assert_eq!(url.query(), None);
}

#[test]
fn market_movers_query_with_filters() {
    let url = MarketMoversQuery::default()
        .with_market(Market::Etf)
        .with_direction(Direction::Losers)
        .with_output_size(10)
        .with_country("USA")
        .add_to_url(&base_url(), TimeFormat::DateTime);
    assert_eq!(url.query(), Some("direction=losers&outputsize=10&country=USA"));
}

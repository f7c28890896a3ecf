use std::cell::Cell;

use twelvedata_api::types::{Interval, Market, TimeFormat, TimeFormats};
use twelvedata_api::{
    EmaQuery, Error, HttpTransport, MacdQuery, MarketMoversQuery, RsiQuery, SeriesQuery,
    StochasticQuery, TimeSeriesQuery, TwelveData,
};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn failing_get(_: &Url) -> Result<Vec<u8>, Error> {
    Err(Error::RequestFailed("failed to get".to_string()))
}

fn serving(name: &'static str) -> impl Fn(&Url) -> Result<Vec<u8>, Error> + Clone {
    move |_: &Url| Ok(load_fixture(name).into_bytes())
}

#[test]
fn every_endpoint_propagates_transport_failure() {
    let client = TwelveData::with_transport("test-key", failing_get);

    let errors = [
        client
            .core
            .time_series("AAPL", Interval::OneDay, &TimeSeriesQuery::default())
            .unwrap_err(),
        client
            .core
            .market_movers(&MarketMoversQuery::default())
            .unwrap_err(),
        client
            .indicators
            .ema("AAPL", Interval::OneDay, &EmaQuery::default())
            .unwrap_err(),
        client
            .indicators
            .macd("AAPL", Interval::OneDay, &MacdQuery::default())
            .unwrap_err(),
        client
            .indicators
            .rsi("AAPL", Interval::OneDay, &RsiQuery::default())
            .unwrap_err(),
        client
            .indicators
            .stochastic("AAPL", Interval::OneDay, &StochasticQuery::default())
            .unwrap_err(),
    ];
    for err in errors {
        assert!(err.to_string().contains("failed to get"), "{err}");
    }
}

#[test]
fn market_movers_decodes_every_entry() {
    let client = TwelveData::with_transport("test-key", serving("market_movers.json"));
    let resp = client
        .core
        .market_movers(&MarketMoversQuery::default())
        .unwrap();
    assert_eq!(resp.values.len(), 25);
    assert_eq!(resp.status, "ok");
}

#[test]
fn indicator_endpoints_decode_fixtures() {
    let ema = TwelveData::with_transport("test-key", serving("ema.json"))
        .indicators
        .ema("AAPL", Interval::OneHour, &EmaQuery::default())
        .unwrap();
    assert_eq!(ema.values[0].ema, 178.08526);

    let macd = TwelveData::with_transport("test-key", serving("macd.json"))
        .indicators
        .macd("AAPL", Interval::OneHour, &MacdQuery::default())
        .unwrap();
    assert_eq!(macd.values.len(), 30);

    let rsi = TwelveData::with_transport("test-key", serving("rsi.json"))
        .indicators
        .rsi("AAPL", Interval::OneHour, &RsiQuery::default())
        .unwrap();
    assert_eq!(rsi.meta.indicator.time_period, 14);

    let stoch = TwelveData::with_transport("test-key", serving("stoch.json"))
        .indicators
        .stochastic("AAPL", Interval::OneHour, &StochasticQuery::default())
        .unwrap();
    assert_eq!(stoch.values[0].slow_k, 37.51669);
}

#[test]
fn requests_target_endpoint_paths() {
    let seen = Cell::new(Vec::<String>::new());
    let recording = |url: &Url| -> Result<Vec<u8>, Error> {
        let mut paths = seen.take();
        paths.push(url.path().to_string());
        seen.set(paths);
        Err(Error::RequestFailed("recorded".to_string()))
    };
    let client = TwelveData::with_transport("test-key", &recording);

    let _ = client.core.time_series("AAPL", Interval::OneWeek, &TimeSeriesQuery::default());
    let _ = client.core.market_movers(&MarketMoversQuery::default().with_market(Market::Crypto));
    let _ = client.indicators.ema("AAPL", Interval::OneWeek, &EmaQuery::default());
    let _ = client.indicators.macd("AAPL", Interval::OneWeek, &MacdQuery::default());
    let _ = client.indicators.rsi("AAPL", Interval::OneWeek, &RsiQuery::default());
    let _ = client.indicators.stochastic("AAPL", Interval::OneWeek, &StochasticQuery::default());

    assert_eq!(
        seen.take(),
        vec![
            "/time_series",
            "/market_movers/crypto",
            "/ema",
            "/macd",
            "/rsi",
            "/stoch"
        ]
    );
}

#[test]
fn unmapped_interval_fails_before_transport() {
    let calls = Cell::new(0);
    let counting = |_: &Url| -> Result<Vec<u8>, Error> {
        calls.set(calls.get() + 1);
        Ok(load_fixture("time_series.json").into_bytes())
    };
    let client = TwelveData::with_transport("test-key", &counting)
        .with_time_formats(TimeFormats::new([(Interval::OneDay, TimeFormat::Date)]));

    let err = client
        .core
        .time_series("AAPL", Interval::OneMonth, &TimeSeriesQuery::default())
        .unwrap_err();
    assert!(matches!(err, Error::UnmappedInterval(Interval::OneMonth)));
    assert_eq!(calls.get(), 0);

    assert!(client
        .core
        .time_series("AAPL", Interval::OneDay, &TimeSeriesQuery::default())
        .is_ok());
    assert_eq!(calls.get(), 1);
}

#[test]
fn api_error_envelope_is_surfaced() {
    let client = TwelveData::with_transport("bad-key", serving("error.json"));
    let err = client
        .indicators
        .rsi("AAPL", Interval::OneDay, &RsiQuery::default())
        .unwrap_err();
    assert!(matches!(err, Error::Api { code: 401, .. }));

    let err = client
        .core
        .market_movers(&MarketMoversQuery::default())
        .unwrap_err();
    assert!(matches!(err, Error::Api { code: 401, .. }));
}

#[test]
fn bad_value_fails_whole_call() {
    let body = r#"{"meta":{"symbol":"AAPL","indicator":{"name":"EMA - Exponential Moving Average","series_type":"close","time_period":9}},"values":[{"datetime":"2023-08-24 10:54:00","ema":"178.1"},{"datetime":"yesterday","ema":"178.0"}],"status":"ok"}"#;
    let client = TwelveData::with_transport("test-key", move |_: &Url| -> Result<Vec<u8>, Error> {
        Ok(body.as_bytes().to_vec())
    });
    let err = client
        .indicators
        .ema("AAPL", Interval::OneHour, &EmaQuery::default())
        .unwrap_err();
    match err {
        Error::Parse(parse) => assert_eq!(parse.field(), "datetime"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn time_series_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/time_series"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("interval", "1h"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("exchange", "NASDAQ"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("time_series.json")))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = TwelveData::with_base_url(&uri, "test-key", HttpTransport::new().unwrap());
        client.core.time_series(
            "AAPL",
            Interval::OneHour,
            &TimeSeriesQuery::default().with_exchange("NASDAQ"),
        )
    })
    .await
    .unwrap();

    let resp = result.unwrap();
    assert_eq!(resp.values.len(), 30);
    assert_eq!(resp.values[0].volume, 293189.0);
}

#[tokio::test]
async fn market_movers_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market_movers/stocks"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("direction", "gainers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("market_movers.json")),
        )
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = TwelveData::with_base_url(&uri, "test-key", HttpTransport::new().unwrap());
        client.core.market_movers(
            &MarketMoversQuery::default().with_direction(twelvedata_api::types::Direction::Gainers),
        )
    })
    .await
    .unwrap();

    assert_eq!(result.unwrap().values.len(), 25);
}

#[tokio::test]
async fn server_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/macd"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Failed!"))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = TwelveData::with_base_url(&uri, "test-key", HttpTransport::new().unwrap());
        client
            .indicators
            .macd("AAPL", Interval::OneDay, &MacdQuery::default())
    })
    .await
    .unwrap();

    match result.unwrap_err() {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Failed!");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rsi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let client = TwelveData::with_base_url(&uri, "test-key", HttpTransport::new().unwrap());
        client
            .indicators
            .rsi("AAPL", Interval::OneDay, &RsiQuery::default())
    })
    .await
    .unwrap();

    assert!(matches!(result.unwrap_err(), Error::Decode(_)));
}

use url::Url;

use crate::types::{Direction, Market, TimeFormat};

use super::common::Query;

/// Filters for `/market_movers/{market}`.
#[derive(Clone, Debug, Default)]
pub struct MarketMoversQuery {
    /// Selects the path, not a query parameter.
    pub market: Market,
    pub direction: Option<Direction>,
    /// Number of movers to return; zero leaves the API default.
    pub output_size: u32,
    pub country: Option<String>,
}

impl Query for MarketMoversQuery {
    fn add_to_url(&self, url: &Url, _time_format: TimeFormat) -> Url {
        let mut url = url.clone();
        if let Some(direction) = &self.direction {
            url.query_pairs_mut()
                .append_pair("direction", &direction.to_string());
        }
        if self.output_size > 0 {
            url.query_pairs_mut()
                .append_pair("outputsize", &self.output_size.to_string());
        }
        if let Some(country) = &self.country {
            url.query_pairs_mut().append_pair("country", country);
        }
        url
    }
}

impl MarketMoversQuery {
    pub fn with_market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_output_size(mut self, output_size: u32) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    /// Endpoint path for the selected market.
    pub(crate) fn path(&self) -> String {
        format!("/market_movers/{}", self.market)
    }
}

use url::Url;

use crate::types::TimeFormat;

use super::common::{append_period, Query, QueryCommon, SeriesQuery};

/// Filters for `/rsi`.
#[derive(Clone, Debug, Default)]
pub struct RsiQuery {
    pub common: QueryCommon,
    /// Number of periods the strength is measured over.
    pub time_period: u32,
}

impl Query for RsiQuery {
    fn add_to_url(&self, url: &Url, time_format: TimeFormat) -> Url {
        let mut url = self.common.add_to_url(url, time_format);
        append_period(&mut url, "time_period", self.time_period);
        url
    }
}

impl SeriesQuery for RsiQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl RsiQuery {
    pub fn with_time_period(mut self, time_period: u32) -> Self {
        self.time_period = time_period;
        self
    }
}

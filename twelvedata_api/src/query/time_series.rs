use url::Url;

use crate::types::TimeFormat;

use super::common::{Query, QueryCommon, SeriesQuery};

/// Filters for `/time_series`.
#[derive(Clone, Debug, Default)]
pub struct TimeSeriesQuery {
    pub common: QueryCommon,
}

impl Query for TimeSeriesQuery {
    fn add_to_url(&self, url: &Url, time_format: TimeFormat) -> Url {
        self.common.add_to_url(url, time_format)
    }
}

impl SeriesQuery for TimeSeriesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

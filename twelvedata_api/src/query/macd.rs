use url::Url;

use crate::types::TimeFormat;

use super::common::{append_period, Query, QueryCommon, SeriesQuery};

/// Filters for `/macd`.
#[derive(Clone, Debug, Default)]
pub struct MacdQuery {
    pub common: QueryCommon,
    pub fast_period: u32,
    pub slow_period: u32,
    pub signal_period: u32,
}

impl Query for MacdQuery {
    fn add_to_url(&self, url: &Url, time_format: TimeFormat) -> Url {
        let mut url = self.common.add_to_url(url, time_format);
        append_period(&mut url, "fast_period", self.fast_period);
        append_period(&mut url, "signal_period", self.signal_period);
        append_period(&mut url, "slow_period", self.slow_period);
        url
    }
}

impl SeriesQuery for MacdQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl MacdQuery {
    pub fn with_fast_period(mut self, fast_period: u32) -> Self {
        self.fast_period = fast_period;
        self
    }

    pub fn with_slow_period(mut self, slow_period: u32) -> Self {
        self.slow_period = slow_period;
        self
    }

    pub fn with_signal_period(mut self, signal_period: u32) -> Self {
        self.signal_period = signal_period;
        self
    }
}

use url::Url;

use crate::types::TimeFormat;

use super::common::{append_period, Query, QueryCommon, SeriesQuery};

/// Filters for `/stoch`.
#[derive(Clone, Debug, Default)]
pub struct StochasticQuery {
    pub common: QueryCommon,
    pub fast_k_period: u32,
    pub slow_k_period: u32,
    pub slow_d_period: u32,
    /// Moving average applied to %K (e.g. `SMA`, `EMA`).
    pub slow_kma_type: Option<String>,
    /// Moving average applied to %D.
    pub slow_dma_type: Option<String>,
}

impl Query for StochasticQuery {
    fn add_to_url(&self, url: &Url, time_format: TimeFormat) -> Url {
        let mut url = self.common.add_to_url(url, time_format);
        append_period(&mut url, "fast_k_period", self.fast_k_period);
        append_period(&mut url, "slow_d_period", self.slow_d_period);
        if let Some(slow_dma_type) = &self.slow_dma_type {
            url.query_pairs_mut()
                .append_pair("slow_dma_type", slow_dma_type);
        }
        append_period(&mut url, "slow_k_period", self.slow_k_period);
        if let Some(slow_kma_type) = &self.slow_kma_type {
            url.query_pairs_mut()
                .append_pair("slow_kma_type", slow_kma_type);
        }
        url
    }
}

impl SeriesQuery for StochasticQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl StochasticQuery {
    pub fn with_fast_k_period(mut self, fast_k_period: u32) -> Self {
        self.fast_k_period = fast_k_period;
        self
    }

    pub fn with_slow_k_period(mut self, slow_k_period: u32) -> Self {
        self.slow_k_period = slow_k_period;
        self
    }

    pub fn with_slow_d_period(mut self, slow_d_period: u32) -> Self {
        self.slow_d_period = slow_d_period;
        self
    }

    pub fn with_slow_kma_type(mut self, slow_kma_type: &str) -> Self {
        self.slow_kma_type = Some(slow_kma_type.to_string());
        self
    }

    pub fn with_slow_dma_type(mut self, slow_dma_type: &str) -> Self {
        self.slow_dma_type = Some(slow_dma_type.to_string());
        self
    }
}

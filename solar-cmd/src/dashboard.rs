//! Loading the feed and deriving everything the dashboard shows.

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;
use solar_chart::ChartViewModel;
use solar_data::metrics::{AveragingStrategy, Metrics, MetricsAggregator};
use solar_feed::{FeedClient, FeedData};

use crate::config::Config;

/// Derived dashboard state for one page load.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub metrics: Metrics,
    pub chart: ChartViewModel,
}

/// Fetch history and the current snapshot, then build the dashboard.
pub async fn load_dashboard(config: &Config, now: DateTime<Utc>) -> anyhow::Result<Dashboard> {
    let client = FeedClient::new(&config.api_base)?;
    info!(
        "Loading solar data from {} (timeout {:?})",
        client.base_url(),
        config.timeout
    );
    let data = client
        .load(config.timeout)
        .await
        .with_context(|| format!("Failed to load solar data from {}", client.base_url()))?;
    Ok(build_dashboard(&data, config.averaging, now))
}

pub fn build_dashboard(data: &FeedData, averaging: AveragingStrategy, now: DateTime<Utc>) -> Dashboard {
    let metrics = MetricsAggregator::new(averaging, now).aggregate(&data.series, &data.snapshot);
    let chart = ChartViewModel::new(&data.series, metrics.totals, now);
    Dashboard { metrics, chart }
}

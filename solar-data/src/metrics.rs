//! Totals and tile values for the summary cards.

use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use solar_feed::{Averages, CurrentSnapshot, Sample, SeriesName, SeriesSet};

/// Trailing windows reported on the average tiles, in minutes.
pub const LAST_15_MINS: i64 = 15;
pub const LAST_1_HOUR: i64 = 60;
pub const LAST_3_HOURS: i64 = 180;

/// Where the rolling averages come from.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AveragingStrategy {
    /// Use `statistics.averages` from the snapshot; missing values stay unavailable.
    #[default]
    ServerSupplied,
    /// Mean `wh` of every sample in `(now - window, now]`, across both days.
    TrailingWindow,
}

/// Production totals shown on the today/yesterday toggle buttons, in kWh.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Totals {
    pub today: f64,
    pub yesterday: f64,
}

impl Totals {
    pub fn get(&self, name: SeriesName) -> f64 {
        match name {
            SeriesName::Today => self.today,
            SeriesName::Yesterday => self.yesterday,
        }
    }
}

/// Full-precision values for the summary tiles.
#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileValues {
    pub current_wh: f64,
    pub averages: Averages,
    pub month_kwh: f64,
    pub all_time_kwh: f64,
}

#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub totals: Totals,
    pub tile_values: TileValues,
}

#[derive(Debug, Clone, Copy)]
pub struct MetricsAggregator {
    strategy: AveragingStrategy,
    now: DateTime<Utc>,
}

impl MetricsAggregator {
    /// `now` anchors the trailing windows; it is ignored for server-supplied averages.
    pub fn new(strategy: AveragingStrategy, now: DateTime<Utc>) -> Self {
        Self { strategy, now }
    }

    pub fn strategy(&self) -> AveragingStrategy {
        self.strategy
    }

    pub fn aggregate(&self, series: &SeriesSet, snapshot: &CurrentSnapshot) -> Metrics {
        Metrics {
            totals: totals(series, snapshot),
            tile_values: TileValues {
                current_wh: snapshot.current_production_wh,
                averages: self.averages(series, snapshot),
                month_kwh: snapshot.month_production_kwh,
                all_time_kwh: snapshot.all_time_production_kwh,
            },
        }
    }

    fn averages(&self, series: &SeriesSet, snapshot: &CurrentSnapshot) -> Averages {
        match self.strategy {
            AveragingStrategy::ServerSupplied => match snapshot.averages() {
                Some(averages) => *averages,
                None => {
                    debug!("Snapshot carries no averages; reporting them as unavailable");
                    Averages::default()
                }
            },
            AveragingStrategy::TrailingWindow => {
                let window = |minutes| {
                    let samples = series.yesterday.iter().chain(series.today.iter());
                    trailing_average(samples, self.now, Duration::minutes(minutes))
                };
                Averages {
                    last_15_mins: window(LAST_15_MINS),
                    last_1_hour: window(LAST_1_HOUR),
                    last_3_hours: window(LAST_3_HOURS),
                }
            }
        }
    }
}

/// Toggle totals: the snapshot's figure when present, otherwise the last
/// sample's cumulative kWh, otherwise zero.
pub fn totals(series: &SeriesSet, snapshot: &CurrentSnapshot) -> Totals {
    let pick = |reported: Option<f64>, name: SeriesName| {
        reported.unwrap_or_else(|| {
            let fallback = last_cumulative_kwh(series.get(name));
            debug!("No {} total in snapshot, using {} from samples", name, fallback);
            fallback
        })
    };
    Totals {
        today: pick(snapshot.today_production_kwh, SeriesName::Today),
        yesterday: pick(snapshot.yesterday_production_kwh, SeriesName::Yesterday),
    }
}

/// Cumulative kWh of the last sample in a series; zero when the series is
/// empty or the last sample has no cumulative value.
pub fn last_cumulative_kwh(series: &[Sample]) -> f64 {
    series
        .last()
        .and_then(|sample| sample.cumulative_kwh)
        .unwrap_or(0.0)
}

/// Mean `wh` of the samples whose instant lies in `(now - window, now]`.
pub fn trailing_average<'a>(
    samples: impl IntoIterator<Item = &'a Sample>,
    now: DateTime<Utc>,
    window: Duration,
) -> Option<f64> {
    let start = now - window;
    let (sum, count) = samples
        .into_iter()
        .filter(|sample| sample.at_utc() > start && sample.at_utc() <= now)
        .fold((0.0, 0usize), |(sum, count), sample| (sum + sample.wh, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

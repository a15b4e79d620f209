//! Plot-ready series with day-boundary padding.

use chrono::NaiveDate;
use log::debug;
use solar_feed::{Sample, SeriesName, SeriesSet};
use solar_utils::dates::end_of_day;

/// Normalize one series for plotting.
///
/// `samples` must already be sorted ascending by time; they are not re-sorted.
/// The `today` series gets a synthetic `wh = 0` sample at 23:55 UTC of
/// `reference_date` appended so the line always runs to the end of the day.
/// `yesterday` is returned as-is, and an empty input is never padded.
pub fn normalize(samples: &[Sample], reference_date: NaiveDate, role: SeriesName) -> Vec<Sample> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut normalized = Vec::with_capacity(samples.len() + 1);
    normalized.extend_from_slice(samples);
    if role == SeriesName::Today {
        let terminal = end_of_day(reference_date);
        debug!("Padding {} series to {}", role, terminal);
        normalized.push(Sample::new(terminal, 0.0));
    }
    normalized
}

/// Both series of a `SeriesSet`, normalized against the same reference date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSeries {
    pub today: Vec<Sample>,
    pub yesterday: Vec<Sample>,
}

impl NormalizedSeries {
    pub fn from_set(set: &SeriesSet, reference_date: NaiveDate) -> Self {
        Self {
            today: normalize(&set.today, reference_date, SeriesName::Today),
            yesterday: normalize(&set.yesterday, reference_date, SeriesName::Yesterday),
        }
    }

    pub fn get(&self, name: SeriesName) -> &[Sample] {
        match name {
            SeriesName::Today => &self.today,
            SeriesName::Yesterday => &self.yesterday,
        }
    }
}

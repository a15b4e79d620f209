use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use solar_utils::dates::utc_date;

use crate::series_name::SeriesName;

/// A single generation observation.
///
/// `timestamp_ms` is always derived from `at_utc` when the sample is built or
/// decoded; a `timestamp` field sent by older servers is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireSample", rename_all = "camelCase")]
pub struct Sample {
    at_utc: DateTime<Utc>,
    timestamp_ms: i64,
    /// Generation in watt-hours
    pub wh: f64,
    /// Running total since midnight, in kWh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_kwh: Option<f64>,
    /// UV index at the time of the observation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv_level: Option<f64>,
}

/// The shape samples arrive in over the wire, across every server revision.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSample {
    #[serde(alias = "jsAt")]
    at_utc: DateTime<Utc>,
    wh: f64,
    #[serde(default, alias = "cummalativeKwh")]
    cumulative_kwh: Option<f64>,
    #[serde(default)]
    uv_level: Option<f64>,
}

impl From<WireSample> for Sample {
    fn from(wire: WireSample) -> Self {
        let mut sample = Sample::new(wire.at_utc, wire.wh);
        sample.cumulative_kwh = wire.cumulative_kwh;
        sample.uv_level = wire.uv_level;
        sample
    }
}

impl Sample {
    pub fn new(at_utc: DateTime<Utc>, wh: f64) -> Self {
        Self {
            at_utc,
            timestamp_ms: at_utc.timestamp_millis(),
            wh,
            cumulative_kwh: None,
            uv_level: None,
        }
    }

    pub fn with_cumulative_kwh(mut self, cumulative_kwh: f64) -> Self {
        self.cumulative_kwh = Some(cumulative_kwh);
        self
    }

    pub fn with_uv_level(mut self, uv_level: f64) -> Self {
        self.uv_level = Some(uv_level);
        self
    }

    pub fn at_utc(&self) -> DateTime<Utc> {
        self.at_utc
    }

    /// `at_utc` as epoch milliseconds.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    pub fn utc_date(&self) -> NaiveDate {
        utc_date(&self.at_utc)
    }
}

/// The two daily series served by `/history`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    #[serde(default)]
    pub today: Vec<Sample>,
    #[serde(default)]
    pub yesterday: Vec<Sample>,
}

impl SeriesSet {
    /// Split a flat, time-ordered history into today and yesterday.
    ///
    /// Samples on `now`'s UTC date are today; everything else is yesterday.
    /// Relative order is preserved in both halves.
    pub fn partition(samples: Vec<Sample>, now: DateTime<Utc>) -> Self {
        let today_date = utc_date(&now);
        let (today, yesterday): (Vec<Sample>, Vec<Sample>) = samples
            .into_iter()
            .partition(|sample| sample.utc_date() == today_date);
        Self { today, yesterday }
    }

    pub fn get(&self, name: SeriesName) -> &[Sample] {
        match name {
            SeriesName::Today => &self.today,
            SeriesName::Yesterday => &self.yesterday,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.yesterday.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_utils::dates::parse_utc;

    const HISTORY_BODY: &str = r#"{
        "today": [
            {"atUtc": "2024-01-02T00:05:00Z", "wh": 0, "cumulativeKwh": 0.0, "timestamp": 1},
            {"atUtc": "2024-01-02T06:30:00.000Z", "wh": 412.5, "cumulativeKwh": 0.4, "uvLevel": 1.2}
        ],
        "yesterday": [
            {"jsAt": "2024-01-01T12:00:00+00:00", "at": "2024-01-01T12:00:00", "wh": 3100, "cummalativeKwh": 12.8}
        ]
    }"#;

    #[test]
    fn test_decode_history_across_revisions() {
        let set: SeriesSet = serde_json::from_str(HISTORY_BODY).unwrap();
        assert_eq!(set.today.len(), 2);
        assert_eq!(set.yesterday.len(), 1);

        let first = &set.today[0];
        assert_eq!(first.wh, 0.0);
        // legacy `timestamp` is ignored in favour of the derived value
        assert_eq!(first.timestamp_ms(), 1_704_153_900_000);

        let second = &set.today[1];
        assert_eq!(second.cumulative_kwh, Some(0.4));
        assert_eq!(second.uv_level, Some(1.2));

        let old = &set.yesterday[0];
        assert_eq!(old.at_utc(), parse_utc("2024-01-01T12:00:00Z").unwrap());
        assert_eq!(old.cumulative_kwh, Some(12.8));
        assert_eq!(old.uv_level, None);
    }

    #[test]
    fn test_decode_missing_yesterday() {
        let set: SeriesSet = serde_json::from_str(r#"{"today": []}"#).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_serialize_emits_derived_timestamp() {
        let sample = Sample::new(parse_utc("2024-01-01T00:00:00Z").unwrap(), 100.0);
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["timestampMs"], 1_704_067_200_000i64);
        assert_eq!(value["wh"], 100.0);
        assert!(value.get("cumulativeKwh").is_none());
        assert!(value.get("uvLevel").is_none());
    }

    #[test]
    fn test_partition_by_utc_date() {
        let now = parse_utc("2024-01-02T09:00:00Z").unwrap();
        let samples = vec![
            Sample::new(parse_utc("2024-01-01T10:00:00Z").unwrap(), 1.0),
            Sample::new(parse_utc("2024-01-01T23:59:00Z").unwrap(), 2.0),
            Sample::new(parse_utc("2024-01-02T00:00:00Z").unwrap(), 3.0),
            Sample::new(parse_utc("2024-01-02T08:59:00Z").unwrap(), 4.0),
        ];
        let set = SeriesSet::partition(samples, now);
        let today: Vec<f64> = set.today.iter().map(|s| s.wh).collect();
        let yesterday: Vec<f64> = set.yesterday.iter().map(|s| s.wh).collect();
        assert_eq!(today, vec![3.0, 4.0]);
        assert_eq!(yesterday, vec![1.0, 2.0]);
        assert_eq!(set.get(SeriesName::Today).len(), 2);
    }
}

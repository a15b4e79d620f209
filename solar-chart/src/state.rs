//! Chart state owned by the presentation layer.
//!
//! `ChartViewModel` holds the normalized series and the today/yesterday
//! selection. The rendering layer reads a `ChartView` from it and calls
//! `select` when a toggle button is pressed.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use solar_data::{metrics::Totals, series::NormalizedSeries};
use solar_feed::{Sample, SeriesName, SeriesSet};
use solar_utils::dates::{end_of_day_ms, utc_date};

use crate::axis::{self, AxisDomain, NumericAxis};

/// Shared chart state for the 24-hour generation chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartViewModel {
    /// Currently selected series
    active_series: SeriesName,
    /// Padded today and raw yesterday
    series: NormalizedSeries,
    /// Toggle button totals, independent of the selection
    totals: Totals,
    /// 23:55 UTC of the date the model was built on
    end_of_day_ms: i64,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView<'a> {
    pub active_series: SeriesName,
    pub active_data: &'a [Sample],
    pub totals: Totals,
    pub x_axis_domain: AxisDomain,
    pub power_axis: NumericAxis,
    /// Present only when the active series carries UV readings
    pub uv_axis: Option<NumericAxis>,
}

impl ChartViewModel {
    /// Build the model with `today` selected. `now` fixes the reference date
    /// used for padding and for the pinned end of the time axis.
    pub fn new(series: &SeriesSet, totals: Totals, now: DateTime<Utc>) -> Self {
        let reference_date = utc_date(&now);
        Self {
            active_series: SeriesName::Today,
            series: NormalizedSeries::from_set(series, reference_date),
            totals,
            end_of_day_ms: end_of_day_ms(reference_date),
        }
    }

    pub fn select(&mut self, name: SeriesName) {
        debug!("Chart series {} -> {}", self.active_series, name);
        self.active_series = name;
    }

    pub fn active_series(&self) -> SeriesName {
        self.active_series
    }

    pub fn active_data(&self) -> &[Sample] {
        self.series.get(self.active_series)
    }

    pub fn x_axis_domain(&self) -> AxisDomain {
        axis::x_axis_domain(self.active_series, self.end_of_day_ms)
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn has_uv_levels(&self) -> bool {
        self.active_data().iter().any(|sample| sample.uv_level.is_some())
    }

    pub fn view(&self) -> ChartView<'_> {
        ChartView {
            active_series: self.active_series,
            active_data: self.active_data(),
            totals: self.totals,
            x_axis_domain: self.x_axis_domain(),
            power_axis: axis::power_axis(),
            uv_axis: self.has_uv_levels().then(axis::uv_axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisBound;
    use solar_utils::dates::{format_utc, parse_utc};

    fn sample(at: &str, wh: f64) -> Sample {
        Sample::new(parse_utc(at).unwrap(), wh)
    }

    fn series() -> SeriesSet {
        SeriesSet {
            today: vec![
                sample("2024-01-01T06:00:00Z", 120.0).with_uv_level(0.4),
                sample("2024-01-01T06:05:00Z", 180.0).with_uv_level(0.6),
            ],
            yesterday: vec![
                sample("2023-12-31T06:00:00Z", 90.0),
                sample("2023-12-31T18:00:00Z", 0.0),
            ],
        }
    }

    fn totals() -> Totals {
        Totals {
            today: 0.3,
            yesterday: 21.4,
        }
    }

    fn model_at(now: &str) -> ChartViewModel {
        ChartViewModel::new(&series(), totals(), parse_utc(now).unwrap())
    }

    #[test]
    fn test_initial_state_is_today() {
        let model = model_at("2024-01-01T07:00:00Z");
        assert_eq!(model.active_series(), SeriesName::Today);
        let data = model.active_data();
        assert_eq!(data.len(), 3);
        assert_eq!(format_utc(&data[2].at_utc()), "2024-01-01T23:55:00Z");
        assert_eq!(data[2].wh, 0.0);
    }

    #[test]
    fn test_select_yesterday_shows_raw_series() {
        let mut model = model_at("2024-01-01T07:00:00Z");
        model.select(SeriesName::Yesterday);
        assert_eq!(model.active_series(), SeriesName::Yesterday);
        assert_eq!(model.active_data(), &series().yesterday[..]);
        assert_eq!(model.x_axis_domain(), AxisDomain::AUTO);
    }

    #[test]
    fn test_select_round_trip_restores_today() {
        let mut model = model_at("2024-01-01T07:00:00Z");
        let original = model.clone();
        let padded = model.active_data().to_vec();

        model.select(SeriesName::Yesterday);
        model.select(SeriesName::Today);

        assert_eq!(model.active_series(), SeriesName::Today);
        assert_eq!(model.active_data(), &padded[..]);
        assert_eq!(model, original);
    }

    #[test]
    fn test_select_same_series_is_a_no_op() {
        let mut model = model_at("2024-01-01T07:00:00Z");
        let original = model.clone();
        model.select(SeriesName::Today);
        assert_eq!(model, original);
    }

    #[test]
    fn test_today_axis_ignores_time_of_day() {
        let early = model_at("2024-01-01T00:00:01Z");
        let late = model_at("2024-01-01T23:59:59Z");
        assert_eq!(early.x_axis_domain(), late.x_axis_domain());
        assert_eq!(
            early.x_axis_domain().max,
            AxisBound::Value(1_704_153_300_000.0)
        );
    }

    #[test]
    fn test_totals_do_not_depend_on_selection() {
        let mut model = model_at("2024-01-01T07:00:00Z");
        assert_eq!(model.totals(), totals());
        model.select(SeriesName::Yesterday);
        assert_eq!(model.totals(), totals());
    }

    #[test]
    fn test_empty_today_does_not_fail() {
        let empty = SeriesSet::default();
        let model = ChartViewModel::new(&empty, Totals::default(), parse_utc("2024-01-01T07:00:00Z").unwrap());
        assert!(model.active_data().is_empty());
        assert_eq!(model.totals().today, 0.0);
        let view = model.view();
        assert!(view.active_data.is_empty());
        assert!(view.uv_axis.is_none());
    }

    #[test]
    fn test_uv_axis_follows_active_series() {
        let mut model = model_at("2024-01-01T07:00:00Z");
        assert!(model.view().uv_axis.is_some());
        model.select(SeriesName::Yesterday);
        assert!(model.view().uv_axis.is_none());
    }

    #[test]
    fn test_view_serializes_rendering_contract() {
        let model = model_at("2024-01-01T07:00:00Z");
        let value = serde_json::to_value(model.view()).unwrap();
        assert_eq!(value["activeSeries"], "today");
        assert_eq!(value["activeData"].as_array().unwrap().len(), 3);
        assert_eq!(value["activeData"][2]["timestampMs"], 1_704_153_300_000i64);
        assert_eq!(value["totals"]["yesterday"], 21.4);
        assert_eq!(value["xAxisDomain"][0], "auto");
        assert_eq!(value["powerAxis"]["domain"][1], 5500.0);
        assert_eq!(value["uvAxis"]["hidden"], true);
    }
}

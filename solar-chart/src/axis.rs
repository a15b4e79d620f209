//! Axis domains handed to the charting widget.
//!
//! Domains serialize as a two-element array where each end is either a
//! number or the string `"auto"`, e.g. `["auto", 1704153300000]`.

use serde::{ser::SerializeTuple, Serialize, Serializer};
use solar_feed::SeriesName;

/// Upper end of the UV index scale.
pub const UV_INDEX_MAX: f64 = 13.0;

/// Upper end of the power axis, in Wh.
pub const POWER_AXIS_MAX_WH: f64 = 5500.0;

/// Power axis ticks; a faint reference line is drawn at each one.
pub const POWER_TICKS_WH: [f64; 5] = [1000.0, 2000.0, 3000.0, 4000.0, 5000.0];

/// One end of an axis domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisBound {
    /// Let the widget use the data's own extreme
    Auto,
    Value(f64),
}

impl Serialize for AxisBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AxisBound::Auto => serializer.serialize_str("auto"),
            AxisBound::Value(value) => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: AxisBound,
    pub max: AxisBound,
}

impl AxisDomain {
    pub const AUTO: AxisDomain = AxisDomain {
        min: AxisBound::Auto,
        max: AxisBound::Auto,
    };

    pub fn fixed(min: f64, max: f64) -> Self {
        Self {
            min: AxisBound::Value(min),
            max: AxisBound::Value(max),
        }
    }
}

impl Serialize for AxisDomain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.min)?;
        tuple.serialize_element(&self.max)?;
        tuple.end()
    }
}

/// A value axis with a fixed domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericAxis {
    pub domain: AxisDomain,
    pub ticks: Vec<f64>,
    /// Drawn without tick labels or an axis line
    pub hidden: bool,
}

/// Time axis domain for the given series.
///
/// Today's upper bound is pinned to `end_of_day_ms` so the axis does not
/// rescale as new samples arrive; yesterday uses the data's natural extent.
pub fn x_axis_domain(active: SeriesName, end_of_day_ms: i64) -> AxisDomain {
    match active {
        SeriesName::Today => AxisDomain {
            min: AxisBound::Auto,
            max: AxisBound::Value(end_of_day_ms as f64),
        },
        SeriesName::Yesterday => AxisDomain::AUTO,
    }
}

pub fn power_axis() -> NumericAxis {
    NumericAxis {
        domain: AxisDomain::fixed(0.0, POWER_AXIS_MAX_WH),
        ticks: POWER_TICKS_WH.to_vec(),
        hidden: false,
    }
}

/// Independent axis for the UV overlay, so it never affects the power scale.
pub fn uv_axis() -> NumericAxis {
    NumericAxis {
        domain: AxisDomain::fixed(0.0, UV_INDEX_MAX),
        ticks: Vec::new(),
        hidden: true,
    }
}

//! View-model for the 24-hour solar generation chart.
//!
//! This crate provides:
//! - `axis`: axis domains for time, power and the UV overlay
//! - `state`: `ChartViewModel`, the today/yesterday selection and everything
//!   the rendering layer reads from it

pub mod axis;
pub mod state;

pub use axis::{AxisBound, AxisDomain, NumericAxis};
pub use state::{ChartView, ChartViewModel};

//! Data processing for solar generation samples.
//!
//! This crate handles transforming the raw feed into forms suitable for
//! charting (`series`) and for the summary tiles (`metrics`).

pub mod metrics;
pub mod series;

//! Core types and HTTP client for the solar generation feed.
//!
//! This crate provides:
//! - `sample`: a single generation observation and the today/yesterday `SeriesSet`
//! - `snapshot`: the point-in-time production summary (`CurrentSnapshot`)
//! - `series_name`: the two selectable series, `today` and `yesterday`
//! - `client` (feature `api`): fetches `/history` and `/current` under a deadline

pub mod sample;
pub mod series_name;
pub mod snapshot;

#[cfg(feature = "api")]
pub mod client;
#[cfg(feature = "api")]
pub mod error;

pub use sample::{Sample, SeriesSet};
pub use series_name::{ParseSeriesNameError, SeriesName};
pub use snapshot::{Averages, CurrentSnapshot, Statistics};

#[cfg(feature = "api")]
pub use client::{FeedClient, FeedData};
#[cfg(feature = "api")]
pub use error::FetchError;

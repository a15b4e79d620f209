use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Which of the two daily series is meant.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesName {
    #[default]
    Today,
    Yesterday,
}

impl SeriesName {
    pub const ALL: [SeriesName; 2] = [SeriesName::Today, SeriesName::Yesterday];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeriesName::Today => "today",
            SeriesName::Yesterday => "yesterday",
        }
    }

    /// Label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            SeriesName::Today => "Today",
            SeriesName::Yesterday => "Yesterday",
        }
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown series {0:?}, expected \"today\" or \"yesterday\"")]
pub struct ParseSeriesNameError(pub String);

impl FromStr for SeriesName {
    type Err = ParseSeriesNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(SeriesName::Today),
            "yesterday" => Ok(SeriesName::Yesterday),
            other => Err(ParseSeriesNameError(other.to_string())),
        }
    }
}

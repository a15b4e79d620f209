use serde::{Deserialize, Serialize};

/// Point-in-time production summary served by `/current`.
///
/// Server revisions disagree on which fields they send, so everything the
/// dashboard can live without is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSnapshot {
    pub current_production_wh: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_production_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yesterday_production_kwh: Option<f64>,
    pub month_production_kwh: f64,
    pub all_time_production_kwh: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub averages: Averages,
}

/// Rolling averages of generation in watt-hours. `None` means unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    #[serde(rename = "last15Mins", default)]
    pub last_15_mins: Option<f64>,
    #[serde(rename = "last1Hour", default)]
    pub last_1_hour: Option<f64>,
    #[serde(rename = "last3Hours", default)]
    pub last_3_hours: Option<f64>,
}

impl CurrentSnapshot {
    /// The averages block, if the server sent one.
    pub fn averages(&self) -> Option<&Averages> {
        self.statistics.as_ref().map(|statistics| &statistics.averages)
    }
}

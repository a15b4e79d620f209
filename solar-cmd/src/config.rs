//! Runtime configuration, read from flags or the environment at startup.

use clap::{Args, ValueEnum};
use solar_data::metrics::AveragingStrategy;
use std::time::Duration;

/// Feed connection settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    /// Base URL of the solar API, e.g. https://solar.example.com/api
    #[arg(long, env = "SOLAR_API_BASE")]
    pub api_base: String,

    /// Give up if history and current data have not both arrived within this many seconds
    #[arg(long, env = "SOLAR_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where the 15 minute / 1 hour / 3 hour averages come from
    #[arg(long, env = "SOLAR_AVERAGES", value_enum, default_value_t = AveragesSource::Server)]
    pub averages: AveragesSource,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AveragesSource {
    /// Use the averages reported by the server, if any
    Server,
    /// Compute trailing-window averages from the samples
    Trailing,
}

impl From<AveragesSource> for AveragingStrategy {
    fn from(source: AveragesSource) -> Self {
        match source {
            AveragesSource::Server => AveragingStrategy::ServerSupplied,
            AveragesSource::Trailing => AveragingStrategy::TrailingWindow,
        }
    }
}

/// Resolved settings passed down to the commands.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub timeout: Duration,
    pub averaging: AveragingStrategy,
}

impl TryFrom<FeedArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: FeedArgs) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !args.api_base.trim().is_empty(),
            "the API base URL must not be empty"
        );
        anyhow::ensure!(args.timeout_secs > 0, "the fetch timeout must be at least 1 second");
        Ok(Config {
            api_base: args.api_base,
            timeout: Duration::from_secs(args.timeout_secs),
            averaging: args.averages.into(),
        })
    }
}

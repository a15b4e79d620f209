//! Command implementations for the solar dashboard CLI.
//!
//! Provides subcommands that load the feed once, derive the dashboard
//! metrics and either print the summary tiles or hand the chart
//! view-model to a renderer as JSON.

use chrono::Utc;
use clap::Subcommand;
use log::info;
use solar_feed::SeriesName;

pub mod config;
pub mod dashboard;
pub mod render;

pub use config::{Config, FeedArgs};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the summary tiles and the today/yesterday totals
    Summary,

    /// Print the chart view-model as JSON
    Chart {
        /// Series to select before rendering ("today" or "yesterday")
        #[arg(short = 's', long, default_value = "today")]
        series: SeriesName,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

pub async fn run(config: &Config, command: Command) -> anyhow::Result<()> {
    let now = Utc::now();
    let mut dashboard = dashboard::load_dashboard(config, now).await?;

    match command {
        Command::Summary => {
            print!("{}", render::render_summary(&dashboard.metrics));
        }
        Command::Chart { series, pretty } => {
            dashboard.chart.select(series);
            let view = dashboard.chart.view();
            info!(
                "Rendering {} points for {}",
                view.active_data.len(),
                view.active_series
            );
            let json = if pretty {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}

//! Solar CLI - summary tiles and chart data for the solar panel dashboard.

use clap::Parser;
use log::debug;
use solar_cmd::{Config, FeedArgs};

#[derive(Parser)]
#[command(
    name = "solar-cli",
    version,
    about = "Solar panel generation dashboard toolkit"
)]
struct Cli {
    #[command(flatten)]
    feed: FeedArgs,

    #[command(subcommand)]
    command: solar_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::try_from(cli.feed)?;
    debug!("{:?}", config);
    solar_cmd::run(&config, cli.command).await
}

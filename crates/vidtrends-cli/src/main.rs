use std::path::PathBuf;

use clap::Parser;

mod pipeline;
#[cfg(test)]
mod tests;

#[derive(Debug, Parser)]
#[command(name = "vidtrends-cli")]
#[command(about = "Builds a per-category daily search-interest table from a trending-video CSV")]
struct Cli {
    /// Trending-video CSV with a `trending_date` column.
    #[arg(long, default_value = "data/raw/USvideos.csv")]
    input: PathBuf,

    /// Destination for the long-format category table.
    #[arg(long, default_value = "data/raw/google_trends_category.csv")]
    output: PathBuf,

    /// Region code for the interest queries.
    #[arg(long, default_value = "US", env = "VIDTRENDS_GEO")]
    geo: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = vidtrends_core::load_app_config_from_env()?;
    let client = vidtrends_trends::TrendsClient::new(
        config.request_timeout_secs,
        config.max_retries,
        config.retry_backoff_base_ms,
    )?;

    pipeline::run(&client, &config, &cli.input, &cli.output, &cli.geo).await
}

//! Pipeline orchestration: read → normalize → fetch → join → write.
//!
//! Called from `main` after the config and client are established. The run
//! is fail-fast on malformed input dates and on fetch failures; an empty
//! result is not a failure: the output file is still written with its
//! header so downstream consumers always see the schema.

use std::path::Path;

use vidtrends_core::{
    date_window, distinct_keywords, join_categories, read_trending_dates, write_category_trends,
    AppConfig,
};
use vidtrends_trends::{fetch_interest_series, TrendsSource};

/// Runs the full pipeline against the given interest source.
///
/// # Errors
///
/// Returns an error on unreadable input, any malformed `trending_date`
/// token, a fetch failure after retries, or an unwritable output path.
pub(crate) async fn run(
    source: &dyn TrendsSource,
    config: &AppConfig,
    input: &Path,
    output: &Path,
    geo: &str,
) -> anyhow::Result<()> {
    let tokens = read_trending_dates(input)?;
    let window = date_window(&tokens)?;
    tracing::info!(
        start = %window.start,
        end = %window.end,
        rows = tokens.len(),
        "derived interest-query window from trending dates"
    );

    let keywords = distinct_keywords();
    let series = fetch_interest_series(
        source,
        &keywords,
        &window,
        geo,
        config.inter_request_delay_ms,
    )
    .await?;

    if series.is_empty() {
        tracing::warn!("no interest data fetched for any keyword");
        write_category_trends(output, &[])?;
        return Ok(());
    }

    let rows = join_categories(&series);
    if rows.is_empty() {
        tracing::warn!("no fetched keyword matched any category");
        write_category_trends(output, &[])?;
        return Ok(());
    }

    write_category_trends(output, &rows)?;
    println!(
        "saved {} category trend rows to {}",
        rows.len(),
        output.display()
    );
    Ok(())
}

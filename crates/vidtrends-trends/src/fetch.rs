//! Sequential multi-keyword fetch.

use std::time::Duration;

use vidtrends_core::{DateWindow, InterestPoint};

use crate::error::TrendsError;
use crate::source::TrendsSource;

/// Fetches the interest series for each keyword in turn, concatenating the
/// results in keyword order. One call per keyword, strictly sequential, no
/// batching. Keywords yielding no data are skipped silently.
///
/// `inter_request_delay_ms` spaces consecutive calls to stay polite toward
/// the service; `0` disables the delay.
///
/// # Errors
///
/// Propagates the first [`TrendsError`] returned by the source (after the
/// source's own retry policy). "No data" is never an error.
pub async fn fetch_interest_series(
    source: &dyn TrendsSource,
    keywords: &[&str],
    window: &DateWindow,
    geo: &str,
    inter_request_delay_ms: u64,
) -> Result<Vec<InterestPoint>, TrendsError> {
    let mut series = Vec::new();
    for (i, &keyword) in keywords.iter().enumerate() {
        if i > 0 && inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
        }
        let points = source.interest_over_time(keyword, window, geo).await?;
        if points.is_empty() {
            tracing::debug!(keyword, "no interest data returned, skipping");
            continue;
        }
        series.extend(points);
    }
    Ok(series)
}

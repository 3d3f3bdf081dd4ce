//! Retry with exponential back-off and jitter for the interest client.
//!
//! [`retry_with_backoff`] wraps a fallible async operation and retries on
//! transient errors (network failures, 429, 5xx). Application-level errors
//! are returned immediately: a missing widget or malformed body will not
//! improve on a second attempt.

use std::future::Future;
use std::time::Duration;

use crate::error::TrendsError;

/// Returns `true` for errors worth retrying after a back-off delay.
pub(crate) fn is_retriable(err: &TrendsError) -> bool {
    match err {
        TrendsError::Http(e) => {
            e.is_timeout()
                || e.is_connect()
                || e.status().is_some_and(|s| {
                    s.is_server_error() || s == reqwest::StatusCode::TOO_MANY_REQUESTS
                })
        }
        TrendsError::Api(_) | TrendsError::MissingWidget(_) | TrendsError::Deserialize { .. } => {
            false
        }
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on
/// transient errors. The wait before the n-th retry is
/// `backoff_base_ms * 2^(n-1)` with ±25 % jitter, capped at 60 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, TrendsError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TrendsError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "interest service transient error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

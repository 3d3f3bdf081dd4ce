//! HTTP client for the search-interest service.
//!
//! Mirrors the web client's two-step flow: `explore` issues the query and
//! returns widget descriptors with one-time tokens, then
//! `widgetdata/multiline` exchanges the TIMESERIES token for the daily
//! score series. Both endpoints prefix their JSON bodies with an
//! anti-hijacking guard line that is stripped before deserialization.
//!
//! Transient failures (timeouts, connect errors, 429, 5xx) are retried with
//! exponential backoff up to the configured number of attempts.

use std::time::Duration;

use chrono::DateTime;
use reqwest::{Client, Url};

use vidtrends_core::{DateWindow, InterestPoint};

use crate::error::TrendsError;
use crate::retry::retry_with_backoff;
use crate::types::{
    ComparisonItem, ExploreRequest, ExploreResponse, MultilineResponse, TimeseriesWidget,
};

const DEFAULT_BASE_URL: &str = "https://trends.google.com/";
const EXPLORE_PATH: &str = "trends/api/explore";
const MULTILINE_PATH: &str = "trends/api/widgetdata/multiline";
const TIMESERIES_WIDGET: &str = "TIMESERIES";

/// Host language and timezone offset sent with every request, matching the
/// web client's defaults.
const HOST_LANG: &str = "en-US";
const TIMEZONE_OFFSET: &str = "0";

/// Client for the search-interest service.
///
/// Use [`TrendsClient::new`] for production or
/// [`TrendsClient::with_base_url`] to point at a mock server in tests.
pub struct TrendsClient {
    client: Client,
    base_url: Url,
    /// Additional attempts after the first failure for retriable errors.
    max_retries: u32,
    /// Base delay in milliseconds for exponential backoff.
    backoff_base_ms: u64,
}

impl TrendsClient {
    /// Creates a client pointed at the production service.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, TrendsError> {
        Self::with_base_url(timeout_secs, max_retries, backoff_base_ms, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`TrendsError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
        base_url: &str,
    ) -> Result<Self, TrendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("vidtrends/0.1 (category-trends)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| TrendsError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Fetches the daily interest series for one keyword over `window`,
    /// restricted to `geo`, with automatic retry on transient errors.
    ///
    /// Returns an empty vector when the service has no data for the
    /// keyword; that is a valid result, not an error.
    ///
    /// # Errors
    ///
    /// - [`TrendsError::Http`] on network failure or non-2xx status after
    ///   all retries are exhausted.
    /// - [`TrendsError::MissingWidget`] if explore returned no usable
    ///   TIMESERIES widget (not retried).
    /// - [`TrendsError::Deserialize`] / [`TrendsError::Api`] on malformed
    ///   responses (not retried).
    pub async fn interest_over_time(
        &self,
        keyword: &str,
        window: &DateWindow,
        geo: &str,
    ) -> Result<Vec<InterestPoint>, TrendsError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.fetch_once(keyword, window, geo)
        })
        .await
    }

    /// One un-retried pass through the explore → multiline handshake.
    async fn fetch_once(
        &self,
        keyword: &str,
        window: &DateWindow,
        geo: &str,
    ) -> Result<Vec<InterestPoint>, TrendsError> {
        let widget = self.explore(keyword, window, geo).await?;
        let timeline = self.widget_timeline(keyword, &widget).await?;
        timeline_to_points(keyword, timeline)
    }

    /// Issues the explore query and extracts the TIMESERIES widget.
    async fn explore(
        &self,
        keyword: &str,
        window: &DateWindow,
        geo: &str,
    ) -> Result<TimeseriesWidget, TrendsError> {
        let request = ExploreRequest {
            comparison_item: vec![ComparisonItem {
                keyword: keyword.to_string(),
                geo: geo.to_string(),
                time: timeframe(window),
            }],
            category: 0,
            property: String::new(),
        };
        let req_json =
            serde_json::to_string(&request).map_err(|e| TrendsError::Deserialize {
                context: format!("explore request for '{keyword}'"),
                source: e,
            })?;

        let url = self.endpoint(
            EXPLORE_PATH,
            &[
                ("hl", HOST_LANG),
                ("tz", TIMEZONE_OFFSET),
                ("req", &req_json),
            ],
        )?;
        let payload = self.fetch_payload(&url).await?;
        let response: ExploreResponse =
            serde_json::from_str(&payload).map_err(|e| TrendsError::Deserialize {
                context: format!("explore(keyword={keyword})"),
                source: e,
            })?;

        for widget in response.widgets {
            if widget.id != TIMESERIES_WIDGET {
                continue;
            }
            if let (Some(token), Some(request)) = (widget.token, widget.request) {
                return Ok(TimeseriesWidget { token, request });
            }
        }
        Err(TrendsError::MissingWidget(keyword.to_string()))
    }

    /// Exchanges a TIMESERIES widget token for the daily timeline.
    async fn widget_timeline(
        &self,
        keyword: &str,
        widget: &TimeseriesWidget,
    ) -> Result<MultilineResponse, TrendsError> {
        let req_json =
            serde_json::to_string(&widget.request).map_err(|e| TrendsError::Deserialize {
                context: format!("timeline request for '{keyword}'"),
                source: e,
            })?;

        let url = self.endpoint(
            MULTILINE_PATH,
            &[
                ("hl", HOST_LANG),
                ("tz", TIMEZONE_OFFSET),
                ("req", &req_json),
                ("token", &widget.token),
            ],
        )?;
        let payload = self.fetch_payload(&url).await?;
        serde_json::from_str(&payload).map_err(|e| TrendsError::Deserialize {
            context: format!("multiline(keyword={keyword})"),
            source: e,
        })
    }

    /// Builds an endpoint URL with percent-encoded query parameters.
    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, TrendsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| TrendsError::Api(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and strips the
    /// anti-hijacking guard from the body.
    async fn fetch_payload(&self, url: &Url) -> Result<String, TrendsError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        Ok(strip_guard_prefix(&body).to_string())
    }
}

/// Formats the window as the service's `"YYYY-MM-DD YYYY-MM-DD"` timeframe.
fn timeframe(window: &DateWindow) -> String {
    format!(
        "{} {}",
        window.start.format("%Y-%m-%d"),
        window.end.format("%Y-%m-%d")
    )
}

/// Strips the `)]}'`-style guard line the service prepends to JSON bodies.
/// The payload proper starts at the first `{`.
fn strip_guard_prefix(body: &str) -> &str {
    body.find('{').map_or(body, |pos| &body[pos..])
}

/// Converts a timeline into interest points, dropping the partial-data flag
/// but keeping the observation it was attached to.
fn timeline_to_points(
    keyword: &str,
    timeline: MultilineResponse,
) -> Result<Vec<InterestPoint>, TrendsError> {
    let data = timeline.default.timeline_data;
    let mut points = Vec::with_capacity(data.len());
    for point in data {
        let secs: i64 = point.time.parse().map_err(|_| {
            TrendsError::Api(format!("non-numeric timeline timestamp '{}'", point.time))
        })?;
        let date = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| TrendsError::Api(format!("timeline timestamp out of range: {secs}")))?
            .date_naive();
        let Some(score) = point.value.first().copied() else {
            return Err(TrendsError::Api(format!(
                "timeline point for '{keyword}' carries no score value"
            )));
        };
        points.push(InterestPoint {
            date,
            keyword: keyword.to_string(),
            score,
        });
    }
    Ok(points)
}

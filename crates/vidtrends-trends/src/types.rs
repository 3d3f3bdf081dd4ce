//! Wire types for the search-interest service.
//!
//! The service wraps every query in a widget handshake: `explore` echoes
//! back widget descriptors carrying one-time request tokens, and
//! `widgetdata/multiline` exchanges the TIMESERIES token for the daily
//! score timeline.

use serde::{Deserialize, Serialize};

/// `req` payload for the explore endpoint: a single comparison item with no
/// category or search-property restriction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreRequest {
    pub comparison_item: Vec<ComparisonItem>,
    pub category: u32,
    pub property: String,
}

#[derive(Debug, Serialize)]
pub struct ComparisonItem {
    pub keyword: String,
    pub geo: String,
    /// Inclusive window as `"YYYY-MM-DD YYYY-MM-DD"`.
    pub time: String,
}

#[derive(Debug, Deserialize)]
pub struct ExploreResponse {
    pub widgets: Vec<Widget>,
}

/// One widget descriptor from explore. Only the TIMESERIES widget is
/// consumed; other widgets (related queries, geo maps) are ignored.
#[derive(Debug, Deserialize)]
pub struct Widget {
    pub id: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Opaque request payload echoed back verbatim to the timeline endpoint.
    #[serde(default)]
    pub request: Option<serde_json::Value>,
}

/// Token and echo-request extracted from a usable TIMESERIES widget.
#[derive(Debug)]
pub struct TimeseriesWidget {
    pub token: String,
    pub request: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct MultilineResponse {
    pub default: Timeline,
}

#[derive(Debug, Deserialize)]
pub struct Timeline {
    #[serde(rename = "timelineData")]
    pub timeline_data: Vec<TimelinePoint>,
}

/// One daily observation. `value` carries one entry per comparison item;
/// queries are always single-keyword, so the first entry is the score.
/// `isPartial` marks a not-yet-final most recent day; the flag is discarded
/// but the observation itself is kept.
#[derive(Debug, Deserialize)]
pub struct TimelinePoint {
    /// Epoch seconds, as a decimal string.
    pub time: String,
    #[serde(default)]
    pub value: Vec<u32>,
    #[serde(rename = "isPartial", default)]
    pub is_partial: Option<bool>,
}

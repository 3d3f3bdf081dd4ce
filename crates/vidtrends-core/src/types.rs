//! Domain types shared across the pipeline stages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One fetched interest observation: the service's bounded popularity index
/// (0–100) for a keyword on a date. Partial-data markers on the most recent
/// date are dropped before points are constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestPoint {
    pub date: NaiveDate,
    pub keyword: String,
    pub score: u32,
}

/// One output row: an interest observation stamped with the category id
/// whose table keyword matched it. Serialized field order is the output
/// CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTrendRow {
    pub date: NaiveDate,
    pub category_id: u32,
    pub keyword: String,
    pub trend_score: u32,
}

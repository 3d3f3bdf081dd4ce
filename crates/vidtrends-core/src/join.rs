//! Joins fetched interest points to the fixed category table.

use crate::categories::CATEGORY_KEYWORDS;
use crate::types::{CategoryTrendRow, InterestPoint};

/// Stamps each interest point with every category whose table keyword
/// matches it exactly, accumulating rows in ascending category-id order.
///
/// Categories with no matching points contribute nothing: missing data is
/// absent, not zero-filled. An empty result is valid; callers decide whether
/// to warn.
#[must_use]
pub fn join_categories(series: &[InterestPoint]) -> Vec<CategoryTrendRow> {
    let mut rows = Vec::new();
    for (category_id, keyword) in CATEGORY_KEYWORDS {
        rows.extend(
            series
                .iter()
                .filter(|point| point.keyword == keyword)
                .map(|point| CategoryTrendRow {
                    date: point.date,
                    category_id,
                    keyword: point.keyword.clone(),
                    trend_score: point.score,
                }),
        );
    }
    rows
}

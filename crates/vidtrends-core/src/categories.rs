//! The fixed category→keyword table.
//!
//! Each video category id is mapped 1:1 to a representative search keyword
//! used for interest lookups. The table is a compile-time constant; nothing
//! mutates it at runtime.

/// Category id → representative search keyword, in ascending id order.
pub const CATEGORY_KEYWORDS: [(u32, &str); 14] = [
    (1, "film & animation"),
    (2, "autos & vehicles"),
    (10, "music"),
    (15, "pets & animals"),
    (17, "sports"),
    (19, "travel & events"),
    (20, "gaming"),
    (22, "vlog"),
    (23, "comedy"),
    (24, "entertainment"),
    (25, "news"),
    (26, "how to"),
    (27, "education"),
    (28, "technology"),
];

/// Looks up the keyword for a category id.
#[must_use]
pub fn keyword_for(category_id: u32) -> Option<&'static str> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, kw)| *kw)
}

/// Returns the sorted, de-duplicated set of keywords to query.
#[must_use]
pub fn distinct_keywords() -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = CATEGORY_KEYWORDS.iter().map(|(_, kw)| *kw).collect();
    keywords.sort_unstable();
    keywords.dedup();
    keywords
}

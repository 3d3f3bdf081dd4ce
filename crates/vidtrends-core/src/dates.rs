//! Trending-date normalization and query-window derivation.
//!
//! Input dates arrive as `"YY.DD.MM"` (two-digit year, day, month,
//! dot-separated). The two-digit year always implies the 2000s; this is a
//! fixed policy, not configurable. The whole pipeline is fail-fast on
//! malformed tokens: a single bad `trending_date` aborts the run rather than
//! silently shrinking the derived window.

use chrono::NaiveDate;

use crate::error::CoreError;

/// An inclusive date range used as the interest-query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Rewrites a `"YY.DD.MM"` token into a `"20YY-MM-DD"` ISO string.
///
/// This is a pure token rewrite: component ranges are not validated here
/// (`"18.14.06"` becomes `"2018-06-14"`), only the shape of the token is.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTrendingDate`] if the token does not have
/// exactly three dot-separated components or any component is non-numeric.
pub fn fix_trending_date(token: &str) -> Result<String, CoreError> {
    let parts: Vec<&str> = token.split('.').collect();
    let &[yy, dd, mm] = parts.as_slice() else {
        return Err(CoreError::InvalidTrendingDate {
            token: token.to_string(),
            reason: "expected three dot-separated components (YY.DD.MM)".to_string(),
        });
    };
    for part in [yy, dd, mm] {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidTrendingDate {
                token: token.to_string(),
                reason: format!("non-numeric component '{part}'"),
            });
        }
    }
    Ok(format!("20{yy}-{mm}-{dd}"))
}

/// Normalizes a `"YY.DD.MM"` token and parses it into a [`NaiveDate`].
///
/// # Errors
///
/// Returns [`CoreError::InvalidTrendingDate`] if the token is malformed or
/// does not name a real calendar date (e.g. month 14).
pub fn parse_trending_date(token: &str) -> Result<NaiveDate, CoreError> {
    let fixed = fix_trending_date(token)?;
    NaiveDate::parse_from_str(&fixed, "%Y-%m-%d").map_err(|e| CoreError::InvalidTrendingDate {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Computes the inclusive min/max window over a set of trending-date tokens.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTrendingDate`] on the first malformed token,
/// or [`CoreError::EmptyInput`] if the iterator yields nothing.
pub fn date_window<I, S>(tokens: I) -> Result<DateWindow, CoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut window: Option<DateWindow> = None;
    for token in tokens {
        let date = parse_trending_date(token.as_ref())?;
        window = Some(match window {
            None => DateWindow {
                start: date,
                end: date,
            },
            Some(w) => DateWindow {
                start: w.start.min(date),
                end: w.end.max(date),
            },
        });
    }
    window.ok_or(CoreError::EmptyInput)
}

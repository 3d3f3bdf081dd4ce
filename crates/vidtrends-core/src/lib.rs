//! Core domain logic for the category search-interest pipeline.
//!
//! Holds the fixed category→keyword table, trending-date normalization and
//! window derivation, the category joiner, CSV input/output, and the
//! environment-driven application configuration. Everything here is pure or
//! local-filesystem only; talking to the external interest service lives in
//! `vidtrends-trends`.

pub mod categories;
pub mod config;
pub mod dates;
pub mod error;
pub mod io;
pub mod join;
pub mod types;

pub use categories::{distinct_keywords, keyword_for, CATEGORY_KEYWORDS};
pub use config::{load_app_config, load_app_config_from_env, AppConfig};
pub use dates::{date_window, fix_trending_date, parse_trending_date, DateWindow};
pub use error::{ConfigError, CoreError};
pub use io::{read_trending_dates, write_category_trends, OUTPUT_COLUMNS, TRENDING_DATE_COLUMN};
pub use join::join_categories;
pub use types::{CategoryTrendRow, InterestPoint};

//! Client for the external search-interest service.
//!
//! [`TrendsClient`] speaks the service's two-step widget protocol over
//! `reqwest`, with retry on transient failures. Orchestration code should
//! depend on the [`TrendsSource`] trait instead of the concrete client so it
//! can be tested against a stub without network access.

pub mod client;
pub mod error;
pub mod fetch;
mod retry;
pub mod source;
pub mod types;

pub use client::TrendsClient;
pub use error::TrendsError;
pub use fetch::fetch_interest_series;
pub use source::TrendsSource;

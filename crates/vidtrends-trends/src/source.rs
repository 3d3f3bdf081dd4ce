//! The seam between orchestration and the network.
//!
//! The pipeline depends on [`TrendsSource`] rather than the concrete
//! [`TrendsClient`], so it can be driven by an in-memory stub in tests.

use async_trait::async_trait;

use vidtrends_core::{DateWindow, InterestPoint};

use crate::client::TrendsClient;
use crate::error::TrendsError;

/// An interest-over-time query service.
#[async_trait]
pub trait TrendsSource: Send + Sync {
    /// Fetches the daily interest series for one keyword over `window`,
    /// restricted to `geo`. An empty series means "no data", not failure.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError`] when the query cannot be answered.
    async fn interest_over_time(
        &self,
        keyword: &str,
        window: &DateWindow,
        geo: &str,
    ) -> Result<Vec<InterestPoint>, TrendsError>;
}

#[async_trait]
impl TrendsSource for TrendsClient {
    async fn interest_over_time(
        &self,
        keyword: &str,
        window: &DateWindow,
        geo: &str,
    ) -> Result<Vec<InterestPoint>, TrendsError> {
        TrendsClient::interest_over_time(self, keyword, window, geo).await
    }
}

use thiserror::Error;

/// Errors returned by the search-interest client.
#[derive(Debug, Error)]
pub enum TrendsError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 2xx but the payload is unusable (bad timestamp,
    /// missing score value).
    #[error("interest service error: {0}")]
    Api(String),

    /// The explore response carried no usable TIMESERIES widget for the
    /// keyword, so no timeline token could be obtained.
    #[error("no TIMESERIES widget in explore response for '{0}'")]
    MissingWidget(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

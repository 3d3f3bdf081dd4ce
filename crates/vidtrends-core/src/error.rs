use thiserror::Error;

/// Errors from the core pipeline stages (date handling, CSV input/output).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A `trending_date` token could not be normalized or parsed. The whole
    /// run aborts on the first bad token; rows are never silently dropped.
    #[error("invalid trending_date '{token}': {reason}")]
    InvalidTrendingDate { token: String, reason: String },

    /// The input had no rows, so no date window can be derived.
    #[error("input contains no trending_date values to derive a date window from")]
    EmptyInput,

    /// The input CSV is missing a required column.
    #[error("input CSV is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// The input CSV could not be opened or read.
    #[error("failed to read input CSV {path}")]
    ReadInput {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The output CSV could not be created or written.
    #[error("failed to write output CSV {path}")]
    WriteOutput {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A record-level CSV error (ragged row, encoding problem).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure flushing the output writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading [`crate::AppConfig`] out of the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but its value failed to parse.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

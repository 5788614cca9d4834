use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The input table could not be read at all.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("malformed input: required column \"{column}\" not found (available: {available})")]
    MissingColumn { column: String, available: String },

    /// The scorer failed or returned an out-of-range value for one record.
    #[error("scoring failed for record {index}: {reason}")]
    Scoring { index: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SentimentError {
    /// True for errors caused by the caller's input rather than the scorer.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            SentimentError::MalformedInput { .. }
                | SentimentError::MissingColumn { .. }
                | SentimentError::Csv(_)
        )
    }
}

use sentiscan_core::SentimentLabel;
use serde::Serialize;

/// One raw input cell. `None` stands for a missing or non-text value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRecord(Option<String>);

impl TextRecord {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    #[must_use]
    pub fn missing() -> Self {
        Self(None)
    }

    /// The text handed to the cleaner: missing and whitespace-only cells
    /// become the empty string.
    #[must_use]
    pub fn coerced(&self) -> &str {
        match self.0.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => "",
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

impl From<&str> for TextRecord {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for TextRecord {
    fn from(value: String) -> Self {
        Self(Some(value))
    }
}

impl From<Option<String>> for TextRecord {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<Option<&str>> for TextRecord {
    fn from(value: Option<&str>) -> Self {
        Self(value.map(str::to_owned))
    }
}

/// Raw scorer output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentScore {
    /// In `[-1.0, 1.0]`.
    pub polarity: f64,
    /// In `[0.0, 1.0]`.
    pub subjectivity: f64,
}

impl SentimentScore {
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    #[must_use]
    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    #[must_use]
    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

/// Output row of the pipeline. `index` is the input position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedRecord {
    pub index: usize,
    pub cleaned: String,
    pub sentiment: SentimentResult,
}

/// Batch-level rollup of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean polarity across all records. 0.0 for an empty batch.
    pub mean_polarity: f64,
    /// Mean subjectivity across all records. 0.0 for an empty batch.
    pub mean_subjectivity: f64,
}

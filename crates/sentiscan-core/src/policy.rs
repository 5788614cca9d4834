//! Labeling policies and the cleaning/analysis knobs shared by every caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse sentiment bucket assigned to a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rule that turns a polarity score into a [`SentimentLabel`].
///
/// Serialized as `wide-band` / `zero-band`; deserialization accepts every
/// spelling [`FromStr`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThresholdPolicy {
    /// Only `|polarity| >= 0.5` is labeled non-neutral.
    WideBand,
    /// Any nonzero polarity is labeled by its sign.
    ZeroBand,
}

impl ThresholdPolicy {
    const WIDE_BAND_CUTOFF: f64 = 0.5;

    /// Label a polarity score. NaN is always `Neutral`.
    #[must_use]
    pub fn label(self, polarity: f64) -> SentimentLabel {
        match self {
            ThresholdPolicy::WideBand => {
                if polarity >= Self::WIDE_BAND_CUTOFF {
                    SentimentLabel::Positive
                } else if polarity <= -Self::WIDE_BAND_CUTOFF {
                    SentimentLabel::Negative
                } else {
                    SentimentLabel::Neutral
                }
            }
            ThresholdPolicy::ZeroBand => {
                if polarity > 0.0 {
                    SentimentLabel::Positive
                } else if polarity < 0.0 {
                    SentimentLabel::Negative
                } else {
                    SentimentLabel::Neutral
                }
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThresholdPolicy::WideBand => "wide-band",
            ThresholdPolicy::ZeroBand => "zero-band",
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ThresholdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide-band" | "wide_band" | "wideband" => Ok(ThresholdPolicy::WideBand),
            "zero-band" | "zero_band" | "zeroband" => Ok(ThresholdPolicy::ZeroBand),
            other => Err(format!(
                "unknown threshold policy '{other}' (expected wide-band or zero-band)"
            )),
        }
    }
}

impl TryFrom<String> for ThresholdPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThresholdPolicy> for String {
    fn from(value: ThresholdPolicy) -> Self {
        value.as_str().to_string()
    }
}

/// Toggles understood by the text cleaner. Each flag enables one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CleanOptions {
    /// Collapse whitespace runs to a single space and trim the ends.
    pub extra_spaces: bool,
    /// Drop English stopwords.
    pub stopwords: bool,
    pub lowercase: bool,
    /// Drop digit runs.
    pub numbers: bool,
    /// Drop ASCII punctuation.
    pub punctuation: bool,
}

impl CleanOptions {
    /// Every cleaning step enabled.
    #[must_use]
    pub fn all() -> Self {
        Self {
            extra_spaces: true,
            stopwords: true,
            lowercase: true,
            numbers: true,
            punctuation: true,
        }
    }

    /// Every cleaning step disabled; the cleaner returns its input unchanged.
    #[must_use]
    pub fn none() -> Self {
        Self {
            extra_spaces: false,
            stopwords: false,
            lowercase: false,
            numbers: false,
            punctuation: false,
        }
    }

    #[must_use]
    pub fn with_stopwords(mut self, remove: bool) -> Self {
        self.stopwords = remove;
        self
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Named presets for the two historical configurations of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisVariant {
    /// Wide-band labeling with stopword removal.
    Conservative,
    /// Zero-band labeling, stopwords kept, subjectivity exported.
    Sensitive,
}

impl AnalysisVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisVariant::Conservative => "conservative",
            AnalysisVariant::Sensitive => "sensitive",
        }
    }

    #[must_use]
    pub fn config(self) -> AnalysisConfig {
        match self {
            AnalysisVariant::Conservative => AnalysisConfig::wide_band(),
            AnalysisVariant::Sensitive => AnalysisConfig::zero_band(),
        }
    }
}

impl fmt::Display for AnalysisVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AnalysisVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(AnalysisVariant::Conservative),
            "sensitive" => Ok(AnalysisVariant::Sensitive),
            other => Err(format!(
                "unknown analysis variant '{other}' (expected conservative or sensitive)"
            )),
        }
    }
}

/// Full configuration of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub clean: CleanOptions,
    pub policy: ThresholdPolicy,
    /// Whether exports carry a `subjectivity` column.
    pub include_subjectivity: bool,
}

impl AnalysisConfig {
    #[must_use]
    pub fn wide_band() -> Self {
        Self {
            clean: CleanOptions::all(),
            policy: ThresholdPolicy::WideBand,
            include_subjectivity: false,
        }
    }

    #[must_use]
    pub fn zero_band() -> Self {
        Self {
            clean: CleanOptions::all().with_stopwords(false),
            policy: ThresholdPolicy::ZeroBand,
            include_subjectivity: true,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::wide_band()
    }
}

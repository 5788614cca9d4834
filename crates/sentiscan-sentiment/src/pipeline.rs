//! Clean → score → label over a batch of text records.

use sentiscan_core::{AnalysisConfig, SentimentLabel};

use crate::cleaner::{DefaultCleaner, TextCleaner};
use crate::error::SentimentError;
use crate::scorer::{LexiconScorer, SentimentScorer};
use crate::types::{AnalysisSummary, AnalyzedRecord, SentimentResult, SentimentScore, TextRecord};

/// Stateless batch pipeline over a cleaner and a scorer.
#[derive(Debug, Clone)]
pub struct TextSentimentPipeline<C = DefaultCleaner, S = LexiconScorer> {
    cleaner: C,
    scorer: S,
    config: AnalysisConfig,
}

impl TextSentimentPipeline {
    /// Pipeline using the built-in cleaner and lexicon scorer.
    #[must_use]
    pub fn with_defaults(config: AnalysisConfig) -> Self {
        Self::new(DefaultCleaner, LexiconScorer, config)
    }
}

impl<C: TextCleaner, S: SentimentScorer> TextSentimentPipeline<C, S> {
    #[must_use]
    pub fn new(cleaner: C, scorer: S, config: AnalysisConfig) -> Self {
        Self {
            cleaner,
            scorer,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a batch of records.
    ///
    /// 1. Coerce missing or blank records to the empty string.
    /// 2. Clean with the configured [`CleanOptions`](sentiscan_core::CleanOptions).
    /// 3. Score the cleaned text.
    /// 4. Label the polarity under the configured policy.
    ///
    /// The output has one entry per input, in input order.
    ///
    /// # Errors
    ///
    /// Fails fast with [`SentimentError::Scoring`] on the first record the
    /// scorer rejects or scores out of range; no partial output is returned.
    pub fn analyze<I, R>(&self, records: I) -> Result<Vec<AnalyzedRecord>, SentimentError>
    where
        I: IntoIterator<Item = R>,
        R: Into<TextRecord>,
    {
        let records = records.into_iter();
        let mut out = Vec::with_capacity(records.size_hint().0);
        let mut missing = 0_usize;

        tracing::debug!(
            policy = %self.config.policy,
            stopwords = self.config.clean.stopwords,
            "starting sentiment batch"
        );

        for (index, record) in records.enumerate() {
            let record: TextRecord = record.into();
            if record.is_missing() {
                missing += 1;
            }

            let cleaned = self.cleaner.clean(record.coerced(), &self.config.clean);
            let score = self.checked_score(&cleaned).map_err(|e| match e {
                SentimentError::Scoring { reason, .. } => SentimentError::Scoring { index, reason },
                other => other,
            })?;

            out.push(AnalyzedRecord {
                index,
                cleaned,
                sentiment: self.to_result(score),
            });
        }

        let summary = summarize(&out);
        tracing::info!(
            records = summary.total,
            missing,
            positive = summary.positive,
            negative = summary.negative,
            neutral = summary.neutral,
            policy = %self.config.policy,
            "sentiment batch complete"
        );
        Ok(out)
    }

    /// Score a single raw string without cleaning it.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Scoring`] (index 0) if the scorer fails.
    pub fn score_text(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        let score = self.checked_score(text)?;
        Ok(self.to_result(score))
    }

    /// Clean a single raw string with the configured options.
    #[must_use]
    pub fn clean_text(&self, text: &str) -> String {
        self.cleaner.clean(text, &self.config.clean)
    }

    fn checked_score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        let score = self.scorer.score(text)?;
        if !(-1.0..=1.0).contains(&score.polarity) {
            return Err(SentimentError::Scoring {
                index: 0,
                reason: format!("polarity {} outside [-1, 1]", score.polarity),
            });
        }
        if !(0.0..=1.0).contains(&score.subjectivity) {
            return Err(SentimentError::Scoring {
                index: 0,
                reason: format!("subjectivity {} outside [0, 1]", score.subjectivity),
            });
        }
        Ok(score)
    }

    fn to_result(&self, score: SentimentScore) -> SentimentResult {
        SentimentResult {
            polarity: score.polarity(),
            subjectivity: score.subjectivity(),
            label: self.config.policy.label(score.polarity()),
        }
    }
}

/// Roll up label counts and mean scores for a finished batch.
#[must_use]
pub fn summarize(records: &[AnalyzedRecord]) -> AnalysisSummary {
    if records.is_empty() {
        return AnalysisSummary::default();
    }

    let mut summary = AnalysisSummary {
        total: records.len(),
        ..AnalysisSummary::default()
    };
    let mut polarity_sum = 0.0_f64;
    let mut subjectivity_sum = 0.0_f64;

    for record in records {
        match record.sentiment.label {
            SentimentLabel::Positive => summary.positive += 1,
            SentimentLabel::Negative => summary.negative += 1,
            SentimentLabel::Neutral => summary.neutral += 1,
        }
        polarity_sum += record.sentiment.polarity;
        subjectivity_sum += record.sentiment.subjectivity;
    }

    #[allow(clippy::cast_precision_loss)]
    let denom = records.len() as f64;
    summary.mean_polarity = polarity_sum / denom;
    summary.mean_subjectivity = subjectivity_sum / denom;
    summary
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

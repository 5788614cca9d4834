//! Text sentiment pipeline for sentiscan.
//!
//! Cleans raw text records, scores them with a pattern-style lexicon
//! (polarity and subjectivity), labels the polarity under a threshold policy,
//! and converts tables of records to and from CSV.

pub mod cleaner;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod table;
pub mod types;

mod stopwords;

pub use cleaner::{DefaultCleaner, TextCleaner};
pub use error::SentimentError;
pub use pipeline::{summarize, TextSentimentPipeline};
pub use scorer::{LexiconScorer, SentimentScorer};
pub use table::{export_csv, parse_export, read_text_column, ExportRow};
pub use types::{AnalysisSummary, AnalyzedRecord, SentimentResult, SentimentScore, TextRecord};

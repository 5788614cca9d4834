//! CSV import of text columns and export of analyzed records.

use std::io::Read;

use sentiscan_core::SentimentLabel;
use serde::Deserialize;

use crate::error::SentimentError;
use crate::types::{AnalyzedRecord, TextRecord};

/// Read the named column of a headed CSV table.
///
/// Other columns are ignored. Rows shorter than the header yield a missing
/// record rather than an error, so every data row maps to exactly one
/// [`TextRecord`].
///
/// # Errors
///
/// Returns [`SentimentError::MissingColumn`] if the header lacks `column`, and
/// [`SentimentError::MalformedInput`] if the data cannot be parsed as CSV.
pub fn read_text_column<R: Read>(
    reader: R,
    column: &str,
) -> Result<Vec<TextRecord>, SentimentError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(malformed)?.clone();
    let Some(position) = headers.iter().position(|h| h.trim() == column) else {
        return Err(SentimentError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        });
    };

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| SentimentError::MalformedInput {
            reason: format!("row {}: {e}", row + 1),
        })?;
        records.push(TextRecord::from(record.get(position)));
    }

    tracing::debug!(column, rows = records.len(), "read text column");
    Ok(records)
}

/// Serialize analyzed records to UTF-8 CSV bytes.
///
/// Columns are `index,text,sentiment,score` plus `subjectivity` when
/// requested. `index` is the original row position.
///
/// # Errors
///
/// Returns [`SentimentError::Csv`] if the writer fails.
pub fn export_csv(
    records: &[AnalyzedRecord],
    include_subjectivity: bool,
) -> Result<Vec<u8>, SentimentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["index", "text", "sentiment", "score"];
    if include_subjectivity {
        header.push("subjectivity");
    }
    writer.write_record(&header)?;

    for record in records {
        let index = record.index.to_string();
        let score = record.sentiment.polarity.to_string();
        let subjectivity = record.sentiment.subjectivity.to_string();
        let mut row = vec![
            index.as_str(),
            record.cleaned.as_str(),
            record.sentiment.label.as_str(),
            score.as_str(),
        ];
        if include_subjectivity {
            row.push(subjectivity.as_str());
        }
        writer.write_record(&row)?;
    }

    writer.into_inner().map_err(|e| {
        let io = std::io::Error::new(e.error().kind(), e.error().to_string());
        SentimentError::Csv(io.into())
    })
}

/// One row of an exported table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportRow {
    pub index: usize,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub score: f64,
    #[serde(default)]
    pub subjectivity: Option<f64>,
}

/// Parse bytes produced by [`export_csv`].
///
/// # Errors
///
/// Returns [`SentimentError::MalformedInput`] if the bytes are not a valid export.
pub fn parse_export(bytes: &[u8]) -> Result<Vec<ExportRow>, SentimentError> {
    let mut reader = csv::Reader::from_reader(bytes);
    reader
        .deserialize()
        .collect::<Result<Vec<ExportRow>, _>>()
        .map_err(malformed)
}

#[allow(clippy::needless_pass_by_value)]
fn malformed(e: csv::Error) -> SentimentError {
    SentimentError::MalformedInput {
        reason: e.to_string(),
    }
}

//! Thin HTTP wrappers around [`TextSentimentPipeline`].

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use sentiscan_core::{AnalysisConfig, AnalysisVariant, CleanOptions, ThresholdPolicy};
use sentiscan_sentiment::{
    export_csv, read_text_column, summarize, AnalysisSummary, AnalyzedRecord, DefaultCleaner,
    TextCleaner, TextRecord, TextSentimentPipeline,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_sentiment_error, ApiError, ApiResponse, AppState, ResponseMeta};

const EXPORT_FILENAME: &str = "sentiment.csv";

/// Per-request adjustments layered over the configured analysis.
#[derive(Debug, Default, Deserialize)]
pub(super) struct AnalysisOverrides {
    pub variant: Option<AnalysisVariant>,
    pub policy: Option<ThresholdPolicy>,
    pub remove_stopwords: Option<bool>,
    pub subjectivity: Option<bool>,
}

impl AnalysisOverrides {
    fn resolve(&self, base: &AnalysisConfig) -> AnalysisConfig {
        let mut analysis = self.variant.map_or(*base, AnalysisVariant::config);
        if let Some(policy) = self.policy {
            analysis.policy = policy;
        }
        if let Some(remove) = self.remove_stopwords {
            analysis.clean.stopwords = remove;
        }
        if let Some(include) = self.subjectivity {
            analysis.include_subjectivity = include;
        }
        analysis
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TextAnalyzeRequest {
    pub text: String,
    pub policy: Option<ThresholdPolicy>,
}

#[derive(Debug, Serialize)]
pub(super) struct TextAnalyzeData {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: sentiscan_core::SentimentLabel,
    pub policy: ThresholdPolicy,
}

#[derive(Debug, Deserialize)]
pub(super) struct CleanRequest {
    pub text: String,
    pub options: Option<CleanOptions>,
}

#[derive(Debug, Serialize)]
pub(super) struct CleanData {
    pub cleaned: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RecordsRequest {
    pub records: Vec<Value>,
    #[serde(flatten)]
    pub overrides: AnalysisOverrides,
}

#[derive(Debug, Serialize)]
pub(super) struct RecordsData {
    pub records: Vec<AnalyzedRecord>,
    pub summary: AnalysisSummary,
}

#[derive(Debug, Deserialize)]
pub(super) struct CsvQuery {
    pub column: Option<String>,
    pub variant: Option<AnalysisVariant>,
    pub policy: Option<ThresholdPolicy>,
    pub remove_stopwords: Option<bool>,
    pub subjectivity: Option<bool>,
}

impl CsvQuery {
    fn overrides(&self) -> AnalysisOverrides {
        AnalysisOverrides {
            variant: self.variant,
            policy: self.policy,
            remove_stopwords: self.remove_stopwords,
            subjectivity: self.subjectivity,
        }
    }
}

/// Score one free-text string as typed, without cleaning.
pub(super) async fn analyze_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<TextAnalyzeRequest>,
) -> Result<Json<ApiResponse<TextAnalyzeData>>, ApiError> {
    let mut analysis = state.config.analysis;
    if let Some(policy) = body.policy {
        analysis.policy = policy;
    }

    let result = TextSentimentPipeline::with_defaults(analysis)
        .score_text(&body.text)
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: TextAnalyzeData {
            polarity: result.polarity,
            subjectivity: result.subjectivity,
            label: result.label,
            policy: analysis.policy,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn clean_text(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CleanRequest>,
) -> Json<ApiResponse<CleanData>> {
    let options = body.options.unwrap_or(state.config.analysis.clean);
    Json(ApiResponse {
        data: CleanData {
            cleaned: DefaultCleaner.clean(&body.text, &options),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Analyze a JSON array of arbitrary values. Non-string values are treated
/// as missing text.
pub(super) async fn analyze_records(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<RecordsRequest>,
) -> Result<Json<ApiResponse<RecordsData>>, ApiError> {
    let analysis = body.overrides.resolve(&state.config.analysis);
    let records = body.records.into_iter().map(coerce_value);

    let analyzed = TextSentimentPipeline::with_defaults(analysis)
        .analyze(records)
        .map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;
    let summary = summarize(&analyzed);

    Ok(Json(ApiResponse {
        data: RecordsData {
            records: analyzed,
            summary,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Analyze an uploaded CSV body and return the annotated table as a download.
pub(super) async fn analyze_csv(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CsvQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let analysis = query.overrides().resolve(&state.config.analysis);
    let column = query
        .column
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| state.config.text_column.clone());

    let job = tokio::task::spawn_blocking(move || {
        let records = read_text_column(body.as_ref(), &column)?;
        let analyzed = TextSentimentPipeline::with_defaults(analysis).analyze(records)?;
        let summary = summarize(&analyzed);
        let bytes = export_csv(&analyzed, analysis.include_subjectivity)?;
        Ok::<_, sentiscan_sentiment::SentimentError>((bytes, summary))
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "csv analysis task failed");
        ApiError::new(req_id.0.clone(), "internal_error", "csv analysis task failed")
    })?;

    let (bytes, summary) = job.map_err(|e| map_sentiment_error(req_id.0.clone(), &e))?;

    tracing::info!(
        request_id = %req_id.0,
        rows = summary.total,
        positive = summary.positive,
        negative = summary.negative,
        neutral = summary.neutral,
        policy = %analysis.policy,
        "csv analyzed"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

fn coerce_value(value: Value) -> TextRecord {
    match value {
        Value::String(s) => TextRecord::text(s),
        _ => TextRecord::missing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_string_values_coerce_to_missing() {
        assert_eq!(
            coerce_value(Value::String("hi".into())),
            TextRecord::text("hi")
        );
        for value in [
            Value::Null,
            serde_json::json!(42),
            serde_json::json!(true),
            serde_json::json!(["a"]),
            serde_json::json!({"text": "a"}),
        ] {
            assert!(coerce_value(value).is_missing());
        }
    }

    #[test]
    fn overrides_resolve_over_base() {
        let base = AnalysisConfig::wide_band();
        assert_eq!(AnalysisOverrides::default().resolve(&base), base);

        let overrides = AnalysisOverrides {
            variant: Some(AnalysisVariant::Sensitive),
            policy: Some(ThresholdPolicy::WideBand),
            remove_stopwords: None,
            subjectivity: Some(false),
        };
        let resolved = overrides.resolve(&base);
        assert_eq!(resolved.policy, ThresholdPolicy::WideBand);
        assert!(!resolved.clean.stopwords);
        assert!(!resolved.include_subjectivity);
    }
}

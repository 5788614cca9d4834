//! Command handlers. Each one builds a pipeline and prints its result.

use std::fs::File;
use std::path::Path;

use sentiscan_core::{AnalysisConfig, AnalysisVariant, AppConfig, CleanOptions, ThresholdPolicy};
use sentiscan_sentiment::{
    export_csv, read_text_column, summarize, AnalysisSummary, AnalyzedRecord, DefaultCleaner,
    TextCleaner, TextSentimentPipeline,
};

/// Flags of the `csv` command that adjust the configured analysis.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CsvOverrides {
    pub variant: Option<AnalysisVariant>,
    pub policy: Option<ThresholdPolicy>,
    pub remove_stopwords: Option<bool>,
    pub subjectivity: Option<bool>,
}

/// Collapse an `--x` / `--no-x` flag pair into an optional override.
pub(crate) fn flag_pair(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Apply command-line overrides on top of the configured analysis.
pub(crate) fn resolve_analysis(base: &AnalysisConfig, overrides: CsvOverrides) -> AnalysisConfig {
    let mut analysis = overrides.variant.map_or(*base, AnalysisVariant::config);
    if let Some(policy) = overrides.policy {
        analysis.policy = policy;
    }
    if let Some(remove) = overrides.remove_stopwords {
        analysis.clean.stopwords = remove;
    }
    if let Some(include) = overrides.subjectivity {
        analysis.include_subjectivity = include;
    }
    analysis
}

pub(crate) fn clean_options(
    keep_stopwords: bool,
    keep_numbers: bool,
    keep_punctuation: bool,
    keep_case: bool,
) -> CleanOptions {
    CleanOptions {
        extra_spaces: true,
        stopwords: !keep_stopwords,
        lowercase: !keep_case,
        numbers: !keep_numbers,
        punctuation: !keep_punctuation,
    }
}

/// Score raw text (uncleaned) and print polarity, subjectivity and label.
///
/// # Errors
///
/// Returns an error if the scorer fails.
pub(crate) fn run_text(
    config: &AppConfig,
    text: &str,
    policy: Option<ThresholdPolicy>,
) -> anyhow::Result<()> {
    let mut analysis = config.analysis;
    if let Some(policy) = policy {
        analysis.policy = policy;
    }

    let result = TextSentimentPipeline::with_defaults(analysis).score_text(text)?;
    println!("Polarity: {}", result.polarity);
    println!("Subjectivity: {}", result.subjectivity);
    println!("Sentiment: {} ({})", result.label, analysis.policy);
    Ok(())
}

pub(crate) fn run_clean(text: &str, options: &CleanOptions) {
    println!("{}", DefaultCleaner.clean(text, options));
}

/// Analyze the text column of `input`, write the export to `output`, and
/// print a summary plus the first `preview` rows.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or is malformed, scoring
/// fails, or the export cannot be written.
pub(crate) fn run_csv(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    column: &str,
    overrides: CsvOverrides,
    preview: usize,
) -> anyhow::Result<AnalysisSummary> {
    let analysis = resolve_analysis(&config.analysis, overrides);

    let file = File::open(input)
        .map_err(|e| anyhow::anyhow!("failed to open {}: {e}", input.display()))?;
    let records = read_text_column(file, column)?;

    let pipeline = TextSentimentPipeline::with_defaults(analysis);
    let analyzed = pipeline.analyze(records)?;
    let summary = summarize(&analyzed);

    let bytes = export_csv(&analyzed, analysis.include_subjectivity)?;
    std::fs::write(output, bytes)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", output.display()))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        policy = %analysis.policy,
        rows = summary.total,
        positive = summary.positive,
        negative = summary.negative,
        neutral = summary.neutral,
        "csv analysis complete"
    );

    print!("{}", format_preview(&analyzed, preview, analysis.include_subjectivity));
    println!(
        "{} rows: {} positive, {} negative, {} neutral (mean polarity {:.3})",
        summary.total,
        summary.positive,
        summary.negative,
        summary.neutral,
        summary.mean_polarity
    );
    println!("wrote {}", output.display());

    Ok(summary)
}

/// Render the first `limit` records as a fixed-width table.
pub(crate) fn format_preview(
    records: &[AnalyzedRecord],
    limit: usize,
    include_subjectivity: bool,
) -> String {
    const TEXT_WIDTH: usize = 48;

    let mut out = String::new();
    if limit == 0 || records.is_empty() {
        return out;
    }

    out.push_str(&format!(
        "{:<7}{:<50}{:<10}{:>8}",
        "INDEX", "TEXT", "SENTIMENT", "SCORE"
    ));
    if include_subjectivity {
        out.push_str(&format!("{:>14}", "SUBJECTIVITY"));
    }
    out.push('\n');

    for record in records.iter().take(limit) {
        let text = truncate(&record.cleaned, TEXT_WIDTH);
        out.push_str(&format!(
            "{:<7}{:<50}{:<10}{:>8.3}",
            record.index, text, record.sentiment.label, record.sentiment.polarity
        ));
        if include_subjectivity {
            out.push_str(&format!("{:>14.3}", record.sentiment.subjectivity));
        }
        out.push('\n');
    }

    if records.len() > limit {
        out.push_str(&format!("... {} more rows\n", records.len() - limit));
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

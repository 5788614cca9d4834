use sentiscan_core::{AnalysisConfig, AppConfig, Environment, SentimentLabel};
use sentiscan_sentiment::parse_export;

use super::*;
use crate::analyze::{flag_pair, format_preview, resolve_analysis, run_csv, CsvOverrides};

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
        log_level: "warn".to_string(),
        variant: AnalysisVariant::Conservative,
        analysis: AnalysisConfig::wide_band(),
        text_column: "text".to_string(),
        preview_rows: 100,
        max_upload_bytes: 1024 * 1024,
    }
}

// -----------------------------------------------------------------------
// argument parsing
// -----------------------------------------------------------------------

#[test]
fn parses_text_command() {
    let cli = Cli::try_parse_from(["sentiscan", "text", "I love this"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Text { ref text, policy: None } if text == "I love this"
    ));
}

#[test]
fn parses_text_command_with_policy() {
    let cli =
        Cli::try_parse_from(["sentiscan", "text", "meh", "--policy", "zero-band"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Text {
            policy: Some(PolicyArg::ZeroBand),
            ..
        }
    ));
}

#[test]
fn parses_clean_flags() {
    let cli = Cli::try_parse_from([
        "sentiscan",
        "clean",
        "Some TEXT 42",
        "--keep-stopwords",
        "--keep-case",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Clean {
            keep_stopwords: true,
            keep_numbers: false,
            keep_punctuation: false,
            keep_case: true,
            ..
        }
    ));
}

#[test]
fn parses_csv_defaults() {
    let cli = Cli::try_parse_from(["sentiscan", "csv", "reviews.csv"]).unwrap();
    match cli.command {
        Commands::Csv {
            input,
            output,
            column,
            variant,
            policy,
            keep_stopwords,
            remove_stopwords,
            subjectivity,
            no_subjectivity,
            preview,
        } => {
            assert_eq!(input, PathBuf::from("reviews.csv"));
            assert_eq!(output, PathBuf::from("sentiment.csv"));
            assert!(column.is_none());
            assert!(variant.is_none());
            assert!(policy.is_none());
            assert!(!keep_stopwords);
            assert!(!remove_stopwords);
            assert!(!subjectivity);
            assert!(!no_subjectivity);
            assert!(preview.is_none());
        }
        other => panic!("expected csv command, got {other:?}"),
    }
}

#[test]
fn parses_csv_with_variant_and_overrides() {
    let cli = Cli::try_parse_from([
        "sentiscan",
        "csv",
        "in.csv",
        "-o",
        "out.csv",
        "--column",
        "review",
        "--variant",
        "sensitive",
        "--policy",
        "wide-band",
        "--preview",
        "5",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Csv {
            variant: Some(VariantArg::Sensitive),
            policy: Some(PolicyArg::WideBand),
            preview: Some(5),
            column: Some(ref c),
            ..
        } if c == "review"
    ));
}

#[test]
fn parses_csv_negating_flags() {
    let cli = Cli::try_parse_from([
        "sentiscan",
        "csv",
        "in.csv",
        "--variant",
        "sensitive",
        "--remove-stopwords",
        "--no-subjectivity",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Csv {
            remove_stopwords: true,
            no_subjectivity: true,
            keep_stopwords: false,
            subjectivity: false,
            ..
        }
    ));
}

#[test]
fn rejects_contradictory_csv_flags() {
    assert!(Cli::try_parse_from([
        "sentiscan",
        "csv",
        "in.csv",
        "--keep-stopwords",
        "--remove-stopwords",
    ])
    .is_err());
    assert!(Cli::try_parse_from([
        "sentiscan",
        "csv",
        "in.csv",
        "--subjectivity",
        "--no-subjectivity",
    ])
    .is_err());
}

#[test]
fn rejects_unknown_policy() {
    assert!(Cli::try_parse_from(["sentiscan", "text", "x", "--policy", "median"]).is_err());
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["sentiscan"]).is_err());
}

// -----------------------------------------------------------------------
// handlers
// -----------------------------------------------------------------------

#[test]
fn overrides_layer_on_variant() {
    let base = AnalysisConfig::wide_band();

    assert_eq!(resolve_analysis(&base, CsvOverrides::default()), base);

    let sensitive = resolve_analysis(
        &base,
        CsvOverrides {
            variant: Some(AnalysisVariant::Sensitive),
            ..CsvOverrides::default()
        },
    );
    assert_eq!(sensitive, AnalysisConfig::zero_band());

    let tweaked = resolve_analysis(
        &base,
        CsvOverrides {
            policy: Some(ThresholdPolicy::ZeroBand),
            remove_stopwords: Some(false),
            subjectivity: Some(true),
            ..CsvOverrides::default()
        },
    );
    assert_eq!(tweaked.policy, ThresholdPolicy::ZeroBand);
    assert!(!tweaked.clean.stopwords);
    assert!(tweaked.include_subjectivity);
}

#[test]
fn flag_pairs_map_to_overrides() {
    assert_eq!(flag_pair(false, false), None);
    assert_eq!(flag_pair(true, false), Some(true));
    assert_eq!(flag_pair(false, true), Some(false));
}

#[test]
fn overrides_can_undo_sensitive_preset() {
    let restored = resolve_analysis(
        &AnalysisConfig::wide_band(),
        CsvOverrides {
            variant: Some(AnalysisVariant::Sensitive),
            remove_stopwords: Some(true),
            subjectivity: Some(false),
            ..CsvOverrides::default()
        },
    );
    assert_eq!(restored.policy, ThresholdPolicy::ZeroBand);
    assert!(restored.clean.stopwords);
    assert!(!restored.include_subjectivity);
}

#[test]
fn run_csv_writes_annotated_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("reviews.csv");
    let output = dir.path().join("sentiment.csv");
    std::fs::write(
        &input,
        "id,review\n1,This is terrible.\n2,\n3,Excellent value!\n",
    )
    .expect("write input");

    let summary = run_csv(
        &test_config(),
        &input,
        &output,
        "review",
        CsvOverrides {
            subjectivity: Some(true),
            ..CsvOverrides::default()
        },
        0,
    )
    .expect("csv run");

    assert_eq!(summary.total, 3);
    assert_eq!(summary.positive, 1);
    assert_eq!(summary.negative, 1);
    assert_eq!(summary.neutral, 1);

    let rows = parse_export(&std::fs::read(&output).expect("read output")).expect("parse");
    let labels: Vec<SentimentLabel> = rows.iter().map(|r| r.sentiment).collect();
    assert_eq!(
        labels,
        vec![
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Positive
        ]
    );
    assert_eq!(rows[0].text, "terrible");
    assert!(rows.iter().all(|r| r.subjectivity.is_some()));
}

#[test]
fn run_csv_fails_on_missing_column() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("reviews.csv");
    std::fs::write(&input, "id,body\n1,hello\n").expect("write input");

    let err = run_csv(
        &test_config(),
        &input,
        &dir.path().join("out.csv"),
        "text",
        CsvOverrides::default(),
        0,
    )
    .unwrap_err();
    assert!(err.to_string().contains("\"text\""), "got: {err}");
}

#[test]
fn run_csv_fails_on_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = run_csv(
        &test_config(),
        &dir.path().join("nope.csv"),
        &dir.path().join("out.csv"),
        "text",
        CsvOverrides::default(),
        0,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("failed to open"), "got: {err}");
}

#[test]
fn preview_is_limited_and_reports_remainder() {
    let pipeline = sentiscan_sentiment::TextSentimentPipeline::with_defaults(
        AnalysisConfig::wide_band(),
    );
    let analyzed = pipeline
        .analyze(["great", "awful", "fine", "nothing"])
        .unwrap();

    let preview = format_preview(&analyzed, 2, false);
    let lines: Vec<&str> = preview.lines().collect();
    assert_eq!(lines.len(), 4, "header + 2 rows + remainder: {preview}");
    assert!(lines[0].starts_with("INDEX"));
    assert!(lines[1].contains("Positive"));
    assert!(lines[2].contains("Negative"));
    assert_eq!(lines[3], "... 2 more rows");
    assert!(!preview.contains("SUBJECTIVITY"));

    assert!(format_preview(&analyzed, 0, true).is_empty());
}

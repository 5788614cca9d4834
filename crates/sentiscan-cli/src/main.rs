mod analyze;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sentiscan_core::{AnalysisVariant, ThresholdPolicy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sentiscan")]
#[command(about = "Score text sentiment and label CSV records")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print polarity, subjectivity and label for a piece of text
    Text {
        text: String,

        /// Labeling policy (defaults to the configured variant)
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Print the cleaned form of a piece of text
    Clean {
        text: String,

        #[arg(long)]
        keep_stopwords: bool,

        #[arg(long)]
        keep_numbers: bool,

        #[arg(long)]
        keep_punctuation: bool,

        /// Do not lowercase
        #[arg(long)]
        keep_case: bool,
    },
    /// Analyze the text column of a CSV file and write the annotated table
    Csv {
        input: PathBuf,

        /// Where to write the annotated CSV
        #[arg(long, short, default_value = "sentiment.csv")]
        output: PathBuf,

        /// Name of the text column (defaults to `SENTISCAN_TEXT_COLUMN`)
        #[arg(long)]
        column: Option<String>,

        /// Named preset to start from
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Override the preset's labeling policy
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Keep stopwords when cleaning
        #[arg(long, conflicts_with = "remove_stopwords")]
        keep_stopwords: bool,

        /// Remove stopwords when cleaning
        #[arg(long)]
        remove_stopwords: bool,

        /// Add a subjectivity column to the export
        #[arg(long, conflicts_with = "no_subjectivity")]
        subjectivity: bool,

        /// Leave the subjectivity column out of the export
        #[arg(long)]
        no_subjectivity: bool,

        /// Rows to print after analysis (defaults to `SENTISCAN_PREVIEW_ROWS`)
        #[arg(long)]
        preview: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    WideBand,
    ZeroBand,
}

impl From<PolicyArg> for ThresholdPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::WideBand => ThresholdPolicy::WideBand,
            PolicyArg::ZeroBand => ThresholdPolicy::ZeroBand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Conservative,
    Sensitive,
}

impl From<VariantArg> for AnalysisVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Conservative => AnalysisVariant::Conservative,
            VariantArg::Sensitive => AnalysisVariant::Sensitive,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sentiscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Text { text, policy } => {
            analyze::run_text(&config, &text, policy.map(Into::into))?;
        }
        Commands::Clean {
            text,
            keep_stopwords,
            keep_numbers,
            keep_punctuation,
            keep_case,
        } => {
            let options = analyze::clean_options(
                keep_stopwords,
                keep_numbers,
                keep_punctuation,
                keep_case,
            );
            analyze::run_clean(&text, &options);
        }
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
            let overrides = analyze::CsvOverrides {
                variant: variant.map(Into::into),
                policy: policy.map(Into::into),
                remove_stopwords: analyze::flag_pair(remove_stopwords, keep_stopwords),
                subjectivity: analyze::flag_pair(subjectivity, no_subjectivity),
            };
            let column = column.unwrap_or_else(|| config.text_column.clone());
            let preview = preview.unwrap_or(config.preview_rows);
            analyze::run_csv(&config, &input, &output, &column, overrides, preview)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;

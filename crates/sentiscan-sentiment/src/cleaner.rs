//! Text normalization applied before scoring.

use std::sync::LazyLock;

use regex::Regex;
use sentiscan_core::CleanOptions;

use crate::stopwords::is_stopword;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digits regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Normalizes raw text according to a set of [`CleanOptions`].
///
/// Implementations must be pure and must map the empty string to the empty
/// string.
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str, options: &CleanOptions) -> String;
}

/// Regex-based English cleaner.
///
/// Steps run in a fixed order: lowercase, strip digit runs, strip ASCII
/// punctuation, drop stopwords, collapse whitespace. Collapsing runs last so
/// that `clean(clean(s)) == clean(s)` for every option set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCleaner;

impl TextCleaner for DefaultCleaner {
    fn clean(&self, text: &str, options: &CleanOptions) -> String {
        let mut out = text.to_string();

        if options.lowercase {
            out = out.to_lowercase();
        }

        if options.numbers {
            out = DIGITS.replace_all(&out, "").into_owned();
        }

        if options.punctuation {
            out.retain(|c| !c.is_ascii_punctuation());
        }

        if options.stopwords {
            out = out
                .split_whitespace()
                .filter(|token| !is_stopword(token))
                .collect::<Vec<_>>()
                .join(" ");
        }

        if options.extra_spaces {
            out = WHITESPACE.replace_all(out.trim(), " ").into_owned();
        }

        out
    }
}

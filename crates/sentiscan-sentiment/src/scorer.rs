//! Lexicon scorer producing polarity and subjectivity.

use crate::error::SentimentError;
use crate::types::SentimentScore;

/// Scores a string. Empty input must succeed with a neutral score.
pub trait SentimentScorer: Send + Sync {
    /// # Errors
    ///
    /// Implementations return [`SentimentError::Scoring`] when the text cannot
    /// be scored.
    fn score(&self, text: &str) -> Result<SentimentScore, SentimentError>;
}

/// Word weights as `(word, polarity, subjectivity)`.
///
/// Keys are lowercase single words with apostrophes removed. Polarity is in
/// `[-1.0, 1.0]`, subjectivity in `[0.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("pleased", 0.5, 1.0),
    ("satisfied", 0.5, 1.0),
    ("beautiful", 0.85, 1.0),
    ("brilliant", 0.9, 1.0),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("fun", 0.3, 0.2),
    ("interesting", 0.5, 0.5),
    ("helpful", 0.5, 0.5),
    ("recommend", 0.3, 0.3),
    ("fine", 0.4167, 0.5),
    ("ok", 0.5, 0.5),
    ("okay", 0.5, 0.5),
    ("positive", 0.2273, 0.5455),
    ("delicious", 1.0, 1.0),
    ("friendly", 0.375, 0.5),
    ("easy", 0.4333, 0.8333),
    ("fast", 0.2, 0.6),
    ("clean", 0.3667, 0.6667),
    ("comfortable", 0.4, 0.7),
    ("impressive", 1.0, 1.0),
    ("reliable", 0.5, 0.6),
    // Negative
    ("bad", -0.7, 0.6667),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("boring", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("broken", -0.4, 0.4),
    ("useless", -0.5, 0.2),
    ("slow", -0.3, 0.4),
    ("wrong", -0.5, 0.9),
    ("annoying", -0.8, 0.9),
    ("stupid", -0.8, 1.0),
    ("rude", -0.3, 0.6),
    ("difficult", -0.5, 1.0),
    ("negative", -0.3, 0.4),
    ("dirty", -0.6, 0.8),
    ("expensive", -0.5, 0.7),
    ("failed", -0.5, 0.3),
    ("nasty", -1.0, 1.0),
    ("mediocre", -0.3, 0.5),
];

/// Words that scale the weight of the next sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("highly", 1.3),
    ("super", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("quite", 1.1),
    ("fairly", 0.9),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
];

/// Words that flip the polarity of the next sentiment word.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "without", "hardly", "cannot", "cant", "dont",
    "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "wouldnt", "shouldnt",
    "couldnt", "aint",
];

/// Tokens that do not break a pending negation or intensifier.
const TRANSPARENT: &[&str] = &["a", "an", "the", "be", "been", "is", "was", "at", "all"];

/// Negated polarity is flipped and dampened by this factor.
const NEGATION_FACTOR: f64 = -0.5;

/// Pattern-style averaging scorer.
///
/// Every lexicon hit contributes its polarity and subjectivity, scaled by any
/// preceding intensifiers and flipped by a preceding negation. The result is
/// the mean of all contributions; text without lexicon words scores neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<SentimentScore, SentimentError> {
        let mut polarity_sum = 0.0_f64;
        let mut subjectivity_sum = 0.0_f64;
        let mut hits = 0_u32;

        let mut intensity = 1.0_f64;
        let mut negated = false;

        for raw in text.split_whitespace() {
            let word = normalize_token(raw);
            if word.is_empty() {
                continue;
            }

            if NEGATIONS.contains(&word.as_str()) {
                negated = true;
                continue;
            }

            if let Some(factor) = lookup_intensifier(&word) {
                intensity *= factor;
                continue;
            }

            if let Some((polarity, subjectivity)) = lookup_word(&word) {
                let mut p = polarity * intensity;
                if negated {
                    p *= NEGATION_FACTOR;
                }
                polarity_sum += p.clamp(-1.0, 1.0);
                subjectivity_sum += (subjectivity * intensity).clamp(0.0, 1.0);
                hits += 1;
            } else if TRANSPARENT.contains(&word.as_str()) {
                continue;
            }

            intensity = 1.0;
            negated = false;
        }

        if hits == 0 {
            return Ok(SentimentScore::NEUTRAL);
        }

        let n = f64::from(hits);
        Ok(SentimentScore {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        })
    }
}

/// Lowercase, strip surrounding non-alphanumerics, and drop apostrophes so
/// `"Don't,"` becomes `"dont"`.
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .flat_map(char::to_lowercase)
        .collect()
}

fn lookup_word(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|(lex_word, _, _)| *lex_word == word)
        .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
}

fn lookup_intensifier(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, factor)| factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> SentimentScore {
        LexiconScorer.score(text).expect("lexicon scorer never fails")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_string_is_neutral() {
        assert_eq!(score(""), SentimentScore::NEUTRAL);
    }

    #[test]
    fn whitespace_only_is_neutral() {
        assert_eq!(score("   \t"), SentimentScore::NEUTRAL);
    }

    #[test]
    fn unknown_text_is_neutral() {
        assert_eq!(score("the quick brown fox"), SentimentScore::NEUTRAL);
    }

    #[test]
    fn single_positive_word() {
        let s = score("i love this");
        assert!(approx(s.polarity(), 0.5), "got {s:?}");
        assert!(approx(s.subjectivity(), 0.6), "got {s:?}");
    }

    #[test]
    fn single_negative_word() {
        let s = score("this is terrible");
        assert!(approx(s.polarity, -1.0), "got {s:?}");
        assert!(approx(s.subjectivity, 1.0), "got {s:?}");
    }

    #[test]
    fn contributions_are_averaged() {
        let s = score("good food but bad service");
        assert!(approx(s.polarity, 0.0), "got {s:?}");
    }

    #[test]
    fn negation_flips_and_dampens() {
        let s = score("not good");
        assert!(approx(s.polarity, -0.35), "got {s:?}");
    }

    #[test]
    fn negation_survives_articles() {
        let s = score("not a good idea");
        assert!(s.polarity < 0.0, "got {s:?}");
    }

    #[test]
    fn contraction_negates() {
        let s = score("I don't love it");
        assert!(approx(s.polarity, -0.25), "got {s:?}");
    }

    #[test]
    fn negation_resets_after_plain_word() {
        let s = score("not today good");
        assert!(approx(s.polarity, 0.7), "got {s:?}");
    }

    #[test]
    fn intensifier_scales_weight() {
        let s = score("very good");
        assert!(approx(s.polarity, 0.91), "got {s:?}");
        assert!(approx(s.subjectivity, 0.78), "got {s:?}");
    }

    #[test]
    fn scores_stay_in_range() {
        let s = score("extremely incredibly terrible");
        assert!(approx(s.polarity, -1.0), "got {s:?}");
        assert!(approx(s.subjectivity, 1.0), "got {s:?}");
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let s = score("GREAT!");
        assert!(approx(s.polarity, 0.8), "got {s:?}");
    }

    #[test]
    fn lexicon_values_are_in_range() {
        for &(word, polarity, subjectivity) in LEXICON {
            assert!((-1.0..=1.0).contains(&polarity), "{word} polarity");
            assert!((0.0..=1.0).contains(&subjectivity), "{word} subjectivity");
            assert_eq!(word, word.to_lowercase(), "{word} must be lowercase");
        }
    }
}

//! Keyword sentiment of a single response.

use std::collections::HashSet;

use aho_corasick::AhoCorasick;
use log::trace;

use crate::config::*;

const POSITIVE_WORDS: &[&str] = &[
    "love", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "good", "nice",
    "helpful", "useful", "valuable", "appreciate", "thank", "grateful", "enjoy", "happy",
    "satisfied", "perfect", "outstanding", "impressive", "beneficial", "effective", "successful",
    "easy", "smooth", "clear", "convenient", "accessible", "friendly", "supportive", "inspiring",
];

const NEGATIVE_WORDS_BASELINE: &[&str] = &[
    "hate", "terrible", "awful", "horrible", "bad", "poor", "disappointing", "frustrated",
    "annoying", "difficult", "hard", "confusing", "slow", "laggy", "broken", "issue", "problem",
    "bug", "error", "fail", "failure", "crash", "freeze", "stuck", "impossible", "useless",
    "waste", "boring", "unhappy", "dissatisfied", "concerned", "worry", "unfortunately", "sadly",
];

const NEGATIVE_WORDS_EXTENDED: &[&str] = &[
    "hate", "terrible", "awful", "horrible", "bad", "poor", "disappointing", "frustrated",
    "annoying", "difficult", "hard", "confusing", "slow", "lag", "laggy", "broken", "issue",
    "problem", "bug", "error", "fail", "failure", "crash", "crashing", "freeze", "freezes",
    "freezing", "stuck", "impossible", "useless", "waste", "boring", "unhappy", "dissatisfied",
    "concerned", "worry", "unfortunately", "sadly", "unresponsive",
];

const IMPROVEMENT_WORDS: &[&str] = &[
    "improve", "better", "enhance", "upgrade", "suggest", "recommend", "would like", "hope",
    "wish", "could", "should", "need", "want", "feature", "add", "include", "provide",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "not good",
    "not great",
    "not helpful",
    "not useful",
    "no value",
    "no good",
    "don't like",
    "do not like",
    "doesn't work",
    "doesnt work",
    "can't",
    "cant ",
    "cannot ",
    "hard to",
    "difficult to",
    "too slow",
    "very slow",
    "so slow",
    "keeps crashing",
    "keeps crushing",
];

impl SentimentLexicon {
    /// The lexicon of the first survey processor: single keywords only.
    pub const BASELINE: SentimentLexicon = SentimentLexicon {
        positive: POSITIVE_WORDS,
        negative: NEGATIVE_WORDS_BASELINE,
        improvement: IMPROVEMENT_WORDS,
        negative_phrases: &[],
    };

    /// Adds negations and complaint phrases, so that "not good" does not
    /// count as praise.
    pub const EXTENDED: SentimentLexicon = SentimentLexicon {
        positive: POSITIVE_WORDS,
        negative: NEGATIVE_WORDS_EXTENDED,
        improvement: IMPROVEMENT_WORDS,
        negative_phrases: NEGATIVE_PHRASES,
    };
}

/// Scores responses against a lexicon.
///
/// ```
/// use feedback_classifier::sentiment::SentimentScorer;
/// use feedback_classifier::{SentimentLabel, SentimentLexicon};
///
/// let scorer = SentimentScorer::new(&SentimentLexicon::EXTENDED)?;
/// assert_eq!(scorer.score("Not good, the app keeps crashing"), SentimentLabel::Negative);
/// assert_eq!(scorer.score("I love the community"), SentimentLabel::Positive);
/// # Ok::<(), feedback_classifier::ClassifierErrors>(())
/// ```
pub struct SentimentScorer {
    positive: AhoCorasick,
    negative: AhoCorasick,
    improvement: AhoCorasick,
    phrases: AhoCorasick,
}

impl SentimentScorer {
    pub fn new(lexicon: &SentimentLexicon) -> Result<SentimentScorer, ClassifierErrors> {
        Ok(SentimentScorer {
            positive: build_matcher(lexicon.positive)?,
            negative: build_matcher(lexicon.negative)?,
            improvement: build_matcher(lexicon.improvement)?,
            phrases: build_matcher(lexicon.negative_phrases)?,
        })
    }

    pub fn score(&self, text: &str) -> SentimentLabel {
        self.score_detailed(text).label
    }

    pub fn score_detailed(&self, text: &str) -> SentimentScore {
        let lower = text.to_lowercase();
        let positive = distinct_matches(&self.positive, &lower);
        let negative =
            distinct_matches(&self.negative, &lower) + distinct_matches(&self.phrases, &lower);
        let improvement = distinct_matches(&self.improvement, &lower);
        let label = decide(positive, negative);
        trace!(
            "score: {:?}: +{} -{} ~{} => {}",
            text,
            positive,
            negative,
            improvement,
            label
        );
        SentimentScore {
            positive,
            negative,
            improvement,
            label,
        }
    }
}

// Mixed signals need a margin of one to win, an exact tie is neutral.
fn decide(positive: usize, negative: usize) -> SentimentLabel {
    match (positive, negative) {
        (0, 0) => SentimentLabel::Neutral,
        (_, 0) => SentimentLabel::Positive,
        (0, _) => SentimentLabel::Negative,
        (p, n) if n >= p + 1 => SentimentLabel::Negative,
        (p, n) if p >= n + 1 => SentimentLabel::Positive,
        _ => SentimentLabel::Neutral,
    }
}

fn build_matcher(patterns: &[&str]) -> Result<AhoCorasick, ClassifierErrors> {
    AhoCorasick::new(patterns).map_err(|e| ClassifierErrors::InvalidLexicon(e.to_string()))
}

// Each keyword counts once, whatever the number of occurrences. Overlapping
// search so that "lag" and "laggy" both count.
fn distinct_matches(ac: &AhoCorasick, text: &str) -> usize {
    ac.find_overlapping_iter(text)
        .map(|m| m.pattern())
        .collect::<HashSet<_>>()
        .len()
}

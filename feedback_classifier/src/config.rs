// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The free-text questions of the community survey that get classified.
///
/// Each question has its own, independent set of topic buckets.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum QuestionKind {
    /// What members hope to gain from the community.
    CommunityGoals,
    /// The reasoning behind the rating of the Circle platform.
    CircleFeedback,
    /// The kind of content, articles or resources members want.
    ContentPreferences,
    /// Preferences for interest-based groups.
    InterestGroups,
    /// Any other comments, questions or suggestions.
    Suggestions,
}

impl QuestionKind {
    /// All the questions, in the order they appear in a report.
    pub const ALL: [QuestionKind; 5] = [
        QuestionKind::CommunityGoals,
        QuestionKind::CircleFeedback,
        QuestionKind::ContentPreferences,
        QuestionKind::InterestGroups,
        QuestionKind::Suggestions,
    ];

    /// The key used for this question in the report.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionKind::CommunityGoals => "community_goals",
            QuestionKind::CircleFeedback => "circle_feedback",
            QuestionKind::ContentPreferences => "content_preferences",
            QuestionKind::InterestGroups => "interest_groups",
            QuestionKind::Suggestions => "suggestions",
        }
    }
}

// ******** Output data structures *********

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The keyword counts behind a sentiment label.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SentimentScore {
    pub positive: usize,
    /// Negative keywords and negative phrases together.
    pub negative: usize,
    pub improvement: usize,
    pub label: SentimentLabel,
}

/// The outcome of resolving a free-text location.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Resolution {
    Country(&'static str),
    Unresolved,
}

/// How unresolved locations are reported.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

impl Resolution {
    pub fn country(&self) -> Option<&'static str> {
        match self {
            Resolution::Country(c) => Some(c),
            Resolution::Unresolved => None,
        }
    }

    pub fn name_or_unknown(&self) -> &'static str {
        self.country().unwrap_or(UNKNOWN_COUNTRY)
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CategorizedResponse {
    /// The response as it was written, not trimmed.
    pub text: String,
    pub sentiment: SentimentLabel,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CategoryBucket {
    pub name: &'static str,
    pub responses: Vec<CategorizedResponse>,
}

/// The buckets of one classifier. The substantive categories come first, in
/// declared order, followed by the catch-all bucket.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct CategorizedResponses {
    pub buckets: Vec<CategoryBucket>,
}

impl CategorizedResponses {
    pub fn bucket(&self, name: &str) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|b| b.name == name)
    }

    /// Number of responses that have been placed in any bucket.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.responses.len()).sum()
    }
}

/// Errors that prevent the classifiers from being built.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ClassifierErrors {
    InvalidCountryPattern(String),
    InvalidLexicon(String),
}

impl Error for ClassifierErrors {}

impl Display for ClassifierErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierErrors::InvalidCountryPattern(c) => {
                write!(f, "could not build the matching pattern for country {}", c)
            }
            ClassifierErrors::InvalidLexicon(msg) => {
                write!(f, "could not build the sentiment lexicon: {}", msg)
            }
        }
    }
}

// ********* Configuration **********

/// One first-match-wins rule: a response containing any of the keywords
/// belongs to the category.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct TopicRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// The ordered rules of one classifier. Rules are tried in order, the
/// catch-all category is implicit.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ClassifierSpec {
    pub rules: &'static [TopicRule],
}

pub const OTHER_CATEGORY: &str = "Other";

impl ClassifierSpec {
    /// All the bucket names, the catch-all last.
    pub fn category_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.rules.iter().map(|r| r.category).collect();
        names.push(OTHER_CATEGORY);
        names
    }
}

/// The keyword sets of the sentiment scorer.
///
/// All the entries are expected in lower case. They are matched as plain
/// substrings of the lowercased text, each entry counting at most once.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct SentimentLexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    /// Requests and suggestions. They are counted but never move the label.
    pub improvement: &'static [&'static str],
    /// Negations and complaints that add to the negative count.
    pub negative_phrases: &'static [&'static str],
}

/// The lookup tables of the location resolver.
///
/// Keys of `cities` and `aliases` are normalized strings (see
/// `normalize::normalize_location`).
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct LocationTables {
    pub known_countries: &'static [&'static str],
    pub cities: &'static [(&'static str, &'static str)],
    pub aliases: &'static [(&'static str, &'static str)],
    pub blacklist_exact: &'static [&'static str],
    pub blacklist_substrings: &'static [&'static str],
    /// Minimum similarity for the fuzzy match, between 0 and 1.
    pub fuzzy_cutoff: f64,
}

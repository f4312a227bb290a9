//! First-match-wins topic classification.
//!
//! Each classifier is an ordered list of `TopicRule`s. A response goes to the
//! first rule that has one of its keywords in the lowercased text, and to the
//! catch-all `Other` bucket when no rule matches. Earlier rules always take
//! priority: a response is never placed in two buckets.

use log::debug;
use rayon::prelude::*;

use crate::config::*;
use crate::sentiment::SentimentScorer;

pub const COMMUNITY_GOALS: ClassifierSpec = ClassifierSpec {
    rules: &[
        TopicRule {
            category: "Career Development & Job Opportunities",
            keywords: &[
                "job",
                "career",
                "opportunity",
                "employment",
                "professional development",
                "interview",
                "resume",
                "hire",
                "position",
            ],
        },
        TopicRule {
            category: "Networking & Community Building",
            keywords: &[
                "network",
                "connect",
                "community",
                "friendship",
                "relationship",
                "collaborate",
                "partnership",
            ],
        },
        TopicRule {
            category: "Skill Development & Learning",
            keywords: &[
                "skill",
                "learn",
                "knowledge",
                "education",
                "training",
                "course",
                "expertise",
                "development",
                "upskill",
            ],
        },
        TopicRule {
            category: "Business & Entrepreneurship",
            keywords: &[
                "business",
                "startup",
                "entrepreneur",
                "fund",
                "investment",
                "scale",
                "venture",
                "cofounder",
            ],
        },
        TopicRule {
            category: "Mentorship & Guidance",
            keywords: &["mentor", "guidance", "advice", "support", "help", "coaching"],
        },
    ],
};

pub const CIRCLE_FEEDBACK: ClassifierSpec = ClassifierSpec {
    rules: &[
        TopicRule {
            category: "Positive User Experience",
            keywords: &[
                "love",
                "great",
                "good",
                "easy",
                "nice",
                "excellent",
                "wonderful",
                "amazing",
                "helpful",
                "useful",
            ],
        },
        TopicRule {
            category: "Performance Issues",
            keywords: &[
                "slow",
                "load",
                "lag",
                "freeze",
                "crash",
                "speed",
                "fast",
                "performance",
            ],
        },
        TopicRule {
            category: "Content Organization",
            keywords: &["content", "post", "organize", "structure", "format", "layout"],
        },
        TopicRule {
            category: "Navigation & Usability",
            keywords: &[
                "navigate",
                "find",
                "search",
                "menu",
                "interface",
                "design",
                "user experience",
            ],
        },
        TopicRule {
            category: "Feature Requests",
            keywords: &[
                "feature",
                "add",
                "need",
                "want",
                "suggest",
                "improve",
                "enhancement",
            ],
        },
    ],
};

pub const CONTENT_PREFERENCES: ClassifierSpec = ClassifierSpec {
    rules: &[
        TopicRule {
            category: "Career Tips & Opportunities",
            keywords: &[
                "career",
                "job",
                "opportunity",
                "interview",
                "resume",
                "professional",
            ],
        },
        TopicRule {
            category: "Technical Skills & AI Content",
            keywords: &[
                "ai",
                "tech",
                "coding",
                "programming",
                "development",
                "software",
                "web3",
                "data",
                "analytics",
            ],
        },
        TopicRule {
            category: "Industry Trends & Leadership",
            keywords: &[
                "trend",
                "industry",
                "leader",
                "leadership",
                "business",
                "innovation",
            ],
        },
        TopicRule {
            category: "Personal Development",
            keywords: &["personal", "motivation", "inspiration", "growth", "mindset"],
        },
        TopicRule {
            category: "Educational Resources",
            keywords: &["education", "learn", "tutorial", "guide", "course", "training"],
        },
    ],
};

pub const INTEREST_GROUPS: ClassifierSpec = ClassifierSpec {
    rules: &[
        TopicRule {
            category: "Developer & Tech Groups",
            keywords: &[
                "developer",
                "programming",
                "coding",
                "software",
                "web",
                "mobile",
                "frontend",
                "backend",
            ],
        },
        TopicRule {
            category: "Data Science & Analytics",
            keywords: &["data", "analytics", "science", "statistics", "analysis"],
        },
        TopicRule {
            category: "AI & Machine Learning",
            keywords: &[
                "ai",
                "artificial intelligence",
                "machine learning",
                "ml",
                "deep learning",
            ],
        },
        TopicRule {
            category: "Business & Finance",
            keywords: &[
                "business",
                "finance",
                "accounting",
                "investment",
                "marketing",
                "sales",
            ],
        },
        TopicRule {
            category: "Design & Creative",
            keywords: &["design", "ui", "ux", "creative", "art", "graphics"],
        },
    ],
};

pub const SUGGESTIONS: ClassifierSpec = ClassifierSpec {
    rules: &[
        TopicRule {
            category: "Platform & Technical Improvements",
            keywords: &[
                "platform",
                "app",
                "website",
                "technical",
                "slow",
                "bug",
                "fix",
                "improve",
                "interface",
            ],
        },
        TopicRule {
            category: "Community Structure & Organization",
            keywords: &[
                "community",
                "group",
                "organize",
                "structure",
                "channel",
                "discussion",
            ],
        },
        TopicRule {
            category: "Opportunities & Accessibility",
            keywords: &[
                "opportunity",
                "scholarship",
                "job",
                "access",
                "available",
                "fair",
                "equal",
            ],
        },
        TopicRule {
            category: "Mentorship & Support",
            keywords: &["mentor", "support", "help", "guidance", "coaching", "advice"],
        },
        TopicRule {
            category: "Content & Resources",
            keywords: &["content", "resource", "material", "course", "learning"],
        },
    ],
};

impl QuestionKind {
    pub fn classifier(&self) -> &'static ClassifierSpec {
        match self {
            QuestionKind::CommunityGoals => &COMMUNITY_GOALS,
            QuestionKind::CircleFeedback => &CIRCLE_FEEDBACK,
            QuestionKind::ContentPreferences => &CONTENT_PREFERENCES,
            QuestionKind::InterestGroups => &INTEREST_GROUPS,
            QuestionKind::Suggestions => &SUGGESTIONS,
        }
    }
}

/// The bucket a response belongs to, or None for a blank response.
pub fn classify(text: &str, spec: &ClassifierSpec) -> Option<&'static str> {
    let clean = text.trim().to_lowercase();
    if clean.is_empty() {
        return None;
    }
    let category = spec
        .rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| clean.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or(OTHER_CATEGORY);
    Some(category)
}

/// Classifies all the responses to one question and attaches their sentiment.
///
/// The buckets keep the responses in input order. Blank responses are
/// dropped.
pub fn categorize<S: AsRef<str> + Sync>(
    responses: &[S],
    spec: &ClassifierSpec,
    scorer: &SentimentScorer,
) -> CategorizedResponses {
    let classified: Vec<Option<(&'static str, SentimentLabel)>> = responses
        .par_iter()
        .map(|r| {
            let text = r.as_ref();
            classify(text, spec).map(|category| (category, scorer.score(text)))
        })
        .collect();

    let mut buckets: Vec<CategoryBucket> = spec
        .category_names()
        .into_iter()
        .map(|name| CategoryBucket {
            name,
            responses: Vec::new(),
        })
        .collect();

    for (r, c) in responses.iter().zip(classified) {
        if let Some((category, sentiment)) = c {
            if let Some(bucket) = buckets.iter_mut().find(|b| b.name == category) {
                bucket.responses.push(CategorizedResponse {
                    text: r.as_ref().to_string(),
                    sentiment,
                });
            }
        }
    }

    let res = CategorizedResponses { buckets };
    debug!(
        "categorize: {} responses, {} categorized",
        responses.len(),
        res.total()
    );
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(&SentimentLexicon::EXTENDED).unwrap()
    }

    #[test]
    fn declared_order() {
        assert_eq!(
            classify("I want to learn new coding skills", &INTEREST_GROUPS),
            Some("Developer & Tech Groups")
        );
        // "job" is a career keyword, "network" a networking one.
        assert_eq!(
            classify("A job and a strong network", &COMMUNITY_GOALS),
            Some("Career Development & Job Opportunities")
        );
        assert_eq!(
            classify("More mentors and a better app", &SUGGESTIONS),
            Some("Platform & Technical Improvements")
        );
    }

    #[test]
    fn fallback_to_other() {
        assert_eq!(classify("No comment", &CONTENT_PREFERENCES), Some("Other"));
        assert_eq!(classify("N/A", &CIRCLE_FEEDBACK), Some("Other"));
    }

    #[test]
    fn blanks_are_excluded() {
        assert_eq!(classify("", &COMMUNITY_GOALS), None);
        assert_eq!(classify("   \n\t", &COMMUNITY_GOALS), None);

        let res = categorize(&["", "  ", "networking"], &COMMUNITY_GOALS, &scorer());
        assert_eq!(res.total(), 1);
        assert!(res.bucket("Other").unwrap().responses.is_empty());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            classify("MACHINE LEARNING", &INTEREST_GROUPS),
            Some("AI & Machine Learning")
        );
    }

    #[test]
    fn buckets_keep_input_order() {
        let responses = vec![
            "Loading is slow".to_string(),
            "I love it".to_string(),
            "Pages take forever to load".to_string(),
            "It crashes and lags".to_string(),
            "   ".to_string(),
            "whatever".to_string(),
        ];
        let res = categorize(&responses, &CIRCLE_FEEDBACK, &scorer());
        let perf: Vec<&str> = res
            .bucket("Performance Issues")
            .unwrap()
            .responses
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(
            perf,
            vec![
                "Loading is slow",
                "Pages take forever to load",
                "It crashes and lags"
            ]
        );
        assert_eq!(res.bucket("Positive User Experience").unwrap().responses.len(), 1);
        assert_eq!(res.bucket("Other").unwrap().responses.len(), 1);
        assert_eq!(res.total(), 5);
    }

    #[test]
    fn bucket_layout() {
        for kind in QuestionKind::ALL.iter() {
            let res = categorize::<&str>(&[], kind.classifier(), &scorer());
            assert_eq!(res.buckets.len(), 6);
            assert_eq!(res.buckets.last().unwrap().name, "Other");
        }
        let names: Vec<&str> = INTEREST_GROUPS.category_names();
        assert_eq!(
            names,
            vec![
                "Developer & Tech Groups",
                "Data Science & Analytics",
                "AI & Machine Learning",
                "Business & Finance",
                "Design & Creative",
                "Other"
            ]
        );
    }

    #[test]
    fn sentiment_and_original_text() {
        let res = categorize(
            &["  The platform is too slow  "],
            &SUGGESTIONS,
            &scorer(),
        );
        let b = res.bucket("Platform & Technical Improvements").unwrap();
        assert_eq!(b.responses[0].text, "  The platform is too slow  ");
        assert_eq!(b.responses[0].sentiment, SentimentLabel::Negative);
    }
}

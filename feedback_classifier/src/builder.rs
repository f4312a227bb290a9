pub use crate::config::*;

use crate::sentiment::SentimentScorer;
use crate::topics::categorize;

/// A builder for collecting the free-text responses of a survey.
///
/// The responses are added question by question, in the order of the rows,
/// and classified all at once when calling `finish`.
///
/// ```
/// pub use feedback_classifier::builder::Builder;
/// pub use feedback_classifier::{QuestionKind, SentimentLexicon};
/// # use feedback_classifier::ClassifierErrors;
///
/// let mut builder = Builder::new(&SentimentLexicon::EXTENDED)?;
///
/// builder.add_response(QuestionKind::InterestGroups, "Frontend and mobile development");
/// builder.add_response(QuestionKind::Suggestions, "The app is too slow");
/// builder.add_response(QuestionKind::Suggestions, "   ");
///
/// let results = builder.finish();
/// assert_eq!(results.len(), 5);
/// let (kind, suggestions) = &results[4];
/// assert_eq!(*kind, QuestionKind::Suggestions);
/// assert_eq!(suggestions.total(), 1);
///
/// # Ok::<(), ClassifierErrors>(())
/// ```
pub struct Builder {
    pub(crate) _scorer: SentimentScorer,
    pub(crate) _responses: Vec<(QuestionKind, Vec<String>)>,
}

impl Builder {
    pub fn new(lexicon: &SentimentLexicon) -> Result<Builder, ClassifierErrors> {
        Ok(Builder {
            _scorer: SentimentScorer::new(lexicon)?,
            _responses: QuestionKind::ALL.iter().map(|k| (*k, Vec::new())).collect(),
        })
    }

    /// Adds the response of one respondent to a question.
    ///
    /// Blank responses are accepted and later ignored by the classifier.
    pub fn add_response(&mut self, kind: QuestionKind, text: &str) {
        if let Some((_, l)) = self._responses.iter_mut().find(|(k, _)| *k == kind) {
            l.push(text.to_string());
        }
    }

    pub fn add_responses(&mut self, kind: QuestionKind, texts: &[String]) {
        for t in texts {
            self.add_response(kind, t);
        }
    }

    /// Number of responses added so far for a question, blanks included.
    pub fn count(&self, kind: QuestionKind) -> usize {
        self._responses
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, l)| l.len())
            .unwrap_or(0)
    }

    /// Classifies everything, one entry per question in report order.
    pub fn finish(&self) -> Vec<(QuestionKind, CategorizedResponses)> {
        self._responses
            .iter()
            .map(|(kind, texts)| (*kind, categorize(texts, kind.classifier(), &self._scorer)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responses_go_to_their_question() {
        let mut b = Builder::new(&SentimentLexicon::BASELINE).unwrap();
        b.add_responses(
            QuestionKind::CommunityGoals,
            &["Find a job".to_string(), "Meet a mentor".to_string()],
        );
        b.add_response(QuestionKind::ContentPreferences, "AI tutorials");
        assert_eq!(b.count(QuestionKind::CommunityGoals), 2);
        assert_eq!(b.count(QuestionKind::Suggestions), 0);

        let res = b.finish();
        let kinds: Vec<QuestionKind> = res.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, QuestionKind::ALL.to_vec());

        let goals = &res[0].1;
        assert_eq!(
            goals
                .bucket("Career Development & Job Opportunities")
                .unwrap()
                .responses
                .len(),
            1
        );
        assert_eq!(goals.bucket("Mentorship & Guidance").unwrap().responses.len(), 1);
        let content = &res[2].1;
        assert_eq!(
            content
                .bucket("Technical Skills & AI Content")
                .unwrap()
                .responses[0]
                .text,
            "AI tutorials"
        );
        assert_eq!(res[4].1.total(), 0);
    }
}

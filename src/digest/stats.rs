// Aggregates over the structured (non free-text) questions.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::digest::*;

/// Labels of a multiple-choice question and the keywords that select them.
pub type KeywordTally = (&'static str, &'static [&'static str]);

pub const EVENT_TALLIES: &[KeywordTally] = &[
    ("Skill-building Workshops", &["skill", "workshop"]),
    ("Career Development", &["career", "networking"]),
    ("Expert Q&A", &["q&a", "expert"]),
    ("Local Meetups", &["meetup", "local"]),
    ("Social Hangouts", &["social", "hangout"]),
    ("Presentations", &["presentation", "showcase"]),
];

pub const CONTRIBUTION_TALLIES: &[KeywordTally] = &[
    ("Content Sharing", &["content", "sharing", "article"]),
    ("Mentoring", &["mentor"]),
    ("Event Hosting", &["host", "event"]),
    ("Moderating", &["moderat"]),
    ("Not Ready Yet", &["not ready", "attend"]),
];

/// Counts the distinct answers, most frequent first.
///
/// Answers are trimmed and blank answers are ignored. Answers with the same
/// count keep the order in which they first appeared.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for v in values {
        let v = v.trim();
        if v.is_empty() {
            continue;
        }
        match positions.get(v) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(v.to_string(), counts.len());
                counts.push((v.to_string(), 1));
            }
        }
    }
    // Stable sort: ties stay in order of first appearance.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn parse_rating(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Counts the ratings given to a question, in increasing order of rating.
///
/// With `numeric`, the keys are the ratings written with one decimal and the
/// answers that are not numbers are dropped. Otherwise the keys are the
/// answers as written, numbers first.
pub fn rating_counts<'a>(
    values: impl IntoIterator<Item = &'a str>,
    numeric: bool,
) -> Vec<(String, usize)> {
    let mut keyed: Vec<(String, Option<f64>, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for v in values {
        let v = v.trim();
        if v.is_empty() {
            continue;
        }
        let rating = parse_rating(v);
        let key = match (numeric, rating) {
            (true, Some(x)) => format!("{:.1}", x),
            (true, None) => {
                debug!("rating_counts: dropping non-numeric rating {:?}", v);
                continue;
            }
            (false, _) => v.to_string(),
        };
        match positions.get(&key) {
            Some(&idx) => keyed[idx].2 += 1,
            None => {
                positions.insert(key.clone(), keyed.len());
                keyed.push((key, rating, 1));
            }
        }
    }
    keyed.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.0.cmp(&b.0),
    });
    keyed.into_iter().map(|(k, _, c)| (k, c)).collect()
}

/// The average of the numeric ratings, with one decimal. 0 when there are none.
pub fn mean_rating<'a>(values: impl IntoIterator<Item = &'a str>) -> f64 {
    let ratings: Vec<f64> = values.into_iter().filter_map(parse_rating).collect();
    if ratings.is_empty() {
        return 0.0;
    }
    let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
    round_to_tenth(mean)
}

/// Counts, for each label, the answers that mention one of its keywords.
///
/// An answer can count towards several labels. Labels appear in the order in
/// which they were first mentioned, and labels never mentioned are absent.
pub fn keyword_tallies<'a>(
    values: impl IntoIterator<Item = &'a str>,
    tallies: &[KeywordTally],
) -> Vec<(&'static str, usize)> {
    let mut res: Vec<(&'static str, usize)> = Vec::new();
    for v in values {
        let lower = v.to_lowercase();
        for (label, keywords) in tallies {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                match res.iter_mut().find(|(l, _)| l == label) {
                    Some((_, c)) => *c += 1,
                    None => res.push((*label, 1)),
                }
            }
        }
    }
    res
}

/// `100 * count / total`, rounded to an integer. 0 when total is 0.
pub fn percentage(count: usize, total: usize) -> u64 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round_ties_even() as u64
}

pub fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// The text between the brackets of a grid question header, or the whole header.
pub fn short_column_name(header: &str) -> &str {
    header
        .split_once('[')
        .and_then(|(_, rest)| rest.split_once(']'))
        .map(|(name, _)| name)
        .unwrap_or(header)
}

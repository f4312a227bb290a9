use std::fs;
use std::io::Write;

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::digest::{config_reader::*, *};

/// Everything that goes into a report, in report order.
#[derive(PartialEq, Debug, Clone)]
pub struct SurveyDigest {
    pub total_responses: usize,
    pub countries_count: usize,
    pub avg_circle_rating: f64,
    pub contribution_percentage: u64,
    pub countries: Vec<(String, usize)>,
    pub communication_preferences: Vec<(String, usize)>,
    pub circle_ratings: Vec<(String, usize)>,
    pub value_ratings: Vec<(String, Vec<(String, usize)>)>,
    pub event_preferences: Vec<(&'static str, usize)>,
    pub contribution_preferences: Vec<(&'static str, usize)>,
    pub categorized_responses: Vec<(QuestionKind, CategorizedResponses)>,
}

fn counts_to_json<K: AsRef<str>>(counts: &[(K, usize)]) -> JSValue {
    let mut m: JSMap<String, JSValue> = JSMap::new();
    for (k, c) in counts {
        m.insert(k.as_ref().to_string(), json!(c));
    }
    JSValue::Object(m)
}

fn categorized_to_json(cr: &CategorizedResponses) -> JSValue {
    let mut m: JSMap<String, JSValue> = JSMap::new();
    for bucket in cr.buckets.iter() {
        let l: Vec<JSValue> = bucket
            .responses
            .iter()
            .map(|r| json!({"text": r.text, "sentiment": r.sentiment.as_str()}))
            .collect();
        m.insert(bucket.name.to_string(), JSValue::Array(l));
    }
    JSValue::Object(m)
}

pub fn build_report_js(d: &SurveyDigest) -> JSValue {
    let mut value_ratings: JSMap<String, JSValue> = JSMap::new();
    for (name, counts) in d.value_ratings.iter() {
        value_ratings.insert(name.clone(), counts_to_json(counts));
    }

    let mut categorized: JSMap<String, JSValue> = JSMap::new();
    for (kind, cr) in d.categorized_responses.iter() {
        categorized.insert(kind.key().to_string(), categorized_to_json(cr));
    }

    json!({
        "stats": {
            "total_responses": d.total_responses,
            "countries_count": d.countries_count,
            "avg_circle_rating": d.avg_circle_rating,
            "contribution_percentage": d.contribution_percentage,
        },
        "countries": counts_to_json(&d.countries),
        "communication_preferences": counts_to_json(&d.communication_preferences),
        "circle_ratings": counts_to_json(&d.circle_ratings),
        "value_ratings": value_ratings,
        "event_preferences": counts_to_json(&d.event_preferences),
        "contribution_preferences": counts_to_json(&d.contribution_preferences),
        "categorized_responses": categorized,
    })
}

pub fn pretty_report(js: &JSValue) -> DigestResult<String> {
    serde_json::to_string_pretty(js).context(ParsingJsonSnafu {})
}

/// Writes the report to a file, or to the standard output for `stdout`.
pub fn write_report(js: &JSValue, out: &str) -> DigestResult<()> {
    let pretty = pretty_report(js)?;
    if out == "stdout" {
        let mut handle = std::io::stdout().lock();
        writeln!(handle, "{}", pretty).context(WritingOutputSnafu { path: out })?;
    } else {
        fs::write(out, format!("{}\n", pretty)).context(WritingOutputSnafu { path: out })?;
        info!("write_report: report written to {}", out);
    }
    Ok(())
}

/// Writes the report as a JavaScript constant, for pages that load it with a
/// script tag.
pub fn write_js(js: &JSValue, path: &str, variable_name: &str) -> DigestResult<()> {
    let pretty = pretty_report(js)?;
    let content = format!("const {} = {};\n", variable_name, pretty);
    fs::write(path, content).context(WritingOutputSnafu { path })?;
    info!("write_js: {} written to {}", variable_name, path);
    Ok(())
}

/// Compares the report with a reference report and prints the differences.
pub fn check_reference(js: &JSValue, reference_path: &str) -> DigestResult<()> {
    let summary_ref = read_summary(reference_path)?;
    let pretty_js_summary_ref = pretty_report(&summary_ref)?;
    let pretty_js_stats = pretty_report(js)?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference report {}", reference_path);
        print_diff(
            pretty_js_summary_ref.as_str(),
            pretty_js_stats.as_ref(),
            "\n",
        );
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("check_reference: report matches {}", reference_path);
    Ok(())
}

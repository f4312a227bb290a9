use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

use crate::digest::*;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "reportName")]
    pub report_name: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "jsOutputPath")]
    pub js_output_path: Option<String>,
    #[serde(rename = "jsVariableName")]
    pub js_variable_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

/// The texts used to find each question in the header of an export.
///
/// A column matches when its header contains the text.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNeedles {
    pub country: String,
    #[serde(rename = "communicationPreference")]
    pub communication_preference: String,
    #[serde(rename = "circleRating")]
    pub circle_rating: String,
    #[serde(rename = "circleFeedback")]
    pub circle_feedback: String,
    pub goals: String,
    pub events: String,
    pub content: String,
    #[serde(rename = "interestGroups")]
    pub interest_groups: String,
    pub contribution: String,
    pub involvement: String,
    pub suggestions: String,
}

impl Default for ColumnNeedles {
    fn default() -> Self {
        ColumnNeedles {
            country: "What country are you based in".to_string(),
            communication_preference: "What is your preferred way to receive updates".to_string(),
            circle_rating: "How would you rate you experience of Circle".to_string(),
            circle_feedback: "Please share your reasoning behind your rating for Circle"
                .to_string(),
            goals: "What are the top 1-3 things you hope to gain".to_string(),
            events: "To help us plan, what types of events".to_string(),
            content: "What kind of content / articles / resources".to_string(),
            interest_groups: "If we were to create interest-based groups".to_string(),
            contribution: "How would you be interested in contributing".to_string(),
            involvement: "Would you like us to inform you with specific ways".to_string(),
            suggestions: "Do you have any other comments, questions or suggestion".to_string(),
        }
    }
}

const VALUE_PREFIX: &str = "How valuable do you find the following aspects of the ALX community?";

pub fn default_value_columns() -> Vec<String> {
    [
        "Online Events (e.g., webinars, workshops)",
        "In-person Events (e.g., meetups, networking sessions)",
        "The community platform (Circle)",
        "Networking opportunities with other members",
        "Content and resources shared with community",
    ]
    .iter()
    .map(|aspect| format!("{} [{}]", VALUE_PREFIX, aspect))
    .collect()
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(rename = "inputSources")]
    pub input_sources: Vec<FileSource>,
    pub profile: Option<String>,
    #[serde(default)]
    pub columns: ColumnNeedles,
    #[serde(rename = "valueColumns", default = "default_value_columns")]
    pub value_columns: Vec<String>,
}

/// The processing choices that differ between the two survey variants.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct PipelineProfile {
    pub name: &'static str,
    pub dedup_by_email: bool,
    pub resolve_countries: bool,
    /// Only the most frequent countries are reported.
    pub max_countries: Option<usize>,
    pub numeric_rating_keys: bool,
    pub lexicon: SentimentLexicon,
    pub js_output: bool,
}

impl PipelineProfile {
    pub const BASELINE: PipelineProfile = PipelineProfile {
        name: "baseline",
        dedup_by_email: false,
        resolve_countries: false,
        max_countries: Some(10),
        numeric_rating_keys: false,
        lexicon: SentimentLexicon::BASELINE,
        js_output: false,
    };

    pub const CITY: PipelineProfile = PipelineProfile {
        name: "city",
        dedup_by_email: true,
        resolve_countries: true,
        max_countries: None,
        numeric_rating_keys: true,
        lexicon: SentimentLexicon::EXTENDED,
        js_output: true,
    };

    pub fn from_name(name: &str) -> DigestResult<PipelineProfile> {
        match name {
            "baseline" => Ok(PipelineProfile::BASELINE),
            "city" => Ok(PipelineProfile::CITY),
            x => UnknownProfileSnafu {
                profile: x.to_string(),
            }
            .fail(),
        }
    }
}

pub fn read_config(path: &str) -> DigestResult<DigestConfig> {
    let config_str = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: DigestConfig = serde_json::from_str(&config_str).context(ParsingJsonSnafu {})?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: &str) -> DigestResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_summary: {:?}", js);
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let js = r#"{"inputSources": [{"provider": "csv", "filePath": "responses.csv"}]}"#;
        let config: DigestConfig = serde_json::from_str(js).unwrap();
        assert_eq!(config.output_settings, OutputSettings::default());
        assert_eq!(config.profile, None);
        assert_eq!(config.columns, ColumnNeedles::default());
        assert_eq!(config.value_columns.len(), 5);
        assert_eq!(config.input_sources[0].excel_worksheet_name, None);
    }

    #[test]
    fn partial_columns() {
        let js = r#"{
            "outputSettings": {"reportName": "City", "jsVariableName": "citySurveyData"},
            "inputSources": [],
            "profile": "city",
            "columns": {"country": "Where do you live"},
            "valueColumns": []
        }"#;
        let config: DigestConfig = serde_json::from_str(js).unwrap();
        assert_eq!(config.columns.country, "Where do you live");
        assert_eq!(
            config.columns.suggestions,
            ColumnNeedles::default().suggestions
        );
        assert!(config.value_columns.is_empty());
        assert_eq!(
            config.output_settings.js_variable_name.as_deref(),
            Some("citySurveyData")
        );
    }

    #[test]
    fn profiles() {
        assert_eq!(
            PipelineProfile::from_name("city").unwrap(),
            PipelineProfile::CITY
        );
        assert_eq!(
            PipelineProfile::from_name("baseline").unwrap().max_countries,
            Some(10)
        );
        assert!(PipelineProfile::from_name("town").is_err());
    }

    #[test]
    fn value_columns_have_short_names() {
        for c in default_value_columns() {
            assert!(c.starts_with(VALUE_PREFIX));
            assert!(c.ends_with(']'));
        }
    }
}

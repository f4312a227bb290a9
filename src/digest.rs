use log::{debug, info, warn};

pub use feedback_classifier::builder::Builder;
pub use feedback_classifier::location::LocationResolver;
pub use feedback_classifier::*;
use snafu::{prelude::*, ErrorCompat, Snafu};

use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;

use crate::args::Args;
use crate::digest::config_reader::*;
use crate::digest::io_common::*;
use crate::digest::report::*;
use crate::digest::stats::*;

pub mod config_reader;
pub mod dedup;
pub mod io_common;
pub mod io_csv;
pub mod io_xlsx;
pub mod report;
pub mod stats;

#[derive(Debug, Snafu)]
pub enum DigestError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display(
        "{path} has {count} worksheets, use excelWorksheetName to select one"
    ))]
    AmbiguousWorksheet { path: String, count: usize },
    #[snafu(display("No header found in {path}"))]
    EmptyInput { path: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningCsv { source: csv::Error, path: String },
    #[snafu(display("Error reading {path} at line {lineno}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display(
        "Required column containing '{needle}' not found. Available: {available}"
    ))]
    MissingColumn { needle: String, available: String },
    #[snafu(display("The columns of {path} do not match the columns of the first input"))]
    MismatchedHeaders { path: String },
    #[snafu(display("Provider not implemented {provider:?}"))]
    UnknownProvider { provider: String },
    #[snafu(display("Unknown profile {profile:?}, expected baseline or city"))]
    UnknownProfile { profile: String },
    #[snafu(display("No input: pass --config or --input"))]
    MissingInput {},
    #[snafu(display("No input source in the configuration"))]
    MissingSources {},
    #[snafu(display("The configuration file has no parent directory"))]
    MissingParentDir {},
    #[snafu(display("Could not build the classifiers"))]
    Classifier { source: ClassifierErrors },
    #[snafu(display("Error writing {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Difference detected between calculated report and reference report {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DigestResult<T> = Result<T, DigestError>;

/// The positions of the questions in the header of an export.
struct SurveyColumns {
    country: usize,
    communication_preference: usize,
    circle_rating: usize,
    events: usize,
    contribution: usize,
    involvement: usize,
    free_text: Vec<(QuestionKind, usize)>,
    value_columns: Vec<(String, usize)>,
}

fn resolve_columns(
    headers: &[String],
    needles: &ColumnNeedles,
    value_columns: &[String],
) -> DigestResult<SurveyColumns> {
    let free_text = vec![
        (
            QuestionKind::CommunityGoals,
            require_column(headers, &needles.goals)?,
        ),
        (
            QuestionKind::CircleFeedback,
            require_column(headers, &needles.circle_feedback)?,
        ),
        (
            QuestionKind::ContentPreferences,
            require_column(headers, &needles.content)?,
        ),
        (
            QuestionKind::InterestGroups,
            require_column(headers, &needles.interest_groups)?,
        ),
        (
            QuestionKind::Suggestions,
            require_column(headers, &needles.suggestions)?,
        ),
    ];
    let mut values: Vec<(String, usize)> = Vec::new();
    for col in value_columns {
        match headers.iter().position(|h| h == col) {
            Some(idx) => values.push((short_column_name(col).to_string(), idx)),
            None => debug!("resolve_columns: value column {:?} not present", col),
        }
    }
    Ok(SurveyColumns {
        country: require_column(headers, &needles.country)?,
        communication_preference: require_column(headers, &needles.communication_preference)?,
        circle_rating: require_column(headers, &needles.circle_rating)?,
        events: require_column(headers, &needles.events)?,
        contribution: require_column(headers, &needles.contribution)?,
        involvement: require_column(headers, &needles.involvement)?,
        free_text,
        value_columns: values,
    })
}

fn read_source(root_path: &Path, cfs: &FileSource) -> DigestResult<SurveyTable> {
    let p: PathBuf = root_path.join(&cfs.file_path);
    let p2 = p.as_path().display().to_string();
    info!("Attempting to read survey file {:?}", p2);
    match cfs.provider.as_str() {
        "csv" => io_csv::read_csv_table(&p2),
        "xlsx" => io_xlsx::read_xlsx_table(&p2, cfs.excel_worksheet_name.as_deref()),
        x => UnknownProviderSnafu {
            provider: x.to_string(),
        }
        .fail(),
    }
}

/// Reads all the sources of a configuration into a single table.
pub fn read_sources(config: &DigestConfig, root_path: &Path) -> DigestResult<SurveyTable> {
    let mut sources = config.input_sources.iter();
    let first = sources.next().context(MissingSourcesSnafu {})?;
    let mut table = read_source(root_path, first)?;
    for cfs in sources {
        let other = read_source(root_path, cfs)?;
        table.append(other, &cfs.file_path)?;
    }
    Ok(table)
}

fn country_counts(
    table: &SurveyTable,
    col: usize,
    profile: &PipelineProfile,
) -> DigestResult<Vec<(String, usize)>> {
    if profile.resolve_countries {
        let resolver = LocationResolver::new(&LocationTables::STANDARD).context(ClassifierSnafu {})?;
        let names: Vec<&str> = table
            .rows
            .iter()
            .map(|r| resolver.resolve(r.get(col).unwrap_or("")).name_or_unknown())
            .collect();
        let unknown = names.iter().filter(|n| **n == UNKNOWN_COUNTRY).count();
        info!(
            "country_counts: {} of {} locations unresolved",
            unknown,
            names.len()
        );
        Ok(value_counts(names))
    } else {
        let mut counts = value_counts(table.values(col));
        if let Some(max) = profile.max_countries {
            counts.truncate(max);
        }
        Ok(counts)
    }
}

/// Computes all the aggregates of a survey.
pub fn digest_table(
    table: SurveyTable,
    config: &DigestConfig,
    profile: &PipelineProfile,
) -> DigestResult<SurveyDigest> {
    let table = if profile.dedup_by_email {
        dedup::deduplicate_by_email(table)
    } else {
        table
    };
    let total_responses = table.rows.len();
    info!("digest_table: {} responses", total_responses);

    let cols = resolve_columns(&table.headers, &config.columns, &config.value_columns)?;

    let countries = country_counts(&table, cols.country, profile)?;
    let countries_count = countries.iter().filter(|(k, _)| !k.trim().is_empty()).count();

    let ratings = table.values(cols.circle_rating);
    let circle_ratings = rating_counts(ratings.iter().copied(), profile.numeric_rating_keys);
    let avg_circle_rating = mean_rating(ratings.iter().copied());

    let value_ratings: Vec<(String, Vec<(String, usize)>)> = cols
        .value_columns
        .iter()
        .map(|(name, idx)| (name.clone(), value_counts(table.values(*idx))))
        .collect();

    let mut builder = Builder::new(&profile.lexicon).context(ClassifierSnafu {})?;
    for (kind, idx) in cols.free_text.iter() {
        for text in table.values(*idx) {
            builder.add_response(*kind, text);
        }
        debug!(
            "digest_table: {} responses for {}",
            builder.count(*kind),
            kind.key()
        );
    }
    let categorized_responses = builder.finish();

    let yes_count = table
        .values(cols.involvement)
        .iter()
        .filter(|v| v.trim() == "Yes")
        .count();

    Ok(SurveyDigest {
        total_responses,
        countries_count,
        avg_circle_rating,
        contribution_percentage: percentage(yes_count, total_responses),
        countries,
        communication_preferences: value_counts(table.values(cols.communication_preference)),
        circle_ratings,
        value_ratings,
        event_preferences: keyword_tallies(table.values(cols.events), EVENT_TALLIES),
        contribution_preferences: keyword_tallies(
            table.values(cols.contribution),
            CONTRIBUTION_TALLIES,
        ),
        categorized_responses,
    })
}

/// Builds the configuration from the command line, and the directory that
/// relative paths are resolved against.
fn load_config(args: &Args) -> DigestResult<(DigestConfig, PathBuf)> {
    let (mut config, root) = match (&args.config, &args.input) {
        (Some(config_path), _) => {
            let config = read_config(config_path)?;
            let root = Path::new(config_path)
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            (config, root)
        }
        (None, Some(input)) => {
            let config = DigestConfig {
                output_settings: OutputSettings::default(),
                input_sources: vec![FileSource {
                    provider: args.input_type.clone().unwrap_or_else(|| "csv".to_string()),
                    file_path: input.clone(),
                    excel_worksheet_name: None,
                }],
                profile: None,
                columns: ColumnNeedles::default(),
                value_columns: default_value_columns(),
            };
            (config, PathBuf::new())
        }
        (None, None) => return MissingInputSnafu {}.fail(),
    };

    // The command line takes precedence over the configuration file.
    if let (Some(_), Some(input)) = (&args.config, &args.input) {
        config.input_sources = vec![FileSource {
            provider: args.input_type.clone().unwrap_or_else(|| "csv".to_string()),
            file_path: input.clone(),
            excel_worksheet_name: None,
        }];
    }
    if let Some(name) = &args.excel_worksheet_name {
        for cfs in config.input_sources.iter_mut() {
            cfs.excel_worksheet_name = Some(name.clone());
        }
    }
    if let Some(profile) = &args.profile {
        config.profile = Some(profile.clone());
    }
    debug!("load_config: {:?}", config);
    Ok((config, root))
}

fn output_path(arg: &Option<String>, configured: &Option<String>, root: &Path) -> Option<String> {
    match (arg, configured) {
        (Some(p), _) => Some(p.clone()),
        (None, Some(p)) => Some(root.join(p).display().to_string()),
        (None, None) => None,
    }
}

/// Computes the report described by a configuration.
pub fn compute_report(config: &DigestConfig, root: &Path) -> DigestResult<JSValue> {
    let profile = PipelineProfile::from_name(config.profile.as_deref().unwrap_or("city"))?;
    info!(
        "compute_report: {} with the {} profile",
        config
            .output_settings
            .report_name
            .as_deref()
            .unwrap_or("survey"),
        profile.name
    );
    let table = read_sources(config, root)?;
    let digest = digest_table(table, config, &profile)?;
    Ok(build_report_js(&digest))
}

pub fn run_digest(args: &Args) -> DigestResult<()> {
    let (config, root) = load_config(args)?;
    let profile = PipelineProfile::from_name(config.profile.as_deref().unwrap_or("city"))?;

    let js_out = output_path(&args.js_out, &config.output_settings.js_output_path, &root)
        .filter(|p| !p.is_empty());
    if js_out.is_some() && !profile.js_output {
        whatever!(
            "JavaScript output is not available with the {} profile",
            profile.name
        );
    }

    let result_js = compute_report(&config, &root)?;

    let out = output_path(&args.out, &config.output_settings.output_path, &root)
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "stdout".to_string());
    write_report(&result_js, &out)?;

    if let Some(p) = js_out {
        let var_name = config
            .output_settings
            .js_variable_name
            .as_deref()
            .unwrap_or("citySurveyData");
        write_js(&result_js, &p, var_name)?;
    }

    // The reference report, if provided for comparison
    if let Some(reference) = &args.reference {
        check_reference(&result_js, reference)?;
    }
    Ok(())
}

/// Prints an error the way the command line reports it.
pub fn report_error(e: &DigestError) {
    eprintln!("An error occured {}", e);
    if let Some(bt) = ErrorCompat::backtrace(e) {
        eprintln!("trace: {}", bt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_dir() -> String {
        format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"))
    }

    fn run_fixture(test_name: &str) -> DigestResult<JSValue> {
        let config_path = format!("{}/{}/{}_config.json", test_dir(), test_name, test_name);
        let config = read_config(&config_path)?;
        let root = Path::new(&config_path)
            .parent()
            .context(MissingParentDirSnafu {})?;
        compute_report(&config, root)
    }

    fn test_wrapper(test_name: &str) -> JSValue {
        let res = run_fixture(test_name);
        match res {
            Ok(js) => {
                let reference = format!(
                    "{}/{}/{}_expected_summary.json",
                    test_dir(),
                    test_name,
                    test_name
                );
                if Path::new(&reference).exists() {
                    check_reference(&js, &reference).unwrap();
                }
                js
            }
            Err(e) => {
                report_error(&e);
                panic!("{}", e);
            }
        }
    }

    #[test]
    fn city_survey() {
        let js = test_wrapper("city_survey");
        assert_eq!(js["stats"]["total_responses"], json!(5));
        assert_eq!(js["stats"]["countries_count"], json!(4));
        assert_eq!(js["stats"]["avg_circle_rating"], json!(3.8));
        assert_eq!(js["stats"]["contribution_percentage"], json!(60));
        assert_eq!(
            js["countries"],
            json!({"Nigeria": 2, "Kenya": 1, "United Arab Emirates": 1, "Unknown": 1})
        );
        assert_eq!(
            js["circle_ratings"],
            json!({"3.0": 2, "4.0": 1, "5.0": 1})
        );
        // The first submission of ada@example.org was replaced by the later one.
        let goals = &js["categorized_responses"]["community_goals"];
        assert_eq!(
            goals["Career Development & Job Opportunities"],
            json!([{"text": "Find a remote job", "sentiment": "neutral"}])
        );
        let circle = &js["categorized_responses"]["circle_feedback"];
        assert_eq!(
            circle["Positive User Experience"][0]["sentiment"],
            json!("negative")
        );
        assert_eq!(
            js["event_preferences"],
            json!({"Skill-building Workshops": 2, "Local Meetups": 2, "Social Hangouts": 1, "Career Development": 1})
        );
    }

    #[test]
    fn baseline_survey() {
        let js = test_wrapper("baseline_survey");
        assert_eq!(js["stats"]["total_responses"], json!(4));
        assert_eq!(js["stats"]["countries_count"], json!(3));
        assert_eq!(
            js["countries"],
            json!({"Nigeria": 2, "Lagos, Nigeria": 1, "Kenya": 1})
        );
        assert_eq!(js["circle_ratings"], json!({"4": 2, "5": 1}));
        assert_eq!(js["stats"]["avg_circle_rating"], json!(4.3));
        assert_eq!(js["stats"]["contribution_percentage"], json!(50));
        assert_eq!(
            js["value_ratings"]["The community platform (Circle)"],
            json!({"Very valuable": 2, "Somewhat valuable": 1})
        );
    }

    #[test]
    fn missing_column() {
        let res = run_fixture("missing_column");
        match res {
            Err(DigestError::MissingColumn { needle, .. }) => {
                assert_eq!(needle, "How would you rate you experience of Circle")
            }
            x => panic!("expected a missing column error, got {:?}", x),
        }
    }

    #[test]
    fn missing_columns_are_errors() {
        let table = SurveyTable {
            headers: vec!["Timestamp".to_string()],
            rows: vec![],
        };
        let config = DigestConfig {
            output_settings: OutputSettings::default(),
            input_sources: vec![],
            profile: None,
            columns: ColumnNeedles::default(),
            value_columns: vec![],
        };
        assert!(digest_table(table, &config, &PipelineProfile::CITY).is_err());
    }

    #[test]
    fn unknown_provider() {
        let config = DigestConfig {
            output_settings: OutputSettings::default(),
            input_sources: vec![FileSource {
                provider: "dominion".to_string(),
                file_path: "x.json".to_string(),
                excel_worksheet_name: None,
            }],
            profile: None,
            columns: ColumnNeedles::default(),
            value_columns: vec![],
        };
        assert!(matches!(
            read_sources(&config, Path::new("")),
            Err(DigestError::UnknownProvider { .. })
        ));
    }
}

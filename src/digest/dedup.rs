// Removal of repeated submissions by the same respondent.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::digest::{io_common::*, *};

const DATETIME_FORMATS: [&str; 4] = [
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Parses the timestamp of a form submission. None sorts before any date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

fn find_column_ci(headers: &[String], needle: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.to_lowercase().contains(needle))
}

/// Keeps one row per e-mail address, the one submitted last.
///
/// Addresses are compared trimmed and lowercased. Rows without an address are
/// all kept. The surviving rows stay in their original order. When the table
/// has no e-mail or no timestamp column, it is returned unchanged.
pub fn deduplicate_by_email(table: SurveyTable) -> SurveyTable {
    let (email_idx, ts_idx) = match (
        find_column_ci(&table.headers, "email"),
        find_column_ci(&table.headers, "timestamp"),
    ) {
        (Some(e), Some(t)) => (e, t),
        _ => {
            debug!("deduplicate_by_email: no email or timestamp column, skipping");
            return table;
        }
    };

    // For each address, the index of the row kept so far and its timestamp.
    let mut latest: HashMap<String, (usize, Option<NaiveDateTime>)> = HashMap::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let email = match row.get(email_idx).map(|e| e.trim().to_lowercase()) {
            Some(e) if !e.is_empty() => e,
            _ => continue,
        };
        let raw_ts = row.get(ts_idx).unwrap_or("");
        let ts = parse_timestamp(raw_ts);
        if ts.is_none() && !raw_ts.trim().is_empty() {
            warn!(
                "deduplicate_by_email: could not parse timestamp {:?} in row {}",
                raw_ts, idx
            );
        }
        match latest.get(&email) {
            // Strictly later only: the earliest row wins ties.
            Some((_, best)) if ts <= *best => {}
            _ => {
                latest.insert(email, (idx, ts));
            }
        }
    }

    let total = table.rows.len();
    let rows: Vec<SurveyRow> = table
        .rows
        .into_iter()
        .enumerate()
        .filter(|(idx, row)| match row.get(email_idx).map(|e| e.trim().to_lowercase()) {
            Some(e) if !e.is_empty() => latest.get(&e).map(|(i, _)| i == idx).unwrap_or(false),
            _ => true,
        })
        .map(|(_, row)| row)
        .collect();
    info!(
        "deduplicate_by_email: kept {} rows out of {}",
        rows.len(),
        total
    );
    SurveyTable {
        headers: table.headers,
        rows,
    }
}

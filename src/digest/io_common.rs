use std::path::Path;

use crate::digest::*;

/// The content of a survey export: one header and one row per response.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyTable {
    pub headers: Vec<String>,
    pub rows: Vec<SurveyRow>,
}

/// The cells of one response, aligned with the headers. Empty cells are None.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct SurveyRow {
    pub cells: Vec<Option<String>>,
}

impl SurveyRow {
    pub fn get(&self, col_idx: usize) -> Option<&str> {
        self.cells.get(col_idx).and_then(|c| c.as_deref())
    }
}

impl SurveyTable {
    /// The non-empty values of a column, in row order.
    pub fn values(&self, col_idx: usize) -> Vec<&str> {
        self.rows.iter().filter_map(|r| r.get(col_idx)).collect()
    }

    /// Appends the rows of another export of the same survey.
    pub fn append(&mut self, other: SurveyTable, path: &str) -> DigestResult<()> {
        ensure!(
            self.headers == other.headers,
            MismatchedHeadersSnafu {
                path: path.to_string()
            }
        );
        self.rows.extend(other.rows);
        Ok(())
    }
}

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// Finds the first column whose header contains the needle.
pub fn find_column(headers: &[String], needle: &str) -> Option<usize> {
    headers.iter().position(|h| h.contains(needle))
}

/// Like `find_column`, but a missing column is an error.
pub fn require_column(headers: &[String], needle: &str) -> DigestResult<usize> {
    let idx = find_column(headers, needle).context(MissingColumnSnafu {
        needle: needle.to_string(),
        available: format!("{:?}", headers),
    })?;
    debug!("require_column: {:?} -> {:?}", needle, headers[idx]);
    Ok(idx)
}

/// Turns raw cell strings into a row of the given width.
pub fn make_row<'a>(cells: impl Iterator<Item = Option<&'a str>>, width: usize) -> SurveyRow {
    let mut res: Vec<Option<String>> = cells
        .take(width)
        .map(|c| match c {
            Some(s) if !s.is_empty() => Some(s.to_string()),
            _ => None,
        })
        .collect();
    res.resize(width, None);
    SurveyRow { cells: res }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec![
            "Timestamp".to_string(),
            "What country are you based in?".to_string(),
            "Email Address".to_string(),
        ]
    }

    #[test]
    fn columns_by_substring() {
        assert_eq!(find_column(&headers(), "What country are you based in"), Some(1));
        assert_eq!(find_column(&headers(), "Email"), Some(2));
        assert_eq!(find_column(&headers(), "email"), None);
        assert_eq!(require_column(&headers(), "Timestamp").unwrap(), 0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = require_column(&headers(), "How would you rate").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("How would you rate"), "{}", msg);
        assert!(msg.contains("Email Address"), "{}", msg);
    }

    #[test]
    fn rows_are_padded_and_empty_cells_dropped() {
        let row = make_row(vec![Some("a"), Some(""), Some("c")].into_iter(), 4);
        assert_eq!(row.get(0), Some("a"));
        assert_eq!(row.get(1), None);
        assert_eq!(row.get(2), Some("c"));
        assert_eq!(row.get(3), None);
        assert_eq!(row.get(10), None);
        let row = make_row(vec![Some("a"), Some("b"), Some("c")].into_iter(), 2);
        assert_eq!(row.cells.len(), 2);
    }

    #[test]
    fn append_checks_headers() {
        let mut t = SurveyTable {
            headers: headers(),
            rows: vec![],
        };
        let other = SurveyTable {
            headers: headers(),
            rows: vec![make_row(vec![Some("x")].into_iter(), 3)],
        };
        t.append(other, "b.csv").unwrap();
        assert_eq!(t.rows.len(), 1);
        let bad = SurveyTable {
            headers: vec!["Timestamp".to_string()],
            rows: vec![],
        };
        assert!(t.append(bad, "c.csv").is_err());
    }

    #[test]
    fn file_names() {
        assert_eq!(simplify_file_name("/tmp/data/responses.csv"), "responses.csv");
    }
}

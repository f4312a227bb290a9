// Primitives for reading CSV files.

use crate::digest::{io_common::*, *};

pub fn read_csv_table(path: &str) -> DigestResult<SurveyTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(OpeningCsvSnafu { path })?;
    let mut records = rdr.into_records();

    let header = records
        .next()
        .context(EmptyInputSnafu { path })?
        .context(CsvLineParseSnafu { path, lineno: 1usize })?;
    let headers: Vec<String> = header
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    debug!("read_csv_table: {:?} headers: {:?}", path, headers);

    let mut rows: Vec<SurveyRow> = Vec::new();
    for (idx, line_r) in records.enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        let row = make_row(line.iter().map(Some), headers.len());
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, row);
        rows.push(row);
    }
    info!(
        "read_csv_table: {} rows in {}",
        rows.len(),
        simplify_file_name(path)
    );
    Ok(SurveyTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tmp(name: &str, content: &str) -> String {
        let dir = std::env::temp_dir().join("survey-digest-io-csv");
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        fs::write(&p, content).unwrap();
        p.display().to_string()
    }

    #[test]
    fn reads_quoted_and_ragged_rows() {
        let p = write_tmp(
            "ragged.csv",
            "\u{feff}Timestamp ,\"Country, city\",Comments\n\
             1/2/2024 10:00:00,\"Lagos, Nigeria\",\"Great, thanks\"\n\
             1/3/2024 11:00:00,Kenya\n",
        );
        let t = read_csv_table(&p).unwrap();
        assert_eq!(t.headers, vec!["Timestamp", "Country, city", "Comments"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0].get(1), Some("Lagos, Nigeria"));
        assert_eq!(t.rows[0].get(2), Some("Great, thanks"));
        assert_eq!(t.rows[1].get(2), None);
        assert_eq!(t.values(2), vec!["Great, thanks"]);
    }

    #[test]
    fn empty_file() {
        let p = write_tmp("empty.csv", "");
        assert!(read_csv_table(&p).is_err());
    }

    #[test]
    fn missing_file() {
        assert!(read_csv_table("/nonexistent/survey-digest/missing.csv").is_err());
    }
}

// Primitives for reading Excel exports (Google Forms, Microsoft Forms).

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::digest::{io_common::*, *};

pub fn read_xlsx_table(path: &str, worksheet_name: Option<&str>) -> DigestResult<SurveyTable> {
    let wrange = get_range(path, worksheet_name)?;

    let mut iter = wrange.rows();
    let header = iter.next().context(EmptyInputSnafu { path })?;
    let headers: Vec<String> = header
        .iter()
        .map(|c| cell_text(c).unwrap_or_default().trim().to_string())
        .collect();
    debug!("read_xlsx_table: header: {:?}", headers);

    let mut rows: Vec<SurveyRow> = Vec::new();
    for (idx, row) in iter.enumerate() {
        let cells: Vec<Option<String>> = row.iter().map(cell_text).collect();
        let res = make_row(cells.iter().map(|c| c.as_deref()), headers.len());
        debug!("read_xlsx_table: idx: {:?} row: {:?}", idx, &res);
        rows.push(res);
    }
    info!(
        "read_xlsx_table: {} rows in {}",
        rows.len(),
        simplify_file_name(path)
    );
    Ok(SurveyTable { headers, rows })
}

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> DigestResult<Range<DataType>> {
    debug!(
        "read_xlsx_table: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                path,
                name: worksheet_name,
            })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyInputSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!(
                    "read_xlsx_table: path: {:?} worksheet: {:?}",
                    &path, &worksheet_name
                );
                Ok(wrange.clone())
            }
            many => AmbiguousWorksheetSnafu {
                path,
                count: many.len(),
            }
            .fail(),
        }
    }
}

fn cell_text(cell: &DataType) -> Option<String> {
    match cell {
        DataType::Empty => None,
        DataType::String(s) => Some(s.clone()),
        DataType::Int(i) => Some(i.to_string()),
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        DataType::Float(f) => Some(f.to_string()),
        DataType::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        DataType::DateTime(serial) => excel_serial_to_text(*serial),
        other => {
            warn!("read_xlsx_table: skipping cell {:?}", other);
            None
        }
    }
}

// Excel stores dates as days since 1899-12-30, the fraction being the time of day.
fn excel_serial_to_text(serial: f64) -> Option<String> {
    let base: NaiveDateTime = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.floor();
    let seconds = ((serial - days) * 86_400.0).round() as i64;
    let dt = base
        .checked_add_signed(Duration::days(days as i64))?
        .checked_add_signed(Duration::seconds(seconds))?;
    Some(dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

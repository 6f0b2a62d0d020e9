use std::path::Path;

use encoding_rs::WINDOWS_1253;
use tracing::{debug, info, warn};

use crate::error::{AiolosError, Result};
use crate::formats::{self, header_matches, FormatSpec};
use crate::models::{Cell, RawRow, RawTable};

const DELIMITERS: &[u8] = b";,\t";

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Load a statement into headers plus rows. `sheet` only applies to workbooks.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let table = match ext.as_str() {
        "csv" | "txt" => read_csv(path)?,
        #[cfg(feature = "xlsx")]
        "xlsx" | "xlsm" | "xls" | "ods" => read_workbook(path, sheet)?,
        _ => return Err(AiolosError::UnsupportedFile(path.display().to_string())),
    };
    #[cfg(not(feature = "xlsx"))]
    let _ = sheet;

    if table.headers.is_empty() {
        return Err(AiolosError::EmptyFile(path.display().to_string()));
    }
    info!(
        file = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "statement loaded"
    );
    Ok(table)
}

/// UTF-8 first (BOM stripped), otherwise the legacy Greek code page.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.trim_start_matches('\u{feff}').to_string(),
        Err(_) => {
            let (text, _, had_errors) = WINDOWS_1253.decode(bytes);
            if had_errors {
                warn!("file is neither UTF-8 nor Windows-1253; some characters were replaced");
            } else {
                debug!("decoded as Windows-1253");
            }
            text.into_owned()
        }
    }
}

fn sniff_delimiter(text: &str) -> u8 {
    let Some(header) = text.lines().find(|l| !l.trim().is_empty()) else {
        return b',';
    };
    // max_by_key keeps the last maximum, so walk the candidates in reverse
    // to let `;` win ties.
    let (delim, count) = DELIMITERS
        .iter()
        .rev()
        .map(|d| (*d, header.bytes().filter(|b| b == d).count()))
        .max_by_key(|(_, count)| *count)
        .unwrap_or((b',', 0));
    if count == 0 {
        b','
    } else {
        delim
    }
}

fn read_csv(path: &Path) -> Result<RawTable> {
    let text = decode(&std::fs::read(path)?);
    let delimiter = sniff_delimiter(&text);
    debug!(delimiter = %(delimiter as char).escape_default(), "csv delimiter");

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut table = RawTable::default();
    for result in rdr.records() {
        let record = result?;
        let cells: Vec<Cell> = record.iter().map(Cell::from_text).collect();
        if table.headers.is_empty() {
            if cells.iter().all(Cell::is_empty) {
                continue;
            }
            table.headers = record.iter().map(|h| h.trim().to_string()).collect();
            continue;
        }
        table.rows.push(cells);
    }
    Ok(table)
}

#[cfg(feature = "xlsx")]
fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    use calamine::{Data, Reader};

    let mut workbook = calamine::open_workbook_auto(path)?;
    let name = match sheet {
        Some(s) => s.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AiolosError::EmptyFile(path.display().to_string()))?,
    };
    let range = workbook
        .worksheet_range(&name)
        .map_err(|_| AiolosError::NotFound(format!("sheet '{name}'")))?;

    let to_cell = |d: &Data| match d {
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::String(s) | Data::DateTimeIso(s) => Cell::from_text(s),
        _ => Cell::Empty,
    };

    let mut table = RawTable::default();
    for row in range.rows() {
        let cells: Vec<Cell> = row.iter().map(to_cell).collect();
        if table.headers.is_empty() {
            if cells.iter().all(Cell::is_empty) {
                continue;
            }
            table.headers = cells.iter().map(|c| c.as_text().trim().to_string()).collect();
            continue;
        }
        table.rows.push(cells);
    }
    debug!(sheet = %name, "workbook sheet read");
    Ok(table)
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Pick the layout: explicit key, then header detection, then the configured default.
pub fn resolve_format(
    key: Option<&str>,
    table: &RawTable,
    default: Option<&str>,
) -> Result<&'static FormatSpec> {
    if let Some(key) = key {
        return formats::get_by_key(key).ok_or_else(|| AiolosError::UnknownFormat(key.to_string()));
    }
    if let Some(spec) = formats::detect(&table.headers) {
        debug!(format = spec.key, "layout detected from headers");
        return Ok(spec);
    }
    match default {
        Some(key) => {
            info!(format = key, "headers not recognised, using default format");
            formats::get_by_key(key).ok_or_else(|| AiolosError::UnknownFormat(key.to_string()))
        }
        None => Err(AiolosError::UndetectedFormat),
    }
}

fn column_index(table: &RawTable, column: &str, spec: &FormatSpec) -> Result<usize> {
    table
        .headers
        .iter()
        .position(|h| header_matches(h, column))
        .ok_or_else(|| AiolosError::MissingColumn {
            column: column.to_string(),
            format: spec.name.to_string(),
        })
}

/// Pull date, description and amount out of every non-blank row.
pub fn extract_rows(table: &RawTable, spec: &FormatSpec) -> Result<Vec<RawRow>> {
    let date_col = column_index(table, spec.columns.date, spec)?;
    let desc_col = column_index(table, spec.columns.description, spec)?;
    let amount_col = column_index(table, spec.columns.amount, spec)?;

    let cell = |cells: &[Cell], i: usize| cells.get(i).cloned().unwrap_or(Cell::Empty);

    Ok(table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, cells)| !cells.iter().all(Cell::is_empty))
        .map(|(i, cells)| RawRow {
            row: i + 1,
            date: cell(cells, date_col),
            description: cell(cells, desc_col).as_text().trim().to_string(),
            amount: cell(cells, amount_col),
        })
        .collect())
}

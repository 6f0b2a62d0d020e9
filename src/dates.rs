use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::Cell;

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d"];

const SHORT_YEAR_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"];

/// Largest serial Excel can display (31/12/9999).
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a textual date, day first.
pub fn parse_date_dmy(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    // chrono's %Y also takes "25", which would land in year 0025.
    let formats = if has_short_year(raw) {
        SHORT_YEAR_FORMATS
    } else {
        DATE_FORMATS
    };
    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
                .map(|dt| dt.date())
        })
}

fn has_short_year(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split(['/', '-', '.']).collect();
    parts.len() == 3
        && parts[0].len() <= 2
        && parts[2].len() == 2
        && parts[2].chars().all(|c| c.is_ascii_digit())
}

pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return None;
    }
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(Duration::try_days(serial as i64)?)
}

/// Render a date cell as `dd/mm/yyyy`, or an empty string if it is not a date.
pub fn format_date_cell(cell: &Cell) -> String {
    let date = match cell {
        Cell::Empty => None,
        Cell::Text(s) => parse_date_dmy(s),
        Cell::Number(n) => excel_serial_to_date(*n),
    };
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

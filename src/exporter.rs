use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::fmt::decimal;
use crate::formats::FormatSpec;
use crate::models::ClassifiedRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// `<dir>/<stem>-classified-<date>.<ext>`
pub fn default_output_path(dir: &Path, input: &Path, today: NaiveDate, json: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "statement".to_string());
    let ext = if json { "json" } else { "csv" };
    dir.join(format!("{stem}-classified-{}.{ext}", today.format("%Y-%m-%d")))
}

/// One output line in the layout's column order.
fn record_row(spec: &FormatSpec, r: &ClassifiedRecord) -> Vec<String> {
    let opt = |v: Option<f64>| v.map(decimal).unwrap_or_default();
    let mut row = vec![
        r.date.clone(),
        r.direction.label().to_string(),
        r.project_or_plot.clone(),
        r.expense_type.clone(),
        r.category_type.clone(),
        r.supplier.clone(),
        r.description.clone(),
        opt(r.amount_in),
        opt(r.amount_out),
        decimal(r.total),
    ];
    row.extend(spec.extra_columns.iter().map(|_| String::new()));
    row.push(r.original_description.clone());
    row
}

pub fn write_csv<W: Write>(mut out: W, spec: &FormatSpec, records: &[ClassifiedRecord]) -> Result<()> {
    out.write_all(UTF8_BOM)?;
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(spec.output_headers())?;
    for r in records {
        wtr.write_record(record_row(spec, r))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(out: W, records: &[ClassifiedRecord]) -> Result<()> {
    serde_json::to_writer_pretty(out, records)?;
    Ok(())
}

/// Write the records to `path`, creating parent directories as needed.
pub fn export(
    path: &Path,
    spec: &FormatSpec,
    records: &[ClassifiedRecord],
    json: bool,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    if json {
        write_json(&mut file, records)?;
    } else {
        write_csv(&mut file, spec, records)?;
    }
    file.flush()?;
    info!(path = %path.display(), records = records.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{ATHENS, DIAKOFTI};
    use crate::models::{Direction, REVIEW_MARKER};

    fn sample() -> Vec<ClassifiedRecord> {
        vec![
            ClassifiedRecord {
                date: "15/01/2025".to_string(),
                direction: Direction::Outcome,
                project_or_plot: "All Plots".to_string(),
                expense_type: "Soft Cost".to_string(),
                category_type: "Project management".to_string(),
                supplier: "Transportation".to_string(),
                description: "Athens Taxi".to_string(),
                amount_in: None,
                amount_out: Some(-12.5),
                total: -12.5,
                original_description: "UBER TRIP ATHENS".to_string(),
            },
            ClassifiedRecord {
                date: String::new(),
                direction: Direction::Income,
                project_or_plot: "Y1".to_string(),
                expense_type: "Soft Cost".to_string(),
                category_type: String::new(),
                supplier: String::new(),
                description: format!("{REVIEW_MARKER}ΚΑΤΑΘΕΣΗ Y1"),
                amount_in: Some(100.0),
                amount_out: None,
                total: 100.0,
                original_description: "ΚΑΤΑΘΕΣΗ Y1".to_string(),
            },
        ]
    }

    fn csv_text(spec: &FormatSpec) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, spec, &sample()).unwrap();
        assert!(buf.starts_with(UTF8_BOM));
        String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let text = csv_text(&DIAKOFTI);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Date,Income/Outcome,Plot,Expense Type,Category Type,Supplier,Description,In,Out,Total,Balance,Original Description"
        );
        assert_eq!(
            lines[1],
            "15/01/2025,Outcome,All Plots,Soft Cost,Project management,Transportation,Athens Taxi,,-12.50,-12.50,,UBER TRIP ATHENS"
        );
        assert!(lines[2].starts_with(",Income,Y1,"));
        assert!(lines[2].contains(",100.00,,100.00,,"));
    }

    #[test]
    fn test_csv_uses_layout_headers() {
        let text = csv_text(&ATHENS);
        let header = text.lines().next().unwrap();
        assert!(header.contains(",Project,"));
        assert!(header.contains(",Payment Details,"));
    }

    #[test]
    fn test_json_export() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v[0]["supplier"], "Transportation");
        assert_eq!(v[0]["direction"], "Outcome");
        assert!(v[0]["amount_in"].is_null());
        assert_eq!(v[1]["total"], 100.0);
    }

    #[test]
    fn test_default_output_path() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let p = default_output_path(Path::new("/data/exports"), Path::new("/in/jan.xlsx"), today, false);
        assert_eq!(p, PathBuf::from("/data/exports/jan-classified-2025-03-01.csv"));
        let j = default_output_path(Path::new("/data/exports"), Path::new("jan.csv"), today, true);
        assert_eq!(j, PathBuf::from("/data/exports/jan-classified-2025-03-01.json"));
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("out.csv");
        export(&path, &DIAKOFTI, &sample(), false).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
    }
}

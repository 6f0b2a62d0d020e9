use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::categorizer::{Classifier, ClassifySummary};
use crate::error::Result;
use crate::exporter::{default_output_path, export};
use crate::fmt::{euro, percent};
use crate::importer::{extract_rows, read_table, resolve_format};
use crate::models::ClassifiedRecord;
use crate::settings::load_settings;

pub struct ClassifyArgs {
    pub file: String,
    pub format: Option<String>,
    pub sheet: Option<String>,
    pub output: Option<String>,
    pub json: bool,
    pub preview: Option<usize>,
    pub review_only: bool,
}

pub fn run(args: ClassifyArgs) -> Result<()> {
    let settings = load_settings();
    let input = PathBuf::from(&args.file);

    let table = read_table(&input, args.sheet.as_deref())?;
    let spec = resolve_format(args.format.as_deref(), &table, settings.default_format.as_deref())?;
    let rows = extract_rows(&table, spec)?;
    let records = Classifier::new(spec)?.classify(&rows)?;

    let output = match args.output {
        Some(p) => PathBuf::from(p),
        None => default_output_path(
            &settings.exports_dir(),
            &input,
            chrono::Local::now().date_naive(),
            args.json,
        ),
    };
    export(&output, spec, &records, args.json)?;

    let summary = ClassifySummary::from_records(&records);
    println!(
        "{} ({}): {} records, {} need review, {} classified",
        spec.name.bold(),
        spec.key,
        summary.total,
        summary.needs_review,
        percent(summary.classified_pct())
    );
    println!("Written to {}", output.display());

    if let Some(n) = args.preview {
        print_preview(spec.project_header, &records, n, args.review_only);
    }
    Ok(())
}

fn print_preview(project_header: &str, records: &[ClassifiedRecord], n: usize, review_only: bool) {
    let mut table = Table::new();
    table.set_header(vec![
        "Date",
        "In/Out",
        project_header,
        "Category",
        "Supplier",
        "Description",
        "Total",
    ]);
    for r in records
        .iter()
        .filter(|r| !review_only || r.needs_review())
        .take(n)
    {
        let description = if r.needs_review() {
            Cell::new(r.description.as_str().yellow())
        } else {
            Cell::new(&r.description)
        };
        table.add_row(vec![
            Cell::new(&r.date),
            Cell::new(r.direction.label()),
            Cell::new(&r.project_or_plot),
            Cell::new(&r.category_type),
            Cell::new(&r.supplier),
            description,
            Cell::new(euro(r.total)),
        ]);
    }
    println!("\n{table}");
}

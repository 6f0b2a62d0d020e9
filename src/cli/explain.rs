use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::amount::normalize;
use crate::categorizer::Classifier;
use crate::error::{AiolosError, Result};
use crate::formats;
use crate::models::{Cell as RawCell, RawRow};

pub fn run(description: &str, amount: &str, format: &str) -> Result<()> {
    let spec = formats::get_by_key(format).ok_or_else(|| AiolosError::UnknownFormat(format.to_string()))?;
    let classifier = Classifier::new(spec)?;
    let row = RawRow {
        row: 1,
        date: RawCell::Empty,
        description: description.trim().to_string(),
        amount: RawCell::from_text(amount),
    };
    let normalized = normalize(&row.amount, row.row, "amount")?;
    let explained = classifier.explain(&row, normalized);

    println!("Layout:         {}", spec.name);
    let label = format!("Detected {}:", spec.project_header.to_lowercase());
    println!("{label:<16}{}", explained.detected_project);
    if explained.evaluation.matched() {
        println!("Rules fired:    {}", explained.evaluation.fired.join(" \u{2192} "));
    } else {
        println!("Rules fired:    {}", "none, needs review".yellow());
    }

    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    for (key, value) in explained.record.field_map() {
        if key == "DATE" {
            continue;
        }
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    println!("{table}");
    Ok(())
}

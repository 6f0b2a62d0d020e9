use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::formats::ALL_FORMATS;
use crate::settings::load_settings;

pub fn list() -> Result<()> {
    let default = load_settings().default_format;

    let mut table = Table::new();
    table.set_header(vec!["Key", "Name", "Date", "Description", "Amount", "Fallback", "Rules"]);
    for spec in ALL_FORMATS {
        let key = if default.as_deref() == Some(spec.key) {
            format!("{} *", spec.key)
        } else {
            spec.key.to_string()
        };
        table.add_row(vec![
            Cell::new(key),
            Cell::new(spec.name),
            Cell::new(spec.columns.date),
            Cell::new(spec.columns.description),
            Cell::new(spec.columns.amount),
            Cell::new(spec.projects.fallback()),
            Cell::new(spec.rules.len()),
        ]);
    }
    println!("Formats\n{table}");
    Ok(())
}

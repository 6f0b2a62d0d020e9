use comfy_table::{Cell, Table};

use crate::error::{AiolosError, Result};
use crate::formats;

pub fn list(format: &str) -> Result<()> {
    let spec = formats::get_by_key(format).ok_or_else(|| AiolosError::UnknownFormat(format.to_string()))?;

    let mut table = Table::new();
    table.set_header(vec!["#", "Rule", "When", "Sets"]);
    for (i, rule) in spec.rules.iter().enumerate() {
        let when = rule
            .when
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\nand ");
        let sets = rule
            .set
            .assignments()
            .iter()
            .map(|(field, value)| format!("{field} = {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(rule.name),
            Cell::new(when),
            Cell::new(sets),
        ]);
    }
    println!("{} rules ({}, later rules win)\n{table}", spec.name, spec.rules.len());
    Ok(())
}

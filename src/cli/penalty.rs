use colored::Colorize;
use comfy_table::{Cell, Table};

use super::date_arg;
use crate::error::Result;
use crate::fmt::euro;
use crate::penalty::{compute, RateSchedule};
use crate::settings::load_settings;

pub fn run(principal: f64, from: &str, to: Option<&str>, json: bool) -> Result<()> {
    let schedule = RateSchedule::from_months(&load_settings().penalty_rates)?;
    let start = date_arg(Some(from))?;
    let end = date_arg(to)?;
    let penalty = compute(principal, start, end, &schedule)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&penalty)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Month", "Days", "Rate", "Interest"]);
    for m in &penalty.months {
        table.add_row(vec![
            Cell::new(&m.month),
            Cell::new(m.days),
            Cell::new(format!("{:.2}%", m.rate)),
            Cell::new(euro(m.amount)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(penalty.days),
        Cell::new(""),
        Cell::new(euro(penalty.total).bold()),
    ]);

    println!(
        "Late-payment interest on {} from {} to {}\n{table}",
        euro(penalty.principal),
        penalty.start.format("%d/%m/%Y"),
        penalty.end.format("%d/%m/%Y")
    );
    println!("Amount due: {}", euro(penalty.principal + penalty.total));
    Ok(())
}

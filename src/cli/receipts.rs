use std::path::PathBuf;

use comfy_table::{Cell, Table};

use super::date_arg;
use crate::documents::{receipt_fields, render_to_file, RECEIPT_TEMPLATE};
use crate::error::Result;
use crate::fmt::euro;
use crate::receipts::{NewReceipt, ReceiptFilter, ReceiptStore};
use crate::settings::load_settings;

fn store() -> ReceiptStore {
    ReceiptStore::new(load_settings().receipts_path())
}

pub fn add(
    from: &str,
    amount: f64,
    purpose: &str,
    date: Option<&str>,
    project: &str,
    method: &str,
) -> Result<()> {
    let receipt = store().append(NewReceipt {
        date: date_arg(date)?,
        received_from: from.trim().to_string(),
        amount,
        purpose: purpose.trim().to_string(),
        project: project.trim().to_string(),
        method: method.trim().to_string(),
    })?;
    println!(
        "Issued receipt {} (ID {}): {} from {}",
        receipt.number,
        receipt.id,
        euro(receipt.amount),
        receipt.received_from
    );
    Ok(())
}

pub fn list(filter: ReceiptFilter) -> Result<()> {
    let store = store();
    let receipts = store.search(&filter)?;
    if receipts.is_empty() {
        if filter.search.is_none() && filter.year.is_none() {
            println!("No receipts issued yet.");
        } else {
            println!("No receipts match.");
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Number", "Date", "From", "Amount", "Purpose", "Project"]);
    for r in &receipts {
        table.add_row(vec![
            Cell::new(r.id),
            Cell::new(&r.number),
            Cell::new(r.date.format("%d/%m/%Y")),
            Cell::new(&r.received_from),
            Cell::new(euro(r.amount)),
            Cell::new(&r.purpose),
            Cell::new(&r.project),
        ]);
    }
    let total: f64 = receipts.iter().map(|r| r.amount).sum();
    println!("Receipts\n{table}\nTotal received: {}", euro(total));
    Ok(())
}

pub fn delete(id: u32) -> Result<()> {
    let removed = store().delete(id)?;
    println!("Deleted receipt {} (ID {id})", removed.number);
    Ok(())
}

pub fn render(id: u32, template: Option<&str>, output: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let receipt = ReceiptStore::new(settings.receipts_path()).get(id)?;
    let out = match output {
        Some(p) => PathBuf::from(p),
        None => settings.documents_dir().join(format!("{}.txt", receipt.number)),
    };
    let fields = receipt_fields(&receipt, &settings.company_name);
    let rendered = render_to_file(template.map(std::path::Path::new), RECEIPT_TEMPLATE, &fields, &out)?;
    println!("Wrote {}", out.display());
    if !rendered.unresolved.is_empty() {
        println!("Unfilled placeholders: {}", rendered.unresolved.join(", "));
    }
    Ok(())
}

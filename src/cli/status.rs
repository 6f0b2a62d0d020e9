use crate::error::Result;
use crate::penalty::RateSchedule;
use crate::receipts::ReceiptStore;
use crate::settings::{load_settings, settings_file_exists, settings_path};

pub fn run() -> Result<()> {
    let settings = load_settings();

    println!("Settings:   {}", settings_path().display());
    println!(
        "Company:    {}",
        if settings.company_name.is_empty() { "(not set)" } else { &settings.company_name }
    );
    println!("Data dir:   {}", settings.data_path().display());
    println!("Default:    {}", settings.default_format.as_deref().unwrap_or("(detect)"));
    let schedule = RateSchedule::from_months(&settings.penalty_rates)?;
    if let Some((from, rate)) = schedule.entries().last() {
        let source = if settings.penalty_rates.is_empty() { "built-in" } else { "custom" };
        println!("Penalty:    {rate:.2}% since {} ({source})", from.format("%m/%Y"));
    }

    if !settings_file_exists() {
        println!();
        println!("Not initialized. Run `aiolos init` to set up.");
        return Ok(());
    }

    let exports = match std::fs::read_dir(settings.exports_dir()) {
        Ok(entries) => entries.filter_map(|e| e.ok()).count(),
        Err(_) => 0,
    };
    let store = ReceiptStore::new(settings.receipts_path());
    let receipts = store.list()?.len();

    println!();
    println!("Exports:    {exports}");
    println!("Receipts:   {receipts} ({})", store.path().display());
    Ok(())
}

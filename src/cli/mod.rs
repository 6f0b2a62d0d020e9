pub mod classify;
pub mod explain;
pub mod formats;
pub mod init;
pub mod instruction;
pub mod penalty;
pub mod receipts;
pub mod rules;
pub mod status;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::dates::parse_date_dmy;
use crate::error::{AiolosError, Result};

/// Parse a user-supplied date (`dd/mm/yyyy` or `yyyy-mm-dd`), or today when absent.
pub(crate) fn date_arg(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        None => Ok(chrono::Local::now().date_naive()),
        Some(s) => parse_date_dmy(s).ok_or_else(|| AiolosError::Other(format!("Cannot read date '{s}'"))),
    }
}

#[derive(Parser)]
#[command(
    name = "aiolos",
    version,
    about = "Categorize bank statements for property development ledgers."
)]
pub struct Cli {
    /// Log more to stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save settings and create the data directory.
    Init {
        /// Path for aiolos data (default: ~/Documents/aiolos)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Company name printed on receipts and instructions
        #[arg(long)]
        company: Option<String>,
        /// Layout used when a file's headers are not recognised
        #[arg(long = "default-format")]
        default_format: Option<String>,
    },
    /// Classify a statement file and export the result.
    Classify {
        /// Path to a CSV or XLSX statement
        file: String,
        /// Layout key: diakofti, athens, ilisia (default: detect from headers)
        #[arg(long)]
        format: Option<String>,
        /// Worksheet name for workbooks (default: first sheet)
        #[arg(long)]
        sheet: Option<String>,
        /// Output path (default: <data_dir>/exports/<name>-classified-<date>.csv)
        #[arg(long, short)]
        output: Option<String>,
        /// Write JSON instead of CSV
        #[arg(long)]
        json: bool,
        /// Print the first N records as a table
        #[arg(long)]
        preview: Option<usize>,
        /// Only preview records that need review
        #[arg(long = "review-only")]
        review_only: bool,
    },
    /// Show which rules fire for one description and amount.
    Explain {
        /// Transaction description as it appears on the statement
        description: String,
        /// Amount as written on the statement, e.g. -12,50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Layout key
        #[arg(long, default_value = "diakofti")]
        format: String,
    },
    /// List the supported statement layouts.
    Formats,
    /// Print a layout's rule table in evaluation order.
    Rules {
        /// Layout key
        #[arg(long, default_value = "diakofti")]
        format: String,
    },
    /// Issue and manage payment receipts.
    Receipts {
        #[command(subcommand)]
        command: ReceiptsCommands,
    },
    /// Render a payment instruction for a bank transfer.
    Instruction {
        /// Who receives the money
        #[arg(long)]
        beneficiary: String,
        /// Beneficiary IBAN
        #[arg(long)]
        iban: String,
        /// Amount in euro
        #[arg(long)]
        amount: f64,
        /// Payment reason
        #[arg(long)]
        reason: String,
        /// Instruction date (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Template file with {{KEY}} placeholders
        #[arg(long)]
        template: Option<String>,
        /// Output path (default: <data_dir>/documents/instruction-<date>.txt)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Late-payment interest on an overdue amount.
    Penalty {
        /// Overdue amount in euro
        principal: f64,
        /// Due date; interest runs from the day after
        #[arg(long)]
        from: String,
        /// Last day of interest (default: today)
        #[arg(long)]
        to: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show settings and data locations.
    Status,
}

#[derive(Subcommand)]
pub enum ReceiptsCommands {
    /// Issue a new receipt.
    Add {
        /// Payer name
        #[arg(long)]
        from: String,
        /// Amount received in euro
        #[arg(long)]
        amount: f64,
        /// What the payment is for
        #[arg(long)]
        purpose: String,
        /// Receipt date (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Plot or project the payment belongs to
        #[arg(long, default_value = "")]
        project: String,
        /// Payment method
        #[arg(long, default_value = "Bank transfer")]
        method: String,
    },
    /// List issued receipts.
    List {
        /// Only receipts whose payer, purpose, project or number contains this text
        #[arg(long, short)]
        search: Option<String>,
        /// Only receipts dated in this year
        #[arg(long)]
        year: Option<i32>,
    },
    /// Delete a receipt by ID.
    Delete {
        /// Receipt ID
        id: u32,
    },
    /// Render a receipt to a text document.
    Render {
        /// Receipt ID
        id: u32,
        /// Template file with {{KEY}} placeholders
        #[arg(long)]
        template: Option<String>,
        /// Output path (default: <data_dir>/documents/<number>.txt)
        #[arg(long, short)]
        output: Option<String>,
    },
}

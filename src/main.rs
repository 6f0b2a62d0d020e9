mod amount;
mod categorizer;
mod cli;
mod dates;
mod documents;
mod error;
mod exporter;
mod fmt;
mod formats;
mod importer;
mod models;
mod penalty;
mod plots;
mod receipts;
mod rules;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::classify::ClassifyArgs;
use cli::instruction::InstructionArgs;
use cli::{Cli, Commands, ReceiptsCommands};
use receipts::ReceiptFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Init {
            data_dir,
            company,
            default_format,
        } => cli::init::run(data_dir, company, default_format),
        Commands::Classify {
            file,
            format,
            sheet,
            output,
            json,
            preview,
            review_only,
        } => cli::classify::run(ClassifyArgs {
            file,
            format,
            sheet,
            output,
            json,
            preview,
            review_only,
        }),
        Commands::Explain {
            description,
            amount,
            format,
        } => cli::explain::run(&description, &amount, &format),
        Commands::Formats => cli::formats::list(),
        Commands::Rules { format } => cli::rules::list(&format),
        Commands::Receipts { command } => match command {
            ReceiptsCommands::Add {
                from,
                amount,
                purpose,
                date,
                project,
                method,
            } => cli::receipts::add(&from, amount, &purpose, date.as_deref(), &project, &method),
            ReceiptsCommands::List { search, year } => {
                cli::receipts::list(ReceiptFilter { search, year })
            }
            ReceiptsCommands::Delete { id } => cli::receipts::delete(id),
            ReceiptsCommands::Render {
                id,
                template,
                output,
            } => cli::receipts::render(id, template.as_deref(), output.as_deref()),
        },
        Commands::Instruction {
            beneficiary,
            iban,
            amount,
            reason,
            date,
            template,
            output,
        } => cli::instruction::run(InstructionArgs {
            beneficiary,
            iban,
            amount,
            reason,
            date,
            template,
            output,
        }),
        Commands::Penalty {
            principal,
            from,
            to,
            json,
        } => cli::penalty::run(principal, &from, to.as_deref(), json),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

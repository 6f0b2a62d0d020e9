use std::path::{Path, PathBuf};

use super::date_arg;
use crate::documents::{render_to_file, PaymentInstruction, INSTRUCTION_TEMPLATE};
use crate::error::{AiolosError, Result};
use crate::fmt::euro;
use crate::settings::load_settings;

pub struct InstructionArgs {
    pub beneficiary: String,
    pub iban: String,
    pub amount: f64,
    pub reason: String,
    pub date: Option<String>,
    pub template: Option<String>,
    pub output: Option<String>,
}

pub fn run(args: InstructionArgs) -> Result<()> {
    if !args.amount.is_finite() || args.amount <= 0.0 {
        return Err(AiolosError::Other(format!(
            "Amount must be positive, got {}",
            args.amount
        )));
    }
    let settings = load_settings();
    let instruction = PaymentInstruction {
        date: date_arg(args.date.as_deref())?,
        beneficiary: args.beneficiary.trim().to_string(),
        iban: args.iban,
        amount: args.amount,
        reason: args.reason.trim().to_string(),
    };
    let out = match args.output {
        Some(p) => PathBuf::from(p),
        None => instruction.default_output_path(&settings.documents_dir()),
    };

    let fields = instruction.fields(&settings.company_name);
    let rendered = render_to_file(
        args.template.as_deref().map(Path::new),
        INSTRUCTION_TEMPLATE,
        &fields,
        &out,
    )?;
    println!(
        "Payment instruction: {} to {}",
        euro(instruction.amount),
        instruction.beneficiary
    );
    println!("Wrote {}", out.display());
    if !rendered.unresolved.is_empty() {
        println!("Unfilled placeholders: {}", rendered.unresolved.join(", "));
    }
    Ok(())
}

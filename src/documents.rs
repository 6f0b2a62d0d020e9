//! Plain-text receipts and payment instructions from `{{KEY}}` templates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::warn;

use crate::error::Result;
use crate::fmt::euro;
use crate::receipts::Receipt;

pub const RECEIPT_TEMPLATE: &str = "\
{{COMPANY}}

RECEIPT {{RECEIPT_NO}}
Date: {{DATE}}

Received from: {{RECEIVED_FROM}}
Amount: {{AMOUNT}}
For: {{PURPOSE}}
Project: {{PROJECT}}
Payment method: {{METHOD}}

Signature: ______________________
";

pub const INSTRUCTION_TEMPLATE: &str = "\
{{COMPANY}}

PAYMENT INSTRUCTION
Date: {{DATE}}

Please transfer {{AMOUNT}}
to {{BENEFICIARY}}
IBAN {{IBAN}}
Reason: {{REASON}}

Authorised by: ______________________
";

#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    /// Placeholders that had no value, in order of first appearance.
    pub unresolved: Vec<String>,
}

/// Replace every `{{KEY}}` (inner whitespace allowed) with its value.
/// Unknown keys are left as written.
pub fn render(template: &str, fields: &BTreeMap<String, String>) -> Result<Rendered> {
    let re = Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}")?;
    let mut unresolved: Vec<String> = Vec::new();
    let text = re
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match fields.get(key) {
                Some(value) => value.clone(),
                None => {
                    if !unresolved.iter().any(|k| k == key) {
                        unresolved.push(key.to_string());
                    }
                    caps[0].to_string()
                }
            }
        })
        .into_owned();
    for key in &unresolved {
        warn!(placeholder = %key, "no value for template placeholder");
    }
    Ok(Rendered { text, unresolved })
}

/// Render `template` (or `fallback` when no file is given) into `out`.
pub fn render_to_file(
    template: Option<&Path>,
    fallback: &str,
    fields: &BTreeMap<String, String>,
    out: &Path,
) -> Result<Rendered> {
    let source = match template {
        Some(path) => std::fs::read_to_string(path)?,
        None => fallback.to_string(),
    };
    let rendered = render(&source, fields)?;
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, &rendered.text)?;
    Ok(rendered)
}

fn date_text(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn receipt_fields(receipt: &Receipt, company: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("RECEIPT_NO".to_string(), receipt.number.clone()),
        ("DATE".to_string(), date_text(receipt.date)),
        ("RECEIVED_FROM".to_string(), receipt.received_from.clone()),
        ("AMOUNT".to_string(), euro(receipt.amount)),
        ("PURPOSE".to_string(), receipt.purpose.clone()),
        ("PROJECT".to_string(), receipt.project.clone()),
        ("METHOD".to_string(), receipt.method.clone()),
        ("COMPANY".to_string(), company.to_string()),
    ])
}

#[derive(Debug, Clone)]
pub struct PaymentInstruction {
    pub date: NaiveDate,
    pub beneficiary: String,
    pub iban: String,
    pub amount: f64,
    pub reason: String,
}

impl PaymentInstruction {
    pub fn fields(&self, company: &str) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("DATE".to_string(), date_text(self.date)),
            ("BENEFICIARY".to_string(), self.beneficiary.clone()),
            ("IBAN".to_string(), format_iban(&self.iban)),
            ("AMOUNT".to_string(), euro(self.amount)),
            ("REASON".to_string(), self.reason.clone()),
            ("COMPANY".to_string(), company.to_string()),
        ])
    }

    /// First free `instruction-<date>-<beneficiary>[-N].txt` in `dir`.
    pub fn default_output_path(&self, dir: &Path) -> PathBuf {
        let slug: String = self
            .beneficiary
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        let mut stem = format!("instruction-{}", self.date.format("%Y-%m-%d"));
        if !slug.is_empty() {
            stem.push('-');
            stem.push_str(&slug);
        }
        let mut path = dir.join(format!("{stem}.txt"));
        let mut n = 2;
        while path.exists() {
            path = dir.join(format!("{stem}-{n}.txt"));
            n += 1;
        }
        path
    }
}

/// Uppercase and group in fours: "GR16 0110 1250 ...".
pub fn format_iban(raw: &str) -> String {
    let compact: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();
    compact
        .chunks(4)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

use crate::error::{AiolosError, Result};
use crate::models::{Cell, Direction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedAmount {
    pub signed: f64,
    pub magnitude: f64,
    pub is_income: bool,
}

impl NormalizedAmount {
    pub fn new(signed: f64) -> Self {
        Self {
            signed,
            magnitude: signed.abs(),
            // Strict: a zero amount is an outcome.
            is_income: signed > 0.0,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.is_income {
            Direction::Income
        } else {
            Direction::Outcome
        }
    }
}

/// Strip European formatting from a textual amount: `.` thousands, `,` decimal.
///
/// Everything except digits, dots and a leading minus is dropped afterwards, so
/// currency symbols and stray spaces from dirty feeds do not matter. Returns
/// `None` when what is left still is not a number.
pub fn parse_european(raw: &str) -> Option<f64> {
    let s = raw.trim().replace('.', "").replace(',', ".");
    let mut cleaned = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '0'..='9' | '.' => cleaned.push(c),
            '-' if cleaned.is_empty() => cleaned.push(c),
            _ => {}
        }
    }
    if cleaned.is_empty() || cleaned == "-" {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalize one amount cell. `row` and `column` only feed the error message.
pub fn normalize(cell: &Cell, row: usize, column: &str) -> Result<NormalizedAmount> {
    let signed = match cell {
        Cell::Number(n) if n.is_finite() => Some(*n),
        Cell::Number(_) => None,
        Cell::Text(s) => parse_european(s),
        Cell::Empty => Some(0.0),
    };
    signed
        .map(NormalizedAmount::new)
        .ok_or_else(|| AiolosError::InvalidAmount {
            row,
            column: column.to_string(),
            value: cell.as_text(),
        })
}

use std::collections::BTreeMap;

use serde::Serialize;

/// Prefix put on a record's description when no rule matched it.
pub const REVIEW_MARKER: &str = "\u{26A0} ";

/// A single cell as read from a CSV or spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn from_text(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Cell::Empty
        } else {
            Cell::Text(raw.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Text form, used for descriptions and error messages.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Headers plus data rows, before any layout is applied.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// One transaction pulled out of a [`RawTable`] by a format's column mapping.
#[derive(Debug, Clone)]
pub struct RawRow {
    /// 1-based data row in the source file.
    pub row: usize,
    pub date: Cell,
    pub description: String,
    pub amount: Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Income,
    Outcome,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Outcome => "Outcome",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    pub date: String,
    pub direction: Direction,
    pub project_or_plot: String,
    pub expense_type: String,
    pub category_type: String,
    pub supplier: String,
    pub description: String,
    pub amount_in: Option<f64>,
    pub amount_out: Option<f64>,
    pub total: f64,
    pub original_description: String,
}

impl ClassifiedRecord {
    pub fn needs_review(&self) -> bool {
        self.description.starts_with(REVIEW_MARKER)
    }

    /// Flat key/value view for template substitution.
    pub fn field_map(&self) -> BTreeMap<String, String> {
        let amount = |v: Option<f64>| v.map(|n| format!("{n:.2}")).unwrap_or_default();
        let mut map = BTreeMap::new();
        map.insert("DATE".to_string(), self.date.clone());
        map.insert("DIRECTION".to_string(), self.direction.label().to_string());
        map.insert("PLOT".to_string(), self.project_or_plot.clone());
        map.insert("EXPENSE_TYPE".to_string(), self.expense_type.clone());
        map.insert("CATEGORY".to_string(), self.category_type.clone());
        map.insert("SUPPLIER".to_string(), self.supplier.clone());
        map.insert("DESCRIPTION".to_string(), self.description.clone());
        map.insert("IN".to_string(), amount(self.amount_in));
        map.insert("OUT".to_string(), amount(self.amount_out));
        map.insert("TOTAL".to_string(), format!("{:.2}", self.total));
        map.insert(
            "ORIGINAL_DESCRIPTION".to_string(),
            self.original_description.clone(),
        );
        map
    }
}

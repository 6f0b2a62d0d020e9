//! Declarative classification rules.
//!
//! A rule is a conjunction of [`Cond`]s plus a [`Patch`] of field values. Rule
//! tables are evaluated top to bottom without early exit; every matching
//! rule's patch is merged over the previous ones, so for any field the last
//! matching rule that sets it wins.

use std::fmt;

use crate::amount::NormalizedAmount;

/// What a rule can see about a row.
#[derive(Debug, Clone, Copy)]
pub struct RowFacts<'a> {
    /// Uppercased description.
    pub text: &'a str,
    pub amount: NormalizedAmount,
}

#[derive(Debug, Clone, Copy)]
pub enum Cond {
    /// Description contains at least one of the keywords.
    Any(&'static [&'static str]),
    /// Description contains every keyword.
    All(&'static [&'static str]),
    /// Description contains none of the keywords.
    Without(&'static [&'static str]),
    /// Signed amount equals the value.
    Amount(f64),
    /// Signed amount is one of the values.
    AmountIn(&'static [f64]),
    /// Magnitude is at most the value.
    AtMost(f64),
    /// Magnitude is at least the value.
    AtLeast(f64),
    Income,
    Outcome,
}

fn same_amount(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005
}

impl Cond {
    pub fn holds(&self, facts: &RowFacts) -> bool {
        match *self {
            Cond::Any(words) => words.iter().any(|w| facts.text.contains(w)),
            Cond::All(words) => words.iter().all(|w| facts.text.contains(w)),
            Cond::Without(words) => !words.iter().any(|w| facts.text.contains(w)),
            Cond::Amount(v) => same_amount(facts.amount.signed, v),
            Cond::AmountIn(values) => values.iter().any(|v| same_amount(facts.amount.signed, *v)),
            Cond::AtMost(v) => facts.amount.magnitude <= v,
            Cond::AtLeast(v) => facts.amount.magnitude >= v,
            Cond::Income => facts.amount.is_income,
            Cond::Outcome => !facts.amount.is_income,
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amounts = |values: &[f64]| {
            values.iter().map(|v| format!("{v:.2}")).collect::<Vec<_>>().join(" | ")
        };
        match self {
            Cond::Any(words) => write!(f, "any of {}", words.join(" | ")),
            Cond::All(words) => write!(f, "all of {}", words.join(" & ")),
            Cond::Without(words) => write!(f, "none of {}", words.join(" | ")),
            Cond::Amount(v) => write!(f, "amount = {v:.2}"),
            Cond::AmountIn(values) => write!(f, "amount in {}", amounts(*values)),
            Cond::AtMost(v) => write!(f, "|amount| <= {v:.2}"),
            Cond::AtLeast(v) => write!(f, "|amount| >= {v:.2}"),
            Cond::Income => f.write_str("income"),
            Cond::Outcome => f.write_str("outcome"),
        }
    }
}

/// Partial overwrite of a record's descriptive fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Patch {
    pub category_type: Option<&'static str>,
    pub supplier: Option<&'static str>,
    pub description: Option<&'static str>,
    pub expense_type: Option<&'static str>,
    pub project_or_plot: Option<&'static str>,
}

impl Patch {
    pub const fn new() -> Self {
        Self {
            category_type: None,
            supplier: None,
            description: None,
            expense_type: None,
            project_or_plot: None,
        }
    }

    pub const fn category(self, v: &'static str) -> Self {
        Self { category_type: Some(v), ..self }
    }

    pub const fn supplier(self, v: &'static str) -> Self {
        Self { supplier: Some(v), ..self }
    }

    pub const fn label(self, v: &'static str) -> Self {
        Self { description: Some(v), ..self }
    }

    pub const fn expense(self, v: &'static str) -> Self {
        Self { expense_type: Some(v), ..self }
    }

    pub const fn plot(self, v: &'static str) -> Self {
        Self { project_or_plot: Some(v), ..self }
    }

    /// `field=value` pairs for the fields this patch sets.
    pub fn assignments(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("expense", self.expense_type),
            ("category", self.category_type),
            ("supplier", self.supplier),
            ("description", self.description),
            ("plot", self.project_or_plot),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// `later` wins for every field it sets.
    pub fn merge(self, later: Patch) -> Patch {
        Patch {
            category_type: later.category_type.or(self.category_type),
            supplier: later.supplier.or(self.supplier),
            description: later.description.or(self.description),
            expense_type: later.expense_type.or(self.expense_type),
            project_or_plot: later.project_or_plot.or(self.project_or_plot),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: &'static [Cond],
    pub set: Patch,
}

impl Rule {
    pub fn matches(&self, facts: &RowFacts) -> bool {
        self.when.iter().all(|c| c.holds(facts))
    }
}

/// Result of folding a rule table over one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Names of matching rules, in table order.
    pub fired: Vec<&'static str>,
    pub patch: Patch,
}

impl Evaluation {
    pub fn matched(&self) -> bool {
        !self.fired.is_empty()
    }
}

pub fn evaluate(rules: &[Rule], facts: &RowFacts) -> Evaluation {
    rules
        .iter()
        .filter(|r| r.matches(facts))
        .fold(Evaluation::default(), |mut acc, rule| {
            acc.fired.push(rule.name);
            acc.patch = acc.patch.merge(rule.set);
            acc
        })
}

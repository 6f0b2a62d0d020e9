use tracing::{debug, info};

use crate::amount::{normalize, NormalizedAmount};
use crate::dates::format_date_cell;
use crate::error::Result;
use crate::formats::{fold_text, FormatSpec};
use crate::models::{ClassifiedRecord, RawRow, REVIEW_MARKER};
use crate::plots::ProjectDetector;
use crate::rules::{evaluate, Evaluation, RowFacts};

const DEFAULT_EXPENSE_TYPE: &str = "Soft Cost";

/// One format's rule table with its project detector compiled.
pub struct Classifier {
    spec: &'static FormatSpec,
    projects: ProjectDetector,
}

/// A classified record plus what led to it.
#[derive(Debug, Clone)]
pub struct Explained {
    pub detected_project: &'static str,
    pub evaluation: Evaluation,
    pub record: ClassifiedRecord,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifySummary {
    pub total: usize,
    pub needs_review: usize,
}

impl ClassifySummary {
    pub fn from_records(records: &[ClassifiedRecord]) -> Self {
        Self {
            total: records.len(),
            needs_review: records.iter().filter(|r| r.needs_review()).count(),
        }
    }

    /// Share of records carrying the review marker, 0.0 for an empty file.
    pub fn review_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.needs_review as f64 / self.total as f64
        }
    }

    pub fn classified_pct(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (1.0 - self.review_rate()) * 100.0
        }
    }
}

impl Classifier {
    pub fn new(spec: &'static FormatSpec) -> Result<Self> {
        Ok(Self {
            spec,
            projects: ProjectDetector::new(spec.projects)?,
        })
    }

    /// Classify one row whose amount is already normalized.
    pub fn explain(&self, row: &RawRow, amount: NormalizedAmount) -> Explained {
        let text = row.description.to_uppercase();
        let folded = fold_text(&text);
        let detected_project = self.projects.detect(&folded);
        let evaluation = evaluate(
            self.spec.rules,
            &RowFacts {
                text: &folded,
                amount,
            },
        );

        let direction = amount.direction();
        let (amount_in, amount_out, total) = if amount.is_income {
            (Some(amount.magnitude), None, amount.magnitude)
        } else {
            // Keep a zero amount from printing as -0.
            let out = if amount.magnitude == 0.0 { 0.0 } else { -amount.magnitude };
            (None, Some(out), out)
        };

        let patch = evaluation.patch;
        let mut description = patch.description.map(str::to_string).unwrap_or(text);
        if !evaluation.matched() {
            description.insert_str(0, REVIEW_MARKER);
        }

        let record = ClassifiedRecord {
            date: format_date_cell(&row.date),
            direction,
            project_or_plot: patch.project_or_plot.unwrap_or(detected_project).to_string(),
            expense_type: patch.expense_type.unwrap_or(DEFAULT_EXPENSE_TYPE).to_string(),
            category_type: patch.category_type.unwrap_or_default().to_string(),
            supplier: patch.supplier.unwrap_or_default().to_string(),
            description,
            amount_in,
            amount_out,
            total,
            original_description: row.description.clone(),
        };

        Explained {
            detected_project,
            evaluation,
            record,
        }
    }

    pub fn classify_row(&self, row: &RawRow) -> Result<ClassifiedRecord> {
        let amount = normalize(&row.amount, row.row, self.spec.columns.amount)?;
        Ok(self.explain(row, amount).record)
    }

    /// Classify every row with a description, preserving input order.
    ///
    /// Fails on the first amount that cannot be read; nothing is returned for
    /// the rest of the file in that case.
    pub fn classify(&self, rows: &[RawRow]) -> Result<Vec<ClassifiedRecord>> {
        let mut records = Vec::with_capacity(rows.len());
        let mut dropped = 0usize;
        for row in rows {
            if row.description.trim().is_empty() {
                dropped += 1;
                continue;
            }
            let record = self.classify_row(row)?;
            if record.needs_review() {
                debug!(row = row.row, description = %row.description, "no rule matched");
            }
            records.push(record);
        }
        info!(
            format = self.spec.key,
            classified = records.len(),
            dropped,
            "classification finished"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AiolosError;
    use crate::formats::{ATHENS, DIAKOFTI, ILISIA};
    use crate::models::{Cell, Direction};

    fn row(description: &str, amount: &str) -> RawRow {
        RawRow {
            row: 1,
            date: Cell::Text("15/01/2025".to_string()),
            description: description.to_string(),
            amount: Cell::Text(amount.to_string()),
        }
    }

    fn diakofti() -> Classifier {
        Classifier::new(&DIAKOFTI).unwrap()
    }

    fn classify_one(c: &Classifier, description: &str, amount: &str) -> ClassifiedRecord {
        c.classify_row(&row(description, amount)).unwrap()
    }

    #[test]
    fn test_uber_trip_end_to_end() {
        let r = classify_one(&diakofti(), "UBER TRIP ATHENS", "-12,50");
        assert_eq!(r.category_type, "Project management");
        assert_eq!(r.supplier, "Transportation");
        assert_eq!(r.description, "Athens Taxi");
        assert_eq!(r.direction, Direction::Outcome);
        assert_eq!(r.amount_out, Some(-12.5));
        assert_eq!(r.amount_in, None);
        assert_eq!(r.total, -12.5);
        assert_eq!(r.expense_type, "Soft Cost");
        assert_eq!(r.project_or_plot, "All Plots");
        assert_eq!(r.date, "15/01/2025");
        assert!(!r.needs_review());
    }

    #[test]
    fn test_unknown_vendor_end_to_end() {
        let r = classify_one(&diakofti(), "RANDOM UNKNOWN VENDOR XYZ", "100,00");
        assert_eq!(r.direction, Direction::Income);
        assert_eq!(r.amount_in, Some(100.0));
        assert_eq!(r.amount_out, None);
        assert_eq!(r.total, 100.0);
        assert_eq!(r.description, format!("{REVIEW_MARKER}RANDOM UNKNOWN VENDOR XYZ"));
        assert!(r.needs_review());
        assert_eq!(r.category_type, "");
        assert_eq!(r.supplier, "");
    }

    #[test]
    fn test_last_match_wins() {
        let r = classify_one(&diakofti(), "MIKEL CAFE SYNTAGMA", "-3,40");
        assert_eq!(r.supplier, "Mikel");
        assert_eq!(r.description, "Mikel Coffee");
        assert_eq!(r.category_type, "Project management");
    }

    #[test]
    fn test_exact_amount_overrides_keyword_rule() {
        let r = classify_one(&diakofti(), "ΜΕΤΑΦΟΡΑ ΣΕ AIOLOS GOOGLE", "-4.960,00");
        assert_eq!(r.category_type, "Management Fee");
        assert_eq!(r.supplier, "Aiolos Management");
        assert_eq!(r.project_or_plot, "All Plots");
    }

    #[test]
    fn test_accounting_excludes_architect() {
        let c = diakofti();
        let acc = classify_one(&c, "ΛΟΓΙΣΤΙΚΟ ΓΡΑΦΕΙΟ ΠΑΠΑΔΟΠΟΥΛΟΣ", "-300,00");
        assert_eq!(acc.category_type, "Accounting");
        let arch = classify_one(&c, "ARCHITECT ACCOUNTING OFFICE", "-300,00");
        assert_eq!(arch.category_type, "Design");
        assert_eq!(arch.supplier, "Architect");
    }

    #[test]
    fn test_historical_fee_amounts() {
        let c = diakofti();
        for amt in ["-1.550,00", "1.550,00", "2.055,00", "2.057,00"] {
            let r = classify_one(&c, "ΧΡΕΩΣΗ", amt);
            assert_eq!(r.description, "Monthly accounting fee", "{amt}");
        }
        assert!(classify_one(&c, "ΧΡΕΩΣΗ", "-2.055,00").needs_review());
    }

    #[test]
    fn test_bank_fee_needs_small_amount() {
        let c = diakofti();
        assert_eq!(classify_one(&c, "ΠΡΟΜΗΘΕΙΑ ΕΜΒΑΣΜΑΤΟΣ", "-2,50").category_type, "Bank");
        assert!(classify_one(&c, "ΠΡΟΜΗΘΕΙΑ ΕΜΒΑΣΜΑΤΟΣ", "-25,00").needs_review());
    }

    #[test]
    fn test_hard_cost_rule() {
        let r = classify_one(&diakofti(), "ΣΚΥΡΟΔΕΜΑ Y3 ΘΕΜΕΛΙΩΣΗ", "-8.400,00");
        assert_eq!(r.expense_type, "Hard Cost");
        assert_eq!(r.project_or_plot, "Y3");
    }

    #[test]
    fn test_plot_detection_through_classifier() {
        let c = diakofti();
        assert_eq!(
            classify_one(&c, "Payment for villa at Y3 construction", "-10,00").project_or_plot,
            "Y3"
        );
        assert_eq!(classify_one(&c, "TILES FOR Y3 AND G2", "-10,00").project_or_plot, "Multiple");
        assert_eq!(classify_one(&c, "TILES", "-10,00").project_or_plot, "All Plots");
    }

    #[test]
    fn test_municipality_rule_forces_plot() {
        let r = classify_one(&diakofti(), "ΔΗΜΟΣ ΚΥΘΗΡΩΝ ΤΕΛΗ Y1 G2", "-120,00");
        assert_eq!(r.project_or_plot, "All Plots");
        assert_eq!(r.supplier, "Municipality of Kythira");
    }

    #[test]
    fn test_matching_rule_clears_marker_even_without_supplier() {
        let r = classify_one(&diakofti(), "ΕΠΙΣΤΡΟΦΗ ΠΟΣΟΥ", "40,00");
        assert!(!r.needs_review());
        assert_eq!(r.supplier, "");
    }

    #[test]
    fn test_insurance_then_efka_order() {
        let r = classify_one(&diakofti(), "ΑΣΦΑΛΙΣΤΙΚΕΣ ΕΙΣΦΟΡΕΣ ΕΦΚΑ", "-612,30");
        assert_eq!(r.supplier, "EFKA");
        assert_eq!(r.category_type, "Payroll");
    }

    #[test]
    fn test_zero_amount_is_outcome() {
        let r = classify_one(&diakofti(), "UBER", "0,00");
        assert_eq!(r.direction, Direction::Outcome);
        assert_eq!(r.amount_out, Some(0.0));
        assert_eq!(r.amount_in, None);
        assert_eq!(r.total, 0.0);
        assert!(r.total.is_sign_positive());
    }

    #[test]
    fn test_in_out_exclusive_and_total_matches_amount() {
        let c = diakofti();
        for (desc, amt, signed) in [
            ("UBER", "-12,50", -12.5),
            ("AIRBNB PAYOUT", "1.234,56", 1234.56),
            ("SOMETHING", "-0,01", -0.01),
            ("SOMETHING", "7", 7.0),
        ] {
            let r = classify_one(&c, desc, amt);
            assert!(r.amount_in.is_some() != r.amount_out.is_some());
            assert_eq!(r.total, signed);
            assert_eq!(r.direction == Direction::Income, signed > 0.0);
        }
    }

    #[test]
    fn test_rows_without_description_are_dropped() {
        let rows = vec![
            row("UBER", "-5,00"),
            row("   ", "-1,00"),
            row("", "-2,00"),
            row("GOOGLE ADS", "-50,00"),
        ];
        let records = diakofti().classify(&rows).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].original_description, "UBER");
        assert_eq!(records[1].original_description, "GOOGLE ADS");
    }

    #[test]
    fn test_bad_amount_fails_the_file() {
        let mut bad = row("UBER", "1,2,3");
        bad.row = 4;
        let err = diakofti().classify(&[row("UBER", "-1,00"), bad]).unwrap_err();
        match err {
            AiolosError::InvalidAmount { row, column, value } => {
                assert_eq!(row, 4);
                assert_eq!(column, "ΠΟΣΟ");
                assert_eq!(value, "1,2,3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_date_is_tolerated() {
        let mut r = row("UBER", "-5,00");
        r.date = Cell::Text("yesterday".to_string());
        let rec = diakofti().classify_row(&r).unwrap();
        assert_eq!(rec.date, "");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let c = diakofti();
        let rows = vec![row("MIKEL CAFE", "-3,00"), row("NOTHING KNOWN", "5,00")];
        assert_eq!(c.classify(&rows).unwrap(), c.classify(&rows).unwrap());
    }

    #[test]
    fn test_original_description_is_verbatim() {
        let r = classify_one(&diakofti(), "Uber  trip", "-5,00");
        assert_eq!(r.original_description, "Uber  trip");
    }

    #[test]
    fn test_athens_projects_and_management_fee() {
        let c = Classifier::new(&ATHENS).unwrap();
        let r = classify_one(&c, "ΠΛΗΡΩΜΗ ΚΗΦΙΣΙΑ ΕΡΓΑ", "-500,00");
        assert_eq!(r.project_or_plot, "Kifisia");
        let fee = classify_one(&c, "ΕΜΒΑΣΜΑ ΑΠΟ ΔΙΑΚΟΦΤΙ ΑΕ", "4.960,00");
        assert_eq!(fee.expense_type, "Operation Income");
        assert_eq!(fee.project_or_plot, "Diakofti");
        assert_eq!(classify_one(&c, "OTHER", "-1,00").project_or_plot, "All Projects");
    }

    #[test]
    fn test_ilisia_fallback_and_units() {
        let c = Classifier::new(&ILISIA).unwrap();
        assert_eq!(classify_one(&c, "ΒΑΦΕΣ ΔΙΑΜΕΡΙΣΜΑ A2", "-900,00").project_or_plot, "A2");
        assert_eq!(classify_one(&c, "ΒΑΦΕΣ ΚΛΙΜΑΚΟΣΤΑΣΙΟ", "-900,00").project_or_plot, "Ilisia Building");
        let rent = classify_one(&c, "ΜΙΣΘΩΜΑ ΙΑΝΟΥΑΡΙΟΥ B1", "750,00");
        assert_eq!(rent.expense_type, "Operation Income");
        assert_eq!(rent.project_or_plot, "B1");
    }

    #[test]
    fn test_mixed_case_accented_greek_matches() {
        let athens = Classifier::new(&ATHENS).unwrap();
        let r = classify_one(&athens, "Πληρωμή εργασιών Κηφισιά", "-500,00");
        assert_eq!(r.project_or_plot, "Kifisia");
        assert_eq!(r.original_description, "Πληρωμή εργασιών Κηφισιά");

        let ilisia = Classifier::new(&ILISIA).unwrap();
        let r = classify_one(&ilisia, "Βαφές ισόγειο", "-900,00");
        assert_eq!(r.project_or_plot, "ΙΣΟΓΕΙΟ");
        let rent = classify_one(&ilisia, "Μίσθωμα Ιανουαρίου b1", "750,00");
        assert_eq!(rent.expense_type, "Operation Income");
        assert_eq!(rent.project_or_plot, "B1");
    }

    #[test]
    fn test_unmatched_description_keeps_accents() {
        let r = classify_one(&diakofti(), "Άγνωστη κίνηση", "-5,00");
        assert_eq!(r.description, format!("{REVIEW_MARKER}ΆΓΝΩΣΤΗ ΚΊΝΗΣΗ"));
    }

    #[test]
    fn test_summary() {
        let rows = vec![row("UBER", "-5,00"), row("UNMATCHED THING", "-5,00")];
        let records = diakofti().classify(&rows).unwrap();
        let s = ClassifySummary::from_records(&records);
        assert_eq!(s.total, 2);
        assert_eq!(s.needs_review, 1);
        assert_eq!(s.review_rate(), 0.5);
        assert_eq!(s.classified_pct(), 50.0);
        assert_eq!(ClassifySummary::from_records(&[]).review_rate(), 0.0);
    }

    #[test]
    fn test_explain_lists_fired_rules() {
        let c = diakofti();
        let r = row("MIKEL CAFE", "-3,00");
        let ex = c.explain(&r, NormalizedAmount::new(-3.0));
        assert_eq!(ex.evaluation.fired, vec!["food", "mikel"]);
        assert_eq!(ex.detected_project, "All Plots");
    }
}

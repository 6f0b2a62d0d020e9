mod athens;
mod diakofti;
mod ilisia;

use crate::plots::ProjectSource;
use crate::rules::Rule;

/// Where a layout keeps the three fields the classifier reads.
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub date: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
}

impl Columns {
    pub fn required(&self) -> [&'static str; 3] {
        [self.date, self.description, self.amount]
    }
}

/// Everything that differs between statement layouts.
#[derive(Debug)]
pub struct FormatSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub columns: Columns,
    /// Output header for `project_or_plot`.
    pub project_header: &'static str,
    /// Always-empty columns reserved for manual entry, placed before the
    /// original description.
    pub extra_columns: &'static [&'static str],
    pub projects: ProjectSource,
    pub rules: &'static [Rule],
}

impl FormatSpec {
    /// Export header row, original description last.
    pub fn output_headers(&self) -> Vec<&'static str> {
        let mut headers = vec![
            "Date",
            "Income/Outcome",
            self.project_header,
            "Expense Type",
            "Category Type",
            "Supplier",
            "Description",
            "In",
            "Out",
            "Total",
        ];
        headers.extend_from_slice(self.extra_columns);
        headers.push("Original Description");
        headers
    }
}

pub use athens::SPEC as ATHENS;
pub use diakofti::SPEC as DIAKOFTI;
pub use ilisia::SPEC as ILISIA;

pub static ALL_FORMATS: &[&FormatSpec] = &[&DIAKOFTI, &ATHENS, &ILISIA];

pub fn get_by_key(key: &str) -> Option<&'static FormatSpec> {
    ALL_FORMATS
        .iter()
        .find(|f| f.key.eq_ignore_ascii_case(key.trim()))
        .copied()
}

/// Uppercase and drop Greek accents, so "Ποσό" and "ΠΟΣΟ" compare equal.
pub fn fold_text(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| !matches!(c, '\u{0301}' | '\u{0308}'))
        .map(|c| match c {
            'Ά' => 'Α',
            'Έ' => 'Ε',
            'Ή' => 'Η',
            'Ί' | 'Ϊ' => 'Ι',
            'Ό' => 'Ο',
            'Ύ' | 'Ϋ' => 'Υ',
            'Ώ' => 'Ω',
            other => other,
        })
        .collect()
}

fn fold_header(raw: &str) -> String {
    fold_text(raw.trim_start_matches('\u{feff}').trim())
}

pub fn header_matches(header: &str, column: &str) -> bool {
    fold_header(header) == fold_header(column)
}

/// First layout whose required columns are all present in `headers`.
pub fn detect(headers: &[String]) -> Option<&'static FormatSpec> {
    ALL_FORMATS
        .iter()
        .find(|f| {
            f.columns
                .required()
                .iter()
                .all(|col| headers.iter().any(|h| header_matches(h, col)))
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_by_key() {
        assert_eq!(get_by_key("diakofti").map(|f| f.name), Some("Diakofti"));
        assert_eq!(get_by_key("ATHENS").map(|f| f.name), Some("Athens"));
        assert_eq!(get_by_key(" ilisia ").map(|f| f.name), Some("Ilisia"));
        assert!(get_by_key("kythira").is_none());
    }

    #[test]
    fn test_detect_each_layout() {
        let d = headers(&["ΗΜ/ΝΙΑ ΚΙΝΗΣΗΣ", "ΠΕΡΙΓΡΑΦΗ", "ΠΟΣΟ", "ΥΠΟΛΟΙΠΟ"]);
        assert_eq!(detect(&d).map(|f| f.key), Some("diakofti"));
        let a = headers(&["Ημερομηνία", "Περιγραφή", "Ποσό συναλλαγής"]);
        assert_eq!(detect(&a).map(|f| f.key), Some("athens"));
        let i = headers(&["Ημερομηνία Συναλλαγής", "Αιτιολογία", "Ποσό"]);
        assert_eq!(detect(&i).map(|f| f.key), Some("ilisia"));
    }

    #[test]
    fn test_detect_ignores_bom_whitespace_and_case() {
        let d = headers(&["\u{feff}ΗΜ/ΝΙΑ ΚΙΝΗΣΗΣ ", " Περιγραφή", "ποσό"]);
        assert_eq!(detect(&d).map(|f| f.key), Some("diakofti"));
    }

    #[test]
    fn test_header_matches_folds_accents() {
        assert!(header_matches("Ποσό", "ΠΟΣΟ"));
        assert!(header_matches("ΠΕΡΙΓΡΑΦΗ", "Περιγραφή"));
        assert!(!header_matches("Ποσό συναλλαγής", "Ποσό"));
    }

    #[test]
    fn test_fold_text() {
        assert_eq!(fold_text("Κηφισιά"), "ΚΗΦΙΣΙΑ");
        assert_eq!(fold_text("ισόγειο"), "ΙΣΟΓΕΙΟ");
        assert_eq!(fold_text("Μίσθωμα"), "ΜΙΣΘΩΜΑ");
        assert_eq!(fold_text("διϋλιστήριο ΐ"), "ΔΙΥΛΙΣΤΗΡΙΟ Ι");
        assert_eq!(fold_text("Uber trip"), "UBER TRIP");
    }

    #[test]
    fn test_detect_unknown_layout() {
        assert!(detect(&headers(&["Date", "Description", "Amount"])).is_none());
    }

    #[test]
    fn test_output_headers_end_with_original_description() {
        for spec in ALL_FORMATS {
            let h = spec.output_headers();
            assert_eq!(h.last(), Some(&"Original Description"));
            assert_eq!(h[2], spec.project_header);
            assert_eq!(h.len(), 11 + spec.extra_columns.len());
        }
        assert!(ATHENS.output_headers().contains(&"Payment Details"));
        assert!(DIAKOFTI.output_headers().contains(&"Balance"));
    }

    #[test]
    fn test_rule_names_are_unique_per_format() {
        for spec in ALL_FORMATS {
            let mut names: Vec<_> = spec.rules.iter().map(|r| r.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate rule name in {}", spec.key);
        }
    }

    #[test]
    fn test_keywords_are_authored_folded() {
        use crate::rules::Cond;
        for spec in ALL_FORMATS {
            for rule in spec.rules {
                for cond in rule.when {
                    if let Cond::Any(words) | Cond::All(words) | Cond::Without(words) = cond {
                        for w in *words {
                            assert_eq!(*w, fold_text(w), "{} / {}", spec.key, rule.name);
                        }
                    }
                }
            }
        }
    }
}

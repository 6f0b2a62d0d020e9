use regex::Regex;

use crate::error::Result;

pub const MULTIPLE: &str = "Multiple";

/// How a format derives the project/plot label from a description.
#[derive(Debug, Clone, Copy)]
pub enum ProjectSource {
    /// Whole-token scan for plot codes.
    PlotCodes {
        codes: &'static [&'static str],
        fallback: &'static str,
    },
    /// Ordered keyword table; the last matching entry wins.
    Keywords {
        table: &'static [(&'static [&'static str], &'static str)],
        fallback: &'static str,
    },
}

impl ProjectSource {
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::PlotCodes { fallback, .. } | Self::Keywords { fallback, .. } => *fallback,
        }
    }
}

/// Compiled form of a [`ProjectSource`].
pub struct ProjectDetector {
    source: ProjectSource,
    patterns: Vec<(&'static str, Regex)>,
}

impl ProjectDetector {
    pub fn new(source: ProjectSource) -> Result<Self> {
        let mut patterns = Vec::new();
        if let ProjectSource::PlotCodes { codes, .. } = source {
            for code in codes {
                // A code must not touch another word character on either side.
                // `-` is not a word character, so "Y4-7" stands on its own.
                let re = Regex::new(&format!(r"(?:^|[^\w]){}(?:[^\w]|$)", regex::escape(code)))?;
                patterns.push((*code, re));
            }
        }
        Ok(Self { source, patterns })
    }

    /// `text` is expected to be uppercased already.
    pub fn detect(&self, text: &str) -> &'static str {
        match self.source {
            ProjectSource::PlotCodes { fallback, .. } => {
                let mut found: Vec<&'static str> = Vec::new();
                for (code, re) in &self.patterns {
                    if re.is_match(text) && !found.contains(code) {
                        found.push(*code);
                    }
                }
                match found.as_slice() {
                    [] => fallback,
                    [only] => *only,
                    _ => MULTIPLE,
                }
            }
            ProjectSource::Keywords { table, fallback } => table
                .iter()
                .filter(|(words, _)| words.iter().any(|w| text.contains(w)))
                .last()
                .map(|(_, label)| *label)
                .unwrap_or(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: &[&str] = &[
        "Y1", "Y2", "Y3", "Y6", "Y4-7", "Y8", "R2", "G2", "G1", "G12", "G13", "B9-10-11",
    ];

    fn plots() -> ProjectDetector {
        ProjectDetector::new(ProjectSource::PlotCodes {
            codes: CODES,
            fallback: "All Plots",
        })
        .unwrap()
    }

    fn towns() -> ProjectDetector {
        ProjectDetector::new(ProjectSource::Keywords {
            table: &[
                (&["KIFISIA", "ΚΗΦΙΣΙΑ"], "Kifisia"),
                (&["GLYFADA"], "Glyfada"),
            ],
            fallback: "All Projects",
        })
        .unwrap()
    }

    #[test]
    fn test_single_plot() {
        assert_eq!(plots().detect("PAYMENT FOR VILLA AT Y3 CONSTRUCTION"), "Y3");
    }

    #[test]
    fn test_multiple_plots() {
        assert_eq!(plots().detect("TILES Y3 AND G2"), MULTIPLE);
    }

    #[test]
    fn test_same_code_twice_is_single() {
        assert_eq!(plots().detect("Y3 DEPOSIT / Y3 BALANCE"), "Y3");
    }

    #[test]
    fn test_no_plot_falls_back() {
        assert_eq!(plots().detect("OFFICE SUPPLIES"), "All Plots");
    }

    #[test]
    fn test_code_inside_longer_token_is_ignored() {
        assert_eq!(plots().detect("INVOICE XY3 PAID"), "All Plots");
        assert_eq!(plots().detect("REF Y31"), "All Plots");
        assert_eq!(plots().detect("G12 WINDOWS"), "G12");
    }

    #[test]
    fn test_hyphenated_codes() {
        assert_eq!(plots().detect("POOL Y4-7"), "Y4-7");
        assert_eq!(plots().detect("B9-10-11 FENCING"), "B9-10-11");
        // The hyphen is a boundary, so a bare code next to one still counts.
        assert_eq!(plots().detect("Y1-PAINT"), "Y1");
    }

    #[test]
    fn test_codes_at_edges_and_punctuation() {
        assert_eq!(plots().detect("Y8"), "Y8");
        assert_eq!(plots().detect("(R2)"), "R2");
        assert_eq!(plots().detect("PLOT:G1."), "G1");
    }

    #[test]
    fn test_keyword_projects() {
        assert_eq!(towns().detect("WORKS ΚΗΦΙΣΙΑ"), "Kifisia");
        assert_eq!(towns().detect("NOTHING"), "All Projects");
        assert_eq!(towns().detect("KIFISIA TO GLYFADA"), "Glyfada");
    }

    #[test]
    fn test_fallback_accessor() {
        assert_eq!(plots().source.fallback(), "All Plots");
    }
}

//! Technical Summary Filter — keeps the lines of a document that mention technical vocabulary.
//!
//! Algorithm: one left-to-right pass over the lines. A line is kept (trimmed) when its
//! lowercased text contains any lowercased keyword as a substring. No whole-word check,
//! so "DATABASE" counts as "data". Order is preserved and nothing is deduplicated.

use serde::Serialize;

use crate::summary::keywords::TECHNICAL_KEYWORDS;

/// The keyword-filtered lines of one document. Immutable once computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TechnicalSummary {
    lines: Vec<String>,
}

impl TechnicalSummary {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The summary as generation input: lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// True when no line matched. Callers surface this as "no technical content found".
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Keywords that occur somewhere in the summary, in keyword-list order.
    pub fn matched_keywords(&self) -> Vec<&'static str> {
        let lowered: Vec<String> = self.lines.iter().map(|l| l.to_lowercase()).collect();
        TECHNICAL_KEYWORDS
            .iter()
            .copied()
            .filter(|k| {
                let k = k.to_lowercase();
                lowered.iter().any(|l| l.contains(&k))
            })
            .collect()
    }
}

/// Filters `lines` against the fixed technical keyword list.
pub fn extract_technical_summary<S: AsRef<str>>(lines: &[S]) -> TechnicalSummary {
    TechnicalSummary {
        lines: filter_lines(lines, TECHNICAL_KEYWORDS),
    }
}

/// Returns the trimmed lines that contain at least one of `keywords`, case-insensitively.
pub fn filter_lines<S: AsRef<str>>(lines: &[S], keywords: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| line_matches(line, keywords))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Case-insensitive substring test of one line against `keywords`.
pub fn line_matches(line: &str, keywords: &[&str]) -> bool {
    let line = line.to_lowercase();
    keywords.iter().any(|k| line.contains(&k.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED_DOC: &[&str] = &[
        "Header",
        "This module handles interface logic.",
        "unrelated prose",
        "Data mapping table defined.",
    ];

    #[test]
    fn test_end_to_end_example() {
        let summary = extract_technical_summary(MIXED_DOC);
        assert_eq!(
            summary.lines(),
            &[
                "This module handles interface logic.".to_string(),
                "Data mapping table defined.".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        let empty: &[&str] = &[];
        let summary = extract_technical_summary(empty);
        assert!(summary.is_empty());
        assert_eq!(summary.text(), "");
    }

    #[test]
    fn test_no_keyword_gives_empty_summary() {
        let summary = extract_technical_summary(&["Dear reader,", "", "Kind regards"]);
        assert!(summary.is_empty());
        assert!(summary.matched_keywords().is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(line_matches("This has a Table of values", TECHNICAL_KEYWORDS));
        assert!(line_matches("call the rfc destination", TECHNICAL_KEYWORDS));
        assert!(line_matches("Use Bapi_PO_CREATE1", TECHNICAL_KEYWORDS));
    }

    #[test]
    fn test_match_is_substring_not_whole_word() {
        // "DATABASE" contains "data"; "dysfunctional" contains "function"
        assert!(line_matches("DATABASE engine", TECHNICAL_KEYWORDS));
        assert!(line_matches("a dysfunctional meeting", TECHNICAL_KEYWORDS));
        let summary = extract_technical_summary(&["DATABASE engine"]);
        assert_eq!(summary.lines(), &["DATABASE engine".to_string()]);
    }

    #[test]
    fn test_retained_lines_are_trimmed() {
        let summary = extract_technical_summary(&["   Field VBELN is mandatory \t", "\r"]);
        assert_eq!(summary.lines(), &["Field VBELN is mandatory".to_string()]);
    }

    #[test]
    fn test_line_with_many_keywords_appears_once() {
        let summary = extract_technical_summary(&["interface field logic table mapping"]);
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let summary = extract_technical_summary(&["Report A", "Report A"]);
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_result_is_ordered_subsequence_of_matches() {
        let input = [
            "intro",
            "  Function module Z_GET_ORDERS  ",
            "",
            "lunch menu",
            "Transaction VA01 is used",
            "Structure ZSTR_ITEM",
            "closing remarks",
        ];
        let summary = extract_technical_summary(&input);

        let expected: Vec<String> = input
            .iter()
            .filter(|l| line_matches(l, TECHNICAL_KEYWORDS))
            .map(|l| l.trim().to_string())
            .collect();
        assert_eq!(summary.lines(), expected.as_slice());

        for line in summary.lines() {
            assert!(line_matches(line, TECHNICAL_KEYWORDS));
        }
        for line in input.iter().filter(|l| !line_matches(l, TECHNICAL_KEYWORDS)) {
            assert!(!summary.lines().contains(&line.trim().to_string()));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let inputs: Vec<Vec<&str>> = vec![
            MIXED_DOC.to_vec(),
            vec!["  RFC call to ECC  ", "noise", "BAPI wrapper"],
            vec![],
            vec!["nothing relevant"],
        ];
        for input in inputs {
            let once = extract_technical_summary(&input);
            let twice = extract_technical_summary(once.lines());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_joined_text_split_back_into_lines() {
        let text = MIXED_DOC.join("\n");
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(
            extract_technical_summary(&lines).text(),
            "This module handles interface logic.\nData mapping table defined."
        );
    }

    #[test]
    fn test_filter_lines_with_custom_keywords() {
        let lines = ["alpha", "Beta", "gamma"];
        assert_eq!(filter_lines(&lines, &["BETA"]), vec!["Beta".to_string()]);
    }

    #[test]
    fn test_matched_keywords_in_list_order() {
        let summary = extract_technical_summary(&["Table mapping via RFC", "interface overview"]);
        assert_eq!(
            summary.matched_keywords(),
            vec!["interface", "table", "mapping", "RFC"]
        );
    }
}

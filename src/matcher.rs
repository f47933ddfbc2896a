use crate::types::FileRecord;
use std::collections::HashSet;

/// Domain words that make a piece of free text look like a document
/// retrieval request.
const TRIGGER_KEYWORDS: &[&str] = &[
    "find",
    "search",
    "show",
    "document",
    "doc",
    "contract",
    "invoice",
    "report",
    "handbook",
    "slide",
    "presentation",
    "prd",
];

/// Split text into lowercase alphanumeric tokens. Every non-alphanumeric
/// character is treated as whitespace.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Advisory gate: does this text resemble a retrieval request?
///
/// True when any trigger keyword appears as an exact token or as a raw
/// substring of the lowercased text. Heuristic only; false positives and
/// negatives are acceptable.
#[must_use]
pub fn looks_like_search(text: &str) -> bool {
    let tokens: HashSet<String> = tokenize(text).into_iter().collect();
    let lower = text.to_lowercase();
    TRIGGER_KEYWORDS
        .iter()
        .any(|k| tokens.contains(*k) || lower.contains(k))
}

/// Rank `records` against `query` by filename token overlap and return at
/// most `k` of the best matches.
///
/// A record with no token overlap still scores 1 if any query token is a
/// literal substring of its lowercased name. Records scoring 0 after both
/// checks are excluded. Ties sort by ascending name, so output order is
/// deterministic. Input records are never mutated.
#[must_use]
pub fn search(query: &str, records: &[FileRecord], k: usize) -> Vec<FileRecord> {
    if query.trim().is_empty() || records.is_empty() {
        return Vec::new();
    }

    let q_tokens: HashSet<String> = tokenize(query).into_iter().collect();

    let mut scored: Vec<(usize, &FileRecord)> = records
        .iter()
        .filter_map(|rec| {
            let name_tokens: HashSet<String> = tokenize(&rec.name).into_iter().collect();
            let mut overlap = q_tokens.intersection(&name_tokens).count();
            if overlap == 0 {
                let lower_name = rec.name.to_lowercase();
                if q_tokens.iter().any(|t| lower_name.contains(t.as_str())) {
                    overlap = 1;
                }
            }
            (overlap > 0).then_some((overlap, rec))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.name.cmp(&b.1.name)));

    scored
        .into_iter()
        .take(k)
        .map(|(_, rec)| rec.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str) -> FileRecord {
        FileRecord {
            path: format!("/data/{name}"),
            name: name.to_string(),
            ext: std::path::Path::new(name)
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
                .unwrap_or_default(),
            size_kb: 1.0,
            modified_iso: "2025-01-15T09:30:00".to_string(),
        }
    }

    #[test]
    fn test_tokenize_punctuation_and_case() {
        assert_eq!(
            tokenize("Q4_Report-2023.pdf"),
            vec!["q4", "report", "2023", "pdf"]
        );
    }

    #[test]
    fn test_tokenize_drops_empty_tokens() {
        assert_eq!(tokenize("  --  "), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let records = vec![make_record("invoice.pdf")];
        assert!(search("", &records, 5).is_empty());
        assert!(search("   ", &records, 5).is_empty());
    }

    #[test]
    fn test_empty_records_returns_nothing() {
        assert!(search("invoice", &[], 5).is_empty());
    }

    #[test]
    fn test_ranking_determinism() {
        let records = vec![
            make_record("Invoice_2023.pdf"),
            make_record("invoice_draft.txt"),
            make_record("report.csv"),
        ];

        let results = search("invoice", &records, 5);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Invoice_2023.pdf", "invoice_draft.txt"]);
    }

    #[test]
    fn test_zero_overlap_is_excluded() {
        let records = vec![make_record("holiday_photos.png")];
        assert!(search("invoice", &records, 5).is_empty());
    }

    #[test]
    fn test_substring_fallback_scores_one() {
        let records = vec![make_record("invoice_final.pdf")];
        // "inv" matches no whole token, only the substring check
        let results = search("inv", &records, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "invoice_final.pdf");
    }

    #[test]
    fn test_token_match_outranks_substring_match() {
        let records = vec![
            // Substring hit only: "report" inside "reporting"
            make_record("reporting_guidelines.txt"),
            // Two token hits
            make_record("report_2024.pdf"),
        ];

        let results = search("report 2024", &records, 5);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["report_2024.pdf", "reporting_guidelines.txt"]);
    }

    #[test]
    fn test_truncation_to_k() {
        let records: Vec<_> = (0..10)
            .map(|i| make_record(&format!("invoice_{i:02}.pdf")))
            .collect();

        let results = search("invoice", &records, 5);
        assert_eq!(results.len(), 5);
        // All tie on overlap, so the name tie-break keeps the first five
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "invoice_00.pdf",
                "invoice_01.pdf",
                "invoice_02.pdf",
                "invoice_03.pdf",
                "invoice_04.pdf",
            ]
        );
    }

    #[test]
    fn test_fewer_survivors_than_k() {
        let records = vec![make_record("invoice.pdf"), make_record("notes.txt")];
        let results = search("invoice", &records, 5);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_is_idempotent() {
        let records = vec![
            make_record("contract_v2.docx"),
            make_record("contract_v1.docx"),
        ];
        let first = search("contract", &records, 5);
        let second = search("contract", &records, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_records_untouched() {
        let records = vec![make_record("invoice.pdf")];
        let before = records.clone();
        let _ = search("invoice", &records, 5);
        assert_eq!(records, before);
    }

    #[test]
    fn test_looks_like_search_token_hit() {
        assert!(looks_like_search("please find the Q4 numbers"));
        assert!(looks_like_search("Show me the handbook"));
    }

    #[test]
    fn test_looks_like_search_substring_hit() {
        // "doc" appears inside "documentation" as a raw substring
        assert!(looks_like_search("where is the documentation?"));
    }

    #[test]
    fn test_looks_like_search_miss() {
        assert!(!looks_like_search("what is the weather today"));
        assert!(!looks_like_search(""));
    }
}

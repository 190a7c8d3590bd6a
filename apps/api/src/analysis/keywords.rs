//! Keyword coverage against the fixed ATS reference list.

use crate::analysis::report::KeywordCoverage;

/// Reference terms an ATS scan typically weights, in reporting order.
pub const ATS_KEYWORDS: [&str; 15] = [
    "experience",
    "skills",
    "education",
    "certification",
    "achievement",
    "management",
    "leadership",
    "project",
    "development",
    "analysis",
    "communication",
    "team",
    "results",
    "performance",
    "strategy",
];

/// Partitions the reference list into terms found in the text and terms
/// missing from it. Matching is case-insensitive substring containment, so
/// "leadership" also counts inside "thought-leadership". Each term is
/// counted once no matter how often it occurs.
pub fn analyze_keywords(content: &str) -> KeywordCoverage {
    let lower = content.to_lowercase();

    let mut found = Vec::new();
    let mut missing = Vec::new();
    for keyword in ATS_KEYWORDS {
        if lower.contains(keyword) {
            found.push(keyword.to_string());
        } else {
            missing.push(keyword.to_string());
        }
    }

    KeywordCoverage { found, missing }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

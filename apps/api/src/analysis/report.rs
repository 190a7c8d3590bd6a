//! Report data model: everything one analysis pass produces.
//!
//! Field names serialize in camelCase (`missingElements`, `formattingIssues`)
//! so the JSON stored in `resumes.analysis_data` keeps a stable shape across
//! clients.

use serde::{Deserialize, Serialize};

/// Presence flags for the four sections an ATS screen looks for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub contact: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
}

impl SectionPresence {
    /// Number of sections detected as present.
    pub fn present_count(&self) -> usize {
        [self.contact, self.experience, self.education, self.skills]
            .iter()
            .filter(|&&present| present)
            .count()
    }
}

/// Partition of the reference keyword list into terms found in the text and
/// terms missing from it. Both halves preserve reference-list order and
/// together cover the list exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCoverage {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// The four scores, each in [0, 100]. `overall` is the rounded mean of the
/// other three.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub formatting: u8,
    pub content: u8,
    pub keywords: u8,
    pub overall: u8,
}

/// Full analysis report for one piece of resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub sections: SectionPresence,
    pub missing_elements: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub keywords: KeywordCoverage,
    pub recommendations: Vec<String>,
    pub scores: ScoreSet,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Score computation: three independent sub-scores and their rounded mean.
//!
//! All inputs come from the detectors; nothing here re-examines the text
//! except the length reads in `formatting_score`.

use crate::analysis::formatting::{LONG_RESUME_CHARS, SHORT_RESUME_CHARS};
use crate::analysis::keywords::ATS_KEYWORDS;
use crate::analysis::report::{KeywordCoverage, SectionPresence};

/// Penalty per detected formatting issue.
const ISSUE_PENALTY: i32 = 10;
/// Flat penalty for text under the short threshold. Applied on top of the
/// per-issue penalty the same condition already produced; the compounding is
/// part of the scoring contract.
const SHORT_LENGTH_PENALTY: i32 = 20;
/// Flat penalty for text over the long threshold. Stacks like the short one.
const LONG_LENGTH_PENALTY: i32 = 15;
/// Penalty per missing section.
const MISSING_SECTION_PENALTY: i32 = 20;
/// Flat penalty when fewer than `MIN_PRESENT_SECTIONS` sections are present.
const SPARSE_SECTIONS_PENALTY: i32 = 15;
const MIN_PRESENT_SECTIONS: usize = 3;

/// Formatting sub-score: 100 minus the issue penalties and the flat length
/// penalties, clamped to [0, 100].
pub fn formatting_score(issues: &[String], content: &str) -> u8 {
    let mut score: i32 = 100 - issues.len() as i32 * ISSUE_PENALTY;

    let char_count = content.chars().count();
    if char_count < SHORT_RESUME_CHARS {
        score -= SHORT_LENGTH_PENALTY;
    }
    if char_count > LONG_RESUME_CHARS {
        score -= LONG_LENGTH_PENALTY;
    }

    clamp_score(score)
}

/// Content sub-score: 100 minus the missing-section penalties, minus the
/// sparse penalty when fewer than three sections are present, clamped.
pub fn content_score(sections: &SectionPresence, missing_elements: &[String]) -> u8 {
    let mut score: i32 = 100 - missing_elements.len() as i32 * MISSING_SECTION_PENALTY;

    if sections.present_count() < MIN_PRESENT_SECTIONS {
        score -= SPARSE_SECTIONS_PENALTY;
    }

    clamp_score(score)
}

/// Keyword sub-score: the found share of the reference list as a rounded
/// percentage. Needs no clamping; the share cannot leave [0, 100].
pub fn keyword_score(keywords: &KeywordCoverage) -> u8 {
    let share = keywords.found.len() as f64 / ATS_KEYWORDS.len() as f64;
    (share * 100.0).round() as u8
}

/// Overall ATS score: the rounded mean of the three sub-scores.
pub fn overall_score(formatting: u8, content: u8, keywords: u8) -> u8 {
    let mean = (formatting as f64 + content as f64 + keywords as f64) / 3.0;
    mean.round() as u8
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Qualitative label for a score, shown alongside the overall number.
pub fn rating(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent"
    } else if score >= 60 {
        "Good"
    } else if score >= 40 {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

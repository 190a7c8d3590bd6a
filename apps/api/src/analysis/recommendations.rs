//! Recommendation generation: a fixed rule ladder over the detector outputs.
//!
//! Rules fire independently and in order; the four standing recommendations
//! close every list, so the result is never empty.

use crate::analysis::report::{KeywordCoverage, SectionPresence};

/// Found-keyword count below which the broad keyword advice fires.
const LOW_KEYWORD_COUNT: usize = 5;
/// Found-keyword count at and above which no keyword advice fires.
const GOOD_KEYWORD_COUNT: usize = 10;
/// Formatting-issue count above which the cleanup advice fires.
const FORMATTING_ISSUE_TOLERANCE: usize = 2;

/// Advice appended to every report, in order.
const STANDING_RECOMMENDATIONS: [&str; 4] = [
    "Use standard section headings like \"Work Experience\", \"Education\", \"Skills\"",
    "Quantify achievements with metrics and numbers where possible",
    "Avoid headers, footers, tables, and complex formatting",
    "Save as .docx or .pdf format for best ATS compatibility",
];

/// Builds the recommendation list from the detector outputs.
pub fn generate_recommendations(
    sections: &SectionPresence,
    missing_elements: &[String],
    formatting_issues: &[String],
    keywords: &KeywordCoverage,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing_elements.is_empty() {
        recommendations.push(format!(
            "Add missing sections: {}",
            missing_elements.join(", ")
        ));
    }

    if !sections.contact {
        recommendations.push(
            "Include clear contact information at the top (name, email, phone, LinkedIn)"
                .to_string(),
        );
    }

    if formatting_issues.len() > FORMATTING_ISSUE_TOLERANCE {
        recommendations.push("Address formatting issues to improve ATS readability".to_string());
    }

    let found = keywords.found.len();
    if found < LOW_KEYWORD_COUNT {
        recommendations.push("Include more relevant industry keywords and action verbs".to_string());
    }
    if found >= LOW_KEYWORD_COUNT && found < GOOD_KEYWORD_COUNT {
        recommendations
            .push("Consider adding more specific technical skills and accomplishments".to_string());
    }

    recommendations.extend(STANDING_RECOMMENDATIONS.iter().map(|r| r.to_string()));

    recommendations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

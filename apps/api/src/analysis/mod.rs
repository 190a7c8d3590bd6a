// Resume analysis engine and its HTTP surface.
//
// The detectors are pure functions over the text; `analyze_resume` composes
// them and holds no state between calls, so concurrent requests never
// interfere.

pub mod formatting;
pub mod handlers;
pub mod intake;
pub mod keywords;
pub mod recommendations;
pub mod report;
pub mod scoring;
pub mod sections;
pub mod store;

use crate::analysis::report::{AnalysisReport, ScoreSet};

/// Runs the full analysis over already-decoded resume text.
///
/// Total over all string inputs, including empty text, and deterministic:
/// identical text always yields an identical report.
pub fn analyze_resume(content: &str) -> AnalysisReport {
    let sections = sections::detect_sections(content);
    let missing_elements = sections::missing_elements(&sections);
    let formatting_issues = formatting::detect_formatting_issues(content);
    let keywords = keywords::analyze_keywords(content);

    let formatting = scoring::formatting_score(&formatting_issues, content);
    let content_points = scoring::content_score(&sections, &missing_elements);
    let keyword_points = scoring::keyword_score(&keywords);
    let overall = scoring::overall_score(formatting, content_points, keyword_points);

    let recommendations = recommendations::generate_recommendations(
        &sections,
        &missing_elements,
        &formatting_issues,
        &keywords,
    );

    AnalysisReport {
        sections,
        missing_elements,
        formatting_issues,
        keywords,
        recommendations,
        scores: ScoreSet {
            formatting,
            content: content_points,
            keywords: keyword_points,
            overall,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-formed resume: all four sections, contact details, bullets,
    /// comfortable length and every reference keyword.
    fn strong_resume() -> String {
        [
            "Jane Doe",
            "Email: jane.doe@example.com",
            "Phone: 555-123-4567",
            "LinkedIn: linkedin.com/in/janedoe",
            "",
            "Professional Experience",
            "• Led development of a customer analytics platform, lifting retention results 30 percent",
            "• Built project management tooling adopted by a twelve-person team",
            "• Drove strategy and analysis for quarterly performance reviews",
            "• Recognized for achievement in cross-team communication and leadership",
            "",
            "Education",
            "Bachelor of Science in Computer Science, State University",
            "",
            "Skills",
            "Rust, SQL, data analysis, stakeholder management, performance tuning",
            "",
            "Certification",
            "AWS Certified Solutions Architect",
        ]
        .join("\n")
    }

    #[test]
    fn test_strong_resume_scores_100_across_the_board() {
        let report = analyze_resume(&strong_resume());

        assert!(report.missing_elements.is_empty());
        assert!(report.formatting_issues.is_empty());
        assert!(report.keywords.missing.is_empty());

        assert_eq!(report.scores.formatting, 100);
        assert_eq!(report.scores.content, 100);
        assert_eq!(report.scores.keywords, 100);
        assert_eq!(report.scores.overall, 100);

        // Nothing to fix, so only the standing advice remains.
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn test_empty_input_yields_floor_report() {
        let report = analyze_resume("");

        assert_eq!(report.sections.present_count(), 0);
        assert_eq!(
            report.missing_elements,
            vec![
                "Contact information section",
                "Work experience section",
                "Education section",
                "Skills section",
            ]
        );
        // Three issues: too short, no email, no phone. The bullet check
        // stays quiet because empty text is not over 500 characters.
        assert_eq!(report.formatting_issues.len(), 3);
        assert!(report.keywords.found.is_empty());

        assert_eq!(report.scores.formatting, 50);
        assert_eq!(report.scores.content, 5);
        assert_eq!(report.scores.keywords, 0);
        assert_eq!(report.scores.overall, 18);
    }

    #[test]
    fn test_headings_only_resume_compounds_the_short_penalty() {
        let report = analyze_resume("Experience Education Skills Contact: email@x.com");

        // All four sections are present, so content loses nothing.
        assert!(report.missing_elements.is_empty());
        assert_eq!(report.scores.content, 100);

        // Two issues (short, no phone) at 10 each, plus the flat short
        // penalty of 20.
        assert_eq!(
            report.formatting_issues,
            vec![
                "Resume appears too short (less than 200 characters)",
                "No phone number detected",
            ]
        );
        assert_eq!(report.scores.formatting, 60);

        // experience, skills, education found: 3 of 15.
        assert_eq!(report.scores.keywords, 20);
        assert_eq!(report.scores.overall, 60);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "Skills: leadership, communication, project management.";
        assert_eq!(analyze_resume(text), analyze_resume(text));
    }

    #[test]
    fn test_overall_is_rounded_mean_of_subscores() {
        let strong = strong_resume();
        for text in ["", "Skills and experience", strong.as_str()] {
            let report = analyze_resume(text);
            let expected = ((report.scores.formatting as f64
                + report.scores.content as f64
                + report.scores.keywords as f64)
                / 3.0)
                .round() as u8;
            assert_eq!(report.scores.overall, expected);
        }
    }

    #[test]
    fn test_scores_stay_bounded_for_degenerate_inputs() {
        let inputs = [
            String::new(),
            "x".to_string(),
            "★".repeat(60),
            "word ".repeat(4_000),
        ];
        for text in &inputs {
            let report = analyze_resume(text);
            for score in [
                report.scores.formatting,
                report.scores.content,
                report.scores.keywords,
                report.scores.overall,
            ] {
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn test_keyword_partition_always_covers_the_reference_list() {
        let report = analyze_resume("Led project development and analysis for the team.");

        let mut combined: Vec<String> = report.keywords.found.clone();
        combined.extend(report.keywords.missing.iter().cloned());
        combined.sort();

        let mut reference: Vec<String> =
            keywords::ATS_KEYWORDS.iter().map(|s| s.to_string()).collect();
        reference.sort();

        assert_eq!(combined, reference);
    }

    #[test]
    fn test_single_broken_property_yields_a_single_issue() {
        // Over the length floor with contact details and bullets, but
        // saturated with unusual characters.
        let mut text = strong_resume();
        text.push_str(&"★".repeat(60));

        let report = analyze_resume(&text);
        assert_eq!(
            report.formatting_issues,
            vec!["Contains unusual special characters that may confuse ATS"]
        );
        assert_eq!(report.scores.formatting, 90);
    }
}

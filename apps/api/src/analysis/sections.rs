//! Section detection: which of the four expected resume sections appear.
//!
//! A section counts as present when any of its indicator terms occurs
//! anywhere in the text as a whole word, case-insensitively. Headings are
//! not required; a line like "10 years of experience" marks the experience
//! section present.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::report::SectionPresence;

static CONTACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(email|phone|linkedin|address|github)\b").expect("valid regex")
});

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(experience|employment|work history|professional background)\b")
        .expect("valid regex")
});

static EDUCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(education|degree|university|college|bachelor|master|phd)\b")
        .expect("valid regex")
});

static SKILLS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(skills|technical skills|competencies|expertise|proficiencies)\b")
        .expect("valid regex")
});

/// Scans the text once per section and returns the presence flags.
pub fn detect_sections(content: &str) -> SectionPresence {
    SectionPresence {
        contact: CONTACT_RE.is_match(content),
        experience: EXPERIENCE_RE.is_match(content),
        education: EDUCATION_RE.is_match(content),
        skills: SKILLS_RE.is_match(content),
    }
}

/// One descriptive entry per absent section, in the fixed
/// contact, experience, education, skills order.
pub fn missing_elements(sections: &SectionPresence) -> Vec<String> {
    let mut missing = Vec::new();

    if !sections.contact {
        missing.push("Contact information section".to_string());
    }
    if !sections.experience {
        missing.push("Work experience section".to_string());
    }
    if !sections.education {
        missing.push("Education section".to_string());
    }
    if !sections.skills {
        missing.push("Skills section".to_string());
    }

    missing
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_sections() {
        let sections = detect_sections("");
        assert!(!sections.contact);
        assert!(!sections.experience);
        assert!(!sections.education);
        assert!(!sections.skills);
    }

    #[test]
    fn test_contact_indicators() {
        assert!(detect_sections("Email: jane@example.com").contact);
        assert!(detect_sections("phone on request").contact);
        assert!(detect_sections("find me on LinkedIn").contact);
        assert!(detect_sections("home address below").contact);
        assert!(detect_sections("GitHub: janedoe").contact);
    }

    #[test]
    fn test_experience_indicators() {
        assert!(detect_sections("Professional Experience").experience);
        assert!(detect_sections("EMPLOYMENT").experience);
        assert!(detect_sections("Work History").experience);
        assert!(detect_sections("professional background in data").experience);
    }

    #[test]
    fn test_education_indicators() {
        assert!(detect_sections("Education").education);
        assert!(detect_sections("holds a degree").education);
        assert!(detect_sections("State University").education);
        assert!(detect_sections("community college").education);
        assert!(detect_sections("Bachelor of Arts").education);
        assert!(detect_sections("Master of Science").education);
        assert!(detect_sections("PhD candidate").education);
    }

    #[test]
    fn test_skills_indicators() {
        assert!(detect_sections("Skills").skills);
        assert!(detect_sections("Technical Skills").skills);
        assert!(detect_sections("core competencies").skills);
        assert!(detect_sections("domain expertise").skills);
        assert!(detect_sections("proficiencies include Rust").skills);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let sections = detect_sections("EXPERIENCE education SkIlLs EMAIL");
        assert!(sections.contact);
        assert!(sections.experience);
        assert!(sections.education);
        assert!(sections.skills);
    }

    #[test]
    fn test_terms_match_whole_words_only() {
        // "emailing" and "telephone" must not count as contact indicators.
        let sections = detect_sections("emailing the telephone operator");
        assert!(!sections.contact);
    }

    #[test]
    fn test_missing_elements_empty_when_all_present() {
        let sections = SectionPresence {
            contact: true,
            experience: true,
            education: true,
            skills: true,
        };
        assert!(missing_elements(&sections).is_empty());
    }

    #[test]
    fn test_missing_elements_order_is_fixed() {
        let sections = SectionPresence {
            contact: false,
            experience: false,
            education: false,
            skills: false,
        };
        assert_eq!(
            missing_elements(&sections),
            vec![
                "Contact information section",
                "Work experience section",
                "Education section",
                "Skills section",
            ]
        );
    }

    #[test]
    fn test_missing_elements_names_only_absent_sections() {
        let sections = SectionPresence {
            contact: true,
            experience: false,
            education: true,
            skills: false,
        };
        assert_eq!(
            missing_elements(&sections),
            vec!["Work experience section", "Skills section"]
        );
    }
}

//! Formatting checks: independent heuristics over the raw text.
//!
//! Every check always runs and contributes at most one issue message; the
//! output order is the order of the checks below. Length is measured in
//! characters, not bytes, so multi-byte text is not penalized for encoding.

use once_cell::sync::Lazy;
use regex::Regex;

/// Below this many characters a resume is flagged as too short.
pub const SHORT_RESUME_CHARS: usize = 200;
/// Above this many characters a resume is flagged as too long.
pub const LONG_RESUME_CHARS: usize = 10_000;
/// Unusual-character budget; the issue fires only above this count.
const SPECIAL_CHAR_LIMIT: usize = 50;
/// Bullet advice only applies to text longer than this.
const BULLET_ADVICE_MIN_CHARS: usize = 500;

/// Glyphs accepted as bullet markers.
const BULLET_GLYPHS: [char; 5] = ['•', '●', '◦', '▪', '▫'];

// ASCII letters, digits, underscore, whitespace and a small punctuation set
// are ordinary; every other character counts toward the special budget.
static SPECIAL_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^A-Za-z0-9_\s@.\-,():;'"/\n]"#).expect("valid regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

// Ten digits with optional dot or dash separators, e.g. 555-123-4567.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}\b").expect("valid regex"));

/// Runs all formatting checks in order and returns the issue messages.
pub fn detect_formatting_issues(content: &str) -> Vec<String> {
    let mut issues = Vec::new();
    let char_count = content.chars().count();

    if char_count < SHORT_RESUME_CHARS {
        issues.push("Resume appears too short (less than 200 characters)".to_string());
    }

    if char_count > LONG_RESUME_CHARS {
        issues.push("Resume is too long - consider condensing to 1-2 pages".to_string());
    }

    if SPECIAL_CHARS_RE.find_iter(content).count() > SPECIAL_CHAR_LIMIT {
        issues.push("Contains unusual special characters that may confuse ATS".to_string());
    }

    if !EMAIL_RE.is_match(content) {
        issues.push("No email address detected".to_string());
    }

    if !PHONE_RE.is_match(content) {
        issues.push("No phone number detected".to_string());
    }

    let has_bullets = content.chars().any(|c| BULLET_GLYPHS.contains(&c));
    if !has_bullets && char_count > BULLET_ADVICE_MIN_CHARS {
        issues.push("Consider using bullet points for better readability".to_string());
    }

    issues
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

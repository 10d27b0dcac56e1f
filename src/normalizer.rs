use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Cleaned statement text plus the reporting year detected in it, if any.
/// Consumed once by the field extractor; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedText {
    pub text: String,
    pub financial_year: Option<String>,
}

// Everything outside this set is a PDF-extraction artifact as far as the
// extractor is concerned: ligature garbage, box-drawing characters, bullets.
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s\-.,()₹$%]").unwrap());

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

static NEWLINE_PADDING: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\n *").unwrap());

static BLANK_LINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

static FINANCIAL_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:financial\s+year|fy|year)\s*[:\-]?\s*(\d{4})").unwrap());

/// Clean raw PDF-extracted text and detect the reporting year.
///
/// Total over all inputs: malformed or empty text yields an empty result
/// rather than an error.
pub fn normalize(raw: &str) -> NormalizedText {
    let text = DISALLOWED.replace_all(raw, "");
    let text = SPACE_RUNS.replace_all(&text, " ");
    let text = NEWLINE_PADDING.replace_all(&text, "\n");
    let text = BLANK_LINE_RUNS.replace_all(&text, "\n");
    let text = text.trim().to_string();

    let financial_year = FINANCIAL_YEAR
        .captures(&text)
        .map(|cap| cap[1].to_string());

    NormalizedText {
        text,
        financial_year,
    }
}

//! Unwrapping of the raw model text.
//!
//! The simple form is a bare function, possibly wrapped in a code fence.
//! The structured form carries three marked sections; the two analysis
//! sections hold `Label: value` lines that fall back to fixed defaults.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::template::{CODE_MARKER, EVOLVED_ANALYSIS_MARKER, ORIGINAL_ANALYSIS_MARKER};
use crate::analysis::{ComplexityEstimate, EstimatePair};

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[\w+#.-]*\s*").expect("Invalid regex: leading fence"));

static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```$").expect("Invalid regex: trailing fence"));

static TIME_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*Time Complexity[ \t]*:[ \t]*(.+?)[ \t]*$")
        .expect("Invalid regex: time complexity field")
});

static SPACE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*Space Complexity[ \t]*:[ \t]*(.+?)[ \t]*$")
        .expect("Invalid regex: space complexity field")
});

static RUNTIME_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[ \t]*Runtime per N inputs[ \t]*:[ \t]*(.+?)[ \t]*$")
        .expect("Invalid regex: runtime field")
});

/// Parsed structured answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResponse {
    pub code: String,
    pub estimates: EstimatePair,
}

/// Trim and strip a surrounding code fence, e.g. ```` ```python ... ``` ````
pub fn unwrap_code(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_leading = LEADING_FENCE.replace(trimmed, "");
    let without_trailing = TRAILING_FENCE.replace(&without_leading, "");
    without_trailing.trim().to_string()
}

/// Split a structured answer into code and estimates.
///
/// A missing code marker means everything before the first analysis marker
/// is the code. Missing analysis markers or fields yield default values.
pub fn parse_structured(raw: &str) -> StructuredResponse {
    let markers = [CODE_MARKER, ORIGINAL_ANALYSIS_MARKER, EVOLVED_ANALYSIS_MARKER];

    let code = match section(raw, CODE_MARKER, &markers) {
        Some(body) => unwrap_code(body),
        None => {
            let end = markers
                .iter()
                .filter_map(|m| raw.find(m))
                .min()
                .unwrap_or(raw.len());
            unwrap_code(&raw[..end])
        }
    };

    let original = section(raw, ORIGINAL_ANALYSIS_MARKER, &markers)
        .map(parse_estimate)
        .unwrap_or_default();
    let evolved = section(raw, EVOLVED_ANALYSIS_MARKER, &markers)
        .map(parse_estimate)
        .unwrap_or_default();

    StructuredResponse {
        code,
        estimates: EstimatePair { original, evolved },
    }
}

/// Body of the section opened by `marker`, up to the next known marker
fn section<'a>(raw: &'a str, marker: &str, markers: &[&str]) -> Option<&'a str> {
    let start = raw.find(marker)? + marker.len();
    let rest = &raw[start..];
    let end = markers
        .iter()
        .filter_map(|m| rest.find(m))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn parse_estimate(body: &str) -> ComplexityEstimate {
    let defaults = ComplexityEstimate::default();
    ComplexityEstimate {
        time_complexity: field(&TIME_FIELD, body).unwrap_or(defaults.time_complexity),
        space_complexity: field(&SPACE_FIELD, body).unwrap_or(defaults.space_complexity),
        runtime_per_n: field(&RUNTIME_FIELD, body).unwrap_or(defaults.runtime_per_n),
    }
}

fn field(pattern: &Regex, body: &str) -> Option<String> {
    pattern
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

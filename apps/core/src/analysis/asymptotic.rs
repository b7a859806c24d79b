//! Asymptotic class estimation using regex patterns.
//!
//! Surface-level pattern matching on the source text, not a proof of any
//! bound. Rules are evaluated in order and the first match wins.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::warn;

/// Big-O style label produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BigO {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    Quadratic,
    #[serde(rename = "O(n³)")]
    Cubic,
}

impl BigO {
    /// Returns the display label, e.g. `O(n log n)`
    pub fn label(&self) -> &'static str {
        match self {
            BigO::Constant => "O(1)",
            BigO::Linear => "O(n)",
            BigO::Linearithmic => "O(n log n)",
            BigO::Quadratic => "O(n²)",
            BigO::Cubic => "O(n³)",
        }
    }
}

impl fmt::Display for BigO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// NOTE: expect() is acceptable for static patterns, they are checked by the tests below.
static NESTED_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:for|while)\s+.*:\s*[\s\S]*?(?:for|while)\s+.*:")
        .expect("Invalid regex: nested loop pattern")
});

static TRIPLE_NESTED_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"for\s+.*:\s*[\s\S]*?for\s+.*:\s*[\s\S]*?for\s+.*:")
        .expect("Invalid regex: triple nested loop pattern")
});

static SINGLE_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"for\s+.*:|while\s+.*:").expect("Invalid regex: single loop pattern")
});

static FUNCTION_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+(\w+)").expect("Invalid regex: function definition"));

static SORT_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.sort\(|sorted\(").expect("Invalid regex: sort call"));

static LINEAR_IDIOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.reverse\(|reversed\(|\[::-1\]|\.join\(").expect("Invalid regex: linear idioms")
});

/// Classify `code` into one of the fixed asymptotic labels.
///
/// The cubic rule sits after the quadratic one and can never fire, since any
/// text with three loop headers already has two. It is kept in that position
/// on purpose so results match the established labels.
pub fn classify_big_o(code: &str) -> BigO {
    let text = code.to_lowercase();

    if NESTED_LOOP.is_match(&text) {
        return BigO::Quadratic;
    }

    if TRIPLE_NESTED_LOOP.is_match(&text) {
        return BigO::Cubic;
    }

    if SINGLE_LOOP.is_match(&text) {
        return BigO::Linear;
    }

    if is_self_referencing(&text) {
        return BigO::Linear;
    }

    if SORT_CALL.is_match(&text) {
        return BigO::Linearithmic;
    }

    if LINEAR_IDIOM.is_match(&text) {
        return BigO::Linear;
    }

    BigO::Constant
}

/// Crude recursion check: the first declared function name appears again
/// after its declaration. The name is used as a regex; a name that fails
/// to compile skips the check instead of failing the classification.
fn is_self_referencing(text: &str) -> bool {
    let Some(caps) = FUNCTION_DEF.captures(text) else {
        return false;
    };
    let Some(name) = caps.get(1) else {
        return false;
    };

    match Regex::new(name.as_str()) {
        Ok(pattern) => pattern.is_match(&text[name.end()..]),
        Err(e) => {
            warn!("Skipping recursion check for '{}': {}", name.as_str(), e);
            false
        }
    }
}

//! Structural complexity and readability scoring.
//!
//! Coarse labels derived from line count, loop keywords, indentation depth
//! and the presence of a few built-in idioms.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::asymptotic::{classify_big_o, BigO};

/// Line count above which readability drops to `Fair`
const LONG_SNIPPET_LINES: usize = 10;

/// Structural complexity bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralComplexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for StructuralComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StructuralComplexity::Low => "Low",
            StructuralComplexity::Medium => "Medium",
            StructuralComplexity::High => "High",
        };
        f.write_str(label)
    }
}

/// Subjective readability bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readability {
    Good,
    Fair,
    Excellent,
}

impl fmt::Display for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Readability::Good => "Good",
            Readability::Fair => "Fair",
            Readability::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

/// Metrics for a single code sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// Number of lines of the trimmed sample
    pub lines: usize,
    pub complexity: StructuralComplexity,
    pub readability: Readability,
    /// Estimated asymptotic class
    pub big_o: BigO,
}

static LOOP_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for\s+|while\s+").expect("Invalid regex: loop keywords"));

static DEEP_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{4,}").expect("Invalid regex: indentation proxy"));

static BUILTIN_IDIOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.join\(|\.reverse\(|reversed\(|list\(").expect("Invalid regex: built-in idioms")
});

/// Count lines the way the report shows them: trimmed text split on `\n`.
/// An empty sample still counts as one line.
pub fn count_lines(code: &str) -> usize {
    code.trim().split('\n').count()
}

/// Whether any line starts with at least four whitespace characters
fn has_nested_indent(code: &str) -> bool {
    code.split('\n').any(|line| DEEP_INDENT.is_match(line))
}

/// Analyze `code` and return its complexity report
pub fn analyze_structure(code: &str) -> ComplexityReport {
    let lines = count_lines(code);
    let has_loops = LOOP_KEYWORD.is_match(code);
    let nested = has_nested_indent(code);
    let has_builtins = BUILTIN_IDIOM.is_match(code);

    let complexity = if has_loops && nested {
        StructuralComplexity::High
    } else if has_loops || nested {
        StructuralComplexity::Medium
    } else {
        StructuralComplexity::Low
    };

    let readability = if has_builtins && !nested {
        Readability::Excellent
    } else if nested || lines > LONG_SNIPPET_LINES {
        Readability::Fair
    } else {
        Readability::Good
    };

    ComplexityReport {
        lines,
        complexity,
        readability,
        big_o: classify_big_o(code),
    }
}

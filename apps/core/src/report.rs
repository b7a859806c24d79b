//! Plain-text rendering of comparison results for the terminal.

use std::fmt::Write;

use crate::analysis::{ComparisonResult, ComplexityReport};
use crate::session::EvolveOutcome;

const LABEL_WIDTH: usize = 20;
const COLUMN_WIDTH: usize = 16;

fn row(out: &mut String, label: &str, original: &str, evolved: &str) {
    let _ = writeln!(
        out,
        "{:<lw$}{:<cw$}{}",
        label,
        original,
        evolved,
        lw = LABEL_WIDTH,
        cw = COLUMN_WIDTH
    );
}

fn metrics(out: &mut String, original: &ComplexityReport, evolved: &ComplexityReport) {
    row(out, "Metric", "Original", "Evolved");
    row(out, "Lines", &original.lines.to_string(), &evolved.lines.to_string());
    row(out, "Complexity", &original.complexity.to_string(), &evolved.complexity.to_string());
    row(out, "Readability", &original.readability.to_string(), &evolved.readability.to_string());
    row(out, "Time (heuristic)", original.big_o.label(), evolved.big_o.label());
}

/// Metrics table, model estimates when present, then the improvement list
pub fn render_comparison(comparison: &ComparisonResult) -> String {
    let mut out = String::new();

    metrics(&mut out, &comparison.original, &comparison.evolved);

    if let Some(estimates) = &comparison.estimates {
        out.push_str("\nModel estimates\n");
        row(
            &mut out,
            "Time Complexity",
            &estimates.original.time_complexity,
            &estimates.evolved.time_complexity,
        );
        row(
            &mut out,
            "Space Complexity",
            &estimates.original.space_complexity,
            &estimates.evolved.space_complexity,
        );
        row(
            &mut out,
            "Runtime per N",
            &estimates.original.runtime_per_n,
            &estimates.evolved.runtime_per_n,
        );
    }

    out.push_str("\nKey improvements\n");
    for (index, item) in comparison.improvements.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. [{}] {}: {}",
            index + 1,
            item.impact,
            item.title,
            item.description
        );
    }

    out
}

/// Evolved code followed by the comparison
pub fn render_outcome(outcome: &EvolveOutcome) -> String {
    let mut out = String::new();
    out.push_str("Evolved code\n------------\n");
    out.push_str(&outcome.evolved_code);
    out.push_str("\n\n");
    out.push_str(&render_comparison(&outcome.comparison));
    out
}

//! Code Analyzer - orchestrator for the analysis module.
//!
//! Runs the structural scorer on both sides of an evolve request and
//! attaches the improvement list.

use std::time::Instant;
use tracing::debug;

use super::comparison::{ComparisonResult, EstimatePair};
use super::improvements::generate_improvements;
use super::structure::{analyze_structure, ComplexityReport};

/// Main analyzer; stateless, every call depends only on its inputs
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeAnalyzer;

impl CodeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a single code sample
    pub fn analyze(&self, code: &str) -> ComplexityReport {
        analyze_structure(code)
    }

    /// Compare original and evolved code
    pub fn compare(&self, original: &str, evolved: &str) -> ComparisonResult {
        let start = Instant::now();

        let result = ComparisonResult {
            original: self.analyze(original),
            evolved: self.analyze(evolved),
            estimates: None,
            improvements: generate_improvements(original, evolved),
        };

        debug!(
            original = %result.original.big_o,
            evolved = %result.evolved.big_o,
            improvements = result.improvements.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Comparison computed"
        );

        result
    }

    /// Compare and attach the model's own complexity estimates
    pub fn compare_with_estimates(
        &self,
        original: &str,
        evolved: &str,
        estimates: EstimatePair,
    ) -> ComparisonResult {
        let mut result = self.compare(original, evolved);
        result.estimates = Some(estimates);
        result
    }
}

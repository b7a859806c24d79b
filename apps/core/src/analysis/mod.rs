//! # Analysis Module
//!
//! Heuristic, regex-based comparison of an original code sample and the
//! rewrite suggested by the model. Pattern matching on text only, no parsing.
//!
//! ## Components
//! - `asymptotic`: Big-O style label from loop/sort/reversal patterns
//! - `structure`: Line count, structural complexity and readability
//! - `improvements`: Canned improvement messages
//! - `comparison`: Output data structures
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod asymptotic;
pub mod comparison;
pub mod improvements;
pub mod structure;

pub use analyzer::CodeAnalyzer;
pub use asymptotic::{classify_big_o, BigO};
pub use comparison::{
    ComparisonResult, ComplexityEstimate, EstimatePair, DEFAULT_RUNTIME, DEFAULT_SPACE_COMPLEXITY,
    DEFAULT_TIME_COMPLEXITY,
};
pub use improvements::{
    descriptions, generate_improvements, ImpactLevel, ImprovementCategory, ImprovementItem,
};
pub use structure::{analyze_structure, ComplexityReport, Readability, StructuralComplexity};

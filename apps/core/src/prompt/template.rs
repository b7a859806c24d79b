use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Section markers requested from the model in structured mode
pub const CODE_MARKER: &str = "### EVOLVED CODE";
pub const ORIGINAL_ANALYSIS_MARKER: &str = "### ORIGINAL ANALYSIS";
pub const EVOLVED_ANALYSIS_MARKER: &str = "### EVOLVED ANALYSIS";

/// How the model is asked to answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    /// Only the rewritten function
    #[default]
    Simple,
    /// Rewritten function plus labeled complexity estimates for both versions
    Structured,
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptStyle::Simple => f.write_str("simple"),
            PromptStyle::Structured => f.write_str("structured"),
        }
    }
}

impl FromStr for PromptStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(PromptStyle::Simple),
            "structured" => Ok(PromptStyle::Structured),
            other => Err(AppError::Config(format!(
                "Unknown prompt style '{}', expected 'simple' or 'structured'",
                other
            ))),
        }
    }
}

const PREAMBLE: &str = "You are an expert Python programmer. Your task is to take a given Python function and propose a functionally equivalent but more efficient and Pythonic version. Your goal is to dramatically improve the function's performance.";

/// Wrap the user's code in the instructional template for `style`
pub fn build_prompt(style: PromptStyle, code: &str) -> String {
    match style {
        PromptStyle::Simple => format!(
            "{PREAMBLE} **CRITICAL**: You must provide *only* the complete, new Python function in your response. Do not include any explanations, introductory text, or markdown formatting like ```python. Here is the function to improve:\n```python\n{code}\n```"
        ),
        PromptStyle::Structured => format!(
            "{PREAMBLE} Answer in exactly three sections, each starting with its header line:\n\
             {CODE_MARKER}\n\
             (the complete, new Python function and nothing else)\n\
             {ORIGINAL_ANALYSIS_MARKER}\n\
             Time Complexity: <Big-O of the original function>\n\
             Space Complexity: <Big-O of the original function>\n\
             Runtime per N inputs: <rough runtime estimate>\n\
             {EVOLVED_ANALYSIS_MARKER}\n\
             Time Complexity: <Big-O of the new function>\n\
             Space Complexity: <Big-O of the new function>\n\
             Runtime per N inputs: <rough runtime estimate>\n\
             Do not add any other text. Here is the function to improve:\n```python\n{code}\n```"
        ),
    }
}

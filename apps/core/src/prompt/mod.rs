//! Prompt construction and response unwrapping.

pub mod response;
pub mod template;

pub use response::{parse_structured, unwrap_code, StructuredResponse};
pub use template::{
    build_prompt, PromptStyle, CODE_MARKER, EVOLVED_ANALYSIS_MARKER, ORIGINAL_ANALYSIS_MARKER,
};

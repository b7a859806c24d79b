//! Code Evolver core.
//!
//! Sends a code sample to a hosted text-generation model with a fixed
//! instructional prompt, unwraps the suggested rewrite and compares both
//! versions with regex heuristics.

pub mod actors;
pub mod analysis;
pub mod error;
pub mod input;
pub mod models;
pub mod prompt;
pub mod report;
pub mod session;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use actors::supervisor::EvolverHandle;
pub use error::AppError;
pub use models::ModelConfig;
pub use session::{EvolveOutcome, SessionView};

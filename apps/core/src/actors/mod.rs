//! Actor system: the LLM actor talks to the generation endpoint, the
//! evolver actor runs one evolve request at a time on top of it.

pub mod llm;
pub mod messages;
pub mod supervisor;
pub mod traits;

use serde::Serialize;
use tokio::sync::oneshot;

use crate::session::EvolveOutcome;

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The actor's mailbox is closed or its reply channel was dropped.
    #[error("Actor unavailable: {0}")]
    Unavailable(String),
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the `GeminiActor`.
#[derive(Debug)]
pub enum LlmMessage {
    /// A request to generate a complete text response.
    Generate {
        prompt: String,
        /// A channel to send the raw generated text back.
        responder: oneshot::Sender<Result<String, AppError>>,
    },
}

/// Messages that can be sent to the `EvolverActor`.
#[derive(Debug)]
pub enum EvolverMessage {
    /// One evolve request for a user-supplied code sample.
    Evolve {
        code: String,
        /// A channel to send the outcome back.
        responder: oneshot::Sender<Result<EvolveOutcome, AppError>>,
    },
    /// A command to stop the evolver loop.
    Shutdown,
}

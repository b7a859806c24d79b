use crate::actors::messages::AppError;
use async_trait::async_trait;

/// Defines the public interface for an LLM (Large Language Model) actor.
///
/// This trait abstracts the specific implementation of the LLM, allowing the
/// hosted endpoint to be swapped for a mock in tests.
#[async_trait]
pub trait LlmActor: Send + Sync + 'static {
    /// Sends `prompt` to the model and returns the raw generated text.
    async fn generate(&self, prompt: String) -> Result<String, AppError>;
}

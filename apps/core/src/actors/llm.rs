use crate::actors::messages::{ActorError, AppError, LlmMessage};
use crate::actors::traits::LlmActor;
use crate::error::{GENERIC_API_FAILURE, INVALID_RESPONSE};
use crate::models::ModelConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// A handle to the `GeminiActor`.
///
/// This struct provides a public, cloneable interface for sending messages to the
/// running LLM actor. It abstracts away the `mpsc::Sender`.
#[derive(Clone)]
pub struct GeminiActorHandle {
    sender: mpsc::Sender<LlmMessage>,
    reply_timeout: Duration,
}

impl GeminiActorHandle {
    /// Creates a new `GeminiActor` and returns a handle to it.
    ///
    /// This will spawn the `GeminiActorRunner` in a new Tokio task.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, model and credential to use for every request.
    pub fn new(config: &ModelConfig) -> Result<Self, AppError> {
        let (sender, receiver) = mpsc::channel(32);
        let actor = GeminiActorRunner::new(receiver, config)?;
        tokio::spawn(async move { actor.run().await });
        Ok(Self {
            sender,
            reply_timeout: config.timeout() + REPLY_GRACE,
        })
    }
}

#[async_trait]
impl LlmActor for GeminiActorHandle {
    async fn generate(&self, prompt: String) -> Result<String, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = LlmMessage::Generate {
            prompt,
            responder: send,
        };

        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(ActorError::Unavailable(e.to_string())))?;
        timeout(self.reply_timeout, recv)
            .await?
            .map_err(|e| AppError::Actor(ActorError::Unavailable(e.to_string())))?
    }
}

// --- Constants ---
const REPLY_GRACE: Duration = Duration::from_secs(5);

// --- Wire types ---
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present and non-empty
    fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.is_empty())
    }
}

/// Build `{base}/v1beta/models/{model}:generateContent?key={api_key}`
pub fn endpoint_url(config: &ModelConfig) -> Result<Url, AppError> {
    let base = config.base_url.trim_end_matches('/');
    let mut url = Url::parse(&format!(
        "{}/v1beta/models/{}:generateContent",
        base, config.model_id
    ))?;
    url.query_pairs_mut().append_pair("key", &config.api_key);
    Ok(url)
}

/// Pull the server-provided message out of an error body, if there is one
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_API_FAILURE.to_string())
}

// --- Actor Runner (Internal Logic) ---
struct GeminiActorRunner {
    receiver: mpsc::Receiver<LlmMessage>,
    endpoint: Url,
    model_id: String,
    client: Client,
    request_timeout: Duration,
}

impl GeminiActorRunner {
    fn new(receiver: mpsc::Receiver<LlmMessage>, config: &ModelConfig) -> Result<Self, AppError> {
        Ok(Self {
            receiver,
            endpoint: endpoint_url(config)?,
            model_id: config.model_id.clone(),
            client: Client::builder().timeout(config.timeout()).build()?,
            request_timeout: config.timeout(),
        })
    }

    async fn run(mut self) {
        info!(model = %self.model_id, "GeminiActor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg).await;
        }

        info!("GeminiActor stopped");
    }

    async fn handle_message(&mut self, msg: LlmMessage) {
        match msg {
            LlmMessage::Generate { prompt, responder } => {
                let result = self.generate_content(prompt).await;
                let _ = responder.send(result);
            }
        }
    }

    #[instrument(skip(self, prompt), fields(model = %self.model_id, prompt_chars = prompt.len()))]
    async fn generate_content(&self, prompt: String) -> Result<String, AppError> {
        debug!("Prompt: {}", prompt);

        let payload = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        // One deadline covers headers and body.
        let text = timeout(self.request_timeout, self.exchange(&payload)).await??;

        info!(response_chars = text.len(), "generateContent succeeded");
        Ok(text)
    }

    async fn exchange(&self, payload: &serde_json::Value) -> Result<String, AppError> {
        let res = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(%status, "generateContent failed: {}", message);
            return Err(AppError::Api(message));
        }

        let body: GenerateContentResponse = res.json().await.map_err(|e| {
            if e.is_timeout() {
                AppError::from(e)
            } else {
                AppError::InvalidResponse(INVALID_RESPONSE.to_string())
            }
        })?;

        body.into_text()
            .ok_or_else(|| AppError::InvalidResponse(INVALID_RESPONSE.to_string()))
    }
}

use crate::actors::llm::GeminiActorHandle;
use crate::actors::messages::{ActorError, AppError, EvolverMessage};
use crate::actors::traits::LlmActor;
use crate::analysis::CodeAnalyzer;
use crate::error::EMPTY_INPUT;
use crate::models::ModelConfig;
use crate::prompt::{build_prompt, parse_structured, unwrap_code, PromptStyle};
use crate::session::{EvolveOutcome, SessionView};
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

const REPLY_GRACE: Duration = Duration::from_secs(10);

/// A handle to the `EvolverActor`.
///
/// This is the primary entry point for evolve requests. It drives the LLM actor,
/// runs the heuristic analysis and publishes the session view after every step.
#[derive(Clone)]
pub struct EvolverHandle {
    sender: mpsc::Sender<EvolverMessage>,
    view: watch::Receiver<SessionView>,
    in_flight: Arc<AtomicBool>,
    reply_timeout: Duration,
}

impl EvolverHandle {
    /// Creates an evolver backed by the hosted Gemini endpoint described by `config`.
    pub fn new(config: &ModelConfig) -> Result<Self, AppError> {
        let llm = Arc::new(GeminiActorHandle::new(config)?);
        Ok(Self::with_llm(llm, config.prompt_style, config.timeout()))
    }

    /// Creates an evolver around any `LlmActor` implementation.
    ///
    /// # Arguments
    ///
    /// * `llm` - The model backend.
    /// * `style` - Prompt template and response format to use.
    /// * `request_timeout` - Upper bound for one model call; the reply wait adds a small grace period.
    pub fn with_llm<L: LlmActor>(llm: Arc<L>, style: PromptStyle, request_timeout: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let (view_tx, view_rx) = watch::channel(SessionView::default());
        let runner = EvolverRunner::new(receiver, llm, style, view_tx);
        tokio::spawn(async move { runner.run().await });
        Self {
            sender,
            view: view_rx,
            in_flight: Arc::new(AtomicBool::new(false)),
            reply_timeout: request_timeout + REPLY_GRACE,
        }
    }

    /// Runs one evolve request.
    ///
    /// Returns `AppError::Busy` without touching the session view when another
    /// request from this evolver is still in flight.
    #[instrument(skip(self, code), fields(code_chars = code.len()))]
    pub async fn evolve(&self, code: String) -> Result<EvolveOutcome, AppError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Evolve request rejected, another one is in flight");
            return Err(AppError::Busy);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let (send, recv) = oneshot::channel();
        let msg = EvolverMessage::Evolve {
            code,
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

    /// Current session view
    pub fn view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    /// Receiver that observes every published session view
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.clone()
    }

    /// Stops the evolver loop; later requests fail with `ActorError::Unavailable`.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(EvolverMessage::Shutdown)
            .await
            .map_err(|e| AppError::Actor(ActorError::Unavailable(e.to_string())))
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// --- Actor Runner ---
struct EvolverRunner<L>
where
    L: LlmActor + Send + Sync + 'static,
{
    receiver: mpsc::Receiver<EvolverMessage>,
    llm_actor: Arc<L>,
    analyzer: CodeAnalyzer,
    style: PromptStyle,
    view: watch::Sender<SessionView>,
}

impl<L> EvolverRunner<L>
where
    L: LlmActor + Send + Sync + 'static,
{
    fn new(
        receiver: mpsc::Receiver<EvolverMessage>,
        llm_actor: Arc<L>,
        style: PromptStyle,
        view: watch::Sender<SessionView>,
    ) -> Self {
        Self {
            receiver,
            llm_actor,
            analyzer: CodeAnalyzer::new(),
            style,
            view,
        }
    }

    async fn run(mut self) {
        info!(style = %self.style, "Evolver started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                EvolverMessage::Evolve { code, responder } => {
                    let result = self.handle_evolve(Uuid::new_v4(), code).await;
                    let _ = responder.send(result);
                }
                EvolverMessage::Shutdown => {
                    info!("Evolver shutting down...");
                    break;
                }
            }
        }
        info!("Evolver stopped");
    }

    /// Single place where evolve errors are logged and turned into a status line.
    #[instrument(skip(self, code))]
    async fn handle_evolve(&mut self, request_id: Uuid, code: String) -> Result<EvolveOutcome, AppError> {
        let result = self.evolve(request_id, &code).await;

        match &result {
            Ok(outcome) => {
                info!(
                    original = %outcome.comparison.original.big_o,
                    evolved = %outcome.comparison.evolved.big_o,
                    improvements = outcome.comparison.improvements.len(),
                    "Evolution complete"
                );
                self.publish(SessionView::completed(outcome));
            }
            Err(e) => {
                if matches!(e, AppError::Validation(_)) {
                    warn!("Evolve request rejected: {}", e);
                    self.view.send_modify(|view| view.reject(e));
                } else {
                    error!("Evolve request failed: {}", e);
                    self.publish(SessionView::failed(e));
                }
            }
        }

        result
    }

    async fn evolve(&self, request_id: Uuid, code: &str) -> Result<EvolveOutcome, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_INPUT.to_string()));
        }

        self.publish(SessionView::connecting());
        let prompt = build_prompt(self.style, code);

        self.publish(SessionView::analyzing());
        let raw = self.llm_actor.generate(prompt).await?;

        let (evolved_code, comparison) = match self.style {
            PromptStyle::Simple => {
                let evolved = unwrap_code(&raw);
                let comparison = self.analyzer.compare(code, &evolved);
                (evolved, comparison)
            }
            PromptStyle::Structured => {
                let parsed = parse_structured(&raw);
                let comparison =
                    self.analyzer
                        .compare_with_estimates(code, &parsed.code, parsed.estimates);
                (parsed.code, comparison)
            }
        };

        Ok(EvolveOutcome {
            request_id,
            evolved_code,
            comparison,
            completed_at: Utc::now(),
        })
    }

    fn publish(&self, view: SessionView) {
        self.view.send_replace(view);
    }
}

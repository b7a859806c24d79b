//! Actor Tests
//!
//! Concurrency behaviour of the evolver actor: one request in flight per
//! evolver, view publication while the model is working, and recovery.

use crate::actors::messages::AppError;
use crate::actors::supervisor::EvolverHandle;
use crate::actors::traits::LlmActor;
use crate::prompt::PromptStyle;
use crate::session::{STATUS_ANALYZING, STATUS_COMPLETE};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::time::{timeout, Duration};

// --- Mock Components ---

/// Model that blocks until released, then answers with a fixed rewrite
struct GatedLlmActor {
    release: Notify,
    calls: AtomicUsize,
}

impl GatedLlmActor {
    fn new() -> Self {
        Self {
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmActor for GatedLlmActor {
    async fn generate(&self, _prompt: String) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok("return s[::-1]".to_string())
    }
}

/// Model that fails on the first call and succeeds afterwards
struct FlakyLlmActor {
    calls: AtomicUsize,
}

#[async_trait]
impl LlmActor for FlakyLlmActor {
    async fn generate(&self, _prompt: String) -> Result<String, AppError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(AppError::Transport("connection reset".to_string()))
        } else {
            Ok("return s[::-1]".to_string())
        }
    }
}

const ORIGINAL: &str = "for c in s:\n    out = c + out";

#[tokio::test]
async fn test_second_request_rejected_while_in_flight() {
    // 1. Arrange
    let llm = Arc::new(GatedLlmActor::new());
    let handle = EvolverHandle::with_llm(llm.clone(), PromptStyle::Simple, Duration::from_secs(5));
    let mut view = handle.subscribe();

    let first = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.evolve(ORIGINAL.to_string()).await })
    };
    timeout(Duration::from_secs(2), view.wait_for(|v| v.status == STATUS_ANALYZING))
        .await
        .expect("View never reached the analyzing state")
        .unwrap();

    // 2. Act
    let second = handle.evolve(ORIGINAL.to_string()).await;

    // 3. Assert
    assert!(matches!(second, Err(AppError::Busy)));
    let during = handle.view();
    assert_eq!(during.status, STATUS_ANALYZING);
    assert!(during.is_loading);
    assert!(during.comparison.is_none());

    llm.release.notify_one();
    let outcome = first.await.unwrap().unwrap();
    assert_eq!(outcome.evolved_code, "return s[::-1]");
    assert_eq!(handle.view().status, STATUS_COMPLETE);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_trigger_enabled_again_after_completion() {
    let llm = Arc::new(GatedLlmActor::new());
    let handle = EvolverHandle::with_llm(llm.clone(), PromptStyle::Simple, Duration::from_secs(5));

    // Permits are stored, so each call consumes one without waiting.
    llm.release.notify_one();
    let first = handle.evolve(ORIGINAL.to_string()).await.unwrap();
    llm.release.notify_one();
    let second = handle.evolve(ORIGINAL.to_string()).await.unwrap();

    assert_ne!(first.request_id, second.request_id);
    assert!(second.completed_at >= first.completed_at);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 2);
    assert!(!handle.view().is_loading);
}

#[tokio::test]
async fn test_recovers_after_failed_request() {
    // 1. Arrange
    let llm = Arc::new(FlakyLlmActor {
        calls: AtomicUsize::new(0),
    });
    let handle = EvolverHandle::with_llm(llm.clone(), PromptStyle::Simple, Duration::from_secs(5));

    // 2. Act
    let failed = handle.evolve(ORIGINAL.to_string()).await;
    let failed_view = handle.view();
    let recovered = handle.evolve(ORIGINAL.to_string()).await;

    // 3. Assert
    assert!(matches!(failed, Err(AppError::Transport(_))));
    assert_eq!(failed_view.status, "Error: connection reset");
    assert!(!failed_view.is_loading);
    assert!(failed_view.evolved_code.is_none());

    assert!(recovered.is_ok());
    let view = handle.view();
    assert_eq!(view.status, STATUS_COMPLETE);
    assert_eq!(view.evolved_code.as_deref(), Some("return s[::-1]"));
}

#[tokio::test]
async fn test_separate_evolvers_do_not_block_each_other() {
    let gated = Arc::new(GatedLlmActor::new());
    let busy = EvolverHandle::with_llm(gated.clone(), PromptStyle::Simple, Duration::from_secs(5));
    let mut busy_view = busy.subscribe();

    let pending = {
        let busy = busy.clone();
        tokio::spawn(async move { busy.evolve(ORIGINAL.to_string()).await })
    };
    timeout(Duration::from_secs(2), busy_view.wait_for(|v| v.is_loading))
        .await
        .expect("First evolver never started")
        .unwrap();

    let free = EvolverHandle::with_llm(
        Arc::new(FlakyLlmActor {
            calls: AtomicUsize::new(1),
        }),
        PromptStyle::Simple,
        Duration::from_secs(5),
    );
    assert!(free.evolve(ORIGINAL.to_string()).await.is_ok());
    assert!(busy.view().is_loading);

    gated.release.notify_one();
    assert!(pending.await.unwrap().is_ok());
}

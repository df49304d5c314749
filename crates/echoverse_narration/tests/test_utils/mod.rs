//! Test utilities for the narration pipeline.
//!
//! Mock rewrite and synthesis collaborators that count their calls, record
//! their inputs, and snapshot the orchestrator lifecycle while they run.

#![allow(dead_code)]

use echoverse_core::{AudioHandle, Credential, Tone, Voice};
use echoverse_error::{NarrationError, NarrationErrorKind, NarrationResult};
use echoverse_interface::{Rewriter, Synthesizer};
use echoverse_narration::Lifecycle;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use tokio::sync::watch;

/// Lifecycle receiver installed after the orchestrator is built.
pub type LifecycleWatch = Arc<OnceLock<watch::Receiver<Lifecycle>>>;

fn snapshot(observer: &LifecycleWatch) -> Option<Lifecycle> {
    observer.get().map(|receiver| receiver.borrow().clone())
}

/// What a mock answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Succeed with this value
    Succeed(T),
    /// Fail with this classification
    Fail(NarrationErrorKind),
}

/// Rewriter returning a canned answer.
#[derive(Debug, Clone)]
pub struct MockRewriter {
    behavior: MockBehavior<String>,
    pub calls: Arc<AtomicUsize>,
    pub inputs: Arc<Mutex<Vec<(String, Tone)>>>,
    pub seen_states: Arc<Mutex<Vec<Lifecycle>>>,
    pub observer: LifecycleWatch,
}

impl MockRewriter {
    pub fn returning(text: &str) -> Self {
        Self::with_behavior(MockBehavior::Succeed(text.to_string()))
    }

    pub fn failing(kind: NarrationErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Fail(kind))
    }

    fn with_behavior(behavior: MockBehavior<String>) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
            inputs: Arc::new(Mutex::new(Vec::new())),
            seen_states: Arc::new(Mutex::new(Vec::new())),
            observer: Arc::new(OnceLock::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Rewriter for MockRewriter {
    async fn rewrite(&self, text: &str, tone: Tone) -> NarrationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs
            .lock()
            .expect("inputs lock")
            .push((text.to_string(), tone));
        if let Some(state) = snapshot(&self.observer) {
            self.seen_states.lock().expect("states lock").push(state);
        }

        match &self.behavior {
            MockBehavior::Succeed(text) => Ok(text.clone()),
            MockBehavior::Fail(kind) => Err(NarrationError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-rewriter"
    }
}

/// Synthesizer issuing fresh handles.
#[derive(Debug, Clone)]
pub struct MockSynthesizer {
    failure: Option<NarrationErrorKind>,
    pub calls: Arc<AtomicUsize>,
    pub inputs: Arc<Mutex<Vec<(String, Voice, String)>>>,
    pub seen_states: Arc<Mutex<Vec<Lifecycle>>>,
    pub observer: LifecycleWatch,
}

impl MockSynthesizer {
    pub fn succeeding() -> Self {
        Self::with_failure(None)
    }

    pub fn failing(kind: NarrationErrorKind) -> Self {
        Self::with_failure(Some(kind))
    }

    fn with_failure(failure: Option<NarrationErrorKind>) -> Self {
        Self {
            failure,
            calls: Arc::new(AtomicUsize::new(0)),
            inputs: Arc::new(Mutex::new(Vec::new())),
            seen_states: Arc::new(Mutex::new(Vec::new())),
            observer: Arc::new(OnceLock::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Synthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: Voice,
        credential: &Credential,
    ) -> NarrationResult<AudioHandle> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().expect("inputs lock").push((
            text.to_string(),
            voice,
            credential.expose().to_string(),
        ));
        if let Some(state) = snapshot(&self.observer) {
            self.seen_states.lock().expect("states lock").push(state);
        }

        match &self.failure {
            None => Ok(AudioHandle::new("audio/flac", text.len())),
            Some(kind) => Err(NarrationError::new(kind.clone())),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-synthesizer"
    }
}

pub fn credential() -> Credential {
    Credential::new("hf_test_token")
}

//! Narration orchestration.
//!
//! The orchestrator sequences the rewrite and synthesis stages, owns the
//! lifecycle and display state, and commits finished narrations to history.

use crate::{DisplayState, HistoryStore, Lifecycle};
use echoverse_core::{Credential, Narration, Tone, Voice};
use echoverse_error::{NarrationError, NarrationResult};
use echoverse_interface::{Rewriter, Synthesizer};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

/// Drives narration requests through rewrite and synthesis.
///
/// `generate` borrows the orchestrator mutably, so one orchestrator runs at most
/// one request at a time. Callers sharing an orchestrator across tasks wrap it
/// in a `tokio::sync::Mutex`, which queues overlapping requests.
///
/// Nothing is retried automatically. Calling `generate` again restarts both
/// stages.
pub struct NarrationOrchestrator<R: Rewriter, S: Synthesizer> {
    rewriter: R,
    synthesizer: S,
    lifecycle: watch::Sender<Lifecycle>,
    display: DisplayState,
    history: HistoryStore,
}

impl<R: Rewriter, S: Synthesizer> NarrationOrchestrator<R, S> {
    /// Create an idle orchestrator with empty display and history.
    pub fn new(rewriter: R, synthesizer: S) -> Self {
        let (lifecycle, _) = watch::channel(Lifecycle::Idle);
        Self {
            rewriter,
            synthesizer,
            lifecycle,
            display: DisplayState::default(),
            history: HistoryStore::new(),
        }
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.borrow().clone()
    }

    /// Subscribe to lifecycle changes.
    ///
    /// A receiver always sees the latest state, so a front end can render
    /// progress while `generate` is suspended on a remote call.
    pub fn subscribe(&self) -> watch::Receiver<Lifecycle> {
        self.lifecycle.subscribe()
    }

    /// What is currently on display.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Narrations committed this session, most recent first.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// The rewrite collaborator.
    pub fn rewriter(&self) -> &R {
        &self.rewriter
    }

    /// The synthesis collaborator.
    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    fn transition(&self, next: Lifecycle) {
        debug!(state = %next, "Lifecycle transition");
        self.lifecycle.send_replace(next);
    }

    fn fail(&self, err: NarrationError) -> NarrationError {
        self.transition(Lifecycle::Failed(err.user_message()));
        err
    }

    fn validate<'c>(
        original_text: &str,
        credential: Option<&'c Credential>,
    ) -> NarrationResult<&'c Credential> {
        if original_text.trim().is_empty() {
            return Err(NarrationError::validation("empty input"));
        }
        match credential {
            Some(credential) if !credential.is_blank() => Ok(credential),
            _ => Err(NarrationError::validation("missing credential")),
        }
    }

    /// Rewrite `original_text` in `tone`, synthesize it with `voice`, and
    /// commit the result to history.
    ///
    /// Returns the committed narration. On failure the lifecycle moves to
    /// [`Lifecycle::Failed`] with the error's user message and the classified
    /// error is returned; history is untouched.
    ///
    /// # Errors
    ///
    /// - `Validation("empty input")` if the text is blank
    /// - `Validation("missing credential")` if no usable credential is given
    /// - whatever the rewrite or synthesis client reports
    #[instrument(
        skip(self, original_text, credential),
        fields(
            text_len = original_text.len(),
            tone = %tone,
            voice = %voice,
            rewriter = self.rewriter.provider_name(),
            synthesizer = self.synthesizer.provider_name(),
        )
    )]
    pub async fn generate(
        &mut self,
        original_text: &str,
        tone: Tone,
        voice: Voice,
        credential: Option<&Credential>,
    ) -> NarrationResult<Narration> {
        let credential = match Self::validate(original_text, credential) {
            Ok(credential) => credential,
            Err(err) => {
                warn!(error = %err, "Narration request rejected");
                return Err(self.fail(err));
            }
        };

        self.display.begin(original_text, tone, voice);
        self.transition(Lifecycle::Rewriting);

        let rewritten = match self.rewriter.rewrite(original_text, tone).await {
            Ok(rewritten) => rewritten,
            Err(err) => {
                error!(error = %err, "Rewrite stage failed");
                return Err(self.fail(err));
            }
        };
        self.display.set_rewritten(&rewritten);
        self.transition(Lifecycle::Synthesizing);

        let audio = match self.synthesizer.synthesize(&rewritten, voice, credential).await {
            Ok(audio) => audio,
            Err(err) => {
                error!(error = %err, "Synthesis stage failed");
                return Err(self.fail(err));
            }
        };
        self.display.set_audio(audio.clone());

        let narration = Narration::builder()
            .original_text(original_text)
            .rewritten_text(rewritten)
            .tone(tone)
            .voice(voice)
            .audio(audio)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build narration");
                self.fail(NarrationError::upstream("the narration could not be recorded"))
            })?;

        self.history.prepend(narration.clone());
        self.transition(Lifecycle::Success);

        info!(id = %narration.id(), history_len = self.history.len(), "Narration committed");
        Ok(narration)
    }

    /// Put a past narration back on display.
    ///
    /// No network call, no history change, and the lifecycle is left as is.
    pub fn load_from_history(&mut self, narration: &Narration) {
        debug!(id = %narration.id(), "Loading narration from history");
        self.display.show(narration);
    }

    /// Put the history entry at `index` back on display.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn load_from_history_index(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(narration) => {
                debug!(index, id = %narration.id(), "Loading narration from history");
                self.display.show(narration);
                true
            }
            None => false,
        }
    }
}

impl<R, S> std::fmt::Debug for NarrationOrchestrator<R, S>
where
    R: Rewriter,
    S: Synthesizer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrationOrchestrator")
            .field("rewriter", &self.rewriter.provider_name())
            .field("synthesizer", &self.synthesizer.provider_name())
            .field("lifecycle", &*self.lifecycle.borrow())
            .field("display", &self.display)
            .field("history_len", &self.history.len())
            .finish()
    }
}

//! Wiring of the production clients, stores and orchestrator.

use echoverse_core::{AudioHandle, EchoverseConfig};
use echoverse_error::EchoverseResult;
use echoverse_models::{GeminiRewriter, HuggingFaceSynthesizer};
use echoverse_narration::NarrationOrchestrator;
use echoverse_storage::{AudioStore, CredentialStore, SessionAudioStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Orchestrator backed by the Gemini and HuggingFace clients.
pub type DefaultOrchestrator = NarrationOrchestrator<GeminiRewriter, HuggingFaceSynthesizer>;

/// Everything a front end needs for one session.
#[derive(Debug)]
pub struct EchoverseApp {
    config: EchoverseConfig,
    audio: SessionAudioStore,
    credentials: CredentialStore,
    orchestrator: DefaultOrchestrator,
}

impl EchoverseApp {
    /// Build the clients and stores described by `config`.
    ///
    /// The Gemini API key is read from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key is unset, the HTTP
    /// clients cannot be built, or no configuration directory is available.
    #[instrument(skip_all, fields(model = %config.rewrite.model))]
    pub fn from_config(config: EchoverseConfig) -> EchoverseResult<Self> {
        let rewriter = GeminiRewriter::new(&config.rewrite, &config.http)?;
        Self::with_rewriter(config, rewriter)
    }

    /// Like [`from_config`](Self::from_config) with an already built rewriter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the synthesis client cannot be built
    /// or no configuration directory is available.
    pub fn with_rewriter(config: EchoverseConfig, rewriter: GeminiRewriter) -> EchoverseResult<Self> {
        let audio = SessionAudioStore::new();
        let synthesizer =
            HuggingFaceSynthesizer::new(&config.synthesis, &config.http, Arc::new(audio.clone()))?;
        let credentials = CredentialStore::new(config.storage.resolve_config_dir()?);

        debug!(credentials = %credentials.path().display(), "Assembled EchoVerse session");

        Ok(Self {
            config,
            audio,
            credentials,
            orchestrator: NarrationOrchestrator::new(rewriter, synthesizer),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &EchoverseConfig {
        &self.config
    }

    /// Session audio store.
    pub fn audio(&self) -> &SessionAudioStore {
        &self.audio
    }

    /// Credential file.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The orchestrator.
    pub fn orchestrator(&self) -> &DefaultOrchestrator {
        &self.orchestrator
    }

    /// The orchestrator, for running requests.
    pub fn orchestrator_mut(&mut self) -> &mut DefaultOrchestrator {
        &mut self.orchestrator
    }

    /// Write the audio behind `handle` into `dir` under the download file name.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the handle is unknown or the file cannot be
    /// written.
    pub async fn download(
        &self,
        handle: &AudioHandle,
        dir: impl AsRef<Path>,
    ) -> EchoverseResult<PathBuf> {
        self.audio.export(handle, dir.as_ref()).await
    }

    /// Split into the stores and the orchestrator, for callers that share the
    /// orchestrator behind a lock.
    pub fn into_parts(self) -> (SessionAudioStore, CredentialStore, DefaultOrchestrator) {
        (self.audio, self.credentials, self.orchestrator)
    }
}

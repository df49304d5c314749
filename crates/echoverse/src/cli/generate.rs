//! One-shot generation command handler.

use super::GenerateArgs;
use super::credential::obtain_credential;
use super::progress::spawn_progress_reporter;
use echoverse::{EchoverseApp, EchoverseConfig, EchoverseResult, NarrationError, read_text_file};
use std::path::Path;
use tracing::info;

/// The passage to narrate, rejected when blank.
async fn source_text(text: Option<String>, file: Option<&Path>) -> EchoverseResult<String> {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text_file(path).await?,
        (None, None) => String::new(),
    };
    if text.trim().is_empty() {
        return Err(NarrationError::validation("empty input").into());
    }
    Ok(text)
}

/// Rewrite and narrate one passage, then save the audio into `args.out`.
///
/// The text is checked before any token prompt or client setup.
pub async fn run_generate(config: EchoverseConfig, args: GenerateArgs) -> EchoverseResult<()> {
    let text = source_text(args.text, args.file.as_deref()).await?;
    let mut app = EchoverseApp::from_config(config)?;

    let credential = obtain_credential(app.credentials()).await?;

    let reporter = spawn_progress_reporter(app.orchestrator().subscribe());
    let result = app
        .orchestrator_mut()
        .generate(&text, args.tone, args.voice, Some(&credential))
        .await;
    reporter.abort();
    let narration = result?;

    println!("--- Rewritten text ({}) ---", narration.tone());
    println!("{}", narration.rewritten_text());

    let path = app.download(narration.audio(), &args.out).await?;
    info!(path = %path.display(), "Saved narration audio");
    println!();
    println!("Saved {} narration to {}", narration.voice(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoverse::NarrationErrorKind;

    #[tokio::test]
    async fn blank_text_is_rejected_before_credentials() {
        let err = source_text(Some("   ".to_string()), None)
            .await
            .expect_err("blank text must fail");
        assert_eq!(
            err.as_narration().map(|err| err.kind().clone()),
            Some(NarrationErrorKind::Validation("empty input".to_string()))
        );
    }

    #[tokio::test]
    async fn blank_file_is_rejected() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n\n").expect("file written");

        let err = source_text(None, Some(&path))
            .await
            .expect_err("blank file must fail");
        assert!(err.as_narration().is_some());
    }

    #[tokio::test]
    async fn text_is_kept_verbatim() {
        let text = source_text(Some(" The cat sat. ".to_string()), None)
            .await
            .expect("text accepted");
        assert_eq!(text, " The cat sat. ");
    }
}

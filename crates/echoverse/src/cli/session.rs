//! Interactive session command handler.
//!
//! The session plays the part of the web page: it keeps the draft text and
//! selections, the history of this run, and the player, and accepts one
//! command per line.

use super::progress::spawn_progress_reporter;
use echoverse::{
    AudioStore, Credential, CredentialStore, DefaultOrchestrator, EchoverseApp, EchoverseConfig,
    EchoverseResult, NarrationError, NarrationErrorKind, PlayerState, SessionAudioStore,
    SharePayload, StorageError, StorageErrorKind, Tone, Voice, format_time, read_text_file,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  text <words...>    set the text to narrate
  file <path>        load the text from a .txt file
  tone <tone>        neutral | suspenseful | inspiring | dramatic | humorous
  voice <voice>      female | male
  generate           rewrite and narrate the current text
  show               show what is on display
  history            list this session's narrations
  load <n>           put history entry n back on display
  download [dir]     save the displayed audio (default: current directory)
  share              print the share text for the displayed rewrite
  play               toggle play/pause
  seek <seconds>     move the playback position
  volume <0..1>      set the volume
  rate <r>           0.75 | 1 | 1.5 | 2
  credential <token> store a Hugging Face access token
  help               show this help
  quit               leave the session";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionCommand {
    Text(String),
    File(PathBuf),
    Tone(Tone),
    Voice(Voice),
    Generate,
    Show,
    History,
    Load(usize),
    Download(Option<PathBuf>),
    Share,
    Play,
    Seek(f64),
    Volume(f32),
    Rate(f32),
    Credential(String),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines parse as `None`.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let require = |what: &'static str| {
            if rest.is_empty() {
                Err(format!("`{}` needs {}", word, what))
            } else {
                Ok(rest)
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "text" => Self::Text(require("some text")?.to_string()),
            "file" => Self::File(PathBuf::from(require("a path")?)),
            "tone" => Self::Tone(
                require("a tone")?
                    .parse()
                    .map_err(|_| format!("Unknown tone `{}`", rest))?,
            ),
            "voice" => Self::Voice(
                require("a voice")?
                    .parse()
                    .map_err(|_| format!("Unknown voice `{}`", rest))?,
            ),
            "generate" => Self::Generate,
            "show" => Self::Show,
            "history" => Self::History,
            "load" => {
                let index: usize = require("an entry number")?
                    .parse()
                    .map_err(|_| format!("`{}` is not an entry number", rest))?;
                if index == 0 {
                    return Err("History entries are numbered from 1".to_string());
                }
                Self::Load(index)
            }
            "download" => Self::Download((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "share" => Self::Share,
            "play" | "pause" => Self::Play,
            "seek" => Self::Seek(
                require("a position in seconds")?
                    .parse()
                    .map_err(|_| format!("`{}` is not a number of seconds", rest))?,
            ),
            "volume" => Self::Volume(
                require("a level between 0 and 1")?
                    .parse()
                    .map_err(|_| format!("`{}` is not a volume level", rest))?,
            ),
            "rate" => Self::Rate(
                require("a playback rate")?
                    .trim_end_matches('x')
                    .parse()
                    .map_err(|_| format!("`{}` is not a playback rate", rest))?,
            ),
            "credential" => Self::Credential(require("an access token")?.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command `{}`; type `help`", other)),
        };
        Ok(Some(command))
    }
}

/// State of one interactive session.
struct Session {
    orchestrator: DefaultOrchestrator,
    audio: SessionAudioStore,
    credentials: CredentialStore,
    credential: Option<Credential>,
    draft: String,
    tone: Tone,
    voice: Voice,
    player: PlayerState,
}

impl Session {
    /// Start a session on `app`, picking up any stored credential.
    fn new(app: EchoverseApp) -> EchoverseResult<Self> {
        let (audio, credentials, orchestrator) = app.into_parts();
        let credential = credentials.load()?;
        Ok(Self {
            orchestrator,
            audio,
            credentials,
            credential,
            draft: String::new(),
            tone: Tone::default(),
            voice: Voice::default(),
            player: PlayerState::new(),
        })
    }

    async fn execute(&mut self, command: SessionCommand) -> EchoverseResult<()> {
        debug!(?command, "Executing session command");
        match command {
            SessionCommand::Text(text) => {
                self.draft = text;
                println!("Text set ({} characters).", self.draft.chars().count());
            }
            SessionCommand::File(path) => {
                self.draft = read_text_file(&path).await?;
                println!(
                    "Loaded {} ({} characters).",
                    path.display(),
                    self.draft.chars().count()
                );
            }
            SessionCommand::Tone(tone) => {
                self.tone = tone;
                println!("Tone: {}", tone);
            }
            SessionCommand::Voice(voice) => {
                self.voice = voice;
                println!("Voice: {}", voice);
            }
            SessionCommand::Generate => self.generate().await?,
            SessionCommand::Show => self.show(),
            SessionCommand::History => self.history(),
            SessionCommand::Load(number) => self.load(number)?,
            SessionCommand::Download(dir) => {
                let handle = self
                    .orchestrator
                    .display()
                    .audio()
                    .clone()
                    .ok_or_else(|| {
                        NarrationError::validation("There is no audio to download yet.")
                    })?;
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                let path = self.audio.export(&handle, &dir).await?;
                println!("Saved {}", path.display());
            }
            SessionCommand::Share => {
                let payload =
                    SharePayload::for_rewritten(self.orchestrator.display().rewritten_text())?;
                println!("{}\n\n{}", payload.title(), payload.text());
            }
            SessionCommand::Play => {
                if self.player.source().is_none() {
                    println!("No audio loaded.");
                } else {
                    let playing = self.player.toggle_play();
                    println!(
                        "{} {} / {} at {}x",
                        if playing { "Playing" } else { "Paused" },
                        format_time(self.player.current_time()),
                        format_time(self.player.duration()),
                        self.player.rate()
                    );
                }
            }
            SessionCommand::Seek(seconds) => {
                self.player.seek(seconds);
                println!(
                    "Position {} / {}",
                    format_time(self.player.current_time()),
                    format_time(self.player.duration())
                );
            }
            SessionCommand::Volume(volume) => {
                self.player.set_volume(volume);
                println!(
                    "Volume {:.0}% ({})",
                    self.player.volume() * 100.0,
                    self.player.volume_level()
                );
            }
            SessionCommand::Rate(rate) => {
                self.player.set_rate(rate)?;
                println!("Playback rate {}x", rate);
            }
            SessionCommand::Credential(token) => {
                let credential = Credential::new(token.trim());
                self.credentials.save_credential(&credential)?;
                self.credential = Some(credential);
                println!("Saved access token to {}", self.credentials.path().display());
            }
            SessionCommand::Help => println!("{}", HELP),
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    async fn generate(&mut self) -> EchoverseResult<()> {
        let result = self
            .orchestrator
            .generate(&self.draft, self.tone, self.voice, self.credential.as_ref())
            .await;
        self.player
            .load_source(self.orchestrator.display().audio().as_ref());

        match result {
            Ok(narration) => {
                println!("--- Rewritten text ({}) ---", narration.tone());
                println!("{}", narration.rewritten_text());
                println!();
                println!(
                    "Narration ready ({} voice). Use `play`, `download` or `share`.",
                    narration.voice()
                );
                Ok(())
            }
            Err(err) => {
                if err.kind() == &NarrationErrorKind::Validation("missing credential".to_string())
                {
                    println!("Set one with `credential <token>`.");
                }
                Err(err.into())
            }
        }
    }

    fn show(&self) {
        let display = self.orchestrator.display();
        println!("Status: {}", self.orchestrator.lifecycle());
        println!("Tone: {} | Voice: {}", self.tone, self.voice);
        if display.is_empty() {
            println!("Nothing generated yet.");
            return;
        }
        println!("--- Original text ---");
        println!("{}", display.original_text());
        println!("--- Rewritten text ({}) ---", display.tone());
        println!("{}", display.rewritten_text());
        match display.audio() {
            Some(handle) => println!(
                "Audio: {} ({} bytes, {} voice)",
                handle.mime_type(),
                handle.size_bytes(),
                display.voice()
            ),
            None => println!("Audio: none"),
        }
    }

    fn history(&self) {
        if self.orchestrator.history().is_empty() {
            println!("No narrations yet.");
            return;
        }
        for (position, narration) in self.orchestrator.history().iter().enumerate() {
            println!("{:>3}. {}", position + 1, narration.summary());
        }
    }

    fn load(&mut self, number: usize) -> EchoverseResult<()> {
        if !self.orchestrator.load_from_history_index(number - 1) {
            return Err(
                NarrationError::validation(format!("There is no history entry {}.", number)).into(),
            );
        }

        let display = self.orchestrator.display();
        self.draft = display.original_text().clone();
        self.tone = *display.tone();
        self.voice = *display.voice();
        self.player.load_source(display.audio().as_ref());
        println!(
            "Loaded entry {}: {} | {}",
            number,
            display.tone(),
            display.voice()
        );
        Ok(())
    }
}

/// Run the interactive session until `quit` or end of input.
pub async fn run_session(config: EchoverseConfig) -> EchoverseResult<()> {
    let mut session = Session::new(EchoverseApp::from_config(config)?)?;
    if session.credential.is_none() {
        println!("Hugging Face API key is missing. Set it with `credential <token>`.");
    }

    let reporter = spawn_progress_reporter(session.orchestrator.subscribe());

    println!("EchoVerse session. Type `help` for commands.");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let _ = stdout.write_all(b"> ").await;
        let _ = stdout.flush().await;

        let line = lines.next_line().await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("stdin: {}", e)))
        })?;
        let Some(line) = line else {
            break;
        };

        match SessionCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(err) = session.execute(command).await {
                    warn!(error = %err, "Session command failed");
                    crate::report(&err);
                }
            }
            Err(message) => eprintln!("{}", message),
        }
    }

    reporter.abort();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoverse::{GeminiRewriter, StorageSettings};
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(line: &str) -> SessionCommand {
        SessionCommand::parse(line)
            .expect("parses")
            .expect("not blank")
    }

    #[test]
    fn parses_text_with_spaces() {
        assert_eq!(
            parse("text  The storm reached the coast. "),
            SessionCommand::Text("The storm reached the coast.".to_string())
        );
    }

    #[test]
    fn parses_selections_case_insensitively() {
        assert_eq!(parse("tone Dramatic"), SessionCommand::Tone(Tone::Dramatic));
        assert_eq!(parse("TONE humorous"), SessionCommand::Tone(Tone::Humorous));
        assert_eq!(parse("voice MALE"), SessionCommand::Voice(Voice::Male));
    }

    #[test]
    fn parses_player_commands() {
        assert_eq!(parse("seek 12.5"), SessionCommand::Seek(12.5));
        assert_eq!(parse("volume 0.3"), SessionCommand::Volume(0.3));
        assert_eq!(parse("rate 1.5x"), SessionCommand::Rate(1.5));
        assert_eq!(parse("pause"), SessionCommand::Play);
    }

    #[test]
    fn parses_optional_download_dir() {
        assert_eq!(parse("download"), SessionCommand::Download(None));
        assert_eq!(
            parse("download out/audio"),
            SessionCommand::Download(Some(PathBuf::from("out/audio")))
        );
    }

    #[test]
    fn history_numbers_start_at_one() {
        assert_eq!(parse("load 2"), SessionCommand::Load(2));
        assert!(SessionCommand::parse("load 0").is_err());
        assert!(SessionCommand::parse("load two").is_err());
    }

    fn app_against(server: &MockServer, config_dir: &TempDir) -> EchoverseApp {
        let mut config = EchoverseConfig::bundled().expect("bundled config parses");
        config.rewrite.base_url = server.uri();
        config.synthesis.base_url = server.uri();
        config.storage = StorageSettings {
            config_dir: Some(config_dir.path().to_path_buf()),
        };

        let rewriter = GeminiRewriter::with_api_key("test-key", &config.rewrite, &config.http)
            .expect("rewriter builds");
        EchoverseApp::with_rewriter(config, rewriter).expect("app builds")
    }

    #[tokio::test]
    async fn failed_generate_unloads_player() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [ { "content": { "parts": [ { "text": "Rewritten." } ] } } ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/facebook/mms-tts-eng"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(b"fLaC".to_vec(), "audio/flac"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/facebook/mms-tts-eng"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config_dir = TempDir::new().expect("config dir");
        let mut session = Session::new(app_against(&server, &config_dir)).expect("session starts");
        session.credential = Some(Credential::new("hf_test_token"));
        session.draft = "The storm reached the coast.".to_string();
        session.voice = Voice::Male;

        session.generate().await.expect("first narration succeeds");
        assert!(session.player.source().is_some());
        assert!(session.player.toggle_play());

        assert!(session.generate().await.is_err());
        assert_eq!(session.orchestrator.display().audio(), &None);
        assert!(session.player.source().is_none());
        assert!(!session.player.is_playing());
        assert!(!session.player.toggle_play());
    }

    #[tokio::test]
    async fn load_follows_history_entry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [ { "content": { "parts": [ { "text": "Rewritten." } ] } } ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/espnet/kan-bayashi_ljspeech_vits"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(b"fLaC".to_vec(), "audio/flac"))
            .mount(&server)
            .await;

        let config_dir = TempDir::new().expect("config dir");
        let mut session = Session::new(app_against(&server, &config_dir)).expect("session starts");
        session.credential = Some(Credential::new("hf_test_token"));

        session.draft = "First.".to_string();
        session.generate().await.expect("first narration");
        let first_audio = session.player.source().cloned();
        session.draft = "Second.".to_string();
        session.generate().await.expect("second narration");

        session.load(2).expect("entry 2 exists");
        assert_eq!(session.draft, "First.");
        assert_eq!(session.player.source().cloned(), first_audio);
        assert!(session.load(3).is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(SessionCommand::parse("tone angry").is_err());
        assert!(SessionCommand::parse("text").is_err());
        assert!(SessionCommand::parse("dance").is_err());
        assert_eq!(SessionCommand::parse("   ").expect("blank"), None);
    }
}

//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use echoverse::{Tone, Voice};
use std::path::PathBuf;

/// EchoVerse - rewrite text in a tone and narrate it with AI voices
#[derive(Parser, Debug)]
#[command(name = "echoverse")]
#[command(about = "Rewrite text in a chosen tone and narrate it with AI voices", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite and narrate one passage, then save the audio
    Generate(GenerateArgs),

    /// Manage the stored Hugging Face access token
    #[command(subcommand)]
    Credential(CredentialCommands),

    /// Start an interactive session with history, playback and sharing
    Session,
}

/// Arguments for a one-shot generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text to narrate
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,

    /// Plain-text (.txt) file to narrate
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Tone of the rewrite
    #[arg(long, default_value_t = Tone::Neutral)]
    pub tone: Tone,

    /// Narrator voice
    #[arg(long, default_value_t = Voice::Female)]
    pub voice: Voice,

    /// Directory the audio is saved into
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

/// Credential management subcommands
#[derive(Subcommand, Debug)]
pub enum CredentialCommands {
    /// Store a new access token
    Set {
        /// Hugging Face access token
        token: String,
    },

    /// Show whether a token is stored (masked)
    Show,

    /// Remove the stored token
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_text() {
        let cli = Cli::try_parse_from([
            "echoverse",
            "generate",
            "--text",
            "Hello",
            "--tone",
            "dramatic",
            "--voice",
            "male",
        ])
        .expect("parses");

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.text.as_deref(), Some("Hello"));
                assert_eq!(args.tone, Tone::Dramatic);
                assert_eq!(args.voice, Voice::Male);
                assert_eq!(args.out, PathBuf::from("."));
            }
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn generate_defaults_tone_and_voice() {
        let cli = Cli::try_parse_from(["echoverse", "generate", "--file", "story.txt"])
            .expect("parses");

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.file, Some(PathBuf::from("story.txt")));
                assert_eq!(args.tone, Tone::Neutral);
                assert_eq!(args.voice, Voice::Female);
            }
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn generate_needs_exactly_one_source() {
        assert!(Cli::try_parse_from(["echoverse", "generate"]).is_err());
        assert!(
            Cli::try_parse_from([
                "echoverse",
                "generate",
                "--text",
                "a",
                "--file",
                "b.txt"
            ])
            .is_err()
        );
    }

    #[test]
    fn rejects_unknown_tone() {
        assert!(
            Cli::try_parse_from(["echoverse", "generate", "--text", "a", "--tone", "angry"])
                .is_err()
        );
    }

    #[test]
    fn parses_credential_and_global_flags() {
        let cli = Cli::try_parse_from(["echoverse", "-v", "--json-logs", "credential", "set", "hf_x"])
            .expect("parses");

        assert!(cli.verbose);
        assert!(cli.json_logs);
        assert!(matches!(
            cli.command,
            Commands::Credential(CredentialCommands::Set { ref token }) if token == "hf_x"
        ));
    }
}

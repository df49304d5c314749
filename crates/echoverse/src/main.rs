//! EchoVerse CLI binary.
//!
//! This binary provides command-line access to EchoVerse:
//! - Rewrite and narrate a passage in one shot
//! - Manage the stored Hugging Face access token
//! - Run an interactive session with history, playback and sharing

use clap::Parser;
use echoverse::observability::{
    ObservabilityConfig, init_observability_with_config, shutdown_observability,
};
use echoverse::{CredentialStore, EchoverseConfig, EchoverseError, EchoverseResult};

mod cli;

use cli::{Cli, Commands, handle_credential_command, run_generate, run_session};

fn load_config(cli: &Cli) -> EchoverseResult<EchoverseConfig> {
    match &cli.config {
        Some(path) => EchoverseConfig::from_file(path),
        None => EchoverseConfig::load(),
    }
}

async fn run(cli: Cli) -> EchoverseResult<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Generate(args) => run_generate(config, args).await?,
        Commands::Credential(command) => {
            let store = CredentialStore::new(config.storage.resolve_config_dir()?);
            handle_credential_command(&store, command).await?;
        }
        Commands::Session => run_session(config).await?,
    }

    Ok(())
}

fn report(err: &EchoverseError) {
    match err.as_narration() {
        Some(narration) => eprintln!("Error: {}", narration.user_message()),
        None => eprintln!("Error: {}", err),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads GEMINI_API_KEY or RUST_LOG
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut observability = ObservabilityConfig::default().with_json_logs(cli.json_logs);
    if cli.verbose {
        observability = observability.with_forced_log_level("debug");
    }
    init_observability_with_config(observability)?;

    let outcome = run(cli).await;
    shutdown_observability();

    if let Err(err) = outcome {
        tracing::debug!(error = ?err, "Command failed");
        report(&err);
        std::process::exit(1);
    }

    Ok(())
}

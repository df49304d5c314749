//! Credential command handlers.

use super::CredentialCommands;
use echoverse::{Credential, CredentialStore, EchoverseResult, NarrationError};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

/// Mask a token for display, keeping a short prefix and suffix.
fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 6 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..3].iter().collect();
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    format!("{}****{}", prefix, suffix)
}

/// Handle `echoverse credential ...`.
pub async fn handle_credential_command(
    store: &CredentialStore,
    command: CredentialCommands,
) -> EchoverseResult<()> {
    match command {
        CredentialCommands::Set { token } => {
            store.save_credential(&Credential::new(token.trim()))?;
            info!(path = %store.path().display(), "Stored Hugging Face access token");
            println!("Saved access token to {}", store.path().display());
        }
        CredentialCommands::Show => match store.load()? {
            Some(credential) => println!("Stored access token: {}", mask(credential.expose())),
            None => println!("No access token stored."),
        },
        CredentialCommands::Clear => {
            store.clear()?;
            println!("Removed stored access token.");
        }
    }
    Ok(())
}

/// Ask for an access token on stdin and persist it.
///
/// # Errors
///
/// Returns `Validation("missing credential")` if nothing usable is entered.
async fn prompt_for_credential(store: &CredentialStore) -> EchoverseResult<Credential> {
    let mut stdout = tokio::io::stdout();
    let prompt = "Hugging Face API key is missing. Please set it first.\nAccess token: ";
    let _ = stdout.write_all(prompt.as_bytes()).await;
    let _ = stdout.flush().await;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .map_err(|_| NarrationError::validation("missing credential"))?;

    let credential = Credential::new(line.trim());
    store.save_credential(&credential)?;
    println!("Saved access token to {}", store.path().display());
    Ok(credential)
}

/// The stored access token, prompting for one when none is stored.
pub async fn obtain_credential(store: &CredentialStore) -> EchoverseResult<Credential> {
    match store.load()? {
        Some(credential) => Ok(credential),
        None => prompt_for_credential(store).await,
    }
}

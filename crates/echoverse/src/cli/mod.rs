//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the echoverse binary.

mod commands;
mod credential;
mod generate;
mod progress;
mod session;

pub use commands::{Cli, Commands, CredentialCommands, GenerateArgs};
pub use credential::{handle_credential_command, obtain_credential};
pub use generate::run_generate;
pub use session::run_session;

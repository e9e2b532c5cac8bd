//! Account management CLI subcommands
//!
//! Provides commands for account creation and lookup.

use crate::db::accounts;
use crate::AppState;
use clap::{Parser, Subcommand};
use pokemon_collection_common::error::{ServerError, ServerResult};

/// Account management commands
#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Add a new account
    Add(AddAccount),
    /// Check whether a username is taken
    Exists(ExistsAccount),
}

/// Arguments for adding a new account
#[derive(Parser, Debug)]
pub struct AddAccount {
    /// Username for the new account
    pub username: String,
    /// Password
    #[arg(short, long)]
    pub password: String,
}

/// Arguments for checking a username
#[derive(Parser, Debug)]
pub struct ExistsAccount {
    /// Username to look up
    pub username: String,
}

/// Run an account subcommand against the configured database
///
/// Returns the line to print on success.
pub async fn run(state: &AppState, command: AccountCommand) -> ServerResult<String> {
    match command {
        AccountCommand::Add(args) => {
            let username = args.username.trim();
            if username.is_empty() || args.password.is_empty() {
                return Err(ServerError::Validation(
                    "Username and password are required".to_string(),
                ));
            }

            let hash = state.password_hasher.hash(&args.password).await?;
            let account = accounts::create(&state.db_pool, username, &hash).await?;
            tracing::info!(account_id = %account.id, "Account created from CLI");
            Ok(format!("Created account '{}' ({})", account.username, account.id))
        }
        AccountCommand::Exists(args) => {
            let found = accounts::exists(&state.db_pool, &args.username).await?;
            Ok(found.to_string())
        }
    }
}

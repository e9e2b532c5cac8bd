//! CLI module for pokemon-collection
//!
//! Provides command-line interface for server management.

pub mod account;

use clap::{Parser, Subcommand};

/// Pokemon Collection - Personal Pokemon collection API server
#[derive(Parser, Debug)]
#[command(name = "pokemon-collection")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    POKEMON_COLLECTION_HOST                 Bind address (default: 0.0.0.0)
    POKEMON_COLLECTION_PORT                 Listen port (default: 3000)
    POKEMON_COLLECTION_LOG_LEVEL            Log level (default: info)
    POKEMON_COLLECTION_DATABASE_URL         Database URL
    POKEMON_COLLECTION_JWT_SECRET           JWT signing key (auto-generated if not set)
    POKEMON_COLLECTION_JWT_TTL_SECS         Token lifetime in seconds (default: 86400)
    POKEMON_COLLECTION_BCRYPT_COST          bcrypt cost factor (default: 12)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage accounts
    Account {
        /// Account management subcommand
        #[command(subcommand)]
        command: account::AccountCommand,
    },
}

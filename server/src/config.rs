//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, and builds the server
//! configuration from them.

use pokemon_collection_common::config::ServerConfig;
use std::io;
use std::path::PathBuf;

/// Default data directory name under the home directory
const DATA_DIR: &str = ".pokemon-collection";
/// Environment variable overriding the data directory
const DATA_DIR_ENV: &str = "POKEMON_COLLECTION_DATA_DIR";

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use pokemon_collection::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("POKEMON_COLLECTION_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Falls back to `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Resolve the data directory (`~/.pokemon-collection` unless overridden)
pub fn data_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| io::Error::new(io::ErrorKind::NotFound, "Failed to resolve home directory"))?;

    Ok(PathBuf::from(home).join(DATA_DIR))
}

/// Build the server configuration from the environment
///
/// Unset or unparsable values keep the defaults of [`ServerConfig`]; the
/// database defaults to a file inside the data directory.
pub fn load_server_config() -> io::Result<ServerConfig> {
    let defaults = ServerConfig::default();

    let database_url = match get_env_with_fallback("POKEMON_COLLECTION_DATABASE_URL", "DATABASE_URL")
    {
        Some(url) => url,
        None => format!("sqlite:{}", data_dir()?.join("collection.db").display()),
    };

    Ok(ServerConfig {
        host: get_env_with_fallback_or("POKEMON_COLLECTION_HOST", "HOST", &defaults.host),
        port: get_env_with_fallback_parse("POKEMON_COLLECTION_PORT", "PORT", defaults.port),
        database_url,
        jwt_ttl_secs: get_env_with_fallback_parse(
            "POKEMON_COLLECTION_JWT_TTL_SECS",
            "JWT_TTL_SECS",
            defaults.jwt_ttl_secs,
        ),
        bcrypt_cost: get_env_with_fallback_parse(
            "POKEMON_COLLECTION_BCRYPT_COST",
            "BCRYPT_COST",
            defaults.bcrypt_cost,
        ),
    })
}

//! JWT Secret management
//!
//! Provides automatic generation and file-based persistence of JWT secrets.
//! The secret is stored in `<data dir>/jwt_secret` with permissions 600.

use crate::config::{data_dir, get_env_with_fallback};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Default JWT secret file name
const JWT_SECRET_FILE: &str = "jwt_secret";

/// Get or create the JWT secret
///
/// Priority:
/// 1. Environment variable `POKEMON_COLLECTION_JWT_SECRET` (or deprecated `JWT_SECRET`)
/// 2. Read from file `<data dir>/jwt_secret`
/// 3. Generate a new random secret and save it to that file
pub fn get_or_create_jwt_secret() -> io::Result<String> {
    if let Some(secret) = get_env_with_fallback("POKEMON_COLLECTION_JWT_SECRET", "JWT_SECRET") {
        if !secret.is_empty() {
            tracing::info!("Using JWT secret from environment variable");
            return Ok(secret);
        }
    }

    get_or_create_jwt_secret_in(&data_dir()?)
}

/// Read the secret from `dir`, generating and persisting one if absent
pub fn get_or_create_jwt_secret_in(dir: &Path) -> io::Result<String> {
    let secret_path = dir.join(JWT_SECRET_FILE);
    if secret_path.exists() {
        let secret = read_secret_file(&secret_path)?;
        if !secret.is_empty() {
            tracing::info!("Using JWT secret from file: {}", secret_path.display());
            return Ok(secret);
        }
    }

    let secret = generate_secret();
    write_secret_file(&secret_path, &secret)?;
    tracing::info!(
        "Generated new JWT secret and saved to: {}",
        secret_path.display()
    );

    Ok(secret)
}

/// Generate a new random secret from two UUIDv4 values (244 random bits)
fn generate_secret() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

fn read_secret_file(path: &PathBuf) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut secret = String::new();
    file.read_to_string(&mut secret)?;
    Ok(secret.trim().to_string())
}

/// Write the secret to file with secure permissions (600)
fn write_secret_file(path: &PathBuf, secret: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(secret.as_bytes())?;

    #[cfg(unix)]
    {
        let metadata = file.metadata()?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o600);
        fs::set_permissions(path, permissions)?;
    }

    Ok(())
}

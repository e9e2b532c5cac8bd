//! ロギング初期化ユーティリティ
//!
//! `tracing` による構造化ロギングを標準出力とJSONライン形式ファイルへ出力する。

use chrono::Local;
use std::{
    env,
    fs::{self, OpenOptions},
    io::{self, Error},
    path::{Path, PathBuf},
    sync::OnceLock,
};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログファイルベース名（JSON Lines）
pub const LOG_FILE_BASE: &str = "pokemon-collection.jsonl";

const LOG_SUBDIR: &str = "logs";
const DEFAULT_RETENTION_DAYS: u32 = 7;

const LOG_DIR_ENV: &str = "POKEMON_COLLECTION_LOG_DIR";
const LOG_LEVEL_ENV: &str = "POKEMON_COLLECTION_LOG_LEVEL";
const LOG_RETENTION_DAYS_ENV: &str = "POKEMON_COLLECTION_LOG_RETENTION_DAYS";
const ALT_LEVEL_ENV: &str = "RUST_LOG";

// ファイル書き込みスレッドのガード（プロセス終了まで保持）
static LOGGER_GUARD: OnceLock<Result<WorkerGuard, io::Error>> = OnceLock::new();

/// ログ出力を初期化する。
pub fn init() -> io::Result<()> {
    match LOGGER_GUARD.get_or_init(configure_logger) {
        Ok(_) => Ok(()),
        Err(err) => Err(io::Error::new(err.kind(), err.to_string())),
    }
}

/// ログディレクトリのパスを返す。
pub fn log_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    // デフォルト: <データディレクトリ>/logs
    Ok(crate::config::data_dir()?.join(LOG_SUBDIR))
}

/// 今日のログファイルのパスを返す。
pub fn log_file_path() -> io::Result<PathBuf> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let filename = format!("{}.{}", LOG_FILE_BASE, today);
    Ok(log_dir()?.join(filename))
}

fn get_retention_days() -> u32 {
    env::var(LOG_RETENTION_DAYS_ENV)
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(DEFAULT_RETENTION_DAYS)
}

/// 保持期間を過ぎたログファイルを削除する。
fn cleanup_old_logs(log_dir: &Path, retention_days: u32) -> io::Result<()> {
    if !log_dir.exists() {
        return Ok(());
    }

    let cutoff = Local::now() - chrono::Duration::days(retention_days as i64);
    let cutoff_str = cutoff.format("%Y-%m-%d").to_string();
    let prefix = format!("{}.", LOG_FILE_BASE);

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // pokemon-collection.jsonl.YYYY-MM-DD 形式のみ対象
        if let Some(date_part) = filename.strip_prefix(&prefix) {
            if date_part < cutoff_str.as_str() {
                let _ = fs::remove_file(&path);
            }
        }
    }
    Ok(())
}

/// ログレベルフィルタ（POKEMON_COLLECTION_LOG_LEVEL > RUST_LOG > info）
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_env(ALT_LEVEL_ENV))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn configure_logger() -> io::Result<WorkerGuard> {
    let log_directory = log_dir()?;
    fs::create_dir_all(&log_directory)?;
    cleanup_old_logs(&log_directory, get_retention_days())?;

    let log_path = log_file_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    let (file_writer, file_guard) = non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer())
        .try_init()
        .map_err(Error::other)?;

    tracing::info!("Server logs initialized: {}", log_path.display());
    Ok(file_guard)
}

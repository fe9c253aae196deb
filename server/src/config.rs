//! Configuration for the NeuroTrack server
//!
//! Every value has a compile-time default and can be overridden at runtime
//! via a dedicated environment variable. Command-line flags in `main.rs` take
//! precedence over both.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONFIG_DIR: &str = ".config/neurotrack/data";
const DEV_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "neurotrack.db";

/// Default bind address for the HTTP listener.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default size of the SQLite connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

fn env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get the data directory for persistence.
///
/// Priority:
/// 1. NEUROTRACK_DATA_DIR env variable if set
/// 2. $HOME/.config/neurotrack/data if HOME is set
/// 3. ./data as fallback
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env("NEUROTRACK_DATA_DIR"), env("HOME"))
}

fn data_dir_from(dir: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(dir) = dir {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return PathBuf::from(home).join(DEFAULT_CONFIG_DIR);
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Get the SQLite database file.
///
/// Priority:
/// 1. NEUROTRACK_DATABASE_PATH env variable if set
/// 2. `neurotrack.db` inside [`get_data_dir`]
pub fn get_database_path() -> PathBuf {
    env("NEUROTRACK_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| get_data_dir().join(DATABASE_FILE))
}

/// Get the address the HTTP listener binds to.
pub fn get_bind_addr() -> String {
    env("NEUROTRACK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

/// Get the connection pool size.
///
/// Falls back to the default if NEUROTRACK_MAX_CONNECTIONS cannot be parsed
/// as a positive integer.
pub fn get_max_connections() -> u32 {
    max_connections_from(env("NEUROTRACK_MAX_CONNECTIONS"))
}

fn max_connections_from(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok())
        .filter(|n: &u32| *n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Default time a request waits for a pooled connection, in seconds.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Get how long a request may wait for a free pooled connection.
///
/// Falls back to the default if NEUROTRACK_ACQUIRE_TIMEOUT_SECS cannot be
/// parsed as a positive integer.
pub fn get_acquire_timeout() -> Duration {
    acquire_timeout_from(env("NEUROTRACK_ACQUIRE_TIMEOUT_SECS"))
}

fn acquire_timeout_from(raw: Option<String>) -> Duration {
    let secs = raw
        .and_then(|v| v.trim().parse().ok())
        .filter(|n: &u64| *n > 0)
        .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Get the directory for rolling log files, if file logging is enabled.
/// Unset means logs go to stdout.
pub fn get_log_dir() -> Option<PathBuf> {
    env("NEUROTRACK_LOG_DIR").map(PathBuf::from)
}

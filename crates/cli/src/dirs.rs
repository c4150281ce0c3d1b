//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/runtime-options/logs`
/// - Linux: `~/.cache/runtime-options/logs` (or `$XDG_CACHE_HOME/runtime-options/logs`)
/// - Windows: `%LOCALAPPDATA%\runtime-options\logs`
/// - Fallback: `/tmp/runtime-options/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "runtime-options")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/runtime-options"));

    base_dir.join("logs")
}

// tabrecall platform abstraction
// Provides the platform-specific data directory used for the default store
// file location.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for tabrecall.
///
/// - **Linux**: `~/.local/share/tabrecall` (or `$XDG_DATA_HOME/tabrecall`)
/// - **macOS**: `~/Library/Application Support/tabrecall`
/// - **Windows**: `%APPDATA%/tabrecall`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

// tabrecall platform paths for Linux
// Data: ~/.local/share/tabrecall

use std::env;
use std::path::PathBuf;

/// Returns the data directory for tabrecall on Linux.
/// Uses `$XDG_DATA_HOME/tabrecall` if set, otherwise `~/.local/share/tabrecall`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("tabrecall")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("tabrecall")
    }
}

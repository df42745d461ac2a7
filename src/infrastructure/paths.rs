//! Path handling for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Sandbox mount point of the host directory Zellij was started from.
const HOST_ROOT: &str = "/host";

/// Directory for the plugin's trace files.
///
/// Resolves to `~/.local/share/zellij/shelfscout` on the host when Zellij is
/// started from the home directory.
///
/// ```rust
/// use shelfscout::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/shelfscout"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/shelfscout")
}

/// Maps a `~`-prefixed path to its sandbox location.
///
/// ```rust
/// use shelfscout::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

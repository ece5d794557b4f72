// src/infra/paths.rs — Config file lookup
//
// CUTCHAIN_HOME overrides everything: when set, the config lives at
// $CUTCHAIN_HOME/config.toml. Otherwise a `cutchain.toml` in the working
// directory is preferred over the per-user ~/.cutchain/config.toml.

use std::path::PathBuf;

/// Name of the per-analysis config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "cutchain.toml";

/// Returns the CUTCHAIN_HOME override, if set.
fn cutchain_home() -> Option<PathBuf> {
    std::env::var_os("CUTCHAIN_HOME").map(PathBuf::from)
}

/// Home directory, if the platform can tell us one.
pub fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

/// Per-user configuration directory: $CUTCHAIN_HOME/ or ~/.cutchain/
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = cutchain_home() {
        return Some(home);
    }
    dirs_home().map(|h| h.join(".cutchain"))
}

/// Candidate config files, most specific first.
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = cutchain_home() {
        candidates.push(home.join("config.toml"));
        return candidates;
    }
    candidates.push(PathBuf::from(LOCAL_CONFIG_FILE));
    if let Some(dir) = config_dir() {
        candidates.push(dir.join("config.toml"));
    }
    candidates
}

/// First candidate that exists on disk.
pub fn config_file_path() -> Option<PathBuf> {
    config_candidates().into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_not_empty() {
        assert!(!config_candidates().is_empty());
    }

    #[test]
    fn test_candidates_end_in_toml() {
        for c in config_candidates() {
            assert_eq!(c.extension().and_then(|e| e.to_str()), Some("toml"));
        }
    }
}

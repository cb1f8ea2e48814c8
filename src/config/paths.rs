//! Path resolution for quickadd configuration.
//!
//! Data lives in `~/.quickadd/` unless `QUICKADD_HOME` points elsewhere:
//! - `config.yaml` - Main configuration file, including known labels

use std::path::PathBuf;

use crate::error::QuickAddError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "QUICKADD_HOME";

/// Paths to quickadd configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quickadd/`
    pub root: PathBuf,
    /// Config file: `~/.quickadd/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on `QUICKADD_HOME` or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither directory can be determined.
    pub fn new() -> Result<Self, QuickAddError> {
        if let Ok(root) = std::env::var(HOME_ENV) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            QuickAddError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quickadd")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-quickadd");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
    }
}

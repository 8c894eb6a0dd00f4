//! `.env` file loading
//!
//! Values already present in the process environment are never replaced,
//! so a real environment variable always wins over the file.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ENV_FILE: &str = ".env";

/// The settings file could not be applied. Startup continues with whatever
/// the environment already holds.
#[derive(Debug, Error)]
#[error("could not load {path}: {source}")]
pub struct ConfigLoadWarning {
    pub path: String,
    #[source]
    pub source: dotenvy::Error,
}

pub fn load_env_file(path: impl AsRef<Path>) -> Result<PathBuf, ConfigLoadWarning> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|source| ConfigLoadWarning {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!("Loaded environment from {}", path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_a_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");

        let warning = load_env_file(&path).unwrap_err();
        assert!(warning.to_string().contains(".env"));
        assert!(warning.source.not_found());
    }

    #[test]
    fn test_loads_values_into_environment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GRAMMAR_CHECKER_TEST_LOADED=from-file\n").unwrap();

        load_env_file(&path).unwrap();

        assert_eq!(env::var("GRAMMAR_CHECKER_TEST_LOADED").unwrap(), "from-file");
    }

    #[test]
    fn test_process_environment_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "GRAMMAR_CHECKER_TEST_PRESET=from-file\n").unwrap();
        env::set_var("GRAMMAR_CHECKER_TEST_PRESET", "from-process");

        load_env_file(&path).unwrap();

        assert_eq!(
            env::var("GRAMMAR_CHECKER_TEST_PRESET").unwrap(),
            "from-process"
        );
    }
}

//! Blacklist loading module
//!
//! Reads newline-separated word lists from disk for use with the
//! `black_list`, `not_in` and `cant_contain` rules. The loader returns a
//! plain list and keeps no global state; the caller owns the data and
//! feeds it into a policy.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var("PWD_POLICY_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

/// Loads the blacklist from the path returned by [`blacklist_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File contains no entries
///
/// # Example
///
/// ```rust,no_run
/// let entries = pwd_policy::load_blacklist()?;
/// let policy = pwd_policy::PasswordPolicy::builder()
///     .black_list(entries)
///     .build();
/// # Ok::<(), pwd_policy::BlacklistError>(())
/// ```
pub fn load_blacklist() -> Result<Vec<String>, BlacklistError> {
    load_blacklist_from_path(blacklist_path())
}

/// Loads a blacklist from a specific file path.
///
/// Lines are trimmed and blank lines skipped. Entries are kept verbatim
/// otherwise, since the exact-match rules are case-sensitive.
pub fn load_blacklist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Vec<String>, BlacklistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load FAILED: FileNotFound {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let entries: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if entries.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load FAILED: Empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist loaded: {} entries from {:?}", entries.len(), path);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn setup_with_tempfile(entries: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for entry in entries {
            writeln!(temp_file, "{}", entry).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_blacklist_path_default() {
        remove_env("PWD_POLICY_BLACKLIST_PATH");

        let path = blacklist_path();
        assert_eq!(path, PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env("PWD_POLICY_BLACKLIST_PATH", custom_path);

        let path = blacklist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_POLICY_BLACKLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_load_blacklist_file_not_found() {
        set_env("PWD_POLICY_BLACKLIST_PATH", "/nonexistent/path/blacklist.txt");

        let result = load_blacklist();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));

        remove_env("PWD_POLICY_BLACKLIST_PATH");
    }

    #[test]
    fn test_load_blacklist_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "\n  \n").expect("Failed to write");

        let result = load_blacklist_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_load_blacklist_success() {
        let temp_file = setup_with_tempfile(&["password123", "qwerty"]);

        let entries = load_blacklist_from_path(temp_file.path()).expect("load failed");
        assert_eq!(entries, vec!["password123", "qwerty"]);
    }

    #[test]
    fn test_load_blacklist_preserves_case() {
        let temp_file = setup_with_tempfile(&["Hunter2", "  padded  "]);

        let entries = load_blacklist_from_path(temp_file.path()).expect("load failed");
        assert_eq!(entries, vec!["Hunter2", "padded"]);
    }
}

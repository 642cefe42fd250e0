//! Where SpendSmart keeps its files
//!
//! ```text
//! <base>/config.json
//! <base>/audit.log
//! <base>/data/categories.json
//! <base>/data/expenses.json
//! ```
//!
//! `<base>` is `$SPENDSMART_DATA_DIR` when set, otherwise `spendsmart/` under
//! the platform config directory (`$XDG_CONFIG_HOME`, `~/.config` or
//! `%APPDATA%`).

use std::path::{Path, PathBuf};

use crate::error::{SpendError, SpendResult};
use crate::models::RecordKind;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPENDSMART_DATA_DIR";

const APP_DIR: &str = "spendsmart";
const DATA_DIR: &str = "data";
const SETTINGS_FILE: &str = "config.json";
const AUDIT_FILE: &str = "audit.log";

/// The resolved file layout of one SpendSmart installation
#[derive(Debug, Clone)]
pub struct SpendPaths {
    base_dir: PathBuf,
}

impl SpendPaths {
    /// Resolve the base directory from the process environment
    pub fn new() -> SpendResult<Self> {
        Self::from_env(|name| std::env::var(name).ok())
    }

    fn from_env(lookup: impl Fn(&str) -> Option<String>) -> SpendResult<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(dir) = var(DATA_DIR_ENV) {
            return Ok(Self::with_base_dir(dir));
        }

        let config_root = if cfg!(windows) {
            var("APPDATA").map(PathBuf::from)
        } else {
            var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|| var("HOME").map(|home| Path::new(&home).join(".config")))
        };

        config_root
            .map(|root| Self::with_base_dir(root.join(APP_DIR)))
            .ok_or_else(|| {
                SpendError::Config(format!(
                    "No config directory found; set {} to choose one",
                    DATA_DIR_ENV
                ))
            })
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join(AUDIT_FILE)
    }

    /// JSON file holding every record of `kind`
    pub fn records_file(&self, kind: RecordKind) -> PathBuf {
        self.data_dir().join(format!("{}.json", kind.plural()))
    }

    /// Create `<base>/data/` and its parents
    pub fn ensure_directories(&self) -> SpendResult<()> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir).map_err(|e| SpendError::io("create", data_dir, e))
    }

    /// `spendsmart init` has run once it has written the settings file
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn resolve(vars: &[(&str, &str)]) -> SpendResult<SpendPaths> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SpendPaths::from_env(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_layout_under_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let paths = SpendPaths::with_base_dir(base);

        assert_eq!(paths.settings_file(), base.join("config.json"));
        assert_eq!(paths.audit_log(), base.join("audit.log"));
        assert_eq!(
            paths.records_file(RecordKind::Category),
            base.join("data").join("categories.json")
        );
        assert_eq!(
            paths.records_file(RecordKind::Expense),
            base.join("data").join("expenses.json")
        );
    }

    #[test]
    fn test_ensure_directories_creates_nested_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().join("a").join("b"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().is_dir());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_override_wins_over_platform_dirs() {
        let paths = resolve(&[(DATA_DIR_ENV, "/srv/budget"), ("HOME", "/home/asha")]).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/srv/budget"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_blank_override_is_ignored() {
        let paths = resolve(&[(DATA_DIR_ENV, "  "), ("HOME", "/home/asha")]).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/home/asha/.config/spendsmart"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_xdg_then_home() {
        let paths = resolve(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/asha")]).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/xdg/spendsmart"));

        let paths = resolve(&[("HOME", "/home/asha")]).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/home/asha/.config/spendsmart"));
    }

    #[test]
    fn test_no_directory_is_config_error() {
        let err = resolve(&[]).unwrap_err();
        assert!(matches!(err, SpendError::Config(msg) if msg.contains(DATA_DIR_ENV)));
    }
}

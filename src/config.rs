/// Documentation-run configuration.
///
/// This module handles loading `phpscribe.toml` from a workspace root and
/// deriving a default main-project prefix from the workspace's
/// `composer.json` PSR-4 autoload section when none is configured.
///
/// # Main-project prefix
///
/// The `main` option is a fully-qualified name prefix (e.g. `"App\"`).
/// Elements whose name starts with it count as first-party; everything
/// else is vendor code the renderer may group separately. An empty or
/// missing prefix disables the filter, so every element is "main".
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Workspace config file name.
const CONFIG_FILE: &str = "phpscribe.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Main-project name prefix; `None` or empty disables the filter.
    pub main: Option<String>,
    /// Whether `@internal`-annotated elements are documented.
    ///
    /// Never overrides the hard exclusion of internal *definitions*
    /// (built-ins with no parsed source).
    pub internal_documented: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration for a workspace root, degrading to defaults.
    ///
    /// Reads `phpscribe.toml` if present (an unreadable file is logged and
    /// ignored). When no main prefix ends up configured, one is derived
    /// from the workspace's `composer.json` PSR-4 mappings.
    pub fn from_workspace(root: &Path) -> Config {
        let path = root.join(CONFIG_FILE);
        let mut config = if path.exists() {
            match Config::from_path(&path) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("ignoring unreadable {}: {}", CONFIG_FILE, err);
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        if config.main.as_deref().unwrap_or("").is_empty() {
            config.main = main_prefix_from_composer(root);
        }

        config
    }

    /// The configured main prefix, with "empty" normalised to `None`.
    pub(crate) fn main_prefix(&self) -> Option<&str> {
        self.main.as_deref().filter(|main| !main.is_empty())
    }
}

/// Derive a main-project prefix from `composer.json`.
///
/// Takes the shortest prefix declared in the `autoload` PSR-4 section
/// (the broadest first-party namespace). `autoload-dev` is ignored —
/// test namespaces are not the main project. Returns `None` if the file
/// is missing, unreadable, or declares no usable prefix.
fn main_prefix_from_composer(root: &Path) -> Option<String> {
    let content = fs::read_to_string(root.join("composer.json")).ok()?;
    let json: serde_json::Value = serde_json::from_str(&content).ok()?;

    let psr4 = json.get("autoload")?.get("psr-4")?.as_object()?;

    let prefix = psr4
        .keys()
        .filter(|prefix| !prefix.is_empty())
        .min_by_key(|prefix| prefix.len())?;

    // Normalise the prefix: ensure it ends with `\`
    let normalised = if prefix.ends_with('\\') {
        prefix.clone()
    } else {
        format!("{}\\", prefix)
    };

    tracing::trace!("main prefix from composer.json: {}", normalised);
    Some(normalised)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_keys() {
        let config: Config =
            toml::from_str("main = \"App\\\\\"\ninternal-documented = true").unwrap();
        assert_eq!(config.main.as_deref(), Some("App\\"));
        assert!(config.internal_documented);
    }

    #[test]
    fn missing_keys_default() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.main.is_none());
        assert!(!config.internal_documented);
    }

    #[test]
    fn workspace_without_config_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_workspace(dir.path());
        assert!(config.main.is_none());
        assert!(!config.internal_documented);
    }

    #[test]
    fn workspace_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("phpscribe.toml"), "main = \"Vendor\\\\Lib\\\\\"").unwrap();
        let config = Config::from_workspace(dir.path());
        assert_eq!(config.main.as_deref(), Some("Vendor\\Lib\\"));
    }

    #[test]
    fn main_derived_from_composer_psr4() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("composer.json"),
            r#"{"autoload": {"psr-4": {"App\\Deep\\": "src/Deep/", "App\\": "src/"}}}"#,
        )
        .unwrap();
        let config = Config::from_workspace(dir.path());
        assert_eq!(config.main.as_deref(), Some("App\\"));
    }

    #[test]
    fn composer_prefix_gets_trailing_backslash() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("composer.json"),
            r#"{"autoload": {"psr-4": {"App": "src/"}}}"#,
        )
        .unwrap();
        let config = Config::from_workspace(dir.path());
        assert_eq!(config.main.as_deref(), Some("App\\"));
    }

    #[test]
    fn configured_main_beats_composer() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("phpscribe.toml"), "main = \"Own\\\\\"").unwrap();
        fs::write(
            dir.path().join("composer.json"),
            r#"{"autoload": {"psr-4": {"App\\": "src/"}}}"#,
        )
        .unwrap();
        let config = Config::from_workspace(dir.path());
        assert_eq!(config.main.as_deref(), Some("Own\\"));
    }

    #[test]
    fn malformed_config_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("phpscribe.toml"), "main = [not toml").unwrap();
        let config = Config::from_workspace(dir.path());
        assert!(config.main.is_none());
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = Config::from_path(Path::new("/nonexistent/phpscribe.toml"));
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }

    #[test]
    fn empty_main_prefix_is_disabled() {
        let config = Config {
            main: Some(String::new()),
            internal_documented: false,
        };
        assert!(config.main_prefix().is_none());
    }
}

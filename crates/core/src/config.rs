//! Configuration management for the promptctl CLI.
//!
//! This module handles loading and merging configuration from multiple sources:
//! - Defaults (registry under `$HOME/.promptctl/registry`)
//! - Config file (`$HOME/.promptctl/config.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! The resulting [`AppConfig`] is built once at startup and passed explicitly
//! to every command.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Directory under the home directory that holds promptctl state.
pub const APP_DIR: &str = ".promptctl";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory of the prompt registry (one subdirectory per namespace)
    pub registry: PathBuf,

    /// Config file path
    pub config_file: PathBuf,

    /// Git remote URL for the registry
    pub remote: Option<String>,

    /// Default author recorded in new prompts
    pub author: Option<String>,

    /// Editor command override (falls back to $VISUAL / $EDITOR)
    pub editor: Option<String>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    registry: Option<RegistrySection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegistrySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remote: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LoggingSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let app_dir = dirs::home_dir()
            .map(|home| home.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(APP_DIR));

        Self {
            registry: app_dir.join("registry"),
            config_file: app_dir.join("config.yaml"),
            remote: None,
            author: None,
            editor: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and environment variables.
    ///
    /// Environment variables:
    /// - `PROMPTCTL_CONFIG`: Path to config file
    /// - `PROMPTCTL_REGISTRY`: Override registry path
    /// - `PROMPTCTL_REMOTE`: Git remote URL
    /// - `PROMPTCTL_AUTHOR`: Default author
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// A missing config file is fine; an unreadable or invalid one is an error.
    /// The registry directory is not required to exist.
    ///
    /// # Example
    /// ```no_run
    /// use promptctl_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Registry: {:?}", config.registry);
    /// ```
    pub fn load(config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file.or_else(|| env_path("PROMPTCTL_CONFIG")) {
            config.config_file = path;
        }

        if config.config_file.exists() {
            let path = config.config_file.clone();
            config.merge_yaml(&path)?;
        }

        // Environment variables override YAML config
        if let Some(registry) = env_path("PROMPTCTL_REGISTRY") {
            config.registry = registry;
        }

        if let Ok(remote) = std::env::var("PROMPTCTL_REMOTE") {
            config.remote = Some(remote);
        }

        if let Ok(author) = std::env::var("PROMPTCTL_AUTHOR") {
            config.author = Some(author);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(registry) = file.registry {
            if let Some(registry_path) = registry.path {
                self.registry = expand_home(&registry_path);
            }
            if registry.remote.is_some() {
                self.remote = registry.remote;
            }
        }

        if file.author.is_some() {
            self.author = file.author;
        }

        if file.editor.is_some() {
            self.editor = file.editor;
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);
        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over the config file and environment.
    pub fn with_overrides(
        mut self,
        registry: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(registry) = registry {
            self.registry = registry;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Persist registry location, remote, author and editor to the config file.
    pub fn save(&self) -> AppResult<()> {
        let file = ConfigFile {
            registry: Some(RegistrySection {
                path: Some(self.registry.display().to_string()),
                remote: self.remote.clone(),
            }),
            author: self.author.clone(),
            editor: self.editor.clone(),
            logging: None,
        };

        if let Some(parent) = self.config_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!("Failed to create config directory {:?}: {}", parent, e))
            })?;
        }

        let yaml = serde_yaml::to_string(&file)?;
        std::fs::write(&self.config_file, yaml).map_err(|e| {
            AppError::Config(format!(
                "Failed to write config file {:?}: {}",
                self.config_file, e
            ))
        })?;

        tracing::debug!("Saved config file {:?}", self.config_file);
        Ok(())
    }

    /// Author for new prompts.
    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var(var).ok().filter(|v| !v.is_empty()).map(|v| expand_home(&v))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.registry.ends_with("registry"));
        assert!(config.config_file.ends_with("config.yaml"));
        assert!(!config.verbose);
        assert!(!config.no_color);
        assert_eq!(config.author_or_default(), "Unknown");
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden =
            config.with_overrides(Some(PathBuf::from("/tmp/prompts")), None, true, false);

        assert_eq!(overridden.registry, PathBuf::from("/tmp/prompts"));
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_verbose_keeps_explicit_level() {
        let overridden =
            AppConfig::default().with_overrides(None, Some("trace".to_string()), true, false);
        assert_eq!(overridden.log_level, Some("trace".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            r#"
registry:
  path: /srv/prompts
  remote: git@example.com:team/prompts.git
author: Ada
editor: "code -w"
logging:
  level: info
  color: false
"#,
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.merge_yaml(&path).unwrap();

        assert_eq!(config.registry, PathBuf::from("/srv/prompts"));
        assert_eq!(
            config.remote.as_deref(),
            Some("git@example.com:team/prompts.git")
        );
        assert_eq!(config.author_or_default(), "Ada");
        assert_eq!(config.editor.as_deref(), Some("code -w"));
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.no_color);
    }

    #[test]
    fn test_merge_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "registry: [unterminated").unwrap();

        let mut config = AppConfig::default();
        assert!(matches!(config.merge_yaml(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn test_save_then_merge() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig {
            registry: temp_dir.path().join("registry"),
            config_file: temp_dir.path().join("nested/config.yaml"),
            remote: Some("https://example.com/prompts.git".to_string()),
            author: Some("Grace".to_string()),
            ..AppConfig::default()
        };
        config.save().unwrap();

        let mut reloaded = AppConfig::default();
        reloaded.merge_yaml(&config.config_file).unwrap();
        assert_eq!(reloaded.registry, config.registry);
        assert_eq!(reloaded.remote, config.remote);
        assert_eq!(reloaded.author, config.author);
        assert_eq!(reloaded.editor, None);
    }
}

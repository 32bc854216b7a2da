//! Configuration loading.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from page2prompt.toml)
//! - `~/.config/page2prompt/page2prompt.toml`
//! - `./page2prompt.toml`
//! - `PAGE2PROMPT__SECTION__KEY` environment variables

use config::{Config, Environment, File, FileFormat};
use page2prompt_error::{ConfigError, Page2PromptError, Page2PromptResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../page2prompt.toml");

/// Completion service settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GatewaySettings {
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Default sampling temperature
    pub temperature: f32,
    /// Default token limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Seconds to wait for a single completion
    pub timeout_secs: u64,
}

impl GatewaySettings {
    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: None,
            timeout_secs: 120,
        }
    }
}

/// Where tables and projects live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding every table
    pub data_dir: PathBuf,
    /// Subject table file name
    pub subjects_file: String,
    /// Style table file name
    pub styles_file: String,
    /// Director style table file name
    pub director_styles_file: String,
    /// Project snapshot directory, relative to `data_dir`
    pub projects_dir: String,
}

impl StorageSettings {
    /// Path of the subject table.
    pub fn subjects_path(&self) -> PathBuf {
        self.data_dir.join(&self.subjects_file)
    }

    /// Path of the style table.
    pub fn styles_path(&self) -> PathBuf {
        self.data_dir.join(&self.styles_file)
    }

    /// Path of the director style table.
    pub fn director_styles_path(&self) -> PathBuf {
        self.data_dir.join(&self.director_styles_file)
    }

    /// Directory of project snapshots.
    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(&self.projects_dir)
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            subjects_file: "subjects.csv".to_string(),
            styles_file: "styles.csv".to_string(),
            director_styles_file: "director_styles.csv".to_string(),
            projects_dir: "projects".to_string(),
        }
    }
}

/// Top-level Page2Prompt configuration.
///
/// # Example
///
/// ```no_run
/// use page2prompt::Page2PromptConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Page2PromptConfig::load()?;
/// println!("Model: {}", config.gateway.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Page2PromptConfig {
    /// Completion service settings
    #[serde(default)]
    pub gateway: GatewaySettings,
    /// Storage locations
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Page2PromptConfig {
    /// Load configuration from a specific file layered over the bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Page2PromptResult<Self> {
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                Page2PromptError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;
        deserialize(config)
    }

    /// Load configuration with precedence: environment > current dir >
    /// home config dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    #[instrument]
    pub fn load() -> Page2PromptResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > config dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("page2prompt").join("page2prompt.toml");
            builder = builder.add_source(File::from(user_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("page2prompt").required(false))
            .add_source(
                Environment::with_prefix("PAGE2PROMPT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().map_err(|e| {
            Page2PromptError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?;
        deserialize(config)
    }
}

fn deserialize(config: Config) -> Page2PromptResult<Page2PromptConfig> {
    config.try_deserialize().map_err(|e| {
        Page2PromptError::from(ConfigError::new(format!(
            "Failed to parse configuration: {}",
            e
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_default_impl() {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap();
        let parsed = deserialize(config).unwrap();
        assert_eq!(parsed, Page2PromptConfig::default());
    }

    #[test]
    fn test_storage_paths_join_data_dir() {
        let storage = StorageSettings {
            data_dir: PathBuf::from("/tmp/p2p"),
            ..Default::default()
        };
        assert_eq!(storage.subjects_path(), PathBuf::from("/tmp/p2p/subjects.csv"));
        assert_eq!(storage.projects_path(), PathBuf::from("/tmp/p2p/projects"));
    }
}

//! Facilitator configuration.
//!
//! Read from `$FACILITATOR_CONFIG`, else `~/.facilitator/config.toml`. Every
//! key is optional and a missing file means defaults:
//!
//! ```toml
//! [guards]
//! max_clarifications = 2
//! max_task_support = 1
//!
//! [classifier]
//! emotional_min_chars = 100
//! task_completion_min_chars = 25
//!
//! [validator]
//! banned_phrases = ["deep dive", "re:\\bjourney\\b"]
//!
//! [[lexicon]]
//! language = "arabic"
//! skip_directives = ["تخطى"]
//! ```
//!
//! `${VAR}` inside string values is replaced from the environment.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use facilitator_types::{
    ClassifierThresholds, DEFAULT_EMOTIONAL_MIN_CHARS, DEFAULT_MAX_CLARIFICATIONS,
    DEFAULT_MAX_TASK_SUPPORT, DEFAULT_TASK_COMPLETION_MIN_CHARS, FacilitatorSettings, GuardLimits,
    Language, LexiconSource, SettingsError,
};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "FACILITATOR_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct FacilitatorConfig {
    pub guards: Option<GuardsConfig>,
    pub classifier: Option<ClassifierConfig>,
    pub validator: Option<ValidatorConfig>,
    /// `[[lexicon]]` bundles.
    #[serde(default)]
    pub lexicon: Vec<LexiconConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuardsConfig {
    pub max_clarifications: Option<u32>,
    pub max_task_support: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClassifierConfig {
    pub emotional_min_chars: Option<usize>,
    pub task_completion_min_chars: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ValidatorConfig {
    /// Appended to every language's base list. `re:` entries are regexes.
    #[serde(default)]
    pub banned_phrases: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LexiconConfig {
    pub language: Option<String>,
    #[serde(flatten)]
    pub lists: LexiconSource,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: SettingsError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

/// Replace `${VAR}` with the variable's value; unset variables become empty.
/// An unclosed `${` is kept as written.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let var = &after[..close];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

impl FacilitatorConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file; using defaults");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded facilitator config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Validate and resolve into engine settings.
    pub fn resolve(&self) -> Result<FacilitatorSettings, SettingsError> {
        let guards = self.guards.as_ref();
        let guards = GuardLimits {
            max_clarifications: guards
                .and_then(|g| g.max_clarifications)
                .unwrap_or(DEFAULT_MAX_CLARIFICATIONS),
            max_task_support: guards
                .and_then(|g| g.max_task_support)
                .unwrap_or(DEFAULT_MAX_TASK_SUPPORT),
        };

        let classifier = self.classifier.as_ref();
        let thresholds = ClassifierThresholds::new(
            classifier
                .and_then(|c| c.emotional_min_chars)
                .unwrap_or(DEFAULT_EMOTIONAL_MIN_CHARS),
            classifier
                .and_then(|c| c.task_completion_min_chars)
                .unwrap_or(DEFAULT_TASK_COMPLETION_MIN_CHARS),
        )?;

        let extra_banned_phrases = self
            .validator
            .as_ref()
            .map(|v| v.banned_phrases.iter().map(|p| expand_env_vars(p)).collect())
            .unwrap_or_default();

        let lexicons = self
            .lexicon
            .iter()
            .enumerate()
            .map(|(index, bundle)| bundle.resolve(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FacilitatorSettings {
            guards,
            thresholds,
            extra_banned_phrases,
            lexicons,
        })
    }
}

impl LexiconConfig {
    fn resolve(&self, index: usize) -> Result<LexiconSource, SettingsError> {
        let tag = self
            .language
            .as_deref()
            .map(expand_env_vars)
            .filter(|tag| !tag.trim().is_empty())
            .ok_or(SettingsError::UnnamedLexicon { index })?;

        let mut source = self.lists.clone();
        source.language = Language::new(&tag);
        for entry in source.entries_mut() {
            *entry = expand_env_vars(entry);
        }
        Ok(source)
    }
}

/// `$FACILITATOR_CONFIG` when set, else `~/.facilitator/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".facilitator").join("config.toml"))
}

/// Load and resolve settings from `path`; defaults when the file is absent.
pub fn load_settings_from(path: &Path) -> Result<FacilitatorSettings, ConfigError> {
    let Some(config) = FacilitatorConfig::load_from(path)? else {
        return Ok(FacilitatorSettings::default());
    };
    config.resolve().map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and resolve settings from the default location.
pub fn load_settings() -> Result<FacilitatorSettings, ConfigError> {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(FacilitatorSettings::default()),
    }
}

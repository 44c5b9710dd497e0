//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/exptree/exptree.toml`
//! 3. Explicit config: file given with `--config`
//! 4. Environment variables: `EXPTREE_*` prefix

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Sample expression used when the user does not type one.
pub const SAMPLE_EXPRESSION: &str = "+-+7*/935/82*/625";

/// Unified configuration for exptree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Reject expressions that leave operands without an operator
    pub strict: bool,
    /// Expression evaluated when none is given
    pub sample_expression: String,
    /// Fixed number of decimals for results (default: shortest form)
    pub precision: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: false,
            sample_expression: SAMPLE_EXPRESSION.to_string(),
            precision: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub strict: Option<bool>,
    pub sample_expression: Option<String>,
    pub precision: Option<usize>,
}

/// Get the XDG config directory for exptree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "exptree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("exptree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins field by field where it is specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            strict: overlay.strict.unwrap_or(self.strict),
            sample_expression: overlay
                .sample_expression
                .clone()
                .unwrap_or_else(|| self.sample_expression.clone()),
            precision: overlay.precision.or(self.precision),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::load_files(current, explicit)?;
        Self::apply_env_overrides(current, None)
    }

    /// Merge an explicit config file onto `base`.
    pub fn load_files(base: Self, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        match explicit {
            Some(path) if !path.exists() => Err(ApplicationError::Config {
                message: format!("config file not found: {}", path.display()),
            }),
            Some(path) => Ok(base.merge_with(&load_raw_settings(path)?)),
            None => Ok(base),
        }
    }

    /// Apply EXPTREE_* environment variables as explicit overrides.
    ///
    /// `source` replaces the process environment when given.
    pub fn apply_env_overrides(
        mut settings: Self,
        source: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("EXPTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        match config.get_bool("strict") {
            Ok(val) => settings.strict = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_string("sample_expression") {
            Ok(val) => settings.sample_expression = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_int("precision") {
            Ok(val) => {
                settings.precision = Some(usize::try_from(val).map_err(|_| {
                    ApplicationError::Config {
                        message: format!("precision must not be negative: {val}"),
                    }
                })?);
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Serialize the settings as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {e}"),
        })
    }

    /// Commented template written by `config init`.
    pub fn template() -> String {
        format!(
            r#"# exptree configuration

# Reject expressions such as "12" that leave operands without an operator
strict = false

# Expression evaluated when none is given
sample_expression = "{SAMPLE_EXPRESSION}"

# Fixed number of decimals for results
# precision = 2
"#
        )
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.strict);
        assert_eq!(settings.sample_expression, "+-+7*/935/82*/625");
        assert_eq!(settings.precision, None);
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        let merged = Settings::default().merge_with(&raw);
        assert_eq!(merged, Settings::default());
    }

    #[test]
    fn test_merge_only_overrides_specified_fields() {
        let raw = RawSettings {
            strict: Some(true),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&raw);
        assert!(merged.strict);
        assert_eq!(merged.sample_expression, SAMPLE_EXPRESSION);
    }
}

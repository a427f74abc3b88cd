// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from gmc.toml.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main configuration structure for gmc.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GmcConfig {
    /// Validation limits.
    pub rules: RulesConfig,

    /// Formatting options.
    pub format: FormatConfig,

    /// Repository selection.
    pub repository: RepositoryConfig,
}

impl GmcConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject values that would make validation or wrapping meaningless.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("rules.max_title_length", self.rules.max_title_length),
            ("rules.max_line_length", self.rules.max_line_length),
            ("format.wrap_width", self.format.wrap_width),
        ];

        for (key, value) in checks {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be greater than zero".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// Validation limits. Exceeding them produces warnings, never issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,

    /// Maximum length of body lines in characters.
    pub max_line_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_title_length: 50,
            max_line_length: 72,
        }
    }
}

/// Formatting options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Width used when wrapping descriptions.
    pub wrap_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            wrap_width: crate::commit::DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Repository selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Repository used when a tool call gives no `repo_path`.
    pub path: Option<PathBuf>,
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Navigator configuration loaded from TOML.
//!
//! ```toml
//! [navigator]
//! overrides = "up, down, sideways"
//! mapper_url = "http://www.feesher.com/louvre_mapper.php?mapstring="
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Where exported map codes are sent by default.
pub const DEFAULT_MAPPER_URL: &str = "http://www.feesher.com/louvre_mapper.php?mapstring=";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings that shape how the navigator routes and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Comma-separated override directives, one per step.
    pub overrides: String,
    /// Mapper link prefix; the map code is appended to it.
    pub mapper_url: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            overrides: String::new(),
            mapper_url: DEFAULT_MAPPER_URL.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    navigator: NavigatorConfig,
}

impl NavigatorConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        Ok(file.navigator)
    }
}

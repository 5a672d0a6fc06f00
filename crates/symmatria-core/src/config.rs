//! Application configuration (`config.toml`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{Result, SymmatriaError};

const APP_DIR: &str = "symmatria";
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigRoot {
    pub session: SessionConfig,
    pub contemplation: ContemplationConfig,
    pub export: ExportConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Artificial processing delay before a reply arrives
    pub response_delay_ms: u64,
    pub default_domain: Domain,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 2000,
            default_domain: Domain::default(),
        }
    }
}

impl SessionConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContemplationConfig {
    pub reflection_interval_secs: u64,
    pub structure_interval_secs: u64,
    pub thinking_pulse_ms: u64,
}

impl Default for ContemplationConfig {
    fn default() -> Self {
        Self {
            reflection_interval_secs: 8,
            structure_interval_secs: 15,
            thinking_pulse_ms: 1000,
        }
    }
}

impl ContemplationConfig {
    pub fn reflection_interval(&self) -> Duration {
        Duration::from_secs(self.reflection_interval_secs)
    }

    pub fn structure_interval(&self) -> Duration {
        Duration::from_secs(self.structure_interval_secs)
    }

    pub fn thinking_pulse(&self) -> Duration {
        Duration::from_millis(self.thinking_pulse_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving `bibliography.bib` and `theorem.tex`
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl ConfigRoot {
    /// Default location: `<config dir>/symmatria/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ConfigRoot = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Loads the file at [`ConfigRoot::default_path`] if there is one.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.contemplation.reflection_interval_secs == 0
            || self.contemplation.structure_interval_secs == 0
        {
            return Err(SymmatriaError::config(
                "contemplation intervals must be at least one second",
            ));
        }
        Ok(())
    }
}

//! TOML-backed configuration for the RC5 cipher parameters.

use anyhow::Context;
use log::{debug, info, trace, warn};
use rc5_cipher::{CipherContext, Parameters};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

/// Cipher parameters as read from a configuration file.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CipherSettings {
    /// Word size `w` in bits: 16, 32 or 64.
    pub word_size: u32,

    /// Round count `r`.
    pub rounds: u32,

    /// Key length `b` in bytes.
    pub key_length: usize,
}

impl CipherSettings {
    /// Default file name used when no explicit path is given.
    pub const PATH: &'static str = "Rc5Settings.toml";

    /// Tries to load the settings, or creates the file with default settings if it doesn't exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            info!(
                "Configuration file '{}' found, attempting to load.",
                path.display()
            );

            Self::load(path)
        } else {
            warn!(
                "Configuration file '{}' not found. Creating default configuration.",
                path.display()
            );

            Self::create(path)
        }
    }

    /// Tries to load the settings from the file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        debug!("Attempting to read configuration from '{}'", path.display());

        let config_str =
            fs::read_to_string(path).context("Failed to read the configuration file")?;

        info!("Successfully read configuration file '{}'", path.display());

        Self::from_toml_str(&config_str)
    }

    /// Parses settings from TOML text and checks them against the cipher's limits.
    pub fn from_toml_str(config_str: &str) -> anyhow::Result<Self> {
        let settings: Self = toml::from_str(config_str)
            .context("Failed to parse the configuration file as TOML")?;

        trace!("Loaded settings: {:?}", settings);

        settings
            .parameters()
            .context("Configuration holds invalid cipher parameters")?;

        Ok(settings)
    }

    /// Writes the default settings to `path`, then loads them back.
    fn create(path: &Path) -> anyhow::Result<Self> {
        info!("Creating default configuration file '{}'", path.display());

        let default_config = Self::default();

        debug!("Serializing default configuration to TOML format");

        let config_str: String = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        debug!("Creating configuration file at '{}'", path.display());

        let mut file = File::create(path).context("Failed to create the configuration file")?;

        debug!("Writing default configuration to file");

        file.write_all(config_str.as_bytes())
            .context("Failed to write the default configuration to the file")?;

        info!(
            "Default configuration written to '{}'. Reloading from file.",
            path.display()
        );

        Self::load(path)
    }

    /// Resolves the settings into cipher parameters.
    pub fn parameters(&self) -> Result<Parameters, rc5_cipher::InvalidParameter> {
        Parameters::new(self.word_size, self.rounds, self.key_length)
    }

    /// Creates an unexpanded cipher context for these settings.
    pub fn build_context(&self) -> Result<CipherContext, rc5_cipher::Rc5Error> {
        CipherContext::create(self.word_size, self.rounds, self.key_length)
    }
}

impl Default for CipherSettings {
    /// RC5-32/12/16.
    fn default() -> Self {
        Self {
            word_size: 32,
            rounds: 12,
            key_length: 16,
        }
    }
}

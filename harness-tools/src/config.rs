// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The harness configuration descriptor and its load contract.

use std::{collections::HashMap, fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    network::{NetworkProfile, NetworkTable},
    plugin::{PluginHost, DEFAULT_PLUGINS},
    solidity::{RawSolidity, SolidityConfig},
};

/// Filename for harness configuration files.
pub const FILENAME: &str = "Harness.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed configuration: {version:?} is not a MAJOR.MINOR.PATCH compiler release")]
    MalformedConfiguration { version: String },

    #[error("invalid optimizer settings: {reason}")]
    InvalidOptimizerSettings { reason: String },

    #[error("duplicate network name: {0}")]
    DuplicateNetworkName(String),

    #[error("missing {FILENAME}")]
    Missing,
}

/// Validated harness configuration.
///
/// Constructed once at startup and handed to the build/test front end by
/// reference; nothing mutates it afterwards. Loading the same declaration
/// twice yields structurally equal descriptors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigDescriptor {
    pub networks: HashMap<String, NetworkProfile>,
    pub solidity: SolidityConfig,
}

/// Configuration as it appears on the wire, prior to validation.
#[derive(Debug, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    networks: NetworkTable,
    solidity: RawSolidity,
}

impl RawConfig {
    /// Checks every invariant the wire format cannot express on its own.
    ///
    /// An empty network table passes; the harness cannot run anything
    /// without a network, but that is the front end's complaint to make.
    pub fn validate(self) -> Result<ConfigDescriptor, ConfigError> {
        let mut networks = HashMap::with_capacity(self.networks.0.len());
        for (name, profile) in self.networks.0 {
            if networks.insert(name.clone(), profile).is_some() {
                return Err(ConfigError::DuplicateNetworkName(name));
            }
        }
        let solidity = self.solidity.validate()?;
        Ok(ConfigDescriptor { networks, solidity })
    }
}

impl ConfigDescriptor {
    /// Loads and validates a configuration file, registering the default
    /// plugins with `host`.
    ///
    /// Any failure aborts the load; there is no partial success.
    pub fn load(path: impl AsRef<Path>, host: &mut impl PluginHost) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::Missing.into());
        }
        debug!("loading harness configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents, host)
    }

    /// Loads a configuration from an in-memory TOML document.
    pub fn from_toml_str(contents: &str, host: &mut impl PluginHost) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;
        Self::finish(raw, host)
    }

    /// Loads a configuration from its equivalent JSON form.
    pub fn from_json(contents: &str, host: &mut impl PluginHost) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(contents)?;
        Self::finish(raw, host)
    }

    fn finish(raw: RawConfig, host: &mut impl PluginHost) -> Result<Self> {
        let descriptor = raw.validate()?;
        for plugin in DEFAULT_PLUGINS {
            host.register(plugin)?;
        }
        debug!(
            "configured solc {} with {} network(s)",
            descriptor.solidity.version,
            descriptor.networks.len(),
        );
        Ok(descriptor)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::LogPluginHost;

    #[test]
    fn duplicate_network_names_are_rejected() {
        let json = r#"{
            "networks": { "devnet": {}, "devnet": { "chainId": 5 } },
            "solidity": { "version": "0.8.19" }
        }"#;
        let raw: RawConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            raw.validate(),
            Err(ConfigError::DuplicateNetworkName(name)) if name == "devnet"
        ));
    }

    #[test]
    fn missing_file_fails_to_load() {
        let mut host = LogPluginHost;
        let err = ConfigDescriptor::load("/does/not/exist/Harness.toml", &mut host).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Config(ConfigError::Missing)
        ));
    }
}

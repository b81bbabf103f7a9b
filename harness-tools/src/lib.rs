// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Configuration loading for the Solidity contract test harness.
//!
//! The harness reads a single `Harness.toml` (or an equivalent JSON document)
//! at startup, validates it, registers the default plugins with the host, and
//! hands the resulting [`ConfigDescriptor`] to the build/test front end. The
//! descriptor is immutable after load; consumers receive it by value or
//! reference rather than through process-wide state.

pub mod config;
pub(crate) mod error;
pub mod network;
pub mod plugin;
pub mod solidity;

pub use config::{ConfigDescriptor, ConfigError, FILENAME};
pub use error::{Error, Result};
pub use plugin::{LogPluginHost, PluginError, PluginHost, DEFAULT_PLUGINS};

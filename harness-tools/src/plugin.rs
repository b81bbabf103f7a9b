// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Plugin registration for the test harness.
//!
//! The configuration layer does not implement any plugin behavior itself; it
//! only announces the configured plugins to whatever host is driving the run.

use log::debug;

/// Bindings for the legacy truffle-style contract assertion library.
pub const ASSERTION_BINDINGS: &str = "hardhat-truffle5";

/// Chai-style matcher extensions for contract expectations.
pub const CHAI_MATCHERS: &str = "hardhat-chai-matchers";

/// Plugins registered on every load, in registration order.
pub const DEFAULT_PLUGINS: &[&str] = &[ASSERTION_BINDINGS, CHAI_MATCHERS];

#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("plugin rejected by host: {0}")]
    Rejected(String),

    #[error("plugin registered twice: {0}")]
    AlreadyRegistered(String),
}

/// Capability through which the loader announces plugins.
///
/// Injected into [`crate::config::ConfigDescriptor::load`] so the loader can
/// be exercised without a real plugin host.
pub trait PluginHost {
    fn register(&mut self, plugin: &str) -> Result<(), PluginError>;
}

/// Host that records registrations as log events and nothing else.
#[derive(Debug, Default)]
pub struct LogPluginHost;

impl PluginHost for LogPluginHost {
    fn register(&mut self, plugin: &str) -> Result<(), PluginError> {
        debug!("registered plugin {plugin}");
        Ok(())
    }
}

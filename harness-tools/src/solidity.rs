// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Solidity compiler configuration.

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Optimizer runs assumed when the configuration leaves the value unset.
pub const DEFAULT_OPTIMIZER_RUNS: u64 = 200;

/// Validated compiler configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolidityConfig {
    pub version: Version,
    pub settings: CompilerSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    pub optimizer: OptimizerSettings,
    #[serde(rename = "viaIR")]
    pub via_ir: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u64,
}

/// Compiler configuration as it appears on the wire, prior to validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSolidity {
    version: String,
    #[serde(default)]
    settings: RawSettings,
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    optimizer: RawOptimizer,
    #[serde(default, rename = "viaIR")]
    via_ir: bool,
}

#[derive(Debug, Default, Deserialize)]
struct RawOptimizer {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    runs: RawRuns,
}

/// `runs` is accepted as any number during deserialization so that a
/// non-integer value surfaces as an optimizer-settings error rather than a
/// serde type error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRuns {
    Integer(i64),
    Float(f64),
}

impl Default for RawRuns {
    fn default() -> Self {
        RawRuns::Integer(DEFAULT_OPTIMIZER_RUNS as i64)
    }
}

impl RawSolidity {
    pub(crate) fn validate(self) -> Result<SolidityConfig, ConfigError> {
        let version = parse_solc_version(&self.version)?;
        let optimizer = self.settings.optimizer.validate()?;
        Ok(SolidityConfig {
            version,
            settings: CompilerSettings {
                optimizer,
                via_ir: self.settings.via_ir,
            },
        })
    }
}

impl RawOptimizer {
    fn validate(self) -> Result<OptimizerSettings, ConfigError> {
        let runs = match self.runs {
            RawRuns::Integer(runs) if runs >= 0 => runs as u64,
            RawRuns::Integer(runs) => {
                return Err(ConfigError::InvalidOptimizerSettings {
                    reason: format!("runs must be non-negative, got {runs}"),
                })
            }
            RawRuns::Float(runs) => {
                return Err(ConfigError::InvalidOptimizerSettings {
                    reason: format!("runs must be an integer, got {runs}"),
                })
            }
        };
        Ok(OptimizerSettings {
            enabled: self.enabled,
            runs,
        })
    }
}

/// Parses a compiler release identifier.
///
/// Only plain `MAJOR.MINOR.PATCH` releases are accepted; pre-release and
/// build metadata never identify a solc release the harness can fetch.
pub fn parse_solc_version(version: &str) -> Result<Version, ConfigError> {
    let parsed: Version = version.parse().map_err(|_| malformed(version))?;
    if !parsed.pre.is_empty() || !parsed.build.is_empty() {
        return Err(malformed(version));
    }
    Ok(parsed)
}

fn malformed(version: &str) -> ConfigError {
    ConfigError::MalformedConfiguration {
        version: version.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solc_versions() {
        let accepted = ["0.8.19", "0.4.11", "1.0.0", "0.8.30"];
        for version in accepted {
            let parsed = parse_solc_version(version).unwrap();
            assert_eq!(parsed.to_string(), version);
        }

        let rejected = ["", "abc", "0.8", "8", "0.8.19-nightly", "0.8.19+commit.7dd6d404", "v0.8.19", "0.8.x"];
        for version in rejected {
            assert!(
                matches!(
                    parse_solc_version(version),
                    Err(ConfigError::MalformedConfiguration { .. })
                ),
                "expected {version:?} to be rejected",
            );
        }
    }

    #[test]
    fn optimizer_runs_must_be_a_non_negative_integer() {
        let ok = RawOptimizer {
            enabled: true,
            runs: RawRuns::Integer(200),
        };
        assert_eq!(
            ok.validate().unwrap(),
            OptimizerSettings {
                enabled: true,
                runs: 200,
            }
        );

        // Zero is meaningless for an enabled optimizer but not invalid.
        let zero = RawOptimizer {
            enabled: false,
            runs: RawRuns::Integer(0),
        };
        assert_eq!(zero.validate().unwrap().runs, 0);

        let negative = RawOptimizer {
            enabled: true,
            runs: RawRuns::Integer(-5),
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidOptimizerSettings { .. })
        ));

        let fractional = RawOptimizer {
            enabled: true,
            runs: RawRuns::Float(1.5),
        };
        assert!(matches!(
            fractional.validate(),
            Err(ConfigError::InvalidOptimizerSettings { .. })
        ));
    }

    #[test]
    fn settings_default_when_omitted() {
        let raw: RawSolidity = toml::from_str(r#"version = "0.8.19""#).unwrap();
        let config = raw.validate().unwrap();
        assert!(!config.settings.optimizer.enabled);
        assert_eq!(config.settings.optimizer.runs, DEFAULT_OPTIMIZER_RUNS);
        assert!(!config.settings.via_ir);
    }
}

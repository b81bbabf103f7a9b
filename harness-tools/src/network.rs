// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network profiles for the harness runtime.

use std::fmt;

use serde::{de, Deserialize, Serialize};

/// Per-network settings.
///
/// Every field is optional. The runtime fills in defaults for anything left
/// unset, so an empty profile selects the in-memory development network with
/// its stock configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, rename = "chainId", skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

/// Network table as it appears on the wire.
///
/// Kept as a list of pairs rather than a map so that repeated keys in
/// serialized input remain observable until validation.
#[derive(Clone, Debug, Default)]
pub(crate) struct NetworkTable(pub(crate) Vec<(String, NetworkProfile)>);

impl<'de> Deserialize<'de> for NetworkTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> de::Visitor<'de> for TableVisitor {
            type Value = NetworkTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of network name to network profile")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, NetworkProfile>()? {
                    entries.push(entry);
                }
                Ok(NetworkTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

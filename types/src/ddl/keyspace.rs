//! Keyspace DDL types

use std::collections::BTreeMap;

/// Keyspace name plus replication configuration.
///
/// Replication arguments render in key order, so statements are stable.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyspaceDef {
    pub name: String,
    /// Replication class, e.g. `SimpleStrategy` or `NetworkTopologyStrategy`
    pub replication_strategy: String,
    /// Strategy arguments such as `replication_factor` or per-datacenter counts
    #[cfg_attr(feature = "serde", serde(default))]
    pub replication_strategy_args: BTreeMap<String, u32>,
}

impl KeyspaceDef {
    #[must_use]
    pub fn new(name: impl Into<String>, replication_strategy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replication_strategy: replication_strategy.into(),
            replication_strategy_args: BTreeMap::new(),
        }
    }

    /// Add a replication argument
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, value: u32) -> Self {
        self.replication_strategy_args.insert(key.into(), value);
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

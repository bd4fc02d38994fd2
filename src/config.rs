//! Configuration file support
//!
//! Loads keyspace and table definitions from `cqlgen.toml`:
//!
//! ```toml
//! [keyspace]
//! name = "test"
//! replication_strategy = "NetworkTopologyStrategy"
//!
//! [keyspace.replication_strategy_args]
//! datacenter1 = 1
//!
//! [[tables]]
//! name = "events"
//!
//! [tables.columns.monthBucket]
//! name = "month_bucket"
//! data_type = "smallint"
//! primary_key_index = 0
//!
//! [tables.columns.timestamp]
//! name = "timestamp"
//! data_type = "timestamp"
//! primary_key_index = 1
//! primary_key_order = "DESC"
//! ```
//!
//! Tables without their own `keyspace` use the `[keyspace]` name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use cqlgen_core::Session;
use cqlgen_types::ddl::{KeyspaceDef, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::keyspace::{Keyspace, KeyspaceConfig};
use crate::table::{Table, TableConfig};

pub const CONFIG_FILE: &str = "cqlgen.toml";

// ============================================================================
// Config types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyspace: Option<KeyspaceDef>,
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

/// One `[[tables]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyspace: Option<String>,
    /// Column definitions keyed by logical name
    #[serde(default)]
    pub columns: TableDefinition,
}

/// Keyspace and tables created by [`Config::apply`]
#[derive(Debug)]
pub struct Applied<S> {
    pub keyspace: Option<Keyspace>,
    pub tables: BTreeMap<String, Table<S>>,
}

impl<S> Applied<S> {
    pub fn table(&self, name: &str) -> Option<&Table<S>> {
        self.tables.get(name)
    }
}

// ============================================================================
// Config implementation
// ============================================================================

impl Config {
    /// Load from the default config file
    pub fn load() -> Result<Self, Error> {
        Self::from_path(CONFIG_FILE)
    }

    /// Load from a specific path
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        toml::from_str(&content).map_err(|e| Error::Parse(path.display().to_string(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Parse("config string".into(), e))
    }

    pub fn keyspace_config(&self) -> Option<&KeyspaceConfig> {
        self.keyspace.as_ref()
    }

    /// Creation inputs for every table, in file order
    pub fn table_configs(&self) -> Vec<(TableConfig, TableDefinition)> {
        self.tables.iter().map(|entry| self.table_config(entry)).collect()
    }

    /// Creation inputs for the table called `name`
    pub fn table(&self, name: &str) -> Result<(TableConfig, TableDefinition), Error> {
        self.tables
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| self.table_config(entry))
            .ok_or_else(|| Error::UnknownTable(name.to_string()))
    }

    fn table_config(&self, entry: &TableEntry) -> (TableConfig, TableDefinition) {
        let keyspace = entry
            .keyspace
            .as_deref()
            .or(self.keyspace.as_ref().map(KeyspaceDef::name));

        let mut config = TableConfig::new(entry.name.clone());
        if let Some(keyspace) = keyspace {
            config = config.keyspace(keyspace);
        }
        (config, entry.columns.clone())
    }

    /// Create the keyspace (if configured) and then every table.
    ///
    /// Stops at the first failure; anything created before it stays in the
    /// database.
    pub fn apply<S: Session>(&self, session: Arc<S>) -> cqlgen_core::Result<Applied<S>> {
        let keyspace = self
            .keyspace
            .clone()
            .map(|config| Keyspace::create(session.as_ref(), config))
            .transpose()?;

        let mut tables = BTreeMap::new();
        for (config, definition) in self.table_configs() {
            let table = Table::create(Arc::clone(&session), &config, definition)?;
            tables.insert(config.name().to_string(), table);
        }

        Ok(Applied { keyspace, tables })
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    Parse(String, #[source] toml::de::Error),

    #[error("no table named '{0}' in config")]
    UnknownTable(String),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================

//! Keyspace creation and alteration.

use std::collections::BTreeMap;

use cqlgen_core::{CqlError, Result, Session, cql_trace_schema, cql_trace_statement};
use cqlgen_types::SchemaError;
use cqlgen_types::ddl::KeyspaceDef;

/// Keyspace name and replication settings to create or alter with
pub type KeyspaceConfig = KeyspaceDef;

/// A keyspace that exists in the database.
///
/// Tables only refer to a keyspace by name, so a single `Keyspace` can be
/// shared by any number of tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyspace {
    def: KeyspaceDef,
}

impl Keyspace {
    /// Create the keyspace unless it already exists
    pub fn create<S: Session>(session: &S, config: KeyspaceConfig) -> Result<Self> {
        validate(&config)?;
        run(session, &config.create_keyspace_sql())?;
        cql_trace_schema!("create", config.name);
        Ok(Self { def: config })
    }

    /// Change the replication settings.
    ///
    /// The entity keeps its previous settings when the statement fails.
    pub fn alter<S: Session>(&mut self, session: &S, config: KeyspaceConfig) -> Result<&mut Self> {
        validate(&config)?;
        run(session, &config.alter_keyspace_sql())?;
        cql_trace_schema!("alter", config.name);
        self.def = config;
        Ok(self)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    #[inline]
    pub fn replication_strategy(&self) -> &str {
        &self.def.replication_strategy
    }

    #[inline]
    pub fn replication_strategy_args(&self) -> &BTreeMap<String, u32> {
        &self.def.replication_strategy_args
    }

    #[inline]
    pub fn definition(&self) -> &KeyspaceDef {
        &self.def
    }
}

fn validate(config: &KeyspaceConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(SchemaError::MissingName("Keyspace").into());
    }
    if config.replication_strategy.trim().is_empty() {
        return Err(SchemaError::MissingName("Replication strategy").into());
    }
    Ok(())
}

fn run<S: Session>(session: &S, statement: &str) -> Result<()> {
    cql_trace_statement!(statement, 0);
    session
        .execute(statement, Vec::new())
        .map_err(|source| CqlError::StatementExecution {
            statement: statement.to_string(),
            source,
        })
}

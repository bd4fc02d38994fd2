//! # cqlgen
//!
//! Primary-key schema derivation and CQL statement construction for
//! wide-column databases (Cassandra, ScyllaDB).
//!
//! A table is described declaratively as a map of logical column names to
//! [`ColumnDef`]s. [`Table::create`] validates the partition/clustering key
//! layout, executes `CREATE TABLE` once, and from then on builds `INSERT` and
//! `SELECT` statements from the frozen schema. The driver itself stays behind
//! the [`Session`] trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cqlgen::prelude::*;
//!
//! let mut def = TableDefinition::new();
//! def.insert("monthBucket".into(), ColumnDef::new("month_bucket", "smallint").primary_key(0));
//! def.insert("timestamp".into(), ColumnDef::new("timestamp", "timestamp").primary_key(1).desc());
//! def.insert("data".into(), ColumnDef::new("data", "text"));
//!
//! let session = Arc::new(my_driver_session);
//! let events = Table::create(session, &TableConfig::new("events").keyspace("test"), def)?;
//!
//! let bucket = events.column("monthBucket")?;
//! let rows: Vec<Row> = events.select(
//!     &SelectParams::new()
//!         .columns([bucket, "timestamp"])
//!         .condition(eq(bucket, 9))
//!         .limit(6),
//! )?;
//! ```
//!
//! ## Features
//!
//! | Feature   | Description                                    |
//! |-----------|------------------------------------------------|
//! | `tracing` | Statement and schema events via `tracing` (default) |
//! | `uuid`    | `uuid::Uuid` values                            |
//! | `chrono`  | `chrono::DateTime` timestamp values            |

#[macro_use]
mod macros;

pub mod config;
pub mod connection;
mod keyspace;
mod table;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for cqlgen operations
pub use cqlgen_core::Result;

/// Error types
pub mod error {
    pub use crate::config::ConfigError;
    pub use cqlgen_core::error::CqlError;
    pub use cqlgen_types::SchemaError;
}

/// Schema model and DDL rendering
pub use cqlgen_types::ddl;

/// Statement construction and execution plumbing
pub use cqlgen_core as statement;

pub use cqlgen_core::cmp::{self, eq, gt, gte, in_list, lt, lte};
pub use cqlgen_core::{
    BoundStatement, CmpOp, Comparator, CqlError, CqlValue, DEFAULT_PAGE_SIZE, DriverError,
    FromCqlValue, FromRow, Iterx, Query, Row, Rows, Session, ToRow,
};
pub use cqlgen_types::SchemaError;
pub use cqlgen_types::ddl::{ColumnDef, KeyOrder, KeyspaceDef, TableDefinition, TableSchema};

pub use config::{Config, ConfigError};
pub use connection::{Cluster, SessionHandle};
pub use keyspace::{Keyspace, KeyspaceConfig};
pub use table::{InsertHandle, SelectParams, Table, TableConfig};

/// Commonly used types and functions
pub mod prelude {
    pub use crate::cmp::{eq, gt, gte, in_list, lt, lte};
    pub use crate::connection::{Cluster, SessionHandle};
    pub use crate::{
        ColumnDef, Comparator, CqlError, CqlValue, FromRow, InsertHandle, KeyOrder, Keyspace,
        KeyspaceConfig, Result, Row, SelectParams, Session, Table, TableConfig, TableDefinition,
        ToRow, cql_record,
    };
}

//! CQL DDL (Data Definition Language) entity types
//!
//! - [`ColumnDef`] / [`TableDefinition`] - the declarative table description
//! - [`PrimaryKeyLayout`] - validated partition/clustering key layout
//! - [`TableSchema`] - the frozen schema derived from a definition set
//! - [`KeyspaceDef`] - keyspace name and replication settings
//!
//! # Examples
//!
//! ```
//! use cqlgen_types::ddl::{ColumnDef, TableDefinition, TableSchema, TableSql};
//!
//! let mut def = TableDefinition::new();
//! def.insert("yearBucket".into(), ColumnDef::new("year_bucket", "smallint").primary_key(0));
//! def.insert("timestamp".into(), ColumnDef::new("timestamp", "timestamp").primary_key(1).desc());
//! def.insert("action".into(), ColumnDef::new("action", "text"));
//!
//! let schema = TableSchema::from_definition(&def).unwrap();
//! let sql = TableSql::new("test.events", &schema).create_table_sql();
//! assert!(sql.ends_with("WITH CLUSTERING ORDER BY (timestamp DESC)"));
//! ```

mod column;
mod keyspace;
mod primary_key;
pub mod sql;
mod table;

pub use column::{ColumnDef, KeyOrder, TableDefinition};
pub use keyspace::KeyspaceDef;
pub use primary_key::{ClusteringColumn, PrimaryKeyLayout};
pub use table::TableSchema;

// SQL generation
pub use sql::TableSql;

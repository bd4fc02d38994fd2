//! Shared schema types for cqlgen
//!
//! This crate holds the declarative side of a wide-column table: column
//! definitions, the primary-key layout derived from them, the frozen
//! [`TableSchema`](ddl::TableSchema) and CQL DDL rendering. It performs no
//! I/O.
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of definitions

pub mod ddl;
mod error;

pub use error::{Result, SchemaError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::SchemaError;
    pub use crate::ddl::{ColumnDef, KeyOrder, KeyspaceDef, PrimaryKeyLayout, TableDefinition, TableSchema};
}

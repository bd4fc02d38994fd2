//! CQL generation for DDL types
//!
//! Renders the `CREATE TABLE` statement for a derived [`TableSchema`] and
//! the `CREATE`/`ALTER KEYSPACE` statements for a [`KeyspaceDef`].

use super::{KeyspaceDef, TableSchema};

// =============================================================================
// Table CQL Generation
// =============================================================================

/// A table schema bound to its fully qualified name
#[derive(Clone, Copy, Debug)]
pub struct TableSql<'a> {
    pub full_name: &'a str,
    pub schema: &'a TableSchema,
}

impl<'a> TableSql<'a> {
    pub fn new(full_name: &'a str, schema: &'a TableSchema) -> Self {
        Self { full_name, schema }
    }

    /// Generate `CREATE TABLE IF NOT EXISTS` CQL.
    ///
    /// Column/type pairs come first (in column-name order), then the
    /// primary-key clause. The clustering-order suffix is only emitted when
    /// the table has clustering columns.
    pub fn create_table_sql(&self) -> String {
        let mut lines: Vec<String> = self
            .schema
            .column_types()
            .iter()
            .map(|(name, data_type)| format!("{name} {data_type}"))
            .collect();
        lines.push(format!("PRIMARY KEY {}", self.schema.primary_key_clause()));

        let mut sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.full_name,
            lines.join(", ")
        );

        if !self.schema.layout().clustering_columns().is_empty() {
            sql.push_str(" WITH CLUSTERING ORDER BY ");
            sql.push_str(self.schema.clustering_order_clause());
        }
        sql
    }
}

// =============================================================================
// Keyspace CQL Generation
// =============================================================================

impl KeyspaceDef {
    /// `{'class': '<strategy>', '<arg>': <n>, ...}`
    pub fn replication_sql(&self) -> String {
        let mut entries = vec![format!("'class': '{}'", self.replication_strategy)];
        entries.extend(
            self.replication_strategy_args
                .iter()
                .map(|(key, value)| format!("'{key}': {value}")),
        );
        format!("{{{}}}", entries.join(", "))
    }

    /// Generate `CREATE KEYSPACE IF NOT EXISTS` CQL
    pub fn create_keyspace_sql(&self) -> String {
        format!(
            "CREATE KEYSPACE IF NOT EXISTS {} WITH replication = {}",
            self.name,
            self.replication_sql()
        )
    }

    /// Generate `ALTER KEYSPACE` CQL
    pub fn alter_keyspace_sql(&self) -> String {
        format!(
            "ALTER KEYSPACE {} WITH replication = {}",
            self.name,
            self.replication_sql()
        )
    }
}

//! Table schema derivation

use std::collections::BTreeMap;

use crate::error::{Result, SchemaError};

use super::column::TableDefinition;
use super::primary_key::PrimaryKeyLayout;

/// Canonical schema of a table, frozen once derived.
///
/// `column_types` holds every defined column (no filtering); the two
/// clauses are the rendered primary-key and clustering-order parts of the
/// `CREATE TABLE` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    column_types: BTreeMap<String, String>,
    layout: PrimaryKeyLayout,
    primary_key_clause: String,
    clustering_order_clause: String,
}

impl TableSchema {
    /// Validates `definition` and derives the schema.
    ///
    /// Fails on an empty definition set, any primary-key layout error, a
    /// blank physical column name, or two logical names mapping to one
    /// physical column. Layout errors are reported first.
    pub fn from_definition(definition: &TableDefinition) -> Result<Self> {
        if definition.is_empty() {
            return Err(SchemaError::MissingDefinition);
        }

        let layout = PrimaryKeyLayout::from_definition(definition)?;

        let mut column_types = BTreeMap::new();
        for (logical, column) in definition {
            if column.name().trim().is_empty() {
                return Err(SchemaError::BlankColumnName {
                    logical: logical.clone(),
                });
            }
            let previous =
                column_types.insert(column.name().to_string(), column.data_type().to_string());
            if previous.is_some() {
                return Err(SchemaError::DuplicateColumn {
                    column: column.name().to_string(),
                });
            }
        }

        let primary_key_clause = layout.primary_key_clause();
        let clustering_order_clause = layout.clustering_order_clause();

        Ok(Self {
            column_types,
            layout,
            primary_key_clause,
            clustering_order_clause,
        })
    }

    /// Physical column name to CQL type
    #[inline]
    #[must_use]
    pub fn column_types(&self) -> &BTreeMap<String, String> {
        &self.column_types
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &PrimaryKeyLayout {
        &self.layout
    }

    /// `(partition, clustering...)`
    #[inline]
    #[must_use]
    pub fn primary_key_clause(&self) -> &str {
        &self.primary_key_clause
    }

    /// `(clustering ORDER, ...)`
    #[inline]
    #[must_use]
    pub fn clustering_order_clause(&self) -> &str {
        &self.clustering_order_clause
    }

    #[inline]
    #[must_use]
    pub fn data_type(&self, column: &str) -> Option<&str> {
        self.column_types.get(column).map(String::as_str)
    }
}

//! Primary-key layout derivation
//!
//! Turns the per-column `primary_key_index` / `primary_key_order`
//! annotations of a [`TableDefinition`] into an explicit layout: one
//! partition column followed by the clustering columns in ascending
//! position order.
//!
//! Only single-column partition keys are expressible. A second column at
//! position 0 is rejected like any other duplicate position.

use crate::error::{Result, SchemaError};

use super::column::{KeyOrder, TableDefinition};

/// A clustering column and its effective sort order
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClusteringColumn {
    pub column: String,
    pub order: KeyOrder,
}

/// Validated primary-key layout.
///
/// Built from sorted positions rather than indexed into a sparse array, so
/// a gap in positions is an error instead of an empty slot in the clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimaryKeyLayout {
    partition: String,
    clustering: Vec<ClusteringColumn>,
}

/// One primary-key entry before ordering
#[derive(Debug)]
struct KeyEntry {
    position: u32,
    column: String,
    order: Option<KeyOrder>,
}

impl PrimaryKeyLayout {
    /// Validates the definition set and assembles the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use cqlgen_types::ddl::{ColumnDef, PrimaryKeyLayout, TableDefinition};
    ///
    /// let mut def = TableDefinition::new();
    /// def.insert("monthBucket".into(), ColumnDef::new("month_bucket", "smallint").primary_key(0));
    /// def.insert("timestamp".into(), ColumnDef::new("timestamp", "timestamp").primary_key(1).desc());
    /// def.insert("uuid".into(), ColumnDef::new("uuid", "uuid").primary_key(2));
    ///
    /// let layout = PrimaryKeyLayout::from_definition(&def).unwrap();
    /// assert_eq!(layout.primary_key_clause(), "(month_bucket, timestamp, uuid)");
    /// assert_eq!(layout.clustering_order_clause(), "(timestamp DESC, uuid ASC)");
    /// ```
    pub fn from_definition(definition: &TableDefinition) -> Result<Self> {
        let mut entries: Vec<KeyEntry> = Vec::new();

        for column in definition.values() {
            let name = column.name();
            let order = column.primary_key_order();

            let Some(position) = column.primary_key_index() else {
                if order.is_some() {
                    return Err(SchemaError::InvalidPrimaryKeySpec {
                        column: name.to_string(),
                        reason: "PrimaryKeyOrder cannot be specified without specifying PrimaryKeyIndex",
                    });
                }
                continue;
            };

            if position == 0 && order.is_some() {
                return Err(SchemaError::InvalidPrimaryKeySpec {
                    column: name.to_string(),
                    reason: "PrimaryKeyOrder cannot be specified if PrimaryKeyIndex is 0",
                });
            }

            let order = match order {
                Some(text) => KeyOrder::parse(name, text)?,
                None => None,
            };

            if let Some(previous) = entries.iter().find(|e| e.position == position) {
                return Err(SchemaError::DuplicatePrimaryKeyPosition {
                    position,
                    previous: previous.column.clone(),
                    current: name.to_string(),
                });
            }

            entries.push(KeyEntry {
                position,
                column: name.to_string(),
                order,
            });
        }

        entries.sort_by_key(|e| e.position);

        for (expected, entry) in (0u32..).zip(&entries) {
            if entry.position != expected {
                return Err(if expected == 0 {
                    SchemaError::MissingPartitionKey
                } else {
                    SchemaError::NonContiguousPrimaryKey { missing: expected }
                });
            }
        }

        let mut entries = entries.into_iter();
        let partition = entries
            .next()
            .map(|e| e.column)
            .ok_or(SchemaError::MissingPartitionKey)?;
        let clustering = entries
            .map(|e| ClusteringColumn {
                column: e.column,
                order: e.order.unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            partition,
            clustering,
        })
    }

    #[inline]
    #[must_use]
    pub fn partition_key(&self) -> &str {
        &self.partition
    }

    #[inline]
    #[must_use]
    pub fn clustering_columns(&self) -> &[ClusteringColumn] {
        &self.clustering
    }

    /// All key columns in position order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.partition.as_str()).chain(self.clustering.iter().map(|c| c.column.as_str()))
    }

    /// `(col0, col1, ...)` without ordering annotations
    #[must_use]
    pub fn primary_key_clause(&self) -> String {
        format!("({})", self.columns().collect::<Vec<_>>().join(", "))
    }

    /// `(col1 ORDER1, col2 ORDER2, ...)`, or `()` when nothing clusters
    #[must_use]
    pub fn clustering_order_clause(&self) -> String {
        let cols = self
            .clustering
            .iter()
            .map(|c| format!("{} {}", c.column, c.order))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({cols})")
    }
}

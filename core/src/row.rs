//! Rows read from a session and records written to it.
//!
//! [`ToRow`] supplies values by column name when binding an `INSERT`;
//! [`FromRow`] turns a fetched [`Row`] into a caller type.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::{CqlError, Result};
use crate::value::{CqlValue, FromCqlValue};

/// A single result row: column names shared across the page plus values
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<CqlValue>,
}

impl Row {
    /// Creates a row; `values` are positional against `columns`.
    /// A column without a matching value reads as absent.
    pub fn new(columns: Arc<[String]>, values: Vec<CqlValue>) -> Self {
        Self { columns, values }
    }

    /// Builds a row from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CqlValue>,
    {
        let (columns, values): (Vec<String>, Vec<CqlValue>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            columns: columns.into(),
            values,
        }
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value of `column`, if the row has it
    pub fn value(&self, column: &str) -> Option<&CqlValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }

    /// Reads `column` as `T`
    pub fn get<T: FromCqlValue>(&self, column: &str) -> Result<T> {
        let value = self
            .value(column)
            .ok_or_else(|| CqlError::Mapping(format!("column `{column}` not in row")))?;
        T::from_cql(value.clone())
            .map_err(|e| CqlError::Mapping(format!("column `{column}`: {e}")))
    }

    /// Reads the value at `idx` as `T`
    pub fn get_at<T: FromCqlValue>(&self, idx: usize) -> Result<T> {
        let value = self
            .values
            .get(idx)
            .ok_or_else(|| CqlError::Mapping(format!("column index {idx} out of range")))?;
        T::from_cql(value.clone())
    }

    pub fn into_values(self) -> Vec<CqlValue> {
        self.values
    }
}

// =============================================================================
// FromRow
// =============================================================================

/// Extracts a Rust value from a fetched row
#[diagnostic::on_unimplemented(
    message = "cannot deserialize `{Self}` from a result row",
    label = "this type does not implement FromRow",
    note = "implement FromRow by hand or use the cql_record! macro"
)]
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}

impl FromRow for Row {
    #[inline]
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row.clone())
    }
}

impl FromRow for HashMap<String, CqlValue> {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row
            .columns
            .iter()
            .cloned()
            .zip(row.values.iter().cloned())
            .collect())
    }
}

impl FromRow for BTreeMap<String, CqlValue> {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(row
            .columns
            .iter()
            .cloned()
            .zip(row.values.iter().cloned())
            .collect())
    }
}

// =============================================================================
// ToRow
// =============================================================================

/// A data record whose fields bind to statement placeholders by column name
pub trait ToRow {
    /// Value for the physical column `column`, `None` if the record lacks it
    fn column_value(&self, column: &str) -> Option<CqlValue>;
}

impl<R: ToRow + ?Sized> ToRow for &R {
    fn column_value(&self, column: &str) -> Option<CqlValue> {
        (**self).column_value(column)
    }
}

impl<V, S> ToRow for HashMap<String, V, S>
where
    V: Clone + Into<CqlValue>,
    S: std::hash::BuildHasher,
{
    fn column_value(&self, column: &str) -> Option<CqlValue> {
        self.get(column).cloned().map(Into::into)
    }
}

impl<V> ToRow for BTreeMap<String, V>
where
    V: Clone + Into<CqlValue>,
{
    fn column_value(&self, column: &str) -> Option<CqlValue> {
        self.get(column).cloned().map(Into::into)
    }
}

impl ToRow for Row {
    fn column_value(&self, column: &str) -> Option<CqlValue> {
        self.value(column).cloned()
    }
}

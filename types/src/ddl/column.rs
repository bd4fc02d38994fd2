//! Column DDL types
//!
//! [`ColumnDef`] is the declarative description of one table column: its
//! physical name, CQL data type and optional primary-key position/order.
//! Definitions are supplied wholesale when a table is declared and never
//! change afterwards.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::SchemaError;

/// Table definition keyed by logical column name.
///
/// Logical names decouple the caller's vocabulary from the physical column
/// names used in statements.
pub type TableDefinition = BTreeMap<String, ColumnDef>;

// =============================================================================
// Clustering Order
// =============================================================================

/// Sort order of a clustering column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum KeyOrder {
    #[default]
    Asc,
    Desc,
}

impl KeyOrder {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Parses an order case-insensitively.
    ///
    /// Returns `Ok(None)` for an empty string, which means "use the default".
    pub fn parse(column: &str, value: &str) -> Result<Option<Self>, SchemaError> {
        if value.is_empty() {
            return Ok(None);
        }
        if value.eq_ignore_ascii_case("ASC") {
            Ok(Some(Self::Asc))
        } else if value.eq_ignore_ascii_case("DESC") {
            Ok(Some(Self::Desc))
        } else {
            Err(SchemaError::InvalidOrderValue {
                column: column.to_string(),
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Column Definition
// =============================================================================

/// Declarative column definition.
///
/// The primary-key order is kept as raw text so definitions loaded from
/// configuration files are validated by the same code path as the ones
/// built in Rust.
///
/// # Examples
///
/// ```
/// use cqlgen_types::ddl::ColumnDef;
///
/// let month_bucket = ColumnDef::new("month_bucket", "smallint").primary_key(0);
/// let timestamp = ColumnDef::new("timestamp", "timestamp")
///     .primary_key(1)
///     .order("DESC");
/// const DATA: ColumnDef = ColumnDef::new("data", "text");
///
/// assert!(month_bucket.is_primary_key());
/// assert!(!DATA.is_primary_key());
/// assert_eq!(timestamp.primary_key_order(), Some("DESC"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Physical column name
    pub name: Cow<'static, str>,
    /// CQL type name (e.g. `text`, `timestamp`, `uuid`)
    pub data_type: Cow<'static, str>,
    /// Position inside the primary key; `0` is the partition key
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub primary_key_index: Option<u32>,
    /// `ASC` or `DESC`, case-insensitive; only valid for clustering columns
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub primary_key_order: Option<Cow<'static, str>>,
}

impl ColumnDef {
    #[must_use]
    pub const fn new(name: &'static str, data_type: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            data_type: Cow::Borrowed(data_type),
            primary_key_index: None,
            primary_key_order: None,
        }
    }

    /// Create a column definition from owned strings
    #[must_use]
    pub fn from_strings(name: String, data_type: String) -> Self {
        Self {
            name: Cow::Owned(name),
            data_type: Cow::Owned(data_type),
            primary_key_index: None,
            primary_key_order: None,
        }
    }

    /// Place the column in the primary key at `position`
    #[must_use]
    pub fn primary_key(mut self, position: u32) -> Self {
        self.primary_key_index = Some(position);
        self
    }

    /// Set the clustering order text (validated when the table is built)
    #[must_use]
    pub fn order(mut self, order: impl Into<Cow<'static, str>>) -> Self {
        self.primary_key_order = Some(order.into());
        self
    }

    #[must_use]
    pub fn asc(self) -> Self {
        self.order("ASC")
    }

    #[must_use]
    pub fn desc(self) -> Self {
        self.order("DESC")
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    #[inline]
    #[must_use]
    pub const fn primary_key_index(&self) -> Option<u32> {
        self.primary_key_index
    }

    /// The raw order text, with an empty string treated as unset
    #[inline]
    #[must_use]
    pub fn primary_key_order(&self) -> Option<&str> {
        self.primary_key_order.as_deref().filter(|o| !o.is_empty())
    }

    #[inline]
    #[must_use]
    pub const fn is_primary_key(&self) -> bool {
        self.primary_key_index.is_some()
    }
}

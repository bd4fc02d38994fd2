use thiserror::Error;

/// Validation failures raised while deriving a table or keyspace schema.
///
/// All of these are detected before any statement reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No column definitions were supplied
    #[error("Table definition not set")]
    MissingDefinition,

    /// Table or keyspace name is blank
    #[error("{0} name is required")]
    MissingName(&'static str),

    /// A physical column name is blank
    #[error("Column name is required. Errored key: \"{logical}\"")]
    BlankColumnName { logical: String },

    /// Two logical names resolve to the same physical column
    #[error("Duplicate column \"{column}\" in table definition")]
    DuplicateColumn { column: String },

    /// Order without a position, or order on the partition key
    #[error("{reason}. Errored key: \"{column}\"")]
    InvalidPrimaryKeySpec { column: String, reason: &'static str },

    /// Order text other than ASC/DESC
    #[error(
        "Invalid primary key order specified: \"{value}\". Valid values are: \"DESC\" or \"ASC\". Errored key: \"{column}\""
    )]
    InvalidOrderValue { column: String, value: String },

    /// Two columns claim the same primary-key position
    #[error(
        "Duplicate primary key index {position}. Previous key with same index: \"{previous}\". Current key: \"{current}\""
    )]
    DuplicatePrimaryKeyPosition {
        position: u32,
        previous: String,
        current: String,
    },

    /// No column sits at position 0
    #[error("No partition key: one column must have primary key index 0")]
    MissingPartitionKey,

    /// Primary-key positions do not form a contiguous range from 0
    #[error("Primary key indexes must be contiguous, index {missing} is missing")]
    NonContiguousPrimaryKey { missing: u32 },
}

/// Result type for schema derivation
pub type Result<T> = std::result::Result<T, SchemaError>;

use cqlgen_types::SchemaError;
use thiserror::Error;

use crate::session::DriverError;

#[derive(Debug, Error)]
pub enum CqlError {
    /// Definition set failed validation
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Logical column name not present in the table definition
    #[error("No column matching {0} was found")]
    UnknownColumn(String),

    /// The session rejected or failed a statement
    #[error("Execution error for statement `{statement}`: {source}")]
    StatementExecution {
        statement: String,
        #[source]
        source: DriverError,
    },

    /// Fetching rows or closing the iterator failed
    #[error("Iteration error: {0}")]
    Iteration(#[source] DriverError),

    /// A row value could not be converted to the requested type
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// A named placeholder had no value to bind
    #[error("Could not find a value for `{column}` in statement `{statement}`")]
    UnboundParameter { statement: String, column: String },

    /// A spawned insert finished without reporting back
    #[error("Task error: {0}")]
    TaskFailed(String),

    /// Creating a session failed
    #[error("Session error: {0}")]
    Session(#[source] DriverError),
}

impl CqlError {
    pub(crate) fn execution(statement: &str, source: DriverError) -> Self {
        Self::StatementExecution {
            statement: statement.to_string(),
            source,
        }
    }
}

/// Result type for statement construction and execution
pub type Result<T> = std::result::Result<T, CqlError>;

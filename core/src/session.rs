//! Session capability consumed by the statement layer.
//!
//! The actual driver (connection pooling, wire protocol, retries) lives
//! behind these traits. A [`Session`] hands out one [`Query`] per
//! statement; a read query turns into [`Rows`] that may page through the
//! result set transparently.

use std::error::Error;

use crate::row::Row;
use crate::value::CqlValue;

/// Error type returned by driver implementations
pub type DriverError = Box<dyn Error + Send + Sync + 'static>;

/// Rows per page when a query does not set its own page size
pub const DEFAULT_PAGE_SIZE: u32 = 5000;

/// A database session able to prepare and run statements.
///
/// Implementations are shared across threads (inserts run on blocking
/// worker threads), so any locking they need is their own business.
pub trait Session: Send + Sync {
    type Query: Query;

    /// Create a query for `statement` with positional `values`
    fn query(&self, statement: &str, values: Vec<CqlValue>) -> Self::Query;

    /// Whether the session can no longer be used
    fn is_closed(&self) -> bool {
        false
    }

    /// Run a statement that returns no rows
    fn execute(&self, statement: &str, values: Vec<CqlValue>) -> Result<(), DriverError> {
        self.query(statement, values).exec()
    }
}

/// A single statement prepared against a session
pub trait Query: Send {
    type Rows: Rows;

    /// The statement text this query was created from
    fn statement(&self) -> &str;

    /// Replace the positional values
    fn bind(&mut self, values: Vec<CqlValue>);

    /// Fetch results in pages of `n` rows
    fn set_page_size(&mut self, n: u32);

    /// Execute without reading rows
    fn exec(&mut self) -> Result<(), DriverError>;

    /// Execute and iterate the result set
    fn iter(self) -> Result<Self::Rows, DriverError>;

    /// Invalidate the query; released queries cannot be reused
    fn release(self);
}

/// Row iterator over a (possibly paged) result set
pub trait Rows {
    /// Next row, fetching another page if needed
    fn next_row(&mut self) -> Option<Result<Row, DriverError>>;

    /// Close the iterator, returning any error deferred during iteration
    fn close(self) -> Result<(), DriverError>;
}

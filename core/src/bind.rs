//! Named binding on top of a session [`Query`].

use std::collections::HashMap;

use crate::cql_trace_statement;
use crate::error::{CqlError, Result};
use crate::iter::Iterx;
use crate::row::ToRow;
use crate::session::{DEFAULT_PAGE_SIZE, Query};
use crate::value::CqlValue;

/// A query plus the ordered names of its placeholders.
///
/// Values can be bound positionally, from a name → value map, or from a
/// record implementing [`ToRow`]. Named binding fails on the first
/// placeholder the source has no value for.
#[derive(Debug)]
pub struct BoundStatement<Q> {
    query: Q,
    names: Vec<String>,
    bound: usize,
    page_size: Option<u32>,
}

impl<Q: Query> BoundStatement<Q> {
    pub fn new(query: Q, names: Vec<String>) -> Self {
        Self {
            query,
            names,
            bound: 0,
            page_size: None,
        }
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn statement(&self) -> &str {
        self.query.statement()
    }

    /// Number of values bound so far
    #[inline]
    pub fn bound_len(&self) -> usize {
        self.bound
    }

    /// Bind positional values, one per placeholder
    pub fn bind_values(mut self, values: Vec<CqlValue>) -> Self {
        self.bound = values.len();
        self.query.bind(values);
        self
    }

    /// Bind values looked up by placeholder name
    pub fn bind_map<V>(self, values: &HashMap<String, V>) -> Result<Self>
    where
        V: Clone + Into<CqlValue>,
    {
        self.bind_record(values)
    }

    /// Bind a record's fields to placeholders by column name
    pub fn bind_record<R: ToRow + ?Sized>(self, record: &R) -> Result<Self> {
        let values = self
            .names
            .iter()
            .map(|name| {
                record
                    .column_value(name)
                    .ok_or_else(|| CqlError::UnboundParameter {
                        statement: self.query.statement().to_string(),
                        column: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.bind_values(values))
    }

    /// Fetch results in pages of `n` rows
    pub fn set_page_size(mut self, n: u32) -> Self {
        self.query.set_page_size(n);
        self.page_size = Some(n);
        self
    }

    /// Effective page size; [`DEFAULT_PAGE_SIZE`] unless one was set
    #[inline]
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Execute and release the query; a released query cannot be reused
    pub fn exec_release(mut self) -> Result<()> {
        cql_trace_statement!(self.query.statement(), self.bound);
        let result = self
            .query
            .exec()
            .map_err(|e| CqlError::execution(self.query.statement(), e));
        self.query.release();
        result
    }

    /// Execute and return an iterator over the result rows
    pub fn iter(self) -> Result<Iterx<Q::Rows>> {
        cql_trace_statement!(self.query.statement(), self.bound);
        let statement = self.query.statement().to_string();
        self.query
            .iter()
            .map(Iterx::new)
            .map_err(|e| CqlError::execution(&statement, e))
    }

    /// The underlying query
    pub fn into_query(self) -> Q {
        self.query
    }
}

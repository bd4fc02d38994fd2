//! Result iteration with deferred-error close semantics.

use crate::error::{CqlError, Result};
use crate::row::FromRow;
use crate::session::Rows;

/// Iterator over the rows of an executed read.
///
/// Rows are mapped through [`FromRow`]; driver errors are reported either
/// while fetching or when the iterator is closed.
#[derive(Debug)]
pub struct Iterx<R> {
    rows: R,
}

impl<R: Rows> Iterx<R> {
    pub fn new(rows: R) -> Self {
        Self { rows }
    }

    /// Materialize all remaining rows into `dest`.
    ///
    /// Stops at the first fetch or mapping failure; rows mapped before the
    /// failure stay in `dest`.
    pub fn select_into<T, C>(&mut self, dest: &mut C) -> Result<()>
    where
        T: FromRow,
        C: Extend<T>,
    {
        while let Some(row) = self.rows.next_row() {
            let row = row.map_err(CqlError::Iteration)?;
            dest.extend(std::iter::once(T::from_row(&row)?));
        }
        Ok(())
    }

    /// Close the iterator, surfacing any error deferred by the driver
    pub fn close(self) -> Result<()> {
        self.rows.close().map_err(CqlError::Iteration)
    }

    /// Materialize into `dest`, then close.
    ///
    /// The iterator is closed even if materialization fails. A
    /// materialization error takes precedence over a close error; a close
    /// error after a clean materialization is still returned.
    pub fn select_and_close<T, C>(mut self, dest: &mut C) -> Result<()>
    where
        T: FromRow,
        C: Extend<T>,
    {
        let selected = self.select_into::<T, C>(dest);
        let closed = self.close();
        selected.and(closed)
    }
}

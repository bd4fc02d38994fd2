//! Statement construction and execution plumbing for cqlgen.
//!
//! - [`value`] / [`row`] - values, result rows and bindable records
//! - [`cmp`] - typed `WHERE` predicates
//! - [`builder`] - `INSERT` / `SELECT` text rendering
//! - [`bind`] / [`iter`] - binding, execution and row materialization
//! - [`session`] - the driver capability everything runs against

pub mod bind;
pub mod builder;
pub mod cmp;
pub mod error;
pub mod iter;
pub mod row;
pub mod session;
mod tracing;
pub mod value;

// Re-export key types and traits
pub use bind::BoundStatement;
pub use cmp::{CmpOp, Comparator};
pub use error::{CqlError, Result};
pub use iter::Iterx;
pub use row::{FromRow, Row, ToRow};
pub use session::{DEFAULT_PAGE_SIZE, DriverError, Query, Rows, Session};
pub use value::{CqlValue, FromCqlValue};

//! CQL statement builders.
//!
//! Builders render statement text plus the ordered list of placeholder
//! names, which [`BoundStatement`](crate::bind::BoundStatement) uses to bind
//! values by name.

pub mod insert;
pub mod select;

pub use insert::InsertBuilder;
pub use select::SelectBuilder;

/// Rendered statement text and its placeholder names, in order
pub type Rendered = (String, Vec<String>);

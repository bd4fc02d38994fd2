//! Tracing utilities for statement and schema observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event with the CQL text and bound value count.
///
/// ```ignore
/// cql_trace_statement!(&statement, values.len());
/// ```
#[macro_export]
macro_rules! cql_trace_statement {
    ($cql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(cql = %$cql, params = $param_count, "cqlgen.statement");
    };
}

/// Emit an info-level tracing event for schema lifecycle (create, alter).
///
/// ```ignore
/// cql_trace_schema!("create", "test.events");
/// ```
#[macro_export]
macro_rules! cql_trace_schema {
    ($event:literal, $name:expr) => {
        #[cfg(feature = "tracing")]
        tracing::info!(event = $event, name = %$name, "cqlgen.schema");
    };
}

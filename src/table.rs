//! The [`Table`] aggregate root.
//!
//! A table is created once from a [`TableDefinition`]: the definition is
//! validated, the `CREATE TABLE` statement is executed, and the derived
//! [`TableSchema`] is frozen on the returned entity. Every later insert and
//! select reuses that schema.

use std::fmt;
use std::sync::{Arc, OnceLock};

use cqlgen_core::builder::{InsertBuilder, SelectBuilder};
use cqlgen_core::{
    BoundStatement, Comparator, CqlError, FromRow, Result, Row, Session, ToRow, cql_trace_schema,
    cql_trace_statement,
};
use cqlgen_types::SchemaError;
use cqlgen_types::ddl::{TableDefinition, TableSchema, TableSql};
use tokio::sync::oneshot;

// =============================================================================
// Table Config
// =============================================================================

/// Name and keyspace of a table to create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableConfig {
    keyspace: Option<String>,
    name: String,
}

impl TableConfig {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            keyspace: None,
            name: name.into(),
        }
    }

    /// Qualify the table with a keyspace
    #[must_use]
    pub fn keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<keyspace>.<name>`, or just `<name>` without a keyspace
    pub fn full_name(&self) -> String {
        match self.keyspace.as_deref().filter(|ks| !ks.is_empty()) {
            Some(keyspace) => format!("{keyspace}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

// =============================================================================
// Select Params
// =============================================================================

/// Predicates, projection, limit and paging for [`Table::select_into`].
///
/// Comparator values are bound in the order the comparators were added,
/// so two range predicates on the same column are fine.
#[derive(Clone, Debug, Default)]
pub struct SelectParams {
    conditions: Vec<Comparator>,
    columns: Vec<String>,
    limit: Option<u32>,
    page_size: Option<u32>,
}

impl SelectParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one predicate; predicates are joined with `AND`
    #[must_use]
    pub fn condition(mut self, comparator: Comparator) -> Self {
        self.conditions.push(comparator);
        self
    }

    #[must_use]
    pub fn conditions(mut self, comparators: impl IntoIterator<Item = Comparator>) -> Self {
        self.conditions.extend(comparators);
        self
    }

    /// Physical columns to project; none selects `*`
    #[must_use]
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Maximum rows to return; `0` means no limit
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Rows per page; `0` keeps the session default
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = (page_size > 0).then_some(page_size);
        self
    }

    fn statement(&self, full_name: &str) -> (String, Vec<String>) {
        let mut builder = SelectBuilder::new(full_name)
            .columns(self.columns.iter().map(String::as_str))
            .r#where(&self.conditions);
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        builder.to_cql()
    }
}

// =============================================================================
// Insert Handle
// =============================================================================

/// Completion signal of an asynchronous insert.
///
/// Waiting consumes the handle, so the outcome can be read exactly once.
/// Dropping the handle does not cancel the insert; the outcome is simply
/// discarded.
#[must_use = "an insert reports failures only through its handle"]
#[derive(Debug)]
pub struct InsertHandle {
    rx: oneshot::Receiver<Result<()>>,
}

impl InsertHandle {
    /// Wait for the insert to finish
    pub async fn wait(self) -> Result<()> {
        self.rx.await.unwrap_or_else(|_| Err(dropped()))
    }

    /// Block the current thread until the insert finishes.
    ///
    /// Must not be called from within an async execution context.
    pub fn blocking_wait(self) -> Result<()> {
        self.rx.blocking_recv().unwrap_or_else(|_| Err(dropped()))
    }
}

fn dropped() -> CqlError {
    CqlError::TaskFailed("insert task ended without reporting a result".into())
}

// =============================================================================
// Table
// =============================================================================

/// A created table bound to the session it was created with.
pub struct Table<S> {
    session: Arc<S>,
    keyspace: Option<String>,
    name: String,
    full_name: String,
    definition: TableDefinition,
    schema: TableSchema,
    columns: OnceLock<Vec<String>>,
    columns_with_data_type: OnceLock<Vec<(String, String)>>,
}

impl<S> fmt::Debug for Table<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("full_name", &self.full_name)
            .field("definition", &self.definition)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<S: Session> Table<S> {
    /// Validate `definition`, create the table and return it.
    ///
    /// The `CREATE TABLE IF NOT EXISTS` statement runs exactly once. No
    /// table is returned if validation or execution fails.
    pub fn create(session: Arc<S>, config: &TableConfig, definition: TableDefinition) -> Result<Self> {
        if definition.is_empty() {
            return Err(SchemaError::MissingDefinition.into());
        }
        if config.name.trim().is_empty() {
            return Err(SchemaError::MissingName("Table").into());
        }

        let schema = TableSchema::from_definition(&definition)?;
        let full_name = config.full_name();
        let statement = TableSql::new(&full_name, &schema).create_table_sql();

        cql_trace_statement!(statement, 0);
        session
            .execute(&statement, Vec::new())
            .map_err(|source| CqlError::StatementExecution {
                statement: statement.clone(),
                source,
            })?;
        cql_trace_schema!("create", full_name);

        Ok(Self {
            session,
            keyspace: config.keyspace.clone().filter(|ks| !ks.is_empty()),
            name: config.name.clone(),
            full_name,
            definition,
            schema,
            columns: OnceLock::new(),
            columns_with_data_type: OnceLock::new(),
        })
    }

    /// Definition the table was created from, keyed by logical name
    #[inline]
    pub fn definition(&self) -> &TableDefinition {
        &self.definition
    }

    #[inline]
    pub fn keyspace(&self) -> Option<&str> {
        self.keyspace.as_deref()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<keyspace>.<name>`, or just the name when there is no keyspace
    #[inline]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[inline]
    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    #[inline]
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Physical column names, in the order inserts bind them
    pub fn columns(&self) -> &[String] {
        self.columns
            .get_or_init(|| self.schema.column_types().keys().cloned().collect())
    }

    /// `(column, data type)` pairs in [`columns`](Self::columns) order
    pub fn columns_with_data_type(&self) -> &[(String, String)] {
        self.columns_with_data_type.get_or_init(|| {
            self.schema
                .column_types()
                .iter()
                .map(|(name, data_type)| (name.clone(), data_type.clone()))
                .collect()
        })
    }

    /// Physical column name for a logical one
    pub fn column(&self, logical: &str) -> Result<&str> {
        self.definition
            .get(logical)
            .map(|column| column.name())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CqlError::UnknownColumn(logical.to_string()))
    }

    /// Run a select and extend `dest` with the mapped rows.
    ///
    /// The row iterator is always closed. If materializing a row fails, that
    /// error is returned even when closing fails as well.
    pub fn select_into<T, C>(&self, params: &SelectParams, mut dest: C) -> Result<C>
    where
        T: FromRow,
        C: Extend<T>,
    {
        let (statement, names) = params.statement(&self.full_name);
        let values = params
            .conditions
            .iter()
            .map(|cmp| cmp.value().clone())
            .collect();

        let query = self.session.query(&statement, Vec::new());
        let mut bound = BoundStatement::new(query, names).bind_values(values);
        if let Some(page_size) = params.page_size {
            bound = bound.set_page_size(page_size);
        }

        bound.iter()?.select_and_close::<T, C>(&mut dest)?;
        Ok(dest)
    }

    /// Run a select and collect the rows into a `Vec`
    pub fn select<T: FromRow>(&self, params: &SelectParams) -> Result<Vec<T>> {
        self.select_into::<T, _>(params, Vec::new())
    }

    /// Run a select and return untyped rows
    pub fn select_rows(&self, params: &SelectParams) -> Result<Vec<Row>> {
        self.select::<Row>(params)
    }
}

impl<S: Session + 'static> Table<S> {
    /// Insert `record` into every table column, asynchronously.
    ///
    /// The statement runs on a blocking worker of the current Tokio runtime,
    /// or on a dedicated thread when called outside one. Fields are bound to
    /// columns by name; a column the record has no value for fails the
    /// insert with [`CqlError::UnboundParameter`].
    pub fn insert<R>(&self, record: R) -> InsertHandle
    where
        R: ToRow + Send + 'static,
    {
        let (statement, names) = InsertBuilder::new(&self.full_name)
            .columns(self.columns().iter().map(String::as_str))
            .to_cql();
        let session = Arc::clone(&self.session);
        let (tx, rx) = oneshot::channel();

        let task = move || {
            let query = session.query(&statement, Vec::new());
            let result = BoundStatement::new(query, names)
                .bind_record(&record)
                .and_then(BoundStatement::exec_release);
            // The receiver may be gone; nothing is waiting for the outcome then.
            let _ = tx.send(result);
        };

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn_blocking(task);
            }
            Err(_) => {
                std::thread::spawn(task);
            }
        }

        InsertHandle { rx }
    }
}

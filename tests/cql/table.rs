use std::sync::Arc;

use cqlgen::prelude::*;
use cqlgen::SchemaError;

use crate::common::MockSession;
use crate::common::schema::{EVENT_DDL, event_config, event_definition, event_table};

fn create(def: TableDefinition) -> (MockSession, Result<Table<MockSession>>) {
    let session = MockSession::new();
    let table = Table::create(Arc::new(session.clone()), &event_config(), def);
    (session, table)
}

fn schema_error(result: Result<Table<MockSession>>) -> SchemaError {
    match result {
        Err(CqlError::Schema(err)) => err,
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn creates_table_once() {
    let session = MockSession::new();
    let table = event_table(session.clone());

    assert_eq!(session.statements(), vec![EVENT_DDL.to_string()]);
    assert_eq!(table.full_name(), "test.test_table");
    assert_eq!(table.keyspace(), Some("test"));
    assert_eq!(table.name(), "test_table");
}

#[test]
fn frozen_schema() {
    let table = event_table(MockSession::new());
    let schema = table.schema();

    assert_eq!(schema.primary_key_clause(), "(month_bucket, timestamp, uuid)");
    assert_eq!(schema.clustering_order_clause(), "(timestamp DESC, uuid ASC)");
    assert_eq!(schema.column_types().len(), 5);
    assert_eq!(schema.data_type("month_bucket"), Some("smallint"));
}

#[test]
fn columns_and_types() {
    let table = event_table(MockSession::new());

    assert_eq!(
        table.columns(),
        ["month_bucket", "textcol1", "textcol2", "timestamp", "uuid"]
    );
    assert_eq!(
        table.columns_with_data_type()[0],
        ("month_bucket".to_string(), "smallint".to_string())
    );
    // Cached after the first call
    assert!(std::ptr::eq(table.columns(), table.columns()));
}

#[test]
fn resolves_logical_column() {
    let table = event_table(MockSession::new());

    assert_eq!(table.column("monthBucket").unwrap(), "month_bucket");
    assert_eq!(table.column("text1").unwrap(), "textcol1");
    assert!(matches!(
        table.column("month_bucket"),
        Err(CqlError::UnknownColumn(name)) if name == "month_bucket"
    ));
}

#[test]
fn order_without_position() {
    let mut def = event_definition();
    def.insert("text1".into(), ColumnDef::new("textcol1", "text").order("ASC"));

    let (session, result) = create(def);
    assert!(matches!(
        schema_error(result),
        SchemaError::InvalidPrimaryKeySpec { column, .. } if column == "textcol1"
    ));
    assert!(session.statements().is_empty());
}

#[test]
fn order_on_partition_key() {
    let mut def = event_definition();
    def.insert(
        "monthBucket".into(),
        ColumnDef::new("month_bucket", "smallint").primary_key(0).desc(),
    );

    let (session, result) = create(def);
    assert!(matches!(
        schema_error(result),
        SchemaError::InvalidPrimaryKeySpec { column, .. } if column == "month_bucket"
    ));
    assert!(session.statements().is_empty());
}

#[test]
fn empty_order_on_partition_key_is_allowed() {
    let mut def = event_definition();
    def.insert(
        "monthBucket".into(),
        ColumnDef::new("month_bucket", "smallint").primary_key(0).order(""),
    );

    let (_, result) = create(def);
    assert!(result.is_ok());
}

#[test]
fn invalid_order_value() {
    let mut def = event_definition();
    def.insert(
        "timestamp".into(),
        ColumnDef::new("timestamp", "timestamp").primary_key(1).order("DOWN"),
    );

    let (_, result) = create(def);
    assert_eq!(
        schema_error(result),
        SchemaError::InvalidOrderValue {
            column: "timestamp".into(),
            value: "DOWN".into(),
        }
    );
}

#[test]
fn lowercase_order_is_accepted() {
    let mut def = event_definition();
    def.insert(
        "timestamp".into(),
        ColumnDef::new("timestamp", "timestamp").primary_key(1).order("desc"),
    );

    let (session, result) = create(def);
    result.unwrap();
    assert!(session.statements()[0].ends_with("(timestamp DESC, uuid ASC)"));
}

#[test]
fn duplicate_position() {
    let mut def = event_definition();
    def.insert("text1".into(), ColumnDef::new("textcol1", "text").primary_key(1));

    let (session, result) = create(def);
    match schema_error(result) {
        SchemaError::DuplicatePrimaryKeyPosition {
            position,
            previous,
            current,
        } => {
            assert_eq!(position, 1);
            let mut names = [previous, current];
            names.sort();
            assert_eq!(names, ["textcol1".to_string(), "timestamp".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(session.statements().is_empty());
}

#[test]
fn order_without_position_on_shared_column_name() {
    let mut def = TableDefinition::new();
    def.insert("a".into(), ColumnDef::new("id", "uuid").primary_key(0));
    def.insert("b".into(), ColumnDef::new("id", "text").order("ASC"));

    let (session, result) = create(def);
    assert!(matches!(
        schema_error(result),
        SchemaError::InvalidPrimaryKeySpec { column, .. } if column == "id"
    ));
    assert!(session.statements().is_empty());
}

#[test]
fn duplicate_position_on_shared_column_name() {
    let mut def = TableDefinition::new();
    def.insert("a".into(), ColumnDef::new("id", "uuid").primary_key(0));
    def.insert("b".into(), ColumnDef::new("id", "uuid").primary_key(0));

    let (session, result) = create(def);
    assert!(matches!(
        schema_error(result),
        SchemaError::DuplicatePrimaryKeyPosition { position: 0, .. }
    ));
    assert!(session.statements().is_empty());
}

#[test]
fn gap_in_positions() {
    let mut def = event_definition();
    def.insert("uuid".into(), ColumnDef::new("uuid", "uuid").primary_key(3));

    let (_, result) = create(def);
    assert_eq!(
        schema_error(result),
        SchemaError::NonContiguousPrimaryKey { missing: 2 }
    );
}

#[test]
fn missing_partition_key() {
    let mut def = TableDefinition::new();
    def.insert("ts".into(), ColumnDef::new("ts", "timestamp").primary_key(1));

    let (_, result) = create(def);
    assert_eq!(schema_error(result), SchemaError::MissingPartitionKey);
}

#[test]
fn empty_definition() {
    let (session, result) = create(TableDefinition::new());
    assert_eq!(schema_error(result), SchemaError::MissingDefinition);
    assert!(session.statements().is_empty());
}

#[test]
fn blank_name() {
    let session = MockSession::new();
    let result = Table::create(
        Arc::new(session.clone()),
        &TableConfig::new("  ").keyspace("test"),
        event_definition(),
    );
    assert_eq!(schema_error(result), SchemaError::MissingName("Table"));
    assert!(session.statements().is_empty());
}

#[test]
fn without_keyspace() {
    let session = MockSession::new();
    let mut def = TableDefinition::new();
    def.insert("id".into(), ColumnDef::new("id", "uuid").primary_key(0));
    def.insert("name".into(), ColumnDef::new("name", "text"));

    let table = Table::create(Arc::new(session.clone()), &TableConfig::new("users"), def).unwrap();
    assert_eq!(table.keyspace(), None);
    assert_eq!(table.full_name(), "users");
    assert_eq!(
        session.statements(),
        vec!["CREATE TABLE IF NOT EXISTS users (id uuid, name text, PRIMARY KEY (id))".to_string()]
    );
}

#[test]
fn execution_failure() {
    let session = MockSession::new();
    session.fail_exec("keyspace test does not exist");

    let result = Table::create(Arc::new(session.clone()), &event_config(), event_definition());
    match result {
        Err(CqlError::StatementExecution { statement, source }) => {
            assert_eq!(statement, EVENT_DDL);
            assert_eq!(source.to_string(), "keyspace test does not exist");
        }
        other => panic!("expected execution error, got {other:?}"),
    }
    assert_eq!(session.statements().len(), 1);
}

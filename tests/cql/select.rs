use cqlgen::prelude::*;
use cqlgen::DEFAULT_PAGE_SIZE;

use crate::common::MockSession;
use crate::common::schema::{BucketTime, event_table};

fn bucket_row(timestamp: i64) -> Row {
    Row::from_pairs([
        ("month_bucket", CqlValue::SmallInt(9)),
        ("timestamp", CqlValue::Timestamp(timestamp)),
    ])
}

fn bucket_params(table: &Table<MockSession>) -> SelectParams {
    let month_bucket = table.column("monthBucket").unwrap();
    let timestamp = table.column("timestamp").unwrap();
    SelectParams::new()
        .columns([month_bucket, timestamp])
        .condition(eq(month_bucket, 9))
}

#[test]
fn renders_statement_with_limit() {
    let session = MockSession::new();
    let table = event_table(session.clone());

    let _: Vec<Row> = table.select(&bucket_params(&table).limit(6)).unwrap();

    let select = session.last();
    assert_eq!(
        select.statement,
        "SELECT month_bucket,timestamp FROM test.test_table WHERE month_bucket=? LIMIT 6"
    );
    assert_eq!(select.values, vec![CqlValue::Int(9)]);
}

#[test]
fn renders_statement_without_limit() {
    let session = MockSession::new();
    let table = event_table(session.clone());

    let _: Vec<Row> = table.select(&bucket_params(&table)).unwrap();

    assert_eq!(
        session.last().statement,
        "SELECT month_bucket,timestamp FROM test.test_table WHERE month_bucket=?"
    );
}

#[test]
fn page_size() {
    let session = MockSession::new();
    let table = event_table(session.clone());

    let _: Vec<Row> = table.select(&bucket_params(&table).page_size(10)).unwrap();
    assert_eq!(session.last().page_size, 10);

    let _: Vec<Row> = table.select(&bucket_params(&table).page_size(0)).unwrap();
    assert_eq!(session.last().page_size, DEFAULT_PAGE_SIZE);

    let _: Vec<Row> = table.select(&bucket_params(&table)).unwrap();
    assert_eq!(session.last().page_size, 5000);
}

#[test]
fn maps_rows_into_records() {
    let session = MockSession::new().with_rows([bucket_row(1), bucket_row(2)]);
    let table = event_table(session.clone());

    let rows: Vec<BucketTime> = table.select(&bucket_params(&table)).unwrap();
    assert_eq!(
        rows,
        vec![
            BucketTime {
                month_bucket: 9,
                timestamp: 1
            },
            BucketTime {
                month_bucket: 9,
                timestamp: 2
            },
        ]
    );
    assert_eq!(session.state().iterators_closed, 1);
}

#[test]
fn select_into_existing_container() {
    let session = MockSession::new().with_rows([bucket_row(3)]);
    let table = event_table(session.clone());

    let existing = vec![BucketTime {
        month_bucket: 1,
        timestamp: 0,
    }];
    let rows = table
        .select_into::<BucketTime, _>(&bucket_params(&table), existing)
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].timestamp, 3);
}

#[test]
fn range_on_one_column_binds_in_order() {
    let session = MockSession::new();
    let table = event_table(session.clone());

    let ts = table.column("timestamp").unwrap();
    let params = SelectParams::new()
        .condition(eq("month_bucket", 9))
        .condition(gte(ts, 10_i64))
        .condition(lt(ts, 20_i64));
    let _: Vec<Row> = table.select(&params).unwrap();

    let select = session.last();
    assert_eq!(
        select.statement,
        "SELECT * FROM test.test_table WHERE month_bucket=? AND timestamp>=? AND timestamp<?"
    );
    assert_eq!(
        select.values,
        vec![CqlValue::Int(9), CqlValue::BigInt(10), CqlValue::BigInt(20)]
    );
}

#[test]
fn in_binds_list() {
    let session = MockSession::new();
    let table = event_table(session.clone());

    let params = SelectParams::new().condition(in_list("month_bucket", [8_i16, 9]));
    let _: Vec<Row> = table.select(&params).unwrap();

    let select = session.last();
    assert_eq!(select.statement, "SELECT * FROM test.test_table WHERE month_bucket IN ?");
    assert_eq!(
        select.values,
        vec![CqlValue::List(vec![CqlValue::SmallInt(8), CqlValue::SmallInt(9)])]
    );
}

#[test]
fn execution_error() {
    let session = MockSession::new();
    let table = event_table(session.clone());
    session.fail_iter("unavailable");

    let err = table.select::<Row>(&bucket_params(&table)).unwrap_err();
    assert!(matches!(err, CqlError::StatementExecution { .. }));
}

#[test]
fn closes_iterator_on_materialization_error() {
    let session = MockSession::new().with_rows([bucket_row(1)]);
    session.push_row_error("page fetch failed");
    let table = event_table(session.clone());

    let err = table.select::<BucketTime>(&bucket_params(&table)).unwrap_err();
    assert!(matches!(err, CqlError::Iteration(ref e) if e.to_string() == "page fetch failed"));
    assert_eq!(session.state().iterators_closed, 1);
}

#[test]
fn materialization_error_wins_over_close_error() {
    let session = MockSession::new().with_rows([Row::from_pairs([("month_bucket", "nine")])]);
    session.fail_close("close failed");
    let table = event_table(session.clone());

    let err = table.select::<BucketTime>(&bucket_params(&table)).unwrap_err();
    assert!(matches!(err, CqlError::Mapping(_)));
    assert_eq!(session.state().iterators_closed, 1);
}

#[test]
fn close_error_is_reported() {
    let session = MockSession::new().with_rows([bucket_row(1)]);
    session.fail_close("close failed");
    let table = event_table(session.clone());

    let err = table.select::<BucketTime>(&bucket_params(&table)).unwrap_err();
    assert!(matches!(err, CqlError::Iteration(ref e) if e.to_string() == "close failed"));
}

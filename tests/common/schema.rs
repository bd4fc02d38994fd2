use std::sync::Arc;

use cqlgen::prelude::*;

use super::MockSession;

cql_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Event {
        pub text1: String => "textcol1",
        pub text2: String => "textcol2",
        pub uuid: String => "uuid",
        pub timestamp: i64 => "timestamp",
        pub month_bucket: i16 => "month_bucket",
    }
}

cql_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct BucketTime {
        pub month_bucket: i16 => "month_bucket",
        pub timestamp: i64 => "timestamp",
    }
}

/// `monthBucket` partition key, `timestamp DESC` and `uuid` clustering
/// columns and two plain text columns
pub fn event_definition() -> TableDefinition {
    let mut def = TableDefinition::new();
    def.insert("text1".into(), ColumnDef::new("textcol1", "text"));
    def.insert("text2".into(), ColumnDef::new("textcol2", "text"));
    def.insert("uuid".into(), ColumnDef::new("uuid", "uuid").primary_key(2));
    def.insert(
        "timestamp".into(),
        ColumnDef::new("timestamp", "timestamp").primary_key(1).order("DESC"),
    );
    def.insert(
        "monthBucket".into(),
        ColumnDef::new("month_bucket", "smallint").primary_key(0),
    );
    def
}

pub const EVENT_DDL: &str = "CREATE TABLE IF NOT EXISTS test.test_table (\
    month_bucket smallint, textcol1 text, textcol2 text, timestamp timestamp, uuid uuid, \
    PRIMARY KEY (month_bucket, timestamp, uuid)) \
    WITH CLUSTERING ORDER BY (timestamp DESC, uuid ASC)";

pub fn event_config() -> TableConfig {
    TableConfig::new("test_table").keyspace("test")
}

/// Creates the event table on a fresh mock session
pub fn event_table(session: MockSession) -> Table<MockSession> {
    Table::create(Arc::new(session), &event_config(), event_definition()).unwrap()
}

pub fn sample_event(n: i64) -> Event {
    Event {
        text1: format!("text1-{n}"),
        text2: format!("text2-{n}"),
        uuid: format!("uuid-{n}"),
        timestamp: 1_525_132_800_000 + n,
        month_bucket: 9,
    }
}

use std::io::Write;
use std::sync::Arc;

use cqlgen::config::{CONFIG_FILE, Config, ConfigError};

use crate::common::MockSession;
use crate::common::schema::EVENT_DDL;

const CONFIG: &str = r#"
[keyspace]
name = "test"
replication_strategy = "NetworkTopologyStrategy"

[keyspace.replication_strategy_args]
datacenter1 = 1

[[tables]]
name = "test_table"

[tables.columns.text1]
name = "textcol1"
data_type = "text"

[tables.columns.text2]
name = "textcol2"
data_type = "text"

[tables.columns.uuid]
name = "uuid"
data_type = "uuid"
primary_key_index = 2

[tables.columns.timestamp]
name = "timestamp"
data_type = "timestamp"
primary_key_index = 1
primary_key_order = "DESC"

[tables.columns.monthBucket]
name = "month_bucket"
data_type = "smallint"
primary_key_index = 0
"#;

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    std::fs::File::create(&path)
        .unwrap()
        .write_all(CONFIG.as_bytes())
        .unwrap();

    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.keyspace_config().unwrap().name, "test");
    assert_eq!(config.tables.len(), 1);
    assert_eq!(config.tables[0].columns.len(), 5);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_path(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(_)));
}

#[test]
fn invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[keyspace\nname = ").unwrap();

    let err = Config::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)));
}

#[test]
fn applies_keyspace_and_tables() {
    let session = MockSession::new();
    let config: Config = CONFIG.parse().unwrap();

    let applied = config.apply(Arc::new(session.clone())).unwrap();

    assert_eq!(
        session.statements(),
        vec![
            "CREATE KEYSPACE IF NOT EXISTS test WITH replication = \
             {'class': 'NetworkTopologyStrategy', 'datacenter1': 1}"
                .to_string(),
            EVENT_DDL.to_string(),
        ]
    );
    assert_eq!(applied.keyspace.as_ref().map(|ks| ks.name()), Some("test"));

    let table = applied.table("test_table").unwrap();
    assert_eq!(table.column("monthBucket").unwrap(), "month_bucket");
}

#[test]
fn apply_stops_on_invalid_table() {
    let session = MockSession::new();
    let config = Config::from_toml_str(&CONFIG.replace("primary_key_index = 2", "primary_key_index = 4"))
        .unwrap();

    assert!(config.apply(Arc::new(session.clone())).is_err());
    // Keyspace was created before the table failed validation
    assert_eq!(session.statements().len(), 1);
}

use chrono::{DateTime, Utc};
use tabula::{driver::SqlFlavor, Db};
use tests::*;

#[derive(Debug, Default, tabula::Model)]
struct Article {
    id: i64,
    title: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[tokio::test]
async fn connect_in_memory_sqlite() {
    let db = assert_ok!(Db::connect("sqlite::memory:").await);
    assert_eq!(db.capability().flavor, SqlFlavor::Sqlite);

    // Nothing has created the table
    let mut a = Article {
        title: "t".to_string(),
        text: "x".to_string(),
        ..Default::default()
    };
    let err = assert_err_is!(db.save(&mut a).await, is_driver_operation_failed);
    assert!(!err.is_constraint_violation());
}

#[tokio::test]
async fn connect_sqlite_file() {
    let path = std::env::temp_dir().join(format!("tabula-connect-{}.db", std::process::id()));
    let url = format!("sqlite:{}", path.display());

    let db = assert_ok!(Db::connect(&url).await);
    assert_eq!(db.capability().flavor, SqlFlavor::Sqlite);

    drop(db);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn malformed_url() {
    assert_err_is!(Db::connect("not a url").await, is_invalid_connection_url);
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = assert_err_is!(
        Db::connect("mysql://localhost/blog").await,
        is_invalid_connection_url
    );
    assert!(err.to_string().contains("scheme=mysql"), "{err}");
}

#[tokio::test]
async fn sqlite_without_a_path() {
    assert_err_is!(Db::connect("sqlite:").await, is_invalid_connection_url);
}

#[tokio::test]
async fn registered_models_are_checked_on_connect() {
    let mut builder = models!(Article);
    assert_ok!(builder.connect("sqlite::memory:").await);
}

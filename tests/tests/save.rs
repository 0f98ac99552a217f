use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tabula_core::stmt::Value;
use tests::*;

#[derive(Debug, Default, tabula::Model)]
struct Article {
    id: i64,
    title: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn article(title: &str, text: &str) -> Article {
    Article {
        title: title.to_string(),
        text: text.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn save_assigns_identity_and_timestamps() {
    let test = Test::articles();
    let mut a = article("hello", "world");

    assert_ok!(test.db.save(&mut a).await);

    assert_eq!(a.id, 1);
    assert_eq!(a.title, "hello");
    assert_eq!(a.text, "world");
    assert_ne!(a.created_at, DateTime::<Utc>::default());
    assert_eq!(a.created_at, a.updated_at);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(
        sql,
        "INSERT INTO articles (title, text, created_at, updated_at) VALUES (?1, ?2, ?3, ?4) RETURNING *"
    );
    assert_eq!(params.len(), 4);
    assert_eq!(params[0], Value::from("hello"));
    assert_eq!(params[1], Value::from("world"));
    assert!(matches!(params[2], Value::Timestamp(_)));
    assert_eq!(params[2], params[3]);
    assert!(test.log.is_empty());
}

#[tokio::test]
async fn identities_are_assigned_in_order() {
    let test = Test::articles();

    let mut first = article("one", "1");
    let mut second = article("two", "2");

    assert_ok!(test.db.save(&mut first).await);
    assert_ok!(test.db.save(&mut second).await);

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(test.log.count_prefixed("INSERT"), 2);
}

#[tokio::test]
async fn save_keeps_explicit_timestamps() {
    let test = Test::articles();
    let created = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();

    let mut a = Article {
        created_at: created,
        ..article("dated", "text")
    };

    assert_ok!(test.db.save(&mut a).await);

    assert_eq!(a.created_at, created);
    assert!(a.updated_at > created);
}

#[tokio::test]
async fn save_writes_explicit_identity() {
    let test = Test::articles();
    let mut a = Article {
        id: 40,
        ..article("pinned", "text")
    };

    assert_ok!(test.db.save(&mut a).await);
    assert_eq!(a.id, 40);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(
        sql,
        "INSERT INTO articles (id, title, text, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING *"
    );
    assert_eq!(params[0], Value::I64(40));
}

#[tokio::test]
async fn unset_fields_are_not_written() {
    let test = Test::articles();

    // `text` is empty and so omitted, which violates NOT NULL
    let mut a = article("only a title", "");

    let err = assert_err_is!(test.db.save(&mut a).await, is_constraint_violation);
    assert!(err.is_driver_operation_failed());
    assert!(err.to_string().starts_with("Article.save(): "), "{err}");

    let (sql, _) = test.log.pop_sql();
    assert_eq!(
        sql,
        "INSERT INTO articles (title, created_at, updated_at) VALUES (?1, ?2, ?3) RETURNING *"
    );

    // The record is not reloaded on failure
    assert_eq!(a.id, 0);
    assert_eq!(a.created_at, DateTime::<Utc>::default());
}

#[tokio::test]
async fn duplicate_identity_is_a_constraint_violation() {
    let test = Test::articles();

    let mut first = Article {
        id: 7,
        ..article("first", "text")
    };
    let mut second = Article {
        id: 7,
        ..article("second", "text")
    };

    assert_ok!(test.db.save(&mut first).await);
    assert_err_is!(test.db.save(&mut second).await, is_constraint_violation);
    assert_eq!(second.title, "second");
}

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use std::time::Duration;
use tabula_core::stmt::Value;
use tests::*;

#[derive(Debug, Default, Clone, tabula::Model)]
struct Article {
    id: i64,
    title: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

async fn saved(test: &Test, title: &str, text: &str) -> Article {
    let mut a = Article {
        title: title.to_string(),
        text: text.to_string(),
        ..Default::default()
    };

    assert_ok!(test.db.save(&mut a).await);
    test.log.clear();
    a
}

#[tokio::test]
async fn update_refreshes_updated_at_only() {
    let test = Test::articles();
    let mut a = saved(&test, "draft", "body").await;
    let before = a.clone();

    tokio::time::sleep(Duration::from_millis(5)).await;

    a.title = "published".to_string();
    assert_ok!(test.db.update(&mut a).await);

    assert_eq!(a.id, before.id);
    assert_eq!(a.title, "published");
    assert_eq!(a.text, "body");
    assert_eq!(a.created_at, before.created_at);
    assert!(a.updated_at > before.updated_at);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(
        sql,
        "UPDATE articles SET title = ?1, text = ?2, updated_at = ?3 WHERE id = ?4 RETURNING *"
    );
    assert_eq!(params[0], Value::from("published"));
    assert_eq!(params[1], Value::from("body"));
    assert!(matches!(params[2], Value::Timestamp(_)));
    assert_eq!(params[3], Value::I64(before.id));
}

#[tokio::test]
async fn update_leaves_unset_columns_alone() {
    let test = Test::articles();
    let a = saved(&test, "draft", "body").await;

    let mut patch = Article {
        id: a.id,
        title: "renamed".to_string(),
        ..Default::default()
    };

    assert_ok!(test.db.update(&mut patch).await);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(
        sql,
        "UPDATE articles SET title = ?1, updated_at = ?2 WHERE id = ?3 RETURNING *"
    );
    assert_eq!(params.len(), 3);
    assert_eq!(params[2], Value::I64(a.id));

    // The reload fills in everything the patch left out
    assert_eq!(patch.title, "renamed");
    assert_eq!(patch.text, "body");
    assert_eq!(patch.created_at, a.created_at);
}

#[tokio::test]
async fn update_ignores_a_changed_created_at() {
    let test = Test::articles();
    let mut a = saved(&test, "draft", "body").await;
    let created_at = a.created_at;

    a.created_at = Utc::now() + chrono::Duration::days(3);
    assert_ok!(test.db.update(&mut a).await);

    assert_eq!(a.created_at, created_at);
    assert!(!test.log.sql()[0].contains("created_at"));
}

#[tokio::test]
async fn update_without_identity_issues_nothing() {
    let test = Test::articles();

    let mut a = Article {
        title: "orphan".to_string(),
        ..Default::default()
    };

    let err = assert_err_is!(test.db.update(&mut a).await, is_missing_identity);
    assert_eq!(
        err.to_string(),
        "Article.update(): missing identity: Article has no identity value"
    );
    assert!(test.log.is_empty());
}

#[tokio::test]
async fn update_of_a_missing_row_is_not_found() {
    let test = Test::articles();

    let mut a = Article {
        id: 99,
        title: "ghost".to_string(),
        ..Default::default()
    };

    assert_err_is!(test.db.update(&mut a).await, is_record_not_found);
    assert_eq!(a.title, "ghost");
    assert_eq!(a.updated_at, DateTime::<Utc>::default());
    assert_eq!(test.log.len(), 1);
}

const NOTES: &str = "
    CREATE TABLE notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        body TEXT NOT NULL
    );
";

#[derive(Debug, Default, tabula::Model)]
struct Note {
    #[key]
    id: Option<i64>,
    body: String,
}

#[tokio::test]
async fn zero_identity_is_missing_even_when_set() {
    let test = Test::new(&mut models!(Note), NOTES);

    let mut note = Note {
        id: Some(0),
        body: "zero".to_string(),
    };

    assert_err_is!(test.db.update(&mut note).await, is_missing_identity);
    assert!(test.log.is_empty());
    assert_eq!(note.id, Some(0));
}

#[tokio::test]
async fn zero_identity_is_assigned_on_save() {
    let test = Test::new(&mut models!(Note), NOTES);

    let mut note = Note {
        id: Some(0),
        body: "fresh".to_string(),
    };

    assert_ok!(test.db.save(&mut note).await);
    assert_eq!(note.id, Some(1));

    let (sql, params) = test.log.pop_sql();
    assert_eq!(sql, "INSERT INTO notes (body) VALUES (?1) RETURNING *");
    assert_eq!(params, [Value::from("fresh")]);
}

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tabula_core::stmt::Value;
use tests::*;

#[derive(Debug, Default, Clone, PartialEq, tabula::Model)]
struct Article {
    id: i64,
    title: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

async fn seed(test: &Test, titles: &[&str]) -> Vec<Article> {
    let mut saved = vec![];

    for title in titles {
        let mut a = Article {
            title: title.to_string(),
            text: format!("{title} body"),
            ..Default::default()
        };
        assert_ok!(test.db.save(&mut a).await);
        saved.push(a);
    }

    test.log.clear();
    saved
}

#[tokio::test]
async fn find_loads_every_field() {
    let test = Test::articles();
    let saved = seed(&test, &["first", "second"]).await;

    let mut found = Article::default();
    assert_ok!(test.db.find(&mut found, 2).await);

    assert_eq!(found, saved[1]);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(sql, "SELECT * FROM articles WHERE id = ?1");
    assert_eq!(params, [Value::I64(2)]);
}

#[tokio::test]
async fn find_overwrites_the_target() {
    let test = Test::articles();
    let saved = seed(&test, &["stored"]).await;

    let mut target = Article {
        id: 5,
        title: "stale".to_string(),
        ..Default::default()
    };

    assert_ok!(test.db.find(&mut target, saved[0].id).await);
    assert_eq!(target, saved[0]);
}

#[tokio::test]
async fn find_missing_leaves_target_unchanged() {
    let test = Test::articles();
    seed(&test, &["only"]).await;

    let mut target = Article {
        title: "keep".to_string(),
        ..Default::default()
    };

    let err = assert_err_is!(test.db.find(&mut target, 42).await, is_record_not_found);
    assert_eq!(
        err.to_string(),
        "Article.find(): id=42: record not found: table=articles returned no rows"
    );

    assert_eq!(
        target,
        Article {
            title: "keep".to_string(),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn all_appends_in_table_order() {
    let test = Test::articles();
    let saved = seed(&test, &["a", "b", "c"]).await;

    let existing = Article {
        title: "already here".to_string(),
        ..Default::default()
    };
    let mut records = vec![existing.clone()];

    assert_ok!(test.db.all(&mut records).await);

    assert_eq!(records.len(), 4);
    assert_eq!(records[0], existing);
    assert_eq!(&records[1..], &saved[..]);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(sql, "SELECT * FROM articles");
    assert!(params.is_empty());
}

#[tokio::test]
async fn all_on_an_empty_table() {
    let test = Test::articles();

    let mut records: Vec<Article> = vec![];
    assert_ok!(test.db.all(&mut records).await);

    assert!(records.is_empty());
    assert_eq!(test.log.len(), 1);
}

#[tokio::test]
async fn all_is_all_or_nothing() {
    let test = Test::articles();
    seed(&test, &["good"]).await;

    assert_ok!(test
        .sqlite
        .execute_batch("INSERT INTO articles (title, text, created_at, updated_at) VALUES ('bad', 'x', 'yesterday', 'today')"));

    let mut records: Vec<Article> = vec![];
    assert_err!(test.db.all(&mut records).await);
    assert!(records.is_empty());
}

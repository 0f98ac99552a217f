use chrono::{DateTime, Utc};
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

async fn seed(test: &Test, count: usize) -> Vec<Article> {
    let mut saved = vec![];

    for i in 0..count {
        let mut a = Article {
            title: format!("article {i}"),
            text: "body".to_string(),
            ..Default::default()
        };
        assert_ok!(test.db.save(&mut a).await);
        saved.push(a);
    }

    test.log.clear();
    saved
}

#[tokio::test]
async fn destroy_deletes_by_identity() {
    let test = Test::articles();
    let saved = seed(&test, 3).await;

    assert_ok!(test.db.destroy(&saved[1]).await);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(sql, "DELETE FROM articles WHERE id = ?1");
    assert_eq!(params, [Value::I64(2)]);
    assert!(test.log.is_empty());

    let mut gone = Article::default();
    assert_err_is!(test.db.find(&mut gone, 2).await, is_record_not_found);

    let mut rest: Vec<Article> = vec![];
    assert_ok!(test.db.all(&mut rest).await);
    assert_eq!(rest.iter().map(|a| a.id).collect::<Vec<_>>(), [1, 3]);
}

#[tokio::test]
async fn destroy_without_identity_issues_nothing() {
    let test = Test::articles();
    seed(&test, 1).await;

    let a = Article {
        title: "never saved".to_string(),
        ..Default::default()
    };

    let err = assert_err_is!(test.db.destroy(&a).await, is_missing_identity);
    assert!(err.to_string().starts_with("Article.destroy(): "), "{err}");
    assert!(test.log.is_empty());
}

#[tokio::test]
async fn destroying_a_missing_row_succeeds() {
    let test = Test::articles();
    let saved = seed(&test, 1).await;

    assert_ok!(test.db.destroy(&saved[0]).await);
    assert_ok!(test.db.destroy(&saved[0]).await);

    assert_eq!(test.log.count_prefixed("DELETE"), 2);
    assert_eq!(test.log.pop_count(), 1);
    assert_eq!(test.log.pop_count(), 0);
}

#[derive(Debug, Default, tabula::Model)]
struct Note {
    #[key]
    id: Option<i64>,
    body: String,
}

#[tokio::test]
async fn destroy_with_zero_identity_issues_nothing() {
    let test = Test::new(
        &mut models!(Note),
        "CREATE TABLE notes (id INTEGER PRIMARY KEY AUTOINCREMENT, body TEXT NOT NULL);",
    );

    let note = Note {
        id: Some(0),
        body: "zero".to_string(),
    };

    assert_err_is!(test.db.destroy(&note).await, is_missing_identity);
    assert!(test.log.is_empty());
}

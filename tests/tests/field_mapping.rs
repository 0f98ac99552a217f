use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tabula::Model;
use tabula_core::stmt::Value;
use tests::*;

const PEOPLE: &str = "
    CREATE TABLE people (
        person_id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        nickname TEXT,
        age INTEGER,
        born TEXT NOT NULL
    );
";

#[derive(Debug, Default, tabula::Model)]
#[table = "people"]
struct Person {
    #[key]
    person_id: i64,

    #[column("full_name")]
    name: String,

    nickname: Option<String>,

    age: Option<i32>,

    #[skip]
    scratch: String,

    #[created_at]
    born: DateTime<Utc>,
}

#[test]
fn binding_follows_attributes() {
    let binding = assert_ok!(Person::binding());

    assert_eq!(binding.model, "Person");
    assert_eq!(binding.table, "people");
    assert_eq!(binding.identity_column(), "person_id");

    let columns: Vec<_> = binding.fields.iter().map(|f| f.column.as_str()).collect();
    assert_eq!(columns, ["person_id", "full_name", "nickname", "age", "born"]);

    let field = assert_ok!(binding
        .field_by_column("full_name")
        .ok_or("no full_name field"));
    assert_eq!(field.name, "name");
}

#[tokio::test]
async fn none_is_not_written() {
    let test = Test::new(&mut models!(Person), PEOPLE);

    let mut p = Person {
        name: "Alice".to_string(),
        ..Default::default()
    };

    assert_ok!(test.db.save(&mut p).await);

    let (sql, params) = test.log.pop_sql();
    assert_eq!(
        sql,
        "INSERT INTO people (full_name, born) VALUES (?1, ?2) RETURNING *"
    );
    assert_eq!(params[0], Value::from("Alice"));

    assert_eq!(p.person_id, 1);
    assert_eq!(p.nickname, None);
    assert_eq!(p.age, None);
    assert_ne!(p.born, DateTime::<Utc>::default());
}

#[tokio::test]
async fn some_round_trips() {
    let test = Test::new(&mut models!(Person), PEOPLE);

    let mut p = Person {
        name: "Robert".to_string(),
        nickname: Some("Bob".to_string()),
        age: Some(41),
        ..Default::default()
    };

    assert_ok!(test.db.save(&mut p).await);

    let mut found = Person::default();
    assert_ok!(test.db.find(&mut found, p.person_id).await);

    assert_eq!(found.name, "Robert");
    assert_eq!(found.nickname.as_deref(), Some("Bob"));
    assert_eq!(found.age, Some(41));
    assert_eq!(found.born, p.born);
}

#[tokio::test]
async fn skipped_fields_are_never_touched() {
    let test = Test::new(&mut models!(Person), PEOPLE);

    let mut p = Person {
        name: "Carol".to_string(),
        scratch: "in memory only".to_string(),
        ..Default::default()
    };

    assert_ok!(test.db.save(&mut p).await);
    assert!(!test.log.sql()[0].contains("scratch"));

    // Reloading keeps the value; loading a fresh record defaults it
    assert_eq!(p.scratch, "in memory only");

    let mut everyone: Vec<Person> = vec![];
    assert_ok!(test.db.all(&mut everyone).await);
    assert_eq!(everyone[0].scratch, "");
}

#[tokio::test]
async fn no_updated_at_field_is_fine() {
    let test = Test::new(&mut models!(Person), PEOPLE);

    let mut p = Person {
        name: "Dave".to_string(),
        ..Default::default()
    };
    assert_ok!(test.db.save(&mut p).await);
    test.log.clear();

    p.age = Some(30);
    assert_ok!(test.db.update(&mut p).await);

    let (sql, _) = test.log.pop_sql();
    assert_eq!(
        sql,
        "UPDATE people SET full_name = ?1, age = ?2 WHERE person_id = ?3 RETURNING *"
    );
    assert_eq!(p.age, Some(30));
}

/// A record whose table lacks one of its columns.
#[derive(Debug, Default, tabula::Model)]
#[table = "articles"]
struct Headline {
    id: i64,
    title: String,
    text: String,
    subtitle: String,
}

#[tokio::test]
async fn missing_column_in_row_is_a_shape_error() {
    let test = Test::articles();

    assert_ok!(test.sqlite.execute_batch(
        "INSERT INTO articles (title, text, created_at, updated_at) \
         VALUES ('t', 'x', '2024-01-01T00:00:00.000000Z', '2024-01-01T00:00:00.000000Z')"
    ));

    let mut h = Headline::default();
    let err = assert_err_is!(test.db.find(&mut h, 1).await, is_shape);

    assert_eq!(
        err.shape_kind(),
        Some(&tabula::ShapeErrorKind::MissingColumn {
            column: "subtitle".to_string()
        })
    );
    assert_eq!(h.id, 0);
}

#[derive(Debug, Default, tabula::Model)]
struct Reading {
    id: i64,
    celsius: f64,
}

#[tokio::test]
async fn integral_numeric_loads_into_f64() {
    let test = Test::new(
        &mut models!(Reading),
        "CREATE TABLE readings (id INTEGER PRIMARY KEY AUTOINCREMENT, celsius NUMERIC NOT NULL);",
    );

    let mut reading = Reading {
        celsius: 21.0,
        ..Default::default()
    };
    assert_ok!(test.db.save(&mut reading).await);
    assert_eq!(reading.celsius, 21.0);

    let mut found = Reading::default();
    assert_ok!(test.db.find(&mut found, reading.id).await);
    assert_eq!(found.celsius, 21.0);
}

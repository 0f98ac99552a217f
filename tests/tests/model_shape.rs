use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tabula::{Model, ShapeErrorKind};
use tests::*;

#[derive(Debug, Default, tabula::Model)]
struct Tag {
    name: String,
}

#[derive(Debug, Default, tabula::Model)]
struct Slug {
    id: String,
}

#[derive(Debug, Default, tabula::Model)]
struct Event {
    id: i64,

    #[updated_at]
    happened: String,
}

#[derive(Debug, Default, tabula::Model)]
struct Clash {
    id: i64,

    #[column("label")]
    title: String,

    label: String,
}

/// `created_at` that is not a timestamp is just a field
#[derive(Debug, Default, tabula::Model)]
struct Note {
    id: i64,
    created_at: String,
    updated_at: DateTime<Utc>,
}

#[test]
fn no_identity_field() {
    let err = assert_err_is!(Tag::binding(), is_shape);
    assert_eq!(err.shape_kind(), Some(&ShapeErrorKind::NoIdentityField));
}

#[test]
fn identity_must_be_an_integer() {
    let err = assert_err_is!(Slug::binding(), is_shape);
    assert_eq!(
        err.shape_kind(),
        Some(&ShapeErrorKind::IdentityNotInteger {
            field: "id".to_string()
        })
    );
}

#[test]
fn lifecycle_field_must_be_a_timestamp() {
    let err = assert_err_is!(Event::binding(), is_shape);
    assert_eq!(
        err.shape_kind(),
        Some(&ShapeErrorKind::TimestampNotTimestamp {
            field: "happened".to_string()
        })
    );
}

#[test]
fn columns_must_be_unique() {
    let err = assert_err_is!(Clash::binding(), is_shape);
    assert_eq!(
        err.shape_kind(),
        Some(&ShapeErrorKind::DuplicateColumn {
            column: "label".to_string(),
            first: "title".to_string(),
            second: "label".to_string(),
        })
    );
}

#[test]
fn conventional_names_need_conventional_types() {
    let binding = assert_ok!(Note::binding());
    let roles: Vec<_> = binding.fields.iter().map(|f| f.role).collect();

    assert_eq!(
        roles,
        [
            tabula::FieldRole::Identity,
            tabula::FieldRole::Plain,
            tabula::FieldRole::UpdatedAt,
        ]
    );
}

#[test]
fn register_checks_bindings_up_front() {
    let mut builder = models!(Tag);
    let sqlite = assert_ok!(tabula_driver_sqlite::Sqlite::in_memory());

    assert_err_is!(builder.build(sqlite), is_shape);
}

#[tokio::test]
async fn unregistered_models_fail_on_use() {
    let test = Test::articles();

    let mut tag = Tag {
        name: "rust".to_string(),
    };

    let err = assert_err_is!(test.db.save(&mut tag).await, is_shape);
    assert!(err.to_string().starts_with("Tag.save(): "), "{err}");
    assert!(test.log.is_empty());
}

#[test]
fn describe_reports_unset_fields() {
    let note = Note {
        id: 3,
        ..Default::default()
    };

    let fields = assert_ok!(note.describe());
    let unset: Vec<_> = fields.iter().map(|f| (f.name, f.unset)).collect();

    assert_eq!(
        unset,
        [("id", false), ("created_at", true), ("updated_at", true)]
    );
    assert_eq!(assert_ok!(note.identity()), Some(3));
}

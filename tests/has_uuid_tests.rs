mod fixtures;

use fixtures::{Post, User, init_logging, is_canonical_uuid, repository};
use record_uuid::Error;
use record_uuid::data::{ColumnDef, ColumnType};
use record_uuid::entity::{Attributes, Record};
use record_uuid::has_uuid::{DEFAULT_UUID_COLUMN, HasUuid, UuidLookup, UuidRepositoryExtensions};

const PRESET_UUID: &str = "44bdab3b-1da5-45ac-b7ca-468878cea619";

/// Declares a `guid` column its schema does not have.
#[derive(Debug, Clone, Default)]
struct Ghost {
    attributes: Attributes,
    uuid_column: Option<String>,
}

impl Record for Ghost {
    fn name() -> &'static str {
        "Ghost"
    }

    fn table_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("id", ColumnType::Integer).primary_key(),
            ColumnDef::new("uuid", ColumnType::Text),
        ]
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl HasUuid for Ghost {
    fn uuid_column() -> Option<&'static str> {
        Some("guid")
    }

    fn uuid_column_override(&self) -> Option<&str> {
        self.uuid_column.as_deref()
    }

    fn override_uuid_column(&mut self, column: Option<String>) {
        self.uuid_column = column;
    }
}

#[tokio::test]
async fn generates_uuid_on_insert() {
    init_logging();
    let users = repository::<User>();

    let user = users.insert(User::named("João Roberto")).await.unwrap();

    let uuid = user.get_uuid().expect("uuid should be assigned");
    assert!(is_canonical_uuid(uuid), "not canonical: {uuid}");
    assert!(user.exists());
}

#[tokio::test]
async fn generates_uuid_on_insert_with_custom_column_name() {
    let posts = repository::<Post>();

    let post = posts.insert(Post::titled("Foo Bar")).await.unwrap();

    assert_eq!(post.uuid_column_name(), "custom_uuid");
    assert!(post.get_uuid().is_some_and(is_canonical_uuid));
    assert!(post.get("custom_uuid").is_some());
    assert!(post.get(DEFAULT_UUID_COLUMN).is_none());
}

#[tokio::test]
async fn generates_uuid_on_save() {
    let users = repository::<User>();

    let user = User::named("Fausto Mastrella");
    assert!(user.get_uuid().is_none());

    let user = users.save(user).await.unwrap();
    assert!(user.get_uuid().is_some());
}

#[tokio::test]
async fn generates_uuid_on_save_with_custom_column_name() {
    let posts = repository::<Post>();

    let post = Post::titled("Foo Bar");
    assert!(post.get_uuid().is_none());

    let post = posts.save(post).await.unwrap();
    assert!(post.get_uuid().is_some());
}

#[tokio::test]
async fn empty_string_counts_as_unset() {
    let users = repository::<User>();

    let mut user = User::named("Blank");
    user.set_uuid("");
    assert!(user.get_uuid().is_none());

    let user = users.insert(user).await.unwrap();
    assert!(user.get_uuid().is_some_and(is_canonical_uuid));
}

#[tokio::test]
async fn keeps_uuid_preset_before_first_insert() {
    let users = repository::<User>();

    let mut user = User::named("B");
    user.set_uuid(PRESET_UUID);
    let user = users.insert(user).await.unwrap();

    assert_eq!(user.get_uuid(), Some(PRESET_UUID));
    let stored = users.find_by_uuid(PRESET_UUID).await.unwrap();
    assert_eq!(stored.id(), user.id());
}

#[tokio::test]
async fn does_not_override_stored_uuid_on_save() {
    init_logging();
    let users = repository::<User>();

    let mut user = users.insert(User::named("Vinícius Mello")).await.unwrap();
    let assigned = user.get_uuid().unwrap().to_string();

    user.set_uuid(PRESET_UUID);
    let user = users.save(user).await.unwrap();

    assert_ne!(user.get_uuid(), Some(PRESET_UUID));
    assert_eq!(user.get_uuid(), Some(assigned.as_str()));
}

#[tokio::test]
async fn each_insert_gets_a_distinct_uuid() {
    let users = repository::<User>();

    let first = users.insert(User::named("A")).await.unwrap();
    let second = users.insert(User::named("B")).await.unwrap();

    assert_ne!(first.get_uuid(), second.get_uuid());
    assert_ne!(first.id(), second.id());
}

#[tokio::test]
async fn finds_a_record_by_its_uuid() {
    let users = repository::<User>();

    let user = users.insert(User::named("Taylor")).await.unwrap();
    let taylor = users.find_by_uuid(user.get_uuid().unwrap()).await.unwrap();

    assert_eq!(taylor.display_name(), Some("Taylor"));
    assert_eq!(taylor.id(), user.id());
}

#[tokio::test]
async fn find_by_uuid_can_return_the_query() {
    let users = repository::<User>();

    let user = users.insert(User::named("Taylor")).await.unwrap();
    let lookup = users
        .find_by_uuid_with(user.get_uuid().unwrap(), false)
        .await
        .unwrap();

    let query = match lookup {
        UuidLookup::Deferred(query) => query,
        UuidLookup::Found(_) => panic!("expected an unexecuted query"),
    };
    let found = users.first(query).await.unwrap().unwrap();
    assert_eq!(found.display_name(), Some("Taylor"));
}

#[tokio::test]
async fn missing_uuid_column_fails_the_insert() {
    let users = repository::<User>();

    let mut user = User::named("Dhyogo Almeida");
    user.set_uuid_column_name("universally_unique_id");

    let err = users.insert(user).await.unwrap_err();
    match err {
        Error::MissingUuidColumn { entity, column } => {
            assert_eq!(entity, "User");
            assert_eq!(column, "universally_unique_id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn type_declared_column_missing_from_schema_fails_the_insert() {
    let ghosts = repository::<Ghost>();

    let err = ghosts.insert(Ghost::default()).await.unwrap_err();
    match err {
        Error::MissingUuidColumn { entity, column } => {
            assert_eq!(entity, "Ghost");
            assert_eq!(column, "guid");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn lookup_is_case_sensitive() {
    let users = repository::<User>();

    let user = users.insert(User::named("João")).await.unwrap();
    let upper = user.get_uuid().unwrap().to_uppercase();

    let err = users.find_by_uuid(&upper).await.unwrap_err();
    assert!(matches!(err, Error::RecordNotFound { ref value, .. } if *value == upper));
}

#[tokio::test]
async fn assigned_then_preset_scenario() {
    let users = repository::<User>();

    let a = users.insert(User::named("A")).await.unwrap();
    assert!(a.get_uuid().is_some_and(is_canonical_uuid));

    let mut b = User::named("B");
    b.set_uuid(PRESET_UUID);
    let b = users.save(b).await.unwrap();
    assert_eq!(b.get_uuid(), Some(PRESET_UUID));

    assert_eq!(
        users.find_by_uuid(PRESET_UUID).await.unwrap().display_name(),
        Some("B")
    );
}

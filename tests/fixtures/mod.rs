#![allow(dead_code)]

use record_uuid::data::{ColumnDef, ColumnType, MemoryProvider, Repository};
use record_uuid::entity::hooks::HookContext;
use record_uuid::entity::{Attributes, Record};
use record_uuid::has_uuid::{HasUuid, register_uuid_hooks};

/// Stores its UUID in the default `uuid` column.
#[derive(Debug, Clone, Default)]
pub struct User {
    attributes: Attributes,
    uuid_column: Option<String>,
}

impl User {
    pub fn named(name: &str) -> Self {
        let mut user = Self::default();
        user.set("name", name);
        user
    }

    pub fn display_name(&self) -> Option<&str> {
        self.get("name").and_then(|value| value.as_str())
    }
}

impl Record for User {
    fn name() -> &'static str {
        "User"
    }

    fn table_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("id", ColumnType::Integer).primary_key(),
            ColumnDef::new("uuid", ColumnType::Text).not_null().unique(),
            ColumnDef::new("name", ColumnType::Text).not_null(),
        ]
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl HasUuid for User {
    fn uuid_column_override(&self) -> Option<&str> {
        self.uuid_column.as_deref()
    }

    fn override_uuid_column(&mut self, column: Option<String>) {
        self.uuid_column = column;
    }
}

/// Declares `custom_uuid` as its UUID column.
#[derive(Debug, Clone, Default)]
pub struct Post {
    attributes: Attributes,
    uuid_column: Option<String>,
}

impl Post {
    pub fn titled(title: &str) -> Self {
        let mut post = Self::default();
        post.set("title", title);
        post
    }
}

impl Record for Post {
    fn name() -> &'static str {
        "Post"
    }

    fn table_columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("id", ColumnType::Integer).primary_key(),
            ColumnDef::new("custom_uuid", ColumnType::Text)
                .not_null()
                .unique(),
            ColumnDef::new("title", ColumnType::Text).not_null(),
            ColumnDef::new("published", ColumnType::Boolean),
        ]
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}

impl HasUuid for Post {
    fn uuid_column() -> Option<&'static str> {
        Some("custom_uuid")
    }

    fn uuid_column_override(&self) -> Option<&str> {
        self.uuid_column.as_deref()
    }

    fn override_uuid_column(&mut self, column: Option<String>) {
        self.uuid_column = column;
    }
}

pub fn repository<T: HasUuid>() -> Repository<T> {
    repository_with(HookContext::default())
}

pub fn repository_with<T: HasUuid>(context: HookContext) -> Repository<T> {
    let mut repository = Repository::new(Box::new(MemoryProvider::<T>::new())).with_context(context);
    register_uuid_hooks(&mut repository);
    repository
}

pub fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    builder.is_test(true);
    let _ = builder.try_init();
}

/// Canonical 8-4-4-4-12 lowercase hex.
pub fn is_canonical_uuid(value: &str) -> bool {
    let groups = value.split('-').collect::<Vec<_>>();
    groups.len() == 5
        && groups
            .iter()
            .zip([8, 4, 4, 4, 12])
            .all(|(group, len)| {
                group.len() == len
                    && group
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            })
}

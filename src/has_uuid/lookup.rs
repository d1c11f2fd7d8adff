use async_trait::async_trait;

use super::HasUuid;
use super::column::uuid_column_for_type;
use crate::data::query::Query;
use crate::data::repository::Repository;
use crate::data::value::Value;
use crate::entity::Record;
use crate::error::{Error, Result};

/// Outcome of [`UuidRepositoryExtensions::find_by_uuid_with`].
#[derive(Debug)]
pub enum UuidLookup<T> {
    Found(T),
    /// The unexecuted query, for further filtering, sorting or paging.
    Deferred(Query<T>),
}

impl<T> UuidLookup<T> {
    pub fn into_record(self) -> Option<T> {
        match self {
            UuidLookup::Found(record) => Some(record),
            UuidLookup::Deferred(_) => None,
        }
    }

    pub fn into_query(self) -> Option<Query<T>> {
        match self {
            UuidLookup::Found(_) => None,
            UuidLookup::Deferred(query) => Some(query),
        }
    }
}

#[async_trait]
pub trait UuidRepositoryExtensions<T: HasUuid> {
    /// Records whose UUID column equals `uuid` exactly (case-sensitive).
    fn uuid_query(&self, uuid: &str) -> Query<T>;

    /// The first record with this UUID, or [`Error::RecordNotFound`].
    async fn find_by_uuid(&self, uuid: &str) -> Result<T>;

    /// `resolve = false` returns the query without running it.
    async fn find_by_uuid_with(&self, uuid: &str, resolve: bool) -> Result<UuidLookup<T>>;
}

#[async_trait]
impl<T: HasUuid> UuidRepositoryExtensions<T> for Repository<T> {
    fn uuid_query(&self, uuid: &str) -> Query<T> {
        Query::<T>::new().with_filter(&uuid_column_for_type::<T>(), Value::String(uuid.to_string()))
    }

    async fn find_by_uuid(&self, uuid: &str) -> Result<T> {
        self.first(self.uuid_query(uuid))
            .await?
            .ok_or_else(|| Error::RecordNotFound {
                entity: T::name().to_string(),
                column: uuid_column_for_type::<T>(),
                value: uuid.to_string(),
            })
    }

    async fn find_by_uuid_with(&self, uuid: &str, resolve: bool) -> Result<UuidLookup<T>> {
        if resolve {
            self.find_by_uuid(uuid).await.map(UuidLookup::Found)
        } else {
            Ok(UuidLookup::Deferred(self.uuid_query(uuid)))
        }
    }
}

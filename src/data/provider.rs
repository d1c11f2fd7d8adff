use async_trait::async_trait;

use crate::data::paging::Page;
use crate::data::query::Query;
use crate::data::value::Value;
use crate::error::Result;

/// Storage backend for one record type.
#[async_trait]
pub trait DataProvider<T>: Send + Sync {
    async fn create(&self, entity: T) -> Result<T>;
    async fn get(&self, id: &Value) -> Result<Option<T>>;
    async fn update(&self, entity: T) -> Result<T>;
    async fn delete(&self, id: &Value) -> Result<bool>;
    async fn query(&self, query: Query<T>) -> Result<Page<T>>;
    async fn get_by(&self, column: &str, value: Value) -> Result<Option<T>>;
}

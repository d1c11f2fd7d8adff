use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::data::paging::Page;
use crate::data::provider::DataProvider;
use crate::data::query::Query;
use crate::data::value::Value;
use crate::entity::Record;
use crate::error::{Error, Result};

/// Keeps records of one type in memory, in insertion order.
///
/// Writes are checked against `T::table_columns()`. Unknown columns, values of
/// the wrong column type, nulls in `not_null` columns and duplicates in
/// `unique` columns are rejected. Missing ids are assigned from an increasing
/// counter.
pub struct MemoryProvider<T> {
    rows: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Record> MemoryProvider<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn ensure_column(column: &str) -> Result<()> {
        if T::has_column(column) {
            Ok(())
        } else {
            Err(Error::UnknownColumn {
                entity: T::name().to_string(),
                column: column.to_string(),
            })
        }
    }

    /// `updating` names the stored row the entity replaces; that row is the
    /// only one skipped by the unique checks.
    fn validate(entity: &T, rows: &[T], updating: Option<&Value>) -> Result<()> {
        for column in entity.attributes().columns() {
            Self::ensure_column(column)?;
        }

        for def in T::table_columns() {
            let value = entity.get(&def.name).unwrap_or(&Value::Null);
            if !value.is_null() && !def.column_type.accepts(value) {
                return Err(Error::Provider(format!(
                    "{}.{} expects {:?}, got `{}`",
                    T::name(),
                    def.name,
                    def.column_type,
                    value
                )));
            }

            if value.is_null() {
                if def.not_null {
                    return Err(Error::Provider(format!(
                        "{}.{} cannot be null",
                        T::name(),
                        def.name
                    )));
                }
                continue;
            }

            if def.unique {
                let taken = rows
                    .iter()
                    .filter(|row| updating.is_none() || row.id() != updating)
                    .any(|row| row.get(&def.name) == Some(value));
                if taken {
                    return Err(Error::UniqueViolation {
                        entity: T::name().to_string(),
                        column: def.name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<T: Record> Default for MemoryProvider<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> DataProvider<T> for MemoryProvider<T> {
    async fn create(&self, mut entity: T) -> Result<T> {
        let mut rows = self.rows.write().await;

        if entity.id().is_none() {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            entity.set(T::id_column(), Value::Int(id));
        }

        Self::validate(&entity, &rows, None)?;

        entity.attributes_mut().sync_original();
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: &Value) -> Result<Option<T>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.id() == Some(id)).cloned())
    }

    async fn update(&self, mut entity: T) -> Result<T> {
        let mut rows = self.rows.write().await;

        let id = entity
            .id()
            .cloned()
            .ok_or_else(|| Error::Conflict(format!("{} has no id", T::name())))?;
        let position = rows
            .iter()
            .position(|row| row.id() == Some(&id))
            .ok_or_else(|| Error::Provider(format!("{} {} does not exist", T::name(), id)))?;

        Self::validate(&entity, &rows, Some(&id))?;

        entity.attributes_mut().sync_original();
        rows[position] = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &Value) -> Result<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != Some(id));
        Ok(rows.len() != before)
    }

    async fn query(&self, query: Query<T>) -> Result<Page<T>> {
        for column in query.referenced_columns() {
            Self::ensure_column(column)?;
        }

        let rows = self.rows.read().await;
        let mut matched = rows
            .iter()
            .filter(|row| query.matches(row))
            .cloned()
            .collect::<Vec<_>>();
        matched.sort_by(|left, right| query.compare(left, right));

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(query.offset())
            .take(query.page_size as usize)
            .collect();

        Ok(Page::new(items, total, query.page, query.page_size))
    }

    async fn get_by(&self, column: &str, value: Value) -> Result<Option<T>> {
        Self::ensure_column(column)?;

        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| row.get(column) == Some(&value))
            .cloned())
    }
}

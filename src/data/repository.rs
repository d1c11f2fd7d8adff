use std::sync::Arc;

use crate::data::paging::Page;
use crate::data::provider::DataProvider;
use crate::data::query::Query;
use crate::data::value::Value;
use crate::entity::Record;
use crate::entity::hooks::{EntityHooks, HookContext};
use crate::error::{Error, Result};

/// Runs the registered lifecycle hooks and delegates storage to a provider.
pub struct Repository<T: Record> {
    provider: Box<dyn DataProvider<T>>,
    hooks: Vec<Arc<dyn EntityHooks<T>>>,
    context: HookContext,
}

impl<T: Record> Repository<T> {
    pub fn new(provider: Box<dyn DataProvider<T>>) -> Self {
        Self {
            provider,
            hooks: Vec::new(),
            context: HookContext::default(),
        }
    }

    pub fn with_context(mut self, context: HookContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_hooks(mut self, hooks: impl EntityHooks<T> + 'static) -> Self {
        self.use_hooks(hooks);
        self
    }

    pub fn use_hooks(&mut self, hooks: impl EntityHooks<T> + 'static) -> &mut Self {
        self.hooks.push(Arc::new(hooks));
        self
    }

    /// First write of a new record. `before_insert` hooks run once, here.
    ///
    /// The record is taken by value: when a hook or the provider rejects it,
    /// the caller's copy is gone, including any UUID a hook generated. Clone
    /// it first if it must survive a failed insert.
    pub async fn insert(&self, mut entity: T) -> Result<T> {
        if entity.exists() {
            return Err(Error::Conflict(format!(
                "{} is already persisted, use update",
                T::name()
            )));
        }

        for hooks in &self.hooks {
            hooks.before_insert(&self.context, &mut entity).await?;
        }

        log::trace!("inserting {}", T::name());
        self.provider.create(entity).await
    }

    pub async fn update(&self, mut entity: T) -> Result<T> {
        if !entity.exists() {
            return Err(Error::Conflict(format!(
                "{} has not been persisted yet, use insert",
                T::name()
            )));
        }

        for hooks in &self.hooks {
            hooks.before_update(&self.context, &mut entity).await?;
        }

        log::trace!("updating {}", T::name());
        self.provider.update(entity).await
    }

    /// Inserts new records and updates persisted ones.
    pub async fn save(&self, entity: T) -> Result<T> {
        if entity.exists() {
            self.update(entity).await
        } else {
            self.insert(entity).await
        }
    }

    pub async fn get(&self, id: &Value) -> Result<Option<T>> {
        self.provider.get(id).await
    }

    pub async fn get_by(&self, column: &str, value: Value) -> Result<Option<T>> {
        self.provider.get_by(column, value).await
    }

    pub async fn query(&self, query: Query<T>) -> Result<Page<T>> {
        self.provider.query(query).await
    }

    /// First record matching `query`, in the query's order.
    pub async fn first(&self, query: Query<T>) -> Result<Option<T>> {
        let query = query.with_page(1).with_page_size(1);
        Ok(self.provider.query(query).await?.into_first())
    }

    pub async fn delete(&self, id: &Value) -> Result<bool> {
        self.provider.delete(id).await
    }
}

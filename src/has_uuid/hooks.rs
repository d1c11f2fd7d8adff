use async_trait::async_trait;
use std::marker::PhantomData;

use super::generator::{canonical, resolve_generator};
use super::{HasUuid, UuidOptions};
use crate::data::repository::Repository;
use crate::data::value::Value;
use crate::entity::Record;
use crate::entity::hooks::{EntityHooks, HookContext};
use crate::error::{Error, Result};

/// Fills the UUID column before a record's first insert.
///
/// [`UuidOptions`] and an `Arc<dyn UuidGenerator>` come from the
/// [`HookContext`]; when neither is registered the defaults are used.
pub struct EnsureUuidHooks<T>(PhantomData<fn() -> T>);

impl<T> EnsureUuidHooks<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for EnsureUuidHooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn options(context: &HookContext) -> UuidOptions {
    context
        .services()
        .resolve::<UuidOptions>()
        .map(|options| *options)
        .unwrap_or_default()
}

#[async_trait]
impl<T> EntityHooks<T> for EnsureUuidHooks<T>
where
    T: HasUuid,
{
    async fn before_insert(&self, context: &HookContext, entity: &mut T) -> Result<()> {
        let column = entity.uuid_column_name();

        if options(context).check_column && !T::has_column(&column) {
            return Err(Error::MissingUuidColumn {
                entity: T::name().to_string(),
                column,
            });
        }

        if !entity.attributes().is_empty_at(&column) {
            log::trace!("{} keeps preset {}", T::name(), column);
            return Ok(());
        }

        let uuid = canonical(resolve_generator(context).generate());

        log::debug!("assigning {} {} = {}", T::name(), column, uuid);
        entity.attributes_mut().set(column, Value::String(uuid));
        Ok(())
    }

    async fn before_update(&self, context: &HookContext, entity: &mut T) -> Result<()> {
        if !options(context).preserve_on_update {
            return Ok(());
        }

        let column = entity.uuid_column_name();
        let Some(stored) = entity
            .attributes()
            .original(&column)
            .filter(|value| !value.is_empty())
            .cloned()
        else {
            return Ok(());
        };

        if entity.get(&column) != Some(&stored) {
            log::warn!(
                "{} {} is immutable once stored, keeping {}",
                T::name(),
                column,
                stored
            );
            entity.attributes_mut().set(column, stored);
        }

        Ok(())
    }
}

/// Registers [`EnsureUuidHooks`] on `repository`.
pub fn register_uuid_hooks<T: HasUuid>(repository: &mut Repository<T>) -> &mut Repository<T> {
    repository.use_hooks(EnsureUuidHooks::<T>::new())
}

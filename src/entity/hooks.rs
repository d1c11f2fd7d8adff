use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::services::ServiceProvider;

/// What a hook receives besides the entity: the registered services.
#[derive(Clone, Default)]
pub struct HookContext {
    services: Arc<ServiceProvider>,
}

impl HookContext {
    pub fn new(services: Arc<ServiceProvider>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &ServiceProvider {
        &self.services
    }
}

/// Lifecycle callbacks a repository awaits before writing an entity.
#[async_trait]
pub trait EntityHooks<T: Send>: Send + Sync {
    /// Runs once, before the entity's first write.
    async fn before_insert(&self, _context: &HookContext, _entity: &mut T) -> Result<()> {
        Ok(())
    }

    async fn before_update(&self, _context: &HookContext, _entity: &mut T) -> Result<()> {
        Ok(())
    }
}

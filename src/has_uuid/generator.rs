use std::sync::Arc;
use uuid::Uuid;

use crate::entity::hooks::HookContext;

/// Produces the values the insert hook writes into empty UUID columns.
///
/// Register one in the hook context as `Arc<dyn UuidGenerator>` to replace
/// the random default.
pub trait UuidGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Version 4 UUIDs from the OS random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Canonical lowercase 8-4-4-4-12 text, the form stored in UUID columns.
pub fn canonical(uuid: Uuid) -> String {
    uuid.hyphenated().to_string()
}

pub(crate) fn resolve_generator(context: &HookContext) -> Arc<dyn UuidGenerator> {
    context
        .services()
        .resolve::<Arc<dyn UuidGenerator>>()
        .map(|generator| Arc::clone(&*generator))
        .unwrap_or_else(|| Arc::new(RandomUuidGenerator))
}

//! Automatic UUID assignment for records.
//!
//! A record type opts in by implementing [`HasUuid`]; registering
//! [`EnsureUuidHooks`] on its repository fills the UUID column before the
//! first insert, and [`UuidRepositoryExtensions`] looks records up by it.

pub mod column;
pub mod generator;
pub mod hooks;
pub mod lookup;
pub mod options;

pub use column::{DEFAULT_UUID_COLUMN, resolve_uuid_column_name, uuid_column_for_type};
pub use generator::{RandomUuidGenerator, UuidGenerator, canonical};
pub use hooks::{EnsureUuidHooks, register_uuid_hooks};
pub use lookup::{UuidLookup, UuidRepositoryExtensions};
pub use options::UuidOptions;

use crate::data::value::Value;
use crate::entity::Record;

/// A record carrying a string UUID in one of its columns.
///
/// Implementors store the per-instance column override themselves, usually
/// as an `Option<String>` field next to their attributes.
pub trait HasUuid: Record {
    /// Column declared by the record type, if it differs from `"uuid"`.
    fn uuid_column() -> Option<&'static str> {
        None
    }

    fn uuid_column_override(&self) -> Option<&str>;

    fn override_uuid_column(&mut self, column: Option<String>);

    /// Per-instance column, taking precedence over the type's column.
    fn set_uuid_column_name(&mut self, column: impl Into<String>) {
        self.override_uuid_column(Some(column.into()));
    }

    fn uuid_column_name(&self) -> String {
        resolve_uuid_column_name(self)
    }

    /// Current value of the UUID column, `None` while unset or empty.
    fn get_uuid(&self) -> Option<&str> {
        self.get(&self.uuid_column_name())
            .filter(|value| !value.is_empty())
            .and_then(Value::as_str)
    }

    /// Writes the UUID column directly. Before the first insert this
    /// pre-seeds the value the insert hook will keep.
    fn set_uuid(&mut self, uuid: impl Into<String>) {
        let column = self.uuid_column_name();
        self.attributes_mut().set(column, Value::String(uuid.into()));
    }
}

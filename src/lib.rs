//! UUID columns for database-backed records.
//!
//! ```no_run
//! use record_uuid::data::{MemoryProvider, Repository};
//! use record_uuid::has_uuid::{HasUuid, UuidRepositoryExtensions, register_uuid_hooks};
//! # use record_uuid::data::{ColumnDef, ColumnType};
//! # use record_uuid::entity::{Attributes, Record};
//! # #[derive(Clone, Default)]
//! # struct User { attributes: Attributes, uuid_column: Option<String> }
//! # impl Record for User {
//! #     fn name() -> &'static str { "User" }
//! #     fn table_columns() -> Vec<ColumnDef> {
//! #         vec![ColumnDef::new("id", ColumnType::Integer).primary_key(),
//! #              ColumnDef::new("uuid", ColumnType::Text).unique()]
//! #     }
//! #     fn attributes(&self) -> &Attributes { &self.attributes }
//! #     fn attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
//! # }
//! # impl HasUuid for User {
//! #     fn uuid_column_override(&self) -> Option<&str> { self.uuid_column.as_deref() }
//! #     fn override_uuid_column(&mut self, column: Option<String>) { self.uuid_column = column; }
//! # }
//! # async fn run() -> record_uuid::Result<()> {
//! let mut users = Repository::new(Box::new(MemoryProvider::<User>::new()));
//! register_uuid_hooks(&mut users);
//!
//! let user = users.insert(User::default()).await?;
//! let uuid = user.get_uuid().unwrap_or_default().to_string();
//! let found = users.find_by_uuid(&uuid).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod entity;
pub mod error;
pub mod has_uuid;
pub mod services;

pub use error::{Error, Result};

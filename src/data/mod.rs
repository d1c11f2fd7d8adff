pub mod memory;
pub mod paging;
pub mod provider;
pub mod query;
pub mod repository;
pub mod schema;
pub mod value;

pub use memory::MemoryProvider;
pub use paging::Page;
pub use provider::DataProvider;
pub use query::{FilterOp, Query, SortDirection};
pub use repository::Repository;
pub use schema::{ColumnDef, ColumnType};
pub use value::Value;

pub mod attributes;
pub mod hooks;

use crate::data::schema::ColumnDef;
use crate::data::value::Value;

pub use attributes::Attributes;

/// A persisted entity whose columns live in an [`Attributes`] map.
pub trait Record: Clone + Send + Sync + 'static {
    fn name() -> &'static str;

    fn table_columns() -> Vec<ColumnDef>;

    fn id_column() -> &'static str {
        "id"
    }

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    fn has_column(column: &str) -> bool {
        Self::table_columns().iter().any(|def| def.name == column)
    }

    fn id(&self) -> Option<&Value> {
        self.attributes()
            .get(Self::id_column())
            .filter(|value| !value.is_null())
    }

    fn get(&self, column: &str) -> Option<&Value> {
        self.attributes().get(column)
    }

    fn set(&mut self, column: &str, value: impl Into<Value>) {
        self.attributes_mut().set(column, value);
    }

    fn exists(&self) -> bool {
        self.attributes().exists()
    }
}

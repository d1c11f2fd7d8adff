use super::HasUuid;

pub const DEFAULT_UUID_COLUMN: &str = "uuid";

/// Instance override, then the type's column, then `"uuid"`.
pub fn resolve_uuid_column_name<T: HasUuid>(record: &T) -> String {
    record
        .uuid_column_override()
        .filter(|column| !column.is_empty())
        .map(str::to_string)
        .unwrap_or_else(uuid_column_for_type::<T>)
}

/// Column used when no instance is at hand, e.g. for lookups.
pub fn uuid_column_for_type<T: HasUuid>() -> String {
    T::uuid_column()
        .filter(|column| !column.is_empty())
        .unwrap_or(DEFAULT_UUID_COLUMN)
        .to_string()
}

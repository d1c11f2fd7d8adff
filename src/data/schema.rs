use crate::data::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
    Uuid,
    Boolean,
    Timestamp,
}

impl ColumnType {
    /// Whether `value` can be stored in a column of this type. Nullability is
    /// `ColumnDef::not_null`'s concern. UUID columns also take the string form.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (ColumnType::Integer, Value::Int(_)) => true,
            (ColumnType::Float, Value::Float(_) | Value::Int(_)) => true,
            (ColumnType::Text, Value::String(_)) => true,
            (ColumnType::Uuid, Value::Uuid(_)) => true,
            (ColumnType::Uuid, Value::String(text)) => uuid::Uuid::parse_str(text).is_ok(),
            (ColumnType::Boolean, Value::Bool(_)) => true,
            (ColumnType::Timestamp, Value::DateTime(_)) => true,
            _ => false,
        }
    }
}

/// One column of a record type's declared schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub column_type: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
    pub unique: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            primary_key: false,
            not_null: false,
            unique: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self.unique = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn column_types_accept_matching_values() {
        assert!(ColumnType::Integer.accepts(&Value::Int(1)));
        assert!(ColumnType::Float.accepts(&Value::Int(1)));
        assert!(ColumnType::Float.accepts(&Value::Float(1.5)));
        assert!(ColumnType::Text.accepts(&Value::from("x")));
        assert!(ColumnType::Boolean.accepts(&Value::Bool(true)));
        assert!(ColumnType::Timestamp.accepts(&Value::DateTime(Utc::now())));
        assert!(ColumnType::Uuid.accepts(&Value::Uuid(uuid::Uuid::new_v4())));
        assert!(ColumnType::Uuid.accepts(&Value::from("44bdab3b-1da5-45ac-b7ca-468878cea619")));
        assert!(ColumnType::Text.accepts(&Value::Null));
    }

    #[test]
    fn column_types_reject_other_values() {
        assert!(!ColumnType::Integer.accepts(&Value::from("1")));
        assert!(!ColumnType::Text.accepts(&Value::Int(1)));
        assert!(!ColumnType::Boolean.accepts(&Value::Int(0)));
        assert!(!ColumnType::Uuid.accepts(&Value::from("not-a-uuid")));
        assert!(!ColumnType::Timestamp.accepts(&Value::from("2026-10-15")));
    }
}

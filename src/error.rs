//! Error types shared by the data layer, the hooks and the UUID helpers.

/// Errors returned by repositories, providers, hooks and configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The UUID column resolved for a record is not part of its schema.
    #[error("{entity} has no uuid column `{column}`")]
    MissingUuidColumn { entity: String, column: String },
    /// A UUID lookup matched no record.
    #[error("no {entity} with {column} = `{value}`")]
    RecordNotFound {
        entity: String,
        column: String,
        value: String,
    },
    /// A write or filter referenced a column the record does not declare.
    #[error("{entity} has no column `{column}`")]
    UnknownColumn { entity: String, column: String },
    /// A unique column already holds the value being written.
    #[error("{entity}.{column} must be unique, `{value}` already exists")]
    UniqueViolation {
        entity: String,
        column: String,
        value: String,
    },
    /// The record is in the wrong persistence state for the operation.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Any other failure reported by a data provider.
    #[error("provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::path::Path;

use crate::error::{Error, Result};

/// A JSON configuration document with dotted-key access.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    root: JsonValue,
}

impl Configuration {
    pub fn new(root: JsonValue) -> Self {
        Self { root }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let root = serde_json::from_str::<JsonValue>(text)?;
        if !root.is_object() {
            return Err(Error::Config("configuration root must be an object".into()));
        }
        Ok(Self::new(root))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Like [`Configuration::load`], but a missing file yields an empty
    /// configuration.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn value(&self, key: &str) -> Option<&JsonValue> {
        key.split('.')
            .try_fold(&self.root, |node, part| node.as_object()?.get(part))
    }

    /// String value at `key`; `None` for missing keys and non-strings.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(JsonValue::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(JsonValue::as_bool)
    }

    /// Deserializes the object at `key`. A missing section is `None`.
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.value(key) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(node) => serde_json::from_value(node.clone())
                .map(Some)
                .map_err(|err| Error::Config(format!("invalid `{key}` section: {err}"))),
        }
    }
}

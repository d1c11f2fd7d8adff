use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::error::Result;

/// Behavior switches for the UUID hooks, read from the `uuid` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UuidOptions {
    /// Fail inserts whose UUID column is not in the record's schema.
    pub check_column: bool,
    /// Keep a stored UUID when an update tries to change it.
    pub preserve_on_update: bool,
}

impl UuidOptions {
    pub const SECTION: &'static str = "uuid";

    pub fn from_configuration(config: &Configuration) -> Result<Self> {
        Ok(config.section::<Self>(Self::SECTION)?.unwrap_or_default())
    }
}

impl Default for UuidOptions {
    fn default() -> Self {
        Self {
            check_column: true,
            preserve_on_update: true,
        }
    }
}

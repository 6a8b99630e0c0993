//! Settings-backed configuration store.

use serde_json::{Map, Value};

use crate::config::Config;
use crate::domain::ports::ConfigStore;

/// `ConfigStore` over the `[settings]` table.
///
/// A name is looked up verbatim first; failing that, dots descend into
/// nested tables (`iothub.name` reads `[settings.iothub] name`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsStore {
    values: Map<String, Value>,
}

impl SettingsStore {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.settings.clone())
    }
}

impl ConfigStore for SettingsStore {
    fn get_value(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }

        let mut parts = name.split('.');
        let mut current = self.values.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current.clone())
    }
}

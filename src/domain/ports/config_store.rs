//! Config store port - read-only lookup of named settings

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read-only key/value configuration.
pub trait ConfigStore {
    /// Raw value for `name`, if set.
    fn get_value(&self, name: &str) -> Option<Value>;

    /// Scalar value as text. Tables and arrays are not text.
    fn get_string(&self, name: &str) -> Option<String> {
        match self.get_value(name)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Typed lookup; a value of the wrong shape counts as unset.
    fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T>
    where
        Self: Sized,
    {
        self.get_value(name)
            .and_then(|v| serde_json::from_value(v).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    struct MapStore(HashMap<&'static str, Value>);

    impl ConfigStore for MapStore {
        fn get_value(&self, name: &str) -> Option<Value> {
            self.0.get(name).cloned()
        }
    }

    fn store() -> MapStore {
        MapStore(HashMap::from([
            ("name", json!("hub")),
            ("port", json!(8883)),
            ("enabled", json!(true)),
            ("tags", json!(["a"])),
        ]))
    }

    #[test]
    fn get_string_stringifies_scalars() {
        let store = store();
        assert_eq!(store.get_string("name").as_deref(), Some("hub"));
        assert_eq!(store.get_string("port").as_deref(), Some("8883"));
        assert_eq!(store.get_string("enabled").as_deref(), Some("true"));
        assert_eq!(store.get_string("tags"), None);
        assert_eq!(store.get_string("missing"), None);
    }

    #[test]
    fn typed_get() {
        let store = store();
        assert_eq!(store.get::<u16>("port"), Some(8883));
        assert_eq!(store.get::<Vec<String>>("tags"), Some(vec!["a".to_string()]));
        assert_eq!(store.get::<bool>("name"), None);
    }
}

//! Named parameter storage.

use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping from generated parameter names (`param1`, `param2`, ...) to their
/// bound values.
///
/// Names are unique by construction: the builder always derives the next
/// number from [`ParamMap::next_index`]. Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamMap {
    entries: Vec<(String, Value)>,
}

impl ParamMap {
    /// Create a new empty parameter map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The 1-based number the next bound parameter will receive.
    pub fn next_index(&self) -> usize {
        self.entries.len() + 1
    }

    /// Bind a value under `name`, which must come from [`ParamMap::next_index`].
    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }

    /// Look up a bound value by parameter name (without the leading `:`).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether `name` is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Parameter names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Render the map as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(n, v)| (n.clone(), v.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl IntoIterator for ParamMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_follows_len() {
        let mut params = ParamMap::new();
        assert_eq!(params.next_index(), 1);
        params.insert("param1".into(), Value::from("a"));
        params.insert("param2".into(), Value::from(2));
        assert_eq!(params.next_index(), 3);
        assert_eq!(params.get("param2"), Some(&Value::Int(2)));
        assert!(!params.contains("param3"));
    }

    #[test]
    fn to_json_is_an_object() {
        let mut params = ParamMap::new();
        params.insert("param1".into(), Value::from("sample"));
        params.insert("param2".into(), Value::from(12));
        assert_eq!(
            params.to_json(),
            serde_json::json!({ "param1": "sample", "param2": 12 })
        );
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"param1":"sample","param2":12}"#
        );
    }
}

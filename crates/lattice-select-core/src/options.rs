//! Option collections and entry positions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ItemError, Result};

/// One raw value from an options collection.
///
/// Strings, numbers and booleans are primitives; objects, arrays and `null`
/// are treated as structured records.
pub type Entry = Value;

/// The collection of entries a select lists.
///
/// Deserializes from either a JSON array or a JSON object. Map entries keep
/// their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Options {
    /// Ordered sequence of entries, enumerated by index.
    List(Vec<Entry>),
    /// String-keyed entries, enumerated in insertion order.
    Map(Map<String, Entry>),
}

impl Options {
    /// Build options from an arbitrary JSON value.
    ///
    /// Arrays become [`Options::List`], objects become [`Options::Map`];
    /// anything else fails with [`ItemError::NotACollection`].
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(entries) => Ok(Self::List(entries)),
            Value::Object(map) => Ok(Self::Map(map)),
            other => Err(ItemError::NotACollection {
                found: kind_of(&other),
            }),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::List(entries) => entries.len(),
            Self::Map(map) => map.len(),
        }
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this is an ordered list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Entry at enumeration position `index`.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        match self {
            Self::List(entries) => entries.get(index),
            Self::Map(map) => map.values().nth(index),
        }
    }

    /// Whether `other` lists the same entries in the same order.
    ///
    /// Unlike `==`, map keys and nested record fields must also appear in
    /// the same order, since order decides item order and serialized keys.
    pub fn is_identical(&self, other: &Options) -> bool {
        match (self, other) {
            (Self::List(xs), Self::List(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_identical(x, y))
            }
            (Self::Map(xs), Self::Map(ys)) => maps_identical(xs, ys),
            _ => false,
        }
    }

    /// Iterate entries with their positions, in enumeration order.
    pub fn iter(&self) -> OptionsIter<'_> {
        match self {
            Self::List(entries) => OptionsIter::List(entries.iter().enumerate()),
            Self::Map(map) => OptionsIter::Map(map.iter()),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl From<Vec<Entry>> for Options {
    fn from(entries: Vec<Entry>) -> Self {
        Self::List(entries)
    }
}

impl From<Map<String, Entry>> for Options {
    fn from(map: Map<String, Entry>) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<&str>> for Options {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(Value::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Options {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.into_iter().map(Value::from).collect())
    }
}

impl TryFrom<Value> for Options {
    type Error = ItemError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (Position<'a>, &'a Entry);
    type IntoIter = OptionsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(position, entry)` pairs of an [`Options`] collection.
pub enum OptionsIter<'a> {
    List(std::iter::Enumerate<std::slice::Iter<'a, Entry>>),
    Map(serde_json::map::Iter<'a>),
}

impl<'a> Iterator for OptionsIter<'a> {
    type Item = (Position<'a>, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::List(iter) => iter
                .next()
                .map(|(index, entry)| (Position::Index(index), entry)),
            Self::Map(iter) => iter
                .next()
                .map(|(key, entry)| (Position::Key(key.as_str()), entry)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::List(iter) => iter.size_hint(),
            Self::Map(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for OptionsIter<'_> {}

/// Where an entry sits in its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<'a> {
    /// Array index.
    Index(usize),
    /// Map key.
    Key(&'a str),
}

impl Position<'_> {
    /// The positional key in string form: the index digits or the map key.
    pub fn to_key(self) -> String {
        match self {
            Position::Index(index) => index.to_string(),
            Position::Key(key) => key.to_string(),
        }
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(index) => write!(f, "index {index}"),
            Position::Key(key) => write!(f, "key {key:?}"),
        }
    }
}

fn maps_identical(xs: &Map<String, Value>, ys: &Map<String, Value>) -> bool {
    xs.len() == ys.len()
        && xs
            .iter()
            .zip(ys)
            .all(|((kx, x), (ky, y))| kx == ky && values_identical(x, y))
}

fn values_identical(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_identical(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => maps_identical(xs, ys),
        _ => x == y,
    }
}

/// Short name of a value's shape, used in error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_array_and_object() {
        let list = Options::from_value(json!(["a", "b"])).unwrap();
        assert!(list.is_list());
        assert_eq!(list.len(), 2);

        let map = Options::from_value(json!({"x": 1, "y": 2})).unwrap();
        assert!(!map.is_list());
        assert_eq!(map.get(1), Some(&json!(2)));
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        let err = Options::from_value(json!("abc")).unwrap_err();
        assert!(matches!(err, ItemError::NotACollection { found: "string" }));
    }

    #[test]
    fn test_deserialize_untagged() {
        let list: Options = serde_json::from_str(r#"[1, 2, 3]"#).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.is_list());

        let map: Options = serde_json::from_str(r#"{"b": "B", "a": "A"}"#).unwrap();
        let keys: Vec<String> = map.iter().map(|(pos, _)| pos.to_key()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_iter_positions() {
        let options = Options::from(["a", "b"]);
        let positions: Vec<Position<'_>> = options.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![Position::Index(0), Position::Index(1)]);
        assert_eq!(options.iter().len(), 2);
    }

    #[test]
    fn test_is_identical_respects_map_order() {
        let xy = Options::from_value(json!({"x": 1, "y": 2})).unwrap();
        let yx = Options::from_value(json!({"y": 2, "x": 1})).unwrap();
        assert!(xy.is_identical(&xy.clone()));
        assert!(!xy.is_identical(&yx));
    }

    #[test]
    fn test_is_identical_respects_nested_order() {
        let a = Options::from_value(json!([{"id": 1, "tags": {"p": 1, "q": 2}}])).unwrap();
        let b = Options::from_value(json!([{"id": 1, "tags": {"q": 2, "p": 1}}])).unwrap();
        assert!(!a.is_identical(&b));

        let keyed = Options::from_value(json!({"0": "a"})).unwrap();
        assert!(!Options::from(["a"]).is_identical(&keyed));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Index(3).to_string(), "index 3");
        assert_eq!(Position::Key("x").to_string(), "key \"x\"");
    }
}

//! Structural equality between entries.
//!
//! Two entries are equal when they would serialize to the same canonical
//! JSON: object key order does not matter and numbers compare by value, so
//! `1` and `1.0` are the same entry. Identity is never consulted.

use serde_json::{Number, Value};

use crate::options::Entry;

/// Whether two entries are structurally equal.
///
/// Used to decide whether a listed entry is the currently selected one.
///
/// ```
/// use lattice_select_core::items_equal;
/// use serde_json::json;
///
/// assert!(items_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1.0})));
/// assert!(!items_equal(&json!("1"), &json!(1)));
/// ```
pub fn items_equal(a: &Entry, b: &Entry) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| items_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| items_equal(x, y)))
        }
        _ => false,
    }
}

/// Equality over optional entries; two absent entries are equal.
pub fn optional_items_equal(a: Option<&Entry>, b: Option<&Entry>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => items_equal(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reflexive() {
        for value in [
            json!(null),
            json!(true),
            json!(3),
            json!("s"),
            json!([1, [2, 3]]),
            json!({"id": 1, "tags": ["a"]}),
        ] {
            assert!(items_equal(&value, &value));
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (json!({"a": 1}), json!({"a": 1})),
            (json!({"a": 1}), json!({"a": 2})),
            (json!([1]), json!([1, 2])),
            (json!(1), json!("1")),
        ];
        for (a, b) in &pairs {
            assert_eq!(items_equal(a, b), items_equal(b, a));
        }
    }

    #[test]
    fn test_distinct_but_identical_records_are_equal() {
        let a = json!({"id": 1, "name": "A"});
        let b = json!({"name": "A", "id": 1});
        assert!(items_equal(&a, &b));
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(items_equal(&json!(1), &json!(1.0)));
        assert!(items_equal(&json!(-3), &json!(-3.0)));
        assert!(!items_equal(&json!(1), &json!(1.5)));
        assert!(items_equal(&json!(u64::MAX), &json!(u64::MAX)));
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(!items_equal(&json!(null), &json!(false)));
        assert!(!items_equal(&json!([]), &json!({})));
        assert!(!items_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_optional() {
        assert!(optional_items_equal(None, None));
        assert!(!optional_items_equal(Some(&json!(1)), None));
        assert!(optional_items_equal(Some(&json!(1)), Some(&json!(1))));
    }
}

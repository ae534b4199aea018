//! Key derivation.
//!
//! [`key_extractor`] inspects the options collection and the selector once and
//! returns a [`KeyExtractor`] that is then applied to every entry. Keys are
//! always strings: list rendering and selection comparison rely on them being
//! stable across calls for the same entry.

use serde_json::{Number, Value};

use crate::error::{ItemError, Result};
use crate::options::{Entry, Options, Position, kind_of};
use crate::selector::{KeyFn, KeySelector};

/// A key derivation strategy chosen for one options collection.
#[derive(Clone)]
pub enum KeyExtractor<'s> {
    /// Apply a caller function and stringify its result.
    Func(&'s KeyFn),
    /// Read a named field and stringify it.
    Field(&'s str),
    /// Structured entries serialize to JSON, primitives use their string form.
    Serialized,
    /// Use the entry's position in the collection (map key).
    Positional,
}

impl std::fmt::Debug for KeyExtractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Func(..)"),
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Serialized => f.write_str("Serialized"),
            Self::Positional => f.write_str("Positional"),
        }
    }
}

/// Choose how keys are derived for `options` under `selector`.
///
/// An explicit selector always wins. Without one, list entries are keyed by
/// their own content and map entries by their map key.
pub fn key_extractor<'s>(options: &Options, selector: &'s KeySelector) -> KeyExtractor<'s> {
    match selector {
        KeySelector::Func(f) => KeyExtractor::Func(f),
        KeySelector::Field(name) => KeyExtractor::Field(name),
        KeySelector::Default if options.is_list() => KeyExtractor::Serialized,
        KeySelector::Default => KeyExtractor::Positional,
    }
}

impl KeyExtractor<'_> {
    /// Derive the key for `entry` found at `position`.
    pub fn extract(&self, entry: &Entry, position: Position<'_>) -> Result<String> {
        match self {
            Self::Func(f) => {
                let derived =
                    f(entry).map_err(|source| ItemError::selector_function(position, source))?;
                to_key_string(&derived).ok_or_else(|| ItemError::null_key(position))
            }
            Self::Field(name) => {
                let field = match entry {
                    Value::Object(record) => record.get(*name),
                    _ => None,
                }
                .ok_or_else(|| ItemError::malformed_selector(*name, position, kind_of(entry)))?;
                to_key_string(field).ok_or_else(|| ItemError::null_key(position))
            }
            Self::Serialized => match entry {
                Value::Object(_) | Value::Array(_) | Value::Null => {
                    Ok(serde_json::to_string(entry)?)
                }
                primitive => to_key_string(primitive).ok_or_else(|| ItemError::null_key(position)),
            },
            Self::Positional => Ok(position.to_key()),
        }
    }
}

/// String form of a value as used for keys.
///
/// Returns `None` for `null`, which has no string form. Integral floats print
/// without a fraction, arrays join their elements with commas and objects
/// collapse to `[object Object]`.
pub fn to_key_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_string(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(elements) => Some(
            elements
                .iter()
                .map(|element| to_key_string(element).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // -0.0 prints as "0"
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_to_string(f),
        // f64 Display omits the fraction of integral values
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Exponent form with an explicit sign on positive exponents (`1e+21`).
fn exponent_to_string(f: f64) -> String {
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

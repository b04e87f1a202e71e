//! Stateless conversion utilities shared by constraint checks.
//!
//! This module provides [`to_object_recursive`] for normalizing arbitrary
//! serializable values into interchange form, and [`json_pattern_to_regex`]
//! for adapting JSON-Schema `pattern` strings to the host regex engine.

use serde::ser;
use serde::Serialize;
use serde_json::{Map, Value};

/// Raised when a value cannot be represented in the interchange format.
///
/// The message carries the encoder's own diagnostic. Encoding failures are
/// always fatal to the operation that triggered them.
#[derive(Debug, thiserror::Error)]
#[error("could not encode value as JSON: {0}")]
pub struct EncodingError(#[from] serde_json::Error);

/// Converts a serializable value into normalized interchange form.
///
/// The value is encoded to JSON, then recursively reclassified: any object
/// whose key set is exactly `"0"` through `"len-1"` becomes an array in
/// numeric key order; every other object keeps its keys; arrays recurse
/// element-wise; scalars pass through. Empty objects stay objects.
///
/// # Errors
///
/// Returns [`EncodingError`] if the value cannot be represented in JSON:
/// NaN or infinite numerics, maps with non-string keys, or a failing
/// `Serialize` impl. There is no lossy path; non-finite floats are rejected
/// rather than encoded as `null`.
///
/// # Example
///
/// ```rust
/// use faultline::to_object_recursive;
/// use serde_json::json;
/// use std::collections::BTreeMap;
///
/// let mut items = BTreeMap::new();
/// items.insert("0".to_string(), "a");
/// items.insert("1".to_string(), "b");
///
/// assert_eq!(to_object_recursive(&items).unwrap(), json!(["a", "b"]));
/// assert!(to_object_recursive(&f64::NAN).is_err());
/// ```
pub fn to_object_recursive<T: Serialize>(value: &T) -> Result<Value, EncodingError> {
    // The encoder maps non-finite floats to null instead of failing;
    // reject them up front so nothing is silently lost.
    value.serialize(FiniteNumbers)?;
    let encoded = serde_json::to_value(value)?;
    Ok(normalize(encoded))
}

fn normalize(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(mut map) => match sequential_keys(&map) {
            Some(keys) => Value::Array(
                keys.iter()
                    // sequential_keys guarantees every key is present
                    .filter_map(|k| map.remove(k))
                    .map(normalize)
                    .collect(),
            ),
            None => Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect()),
        },
        scalar => scalar,
    }
}

/// Returns the keys `"0".."len-1"` in numeric order if the map's key set is
/// exactly that, or `None` for associative/mixed-key maps.
fn sequential_keys(map: &Map<String, Value>) -> Option<Vec<String>> {
    if map.is_empty() {
        return None;
    }
    (0..map.len())
        .map(|i| {
            let key = i.to_string();
            map.contains_key(&key).then_some(key)
        })
        .collect()
}

/// Adapts a JSON-Schema `pattern` string for the host regex engine.
///
/// JSON Schema patterns are ECMA 262 regexes, unanchored, with Unicode
/// semantics; the returned string prefixes the Unicode-mode flag and is
/// suitable for `regex::Regex::new`. Syntax is not validated here: a
/// malformed pattern surfaces as a `regex::Error` when the caller compiles
/// it, not from this function.
///
/// # Example
///
/// ```rust
/// use faultline::json_pattern_to_regex;
/// use regex::Regex;
///
/// let re = Regex::new(&json_pattern_to_regex("a~b")).unwrap();
/// assert!(re.is_match("xa~by"));
/// ```
pub fn json_pattern_to_regex(pattern: &str) -> String {
    format!("(?u){}", pattern)
}

fn non_finite_error() -> serde_json::Error {
    ser::Error::custom("NaN and Infinity cannot be encoded as JSON numbers")
}

/// Pre-pass serializer that walks a value and fails on non-finite floats.
///
/// Every other kind of value is accepted without output; compound values
/// recurse element-wise.
struct FiniteNumbers;

struct FiniteNumbersCompound;

impl ser::Serializer for FiniteNumbers {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = FiniteNumbersCompound;
    type SerializeTuple = FiniteNumbersCompound;
    type SerializeTupleStruct = FiniteNumbersCompound;
    type SerializeTupleVariant = FiniteNumbersCompound;
    type SerializeMap = FiniteNumbersCompound;
    type SerializeStruct = FiniteNumbersCompound;
    type SerializeStructVariant = FiniteNumbersCompound;

    fn serialize_f32(self, v: f32) -> Result<(), Self::Error> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(non_finite_error())
        }
    }

    fn serialize_f64(self, v: f64) -> Result<(), Self::Error> {
        if v.is_finite() {
            Ok(())
        } else {
            Err(non_finite_error())
        }
    }

    fn serialize_bool(self, _: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i8(self, _: i8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i16(self, _: i16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i32(self, _: i32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i64(self, _: i64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i128(self, _: i128) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u8(self, _: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u16(self, _: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u32(self, _: u32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u64(self, _: u64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u128(self, _: u128) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_char(self, _: char) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_str(self, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_bytes(self, _: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, _: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(FiniteNumbersCompound)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(FiniteNumbersCompound)
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(FiniteNumbersCompound)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(FiniteNumbersCompound)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(FiniteNumbersCompound)
    }

    fn serialize_struct(
        self,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(FiniteNumbersCompound)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(FiniteNumbersCompound)
    }
}

impl ser::SerializeSeq for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        key.serialize(FiniteNumbers)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, _: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteNumbersCompound {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, _: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(FiniteNumbers)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequential_keyed_object_becomes_array() {
        let value = json!({"0": "a", "1": "b", "2": "c"});
        assert_eq!(normalize(value), json!(["a", "b", "c"]));
    }

    #[test]
    fn test_gapped_keys_stay_object() {
        let value = json!({"0": "a", "2": "c"});
        assert_eq!(normalize(value), json!({"0": "a", "2": "c"}));
    }

    #[test]
    fn test_mixed_keys_stay_object() {
        let value = json!({"0": "a", "name": "b"});
        assert_eq!(normalize(value), json!({"0": "a", "name": "b"}));
    }

    #[test]
    fn test_numeric_order_beyond_nine() {
        // Lexicographic key order would put "10" before "2"; numeric
        // classification must not care.
        let mut map = Map::new();
        for i in 0..12 {
            map.insert(i.to_string(), json!(i));
        }
        let normalized = normalize(Value::Object(map));
        assert_eq!(
            normalized,
            json!([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])
        );
    }

    #[test]
    fn test_nested_normalization() {
        let value = json!({"outer": {"0": {"1": "x", "0": "w"}, "1": [1, 2]}});
        assert_eq!(normalize(value), json!({"outer": [["w", "x"], [1, 2]]}));
    }

    #[test]
    fn test_empty_object_stays_object() {
        assert_eq!(normalize(json!({})), json!({}));
    }

    #[test]
    fn test_scalars_pass_through() {
        assert_eq!(normalize(json!("s")), json!("s"));
        assert_eq!(normalize(json!(3)), json!(3));
        assert_eq!(normalize(json!(null)), json!(null));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        assert!(to_object_recursive(&f64::NAN).is_err());
        assert!(to_object_recursive(&f64::INFINITY).is_err());
        assert!(to_object_recursive(&f64::NEG_INFINITY).is_err());
        assert!(to_object_recursive(&f32::NAN).is_err());
    }

    #[test]
    fn test_finite_floats_still_encode() {
        assert_eq!(to_object_recursive(&1.5f64).unwrap(), json!(1.5));
    }

    #[test]
    fn test_unicode_flag_prefix() {
        assert_eq!(json_pattern_to_regex(r"^\d+$"), r"(?u)^\d+$");
    }
}

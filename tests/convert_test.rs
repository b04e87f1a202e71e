//! Integration tests for the stateless conversion utilities.

use std::collections::{BTreeMap, HashMap};

use faultline::{json_pattern_to_regex, to_object_recursive};
use regex::Regex;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Profile {
    name: String,
    tags: Vec<String>,
    attributes: BTreeMap<String, u32>,
}

#[test]
fn test_round_trips_nested_structure_losslessly() {
    let mut attributes = BTreeMap::new();
    attributes.insert("height".to_string(), 180);
    attributes.insert("weight".to_string(), 75);

    let profile = Profile {
        name: "ada".to_string(),
        tags: vec!["admin".to_string(), "ops".to_string()],
        attributes,
    };

    let value = to_object_recursive(&profile).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "ada",
            "tags": ["admin", "ops"],
            "attributes": { "height": 180, "weight": 75 },
        })
    );
}

#[test]
fn test_sequential_string_keys_become_sequence() {
    let mut items = BTreeMap::new();
    items.insert("0".to_string(), json!({"id": 1}));
    items.insert("1".to_string(), json!({"id": 2}));

    let value = to_object_recursive(&items).unwrap();
    assert_eq!(value, json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn test_associative_keys_stay_keyed() {
    let mut items = BTreeMap::new();
    items.insert("0".to_string(), json!("a"));
    items.insert("two".to_string(), json!("b"));

    let value = to_object_recursive(&items).unwrap();
    assert_eq!(value, json!({"0": "a", "two": "b"}));
}

#[test]
fn test_unencodable_value_is_an_encoding_error() {
    // Tuple map keys have no JSON representation.
    let mut bad: HashMap<(u32, u32), &str> = HashMap::new();
    bad.insert((1, 2), "x");

    let err = to_object_recursive(&bad).unwrap_err();
    assert!(err.to_string().starts_with("could not encode value as JSON:"));
}

#[test]
fn test_non_finite_numerics_are_encoding_errors() {
    // The encoder would represent these as null; the conversion must fail
    // instead of losing the value.
    assert!(to_object_recursive(&f64::NAN).is_err());
    assert!(to_object_recursive(&f64::INFINITY).is_err());
    assert!(to_object_recursive(&f64::NEG_INFINITY).is_err());
    assert!(to_object_recursive(&f32::NAN).is_err());
}

#[test]
fn test_non_finite_numeric_detected_inside_nested_structure() {
    #[derive(Serialize)]
    struct Reading {
        label: String,
        samples: Vec<f64>,
    }

    let reading = Reading {
        label: "probe-a".to_string(),
        samples: vec![1.0, f64::NAN, 3.0],
    };

    let err = to_object_recursive(&reading).unwrap_err();
    assert!(err.to_string().contains("NaN"));
}

#[test]
fn test_finite_floats_round_trip() {
    let samples = vec![1.5f64, -2.25, 0.0];
    assert_eq!(to_object_recursive(&samples).unwrap(), json!([1.5, -2.25, 0.0]));
}

#[test]
fn test_pattern_is_unanchored_and_unicode() {
    let re = Regex::new(&json_pattern_to_regex(r"\d+")).unwrap();
    assert!(re.is_match("order 42 shipped"));

    let re = Regex::new(&json_pattern_to_regex(r"\w+")).unwrap();
    assert!(re.is_match("héllo"));
}

#[test]
fn test_pattern_with_tilde_matches_literally() {
    let re = Regex::new(&json_pattern_to_regex("a~b")).unwrap();
    assert!(re.is_match("a~b"));
    assert!(!re.is_match("axb"));
}

#[test]
fn test_malformed_pattern_surfaces_at_compile_time_not_conversion() {
    // Conversion itself never validates syntax.
    let pattern = json_pattern_to_regex("a(b");
    assert!(Regex::new(&pattern).is_err());
}

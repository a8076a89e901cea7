use std::collections::BTreeMap;

use jsonval::{json, Null, Object, Value};

#[test]
fn get_from_array() {
    let v = json!([{"test": 1}, null, "my_string", 1.0]);

    assert!(v[0].is::<Object>());
    assert!(v[1].is::<Null>());
    assert!(v[2].is::<String>());
    assert!(v[3].is::<f64>());
    assert!(v[3].is::<f32>());
    assert!(v[3].is::<i32>());
    // Out of bounds never panics, it yields null.
    assert!(v[4].is::<Null>());
}

#[test]
fn get_from_object() {
    let o = json!({"key": "value", "int": 1});

    assert!(o["key"].is::<String>());
    assert!(o["int"].is::<i32>());
    assert!(o["unexist"].is::<Null>());
}

#[test]
fn get_from_complex_structure() {
    let v = json!([{"test": 1}, null, "my_string", 1.0]);

    assert!(v[0].is::<BTreeMap<String, i32>>());
    assert!(v[0]["test"].is::<i32>());
    assert_eq!(v[0]["test"].cast::<i32>().unwrap(), 1);
}

#[test]
fn concrete_scenario() {
    let v = json!({"a": 1.0, "b": [true, "x"]});

    assert!(v.is::<Object>());
    assert_eq!(v["a"].cast::<f64>().unwrap(), 1.0);
    assert!(v["b"].is::<Vec<Value>>());
    assert!(v["b"][0].cast::<bool>().unwrap());
    assert_eq!(v["b"][1].cast::<String>().unwrap(), "x");
    assert!(v["c"].is::<Null>());
}

#[test]
fn round_trip_native_containers() {
    let sequence = vec![3.0_f64, 1.0, 2.0];
    let value = Value::from(sequence.clone());
    assert_eq!(value.cast::<Vec<f64>>().unwrap(), sequence);

    let mut mapping = BTreeMap::new();
    mapping.insert("z".to_owned(), 1_i64);
    mapping.insert("a".to_owned(), 2_i64);
    let value = Value::from(mapping.clone());
    assert_eq!(value.cast::<BTreeMap<String, i64>>().unwrap(), mapping);
}

#[test]
fn copy_independence() {
    let a = json!({"list": [1, 2, 3]});
    let mut b = a.clone();
    if let Value::Object(entries) = &mut b {
        entries.insert("list".to_owned(), json!("replaced"));
    }
    assert_eq!(a["list"], json!([1, 2, 3]));
    assert_eq!(b["list"], json!("replaced"));
}

#[test]
fn move_emptying() {
    let mut a = json!({"payload": "content"});
    let b = a.take();
    assert!(a.is::<Null>());
    assert_eq!(b, json!({"payload": "content"}));
}

#[test]
fn type_mismatch_fails_and_default_suppresses() {
    let v = json!("definitely not a bool");

    let error = v.cast::<bool>().unwrap_err();
    assert_eq!(error.to_string(), "invalid type: expected boolean, found string");
    assert!(v.cast_or(true));
}

#[test]
fn failed_cast_leaves_value_unchanged() {
    let v = json!([1, "mixed"]);
    assert!(v.cast::<Vec<f64>>().is_err());
    assert_eq!(v, json!([1, "mixed"]));
}

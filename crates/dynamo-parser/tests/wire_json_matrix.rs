//! Serde shape of the wire types against DynamoDB-style JSON literals.

use dynamo_parser::{AttrMap, AttrValue};
use serde_json::json;

#[test]
fn attr_value_serializes_to_wire_shapes() {
    assert_eq!(
        serde_json::to_value(AttrValue::s("charlie")).unwrap(),
        json!({"S": "charlie"})
    );
    assert_eq!(
        serde_json::to_value(AttrValue::n(3579)).unwrap(),
        json!({"N": "3579"})
    );
    assert_eq!(
        serde_json::to_value(AttrValue::bool(true)).unwrap(),
        json!({"BOOL": true})
    );
}

#[test]
fn attr_value_parses_wire_shapes() {
    let s: AttrValue = serde_json::from_value(json!({"S": "bravo"})).unwrap();
    assert_eq!(s, AttrValue::s("bravo"));

    let n: AttrValue = serde_json::from_value(json!({"N": "2468"})).unwrap();
    assert_eq!(n, AttrValue::n(2468));

    let b: AttrValue = serde_json::from_value(json!({"BOOL": false})).unwrap();
    assert_eq!(b, AttrValue::bool(false));
}

#[test]
fn attr_value_rejects_unknown_tags() {
    let set: Result<AttrValue, _> = serde_json::from_value(json!({"NS": ["1", "2"]}));
    assert!(set.is_err());

    let untagged: Result<AttrValue, _> = serde_json::from_value(json!("plain"));
    assert!(untagged.is_err());
}

#[test]
fn attr_map_round_trips_through_json() {
    let mut map = AttrMap::new();
    map.insert("reqString".to_owned(), AttrValue::s("charlie"));
    map.insert("reqInt".to_owned(), AttrValue::n(3579));
    map.insert("flag".to_owned(), AttrValue::bool(true));

    let text = serde_json::to_string(&map).unwrap();
    let back: AttrMap = serde_json::from_str(&text).unwrap();
    assert_eq!(back, map);
}

//! Shapes travelling through jsonbridge.

use insta::assert_snapshot;
use jsonbridge::{JsonBridgeError, Reconstruct, deserialize, deserialize_named, serialize};
use shapes::{Circle, Rectangle, make_rectangle};

#[test]
fn rectangle_json() {
    let json = serialize(&make_rectangle(10.0, 20.0)).unwrap();
    assert_snapshot!(json, @r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn rectangle_round_trip() {
    let original = make_rectangle(3.25, 8.0);
    let back: Rectangle = deserialize(&serialize(&original).unwrap()).unwrap();
    assert_eq!(back, original);
    assert_eq!(back.area(), original.area());
}

#[test]
fn rectangle_from_reordered_json() {
    let text = r#"{"height":20,"width":10}"#;

    // Positional: values land in declaration order regardless of keys
    let positional: Rectangle = deserialize(text).unwrap();
    assert_eq!(positional, Rectangle::new(20.0, 10.0));

    let named: Rectangle = deserialize_named(text).unwrap();
    assert_eq!(named, Rectangle::new(10.0, 20.0));

    // Area is the same either way
    assert_eq!(positional.area(), named.area());
}

#[test]
fn circle_from_json() {
    let circle: Circle = deserialize(r#"{ "radius":10 }"#).unwrap();
    assert_eq!(circle, Circle::new(10.0));
    assert_eq!(Circle::PARAMETERS, &["radius"]);
}

#[test]
fn circle_rejects_rectangle_json() {
    let err = deserialize::<Circle>(r#"{"width":1,"height":2}"#).unwrap_err();
    assert_snapshot!(err.to_string(), @"Circle: expected 1 argument(s), found 2");
}

#[test]
fn rectangle_rejects_malformed_json() {
    assert!(matches!(
        deserialize::<Rectangle>("{width: 1}"),
        Err(JsonBridgeError::Parse(_))
    ));
}

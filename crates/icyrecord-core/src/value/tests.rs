use crate::{
    args,
    model::RecordType,
    test_support::{employee, person},
    value::{Kind, Value},
};
use std::sync::Arc;

#[test]
fn kind_tracks_variant() {
    assert_eq!(Value::from(5).kind(), Kind::Int);
    assert_eq!(Value::from(5u8).kind(), Kind::Uint);
    assert_eq!(Value::from(true).kind(), Kind::Bool);
    assert_eq!(Value::from(1.5).kind(), Kind::Float);
    assert_eq!(Value::from("x").kind(), Kind::Text);
    assert_eq!(Value::from(()).kind(), Kind::Null);
    assert_eq!(Value::Blob(vec![]).kind(), Kind::Blob);
}

#[test]
fn bool_is_not_an_int() {
    assert_ne!(Value::Bool(true).kind(), Kind::Int);
    assert_ne!(Value::Uint(1).kind(), Kind::Int);
    assert_ne!(Value::Int(1).kind(), Kind::Float);
}

#[test]
fn record_kind_compares_by_identity() {
    let a = RecordType::builder("Same").build().unwrap();
    let b = RecordType::builder("Same").build().unwrap();

    assert_eq!(Kind::Record(a.clone()), Kind::Record(a.clone()));
    assert_ne!(Kind::Record(a), Kind::Record(b));
}

#[test]
fn nested_record_value_reports_its_own_type() {
    let base = person();
    let derived = employee(&base);
    let record = derived
        .construct(args! { "name" => "Ada", "age" => 36, "company" => "Analytical" })
        .unwrap();
    let value = Value::Record(Arc::new(record));

    assert_eq!(value.kind(), Kind::Record(derived));
    assert_ne!(value.kind(), Kind::Record(base));
}

#[test]
fn display_matches_field_rendering() {
    assert_eq!(Value::Float(1.0).to_string(), "1.0");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Text("hi".into()).to_string(), "hi");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(
        Value::List(vec![Value::Text("a".into()), Value::Bool(false)]).to_string(),
        "['a', false]"
    );
}

#[test]
fn kind_labels_name_record_types() {
    let ty = person();

    assert_eq!(Kind::Record(ty).label(), "Record(Person)");
    assert_eq!(Kind::Uint.label(), "Uint");
    assert!(Kind::Text.is_text());
    assert!(!Kind::Int.is_text());
}

#[test]
fn records_serialize_as_field_maps() {
    let ty = person();
    let ada = ty.construct(args! { "name" => "Ada", "age" => 36 }).unwrap();
    let json = serde_json::to_value(Value::from(ada)).unwrap();

    assert_eq!(json, serde_json::json!({ "Record": { "name": { "Text": "Ada" }, "age": { "Int": 36 } } }));
}

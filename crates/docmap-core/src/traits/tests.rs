use crate::{
    error::{ErrorClass, PathSegment},
    model::FieldKind,
    traits::{DocumentKey, DocumentValue},
    types::{Blob, Timestamp, Ulid},
    value::{Document, Value},
};
use std::collections::{BTreeMap, HashMap, VecDeque};

#[test]
fn integers_accept_either_sign_family_when_in_range() {
    assert_eq!(u8::from_value(Value::Int(200)), Ok(200));
    assert_eq!(i32::from_value(Value::Uint(7)), Ok(7));
    assert_eq!(i64::from_value(Value::Int(-4)), Ok(-4));
}

#[test]
fn integers_out_of_range_are_field_access_errors() {
    let err = u8::from_value(Value::Int(256)).expect_err("too large");
    assert_eq!(err.class, ErrorClass::FieldAccess);
    assert_eq!(err.message, "value 256 is out of range for uint");

    let err = u32::from_value(Value::Int(-1)).expect_err("negative");
    assert_eq!(err.class, ErrorClass::FieldAccess);
}

#[test]
fn scalar_type_mismatch_names_both_sides() {
    let err = bool::from_value(Value::Text("yes".into())).expect_err("mismatch");

    assert_eq!(err.message, "expected bool, found Text");
    assert!(err.path.is_root());
}

#[test]
fn floats_widen_from_integers() {
    assert_eq!(f64::from_value(Value::Int(3)), Ok(3.0));
    assert_eq!(f32::from_value(Value::Float(0.5)), Ok(0.5));
    assert!(f64::from_value(Value::Bool(true)).is_err());
}

#[test]
fn option_maps_null_to_none() {
    assert_eq!(Option::<u32>::from_value(Value::Null), Ok(None));
    assert_eq!(Option::<u32>::from_value(Value::Uint(1)), Ok(Some(1)));
    assert_eq!(None::<String>.to_value(), Value::Null);
}

#[test]
fn boxed_values_are_transparent() {
    assert_eq!(<Box<String> as DocumentValue>::KIND, &FieldKind::Text);
    assert_eq!(Box::new(5_i64).to_value(), Value::Int(5));
}

#[test]
fn sequences_keep_order_and_report_index() {
    let items = vec![3_u16, 1, 2];
    assert_eq!(
        items.to_value(),
        Value::List(vec![Value::Uint(3), Value::Uint(1), Value::Uint(2)])
    );

    let deque = VecDeque::<u16>::from_value(items.to_value()).expect("deque");
    assert_eq!(deque, VecDeque::from(vec![3, 1, 2]));

    let err = Vec::<u16>::from_value(Value::List(vec![Value::Uint(1), Value::Text("x".into())]))
        .expect_err("bad element");
    assert_eq!(err.path.to_string(), "[1]");
}

#[test]
fn sequence_from_non_list_is_mismatch() {
    let err = Vec::<u16>::from_value(Value::Uint(1)).expect_err("not a list");

    assert_eq!(err.message, "expected list<uint>, found Uint");
}

#[test]
fn mappings_use_textual_keys() {
    let mut map = BTreeMap::new();
    map.insert(2_u32, "two".to_string());
    map.insert(10_u32, "ten".to_string());

    let value = map.to_value();
    let doc = value.as_document().expect("document");
    assert_eq!(doc.get("10"), Some(&Value::Text("ten".into())));

    let back = BTreeMap::<u32, String>::from_value(value).expect("map");
    assert_eq!(back, map);
}

#[test]
fn mapping_errors_report_key() {
    let doc: Document = [("a", Value::Int(1)), ("b", Value::Bool(true))]
        .into_iter()
        .collect();

    let err = HashMap::<String, i64>::from_value(Value::Document(doc)).expect_err("bad value");
    assert_eq!(err.path.segments(), [PathSegment::Key("b".into())]);
}

#[test]
fn unparseable_keys_are_rejected() {
    let doc: Document = [("nope", Value::Int(1))].into_iter().collect();

    let err = BTreeMap::<u64, i64>::from_value(Value::Document(doc)).expect_err("bad key");
    assert!(err.is_field_access());
    assert!(err.message.starts_with("invalid mapping key 'nope'"));
}

#[test]
fn keys_round_trip_through_text() {
    let ulid = Ulid::from_parts(1, 2);

    assert_eq!(Ulid::from_key(&ulid.to_key()), Ok(ulid));
    assert_eq!(char::from_key("x"), Ok('x'));
    assert_eq!(i16::from_key("-12"), Ok(-12));
    assert_eq!(Timestamp::from_key("1500"), Ok(Timestamp::from_millis(1_500)));
    assert_eq!(Timestamp::from_millis(7).to_key(), "7");
    assert!(char::from_key("xy").is_err());
}

#[test]
fn blob_and_dynamic_values() {
    let blob = Blob::from(vec![9_u8, 8]);
    assert_eq!(blob.to_value(), Value::Blob(vec![9, 8]));
    assert_eq!(Blob::from_value(Value::Blob(vec![1])), Ok(Blob::from(vec![1_u8])));

    let any = Value::List(vec![Value::Null, Value::Bool(true)]);
    assert_eq!(Value::from_value(any.clone()), Ok(any));
    assert_eq!(<Value as DocumentValue>::KIND, &FieldKind::Dynamic);
}

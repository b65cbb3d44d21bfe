use super::*;
use crate::value::{Document, Value};

fn sample() -> Document {
    [
        ("name", Value::Text("John".into())),
        ("tags", Value::List(vec![Value::Int(1), Value::Null])),
    ]
    .into_iter()
    .collect()
}

#[test]
fn cbor_round_trip_preserves_shape() {
    let doc = sample();

    let bytes = serialize(&doc).expect("serialize");
    let back: Document = deserialize(&bytes).expect("deserialize");

    assert_eq!(back, doc);
}

#[test]
fn bounded_rejects_oversized_input() {
    let bytes = serialize(&sample()).expect("serialize");

    let err = deserialize_bounded::<Document>(&bytes, bytes.len() - 1).expect_err("too large");
    assert!(matches!(
        err,
        SerializeError::TooLarge { format: WireFormat::Cbor, len, max_bytes }
            if len == bytes.len() && max_bytes == bytes.len() - 1
    ));

    let ok = deserialize_bounded::<Document>(&bytes, bytes.len());
    assert!(ok.is_ok());
}

#[test]
fn garbage_is_a_deserialize_error() {
    let err = deserialize::<Document>(&[0xff, 0x00, 0x13]).expect_err("garbage");

    assert!(matches!(err, SerializeError::Decode { .. }));
    assert_eq!(err.format(), WireFormat::Cbor);
    assert!(err.to_string().starts_with("cannot decode CBOR: "));
}

#[test]
fn non_map_is_not_a_document() {
    let bytes = serialize(&Value::Int(3)).expect("serialize");

    assert!(deserialize::<Document>(&bytes).is_err());
    assert_eq!(deserialize::<Value>(&bytes).expect("value"), Value::Int(3));
}

#[test]
fn json_pretty_and_compact_agree() {
    let doc = sample();

    let compact = json::to_string(&doc).expect("compact");
    let pretty = json::to_string_pretty(&doc).expect("pretty");

    assert_eq!(compact, r#"{"name":"John","tags":[1,null]}"#);
    assert_eq!(json::from_str::<Document>(&pretty).expect("parse"), doc);
}

#[test]
fn json_errors_name_their_format() {
    let err = json::from_str::<Document>("[1, 2]").expect_err("not a document");

    assert!(matches!(err, SerializeError::Decode { .. }));
    assert_eq!(err.format(), WireFormat::Json);
    assert!(err.to_string().starts_with("cannot decode JSON: "));
}

use serde_json::json;
use typesafe_url_rs::value::{CodecError, CodecOptions, decode_value, decode_value_with, encode_value, encode_value_with};

#[test]
fn codec_when_string_is_not_a_json_literal_then_round_trips_identically() {
    for text in [
        "foo",
        "hello world",
        "Hello, this is a string with special characters like !@#$%^&*()_-+=[]{}|;:'\",.<>?/ and spaces.",
        "café",
        "trailing space ",
    ] {
        let encoded = encode_value(&json!(text)).expect("string should encode");
        assert_eq!(decode_value(&encoded), json!(text), "round trip of {text:?}");
    }
}

#[test]
fn codec_when_value_is_structured_then_round_trips_deep_equal() {
    for value in [
        json!([1, 2, 3]),
        json!(["hi", "bye"]),
        json!([["hi"], ["bye"]]),
        json!({"foo": "bar"}),
        json!({"foo": {"bar": "baz"}}),
        json!({"hi": {"bye": "hi"}, "bye": [{"hi": "bye"}, {"bye": "hi"}]}),
        json!(null),
    ] {
        let encoded = encode_value(&value).expect("value should encode");
        assert_eq!(decode_value(&encoded), value, "round trip of {value}");
    }
}

#[test]
fn codec_when_scalars_encode_then_text_is_canonical() {
    assert_eq!(encode_value(&json!(1)).unwrap(), "1");
    assert_eq!(encode_value(&json!(23.5)).unwrap(), "23.5");
    assert_eq!(encode_value(&json!(true)).unwrap(), "true");
    assert_eq!(encode_value(&json!(false)).unwrap(), "false");
    assert_eq!(encode_value(&json!(null)).unwrap(), "null");
}

#[test]
fn codec_when_empty_string_is_encoded_then_fails() {
    assert!(matches!(
        encode_value(&json!("")),
        Err(CodecError::EmptyString)
    ));
}

#[test]
fn codec_when_string_looks_like_a_json_literal_then_decodes_to_the_typed_value() {
    // The documented boundary: these strings cannot round-trip as strings
    // without an extra quoting layer.
    assert_eq!(decode_value("123"), json!(123));
    assert_eq!(decode_value("true"), json!(true));
    assert_eq!(decode_value("null"), json!(null));
}

#[test]
fn codec_when_string_is_double_json_encoded_then_decodes_to_the_inner_string() {
    assert_eq!(encode_value(&json!("\"true\"")).unwrap(), "%22true%22");
    assert_eq!(decode_value("%22true%22"), json!("true"));

    assert_eq!(encode_value(&json!("\"1\"")).unwrap(), "%221%22");
    assert_eq!(decode_value("%221%22"), json!("1"));

    assert_eq!(encode_value(&json!("\"null\"")).unwrap(), "%22null%22");
    assert_eq!(decode_value("%22null%22"), json!("null"));
}

#[test]
fn codec_when_separator_is_configured_then_arrays_round_trip_readably() {
    let options = CodecOptions {
        array_format_separator: Some('~'),
    };

    let encoded = encode_value_with(&json!(["NL", "UK"]), &options).unwrap();
    assert_eq!(encoded, "NL~UK");
    assert_eq!(decode_value_with(&encoded, &options), json!(["NL", "UK"]));
}

use context_string_format as csf;
use csf::formatters::builtins::{Array, Plain};
use csf::Format;
use serde_json::json;

#[test]
fn test_plain_matches_value() {
    for v in [json!("s"), json!(3), json!(false), json!([1, [2, 3]])] {
        assert_eq!(Plain.format(&v), csf::value(&v));
    }
    assert_eq!(csf::value(&json!([1, [2, 3]])), "[1 [2 3]]");
}

#[test]
fn test_array_of_strings() {
    assert_eq!(csf::array(", ").format(&json!(["foo", "bar"])), "foo, bar");
}

#[test]
fn test_array_of_mixed_values() {
    assert_eq!(
        Array::new(";").format(&json!(["a", 2, {"k": 1}])),
        r#"a;2;{"k":1}"#
    );
}

#[test]
fn test_array_non_sequence_fallback() {
    assert_eq!(csf::array(", ").format(&json!(12)), "12");
    assert_eq!(csf::array(", ").format(&json!("foo")), "foo");
}

#[test]
fn test_const() {
    assert_eq!(csf::constant("x").format(&json!(null)), "x");
}

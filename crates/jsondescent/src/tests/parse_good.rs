use rstest::rstest;

use crate::{Map, ParserOptions, Value, parse, parse_with_options};

fn obj<const N: usize>(members: [(&str, Value); N]) -> Value {
    Value::Object(members.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn arr<const N: usize>(items: [Value; N]) -> Value {
    Value::Array(items.into())
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test_log::test]
fn nested_document_with_mixed_spacing() {
    let value = parse(
        r#"{"oo":[12, true, false, [{"bar": {      "baz": [12,23], "fooppp": 12 } }]] }"#,
    )
    .unwrap();

    let expected = obj([(
        "oo",
        arr([
            num(12.0),
            Value::Boolean(true),
            Value::Boolean(false),
            arr([obj([(
                "bar",
                obj([("baz", arr([num(12.0), num(23.0)])), ("fooppp", num(12.0))]),
            )])]),
        ]),
    )]);
    assert_eq!(value, expected);
}

#[test]
fn empty_containers() {
    assert_eq!(parse("{}"), Ok(Value::Object(Map::new())));
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("{ \n }"), Ok(Value::Object(Map::new())));
    assert_eq!(parse("[\t]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("[[],{}]"), Ok(arr([arr([]), obj([])])));
}

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("\"\"", Value::String(String::new()))]
#[case("0", num(0.0))]
#[case("-0.5e2", num(-50.0))]
#[case("  42  ", num(42.0))]
#[case("\n\r\t\"x\"\n", Value::String("x".into()))]
fn root_scalars(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), Ok(expected));
}

#[rstest]
#[case("1", 1.0)]
#[case("-1", -1.0)]
#[case("10", 10.0)]
#[case("-0", -0.0)]
#[case("0.5", 0.5)]
#[case("123.456", 123.456)]
#[case("1e10", 1e10)]
#[case("1E10", 1e10)]
#[case("1e+10", 1e10)]
#[case("1e-10", 1e-10)]
#[case("0e0", 0.0)]
#[case("-0.0e-0", -0.0)]
#[case("1.7976931348623157e308", f64::MAX)]
#[case("5e-324", 5e-324)]
#[case("1e-400", 0.0)]
#[case("12345678901234567890", 12_345_678_901_234_567_890.0)]
fn numbers(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(parse(input), Ok(num(expected)));
}

#[test]
fn negative_zero_keeps_its_sign() {
    let n = parse("-0").unwrap().as_f64().unwrap();
    assert!(n == 0.0 && n.is_sign_negative());
}

#[rstest]
#[case(r#""ab\"cd""#, "ab\"cd")]
#[case(r#""\\""#, "\\")]
#[case(r#""\/""#, "/")]
#[case(r#""\b\f\n\r\t""#, "\u{8}\u{c}\n\r\t")]
#[case(r#""\u0041\u00e9\u00E9""#, "A\u{e9}\u{e9}")]
#[case(r#""\u0000""#, "\u{0}")]
#[case(r#""\uD83D\uDE00""#, "\u{1F600}")]
#[case(r#""\ud834\udd1e clef""#, "\u{1D11E} clef")]
#[case(r#""caf\u00e9 & café""#, "caf\u{e9} & caf\u{e9}")]
#[case(r#""日本語""#, "日本語")]
#[case(r#""\u2028\u2029""#, "\u{2028}\u{2029}")]
#[case(r#""a/b""#, "a/b")]
fn string_escapes(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), Ok(Value::String(expected.into())));
}

#[test]
fn escaped_quote_string_has_five_characters() {
    let value = parse("\"ab\\\"cd\"").unwrap();
    assert_eq!(value.as_str().map(|s| s.chars().count()), Some(5));
}

#[test_log::test]
fn whitespace_between_every_token() {
    let doc = " \t\n{ \r\n\"a\" \t:\n [ 1 ,\r\n2\t] ,\n\"b\"\r:\tnull } \n";
    assert_eq!(
        parse(doc),
        Ok(obj([("a", arr([num(1.0), num(2.0)])), ("b", Value::Null)]))
    );
}

#[test]
fn object_keeps_insertion_order() {
    let value = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_last_write_wins_at_first_position() {
    let value = parse(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let members: Vec<(&str, f64)> = value
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_f64().unwrap()))
        .collect();
    assert_eq!(members, [("a", 3.0), ("b", 2.0)]);
}

#[test]
fn escaped_keys_are_decoded() {
    let value = parse(r#"{"\u0061\n": true}"#).unwrap();
    assert_eq!(value.get("a\n"), Some(&Value::Boolean(true)));
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let depth = crate::DEFAULT_MAX_DEPTH;
    let doc = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&doc).is_ok());

    let doc = format!("{}0{}", "{\"k\":".repeat(depth), "}".repeat(depth));
    assert!(parse(&doc).is_ok());
}

#[test]
fn unicode_whitespace_option() {
    let options = ParserOptions {
        allow_unicode_whitespace: true,
        ..Default::default()
    };
    let doc = "\u{FEFF}[1,\u{00A0}2\u{3000}]\u{2028}";
    assert_eq!(parse_with_options(doc, options), Ok(arr([num(1.0), num(2.0)])));
}

#[test]
fn control_characters_option() {
    let options = ParserOptions {
        allow_control_characters: true,
        ..Default::default()
    };
    assert_eq!(
        parse_with_options("\"a\tb\nc\u{0}\"", options),
        Ok(Value::String("a\tb\nc\u{0}".into()))
    );
}

#[test]
fn from_str_delegates_to_parse() {
    let value: Value = "[true, null]".parse().unwrap();
    assert_eq!(value, arr([Value::Boolean(true), Value::Null]));
}

#[test]
fn long_strings_and_arrays() {
    let long = "x".repeat(100_000);
    assert_eq!(parse(&format!("\"{long}\"")), Ok(Value::String(long)));

    let items = vec!["1"; 10_000].join(",");
    let value = parse(&format!("[{items}]")).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(10_000));
}

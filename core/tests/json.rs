#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use optional::{Option, Pair};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Value<T> {
  val: Option<T>,
}

fn round_trip<T>(value: Value<T>, expected_json: &str) where
  T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug
{
  let json = serde_json::to_string(&value).unwrap();
  assert_eq!(json, expected_json);
  let deserialized: Value<T> = serde_json::from_str(&json).unwrap();
  assert_eq!(deserialized, value);
}

#[test]
fn some_value_round_trips() {
  round_trip(Value { val: Option::Some(123) }, r#"{"val":123}"#);
  round_trip(Value { val: Option::Some("foo".to_string()) }, r#"{"val":"foo"}"#);
  round_trip(Value { val: Option::Some(true) }, r#"{"val":true}"#);
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Inner {
  #[serde(skip_serializing_if = "Option::is_none")]
  b: Option<bool>,
}

#[test]
fn some_nested_value_round_trips() {
  round_trip(Value { val: Option::Some(Inner { b: Option::Some(true) }) }, r#"{"val":{"b":true}}"#);
  round_trip(Value { val: Option::Some(Inner { b: Option::None }) }, r#"{"val":{}}"#);
}

#[test]
fn none_value_round_trips() {
  round_trip(Value::<i32> { val: Option::None }, r#"{"val":null}"#);
}

#[test]
fn bare_values() {
  assert_eq!(serde_json::to_string(&Option::Some(123)).unwrap(), "123");
  assert_eq!(serde_json::to_string(&Option::<i32>::None).unwrap(), "null");
  assert_eq!(serde_json::from_str::<Option<i32>>("null").unwrap(), Option::None);
  assert_eq!(serde_json::from_str::<Option<i32>>("123").unwrap(), Option::Some(123));
  assert!(serde_json::from_str::<Option<i32>>(r#""123""#).is_err());
}

#[test]
fn missing_field_deserializes_to_none() {
  let value: Value<i32> = serde_json::from_str("{}").unwrap();
  assert_eq!(value, Value { val: Option::None });
}

#[test]
fn invalid_value_fails_to_deserialize() {
  let result = serde_json::from_str::<Value<i32>>(r#"{"val":"__STRING__"}"#);
  assert!(result.is_err());
}

#[test]
fn invalid_value_fails_to_serialize() {
  // Non-string map keys are unsupported by JSON.
  let map = BTreeMap::from([(vec![1u8], 1)]);
  let result = serde_json::to_string(&Value { val: Option::Some(map) });
  assert!(result.is_err());
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
struct Omittable {
  normal_val: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  omittable_val: Option<String>,
}

#[test]
fn skip_serializing_if_none_omits_field() {
  let none = Omittable { normal_val: Option::None, omittable_val: Option::None };
  assert_eq!(serde_json::to_string(&none).unwrap(), r#"{"normalVal":null}"#);

  let some = Omittable { normal_val: Option::None, omittable_val: Option::Some("foo".to_string()) };
  assert_eq!(serde_json::to_string(&some).unwrap(), r#"{"normalVal":null,"omittableVal":"foo"}"#);
}

#[test]
fn pair_serializes_as_struct() {
  let pair = optional::zip(Option::Some(1), Option::Some("foo"));
  assert_eq!(serde_json::to_string(&pair).unwrap(), r#"{"value1":1,"value2":"foo"}"#);
  let deserialized: Option<Pair<i32, String>> = serde_json::from_str(r#"{"value1":1,"value2":"foo"}"#).unwrap();
  assert_eq!(deserialized, Option::Some(Pair::new(1, "foo".to_string())));
}

#[derive(Deserialize, PartialEq, Debug)]
struct Flattened {
  a: i32,
}

#[derive(Deserialize, PartialEq, Debug)]
struct Outer {
  #[serde(flatten)]
  inner: Option<Flattened>,
}

#[test]
fn flattened_field_is_unsupported() {
  let result = serde_json::from_str::<Outer>(r#"{"a":1}"#);
  assert!(result.is_err());
}

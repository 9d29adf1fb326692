// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use subject_runner::core::value::Value;
use tempfile::TempDir;

/// `{ foo: () => "bar" }`
pub fn good_subject() -> Value {
    subject_returning(Value::from("bar"))
}

/// `{}`
pub fn empty_subject() -> Value {
    Value::object(Vec::<(String, Value)>::new())
}

/// `{ foo: () => <value> }`
pub fn subject_returning(value: Value) -> Value {
    Value::object([("foo", Value::function("foo", move || value.clone()))])
}

/// `{ foo: <value> }`, where `value` is not necessarily callable.
pub fn subject_with_foo(value: Value) -> Value {
    Value::object([("foo", value)])
}

/// Writes a TOML config into `dir` and returns its path.
pub fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

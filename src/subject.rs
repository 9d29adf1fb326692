//! # Subject Module / 被测模块
//!
//! The module under test. It exposes a single capability, `foo`.
//!
//! 被测模块。它只暴露一个功能 `foo`。

use crate::core::value::Value;

/// Returns the constant `"bar"`. No side effects.
/// 返回常量 `"bar"`。没有副作用。
pub fn foo() -> &'static str {
    "bar"
}

/// The dynamic view of this module's exports: `{ foo: [Function: foo] }`.
/// 此模块导出内容的动态视图：`{ foo: [Function: foo] }`。
pub fn exports() -> Value {
    Value::object([("foo", Value::function("foo", || Value::from(foo())))])
}

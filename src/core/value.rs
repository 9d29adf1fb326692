//! # Value Module / 值模块
//!
//! This module defines the dynamic value model used to describe a subject
//! module. A subject is resolved by name at startup and may be malformed, so
//! its shape is inspected at runtime through [`Value`] rather than through
//! static types.
//!
//! 此模块定义用于描述被测模块的动态值模型。
//! 被测模块在启动时按名称解析，并且可能格式错误，
//! 因此通过 [`Value`] 在运行时检查其结构，而不是通过静态类型。

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The closed set of value kinds a `TypeIs` check can ask about.
/// `TypeIs` 检查可以询问的封闭值类型集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl Kind {
    /// Returns the lowercase name used in reports.
    /// 返回报告中使用的小写名称。
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named zero-argument function exposed by a subject.
/// 被测模块暴露的具名零参数函数。
#[derive(Clone)]
pub struct Callable {
    name: String,
    func: Arc<dyn Fn() -> Value + Send + Sync>,
}

impl Callable {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self) -> Value {
        (self.func)()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A dynamically typed value.
///
/// Composite variants are reference counted; cloning a `Value` shares the
/// underlying array, object or function, which is what identity comparison in
/// [`Value::strict_eq`] relies on.
///
/// 动态类型的值。
/// 复合变体使用引用计数；克隆 `Value` 会共享底层的数组、对象或函数，
/// [`Value::strict_eq`] 的同一性比较依赖于此。
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Arc<Vec<Value>>),
    Object(Arc<BTreeMap<String, Value>>),
    Function(Callable),
}

impl Value {
    /// Builds an object value from `(name, value)` pairs.
    /// 从 `(名称, 值)` 对构建对象值。
    pub fn object<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(Arc::new(
            members.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    pub fn array<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Array(Arc::new(items.into_iter().collect()))
    }

    pub fn function<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Value::Function(Callable::new(name, func))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::Str(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Function(_) => Kind::Function,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Looks up a member of an object.
    /// Missing members and non-object receivers both yield `Undefined`.
    ///
    /// 查找对象的成员。
    /// 缺失的成员和非对象接收者都返回 `Undefined`。
    pub fn get(&self, key: &str) -> Value {
        match self {
            Value::Object(members) => members.get(key).cloned().unwrap_or_default(),
            _ => Value::Undefined,
        }
    }

    /// Calls a function value with no arguments.
    ///
    /// # Errors / 错误
    /// Returns an error naming `label` when the value is not a function.
    /// 当值不是函数时，返回一个包含 `label` 的错误。
    pub fn call(&self, label: &str) -> Result<Value> {
        match self {
            Value::Function(callable) => Ok(callable.invoke()),
            other => bail!("{} is not a function (got {})", label, other.kind()),
        }
    }

    /// Strict equality: primitives by value, composites by identity.
    /// `NaN` is never equal to anything, itself included.
    ///
    /// 严格相等：原始值按值比较，复合值按同一性比较。
    /// `NaN` 永远不等于任何值，包括它自身。
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(&a.func, &b.func),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(items) => write!(f, "[Array({})]", items.len()),
            Value::Object(members) => {
                if members.is_empty() {
                    return f.write_str("{}");
                }
                let keys: Vec<&str> = members.keys().map(String::as_str).collect();
                write!(f, "{{ {} }}", keys.join(", "))
            }
            Value::Function(callable) => write!(f, "[Function: {}]", callable.name()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

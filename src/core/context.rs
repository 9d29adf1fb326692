//! # Assertion Context Module / 断言上下文模块
//!
//! A fresh [`TestContext`] is handed to every group body. The body calls
//! [`TestContext::test`] to obtain a chainable [`Assertions`] builder, declares
//! its checks, and finishes with [`Assertions::done`], the terminal marker.
//!
//! 每个分组主体都会获得一个新的 [`TestContext`]。主体调用
//! [`TestContext::test`] 获取可链式调用的 [`Assertions`] 构建器，声明检查，
//! 最后调用终止标记 [`Assertions::done`]。

use serde::{Deserialize, Serialize};

use crate::core::assertion::{AssertionResult, Check, Level};
use crate::core::value::{Kind, Value};

/// Lifecycle of a group within one run.
/// 单次运行中分组的生命周期。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupState {
    Registered,
    Running,
    Completed,
    /// The body returned without calling the terminal marker.
    /// 主体在未调用终止标记的情况下返回。
    Incomplete,
}

/// An informational line attached to a group. Not counted as an assertion.
/// 附加到分组的信息行。不计为断言。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub label: String,
    pub message: String,
}

/// Per-group accumulator passed to a group body.
/// 传递给分组主体的每组累加器。
#[derive(Debug)]
pub struct TestContext {
    group: String,
    state: GroupState,
    results: Vec<AssertionResult>,
    notes: Vec<Note>,
}

impl TestContext {
    pub(crate) fn new(group: &str) -> Self {
        Self {
            group: group.to_string(),
            state: GroupState::Registered,
            results: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Returns a fresh assertion chain bound to this context.
    /// 返回绑定到此上下文的新断言链。
    pub fn test(&mut self) -> Assertions<'_> {
        Assertions { ctx: self }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn results(&self) -> &[AssertionResult] {
        &self.results
    }

    pub(crate) fn start(&mut self) {
        self.state = GroupState::Running;
    }

    pub(crate) fn record(&mut self, result: AssertionResult) {
        self.results.push(result);
    }

    /// Consumes the context after the body returned.
    /// A context still `Running` at this point never reached its terminal marker.
    ///
    /// 在主体返回后消耗上下文。
    /// 此时仍为 `Running` 的上下文从未到达终止标记。
    pub(crate) fn finish(mut self) -> (GroupState, Vec<AssertionResult>, Vec<Note>) {
        if self.state != GroupState::Completed {
            self.state = GroupState::Incomplete;
        }
        (self.state, self.results, self.notes)
    }
}

/// Chainable assertion builder. Every method evaluates immediately.
/// 可链式调用的断言构建器。每个方法都会立即求值。
pub struct Assertions<'a> {
    ctx: &'a mut TestContext,
}

impl<'a> Assertions<'a> {
    /// Evaluates an arbitrary check.
    /// 对任意检查求值。
    pub fn check(self, level: Level, label: &str, check: Check) -> Self {
        let result = AssertionResult::evaluate(level, label, &check);
        self.ctx.record(result);
        self
    }

    fn type_is(self, level: Level, label: &str, expected: Kind, value: &Value) -> Self {
        self.check(
            level,
            label,
            Check::TypeIs {
                expected,
                actual: value.clone(),
            },
        )
    }

    pub fn is_object(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::Object, value)
    }

    pub fn is_string(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::String, value)
    }

    pub fn is_number(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::Number, value)
    }

    pub fn is_boolean(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::Boolean, value)
    }

    pub fn is_array(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::Array, value)
    }

    pub fn is_undefined(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::Undefined, value)
    }

    pub fn is_null(self, level: Level, label: &str, value: &Value) -> Self {
        self.type_is(level, label, Kind::Null, value)
    }

    pub fn is_function(self, level: Level, label: &str, value: &Value) -> Self {
        self.check(
            level,
            label,
            Check::Callable {
                actual: value.clone(),
            },
        )
    }

    pub fn is_exactly(
        self,
        level: Level,
        label: &str,
        actual: &Value,
        expected: impl Into<Value>,
    ) -> Self {
        self.check(
            level,
            label,
            Check::EqualsExact {
                actual: actual.clone(),
                expected: expected.into(),
            },
        )
    }

    /// Attaches an informational line to the group.
    /// 向分组附加一条信息行。
    pub fn info(self, label: &str, message: impl std::fmt::Display) -> Self {
        self.ctx.notes.push(Note {
            label: label.to_string(),
            message: message.to_string(),
        });
        self
    }

    /// Terminal marker. Marks the group complete; calling it again is a no-op.
    /// 终止标记。将分组标记为完成；再次调用不会产生任何效果。
    pub fn done(self) {
        self.ctx.state = GroupState::Completed;
    }
}

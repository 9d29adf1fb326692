//! # Assertion Module / 断言模块
//!
//! Assertions are a closed set of checks evaluated the moment they are
//! declared. Each evaluation yields an [`AssertionResult`] carrying the
//! severity level, label, outcome and enough detail to explain a failure.
//!
//! 断言是一组封闭的检查，在声明时立即求值。
//! 每次求值都会产生一个 [`AssertionResult`]，其中包含严重级别、标签、
//! 结果以及足以解释失败的详细信息。

use serde::{Deserialize, Serialize};

use crate::core::value::{Kind, Value};

/// Severity of an assertion. A failed `Warn` assertion is reported but does
/// not fail the run.
/// 断言的严重级别。失败的 `Warn` 断言会被报告，但不会导致整个运行失败。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Fail,
    Warn,
}

/// A single check against a subject value.
/// 针对被测值的单个检查。
#[derive(Debug, Clone)]
pub enum Check {
    /// The value has the given kind.
    /// 值具有给定的类型。
    TypeIs { expected: Kind, actual: Value },
    /// The value can be called.
    /// 值可以被调用。
    Callable { actual: Value },
    /// The value is strictly equal to `expected`.
    /// 值严格等于 `expected`。
    EqualsExact { actual: Value, expected: Value },
}

impl Check {
    pub fn holds(&self) -> bool {
        match self {
            Check::TypeIs { expected, actual } => actual.kind() == *expected,
            Check::Callable { actual } => actual.is_callable(),
            Check::EqualsExact { actual, expected } => actual.strict_eq(expected),
        }
    }

    /// The serializable description of what was expected.
    /// 关于预期内容的可序列化描述。
    pub fn expectation(&self) -> Expectation {
        match self {
            Check::TypeIs { expected, .. } => Expectation::TypeIs { kind: *expected },
            Check::Callable { .. } => Expectation::Callable,
            Check::EqualsExact { expected, .. } => Expectation::EqualsExact {
                expected: expected.to_string(),
            },
        }
    }

    /// Renders the observed side of the check for reports.
    /// Type checks report the observed kind; equality reports the value.
    ///
    /// 为报告渲染检查的实际观测值。
    /// 类型检查报告观测到的类型；相等检查报告值本身。
    pub fn observed(&self) -> String {
        match self {
            Check::TypeIs { actual, .. } | Check::Callable { actual } => {
                actual.kind().to_string()
            }
            Check::EqualsExact { actual, .. } => actual.to_string(),
        }
    }
}

/// What an assertion expected, detached from the live values.
/// 断言所预期的内容，与实时值分离。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    TypeIs { kind: Kind },
    Callable,
    EqualsExact { expected: String },
    /// The group body returned an error or panicked.
    /// 分组主体返回了错误或发生了 panic。
    NoError,
}

/// The outcome of one recorded assertion.
/// 单个已记录断言的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    Warned,
    Errored,
}

impl Outcome {
    /// Whether this outcome makes the whole run fail.
    /// 此结果是否导致整个运行失败。
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed | Outcome::Errored)
    }
}

/// A recorded assertion.
/// 已记录的断言。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionResult {
    pub level: Level,
    pub label: String,
    pub outcome: Outcome,
    pub expectation: Expectation,
    /// The observed value or kind, or the error message for `Errored`.
    /// 观测到的值或类型，或 `Errored` 时的错误消息。
    pub actual: String,
}

impl AssertionResult {
    /// Evaluates `check` and records the verdict at `level`.
    /// 对 `check` 求值，并以 `level` 记录结论。
    pub fn evaluate(level: Level, label: impl Into<String>, check: &Check) -> Self {
        let outcome = match (check.holds(), level) {
            (true, _) => Outcome::Passed,
            (false, Level::Fail) => Outcome::Failed,
            (false, Level::Warn) => Outcome::Warned,
        };
        Self {
            level,
            label: label.into(),
            outcome,
            expectation: check.expectation(),
            actual: check.observed(),
        }
    }

    /// Records an error caught while running a group body.
    /// 记录运行分组主体时捕获的错误。
    pub fn errored(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: Level::Fail,
            label: label.into(),
            outcome: Outcome::Errored,
            expectation: Expectation::NoError,
            actual: message.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

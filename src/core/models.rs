//! # Data Models Module / 数据模型模块
//!
//! Reports produced by a run: one [`GroupReport`] per executed group and a
//! [`RunReport`] aggregating them. Both serialize to JSON for the `--json`
//! report.
//!
//! 运行产生的报告：每个已执行分组一个 [`GroupReport`]，
//! 以及汇总它们的 [`RunReport`]。两者都可以序列化为 JSON，用于 `--json` 报告。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::assertion::{AssertionResult, Outcome};
use crate::core::context::{GroupState, Note};

/// The result of executing a single group.
/// 执行单个分组的结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    pub name: String,
    pub state: GroupState,
    pub assertions: Vec<AssertionResult>,
    #[serde(default)]
    pub notes: Vec<Note>,
    pub duration: Duration,
}

impl GroupReport {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.assertions
            .iter()
            .filter(|a| a.outcome == outcome)
            .count()
    }

    pub fn is_incomplete(&self) -> bool {
        self.state == GroupState::Incomplete
    }

    /// A group fails when any assertion failed or errored, or when it never
    /// reached its terminal marker.
    /// 当任何断言失败或出错，或者分组从未到达终止标记时，该分组失败。
    pub fn is_failure(&self) -> bool {
        self.is_incomplete() || self.assertions.iter().any(|a| a.outcome.is_failure())
    }
}

/// Aggregate counts across a run.
/// 一次运行的汇总计数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub groups: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub errors: usize,
    pub incomplete: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.warnings + self.errors
    }
}

/// The result of a whole run, in registration order.
/// 整次运行的结果，按注册顺序排列。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub groups: Vec<GroupReport>,
    pub duration: Duration,
}

impl RunReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            groups: self.groups.len(),
            ..Summary::default()
        };
        for group in &self.groups {
            summary.passed += group.count(Outcome::Passed);
            summary.failed += group.count(Outcome::Failed);
            summary.warnings += group.count(Outcome::Warned);
            summary.errors += group.count(Outcome::Errored);
            if group.is_incomplete() {
                summary.incomplete += 1;
            }
        }
        summary
    }

    /// `true` when no assertion failed or errored and every group completed.
    /// 当没有断言失败或出错且每个分组都已完成时为 `true`。
    pub fn is_success(&self) -> bool {
        !self.groups.iter().any(GroupReport::is_failure)
    }

    /// Assertions that failed the run, paired with their group name.
    /// 导致运行失败的断言，以及其所属分组名称。
    pub fn failures(&self) -> Vec<(&str, &AssertionResult)> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.assertions
                    .iter()
                    .filter(|a| a.outcome.is_failure())
                    .map(move |a| (g.name.as_str(), a))
            })
            .collect()
    }

    /// Group names with their outcome sequence, ignoring timings.
    /// 分组名称及其结果序列，忽略计时信息。
    pub fn outcomes(&self) -> Vec<(String, Vec<Outcome>)> {
        self.groups
            .iter()
            .map(|g| {
                (
                    g.name.clone(),
                    g.assertions.iter().map(|a| a.outcome).collect(),
                )
            })
            .collect()
    }
}

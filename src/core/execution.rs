//! # Group Execution Engine Module / 分组执行引擎模块
//!
//! This module provides the [`Runner`], which stores named groups in
//! registration order and executes them one after another. Each group body
//! receives a fresh [`TestContext`]; errors and panics escaping a body are
//! caught and recorded as errored assertions so later groups still run.
//!
//! 此模块提供 [`Runner`]，它按注册顺序存储具名分组并依次执行。
//! 每个分组主体都会获得一个新的 [`TestContext`]；从主体中逃逸的错误和
//! panic 会被捕获并记录为出错的断言，因此后续分组仍会运行。

use anyhow::{bail, Result};
use chrono::Utc;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::core::assertion::AssertionResult;
use crate::core::context::TestContext;
use crate::core::models::{GroupReport, RunReport};

thread_local! {
    /// Set while a group body runs, so its panic is recorded instead of printed.
    /// 在分组主体运行期间设置，使其 panic 被记录而不是被打印。
    static IN_GROUP_BODY: Cell<bool> = const { Cell::new(false) };
}

static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Wraps the current panic hook once per process. Panics raised inside a
/// group body are silenced; every other panic still reaches the previous hook.
/// 每个进程包装一次当前的 panic hook。分组主体内的 panic 会被静默；
/// 其他 panic 仍然交给之前的 hook 处理。
fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_GROUP_BODY.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// A group body. It may return an error, which is recorded against the group.
/// 分组主体。它可以返回错误，该错误会记录到分组中。
pub type GroupBody = Box<dyn Fn(&mut TestContext) -> Result<()>>;

/// A registered group. Never mutated after registration.
/// 已注册的分组。注册后不再修改。
pub struct Group {
    name: String,
    body: GroupBody,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An explicit, ordered collection of groups.
/// 显式的、有序的分组集合。
#[derive(Debug, Default)]
pub struct Runner {
    groups: Vec<Group>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group. Groups run in the order they were added.
    ///
    /// # Errors / 错误
    /// Fails when `name` is empty or only whitespace.
    /// 当 `name` 为空或仅包含空白字符时失败。
    pub fn add<F>(&mut self, name: impl Into<String>, body: F) -> Result<&mut Self>
    where
        F: Fn(&mut TestContext) -> Result<()> + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            bail!("Group name must not be empty.");
        }
        self.groups.push(Group {
            name,
            body: Box::new(body),
        });
        Ok(self)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Runs every group in registration order, handing each finished
    /// [`GroupReport`] to `on_group` before the next group starts.
    /// `wait` is slept between consecutive groups.
    ///
    /// 按注册顺序运行每个分组，在下一个分组开始之前将每个已完成的
    /// [`GroupReport`] 交给 `on_group`。`wait` 是相邻分组之间的等待时间。
    pub async fn run_with<F>(&self, wait: Duration, mut on_group: F) -> RunReport
    where
        F: FnMut(&GroupReport),
    {
        let started_at = Utc::now();
        let run_start = Instant::now();
        let mut reports = Vec::with_capacity(self.groups.len());

        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 && !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
            let report = run_group(group);
            on_group(&report);
            reports.push(report);
        }

        RunReport {
            started_at,
            groups: reports,
            duration: run_start.elapsed(),
        }
    }
}

/// Executes one group body against a fresh context.
fn run_group(group: &Group) -> GroupReport {
    let mut ctx = TestContext::new(&group.name);
    ctx.start();
    let start = Instant::now();

    install_panic_hook();
    IN_GROUP_BODY.with(|flag| flag.set(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| (group.body)(&mut ctx)));
    IN_GROUP_BODY.with(|flag| flag.set(false));
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => ctx.record(AssertionResult::errored("error", format!("{:#}", e))),
        Err(payload) => ctx.record(AssertionResult::errored(
            "panic",
            panic_message(payload.as_ref()),
        )),
    }

    let duration = start.elapsed();
    let (state, assertions, notes) = ctx.finish();
    GroupReport {
        name: group.name.clone(),
        state,
        assertions,
        notes,
        duration,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

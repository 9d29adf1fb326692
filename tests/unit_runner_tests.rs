//! # Runner Unit Tests / 运行器单元测试
//!
//! Tests for registration, ordering, error isolation and group states.
//!
//! 测试注册、顺序、错误隔离和分组状态。

use anyhow::bail;
use std::time::{Duration, Instant};
use subject_runner::core::assertion::{Level, Outcome};
use subject_runner::core::context::GroupState;
use subject_runner::core::execution::Runner;
use subject_runner::core::value::Value;

fn passing_group(runner: &mut Runner, name: &str) {
    runner
        .add(name.to_string(), |ctx| {
            ctx.test()
                .is_exactly(Level::Fail, "one", &Value::from(1), 1)
                .done();
            Ok(())
        })
        .unwrap();
}

#[cfg(test)]
mod registration_tests {
    use super::*;

    #[test]
    fn test_add_rejects_empty_name() {
        let mut runner = Runner::new();
        assert!(runner.add("", |_| Ok(())).is_err());
        assert!(runner.add("   ", |_| Ok(())).is_err());
        assert!(runner.is_empty());
    }

    #[test]
    fn test_add_is_chainable_and_keeps_order() {
        let mut runner = Runner::new();
        runner
            .add("first", |_| Ok(()))
            .unwrap()
            .add("second", |_| Ok(()))
            .unwrap();
        let names: Vec<&str> = runner.groups().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_add_does_not_run_the_body() {
        let mut runner = Runner::new();
        runner
            .add("never", |_| panic!("body must not run at registration"))
            .unwrap();
        assert_eq!(runner.groups().len(), 1);
    }
}

#[cfg(test)]
mod execution_tests {
    use super::*;

    #[tokio::test]
    async fn test_groups_run_in_registration_order() {
        let mut runner = Runner::new();
        for name in ["c", "a", "b"] {
            passing_group(&mut runner, name);
        }

        let mut seen = Vec::new();
        let report = runner
            .run_with(Duration::ZERO, |g| seen.push(g.name.clone()))
            .await;

        assert_eq!(seen, vec!["c", "a", "b"]);
        let names: Vec<&str> = report.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_later_assertions() {
        let mut runner = Runner::new();
        runner
            .add("mixed", |ctx| {
                ctx.test()
                    .is_exactly(Level::Fail, "wrong", &Value::from(1), 2)
                    .is_exactly(Level::Fail, "right", &Value::from(2), 2)
                    .done();
                Ok(())
            })
            .unwrap();

        let report = runner.run_with(Duration::ZERO, |_| {}).await;
        let outcomes = report.outcomes();
        assert_eq!(outcomes[0].1, vec![Outcome::Failed, Outcome::Passed]);
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn test_body_error_is_recorded_and_next_group_runs() {
        let mut runner = Runner::new();
        runner.add("broken", |_| bail!("subject exploded")).unwrap();
        passing_group(&mut runner, "after");

        let report = runner.run_with(Duration::ZERO, |_| {}).await;
        assert_eq!(report.groups.len(), 2);

        let broken = &report.groups[0];
        assert_eq!(broken.assertions.len(), 1);
        assert_eq!(broken.assertions[0].outcome, Outcome::Errored);
        assert!(broken.assertions[0].actual.contains("subject exploded"));

        assert!(!report.groups[1].is_failure());
        assert!(!report.is_success());
        assert_eq!(report.summary().errors, 1);
    }

    #[tokio::test]
    async fn test_body_panic_is_caught() {
        let mut runner = Runner::new();
        runner
            .add("panics", |ctx| {
                ctx.test()
                    .is_exactly(Level::Fail, "before", &Value::from(1), 1);
                panic!("unexpected state");
            })
            .unwrap();
        passing_group(&mut runner, "after");

        let report = runner.run_with(Duration::ZERO, |_| {}).await;
        let panicked = &report.groups[0];
        assert_eq!(panicked.assertions[0].outcome, Outcome::Passed);
        assert_eq!(panicked.assertions[1].outcome, Outcome::Errored);
        assert!(panicked.assertions[1].actual.contains("unexpected state"));
        assert_eq!(report.groups[1].state, GroupState::Completed);
    }

    #[tokio::test]
    async fn test_missing_terminal_marker_marks_group_incomplete() {
        let mut runner = Runner::new();
        runner
            .add("no done", |ctx| {
                ctx.test()
                    .is_exactly(Level::Fail, "kept", &Value::from(1), 1);
                Ok(())
            })
            .unwrap();

        let report = runner.run_with(Duration::ZERO, |_| {}).await;
        let group = &report.groups[0];
        assert_eq!(group.state, GroupState::Incomplete);
        assert_eq!(group.assertions.len(), 1);
        assert!(group.assertions[0].passed());
        assert!(!report.is_success());
        assert_eq!(report.summary().incomplete, 1);
    }

    #[tokio::test]
    async fn test_done_twice_is_harmless() {
        let mut runner = Runner::new();
        runner
            .add("twice", |ctx| {
                ctx.test().done();
                ctx.test().done();
                Ok(())
            })
            .unwrap();

        let report = runner.run_with(Duration::ZERO, |_| {}).await;
        assert_eq!(report.groups[0].state, GroupState::Completed);
        assert!(report.is_success());
    }

    #[tokio::test]
    async fn test_runs_are_independent() {
        let mut runner = Runner::new();
        passing_group(&mut runner, "one");
        runner.add("two", |_| bail!("always")).unwrap();

        let first = runner.run_with(Duration::ZERO, |_| {}).await;
        let second = runner.run_with(Duration::ZERO, |_| {}).await;
        assert_eq!(first.outcomes(), second.outcomes());
        assert_eq!(first.summary(), second.summary());
    }

    #[tokio::test]
    async fn test_wait_is_applied_between_groups_only() {
        let mut runner = Runner::new();
        passing_group(&mut runner, "one");
        passing_group(&mut runner, "two");
        passing_group(&mut runner, "three");

        let start = Instant::now();
        runner.run_with(Duration::from_millis(20), |_| {}).await;
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_empty_runner_succeeds() {
        let runner = Runner::new();
        let report = runner.run_with(Duration::ZERO, |_| {}).await;
        assert!(report.groups.is_empty());
        assert!(report.is_success());
    }
}

//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints group results, the run summary and failure details to
//! the console, colored and localized.
//!
//! 此模块将分组结果、运行摘要和失败详情以彩色和本地化的形式打印到控制台。

use colored::*;

use crate::core::assertion::{AssertionResult, Expectation, Outcome};
use crate::core::models::{GroupReport, RunReport};
use crate::infra::t;

/// Localized status word for an outcome.
/// 结果的本地化状态词。
pub fn status_str(outcome: Outcome, locale: &str) -> String {
    match outcome {
        Outcome::Passed => t!("status.passed", locale = locale).to_string(),
        Outcome::Failed => t!("status.failed", locale = locale).to_string(),
        Outcome::Warned => t!("status.warned", locale = locale).to_string(),
        Outcome::Errored => t!("status.errored", locale = locale).to_string(),
    }
}

fn colorize(outcome: Outcome, text: &str) -> ColoredString {
    match outcome {
        Outcome::Passed => text.green(),
        Outcome::Failed | Outcome::Errored => text.red(),
        Outcome::Warned => text.yellow(),
    }
}

/// The expected side of an assertion, in words.
/// 用文字表示的断言预期部分。
pub fn expected_str(expectation: &Expectation, locale: &str) -> String {
    match expectation {
        Expectation::TypeIs { kind } => kind.to_string(),
        Expectation::Callable => "function".to_string(),
        Expectation::EqualsExact { expected } => expected.clone(),
        Expectation::NoError => t!("assert.no_error_expected", locale = locale).to_string(),
    }
}

/// Describes an assertion, e.g. `.foo() is function`.
/// 描述一个断言，例如 `.foo() is function`。
pub fn describe(result: &AssertionResult, locale: &str) -> String {
    let predicate = match &result.expectation {
        Expectation::TypeIs { kind } => {
            t!("assert.type_is", locale = locale, kind = kind.as_str()).to_string()
        }
        Expectation::Callable => t!("assert.callable", locale = locale).to_string(),
        Expectation::EqualsExact { expected } => {
            t!("assert.equals_exact", locale = locale, expected = expected).to_string()
        }
        Expectation::NoError => t!("assert.no_error", locale = locale).to_string(),
    };
    format!("{} {}", result.label, predicate)
}

/// Explains why an assertion did not pass.
/// 解释断言为何未通过。
pub fn failure_detail(result: &AssertionResult, locale: &str) -> String {
    match result.expectation {
        Expectation::NoError => result.actual.clone(),
        _ => t!(
            "assert.detail",
            locale = locale,
            expected = expected_str(&result.expectation, locale),
            actual = &result.actual
        )
        .to_string(),
    }
}

/// Prints one group: its name, every assertion line and any notes.
/// Called as soon as the group finishes, so output follows execution order.
///
/// 打印一个分组：名称、每一行断言以及任何备注。
/// 在分组完成后立即调用，因此输出遵循执行顺序。
pub fn print_group(group: &GroupReport, locale: &str) {
    println!("\n{}", group.name.bold().underline());

    for result in &group.assertions {
        let status = status_str(result.outcome, locale);
        let mut line = format!(
            "  {:<8} {}",
            colorize(result.outcome, &status),
            describe(result, locale)
        );
        if !result.passed() {
            line.push_str(&format!(" ({})", failure_detail(result, locale)).dimmed().to_string());
        }
        println!("{}", line);
    }

    for note in &group.notes {
        println!(
            "  {:<8} {}: {}",
            t!("status.info", locale = locale).cyan(),
            note.label,
            note.message.dimmed()
        );
    }

    if group.is_incomplete() {
        println!(
            "  {}",
            t!("group.incomplete", locale = locale, name = &group.name).yellow()
        );
    }
}

/// Prints the summary counts of a run.
///
/// # Output Format / 输出格式
/// ```text
/// --- Summary ---
///   groups: 2 | passed: 3 | failed: 0 | warnings: 0 | errors: 0 | 1.20ms
/// ```
pub fn print_summary(report: &RunReport, locale: &str) {
    let summary = report.summary();
    println!("\n{}", t!("summary_banner", locale = locale).bold());

    let failed = summary.failed.to_string();
    let errors = summary.errors.to_string();
    let warnings = summary.warnings.to_string();
    println!(
        "  {}: {} | {}: {} | {}: {} | {}: {} | {}: {} | {:.2?}",
        t!("summary.groups", locale = locale),
        summary.groups,
        t!("summary.passed", locale = locale),
        summary.passed.to_string().green(),
        t!("summary.failed", locale = locale),
        if summary.failed > 0 { failed.red() } else { failed.normal() },
        t!("summary.warnings", locale = locale),
        if summary.warnings > 0 { warnings.yellow() } else { warnings.normal() },
        t!("summary.errors", locale = locale),
        if summary.errors > 0 { errors.red() } else { errors.normal() },
        report.duration
    );

    if summary.incomplete > 0 {
        println!(
            "  {}",
            t!("summary.incomplete", locale = locale, count = summary.incomplete).yellow()
        );
    }
}

/// Prints every assertion that failed the run, with its detail.
/// Returns early when there are none.
///
/// 打印导致运行失败的每个断言及其详情。没有失败时提前返回。
pub fn print_failure_details(report: &RunReport, locale: &str) {
    let failures = report.failures();
    if failures.is_empty() {
        return;
    }

    println!("\n{}", t!("failure_banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, (group, result)) in failures.iter().enumerate() {
        println!(
            "[{}/{}] {} › {}",
            i + 1,
            failures.len(),
            group.cyan(),
            describe(result, locale)
        );
        println!("    {}", failure_detail(result, locale));
    }
    println!("{}", "-".repeat(80));
}

/// Prints the final verdict line.
/// 打印最终结论行。
pub fn print_verdict(report: &RunReport, locale: &str) {
    if report.is_success() {
        println!("\n{}", t!("all_passed", locale = locale).green().bold());
    } else {
        println!("\n{}", t!("suite_failed", locale = locale).red().bold());
    }
}

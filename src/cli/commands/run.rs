//! # Run Command Module / 运行命令模块
//!
//! This module implements the default command: resolve the subject, build
//! the suite, run every group once and report.
//!
//! 此模块实现默认命令：解析被测模块、构建套件、运行每个分组一次并生成报告。

use anyhow::{Context, Result};
use colored::*;
use std::time::Duration;

use crate::{
    cli::CliArgs,
    core::{config::SuiteConfig, registry::SubjectRegistry},
    infra::t,
    reporting::{
        console::{print_failure_details, print_group, print_summary, print_verdict},
        html::generate_html_report,
        json::generate_json_report,
    },
    resolve_locale, suite,
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `args` - Parsed command line arguments; each one overrides the config file
///
/// # Returns
/// `Ok(true)` when every assertion passed, `Ok(false)` when the suite failed,
/// and `Err` when the run could not start (bad config, unknown subject).
pub async fn execute(args: CliArgs) -> Result<bool> {
    execute_with(args, SubjectRegistry::with_defaults()).await
}

/// Executes the run command, resolving the configured subject in `registry`.
/// 执行运行命令，在 `registry` 中解析配置的被测模块。
pub async fn execute_with(args: CliArgs, registry: SubjectRegistry) -> Result<bool> {
    let config = SuiteConfig::load(args.config.as_deref())?;
    let locale = resolve_locale(args.lang.as_deref().or(config.language.as_deref()));
    rust_i18n::set_locale(&locale);

    let subject = registry
        .resolve(&config.subject)
        .with_context(|| {
            t!("subject_resolve_failed", locale = &locale, name = &config.subject).to_string()
        })?;

    println!(
        "{}",
        t!("loading_subject", locale = &locale, name = config.subject.yellow())
    );

    let runner = suite::build(subject)?;
    println!(
        "{}",
        t!("running_groups", locale = &locale, count = runner.groups().len()).bold()
    );

    let report = runner
        .run_with(Duration::from_millis(config.wait_ms), |group| {
            print_group(group, &locale)
        })
        .await;

    print_summary(&report, &locale);
    print_failure_details(&report, &locale);

    if let Some(path) = args.html.as_ref().or(config.html.as_ref()) {
        println!(
            "\n{}",
            t!("generating_html_report", locale = &locale, path = path.display())
        );
        if let Err(e) = generate_html_report(&report, path, &locale) {
            eprintln!("{} {:#}", t!("html_report_failed", locale = &locale).red(), e);
        }
    }

    if let Some(path) = args.json.as_ref().or(config.json.as_ref()) {
        println!(
            "{}",
            t!("generating_json_report", locale = &locale, path = path.display())
        );
        if let Err(e) = generate_json_report(&report, path) {
            eprintln!("{} {:#}", t!("json_report_failed", locale = &locale).red(), e);
        }
    }

    print_verdict(&report, &locale);
    Ok(report.is_success())
}

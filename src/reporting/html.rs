//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a run into a standalone HTML page with summary
//! counters and one table per group.
//!
//! 此模块将一次运行渲染为独立的 HTML 页面，包含汇总计数器和每个分组一张表格。

use anyhow::Result;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::path::Path;

use crate::core::assertion::Outcome;
use crate::core::models::{GroupReport, RunReport};
use crate::infra::{fs, t};
use crate::reporting::console::{describe, failure_detail, status_str};

/// Embedded CSS styles for HTML reports / HTML 报告的嵌入式 CSS 样式
const HTML_STYLE: &str = include_str!("assets/report.css");

fn status_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "status-passed",
        Outcome::Failed => "status-failed",
        Outcome::Warned => "status-warned",
        Outcome::Errored => "status-errored",
    }
}

fn summary_item(count: usize, label: &str, class: &str) -> Markup {
    html! {
        div class="summary-item" {
            span class={ "count " (class) } { (count) }
            span class="label" { (label) }
        }
    }
}

fn group_table(group: &GroupReport, locale: &str) -> Markup {
    html! {
        section class="group" {
            h2 {
                (group.name)
                @if group.is_incomplete() {
                    span class="incomplete" {
                        (t!("html_report.incomplete", locale = locale))
                    }
                }
            }
            table {
                thead {
                    tr {
                        th class="status-col" { (t!("html_report.table.status", locale = locale)) }
                        th { (t!("html_report.table.assertion", locale = locale)) }
                        th { (t!("html_report.table.detail", locale = locale)) }
                    }
                }
                tbody {
                    @for result in &group.assertions {
                        tr {
                            td class="status-col" {
                                div class={ "status-cell " (status_class(result.outcome)) } {
                                    (status_str(result.outcome, locale))
                                }
                            }
                            td { (describe(result, locale)) }
                            td {
                                @if !result.passed() {
                                    pre class="output-content" { (failure_detail(result, locale)) }
                                }
                            }
                        }
                    }
                    @for note in &group.notes {
                        tr class="note" {
                            td class="status-col" { (t!("status.info", locale = locale)) }
                            td { (note.label) }
                            td { (note.message) }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the HTML page for `report`.
/// 为 `report` 渲染 HTML 页面。
pub fn render_html_report(report: &RunReport, locale: &str) -> String {
    let summary = report.summary();
    let generated_at = report.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (t!("html_report.title", locale = locale)) }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h1 { (t!("html_report.main_header", locale = locale)) }
                p class="generated" {
                    (t!("html_report.generated_at", locale = locale, time = &generated_at))
                }
                div class="summary-container" {
                    (summary_item(summary.total(), &t!("html_report.summary.total", locale = locale), ""))
                    (summary_item(summary.passed, &t!("html_report.summary.passed", locale = locale), "passed-text"))
                    (summary_item(summary.failed, &t!("html_report.summary.failed", locale = locale), "failed-text"))
                    (summary_item(summary.warnings, &t!("html_report.summary.warnings", locale = locale), "warned-text"))
                    (summary_item(summary.errors, &t!("html_report.summary.errors", locale = locale), "failed-text"))
                }
                @for group in &report.groups {
                    (group_table(group, locale))
                }
            }
        }
    };
    markup.into_string()
}

/// Generates an HTML report at `output_path`.
///
/// # Errors / 错误
/// Fails if the path cannot be expanded or the file cannot be written.
/// 如果路径无法展开或文件无法写入，则失败。
pub fn generate_html_report(report: &RunReport, output_path: &Path, locale: &str) -> Result<()> {
    let html = render_html_report(report, locale);
    fs::write_report(output_path, &html)?;
    Ok(())
}

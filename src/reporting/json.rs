//! # JSON Reporting Module / JSON 报告模块
//!
//! Writes the serialized [`RunReport`] for machine consumption.
//!
//! 写入序列化的 [`RunReport`] 以供机器读取。

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::models::RunReport;
use crate::infra::fs;

pub fn render_json_report(report: &RunReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize run report")
}

/// Generates a JSON report at `output_path`.
/// 在 `output_path` 生成 JSON 报告。
pub fn generate_json_report(report: &RunReport, output_path: &Path) -> Result<()> {
    let json = render_json_report(report)?;
    fs::write_report(output_path, &json)
}

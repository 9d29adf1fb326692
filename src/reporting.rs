//! # Reporting Module / 报告模块
//!
//! This module handles the display of run results on the console and the
//! generation of HTML and JSON report files.
//!
//! 此模块处理运行结果在控制台上的显示，以及 HTML 和 JSON 报告文件的生成。

pub mod console;
pub mod html;
pub mod json;

// Re-export common reporting functions
pub use console::{print_failure_details, print_group, print_summary, print_verdict};
pub use html::generate_html_report;
pub use json::generate_json_report;

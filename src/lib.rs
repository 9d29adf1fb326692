//! # Subject Runner Library / Subject Runner 库
//!
//! This library provides a small assertion-group test driver: named groups of
//! checks run in registration order against a subject module, with results
//! reported on the console and summarized into an exit status.
//!
//! 此库提供一个小型断言分组测试驱动：具名的检查分组按注册顺序针对被测模块
//! 运行，结果在控制台上报告，并汇总为退出状态。
//!
//! ## Modules / 模块
//!
//! - `core` - Value model, assertions, configuration and the group runner
//! - `infra` - Infrastructure services like file system operations and i18n
//! - `reporting` - Console, HTML and JSON reports
//! - `cli` - Command-line interface
//! - `subject` - The module under test
//! - `suite` - The groups checking the subject
//!
//! - `core` - 值模型、断言、配置和分组运行器
//! - `infra` - 基础设施服务，如文件系统操作和国际化
//! - `reporting` - 控制台、HTML 和 JSON 报告
//! - `cli` - 命令行接口
//! - `subject` - 被测模块
//! - `suite` - 检查被测模块的分组

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;
pub mod subject;
pub mod suite;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Picks the locale for output messages.
///
/// `requested` (from `--lang` or the config file) wins over the system locale.
/// The full locale is tried first (e.g., "zh-CN"), then just the language
/// part (e.g., "en" from "en-US"), and finally the default "en".
///
/// 选择输出消息的语言环境。
/// `requested`（来自 `--lang` 或配置文件）优先于系统语言环境。
/// 首先尝试完整的语言环境（例如 "zh-CN"），然后仅尝试语言部分
/// （例如从 "en-US" 中取 "en"），最后回退到默认的 "en"。
pub fn resolve_locale(requested: Option<&str>) -> String {
    let locale = requested
        .map(str::to_string)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&locale.as_str()) {
        return locale;
    }
    locale
        .split('-')
        .next()
        .filter(|lang_code| available_locales.contains(lang_code))
        .unwrap_or("en")
        .to_string()
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

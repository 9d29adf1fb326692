use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The default configuration file looked up in the working directory.
/// 在工作目录中查找的默认配置文件。
pub const DEFAULT_CONFIG_FILE: &str = "Suite.toml";

/// Optional suite configuration, loaded from a TOML file.
/// Every field has a default, so an absent file means an all-default run.
///
/// 可选的套件配置，从 TOML 文件加载。
/// 每个字段都有默认值，因此缺少文件意味着使用全部默认值运行。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// The language for output messages (e.g., "en", "zh-CN").
    /// Falls back to the system locale when unset.
    ///
    /// 输出消息的语言（例如 "en", "zh-CN"）。
    /// 未设置时回退到系统语言环境。
    #[serde(default)]
    pub language: Option<String>,

    /// Name of the subject module to resolve at startup.
    /// 启动时要解析的被测模块名称。
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Milliseconds to wait between consecutive groups.
    /// 相邻分组之间等待的毫秒数。
    #[serde(default)]
    pub wait_ms: u64,

    /// Where to write an HTML report, if anywhere.
    /// HTML 报告的写入位置（如果有）。
    #[serde(default)]
    pub html: Option<PathBuf>,

    /// Where to write a JSON report, if anywhere.
    /// JSON 报告的写入位置（如果有）。
    #[serde(default)]
    pub json: Option<PathBuf>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            language: None,
            subject: default_subject(),
            wait_ms: 0,
            html: None,
            json: None,
        }
    }
}

fn default_subject() -> String {
    ".".to_string()
}

impl SuiteConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse suite configuration")
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    ///
    /// 加载配置。
    /// 显式给出的 `path` 必须存在。未给出时，如果存在 [`DEFAULT_CONFIG_FILE`]
    /// 则读取它，否则使用默认值。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default_path.is_file() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }
}

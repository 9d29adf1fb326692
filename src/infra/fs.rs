//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for writing report files.
//!
//! 此模块提供写入报告文件的实用功能。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expands `~` and environment variables in a user-supplied path.
///
/// # Arguments
/// * `path` - Path as written in the config file or on the command line
///
/// # Returns
/// The expanded path, or an error naming the variable that could not be resolved
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .with_context(|| format!("Failed to expand path: {}", raw))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Writes a report file, creating missing parent directories first.
///
/// # Arguments
/// * `path` - Destination path; `~` and `$VAR` are expanded
/// * `contents` - The rendered report
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let path = expand_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

//! # Subject Registry Module / 被测模块注册表模块
//!
//! Resolves a subject module by name at startup.
//!
//! 在启动时按名称解析被测模块。

use anyhow::{bail, Result};
use std::collections::BTreeMap;

use crate::core::value::Value;
use crate::subject;

type Factory = Box<dyn Fn() -> Value>;

/// Maps subject names to factories producing their exports.
/// 将被测模块名称映射到生成其导出内容的工厂函数。
#[derive(Default)]
pub struct SubjectRegistry {
    factories: BTreeMap<String, Factory>,
}

impl SubjectRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that knows this crate's own subject under `"."` and the
    /// package name.
    /// 一个注册表，以 `"."` 和包名登记本 crate 自身的被测模块。
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(".", subject::exports);
        registry.register(env!("CARGO_PKG_NAME"), subject::exports);
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Value + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    /// Resolves `name` to its exports.
    ///
    /// # Errors / 错误
    /// Fails for an unregistered name, listing the known ones.
    /// 对于未注册的名称会失败，并列出已知名称。
    pub fn resolve(&self, name: &str) -> Result<Value> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => {
                let known: Vec<&str> = self.factories.keys().map(String::as_str).collect();
                bail!(
                    "Unknown subject '{}'. Known subjects: {}",
                    name,
                    known.join(", ")
                )
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

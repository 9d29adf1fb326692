//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Subject Runner,
//! including the value model, assertions, configuration and the group
//! execution engine.
//!
//! 此模块包含 Subject Runner 的核心功能，
//! 包括值模型、断言、配置和分组执行引擎。

pub mod assertion;
pub mod config;
pub mod context;
pub mod execution;
pub mod models;
pub mod registry;
pub mod value;

// Re-exports
pub use assertion::{Check, Level, Outcome};
pub use context::TestContext;
pub use execution::Runner;
pub use models::RunReport;
pub use value::Value;

//! # Suite Module / 套件模块
//!
//! Registers the groups that check a subject against its contract.
//!
//! 注册用于根据约定检查被测模块的分组。

use anyhow::Result;

use crate::core::assertion::Level;
use crate::core::execution::Runner;
use crate::core::value::Value;

pub const INTERFACE_GROUP: &str = "Interface";
pub const METHOD_FOO_GROUP: &str = "Method foo()";

/// Builds a runner with the "Interface" and "Method foo()" groups, in that
/// order, bound to `subject`.
///
/// 构建一个绑定到 `subject` 的运行器，依次包含 "Interface" 和
/// "Method foo()" 分组。
pub fn build(subject: Value) -> Result<Runner> {
    let mut runner = Runner::new();

    let app = subject.clone();
    runner.add(INTERFACE_GROUP, move |ctx| {
        ctx.test()
            .is_object(Level::Fail, "module.exports", &app)
            .is_function(Level::Fail, ".foo()", &app.get("foo"))
            .done();
        Ok(())
    })?;

    let app = subject;
    runner.add(METHOD_FOO_GROUP, move |ctx| {
        let result = app.get("foo").call(".foo")?;
        ctx.test()
            .is_exactly(Level::Fail, "return", &result, "bar")
            .done();
        Ok(())
    })?;

    Ok(runner)
}

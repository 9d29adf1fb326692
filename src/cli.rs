// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Arguments accepted by the runner. All of them are optional.
/// 运行器接受的参数。全部都是可选的。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
    pub html: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language<I: IntoIterator<Item = String>>(args: I) -> Option<String> {
    let args: Vec<String> = args.into_iter().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("subject-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .help(t!("arg_html", locale = locale).to_string())
                .value_name("HTML")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help(t!("arg_json", locale = locale).to_string())
                .value_name("JSON")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

fn args_from_matches(matches: &ArgMatches) -> CliArgs {
    CliArgs {
        lang: matches.get_one::<String>("lang").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        html: matches.get_one::<PathBuf>("html").cloned(),
        json: matches.get_one::<PathBuf>("json").cloned(),
    }
}

/// Parses `args` (program name first) without exiting on error.
/// 解析 `args`（第一个为程序名），出错时不退出进程。
pub fn try_parse_from<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let locale = crate::resolve_locale(pre_parse_language(args.clone()).as_deref());
    let matches = build_cli(&locale).try_get_matches_from(args)?;
    Ok(args_from_matches(&matches))
}

/// Parses the process arguments. Help, version and usage errors are handled
/// by clap, which exits the process.
/// 解析进程参数。帮助、版本和用法错误由 clap 处理，它会退出进程。
pub fn parse_args() -> CliArgs {
    let locale = crate::resolve_locale(pre_parse_language(env::args()).as_deref());
    let matches = build_cli(&locale).get_matches();
    args_from_matches(&matches)
}

/// Runs the suite. Returns whether every assertion passed.
/// 运行套件。返回是否所有断言都通过。
pub async fn run(args: CliArgs) -> Result<bool> {
    commands::run::execute(args).await
}

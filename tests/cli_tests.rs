use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Runs the binary with no arguments in an empty directory: the built-in
/// subject satisfies every assertion, so the run exits 0 and prints the
/// success banner.
///
/// 在空目录中不带参数运行二进制文件：内置被测模块满足所有断言，
/// 因此运行以 0 退出并打印成功横幅。
#[test]
fn test_successful_run() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("subject-runner").unwrap();
    cmd.current_dir(dir.path()).arg("--lang").arg("en");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Interface"))
        .stdout(predicate::str::contains("Method foo()"))
        .stdout(predicate::str::contains(".foo() is function"))
        .stdout(predicate::str::contains("ALL ASSERTIONS PASSED"));
}

/// "Interface" output always precedes "Method foo()".
/// "Interface" 的输出总是在 "Method foo()" 之前。
#[test]
fn test_group_output_order() {
    let dir = tempdir().unwrap();
    let output = Command::cargo_bin("subject-runner")
        .unwrap()
        .current_dir(dir.path())
        .args(["--lang", "en"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let interface = stdout.find("Interface").unwrap();
    let method = stdout.find("Method foo()").unwrap();
    assert!(interface < method);
}

/// An unknown subject in the config aborts startup with a non-zero exit.
/// 配置中的未知被测模块会以非零退出码中止启动。
#[test]
fn test_unknown_subject_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Suite.toml"), "subject = \"left-pad\"\n").unwrap();

    let mut cmd = Command::cargo_bin("subject-runner").unwrap();
    cmd.current_dir(dir.path()).args(["--lang", "en"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown subject 'left-pad'"));
}

/// An explicit config path that does not exist is an error.
/// 不存在的显式配置路径是一个错误。
#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("subject-runner").unwrap();
    cmd.current_dir(dir.path())
        .args(["--lang", "en", "--config", "missing.toml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

/// Report flags write both files.
/// 报告参数会写入两个文件。
#[test]
fn test_report_files_are_written() {
    let dir = tempdir().unwrap();
    let html = dir.path().join("out").join("report.html");
    let json = dir.path().join("out").join("report.json");

    let mut cmd = Command::cargo_bin("subject-runner").unwrap();
    cmd.current_dir(dir.path())
        .args(["--lang", "en", "--html"])
        .arg(&html)
        .arg("--json")
        .arg(&json);

    cmd.assert().success();
    assert!(html.is_file());
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report["groups"].as_array().unwrap().len(), 2);
}

/// The config file's language is honored when `--lang` is absent.
/// 未指定 `--lang` 时使用配置文件中的语言。
#[test]
fn test_language_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Suite.toml"), "language = \"zh-CN\"\n").unwrap();

    let mut cmd = Command::cargo_bin("subject-runner").unwrap();
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("所有断言均已通过"));
}

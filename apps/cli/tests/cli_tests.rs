//! 命令行端到端测试

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cli() -> Command {
    Command::cargo_bin("levitate-cli").unwrap()
}

#[test]
fn run_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "duration = 2.0\n").unwrap();

    cli()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("步数: 200"))
        .stdout(predicate::str::contains("最大控制信号: 4150.60"));
}

#[test]
fn run_rejects_invalid_time_step() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    cli()
        .args(["run", "--dt", "0", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("dt"));
}

#[test]
fn run_rejects_oversized_duration() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "duration = 1e300\n").unwrap();

    cli()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("duration"));
}

#[test]
fn run_rejects_nan_band() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "duration = 1.0\n").unwrap();

    cli()
        .args(["run", "--band", "NaN", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1);
}

#[test]
fn animate_rejects_tiny_fps() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "duration = 0.1\n").unwrap();

    cli()
        .args(["animate", "--fps", "1e-30", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1);
}

#[test]
fn run_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .args(["run", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure();
}

#[test]
fn config_show_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[gains]\nki = 10.0\n").unwrap();

    cli()
        .args(["config", "show", "--kp", "99", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("kp = 99.0"))
        .stdout(predicate::str::contains("ki = 10.0"));
}

#[test]
fn config_init_and_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levitate.toml");

    cli().args(["config", "init", "--force"]).arg(&path).assert().success();
    assert!(path.exists());

    cli()
        .args(["config", "check"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("步数: 2000"));
}

#[test]
fn animate_renders_frames() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "duration = 0.1\n").unwrap();

    cli()
        .args(["animate", "--fps", "1000", "--no-clear", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("A = 4150.6"))
        .stdout(predicate::str::contains("t =   0.09 s"));
}

//! Container commands against a scripted docker stand-in.
//!
//! `docker.binary` points at a shell script that logs its argv and prints
//! canned output, so no container runtime is needed.

#![allow(clippy::expect_used, clippy::unwrap_used)]
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::{BASE_CONFIG, provision, write_config};

/// Install a fake docker that appends its arguments to `calls.log` and runs
/// `body` (a shell snippet) to produce output and the exit code.
fn fake_docker(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("docker");
    let log = dir.path().join("calls.log");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{body}\n",
        log.display()
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn calls(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("calls.log")).unwrap_or_default()
}

fn config_with_docker(dir: &TempDir, docker: &PathBuf) -> String {
    let yaml = BASE_CONFIG.replacen(
        "docker:\n",
        &format!("docker:\n  binary: {}\n", docker.display()),
        1,
    );
    write_config(dir, &yaml)
}

#[test]
fn test_create_then_ip_then_rm() {
    let dir = TempDir::new().unwrap();
    let docker = fake_docker(
        &dir,
        r#"case "$1" in
  run) echo 945132e7b4c9 ;;
  inspect) echo '{"NetworkSettings":{"IpAddress":"10.10.10.10"}}' ;;
esac"#,
    );
    let cfg = config_with_docker(&dir, &docker);

    provision()
        .args(["create", "app-name", "python"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("945132e7b4c9"));

    provision()
        .args(["ip", "app-name"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .success()
        .stdout("10.10.10.10\n");

    provision()
        .args(["list"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("app-name"));

    provision()
        .args(["rm", "app-name"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .success();

    let log = calls(&dir);
    assert!(
        log.contains("run -d tsuru/python /var/lib/tsuru/deploy git://git.example.com/app-name.git"),
        "log: {log}"
    );
    assert!(log.contains("inspect 945132e7b4c9"), "log: {log}");
    assert!(log.contains("rm 945132e7b4c9"), "log: {log}");

    provision()
        .args(["ip", "app-name"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no container recorded"));
}

#[test]
fn test_create_failure_logs_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let docker = fake_docker(&dir, "echo 'cool error' >&2\nexit 1");
    let cfg = config_with_docker(&dir, &docker);

    provision()
        .args(["create", "myapp", "python"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .env("RUST_LOG", "error")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error creating container myapp"));

    assert!(!dir.path().join("containers.json").exists());
}

#[test]
fn test_stop_unknown_app_fails_without_running_docker() {
    let dir = TempDir::new().unwrap();
    let docker = fake_docker(&dir, "exit 0");
    let cfg = config_with_docker(&dir, &docker);

    provision()
        .args(["stop", "ghost"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost"));

    assert!(calls(&dir).is_empty());
}

#[test]
fn test_commit_prints_image_id() {
    let dir = TempDir::new().unwrap();
    let docker = fake_docker(
        &dir,
        r#"case "$1" in
  run) echo abc123 ;;
  commit) echo sha256:feed ;;
esac"#,
    );
    let cfg = config_with_docker(&dir, &docker);

    provision()
        .args(["create", "app-name", "python"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .success();

    provision()
        .args(["commit", "app-name"])
        .env("TSURU_PROVISION_CONFIG", &cfg)
        .assert()
        .success()
        .stdout("sha256:feed\n");

    assert!(calls(&dir).contains("commit abc123 tsuru/app-name"));
}

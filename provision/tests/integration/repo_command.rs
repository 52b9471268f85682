//! `tsuru-provision repo` URL and path derivation.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::{BASE_CONFIG, provision, write_config};

#[test]
fn test_repo_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, BASE_CONFIG);
    provision()
        .args(["repo", "url", "foobar"])
        .env("TSURU_PROVISION_CONFIG", &path)
        .assert()
        .success()
        .stdout("git@git.example.com:foobar.git\n");
}

#[test]
fn test_repo_read_only_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, BASE_CONFIG);
    provision()
        .args(["repo", "read-only-url", "foobar"])
        .env("TSURU_PROVISION_CONFIG", &path)
        .assert()
        .success()
        .stdout("git://git.example.com/foobar.git\n");
}

#[test]
fn test_repo_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, BASE_CONFIG);
    provision()
        .args(["repo", "path"])
        .env("TSURU_PROVISION_CONFIG", &path)
        .assert()
        .success()
        .stdout("/home/application/current\n");
}

#[test]
fn test_repo_bare_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, BASE_CONFIG);
    provision()
        .args(["repo", "bare-path", "foobar"])
        .env("TSURU_PROVISION_CONFIG", &path)
        .assert()
        .success()
        .stdout("/var/repositories/foobar.git\n");
}

#[test]
fn test_repo_url_without_host_names_missing_setting() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "docker:\n  repository-namespace: tsuru\n");
    provision()
        .args(["repo", "url", "foobar"])
        .env("TSURU_PROVISION_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("git:host"));
}

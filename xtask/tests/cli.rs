//! Runs the built `sysrv-build` binary with no toolchain on PATH.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn sysrv_build(cwd: &Path, path_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sysrv-build"))
        .current_dir(cwd)
        .env("PATH", path_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn build_exits_zero_when_every_tool_is_missing() {
    let root = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    let out = sysrv_build(root.path(), empty_path.path(), &["build", "-a", "rv64", "-t", "5"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(root.path().join("build").is_dir());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cmake -DCMAKE_TOOLCHAIN_FILE=meta/cmake/rv64.cmake -B build"));
    assert!(stderr.contains("could not be started"));
}

#[test]
fn clean_exits_zero_and_removes_build_dir_without_tools() {
    let root = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();
    std::fs::create_dir_all(root.path().join("build/CMakeFiles")).unwrap();

    let out = sysrv_build(root.path(), empty_path.path(), &["clean"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(!root.path().join("build").exists());
}

#[test]
fn fail_fast_exits_one_when_configure_cannot_start() {
    let root = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    let out = sysrv_build(root.path(), empty_path.path(), &["build", "--fail-fast"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn unknown_target_is_a_usage_error() {
    let root = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();

    let out = sysrv_build(root.path(), empty_path.path(), &["install"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid value"));
    assert!(!root.path().join("build").exists());
}

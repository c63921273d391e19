//! Integration tests for the `collapse` and `relative` commands.
//!
//! Neither command touches the filesystem, so the paths used here need not
//! exist.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// collapse
// ============================================================================

#[test]
fn test_collapse_removes_dot_segments() {
    let env = TestEnv::new();

    env.command()
        .args(["collapse", "/a/./b/../c"])
        .assert()
        .success()
        .stdout("/a/c\n");
}

#[test]
fn test_collapse_never_climbs_above_root() {
    let env = TestEnv::new();

    env.command()
        .args(["collapse", "/hello/../../../../../../temp"])
        .assert()
        .success()
        .stdout("/temp\n");
}

#[test]
fn test_collapse_normalizes_backslashes() {
    let env = TestEnv::new();

    env.command()
        .args(["collapse", "build\\output\\..\\bin\\"])
        .assert()
        .success()
        .stdout("build/bin\n");
}

#[test]
fn test_collapse_rejects_illegal_characters() {
    let env = TestEnv::new();

    env.command()
        .args(["collapse", "src/*.rs"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Illegal characters"));
}

// ============================================================================
// relative
// ============================================================================

#[test]
fn test_relative_between_sibling_directories() {
    let env = TestEnv::new();

    env.command()
        .args([
            "relative",
            "/builds/gitlab-org/gitlab-ce",
            "/builds/gitlab-org/other",
        ])
        .assert()
        .success()
        .stdout("../other\n");
}

#[test]
fn test_relative_to_same_directory() {
    let env = TestEnv::new();

    env.command()
        .args(["relative", "/repo", "/repo"])
        .assert()
        .success()
        .stdout(".\n");
}

#[test]
fn test_relative_to_file() {
    let env = TestEnv::new();

    env.command()
        .args([
            "relative",
            "/repo/src/app",
            "/repo/tests/data/input.json",
            "--file",
        ])
        .assert()
        .success()
        .stdout("../../tests/data/input.json\n");
}

#[test]
fn test_relative_requires_absolute_paths() {
    let env = TestEnv::new();

    env.command()
        .args(["relative", "repo/src", "/repo/tests"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

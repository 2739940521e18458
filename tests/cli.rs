//! End-to-end tests for the `watermelon` and `cfutil` binaries.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn watermelon(input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("watermelon")
        .unwrap()
        .write_stdin(input)
        .assert()
}

#[test]
fn watermelon_prints_verdicts() {
    for (input, expected) in [
        ("8\n", "YES\n"),
        ("1\n", "NO\n"),
        ("2\n", "NO\n"),
        ("3\n", "NO\n"),
        ("100000\n", "YES\n"),
        ("-4\n", "NO\n"),
    ] {
        watermelon(input).success().stdout(expected);
    }
}

#[test]
fn watermelon_rejects_malformed_input() {
    watermelon("abc\n").failure().stdout("");
    watermelon("").failure();
}

#[test]
fn watermelon_logs_to_stderr_only() {
    let assert = Command::cargo_bin("watermelon")
        .unwrap()
        .env("RUST_LOG", "debug")
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout("YES\n");

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("Read w = 8"), "stderr: {}", stderr);
}

#[test]
fn watermelon_subcommand_matches_binary() {
    Command::cargo_bin("cfutil")
        .unwrap()
        .arg("watermelon")
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout("YES\n");
}

#[test]
fn new_scaffolds_problem_folder() {
    let tmp = TempDir::new().unwrap();

    Command::cargo_bin("cfutil")
        .unwrap()
        .current_dir(tmp.path())
        .args(["new", "4A_Watermelon"])
        .assert()
        .success();

    assert!(tmp.path().join("problems/4A_Watermelon/main.c").is_file());
}

#[test]
fn new_honours_problems_dir_env() {
    let tmp = TempDir::new().unwrap();

    Command::cargo_bin("cfutil")
        .unwrap()
        .current_dir(tmp.path())
        .env("CFU_PROBLEMS_DIR", "solutions")
        .args(["new", "1A"])
        .assert()
        .success();

    assert!(tmp.path().join("solutions/1A").is_dir());
    assert!(!tmp.path().join("problems").exists());
}

#[test]
fn build_reports_missing_file() {
    let tmp = TempDir::new().unwrap();

    Command::cargo_bin("cfutil")
        .unwrap()
        .current_dir(tmp.path())
        .args(["build", "missing.c"])
        .assert()
        .failure();

    assert!(!tmp.path().join("build").exists());
}

#[cfg(unix)]
#[test]
fn build_merges_headers_before_compiling() {
    let tmp = TempDir::new().unwrap();
    let include = tmp.path().join("lib/include");
    fs::create_dir_all(&include).unwrap();
    fs::write(include.join("even.h"), "int can_divide(int w);\n").unwrap();
    fs::write(
        tmp.path().join("lib/even.c"),
        "int can_divide(int w) { return w > 2 && w % 2 == 0; }\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("main.c"),
        "#include <stdio.h>\n#include \"even.h\"\nint main(void) { return !can_divide(8); }\n",
    )
    .unwrap();

    Command::cargo_bin("cfutil")
        .unwrap()
        .current_dir(tmp.path())
        .args(["build", "main.c", "--compiler", "true"])
        .assert()
        .success();

    let merged = fs::read_to_string(tmp.path().join("build/main_merged.c")).unwrap();
    assert!(merged.contains("//BEGIN HEADER: "));
    assert!(merged.contains("int can_divide(int w) { return w > 2 && w % 2 == 0; }"));
    assert!(!merged.contains("#include \"even.h\""));
}

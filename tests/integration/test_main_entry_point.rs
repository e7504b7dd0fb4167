// main.rsとエントリーポイントのテスト
use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sort_race"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn test_no_arguments_prints_three_reports() {
    let output = run_binary(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(stdout.lines().count(), 6);
    for label in ["quick", "bubble", "selection"] {
        let report = format!("Sort: {label}\nResult: 1 1 2 3 4 5 7 8 9\n");
        assert_eq!(stdout.matches(&report).count(), 1, "{stdout}");
    }
}

#[test]
fn test_show_original_comes_first() {
    let output = run_binary(&["--show-original", "--input", "3,2,1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Sort: original\nResult: 3 2 1\n"));
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn test_json_format() {
    let output = run_binary(&["--format", "json", "-a", "selection"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    assert_eq!(value["sort"], "selection");
    assert_eq!(value["result"], serde_json::json!([1, 1, 2, 3, 4, 5, 7, 8, 9]));
}

#[test]
fn test_invalid_input_exits_with_configuration_error() {
    let output = run_binary(&["--input", "1,two"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("設定エラー"));
}

#[test]
fn test_cli_help() {
    let output = run_binary(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("sort_race"));
    assert!(stdout.contains("--algorithm"));
    assert!(stdout.contains("--show-original"));
}

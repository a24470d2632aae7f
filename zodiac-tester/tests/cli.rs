use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "zodiac-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_checks_writes_output() {
    let exe = env!("CARGO_BIN_EXE_zodiac-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-checks", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available checks"));
    for key in ["dashboard", "quizzes", "tickets", "scheduler", "errors"] {
        assert!(content.contains(key), "missing {key}");
    }
}

#[test]
fn cli_unknown_only_checks_run_nothing() {
    let exe = env!("CARGO_BIN_EXE_zodiac-tester");
    let output_path = temp_path("none");
    let output = Command::new(exe)
        .args(["--checks", "bogus", "--report", "markdown", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown check"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("_No checks executed._"));
}

#[test]
fn cli_unreachable_backend_fails() {
    let exe = env!("CARGO_BIN_EXE_zodiac-tester");
    let output_path = temp_path("down");
    let output = Command::new(exe)
        .args([
            "--base-url",
            "http://127.0.0.1:9/api",
            "--checks",
            "errors",
            "--timeout-ms",
            "2000",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report[0]["check_name"], "errors");
    assert_eq!(report[0]["passed"], false);
}

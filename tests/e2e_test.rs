/// End-to-end tests for the CLI
use assert_cmd::Command;
use predicates::prelude::*;

fn quasar() -> Command {
    Command::cargo_bin("quasar").unwrap()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        quasar().arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        quasar().arg("--version").assert().code(0);
    }

    /// Exit code 0: report over the bundled inventory
    #[test]
    fn test_exit_code_success_bundled_report() {
        quasar().args(["--seed", "7"]).assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        quasar().arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        quasar().args(["-f", "xml"]).assert().code(2);
    }

    /// Exit code 3: Application error - non-existent upload path
    #[test]
    fn test_exit_code_application_error_nonexistent_upload() {
        quasar()
            .args(["--data", "/nonexistent/upload.csv"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read file"));
    }

    /// Exit code 3: Application error - wrong file suffix
    #[test]
    fn test_exit_code_application_error_not_csv() {
        quasar()
            .args(["--data", "tests/fixtures/not_csv.txt"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unsupported file type"));
    }

    /// Exit code 3: Application error - schema validation failure
    #[test]
    fn test_exit_code_application_error_missing_columns() {
        quasar()
            .args(["--data", "tests/fixtures/missing_columns.csv"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Missing required columns"))
            .stderr(predicate::str::contains("key_length"))
            .stderr(predicate::str::contains("current_status"));
    }
}

#[test]
fn test_json_report_for_upload_only_session() {
    let output = quasar()
        .args([
            "--data",
            "tests/fixtures/sample_upload.csv",
            "--mode",
            "upload-only",
            "--seed",
            "7",
            "--as-of",
            "2026-08-30",
        ])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["dataset"]["source"], "upload-only");
    assert_eq!(json["metrics"]["total_assets"], 3);
    assert_eq!(json["charts"]["compliance_trend"].as_array().unwrap().len(), 7);
    assert_eq!(
        json["charts"]["compliance_trend"][6]["date"],
        "8/30"
    );
}

#[test]
fn test_markdown_report_written_to_output_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.md");

    quasar()
        .args([
            "--format",
            "markdown",
            "--seed",
            "7",
            "--output",
            output_path.to_str().unwrap(),
        ])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Generating Markdown report"));

    let report = std::fs::read_to_string(&output_path).unwrap();
    assert!(report.contains("## Summary"));
    assert!(report.contains("QSR-0001"));
}

#[test]
fn test_template_flag_writes_sample_csv() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let template_path = temp_dir.path().join("quasar_sample_template.csv");

    quasar()
        .args(["--template", template_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Sample template written"));

    let template = std::fs::read_to_string(&template_path).unwrap();
    let lines: Vec<&str> = template.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("asset_id,type,encryption_algorithm"));
    assert!(lines[1].starts_with("ASSET-001"));
}

#[test]
fn test_ask_streams_canned_response() {
    quasar()
        .args([
            "--ask",
            "what is my compliance posture?",
            "--verbosity",
            "short",
            "--seed",
            "7",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Current compliance score: 67%"));
}

#[test]
fn test_ask_with_save_response_exports_json() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    quasar()
        .args([
            "--ask",
            "migration plan?",
            "--verbosity",
            "short",
            "--tone",
            "non-technical",
            "--seed",
            "7",
            "--save-response",
            temp_dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Response saved to"));

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("quasar-response-"));
    assert!(entries[0].ends_with(".json"));

    let content = std::fs::read_to_string(temp_dir.path().join(&entries[0])).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["query"], "migration plan?");
    assert_eq!(json["verbosity"], "short");
    assert_eq!(json["tone"], "non-technical");
    assert!(json["response"]
        .as_str()
        .unwrap()
        .contains("Migration priority"));
}

//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.
//! Every run gets an empty HOME and working directory so no user config leaks in.

use std::process::{Command, Output};

fn run_simulador(args: &[&str]) -> Output {
    let home = tempfile::tempdir().expect("Failed to create temp HOME");
    Command::new(env!("CARGO_BIN_EXE_simulador"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path())
        .output()
        .expect("Failed to execute 'simulador'")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_setup_valid_prints_configuration() {
    let output = run_simulador(&[
        "--no-color",
        "setup",
        "--partner",
        "João=50",
        "--partner",
        "Pedro=50",
        "--years",
        "5",
    ]);

    assert!(
        output.status.success(),
        "setup failed with exit code {:?}. stderr: {}",
        output.status.code(),
        stderr_of(&output)
    );
    let stdout = stdout_of(&output);
    assert!(stdout.contains("partner-1"), "got: {}", stdout);
    assert!(stdout.contains("João"), "got: {}", stdout);
    assert!(stdout.contains("Total de Participação: 100%"), "got: {}", stdout);
    assert!(stdout.contains("5 anos"), "got: {}", stdout);
    assert!(stdout.contains("Simulação"), "got: {}", stdout);
}

#[test]
fn test_setup_default_mode_has_empty_stderr() {
    let output = run_simulador(&["setup", "-p", "Ana=60", "-p", "Bia=40"]);

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.is_empty(),
        "Default quiet mode should have empty stderr, got: {}",
        stderr
    );
}

#[test]
fn test_setup_json_output() {
    let output = run_simulador(&[
        "setup",
        "--partner",
        "João=50",
        "--partner",
        "Pedro=50",
        "--years",
        "5",
        "--json",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let value: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("stdout should be valid JSON");

    assert_eq!(value["simulationYears"], 5);
    assert_eq!(value["partners"][0]["id"], "partner-1");
    assert_eq!(value["partners"][0]["name"], "João");
    assert_eq!(value["partners"][1]["id"], "partner-2");
    assert_eq!(value["partners"][1]["percentage"], 50);
    assert_eq!(value["monthlyData"].as_array().map(Vec::len), Some(0));
    assert_eq!(value["createdAt"], value["updatedAt"]);
}

#[test]
fn test_setup_total_not_hundred_fails() {
    let output = run_simulador(&["setup", "-p", "A=60", "-p", "B=30"]);

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("total: 90%"), "got: {}", stderr);
    assert!(
        stderr.contains("A soma dos percentuais deve ser exatamente 100%"),
        "got: {}",
        stderr
    );
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_setup_years_too_high_fails() {
    let output = run_simulador(&["setup", "-p", "A=50", "-p", "B=50", "--years", "11"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Máximo 10 anos"));
}

#[test]
fn test_setup_rejected_json_lists_fields() {
    let output = run_simulador(&["setup", "-p", "=50", "-p", "B=50", "--json"]);

    assert!(!output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("stdout should be valid JSON");
    assert_eq!(value["valid"], false);
    assert_eq!(value["total_percentage"], 100);
    assert_eq!(value["errors"][0]["field"], "partners[0].name");
}

#[test]
fn test_setup_single_partner_needs_loose_rules() {
    let output = run_simulador(&["setup", "-p", "Ana=100"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("dois sócios"));
}

#[test]
fn test_pages_lists_all_five() {
    let output = run_simulador(&["--no-color", "pages"]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for id in ["setup", "simulation", "charts", "summary", "export"] {
        assert!(stdout.contains(id), "missing {} in: {}", id, stdout);
    }
    // stdout carries no JSON log lines
    for line in stdout.lines() {
        assert!(!line.trim().starts_with('{'), "stdout contains JSON line: {}", line);
    }
}

#[test]
fn test_verbose_mode_emits_json_logs() {
    let output = run_simulador(&["-v", "pages"]);

    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(r#""event":"cli.pages_started""#),
        "verbose mode should log events, got: {}",
        stderr
    );
}

use std::fs;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

macro_rules! stepline {
    () => {
        assert_cmd::cargo::cargo_bin_cmd!("stepline")
    };
}

fn run_args<'a>(
    user_id: &'a str,
    role: &'a str,
    target: &'a str,
    username: &'a str,
    password: &'a str,
) -> [&'a str; 11] {
    [
        "run",
        "--user-id",
        user_id,
        "--role",
        role,
        "--target",
        target,
        "--username",
        username,
        "--password",
        password,
    ]
}

#[test]
fn hr_request_passes_every_step() {
    stepline!()
        .args(run_args("103", "hr", "100", "hr_user", "hrpass123"))
        .assert()
        .success()
        .stdout(contains(
            "Pipeline step result: true\nPipeline step result: true\nPipeline step result: true\n",
        ))
        .stdout(contains("User 103 performed action: Validation successful"))
        .stdout(contains("User 103 performed action: Viewed record for user 100"))
        .stdout(contains(
            "User 103 performed action: Deleted non-essential data for user 100",
        ));
}

#[test]
fn host_request_halts_at_deletion() {
    stepline!()
        .args(run_args("102", "host", "100", "host_user", "hostpass123"))
        .assert()
        .failure()
        .stdout(contains(
            "Pipeline step result: true\nPipeline step result: true\nPipeline step result: false\n",
        ))
        .stdout(contains("Deleted non-essential data").not())
        .stderr(contains("error: pipeline halted at step 'delete_data'"));
}

#[test]
fn short_username_halts_at_validation_with_empty_audit_log() {
    stepline!()
        .args(run_args("102", "host", "100", "ho", "hostpass123"))
        .assert()
        .failure()
        .stdout(contains("Pipeline step result: false\n"))
        .stdout(contains("Pipeline step result: true").not())
        .stdout(contains("Audit log: (empty)"))
        .stderr(contains("pipeline halted at step 'validation'"));
}

#[test]
fn missing_record_is_reported_but_not_fatal_for_viewing() {
    stepline!()
        .args(run_args("103", "hr", "404", "hr_user", "hrpass123"))
        .assert()
        .success()
        .stderr(contains("no record found"));
}

#[test]
fn config_file_changes_roles() {
    let dir = TempDir::new().expect("create temp dir");
    let config = dir.path().join("stepline.toml");
    fs::write(
        &config,
        r#"
[roles.host]
can_view = true
can_delete = true
"#,
    )
    .expect("write config");

    stepline!()
        .arg("--config")
        .arg(&config)
        .args(run_args("102", "host", "100", "host_user", "hostpass123"))
        .assert()
        .success()
        .stdout(contains("User 102 performed action: Deleted non-essential data for user 100"));
}

#[test]
fn unreadable_config_prints_error_chain() {
    stepline!()
        .args(["--config", "/nonexistent/stepline.toml"])
        .args(run_args("102", "host", "100", "host_user", "hostpass123"))
        .assert()
        .failure()
        .stderr(contains("error: configuration error"))
        .stderr(contains("caused by: failed to read config file"));
}

#[test]
fn missing_arguments_are_rejected() {
    stepline!()
        .args(["run", "--user-id", "1"])
        .assert()
        .failure()
        .stderr(contains("--role"));
}

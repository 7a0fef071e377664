use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn estat_cli() -> Command {
    Command::cargo_bin("estat-cli").expect("binary should build")
}

#[test]
fn test_help_lists_subcommands() {
    estat_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_stats_data_help_lists_flags() {
    estat_cli()
        .args(["stats", "data", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--stats-data-id"))
        .stdout(predicate::str::contains("--section-header"))
        .stdout(predicate::str::contains("--param"));
}

#[test]
fn test_unknown_subcommand_fails() {
    estat_cli().arg("frobnicate").assert().failure();
}

#[test]
fn test_config_show_with_isolated_dir() {
    let temp = tempdir().expect("temp dir should be created");
    estat_cli()
        .args(["--config-dir", temp.path().to_str().unwrap(), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Configuration"));
}

#[test]
fn test_config_set_rejects_invalid_format() {
    let temp = tempdir().expect("temp dir should be created");
    estat_cli()
        .args([
            "--config-dir",
            temp.path().to_str().unwrap(),
            "config",
            "set",
            "format",
            "yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Supported format: xml, json, jsonp, or csv.",
        ));
}

#[test]
fn test_stats_data_rejects_malformed_param() {
    let temp = tempdir().expect("temp dir should be created");
    estat_cli()
        .env("ESTAT_APP_ID", "TESTKEY123")
        .args([
            "--config-dir",
            temp.path().to_str().unwrap(),
            "stats",
            "data",
            "--stats-data-id",
            "0000020201",
            "--param",
            "no-separator",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in key=value format"));
}

#[test]
fn test_jsonp_without_callback_fails_before_any_request() {
    let temp = tempdir().expect("temp dir should be created");
    let config_dir = temp.path().to_str().unwrap().to_string();

    estat_cli()
        .args(["--config-dir", &config_dir, "config", "set", "format", "jsonp"])
        .assert()
        .success();

    estat_cli()
        .env("ESTAT_APP_ID", "TESTKEY123")
        .args([
            "--config-dir",
            &config_dir,
            "stats",
            "meta",
            "--stats-data-id",
            "0000020201",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "callback option is required when data format is JSONP.",
        ));
}

//! Integration tests for the postfilter CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the user's config files and environment
fn postfilter(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("postfilter").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("POSTFILTER_FILTER__CONTEXT")
        .env_remove("POSTFILTER_OUTPUT__FORMAT")
        .env_remove("POSTFILTER_OUTPUT__SHOW_NONE");
    cmd
}

const STATUSES: &str = r#"[
  {"id": "99", "content": "<p>I have a cat</p>"},
  {"id": "100", "content": "<p>category theory</p>", "spoiler_text": ""},
  {
    "id": "101",
    "content": "<p>Finale tonight</p>",
    "filtered": [
      {
        "filter": {"id": "1", "title": "TV", "context": ["home"], "filter_action": "warn"},
        "keyword_matches": ["finale"]
      },
      {
        "filter": {"id": "2", "title": "Spoilers", "context": ["notifications"], "filter_action": "hide"},
        "keyword_matches": ["finale"]
      }
    ]
  }
]"#;

const V1_FILTERS: &str = r#"[
  {"id": "1", "phrase": "cat", "context": ["home", "public"], "whole_word": true},
  {"id": "2", "phrase": "finale", "context": ["home"], "whole_word": false,
   "expires_at": "2020-01-01T00:00:00Z"}
]"#;

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("statuses.json"), STATUSES).unwrap();
    fs::write(dir.join("filters.json"), V1_FILTERS).unwrap();
}

fn json_report(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("check --format json should print JSON")
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    postfilter(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"));
}

/// Test CLI responds to --version and the version subcommand
#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    postfilter(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("postfilter"));

    postfilter(temp_dir.path())
        .args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter contexts"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    postfilter(temp_dir.path())
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_check_phrase_filters_json() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    let assert = postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json", "--v1-filters", "filters.json"])
        .args(["--context", "home", "--format", "json"])
        .assert()
        .success();

    let report = json_report(&assert.get_output().stdout);
    assert_eq!(report["mode"], "legacy");
    assert_eq!(report["context"], "home");

    let statuses = report["statuses"].as_array().unwrap();
    let ids: Vec<&str> = statuses.iter().map(|s| s["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["101", "100", "99"]);

    // Expired "finale" rule is ignored, "category" is not a whole-word cat
    assert_eq!(statuses[0]["action"], "none");
    assert_eq!(statuses[1]["action"], "none");
    assert_eq!(statuses[2]["action"], "hide");
    assert_eq!(statuses[2]["filter_titles"].as_array().unwrap().len(), 0);
}

#[test]
fn test_check_phrase_filters_respect_context() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    let assert = postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json", "--v1-filters", "filters.json"])
        .args(["--context", "notifications", "--format", "json", "--filtered-only"])
        .assert()
        .success();

    let report = json_report(&assert.get_output().stdout);
    assert!(report["statuses"].as_array().unwrap().is_empty());
}

#[test]
fn test_check_expiry_uses_now_flag() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    let assert = postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json", "--v1-filters", "filters.json"])
        .args(["--format", "json", "--filtered-only", "--now", "2019-06-01T00:00:00Z"])
        .assert()
        .success();

    let report = json_report(&assert.get_output().stdout);
    let ids: Vec<&str> = report["statuses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["101", "99"]);
}

#[test]
fn test_check_server_filters_by_context() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    let assert = postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json", "--format", "json"])
        .args(["--context", "notifications"])
        .assert()
        .success();

    let report = json_report(&assert.get_output().stdout);
    assert_eq!(report["mode"], "modern");
    let first = &report["statuses"][0];
    assert_eq!(first["id"], "101");
    assert_eq!(first["action"], "hide");
    assert_eq!(first["filter_titles"], serde_json::json!(["Spoilers"]));

    // Phrase-like text is ignored without v1 filters
    assert_eq!(report["statuses"][2]["action"], "none");
}

#[test]
fn test_check_text_output() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warn"))
        .stdout(predicate::str::contains("[TV]"))
        .stdout(predicate::str::contains("1 warned"));
}

#[test]
fn test_check_uses_configured_context() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());
    fs::write(
        temp_dir.path().join("postfilter.toml"),
        "[filter]\ncontext = \"notifications\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let assert = postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json"])
        .assert()
        .success();

    let report = json_report(&assert.get_output().stdout);
    assert_eq!(report["context"], "notifications");
    assert_eq!(report["statuses"][0]["action"], "hide");
}

#[test]
fn test_check_rejects_unknown_context() {
    let temp_dir = TempDir::new().unwrap();
    write_fixtures(temp_dir.path());

    postfilter(temp_dir.path())
        .args(["check", "--statuses", "statuses.json", "--context", "everywhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("everywhere"));
}

#[test]
fn test_check_missing_statuses_file() {
    let temp_dir = TempDir::new().unwrap();

    postfilter(temp_dir.path())
        .args(["check", "--statuses", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_config_get_and_show() {
    let temp_dir = TempDir::new().unwrap();

    postfilter(temp_dir.path())
        .args(["config", "get", "filter.context"])
        .assert()
        .success()
        .stdout(predicate::str::diff("home\n"));

    postfilter(temp_dir.path())
        .env("POSTFILTER_OUTPUT__FORMAT", "json")
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::diff("json\n"));

    postfilter(temp_dir.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"show_none\": true"));

    postfilter(temp_dir.path())
        .args(["config", "get", "no.such.key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_custom_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yaml");
    fs::write(&config_path, "filter:\n  context: thread\n").unwrap();

    postfilter(temp_dir.path())
        .args(["config", "get", "filter.context", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::diff("thread\n"));
}

//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(".paper-helper.toml");
    fs::write(&config_path, r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".paper-helper.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("paper-helper.toml");
    fs::write(&config_path, r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("paper-helper.toml"),
        "should report regular config: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(tmp.path().join(".paper-helper.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    // Both configs exist — regular file (higher precedence) should win
    fs::write(tmp.path().join(".paper-helper.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("paper-helper.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_toml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        "variant = \"baseline\"\nstructure_min_score = 60\n\n[extra_terms]\nmethods = [\"扎根理论\"]\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["variant"], "baseline");
    assert_eq!(json["config"]["structure_min_score"], 60);
    assert_eq!(json["config"]["extra_term_count"], 1);
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.yaml"),
        "variant: baseline\nquality_min_score: 45.5\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["variant"], "baseline");
    assert_eq!(json["config"]["quality_min_score"], 45.5);
}

#[test]
fn parses_yml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.yml"),
        "extra_citation_patterns:\n  - \"【\\\\d+】\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["extra_citation_patterns"], 1);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.json"),
        r#"{"max_input_bytes": 2048, "log_level": "error"}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
    assert_eq!(json["config"]["max_input_bytes"], 2048);
}

#[test]
fn disable_input_limit_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    // Parent config (error) vs child config (debug) — child should win
    fs::write(tmp.path().join(".paper-helper.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".paper-helper.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "closer config should win"
    );
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();

    // Both dotfiles exist — YAML comes after TOML in merge order, so it wins
    fs::write(tmp.path().join(".paper-helper.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join(".paper-helper.yaml"), "log_level: error\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["log_level"], "error",
        "later extension (YAML) should override earlier (TOML) in merge"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();

    // Project config sets debug
    fs::write(tmp.path().join(".paper-helper.toml"), r#"log_level = "debug""#).unwrap();

    // Explicit config sets error
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["config"]["log_level"], "error",
        "--config should override discovered config"
    );
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration").or(predicate::str::contains("config")));
}

#[test]
fn invalid_yaml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.yaml"),
        "invalid:\n  yaml\n content:\n[broken",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn invalid_variant_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.toml"), r#"variant = "deluxe""#).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    // Figment ignores unknown fields by default with serde
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\nanother_unknown = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    // Structure: /tmp/parent/.project.toml + /tmp/parent/repo/.git/ + /tmp/parent/repo/src/
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // Config in parent (outside repo)
    fs::write(parent.join(".paper-helper.toml"), r#"log_level = "error""#).unwrap();

    // .git directory marks repo boundary
    fs::create_dir(repo.join(".git")).unwrap();

    // Running from src/ should NOT find parent config (stopped at .git)
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default — boundary stops search"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "should not find config beyond boundary"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // .git and config in same directory
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".paper-helper.toml"), r#"log_level = "debug""#).unwrap();

    // Running from src/ should find the repo config
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "config next to .git should be found"
    );
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should report config file"
    );
}

// =============================================================================
// Config Applied to Analysis
// =============================================================================

const PAPER: &str = "摘要\n关键词\n引言\n研究表明(Smith, 2020)[1]。\n结论\n参考文献\n";

/// Run `--json analyze paper.txt` from `dir`.
fn analyze_in(dir: &std::path::Path, extra: &[&str]) -> assert_cmd::assert::Assert {
    fs::write(dir.join("paper.txt"), PAPER).unwrap();
    cmd()
        .args(["-C", dir.to_str().unwrap(), "--json", "analyze", "paper.txt"])
        .args(extra)
        .assert()
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("invalid JSON output")
}

#[test]
fn configured_variant_applies() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.toml"), r#"variant = "baseline""#).unwrap();

    let json = stdout_json(&analyze_in(tmp.path(), &[]).success());
    assert_eq!(json["variant"], "baseline");
    assert!(json.get("communication_analysis").is_none());
}

#[test]
fn command_line_variant_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.toml"), r#"variant = "baseline""#).unwrap();

    let json = stdout_json(&analyze_in(tmp.path(), &["--variant", "extended"]).success());
    assert_eq!(json["variant"], "extended");
    assert!(json["communication_analysis"].is_object());
}

#[test]
fn env_var_overrides_config_variant() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.toml"), r#"variant = "extended""#).unwrap();
    fs::write(tmp.path().join("paper.txt"), PAPER).unwrap();

    let output = cmd()
        .env("PAPER_HELPER_VARIANT", "baseline")
        .args(["-C", tmp.path().to_str().unwrap(), "--json", "analyze", "paper.txt"])
        .assert()
        .success();
    assert_eq!(stdout_json(&output)["variant"], "baseline");
}

#[test]
fn extra_citation_pattern_is_counted() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        "extra_citation_patterns = ['（[^）]+\\d{4}）']\n",
    )
    .unwrap();
    fs::write(tmp.path().join("paper.txt"), "见（张三，2019）。").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "--json", "analyze", "paper.txt"])
        .assert()
        .success();
    assert_eq!(stdout_json(&output)["academic_quality"]["citation_count"], 1);
}

#[test]
fn invalid_citation_pattern_fails_only_quality() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        "extra_citation_patterns = ['[unclosed']\n",
    )
    .unwrap();

    let json = stdout_json(&analyze_in(tmp.path(), &[]).success());
    let error = json["academic_quality"]["error"].as_str().unwrap();
    assert!(error.contains("invalid citation pattern"), "{error}");
    assert_eq!(json["structure_analysis"]["structure_score"], 100);
    assert!(json["writing_style"]["clarity_score"].is_u64());
    assert!(json["communication_analysis"]["overall_specialty_score"].is_f64());
}

#[test]
fn configured_structure_gate_applies() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.toml"), "structure_min_score = 90\n").unwrap();
    fs::write(tmp.path().join("draft.txt"), "引言\n结论\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "structure", "draft.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 90"));
}

#[test]
fn configured_input_limit_applies() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".paper-helper.toml"), "max_input_bytes = 8\n").unwrap();

    analyze_in(tmp.path(), &[])
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn log_dir_receives_log_file() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    fs::write(
        tmp.path().join(".paper-helper.toml"),
        format!("log_level = \"debug\"\nlog_dir = {:?}\n", logs.to_str().unwrap()),
    )
    .unwrap();

    analyze_in(tmp.path(), &[]).success();
    let entries: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert!(!entries.is_empty(), "log directory should contain a log file");
}

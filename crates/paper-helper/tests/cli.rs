//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Writes `content` to `name` inside a fresh temp dir.
fn write_doc(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

fn stdout_json(output: &assert_cmd::assert::Assert) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

const PAPER: &str = "\
摘要：本研究基于议程设置理论，采用问卷调查方法。
关键词：媒体融合；传播效果
一、引言
因此，研究表明(Smith, 2020)短视频平台改变了新闻传播[1]。
二、结论
参考文献
[1] 张三. 媒体融合研究[J]. 2021.
";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn short_help_flag_shows_usage() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn short_version_flag_shows_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["variant"], "extended");
    assert_eq!(json["formats"]["text"], true);
    assert_eq!(json["formats"]["docx"], false);
}

#[test]
fn info_json_contains_expected_fields() {
    cmd()
        .arg("info")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\""))
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn short_quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn short_verbose_flag_accepted() {
    cmd().args(["-v", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_auto_accepted() {
    cmd().args(["--color", "auto", "info"]).assert().success();
}

#[test]
fn color_always_accepted() {
    cmd().args(["--color", "always", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_prints_component_sections() {
    let (_dir, path) = write_doc("paper.txt", PAPER);
    cmd()
        .args(["--color", "never", "analyze", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0"))
        .stdout(predicate::str::contains("/100, all sections present"))
        .stdout(predicate::str::contains("Quality:"))
        .stdout(predicate::str::contains("Style:"))
        .stdout(predicate::str::contains("Communication:"))
        .stdout(predicate::str::contains("Recommendations:"));
}

#[test]
fn analyze_json_has_every_component() {
    let (_dir, path) = write_doc("paper.txt", PAPER);
    let output = cmd()
        .args(["--json", "analyze", path.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json["variant"], "extended");
    assert!(json["basic_stats"]["total_words"].as_u64().unwrap() > 0);
    assert_eq!(json["structure_analysis"]["structure_score"], 100);
    assert!(json["academic_quality"]["citation_count"].as_u64().unwrap() >= 2);
    assert!(json["writing_style"].is_object());
    assert!(json["communication_analysis"].is_object());
    assert!(json["recommendations"].as_array().unwrap().len() <= 8);
}

#[test]
fn analyze_baseline_variant_omits_specialty() {
    let (_dir, path) = write_doc("paper.txt", PAPER);
    let output = cmd()
        .args(["--json", "analyze", path.to_str().unwrap(), "--variant", "baseline"])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json["variant"], "baseline");
    assert!(json.get("communication_analysis").is_none());
    assert!(json["recommendations"].as_array().unwrap().len() <= 5);
}

#[test]
fn analyze_empty_file_reports_single_error() {
    let (_dir, path) = write_doc("empty.txt", "");
    let output = cmd()
        .args(["--json", "analyze", path.to_str().unwrap()])
        .assert()
        .failure();
    let json = stdout_json(&output);
    assert_eq!(json, serde_json::json!({ "error": "document is empty" }));
}

#[test]
fn analyze_whitespace_file_is_analyzed() {
    let (_dir, path) = write_doc("blank.txt", "  \n\t\n");
    let output = cmd()
        .args(["--json", "analyze", path.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json["basic_stats"]["total_words"], 0);
    assert_eq!(json["structure_analysis"]["structure_score"], 0);
}

#[test]
fn analyze_structure_gate_fails_below_minimum() {
    let (_dir, path) = write_doc("intro.txt", "引言\n正文。");
    cmd()
        .args([
            "analyze",
            path.to_str().unwrap(),
            "--structure-min",
            "50",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("structure score 20 is below minimum 50"));
}

#[test]
fn analyze_quality_gate_fails_below_minimum() {
    let (_dir, path) = write_doc("plain.txt", "没有引用的段落。");
    cmd()
        .args(["analyze", path.to_str().unwrap(), "--quality-min", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quality score 0.0 is below minimum 30.0"));
}

#[test]
fn analyze_multiple_files_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.md");
    std::fs::write(&a, PAPER).unwrap();
    std::fs::write(&b, "# Abstract\n\nText.\n").unwrap();

    let output = cmd()
        .args(["--json", "analyze", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list[0]["file"].as_str().unwrap().ends_with("a.txt"));
    assert_eq!(list[1]["structure_analysis"]["has_abstract"], true);
    assert_eq!(list[1]["structure_analysis"]["structure_score"], 20);
}

#[test]
fn analyze_multiple_files_text_output() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    std::fs::write(&a, PAPER).unwrap();
    std::fs::write(&b, "结论").unwrap();

    cmd()
        .args(["--color", "never", "analyze", a.to_str().unwrap(), b.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("missing Abstract, Keywords, Introduction, References"));
}

#[test]
fn analyze_markdown_headings_count_as_sections() {
    let (_dir, path) = write_doc(
        "paper.md",
        "# 摘要\n\n正文。\n\n## 参考文献\n\n```\n引言\n```\n",
    );
    let output = cmd()
        .args(["--json", "analyze", path.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json["structure_analysis"]["has_abstract"], true);
    assert_eq!(json["structure_analysis"]["has_references"], true);
    assert_eq!(json["structure_analysis"]["has_introduction"], false);
}

#[test]
fn analyze_pdf_is_unsupported() {
    let (_dir, path) = write_doc("paper.pdf", "%PDF-1.7");
    cmd()
        .args(["analyze", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported document format: pdf"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/paper.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn analyze_requires_a_file() {
    cmd()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_rejects_unknown_variant() {
    let (_dir, path) = write_doc("paper.txt", PAPER);
    cmd()
        .args(["analyze", path.to_str().unwrap(), "--variant", "deluxe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Structure Command
// =============================================================================

#[test]
fn structure_lists_present_and_missing() {
    let (_dir, path) = write_doc("paper.txt", "Abstract\nReferences\n");
    cmd()
        .args(["--color", "never", "structure", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("45.0"))
        .stdout(predicate::str::contains("PRESENT"))
        .stdout(predicate::str::contains("MISSING"))
        .stdout(predicate::str::contains("Abstract (摘要 / abstract, 20 points)"))
        .stdout(predicate::str::contains("References (参考文献 / references, 25 points)"));
}

#[test]
fn structure_json_is_profile() {
    let (_dir, path) = write_doc("paper.txt", PAPER);
    let output = cmd()
        .args(["--json", "structure", path.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json["structure_score"], 100);
    assert_eq!(json["has_keywords"], true);
}

#[test]
fn structure_min_gate() {
    let (_dir, path) = write_doc("paper.txt", "Conclusion\n");
    cmd()
        .args(["structure", path.to_str().unwrap(), "--min", "21"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 21"));
    cmd()
        .args(["structure", path.to_str().unwrap(), "--min", "20"])
        .assert()
        .success();
}

// =============================================================================
// Citations & Outline Commands
// =============================================================================

#[test]
fn citations_json_lists_all_styles() {
    let (_dir, path) = write_doc("paper.txt", "见(Smith, 2020)与[1]以及（张三，2019）和【2】。");
    let output = cmd()
        .args(["--json", "citations", path.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    let kinds: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "parenthesized",
            "bracketed",
            "full_width_parenthesized",
            "full_width_bracketed"
        ]
    );
}

#[test]
fn citations_text_output_counts() {
    let (_dir, path) = write_doc("paper.txt", "see [1] and [2]");
    cmd()
        .args(["--color", "never", "citations", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 citations"))
        .stdout(predicate::str::contains("[2]"));
}

#[test]
fn outline_json_has_sections() {
    let (_dir, path) = write_doc(
        "thesis.txt",
        "短视频时代的议程设置\n第一章 绪论\n研究背景。\n第二章 文献综述\n综述。\n",
    );
    let output = cmd()
        .args(["--json", "outline", path.to_str().unwrap()])
        .assert()
        .success();
    let json = stdout_json(&output);
    assert_eq!(json["title"], "短视频时代的议程设置");
    assert_eq!(json["sections"].as_array().unwrap().len(), 2);
    assert_eq!(json["sections"][1]["title"], "第二章 文献综述");
    assert_eq!(json["paragraph_count"], 5);
}

#[test]
fn outline_text_output() {
    let (_dir, path) = write_doc("thesis.txt", "标题\n研究方法：\n访谈。\n");
    cmd()
        .args(["--color", "never", "outline", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("标题"))
        .stdout(predicate::str::contains("研究方法："))
        .stdout(predicate::str::contains(" (1 lines)"));
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    // The -C flag should be accepted and work without error
    // We use a path that definitely exists
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

//! End-to-end tests for the `mdl` binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "# Title\n\nSome **bold** text.\n![alt](pic.png)\n| a | b |\n|---|---|\n| 1 | 2 |\n";

fn sample_file(dir: &TempDir) -> String {
    let path = dir.path().join("doc.md");
    fs::write(&path, SAMPLE).unwrap();
    path.to_str().unwrap().to_string()
}

// =============================================================================
// General
// =============================================================================

#[test]
fn test_help() {
    cargo_bin_cmd!("mdl")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse, inspect, and render"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("mdl")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("mdl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["parse", "missing.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: failed to read 'missing.md'"));
}

// =============================================================================
// Parse
// =============================================================================

#[test]
fn test_parse_file_summary() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_file(&temp_dir);

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["parse", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 5"))
        .stdout(predicate::str::contains("[1] Header (level 1, 1 spans)"))
        .stdout(predicate::str::contains("[2] Divider"))
        .stdout(predicate::str::contains("[4] Image (url: pic.png)"))
        .stdout(predicate::str::contains("[5] Table (2 columns, 1 rows)"));
}

#[test]
fn test_parse_stdin() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["parse", "-"])
        .write_stdin("### Small\nplain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 2"))
        .stdout(predicate::str::contains("[2] Paragraph (1 spans)"));
}

#[test]
fn test_parse_verbose_shows_markup() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_file(&temp_dir);

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["parse", "--verbose", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Content: Some **bold** text."))
        .stdout(predicate::str::contains("Header: a | b"))
        .stdout(predicate::str::contains("Row 1: 1 | 2"));
}

#[test]
fn test_parse_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["parse", "--json"])
        .write_stdin("## Hi\n![x](u.png)")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let blocks = value["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0]["type"], "header");
    assert_eq!(blocks[0]["level"], 2);
    assert_eq!(blocks[0]["content"][0]["text"], "Hi");
    assert_eq!(blocks[1]["type"], "divider");
    assert_eq!(blocks[2]["url"], "u.png");
}

// =============================================================================
// Render
// =============================================================================

#[test]
fn test_render_plain() {
    let temp_dir = TempDir::new().unwrap();
    let expected = format!("# Title\n{}\nSome bold text.\n", "─".repeat(40));

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .arg("render")
        .write_stdin("# Title\n\nSome **bold** text.")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_render_ansi() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["render", "--ansi"])
        .write_stdin("x *y*")
        .assert()
        .success()
        .stdout("x \x1b[3my\x1b[0m\n");
}

#[test]
fn test_render_uses_config_in_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("mdlite.toml"),
        "[render]\nrule_char = \"=\"\nrule_width = 5\nheader_markers = false\n",
    )
    .unwrap();

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .arg("render")
        .write_stdin("## Section\n![i](a.png)")
        .assert()
        .success()
        .stdout("Section\n=====\n[image: a.png]\n");
}

#[test]
fn test_render_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "[render]\nimage_placeholder = \"<{url}>\"\n").unwrap();

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("![i](a.png)")
        .assert()
        .success()
        .stdout("<a.png>\n");
}

#[test]
fn test_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["render", "--config", "nope.toml"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file 'nope.toml' not found"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("mdlite.toml"), "[render]\nrule_width = \"wide\"\n").unwrap();

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .arg("render")
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_invalid_config_ignored_by_parse_and_stats() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("mdlite.toml"), "not [valid toml").unwrap();

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .arg("parse")
        .write_stdin("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Blocks: 1"));

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .arg("stats")
        .write_stdin("text")
        .assert()
        .success();
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn test_stats() {
    let temp_dir = TempDir::new().unwrap();
    let file = sample_file(&temp_dir);

    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .args(["stats", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:          5"))
        .stdout(predicate::str::contains("Headers:        1"))
        .stdout(predicate::str::contains("Tables:         1"))
        .stdout(predicate::str::contains("Bold:           1"))
        .stdout(predicate::str::contains("Lines:          7"));
}

#[test]
fn test_stats_lines_match_parser_line_breaks() {
    let temp_dir = TempDir::new().unwrap();
    cargo_bin_cmd!("mdl")
        .current_dir(temp_dir.path())
        .arg("stats")
        .write_stdin("a\rb\rc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paragraphs:     3"))
        .stdout(predicate::str::contains("Lines:          3"));
}

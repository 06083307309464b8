use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn quotegen(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quotegen").unwrap();
    cmd.env("QUOTEGEN_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("quotes.json");
    std::fs::write(
        &path,
        r#"{"motivation": ["A - X", "B - Y"], "success": ["C - Z"]}"#,
    )
    .unwrap();
    path
}

#[test]
fn test_known_topic_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp_dir.path());

    quotegen(temp_dir.path())
        .arg("--corpus")
        .arg(&corpus)
        .args(["generate", "Motivation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 quotes for \"Motivation\""))
        .stdout(predicate::str::contains("\u{201c}A\u{201d}"))
        .stdout(predicate::str::contains("— Y"))
        .stdout(predicate::str::contains("\u{201c}C\u{201d}").not());
}

#[test]
fn test_unknown_topic_pools_every_quote() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp_dir.path());

    quotegen(temp_dir.path())
        .arg("--corpus")
        .arg(&corpus)
        .args(["generate", "nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 3 quotes from all topics"))
        .stdout(predicate::str::contains("— X"))
        .stdout(predicate::str::contains("— Y"))
        .stdout(predicate::str::contains("— Z"));
}

#[test]
fn test_limit_caps_selection() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp_dir.path());

    quotegen(temp_dir.path())
        .arg("--corpus")
        .arg(&corpus)
        .args(["generate", "anything", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 1 quote from all topics"))
        .stdout(predicate::str::contains("2.").not());
}

#[test]
fn test_empty_topic_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotegen(temp_dir.path())
        .args(["generate", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a topic"))
        .stdout(predicate::str::contains("Found").not());
}

#[test]
fn test_bundled_topics_listed_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotegen(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Topics:"))
        .stdout(predicate::str::contains("motivation"))
        .stdout(predicate::str::contains("perseverance"));
}

#[test]
fn test_bundled_generate() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotegen(temp_dir.path())
        .args(["g", "WISDOM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 quotes for \"WISDOM\""))
        .stdout(predicate::str::contains("Socrates"));
}

#[test]
fn test_config_max_quotes_applies() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp_dir.path());

    quotegen(temp_dir.path())
        .args(["config", "max-quotes", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-quotes set to 1"));

    quotegen(temp_dir.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-quotes = 1"))
        .stdout(predicate::str::contains("corpus = bundled"));

    quotegen(temp_dir.path())
        .arg("--corpus")
        .arg(&corpus)
        .args(["generate", "motivation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 quote for"));
}

#[test]
fn test_config_corpus_path_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp_dir.path());

    quotegen(temp_dir.path())
        .args(["config", "corpus"])
        .arg(&corpus)
        .assert()
        .success();

    quotegen(temp_dir.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] motivation (2)"))
        .stdout(predicate::str::contains("[2] success    (1)"))
        .stdout(predicate::str::contains("wisdom").not());
}

#[test]
fn test_config_rejects_bad_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotegen(temp_dir.path())
        .args(["config", "file-ext", "md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    quotegen(temp_dir.path())
        .args(["config", "max-quotes", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-quotes"));
}

#[test]
fn test_missing_corpus_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotegen(temp_dir.path())
        .arg("--corpus")
        .arg(temp_dir.path().join("missing.json"))
        .arg("topics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corpus error"));
}

#[test]
fn test_interactive_session() {
    let temp_dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp_dir.path());

    quotegen(temp_dir.path())
        .arg("--corpus")
        .arg(&corpus)
        .arg("interactive")
        .write_stdin("\nmotivation\n/next\n/next\n/topic success\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a topic"))
        .stdout(predicate::str::contains("motivation 2/2"))
        .stdout(predicate::str::contains("Found 1 quote for \"success\""))
        .stdout(predicate::str::contains("success 1/1"));
}

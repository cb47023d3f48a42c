//! Integration tests for the Raku CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const STORIES: &str = r#"[
    {"id": "neko", "title": "<ruby>猫<rt>ねこ</rt></ruby>の話", "level": 1,
     "story_html": "<p><ruby>猫<rt>ねこ</rt></ruby>が います。</p>",
     "translation": "There is a cat.",
     "quizzes": [
        {"question": "なにが いますか。", "choices": ["いぬ", "ねこ"], "answer_index": 1},
        {"question": "いくつ？", "choices": ["ひとつ", "ふたつ"], "answer_index": 0}
     ]},
    {"id": "aisatsu", "title": "あいさつ", "level": "N5", "story_html": "<p>こんにちは</p>"},
    {"id": "tenki", "title": "てんき", "level": "Level 3", "story_html": "<p>はれ</p>"}
]"#;

const DISCUSSIONS: &str = r#"[
    {"id": 1, "level": 1, "question_jp": "すきな たべものは？", "question_en": "Favourite food?",
     "answer_jp": "すしです。", "answer_en": "Sushi."},
    {"id": 2, "level": 1, "question_jp": "しゅうまつは？", "question_en": "Weekend plans?",
     "answer_jp": "やすみます。", "answer_en": "I rest."}
]"#;

/// Write a data file into the temp dir
fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// A command pointed at fixture data
fn raku(dir: &TempDir) -> Command {
    let stories = write_file(dir, "stories.json", STORIES);
    let discussions = write_file(dir, "discussions.json", DISCUSSIONS);

    let mut cmd = Command::cargo_bin("raku").unwrap();
    cmd.env_remove("RAKU_EXCLUDED_TIER")
        .arg("--data")
        .arg(stories)
        .arg("--discussions")
        .arg(discussions);
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("raku").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("quiz"))
        .stdout(predicate::str::contains("today"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("raku").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("raku"));
}

#[test]
fn test_list_sorted_by_difficulty() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)猫の話.*てんき.*あいさつ").unwrap());
}

#[test]
fn test_list_level_group() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["list", "--level", "Level 1-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("てんき"))
        .stdout(predicate::str::contains("あいさつ").not());
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    let output = raku(&dir)
        .args(["list", "--level", "N5", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let cards: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = cards.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["id"], "aisatsu");
    assert_eq!(cards[0]["badge"]["name"], "asagi");
}

#[test]
fn test_show_story() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["show", "neko"])
        .assert()
        .success()
        .stdout(predicate::str::contains("猫の話 | Japanese Stories"))
        .stdout(predicate::str::contains("猫(ねこ)が います。"))
        .stdout(predicate::str::contains("Translation").not());
}

#[test]
fn test_show_without_furigana() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["show", "neko", "--no-furigana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("猫が います。"))
        .stdout(predicate::str::contains("(ねこ)").not());
}

#[test]
fn test_show_translation() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["show", "neko", "--translation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There is a cat."));
}

#[test]
fn test_show_excluded_tier() {
    let dir = TempDir::new().unwrap();
    let output = raku(&dir)
        .args(["--exclude-tier", "N5", "show", "tenki", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["serial"], 2);
    assert_eq!(page["prev"], "neko");
    assert!(page["next"].is_null());
}

#[test]
fn test_show_unknown_story() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Story Not Found"));
}

#[test]
fn test_quiz_from_stdin() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["quiz", "neko"])
        .write_stdin("2\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Incorrect. The answer is: ひとつ"))
        .stdout(predicate::str::contains("Score: 1/2"));
}

#[test]
fn test_quiz_skips_bad_answers() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["quiz", "neko"])
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"))
        .stdout(predicate::str::contains("Score: 0/2"));
}

#[test]
fn test_speech_reads_furigana() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["speech", "neko"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ja-JP x0.85] ねこが います。"));
}

#[test]
fn test_today_with_date() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["today", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend plans?"));
}

#[test]
fn test_groups() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 1-3"))
        .stdout(predicate::str::contains("N5"));
}

#[test]
fn test_groups_use_configured_prefix() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .env("RAKU_LEVEL_PREFIX", "Lv")
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lv 1-3"))
        .stdout(predicate::str::contains("Level 1-3").not());

    raku(&dir)
        .env("RAKU_LEVEL_PREFIX", "Lv")
        .args(["list", "--level", "Lv 1-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("猫の話"))
        .stdout(predicate::str::contains("Lv 1"));
}

#[test]
fn test_validate_clean_file() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (3 stories)"));
}

#[test]
fn test_validate_reports_problems() {
    let dir = TempDir::new().unwrap();
    let bad = write_file(
        &dir,
        "bad.json",
        r#"[{"id": "empty", "title": "t", "level": "Bonus"}, {"id": "x"}]"#,
    );

    raku(&dir)
        .arg("validate")
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Story empty has no body text"))
        .stdout(predicate::str::contains("Malformed level"))
        .stdout(predicate::str::contains("record 1 (x)"));
}

#[test]
fn test_validate_fails_on_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let dup = write_file(
        &dir,
        "dup.json",
        r#"[{"id": "a", "title": "t", "level": 1, "story_html": "x"},
            {"id": "a", "title": "u", "level": 2, "story_html": "y"}]"#,
    );

    raku(&dir)
        .arg("validate")
        .arg(&dup)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Duplicate story id \"a\""));
}

#[test]
fn test_validate_missing_file() {
    let dir = TempDir::new().unwrap();
    raku(&dir)
        .args(["validate", "/nonexistent/stories.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}

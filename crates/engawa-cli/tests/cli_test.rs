use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;
use tempfile::TempDir;

const MATE_IN_ONE: &str = "8k/6Spp/9/9/9/9/9/9/4K4 b G 1";
const MATED: &str = "7Gk/6Spp/9/9/9/9/9/9/4K4 w - 1";

fn engawa() -> Command {
    Command::cargo_bin("engawa").expect("binary exists")
}

#[test]
fn moves_lists_thirty_startpos_moves() {
    let output = engawa().arg("moves").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 30);
    assert!(lines.contains(&"7g7f"));
    assert!(lines.contains(&"2h1h"));
}

#[test]
fn bestmove_hard_finds_mate() {
    engawa()
        .args(["bestmove", "--sfen", MATE_IN_ONE, "--difficulty", "hard"])
        .assert()
        .success()
        .stdout(predicate::str::diff("G*2a\n"));
}

#[test]
fn bestmove_resigns_when_mated() {
    engawa()
        .args(["bestmove", "--sfen", MATED, "--difficulty", "easy", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resign"));
}

#[test]
fn invalid_sfen_fails() {
    engawa()
        .args(["moves", "--sfen", "not a position"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sfen"));
}

#[test]
fn moves_rejects_oversized_hand() {
    let sfen = format!("4k4/9/9/9/9/9/9/9/4K4 b {} 1", "18P".repeat(15));
    engawa()
        .args(["moves", "--sfen", sfen.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sfen"));
}

#[test]
fn unknown_difficulty_is_rejected() {
    engawa().args(["bestmove", "--difficulty", "expert"]).assert().failure();
}

#[test]
fn selfplay_json_output() {
    let output = engawa()
        .args(["selfplay", "--json", "--seed", "42", "--max-plies", "10", "--sente", "easy", "--gote", "normal"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 42);
    let plies = value["plies"].as_u64().unwrap();
    assert!(plies <= 10);
    assert_eq!(value["moves"].as_array().map(Vec::len), Some(plies as usize));
}

#[test]
fn selfplay_is_reproducible_with_seed() {
    let run = || {
        engawa()
            .args(["selfplay", "--json", "--seed", "7", "--max-plies", "16"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn selfplay_reads_config_and_cli_overrides() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("engawa.toml");
    fs::write(&path, "sente = \"easy\"\ngote = \"easy\"\nseed = 5\nmax_plies = 40\n").unwrap();

    let output = engawa()
        .args(["selfplay", "--json", "--max-plies", "6", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seed"], 5);
    assert!(value["plies"].as_u64().unwrap() <= 6);
}

#[test]
fn selfplay_rejects_broken_config() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.toml");
    fs::write(&path, "sente = \"grandmaster\"\n").unwrap();
    engawa()
        .args(["selfplay", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse config"));
}

#[test]
fn play_accepts_resign_from_stdin() {
    engawa()
        .args(["play", "--difficulty", "easy", "--seed", "1"])
        .write_stdin("7g7f\nresign\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("先手の投了").and(predicate::str::contains("AI: ")));
}

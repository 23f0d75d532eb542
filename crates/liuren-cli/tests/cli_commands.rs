//! Integration tests for the `liuren` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use liuren_core::{Element, Fortune, PalaceDefinition, Tables};
use predicates::prelude::*;
use tempfile::TempDir;

fn liuren() -> Command {
    let mut cmd = Command::cargo_bin("liuren").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn cast_new_year_midnight() {
    liuren()
        .args(["cast", "2024", "2", "10", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("公历时间：2024-02-10 23:00"))
        .stdout(predicate::str::contains("农历时间：1月1日 (甲辰年正月初一)"))
        .stdout(predicate::str::contains("子时 (23:00-01:00)"))
        .stdout(predicate::str::contains("• 名称：大安").count(3));
}

#[test]
fn cast_leap_month() {
    liuren()
        .args(["cast", "2017", "7", "23", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6月1日(闰)"))
        .stdout(predicate::str::contains("• 名称：小吉"));
}

#[test]
fn cast_invalid_month_fails() {
    liuren()
        .args(["cast", "2024", "13", "1", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: invalid input"));
}

#[test]
fn cast_out_of_range_fails() {
    liuren()
        .args(["cast", "1899", "12", "31", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("supported range"));
}

#[test]
fn cast_partial_arguments_fail() {
    liuren()
        .args(["cast", "2024", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("together"));
}

#[test]
fn cast_now_succeeds() {
    liuren()
        .arg("cast")
        .assert()
        .success()
        .stdout(predicate::str::contains("小六壬卦象报告"));
}

#[test]
fn cast_json() {
    let output = liuren()
        .args(["cast", "2024", "2", "10", "23", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["lunar_description"], "1月1日");
    assert_eq!(json["lunar"]["month"], 1);
    assert_eq!(json["hour_slot"]["name"], "子");
    assert_eq!(json["month_palace"]["name"], "大安");
    assert_eq!(json["indices"]["hour"], 0);
}

#[test]
fn palaces_lists_tables() {
    liuren()
        .arg("palaces")
        .assert()
        .success()
        .stdout(predicate::str::contains("空亡"))
        .stdout(predicate::str::contains("事有不成，财防落空"))
        .stdout(predicate::str::contains("亥"))
        .stdout(predicate::str::contains("21:00-23:00"));
}

#[test]
fn session_scripted() {
    liuren()
        .args(["session", "--no-pause"])
        .write_stdin("2024\n2\n10\n23\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("欢迎使用小六壬占卜系统"))
        .stdout(predicate::str::contains("时宫卦象"))
        .stdout(predicate::str::contains("感谢使用，再见！"));
}

#[test]
fn default_command_is_session() {
    liuren()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("年份 (默认:"));
}

#[test]
fn custom_tables_file() {
    let mut palaces = Tables::builtin().palaces().clone();
    palaces[0] = PalaceDefinition::new("平安", Fortune::Auspicious, Element::Wood, "一切顺遂");
    let tables = Tables::builtin().with_palaces(palaces);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(&path, serde_json::to_string(&tables).unwrap()).unwrap();

    liuren()
        .arg("--tables")
        .arg(&path)
        .args(["cast", "2024", "2", "10", "23"])
        .assert()
        .success()
        .stdout(predicate::str::contains("平安"))
        .stdout(predicate::str::contains("一切顺遂"));
}

#[test]
fn malformed_tables_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(&path, r#"{"palaces": []}"#).unwrap();

    liuren()
        .arg("--tables")
        .arg(&path)
        .arg("palaces")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tables file"));
}

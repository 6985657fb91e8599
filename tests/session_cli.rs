#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

fn flashcards_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flashcards").unwrap();
    cmd.env("FLASHCARDS_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_then_exit() {
    let temp = TempDir::new().unwrap();

    flashcards_cmd(&temp)
        .write_stdin("add\nFrance\nParis\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(MENU))
        .stdout(predicate::str::contains("The card:\nThe definition of the card:\n"))
        .stdout(predicate::str::contains(
            "The pair (\"France\":\"Paris\") has been added",
        ))
        .stdout(predicate::str::ends_with("Bye bye!\n"))
        // input is not echoed back
        .stdout(predicate::str::contains("\nFrance\n").not());
}

#[test]
fn test_startup_import_and_exit_export() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("capitals.txt");
    let target = temp.path().join("saved.txt");
    fs::write(&source, "France Paris 3\nJapan Tokyo 3\nItaly Rome 1\n").unwrap();

    flashcards_cmd(&temp)
        .arg("--import_from")
        .arg(&source)
        .arg("--export_to")
        .arg(&target)
        .write_stdin("hardest card\nremove\nItaly\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 cards have been loaded.\n"))
        .stdout(predicate::str::contains(
            "The hardest cards are \"France\", \"Japan\".",
        ))
        .stdout(predicate::str::contains("The card has been removed."))
        .stdout(predicate::str::ends_with("Bye bye!\n2 cards have been saved\n"));

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "France Paris 3\nJapan Tokyo 3\n"
    );
}

#[test]
fn test_missing_startup_import_is_not_fatal() {
    let temp = TempDir::new().unwrap();

    flashcards_cmd(&temp)
        .arg("--import-from")
        .arg(temp.path().join("nope.txt"))
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("File not found.\n"));
}

#[test]
fn test_single_card_ask_and_log() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("session.log");

    let input = format!(
        "add\nJapan\nTokyo\nask\n2\nTokyo\nKyoto\nhardest card\nlog\n{}\nexit\n",
        log_path.display()
    );

    flashcards_cmd(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Wrong. The right answer is \"Tokyo\"."))
        .stdout(predicate::str::contains(
            "The hardest card is \"Japan\". You have 1 errors answering it",
        ))
        .stdout(predicate::str::contains("The log has been saved."));

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.starts_with(&format!("{}\nadd\nThe card:\nJapan\n", MENU)));
    assert!(log.contains("How many times to ask?\n2\n"));
    assert!(log.ends_with(&format!("File name:\n{}\n", log_path.display())));
}

#[test]
fn test_config_supplies_export_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("from-config.txt");
    let config = format!(r#"{{"export_to": {:?}, "color": false}}"#, target);
    fs::write(temp.path().join("config.json"), config).unwrap();

    flashcards_cmd(&temp)
        .write_stdin("add\nSpain\nMadrid\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cards have been saved"));

    assert_eq!(fs::read_to_string(&target).unwrap(), "Spain Madrid 0\n");
}

#[test]
fn test_unwritable_export_fails() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("no-such-dir").join("out.txt");

    flashcards_cmd(&temp)
        .write_stdin(format!("export\n{}\nexit\n", bad.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

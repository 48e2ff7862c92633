//! Drive the `species-stat` binary through a whole survey.

use std::path::Path;
use std::process::{Command, Output};

fn species_stat(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_species-stat"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn survey_from_the_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let init = species_stat(root, &["init"]);
    assert!(init.status.success());
    assert!(root.join("species-stat.toml").exists());

    std::fs::write(
        root.join("contacts.json"),
        r#"[{"username": "grey"}, {"username": "ember"}, {"username": "scale"}]"#,
    )
    .unwrap();
    let import = species_stat(root, &["import", "riismo", "contacts.json"]);
    assert!(import.status.success());
    assert!(stdout(&import).contains("Imported 3 contacts"));

    for (contact, choice) in [("grey", "wolf"), ("ember", "wolf"), ("scale", "dragon")] {
        let answer = species_stat(root, &["answer", "riismo", contact, choice]);
        assert!(answer.status.success());
    }

    let summary = species_stat(root, &["summary", "riismo"]);
    assert!(summary.status.success());
    assert!(stdout(&summary).contains(
        "riismo's follow list has 401% the normal amount of dragon, \
         380% the normal amount of wolf, and 0% the normal amount of red fox."
    ));

    let stats = species_stat(root, &["stats"]);
    assert!(stdout(&stats).contains("Responses:   3"));
}

#[test]
fn unknown_choice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    assert!(species_stat(root, &["init"]).status.success());
    std::fs::write(root.join("contacts.json"), r#"[{"username": "grey"}]"#).unwrap();
    assert!(species_stat(root, &["import", "riismo", "contacts.json"])
        .status
        .success());

    let answer = species_stat(root, &["answer", "riismo", "grey", "gryphon"]);
    assert!(!answer.status.success());
    assert!(String::from_utf8_lossy(&answer.stderr).contains("Unknown choice"));
}

#[test]
fn summary_for_missing_user_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = species_stat(dir.path(), &["summary", "nobody"]);
    assert!(!output.status.success());
}

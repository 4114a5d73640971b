use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_subcommand_stamps_and_reports() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("stampver")
        .unwrap()
        .current_dir(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\*\*\* stampver Version \S+ \*\*\*\n$").unwrap());

    let artifact = dir.path().join("version.toml");
    assert!(artifact.exists());
    let content = std::fs::read_to_string(&artifact).unwrap();
    assert!(content.starts_with("# DO NOT EDIT THIS FILE BY HAND"));
    assert!(content.contains("version = \""));
}

#[test]
fn version_subcommand_without_git_uses_describe_fallback() {
    // No persisted artifact and no version-control executable reachable:
    // the chain must land on the hardcoded default, still exiting 0
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("stampver")
        .unwrap()
        .current_dir(dir.path())
        .env("PATH", "")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version 0.0.0.dev0"));

    let content = std::fs::read_to_string(dir.path().join("version.toml")).unwrap();
    assert!(content.contains("version = \"0.0.0.dev0\""));
}

#[test]
fn version_subcommand_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("version.toml");

    Command::cargo_bin("stampver")
        .unwrap()
        .current_dir(dir.path())
        .arg("version")
        .assert()
        .success();
    let first = std::fs::read(&artifact).unwrap();

    Command::cargo_bin("stampver")
        .unwrap()
        .current_dir(dir.path())
        .arg("version")
        .assert()
        .success();
    let second = std::fs::read(&artifact).unwrap();

    assert_eq!(first, second);
}

#[test]
fn version_subcommand_honors_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("stampver.toml"),
        "project_name = \"Widget\"\nartifact_path = \"widget-version.toml\"\n",
    )
    .unwrap();

    Command::cargo_bin("stampver")
        .unwrap()
        .current_dir(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("*** Widget Version "));

    assert!(dir.path().join("widget-version.toml").exists());
}

#[test]
fn version_subcommand_reuses_persisted_artifact() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("version.toml"),
        "# DO NOT EDIT THIS FILE BY HAND -- YOUR CHANGES WILL BE OVERWRITTEN.\nversion = \"4.2.0\"\n",
    )
    .unwrap();

    Command::cargo_bin("stampver")
        .unwrap()
        .current_dir(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version 4.2.0"));
}

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn migrate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_migrate"))
        .env("MIGRATIONS_DIR", dir)
        .args(args)
        .output()
        .expect("failed to spawn migrate")
}

#[test]
fn status_on_empty_dir_prints_hint() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("migrations");

    let out = migrate(&dir, &["status"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("No migration files found"));
    assert!(stdout.contains("generate <name>"));
}

#[test]
fn generate_then_status_lists_the_file_once() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("migrations");

    let out = migrate(&dir, &["generate", "create_users"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Created migration:"));

    let out = migrate(&dir, &["status"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Found 1 migration(s):"));
    assert_eq!(stdout.matches("_create_users.sql").count(), 1);
}

#[test]
fn generate_without_name_exits_one_and_writes_nothing() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("migrations");

    let out = migrate(&dir, &["generate"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.exists());
}

#[test]
fn run_and_rollback_print_todo_and_change_nothing() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("migrations");

    for cmd in ["run", "rollback"] {
        let out = migrate(&dir, &[cmd]);
        assert!(out.status.success());
        let stdout = String::from_utf8(out.stdout).unwrap();
        assert!(stdout.contains("TODO"));
        assert!(!dir.exists());
    }
}

#[test]
fn unknown_command_exits_one_and_lists_available_commands() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("migrations");

    let out = migrate(&dir, &["foo"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Available: status, generate, run, rollback"));
    assert!(!dir.exists());
}

#[test]
fn no_subcommand_behaves_as_status() {
    let base = tempfile::tempdir().unwrap();
    let dir = base.path().join("migrations");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("20240101120000_init.sql"), "").unwrap();

    let out = migrate(&dir, &[]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Found 1 migration(s):"));
}

#[test]
fn help_still_exits_zero() {
    let base = tempfile::tempdir().unwrap();
    let out = migrate(base.path(), &["--help"]);
    assert!(out.status.success());
}

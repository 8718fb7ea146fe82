// tests/cli_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const VERSION_FILE: &str = "module Foo\n  VERSION = \"1.2.3\"\nend\n";

fn git_bump(cwd: &Path, args: &[&str]) -> Output {
    let config_home = cwd.join(".config-home");
    Command::new(env!("CARGO_BIN_EXE_git-bump"))
        .args(args)
        .current_dir(cwd)
        .env("XDG_CONFIG_HOME", &config_home)
        .env_remove("CLICOLOR_FORCE")
        .env_remove("GIT_BUMP_LOG")
        .output()
        .expect("Failed to execute git-bump")
}

/// Repository `foo` with one commit containing version.rb
fn repository() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("foo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("version.rb"), VERSION_FILE).unwrap();

    let git = git2::Repository::init(&root).unwrap();
    let mut index = git.index().unwrap();
    index.add_path(Path::new("version.rb")).unwrap();
    index.write().unwrap();
    let tree = git.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = git2::Signature::now("Test", "test@example.com").unwrap();
    git.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
        .unwrap();

    (dir, root)
}

fn tag(root: &Path, name: &str) {
    let git = git2::Repository::open(root).unwrap();
    let head = git.head().unwrap().peel_to_commit().unwrap();
    git.tag_lightweight(name, head.as_object(), false).unwrap();
}

#[test]
fn test_help_aliases() {
    let dir = tempfile::tempdir().unwrap();
    for flag in ["-h", "-help", "--help", "/h", "/help", "/?", "-?"] {
        let output = git_bump(dir.path(), &[flag]);
        assert!(output.status.success(), "{} should print help", flag);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Usage"), "{}: {}", flag, stdout);
        assert!(stdout.contains("--pretend"));
    }
}

#[test]
fn test_unknown_flag_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = git_bump(dir.path(), &["-bogus"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "{}", stderr);
}

#[test]
fn test_missing_path_argument() {
    let dir = tempfile::tempdir().unwrap();
    let output = git_bump(dir.path(), &["-path"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_pretend_shows_transition_and_changes_nothing() {
    let (_dir, root) = repository();

    let output = git_bump(&root, &["-pretend", "-minor"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1.2.3 => 1.3.0"), "{}", stdout);
    assert!(stdout.contains("PRETEND"), "{}", stdout);
    assert!(stdout.contains("v1.3.0"), "{}", stdout);

    assert_eq!(fs::read_to_string(root.join("version.rb")).unwrap(), VERSION_FILE);
    let git = git2::Repository::open(&root).unwrap();
    assert!(git.tag_names(None).unwrap().is_empty());
}

#[test]
fn test_path_flag_selects_project() {
    let (dir, _root) = repository();

    let output = git_bump(dir.path(), &["-path", "foo", "-pretend", "-major"]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1.2.3 => 2.0.0"), "{}", stdout);
}

#[test]
fn test_existing_tag_is_reported_plainly() {
    let (_dir, root) = repository();
    tag(&root, "v1.2.3");

    let output = git_bump(&root, &["-none"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Tag v1.2.3 already exists"), "{}", stderr);
    assert!(!stderr.contains("panicked"));
    assert_eq!(fs::read_to_string(root.join("version.rb")).unwrap(), VERSION_FILE);
}

#[test]
fn test_malformed_version_file_is_fatal() {
    let (_dir, root) = repository();
    fs::write(root.join("version.rb"), "VERSION = \"1.2.3\"\n").unwrap();

    let output = git_bump(&root, &["-pretend"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Malformed version file"), "{}", stderr);
}

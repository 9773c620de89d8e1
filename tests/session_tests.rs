//! Integration tests for the shell session.
//!
//! These drive `Shell` line by line, with VFS documents and startup
//! scripts written to temporary directories.

use std::collections::HashMap;
use std::path::PathBuf;

use tempfile::TempDir;
use vfs_shell::{InterpreterError, ScriptError, Shell, ShellConfig};

const DOCUMENT: &str = r#"{
    "type": "directory",
    "name": "root",
    "children": [
        { "type": "file", "name": "motd", "content": "welcome" },
        { "type": "file", "name": "secret", "content": "czNjcjN0", "encoding": "base64" },
        { "type": "directory", "name": "a", "children": [
            { "type": "directory", "name": "b", "children": [
                { "type": "directory", "name": "sub", "children": [] },
                { "type": "file", "name": "zeta.txt", "content": "z" },
                { "type": "file", "name": "alpha.txt", "content": "a" },
                { "type": "directory", "name": "another", "children": [] }
            ] }
        ] }
    ]
}"#;

fn config() -> ShellConfig {
    let mut env = HashMap::new();
    env.insert("HOME".to_string(), "/home/tester".to_string());
    env.insert("USER".to_string(), "tester".to_string());
    ShellConfig {
        username: "tester".into(),
        hostname: "testhost".into(),
        cwd: "/home/tester".into(),
        home: "/home/tester".into(),
        env,
        ..Default::default()
    }
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn vfs_shell(dir: &TempDir) -> Shell {
    let doc = write_file(dir, "vfs.json", DOCUMENT);
    Shell::new(config().with_vfs_path(Some(doc)))
}

/// Run a line that must not exit; return (stdout, stderr, code).
fn run(shell: &mut Shell, line: &str) -> (String, String, i32) {
    let result = shell.execute(line).expect("line should not exit");
    (result.stdout, result.stderr, result.exit_code)
}

// ============================================================================
// Tokenizer through the session
// ============================================================================

#[test]
fn echo_keeps_quote_characters() {
    let mut shell = Shell::with_vfs(config(), None);
    let (out, _, code) = run(&mut shell, "echo 'a b' c");
    assert_eq!(out, "'a b' c\n");
    assert_eq!(code, 0);
}

#[test]
fn echo_unset_variable_is_literal() {
    let mut shell = Shell::with_vfs(config(), None);
    let (out, _, _) = run(&mut shell, "echo $UNSET_VAR_XYZ");
    assert_eq!(out, "$UNSET_VAR_XYZ\n");
}

#[test]
fn echo_expands_both_forms() {
    let mut shell = Shell::with_vfs(config(), None);
    let (out, _, _) = run(&mut shell, "echo $HOME ${USER}");
    assert_eq!(out, "/home/tester tester\n");
}

// ============================================================================
// VFS-backed commands
// ============================================================================

#[test]
fn ls_lists_files_then_directories() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    let (out, _, code) = run(&mut shell, "ls /a/b");
    assert_eq!(out, "alpha.txt\nzeta.txt\nanother/\nsub/\n");
    assert_eq!(code, 0);
}

#[test]
fn cat_reads_plain_and_base64_files() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    assert_eq!(run(&mut shell, "cat /motd").0, "welcome");
    assert_eq!(run(&mut shell, "cat secret").0, "s3cr3t");
}

#[test]
fn cd_and_pwd_track_the_cursor() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    run(&mut shell, "cd a/b");
    assert_eq!(run(&mut shell, "pwd").0, "/a/b\n");
    assert_eq!(shell.prompt(), "tester@testhost:/a/b$ ");

    run(&mut shell, "cd ..");
    assert_eq!(shell.vfs_cwd(), "/a");
    run(&mut shell, "cd /");
    run(&mut shell, "cd ..");
    assert_eq!(shell.vfs_cwd(), "/");
}

#[test]
fn cd_failure_keeps_session_running() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    let (_, err, code) = run(&mut shell, "cd /does/not/exist");
    assert_eq!(code, 1);
    assert!(err.contains("No such file or directory"));
    assert_eq!(shell.vfs_cwd(), "/");
    assert_eq!(run(&mut shell, "echo still here").0, "still here\n");
}

#[test]
fn cp_onto_existing_file_is_refused() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    run(&mut shell, "cp /motd /a/f");
    let (_, err, code) = run(&mut shell, "cp /secret /a/f");
    assert_eq!(code, 1);
    assert!(err.contains("File exists"));
    assert_eq!(run(&mut shell, "cat /a/f").0, "welcome");
}

#[test]
fn cp_missing_source_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    let (_, err, code) = run(&mut shell, "cp /missing /a/g");
    assert_eq!(code, 1);
    assert!(err.contains("cannot stat '/missing'"));
    let (_, _, code) = run(&mut shell, "cat /a/g");
    assert_eq!(code, 1);
}

#[test]
fn mkdir_then_cd() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    run(&mut shell, "mkdir /a/new");
    run(&mut shell, "cd /a/new");
    assert_eq!(shell.vfs_cwd(), "/a/new");
    assert_eq!(run(&mut shell, "ls").0, "");
}

#[test]
fn malformed_document_gives_empty_vfs() {
    let dir = TempDir::new().unwrap();
    let doc = write_file(&dir, "bad.json", "[1, 2");
    let mut shell = Shell::new(config().with_vfs_path(Some(doc)));
    let (out, _, code) = run(&mut shell, "ls");
    assert_eq!(out, "");
    assert_eq!(code, 0);
}

#[test]
fn yaml_document_is_supported() {
    let dir = TempDir::new().unwrap();
    let doc = write_file(
        &dir,
        "vfs.yaml",
        "type: directory\nchildren:\n  - type: file\n    name: hello\n    content: world\n",
    );
    let mut shell = Shell::new(config().with_vfs_path(Some(doc)));
    assert_eq!(run(&mut shell, "cat hello").0, "world");
}

// ============================================================================
// Stub mode and errors
// ============================================================================

#[test]
fn stub_mode_reports_instead_of_acting() {
    let mut shell = Shell::with_vfs(config(), None);
    assert!(run(&mut shell, "ls /tmp").0.contains("would list contents of"));
    assert_eq!(
        run(&mut shell, "cd /tmp").0,
        "cd: would change to directory: /tmp\n"
    );
    assert_eq!(run(&mut shell, "pwd").0, "/home/tester\n");
    let (_, err, code) = run(&mut shell, "cat x");
    assert_eq!(code, 1);
    assert!(err.contains("no virtual filesystem loaded"));
}

#[test]
fn unknown_command_is_not_fatal() {
    let mut shell = Shell::with_vfs(config(), None);
    let (_, err, code) = run(&mut shell, "frobnicate --now");
    assert_eq!(err, "Command not found: frobnicate\n");
    assert_eq!(code, 127);
    assert_eq!(shell.last_exit_code(), 127);
}

#[test]
fn conf_dump_reflects_configuration() {
    let dir = TempDir::new().unwrap();
    let mut shell = vfs_shell(&dir);
    let (out, _, _) = run(&mut shell, "conf-dump");
    assert!(out.contains("username=tester\n"));
    assert!(out.contains("mode=vfs\n"));
    assert!(out.contains("vfs_cwd=/\n"));
    assert_eq!(out, shell.configuration_report());
}

#[test]
fn exit_with_code() {
    let mut shell = Shell::with_vfs(config(), None);
    match shell.execute("exit 7") {
        Err(InterpreterError::Exit(e)) => assert_eq!(e.exit_code, 7),
        other => panic!("expected exit, got {:?}", other),
    }
}

#[test]
fn exit_with_bad_argument() {
    let mut shell = Shell::with_vfs(config(), None);
    match shell.execute("exit notanumber") {
        Err(InterpreterError::Exit(e)) => {
            assert_eq!(e.exit_code, 1);
            assert!(e.stderr.contains("numeric argument required"));
        }
        other => panic!("expected exit, got {:?}", other),
    }
}

// ============================================================================
// Startup scripts
// ============================================================================

#[test]
fn startup_script_skips_comments_and_survives_failures() {
    let dir = TempDir::new().unwrap();
    let script = write_file(
        &dir,
        "start.sh",
        "\n# a comment\necho hello\nnot_a_command\necho after\n",
    );
    let mut shell = Shell::with_vfs(config(), None);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let report = shell.run_startup_script(&script, &mut out, &mut err).unwrap();
    assert_eq!(report.executed, 3);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 2);

    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();
    assert_eq!(
        out,
        "tester@testhost:~$ echo hello\nhello\n\
         tester@testhost:~$ not_a_command\n\
         tester@testhost:~$ echo after\nafter\n"
    );
    assert_eq!(err, "Command not found: not_a_command\n");
}

#[test]
fn startup_script_exit_stops_replay() {
    let dir = TempDir::new().unwrap();
    let script = write_file(&dir, "start.sh", "echo one\nexit 3\necho never\n");
    let mut shell = Shell::with_vfs(config(), None);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    match shell.run_startup_script(&script, &mut out, &mut err) {
        Err(ScriptError::Exited(e)) => assert_eq!(e.exit_code, 3),
        other => panic!("expected exit, got {:?}", other),
    }
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("one\n"));
    assert!(!out.contains("never"));
}

#[test]
fn startup_script_uses_vfs_cursor_in_prompt() {
    let dir = TempDir::new().unwrap();
    let script = write_file(&dir, "start.sh", "cd /a\npwd\n");
    let mut shell = vfs_shell(&dir);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    shell.run_startup_script(&script, &mut out, &mut err).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "tester@testhost:/$ cd /a\ntester@testhost:/a$ pwd\n/a\n"
    );
}

#[test]
fn missing_startup_script_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut shell = Shell::with_vfs(config(), None);
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let result = shell.run_startup_script(&dir.path().join("absent.sh"), &mut out, &mut err);
    assert!(matches!(result, Err(ScriptError::Unavailable { .. })));
    assert_eq!(run(&mut shell, "echo ok").0, "ok\n");
}

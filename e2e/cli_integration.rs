// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `pgpgpg` binary against a fake `gpg` script selected through
// PGPGPG_GPG_BIN and checks the translated arguments, the diagnostics and
// the legacy exit codes.

mod fake_gpg;

use std::ffi::OsStr;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::process::Stdio;

use fake_gpg::{FakeGpg, DEFAULT_KEY_ID};

// ── 1. Translation reaches gpg ───────────────────────────────────────────────

#[test]
fn test_cli_armored_sign() {
    let gpg = FakeGpg::new();
    let file = gpg.data_file("report.txt", "quarterly numbers\n");

    let output = gpg
        .command()
        .args(["-sa", &file])
        .output()
        .expect("failed to run pgpgpg");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        gpg.args().unwrap(),
        vec!["--armor", "--no-batch", "--output", "report.txt.asc", "--sign", "report.txt"]
    );
}

#[test]
fn test_cli_key_listing() {
    let gpg = FakeGpg::new();
    let output = gpg.command().args(["-kvv", "alice"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        gpg.args().unwrap(),
        vec!["--no-batch", "--verbose", "--list-keys", "alice"]
    );
}

#[test]
fn test_cli_encrypt_to_self_uses_listed_key() {
    let gpg = FakeGpg::new();
    let file = gpg.data_file("letter.txt", "hi\n");

    let output = gpg
        .command()
        .args(["-e", "+encrypttoself", &file, "bob"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let args = gpg.args().unwrap();
    let pos = args.iter().position(|a| a == "--encrypt-to").unwrap();
    assert_eq!(args[pos + 1], format!("0x{DEFAULT_KEY_ID}"));
}

// ── 2. Parse and compile failures never launch gpg ───────────────────────────

#[test]
fn test_cli_invalid_option_exits_255() {
    let gpg = FakeGpg::new();
    let output = gpg.command().arg("-q").output().unwrap();

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Invalid option: -q\n");
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Invalid option"));
    assert!(gpg.args().is_none(), "gpg must not run");
}

#[test]
fn test_cli_help_request_goes_to_stdout() {
    let gpg = FakeGpg::new();
    let output = gpg.command().arg("-h").output().unwrap();

    assert_eq!(output.status.code(), Some(255));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Help not supported.\n");
    assert!(gpg.args().is_none());
}

#[test]
fn test_cli_non_utf8_argument_is_rejected() {
    let gpg = FakeGpg::new();
    let name = OsStr::from_bytes(b"r\xe9sum\xe9.txt");

    let output = gpg.command().arg("-sa").arg(name).output().unwrap();

    assert_eq!(output.status.code(), Some(255));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not valid UTF-8"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert!(gpg.args().is_none(), "gpg must not run");
}

#[test]
fn test_cli_unknown_long_option_exits_255() {
    let gpg = FakeGpg::new();
    let output = gpg.command().args(["+nosuch=1", "-sa", "x"]).output().unwrap();
    assert_eq!(output.status.code(), Some(255));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown long option `nosuch'"));
}

#[test]
fn test_cli_compile_error_exits_1() {
    let gpg = FakeGpg::new();
    let output = gpg.command().arg("-kx").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("User-ID required for exporting a key."), "stderr: {stderr}");
    assert!(gpg.args().is_none());
}

// ── 3. Exit status mapping ───────────────────────────────────────────────────

#[test]
fn test_cli_bad_signature_maps_to_30() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("FAKE_GPG_EXIT", "1")
        .args(["sig.asc", "data"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(30));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Bad signature"));
}

#[test]
fn test_cli_missing_key_maps_to_11() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("FAKE_GPG_EXIT", "2")
        .args(["sig.asc", "data"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(11));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Can't find the right public key"));
}

#[test]
fn test_cli_other_exit_codes_pass_through() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("FAKE_GPG_EXIT", "3")
        .args(["sig.asc", "data"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_killed_gpg_exits_255() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("FAKE_GPG_SIGNAL", "1")
        .args(["sig.asc", "data"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(255));
}

#[test]
fn test_cli_missing_gpg_exits_255() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("PGPGPG_GPG_BIN", gpg.dir().join("no-such-gpg"))
        .args(["sig.asc", "data"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(255));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Can't execute"));
}

// ── 4. Diagnostics ───────────────────────────────────────────────────────────

#[test]
fn test_cli_verbose_echoes_both_command_lines() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .args(["+verbose=2", "-kv"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("+verbose=2 -kv"), "stderr: {stderr}");
    assert!(stderr.contains("--no-batch --list-keys"), "stderr: {stderr}");
}

#[test]
fn test_cli_ignored_long_option_warns() {
    let gpg = FakeGpg::new();
    let output = gpg.command().args(["+pager=less", "-kv"]).output().unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Long option `pager' is not translated/used."), "stderr: {stderr}");
    assert_eq!(gpg.args().unwrap(), vec!["--no-batch", "--list-keys"]);
}

// ── 5. Standard input handling ───────────────────────────────────────────────

#[test]
fn test_cli_unknown_extension_gets_null_stdin() {
    let gpg = FakeGpg::new();
    let file = gpg.data_file("message.pgp", "binary");

    let mut child = gpg
        .command()
        .env("FAKE_GPG_READ_STDIN", "1")
        .arg(&file)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // pgpgpg may not read its stdin at all; ignore a closed pipe.
    let _ = child.stdin.take().unwrap().write_all(b"must not reach gpg\n");
    let status = child.wait().unwrap();

    assert!(status.success());
    assert_eq!(gpg.stdin_copy().as_deref(), Some(""));
    assert_eq!(gpg.args().unwrap(), vec!["--no-batch", "message.pgp"]);
}

#[test]
fn test_cli_filter_keeps_stdin() {
    let gpg = FakeGpg::new();

    let mut child = gpg
        .command()
        .env("FAKE_GPG_READ_STDIN", "1")
        .arg("-f")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"ciphertext\n").unwrap();
    }
    let status = child.wait().unwrap();

    assert!(status.success());
    assert_eq!(gpg.stdin_copy().as_deref(), Some("ciphertext\n"));
    assert_eq!(gpg.args().unwrap(), vec!["--no-batch", "--decrypt"]);
}

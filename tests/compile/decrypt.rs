// Armored store, decryption and verification: no `s`, `e` or `c` given.

use std::fs;
use std::path::Path;

use super::{gpg_args, translate, translate_with, StubKeys};
use pgpgpg::{compile, parse_args_from, CompileError};

const SIGNATURE: &str = "-----BEGIN PGP SIGNATURE-----\n\niQA/AwUB\n-----END PGP SIGNATURE-----\n";
const SIGNED: &str = "-----BEGIN PGP SIGNED MESSAGE-----\nHash: SHA1\n\nhello\n";
const KEY_BLOCK: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nmQGi\n";

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

// ── Store ────────────────────────────────────────────────────────────────────

#[test]
fn armor_without_command_stores() {
    assert_eq!(
        gpg_args(&["-a", "notes.txt"]),
        vec!["--no-batch", "--output", "notes.txt.asc", "--armor", "--store", "notes.txt"]
    );
}

#[test]
fn armor_long_option_also_stores() {
    assert_eq!(
        gpg_args(&["+armor", "+comment=hi", "notes.txt"]),
        vec![
            "--no-batch",
            "--comment",
            "hi",
            "--output",
            "notes.txt.asc",
            "--armor",
            "--store",
            "notes.txt"
        ]
    );
}

#[test]
fn store_from_piped_stdin() {
    let inv = translate_with(&["-a"], false, &StubKeys(None)).unwrap();
    assert_eq!(
        inv.argv.arguments().collect::<Vec<_>>(),
        vec!["--no-batch", "--set-filename", "stdin", "--output", "stdin.asc", "--armor", "--store"]
    );
}

#[test]
fn store_requires_a_file_on_a_terminal() {
    assert!(matches!(translate(&["-a"]), Err(CompileError::FilenameRequired)));
}

#[test]
fn decrypt_letter_is_not_claimed_by_store() {
    let err = translate(&["-ad", "x"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid options: -d");
}

// ── Decrypt from standard input ──────────────────────────────────────────────

#[test]
fn terminal_without_file_is_an_error() {
    assert!(matches!(translate(&[]), Err(CompileError::DecryptFilenameRequired)));
}

#[test]
fn filter_decrypts_stdin() {
    assert_eq!(gpg_args(&["-f"]), vec!["--no-batch", "--decrypt"]);
}

#[test]
fn piped_stdin_passes_descriptor_and_output() {
    let args: Vec<String> = ["-d", "-o", "plain.txt"].iter().map(|s| s.to_string()).collect();
    let mut opts = parse_args_from(&args).unwrap();
    opts.passphrase_fd = Some(5);
    let inv = compile(&opts, "gpg", &StubKeys(None)).unwrap();
    assert_eq!(
        inv.argv.arguments().collect::<Vec<_>>(),
        vec!["--no-batch", "--passphrase-fd", "5", "--output", "plain.txt"]
    );
}

// ── Two files: detached signature and data ───────────────────────────────────

#[test]
fn two_files_verify() {
    assert_eq!(
        gpg_args(&["sig.asc", "data.bin"]),
        vec!["--no-batch", "--verify", "sig.asc", "data.bin"]
    );
}

#[test]
fn keyrings_precede_the_command() {
    assert_eq!(
        gpg_args(&["+pubring=pub.pgp", "sig", "data"]),
        vec!["--no-batch", "--no-default-keyring", "--keyring", "pub.pgp", "--verify", "sig", "data"]
    );
}

// ── One file: guessed from the extension and armor header ────────────────────

#[test]
fn sig_extension_always_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let sig = dir.path().join("absent.sig").to_string_lossy().into_owned();
    let base = dir.path().join("absent").to_string_lossy().into_owned();
    let inv = translate(&[sig.as_str()]).unwrap();
    assert_eq!(inv.argv.to_vec(), vec!["gpg", "--no-batch", "--verify", sig.as_str(), base.as_str()]);
    assert!(!inv.null_stdin);
}

#[test]
fn sig_extension_is_case_insensitive() {
    assert_eq!(
        gpg_args(&["DATA.SIG"]),
        vec!["--no-batch", "--verify", "DATA.SIG", "DATA"]
    );
}

#[test]
fn armored_signature_verifies_against_base() {
    let dir = tempfile::tempdir().unwrap();
    let asc = write(dir.path(), "report.txt.asc", SIGNATURE);
    let base = dir.path().join("report.txt").to_string_lossy().into_owned();
    assert_eq!(gpg_args(&[asc.as_str()]), vec!["--no-batch", "--verify", asc.as_str(), base.as_str()]);
}

#[test]
fn clearsigned_message_is_checked_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let asc = write(dir.path(), "mail.asc", SIGNED);
    assert_eq!(gpg_args(&["-o", "out", asc.as_str()]), vec!["--no-batch", "--output", "out", asc.as_str()]);
    assert_eq!(gpg_args(&["-f", asc.as_str()]), vec!["--no-batch", "--decrypt", asc.as_str()]);
}

#[test]
fn unknown_armor_with_companion_file_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let asc = write(dir.path(), "blob.asc", KEY_BLOCK);
    let base = write(dir.path(), "blob", "data");
    assert_eq!(gpg_args(&[asc.as_str()]), vec!["--no-batch", "--verify", asc.as_str(), base.as_str()]);
}

#[test]
fn unknown_armor_without_companion_file_decrypts() {
    let dir = tempfile::tempdir().unwrap();
    let asc = write(dir.path(), "blob.asc", KEY_BLOCK);
    let inv = translate(&[asc.as_str()]).unwrap();
    assert_eq!(inv.argv.to_vec(), vec!["gpg", "--no-batch", asc.as_str()]);
    assert!(!inv.null_stdin);
}

#[test]
fn sig_and_asc_treat_a_missing_data_file_differently() {
    let dir = tempfile::tempdir().unwrap();
    let asc = write(dir.path(), "lonely.asc", KEY_BLOCK);
    let sig = dir.path().join("lonely.sig").to_string_lossy().into_owned();
    assert!(!gpg_args(&[asc.as_str()]).contains(&"--verify".to_owned()));
    assert!(gpg_args(&[sig.as_str()]).contains(&"--verify".to_owned()));
}

#[test]
fn missing_asc_file_falls_back_to_decrypt() {
    let dir = tempfile::tempdir().unwrap();
    let asc = dir.path().join("gone.asc").to_string_lossy().into_owned();
    assert_eq!(gpg_args(&[asc.as_str()]), vec!["--no-batch", asc.as_str()]);
}

#[test]
fn other_extension_decrypts_with_null_stdin() {
    let inv = translate(&["-o", "plain", "message.pgp"]).unwrap();
    assert_eq!(
        inv.argv.to_vec(),
        vec!["gpg", "--no-batch", "--output", "plain", "message.pgp"]
    );
    assert!(inv.null_stdin);
}

#[test]
fn no_extension_decrypts_with_null_stdin() {
    let inv = translate(&["-p", "message"]).unwrap();
    assert_eq!(inv.argv.to_vec(), vec!["gpg", "--no-batch", "message"]);
    assert!(inv.null_stdin);
}

#[test]
fn batch_decrypt() {
    assert_eq!(
        gpg_args(&["+batchmode", "+force=off", "-f"]),
        vec!["--batch", "--always-trust", "--no", "--decrypt"]
    );
}

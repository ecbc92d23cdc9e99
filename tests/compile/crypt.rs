// Encryption, signing and conventional encryption.

use super::{gpg_args, translate, translate_with, StubKeys};
use pgpgpg::{compile, CompileError, Flag, OptionState};

// ── Conventional encryption ──────────────────────────────────────────────────

#[test]
fn symmetric_file() {
    assert_eq!(
        gpg_args(&["-c", "file"]),
        vec!["--no-armor", "--no-batch", "--output", "file.pgp", "--symmetric", "file"]
    );
}

#[test]
fn symmetric_from_piped_stdin() {
    let inv = translate_with(&["-c"], false, &StubKeys(None)).unwrap();
    assert_eq!(
        inv.argv.arguments().collect::<Vec<_>>(),
        vec![
            "--no-armor",
            "--no-batch",
            "--set-filename",
            "stdin",
            "--output",
            "stdin.pgp",
            "--symmetric"
        ]
    );
}

#[test]
fn shared_fragments_keep_their_order() {
    assert_eq!(
        gpg_args(&["-c", "+compress=off", "+charset=latin1", "+comment=x", "file"]),
        vec![
            "--no-armor",
            "--no-batch",
            "--comment",
            "x",
            "-z",
            "0",
            "--charset",
            "iso-8859-1",
            "--output",
            "file.pgp",
            "--symmetric",
            "file"
        ]
    );
}

#[test]
fn passphrase_descriptor_is_forwarded() {
    let mut opts = OptionState::default();
    opts.flags.bump(Flag::Check);
    opts.args = vec!["file".into()];
    opts.stdin_is_terminal = true;
    opts.passphrase_fd = Some(9);
    let inv = compile(&opts, "gpg", &StubKeys(None)).unwrap();
    assert_eq!(
        inv.argv.arguments().collect::<Vec<_>>(),
        vec![
            "--no-armor",
            "--no-batch",
            "--passphrase-fd",
            "9",
            "--output",
            "file.pgp",
            "--symmetric",
            "file"
        ]
    );
}

// ── Public-key encryption ────────────────────────────────────────────────────

#[test]
fn encrypt_for_recipients() {
    assert_eq!(
        gpg_args(&["-e", "letter.txt", "bob", "carol"]),
        vec![
            "--no-armor",
            "--no-batch",
            "--output",
            "letter.txt.pgp",
            "--recipient",
            "bob",
            "--recipient",
            "carol",
            "--encrypt",
            "letter.txt"
        ]
    );
}

#[test]
fn filter_treats_every_argument_as_recipient() {
    assert_eq!(
        gpg_args(&["-ef", "bob", "carol"]),
        vec![
            "--no-armor",
            "--no-batch",
            "--set-filename",
            "stdin",
            "--recipient",
            "bob",
            "--recipient",
            "carol",
            "--encrypt"
        ]
    );
}

#[test]
fn encrypt_and_sign() {
    assert_eq!(
        gpg_args(&["-esa", "file", "bob", "-u", "alice"]),
        vec![
            "--armor",
            "--no-batch",
            "--output",
            "file.asc",
            "--recipient",
            "bob",
            "--local-user",
            "alice",
            "--sign",
            "--encrypt",
            "file"
        ]
    );
}

#[test]
fn encrypt_trust_options() {
    assert_eq!(
        gpg_args(&["-e", "+cert_depth=2", "f", "bob"]),
        vec![
            "--no-armor",
            "--no-batch",
            "--max-cert-depth",
            "2",
            "--output",
            "f.pgp",
            "--recipient",
            "bob",
            "--encrypt",
            "f"
        ]
    );
}

#[test]
fn batch_encrypt_repeats_force() {
    assert_eq!(
        gpg_args(&["-e", "+batchmode", "+force", "f", "bob"]),
        vec![
            "--no-armor",
            "--batch",
            "--always-trust",
            "--yes",
            "--yes",
            "--output",
            "f.pgp",
            "--recipient",
            "bob",
            "--encrypt",
            "f"
        ]
    );
}

#[test]
fn encrypt_to_self_uses_default_key() {
    let inv = translate_with(
        &["-e", "+encrypttoself", "f", "bob"],
        true,
        &StubKeys(Some("0x0123456789ABCDEF")),
    )
    .unwrap();
    let args: Vec<&str> = inv.argv.arguments().collect();
    let pos = args.iter().position(|a| *a == "--encrypt-to").unwrap();
    assert_eq!(args[pos + 1], "0x0123456789ABCDEF");
    assert_eq!(args[pos + 2], "--encrypt");
}

#[test]
fn encrypt_to_self_prefers_local_user() {
    // The stub fails, so success proves the resolver was not consulted.
    let args = gpg_args(&["-e", "+encrypttoself", "+myname=alice", "f", "bob"]);
    let pos = args.iter().position(|a| a == "--encrypt-to").unwrap();
    assert_eq!(args[pos + 1], "alice");
}

#[test]
fn encrypt_to_self_without_any_key_fails() {
    let err = translate(&["-e", "+encrypttoself", "f", "bob"]).unwrap_err();
    assert!(matches!(err, CompileError::DefaultKey(_)));
    assert_eq!(err.to_string(), "Can't get default key user id.");
}

// ── Signing ──────────────────────────────────────────────────────────────────

#[test]
fn text_sign_binary_output() {
    assert_eq!(
        gpg_args(&["-st", "msg.txt"]),
        vec!["--textmode", "--no-armor", "--no-batch", "--output", "msg.txt.pgp", "--sign", "msg.txt"]
    );
}

#[test]
fn armored_text_sign_clearsigns() {
    assert_eq!(
        gpg_args(&["-sta", "msg.txt"]),
        vec![
            "--textmode",
            "--armor",
            "--no-batch",
            "--output",
            "msg.txt.asc",
            "--escape-from",
            "--clearsign",
            "msg.txt"
        ]
    );
}

#[test]
fn clearsig_off_signs_normally() {
    let args = gpg_args(&["+clearsig=off", "-sta", "msg.txt"]);
    assert!(args.contains(&"--sign".to_owned()));
    assert!(!args.contains(&"--clearsign".to_owned()));
}

#[test]
fn textmode_long_option_does_not_select_text_mode() {
    assert_eq!(
        gpg_args(&["+textmode", "-sa", "msg.txt"]),
        vec!["--armor", "--no-batch", "--output", "msg.txt.asc", "--sign", "msg.txt"]
    );
}

#[test]
fn detached_signature() {
    assert_eq!(
        gpg_args(&["-sb", "data", "-u", "alice"]),
        vec![
            "--no-armor",
            "--no-batch",
            "--local-user",
            "alice",
            "--output",
            "data.sig",
            "--detach-sign",
            "data"
        ]
    );
}

#[test]
fn armored_detached_signature_is_not_clearsigned() {
    let args = gpg_args(&["-sbat", "data"]);
    assert!(args.contains(&"--detach-sign".to_owned()));
    assert!(args.contains(&"data.asc".to_owned()));
}

#[test]
fn sign_requires_a_file_on_a_terminal() {
    assert!(matches!(translate(&["-s"]), Err(CompileError::FilenameRequired)));
}

// ── Combinations ─────────────────────────────────────────────────────────────

#[test]
fn conventional_and_public_key_together_are_unknown() {
    let mut opts = OptionState::default();
    opts.flags.bump(Flag::Check);
    opts.flags.bump(Flag::Encrypt);
    opts.args = vec!["f".into()];
    assert!(matches!(
        compile(&opts, "gpg", &StubKeys(None)),
        Err(CompileError::UnknownCombination)
    ));
}

#[test]
fn repeated_sign_letter_is_unknown() {
    let mut opts = OptionState::default();
    opts.flags.bump(Flag::Sign);
    opts.flags.bump(Flag::Sign);
    opts.args = vec!["f".into()];
    assert!(matches!(
        compile(&opts, "gpg", &StubKeys(None)),
        Err(CompileError::UnknownCombination)
    ));
}

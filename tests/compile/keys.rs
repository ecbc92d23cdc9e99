// Key management: `-k` followed by one sub-command letter.

use super::{gpg_args, translate};
use pgpgpg::CompileError;

#[test]
fn generate_key_ignores_keybits() {
    assert_eq!(gpg_args(&["-kg", "1024"]), vec!["--no-batch", "--gen-key"]);
}

#[test]
fn batch_mode_emits_force_twice() {
    assert_eq!(
        gpg_args(&["-kg", "+batchmode", "+force"]),
        vec!["--batch", "--always-trust", "--yes", "--yes", "--gen-key"]
    );
}

#[test]
fn trust_options_follow_batch_mode() {
    assert_eq!(
        gpg_args(&["-kv", "+completes_needed=2", "+marginals_needed=3"]),
        vec![
            "--no-batch",
            "--completes-needed",
            "2",
            "--marginals-needed",
            "3",
            "--list-keys"
        ]
    );
}

#[test]
fn import_key_file() {
    assert_eq!(gpg_args(&["-ka", "keys.asc"]), vec!["--no-batch", "--import", "keys.asc"]);
}

#[test]
fn import_from_stdin_ignores_arguments() {
    assert_eq!(
        gpg_args(&["-kaf", "ignored", "also-ignored"]),
        vec!["--no-batch", "--import"]
    );
}

#[test]
fn import_needs_exactly_one_file() {
    assert!(matches!(translate(&["-ka"]), Err(CompileError::KeyfileRequired)));
    assert!(matches!(
        translate(&["-ka", "keys.asc", "ring.pgp"]),
        Err(CompileError::KeyringArgumentUnsupported)
    ));
}

#[test]
fn export_to_file() {
    assert_eq!(
        gpg_args(&["-kxa", "alice", "alice.asc"]),
        vec!["--no-batch", "--armor", "--export", "--output", "alice.asc", "alice"]
    );
}

#[test]
fn export_to_stdout() {
    assert_eq!(
        gpg_args(&["-kxf", "alice"]),
        vec!["--no-batch", "--no-armor", "--export", "alice"]
    );
}

#[test]
fn export_errors() {
    assert!(matches!(
        translate(&["-kx"]),
        Err(CompileError::UserIdRequired("exporting a key"))
    ));
    assert!(matches!(translate(&["-kx", "alice"]), Err(CompileError::ExportFileRequired)));
    assert!(matches!(
        translate(&["-kx", "alice", "out", "ring"]),
        Err(CompileError::KeyringArgumentUnsupported)
    ));
    assert!(matches!(
        translate(&["-kxf", "alice", "ring"]),
        Err(CompileError::KeyringArgumentUnsupported)
    ));
}

#[test]
fn view_keys() {
    assert_eq!(gpg_args(&["-kv"]), vec!["--no-batch", "--list-keys"]);
    assert_eq!(
        gpg_args(&["-kvv", "bob"]),
        vec!["--no-batch", "--verbose", "--list-keys", "bob"]
    );
    assert_eq!(gpg_args(&["-kvc", "bob"]), vec!["--no-batch", "--fingerprint", "bob"]);
}

#[test]
fn view_rejects_keyring_argument() {
    assert!(matches!(
        translate(&["-kv", "bob", "ring.pgp"]),
        Err(CompileError::KeyringArgumentUnsupported)
    ));
}

#[test]
fn check_signatures() {
    assert_eq!(gpg_args(&["-kc"]), vec!["--no-batch", "--check-sigs"]);
    assert_eq!(gpg_args(&["-kc", "bob"]), vec!["--no-batch", "--check-sigs", "bob"]);
}

#[test]
fn remove_key() {
    assert_eq!(gpg_args(&["-kr", "bob"]), vec!["--no-batch", "--delete-key", "bob"]);
    assert!(matches!(
        translate(&["-kr"]),
        Err(CompileError::UserIdRequired("deleting a key"))
    ));
}

#[test]
fn remove_signature_is_unsupported() {
    assert!(matches!(
        translate(&["-krs", "bob"]),
        Err(CompileError::RemoveSignatureUnsupported)
    ));
}

#[test]
fn sign_key() {
    assert_eq!(
        gpg_args(&["-ks", "bob"]),
        vec!["--no-batch", "--edit-key", "bob", "sign", "quit"]
    );
}

#[test]
fn edit_key() {
    assert_eq!(gpg_args(&["-ke", "bob"]), vec!["--no-batch", "--edit-key", "bob"]);
    assert!(matches!(
        translate(&["-ke", "bob", "ring"]),
        Err(CompileError::KeyringArgumentUnsupported)
    ));
}

#[test]
fn revoke_key() {
    assert_eq!(gpg_args(&["-kd", "bob"]), vec!["--no-batch", "--gen-revoke", "bob"]);
}

#[test]
fn bare_key_mode_is_invalid() {
    assert!(matches!(translate(&["-k"]), Err(CompileError::InvalidKeyCommand)));
}

#[test]
fn filter_letter_unused_by_generation() {
    let err = translate(&["-kgf"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid options: -f");
}

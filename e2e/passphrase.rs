// e2e/passphrase.rs — passphrase delivery to the target program
//
// The fake `gpg` reads one line from the descriptor named by
// `--passphrase-fd` and records it, so these tests see exactly what the
// child received.

mod fake_gpg;

use std::io::Write;
use std::process::Stdio;

use fake_gpg::FakeGpg;

fn passphrase_fd(args: &[String]) -> Option<&str> {
    let pos = args.iter().position(|a| a == "--passphrase-fd")?;
    args.get(pos + 1).map(String::as_str)
}

#[test]
fn test_cli_passphrase_reaches_gpg() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .args(["-c", "-z", "open sesame", "notes.txt"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let args = gpg.args().unwrap();
    assert!(passphrase_fd(&args).is_some(), "args: {args:?}");
    assert_eq!(gpg.passphrase().as_deref(), Some("open sesame"));
}

#[test]
fn test_env_passphrase_reaches_gpg() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("PGPPASS", "from-env")
        .args(["-c", "notes.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(gpg.passphrase().as_deref(), Some("from-env"));
}

#[test]
fn test_cli_passphrase_beats_env() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .env("PGPPASS", "from-env")
        .args(["-c", "-z", "from-cli", "notes.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(gpg.passphrase().as_deref(), Some("from-cli"));
}

#[test]
fn test_first_cli_passphrase_wins() {
    let gpg = FakeGpg::new();
    let output = gpg
        .command()
        .args(["-c", "-z", "one", "-z", "two", "notes.txt"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(gpg.passphrase().as_deref(), Some("one"));
}

#[test]
fn test_passphrase_descriptor_is_forwarded() {
    let gpg = FakeGpg::new();
    let mut child = gpg
        .command()
        .env("PGPPASSFD", "0")
        .env("PGPPASS", "ignored")
        .args(["-c", "notes.txt"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"over-stdin\n").unwrap();
    }
    let status = child.wait().unwrap();

    assert!(status.success());
    let args = gpg.args().unwrap();
    assert_eq!(passphrase_fd(&args), Some("0"));
    assert_eq!(gpg.passphrase().as_deref(), Some("over-stdin"));
}

#[test]
fn test_no_passphrase_means_no_descriptor() {
    let gpg = FakeGpg::new();
    let output = gpg.command().args(["-c", "notes.txt"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(passphrase_fd(&gpg.args().unwrap()), None);
    assert_eq!(gpg.passphrase(), None);
}

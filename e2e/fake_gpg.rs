// e2e/fake_gpg.rs — a stand-in `gpg` for black-box tests of the `pgpgpg`
// binary.
//
// The script records its arguments one per line in `args.log`, copies the
// passphrase it receives over `--passphrase-fd` into `pass.log`, optionally
// copies its standard input into `stdin.log`, answers the secret key listing
// with a fixed `sec:` record, and exits with `$FAKE_GPG_EXIT`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub const DEFAULT_KEY_ID: &str = "0123456789ABCDEF";

const SCRIPT: &str = r#"#!/bin/sh
dir=$(dirname "$0")
if [ "$1" = "--with-colons" ]; then
    echo "sec:u:1024:17:0123456789ABCDEF:1999-01-01::::Alice <alice@example.org>:::"
    exit 0
fi
: > "$dir/args.log"
for a in "$@"; do
    printf '%s\n' "$a" >> "$dir/args.log"
done
prev=""
for a in "$@"; do
    if [ "$prev" = "--passphrase-fd" ]; then
        IFS= read -r pw <&"$a"
        printf '%s\n' "$pw" > "$dir/pass.log"
    fi
    prev="$a"
done
if [ -n "$FAKE_GPG_READ_STDIN" ]; then
    cat > "$dir/stdin.log"
fi
if [ -n "$FAKE_GPG_SIGNAL" ]; then
    kill -9 $$
fi
exit "${FAKE_GPG_EXIT:-0}"
"#;

/// Locate the `pgpgpg` binary produced by Cargo.
pub fn pgpgpg_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_pgpgpg") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("pgpgpg");
    p
}

/// A temporary directory holding the fake `gpg` and its logs.
pub struct FakeGpg {
    dir: TempDir,
}

impl FakeGpg {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("gpg");
        fs::write(&script, SCRIPT).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        FakeGpg { dir }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn script(&self) -> PathBuf {
        self.dir.path().join("gpg")
    }

    /// A `pgpgpg` command wired to this fake, running inside its directory
    /// with the passphrase variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(pgpgpg_bin());
        cmd.env("PGPGPG_GPG_BIN", self.script())
            .env_remove("PGPPASS")
            .env_remove("PGPPASSFD")
            .env_remove("FAKE_GPG_EXIT")
            .env_remove("FAKE_GPG_SIGNAL")
            .env_remove("FAKE_GPG_READ_STDIN")
            .current_dir(self.dir.path());
        cmd
    }

    /// Arguments the fake received, or `None` if it never ran.
    pub fn args(&self) -> Option<Vec<String>> {
        let text = fs::read_to_string(self.dir.path().join("args.log")).ok()?;
        Some(text.lines().map(str::to_owned).collect())
    }

    /// Passphrase the fake read from `--passphrase-fd`, if any.
    pub fn passphrase(&self) -> Option<String> {
        let text = fs::read_to_string(self.dir.path().join("pass.log")).ok()?;
        Some(text.trim_end_matches('\n').to_owned())
    }

    pub fn stdin_copy(&self) -> Option<String> {
        fs::read_to_string(self.dir.path().join("stdin.log")).ok()
    }

    /// Writes a data file next to the fake and returns its name.
    pub fn data_file(&self, name: &str, contents: &str) -> String {
        fs::write(self.dir.path().join(name), contents).unwrap();
        name.to_owned()
    }
}

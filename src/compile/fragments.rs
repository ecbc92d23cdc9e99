// compile/fragments.rs — option fragments emitted by more than one branch.

use nix::unistd::{access, AccessFlags};

use super::Compiler;
use crate::cli::options::Flag;
use crate::error::CompileError;

/// Name GnuPG records for data read from standard input.
const STDIN_FILENAME: &str = "stdin";

impl Compiler<'_> {
    pub(super) fn armor(&mut self) {
        if self.opts.armored() {
            self.add("--armor");
        } else {
            self.add("--no-armor");
        }
    }

    /// Emits `--textmode` for `-t` and claims `t`.
    pub(super) fn textmode(&mut self) {
        if self.has(Flag::Text) {
            self.add("--textmode");
        }
        self.claim(Flag::Text);
    }

    pub(super) fn force(&mut self) {
        match self.opts.force {
            Some(true) => self.add("--yes"),
            Some(false) => self.add("--no"),
            None => {}
        }
    }

    pub(super) fn batchmode(&mut self) {
        if self.opts.batchmode {
            self.add("--batch");
            self.add("--always-trust");
            self.force();
        } else {
            self.add("--no-batch");
        }
    }

    pub(super) fn comment(&mut self) {
        if let Some(comment) = self.opts.comment.clone() {
            self.add_pair("--comment", &comment);
        }
    }

    pub(super) fn compress(&mut self) {
        match self.opts.compress {
            Some(false) => self.add_pair("-z", "0"),
            Some(true) => self.add_pair("-z", "6"),
            None => {}
        }
    }

    pub(super) fn charset(&mut self) {
        if let Some(charset) = self.opts.charset.clone() {
            self.add_pair("--charset", &charset);
        }
    }

    /// Web-of-trust tuning: completes, marginals, certification depth.
    pub(super) fn trust(&mut self) {
        if let Some(v) = self.opts.completes_needed.clone() {
            self.add_pair("--completes-needed", &v);
        }
        if let Some(v) = self.opts.marginals_needed.clone() {
            // Spelled as GnuPG expects it, not `--marinals-needed`.
            self.add_pair("--marginals-needed", &v);
        }
        if let Some(v) = self.opts.cert_depth.clone() {
            self.add_pair("--max-cert-depth", &v);
        }
    }

    pub(super) fn local_user(&mut self) {
        if let Some(user) = self.opts.local_user.clone() {
            self.add_pair("--local-user", &user);
        }
    }

    pub(super) fn keyrings(&mut self) {
        if let Some(pubring) = self.opts.pubring.clone() {
            self.add("--no-default-keyring");
            self.add_pair("--keyring", &pubring);
        }
        if let Some(secring) = self.opts.secring.clone() {
            self.add_pair("--secret-keyring", &secring);
        }
    }

    pub(super) fn passphrase_fd(&mut self) {
        if let Some(fd) = self.opts.passphrase_fd {
            self.add_pair("--passphrase-fd", &fd.to_string());
        }
    }

    /// Explicit `-o` only.
    pub(super) fn explicit_output(&mut self) {
        if let Some(output) = self.opts.output.clone() {
            self.add_pair("--output", &output);
        }
    }

    /// `--decrypt` when filtering; claims `f`.
    pub(super) fn decrypt_filter(&mut self) {
        if self.has(Flag::Filter) {
            self.claim(Flag::Filter);
            self.add("--decrypt");
        }
    }

    /// Output naming for the encrypting and storing branches.
    ///
    /// Filters record `stdin` as the original file name.  Without `-o` and
    /// without `-f` the output file is derived from the first file name, or
    /// is `stdin.asc` / `stdin.pgp` when standard input is the data.
    pub(super) fn output(&mut self) {
        let filter = self.has(Flag::Filter);
        let implicit = self.opts.implicit_filter();

        if filter || implicit {
            self.add_pair("--set-filename", STDIN_FILENAME);
        }

        if let Some(output) = self.opts.output.clone() {
            self.add_pair("--output", &output);
            return;
        }
        if filter {
            return;
        }

        let armored = self.opts.armored();
        if implicit {
            let name = if armored { "stdin.asc" } else { "stdin.pgp" };
            self.add_pair("--output", name);
        } else if let Some(first) = self.arg(0) {
            let ext = if armored {
                ".asc"
            } else if self.has(Flag::Sign) && self.has(Flag::Detached) {
                ".sig"
            } else {
                ".pgp"
            };
            self.add_pair("--output", &format!("{first}{ext}"));
        }
    }

    /// Input file for the encrypting and storing branches; claims `f`.
    pub(super) fn input(&mut self) -> Result<(), CompileError> {
        let filter = self.has(Flag::Filter);
        self.claim(Flag::Filter);

        if filter || self.opts.implicit_filter() {
            return Ok(());
        }
        let first = self.arg(0).ok_or(CompileError::FilenameRequired)?;
        self.add(&first);
        Ok(())
    }
}

/// Returns `true` when `path` names a readable file.
pub(super) fn is_readable(path: &str) -> bool {
    access(path, AccessFlags::R_OK).is_ok()
}

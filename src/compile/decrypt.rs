// compile/decrypt.rs — armored store, decryption and signature verification.
//
// Legacy PGP has no explicit "verify" command: a file name alone means
// "decrypt or check this", so the branch guesses from the arguments, the
// extension and the armor header which GnuPG command is wanted.

use super::fragments::is_readable;
use super::Compiler;
use crate::armor::{guess_armor_type, ArmorType};
use crate::cli::arg_utils::split_extension;
use crate::cli::options::Flag;
use crate::error::CompileError;

impl Compiler<'_> {
    /// `-a` without a crypto command: wrap the input in ASCII armor.
    pub(super) fn store(&mut self) -> Result<(), CompileError> {
        self.comment();
        self.compress();
        self.charset();
        self.output();
        self.add("--armor");
        self.add("--store");
        self.input()
    }

    pub(super) fn decrypt_or_verify(&mut self) -> Result<(), CompileError> {
        self.claim(Flag::Decrypt);
        self.claim(Flag::Preserve);

        self.trust();
        self.keyrings();

        match self.arg_count() {
            0 => {
                self.passphrase_fd();
                self.explicit_output();
                if self.has(Flag::Filter) {
                    self.decrypt_filter();
                } else if self.opts.stdin_is_terminal {
                    return Err(CompileError::DecryptFilenameRequired);
                }
                Ok(())
            }
            1 => self.decrypt_one(),
            _ => {
                let (sig, data) = (self.arg(0), self.arg(1));
                if let (Some(sig), Some(data)) = (sig, data) {
                    self.verify(&sig, &data);
                }
                Ok(())
            }
        }
    }

    /// A single file name: detached signature or encrypted/signed data.
    fn decrypt_one(&mut self) -> Result<(), CompileError> {
        let Some(file) = self.arg(0) else {
            return Err(CompileError::DecryptFilenameRequired);
        };
        let (base, ext) = split_extension(&file);

        match ext {
            // The data file is assumed to exist next to the signature.
            Some(ext) if ext.eq_ignore_ascii_case("sig") => self.verify(&file, base),
            Some(ext) if ext.eq_ignore_ascii_case("asc") => match guess_armor_type(&file) {
                ArmorType::Signature => self.verify(&file, base),
                ArmorType::SignedMessage => self.decrypt_file(&file),
                _ if is_readable(base) => self.verify(&file, base),
                _ => self.decrypt_file(&file),
            },
            _ => {
                self.decrypt_file(&file);
                // Keep a renamed detached signature from blocking on stdin.
                self.null_stdin = true;
            }
        }
        Ok(())
    }

    fn verify(&mut self, signature: &str, data: &str) {
        self.add("--verify");
        self.add(signature);
        self.add(data);
    }

    fn decrypt_file(&mut self, file: &str) {
        self.explicit_output();
        self.decrypt_filter();
        self.add(file);
    }
}

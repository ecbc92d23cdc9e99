// compile/keys.rs — key management commands (`-k` and its sub-letters).

use super::Compiler;
use crate::cli::options::Flag;
use crate::displaylevel;
use crate::error::CompileError;

impl Compiler<'_> {
    pub(super) fn key_management(&mut self) -> Result<(), CompileError> {
        self.opts.flags.take_one(Flag::Key);

        self.batchmode();
        self.force();
        self.trust();

        if self.count(Flag::Generate) == 1 {
            self.add("--gen-key");
            self.claim(Flag::Generate);
            if let Some(bits) = self.arg(0) {
                displaylevel!(2, "Info: The optional keybits argument '{}' is not used.\n", bits);
            }
            Ok(())
        } else if self.count(Flag::Export) == 0 && self.count(Flag::Armor) == 1 {
            self.import_key()
        } else if self.count(Flag::Export) == 1 {
            self.export_key()
        } else if self.has(Flag::View) {
            if self.count(Flag::View) >= 2 {
                self.add("--verbose");
            }
            if self.has(Flag::Check) {
                self.claim(Flag::Check);
                self.add("--fingerprint");
            } else {
                self.add("--list-keys");
            }
            self.optional_user_id()
        } else if self.has(Flag::Check) {
            self.claim(Flag::Check);
            self.add("--check-sigs");
            self.optional_user_id()
        } else if self.count(Flag::Remove) == 1 && self.count(Flag::Sign) == 0 {
            self.claim(Flag::Remove);
            self.add("--delete-key");
            let uid = self.single_user_id("deleting a key")?;
            self.add(&uid);
            Ok(())
        } else if self.count(Flag::Remove) == 1 && self.count(Flag::Sign) == 1 {
            self.claim(Flag::Remove);
            self.claim(Flag::Sign);
            Err(CompileError::RemoveSignatureUnsupported)
        } else if self.count(Flag::Remove) == 0 && self.count(Flag::Sign) == 1 {
            self.claim(Flag::Sign);
            self.add("--edit-key");
            let uid = self.single_user_id("signing a key")?;
            self.add(&uid);
            self.add("sign");
            self.add("quit");
            Ok(())
        } else if self.has(Flag::Encrypt) {
            self.claim(Flag::Encrypt);
            self.add("--edit-key");
            let uid = self.single_user_id("editing a key")?;
            self.add(&uid);
            Ok(())
        } else if self.has(Flag::Decrypt) {
            self.claim(Flag::Decrypt);
            self.add("--gen-revoke");
            let uid = self.single_user_id("generating a key revocation certificate")?;
            self.add(&uid);
            Ok(())
        } else {
            Err(CompileError::InvalidKeyCommand)
        }
    }

    fn import_key(&mut self) -> Result<(), CompileError> {
        self.add("--import");
        self.claim(Flag::Armor);

        // `-kaf` reads the key from standard input and ignores any arguments.
        if self.has(Flag::Filter) {
            self.claim(Flag::Filter);
            return Ok(());
        }
        match self.arg_count() {
            0 => Err(CompileError::KeyfileRequired),
            1 => {
                let file = self.arg(0).ok_or(CompileError::KeyfileRequired)?;
                self.add(&file);
                Ok(())
            }
            _ => Err(CompileError::KeyringArgumentUnsupported),
        }
    }

    fn export_key(&mut self) -> Result<(), CompileError> {
        self.armor();
        self.add("--export");
        self.claim(Flag::Export);

        let uid = self
            .arg(0)
            .ok_or(CompileError::UserIdRequired("exporting a key"))?;

        if self.has(Flag::Filter) {
            self.claim(Flag::Filter);
            if self.arg_count() != 1 {
                return Err(CompileError::KeyringArgumentUnsupported);
            }
            self.add(&uid);
            return Ok(());
        }

        let file = self.arg(1).ok_or(CompileError::ExportFileRequired)?;
        if self.arg_count() > 2 {
            return Err(CompileError::KeyringArgumentUnsupported);
        }
        self.add_pair("--output", &file);
        self.add(&uid);
        Ok(())
    }

    /// Appends the user id if one was given; a second argument is a keyring.
    fn optional_user_id(&mut self) -> Result<(), CompileError> {
        match self.arg_count() {
            0 => Ok(()),
            1 => {
                if let Some(uid) = self.arg(0) {
                    self.add(&uid);
                }
                Ok(())
            }
            _ => Err(CompileError::KeyringArgumentUnsupported),
        }
    }

    /// The one user id a key command operates on.
    fn single_user_id(&self, purpose: &'static str) -> Result<String, CompileError> {
        match self.arg_count() {
            0 => Err(CompileError::UserIdRequired(purpose)),
            1 => self.arg(0).ok_or(CompileError::UserIdRequired(purpose)),
            _ => Err(CompileError::KeyringArgumentUnsupported),
        }
    }
}

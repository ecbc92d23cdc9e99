// compile/crypt.rs — encryption, signing and conventional encryption.

use super::Compiler;
use crate::cli::options::Flag;
use crate::error::CompileError;

impl Compiler<'_> {
    pub(super) fn encrypt_or_sign(&mut self) -> Result<(), CompileError> {
        // Clearsigning depends on text mode, which the fragment claims.
        let text_mode = self.has(Flag::Text);

        self.textmode();
        self.armor();
        self.batchmode();
        self.force();
        self.comment();
        self.compress();
        self.charset();
        self.passphrase_fd();
        self.keyrings();

        let (c, e, s) = (
            self.count(Flag::Check),
            self.count(Flag::Encrypt),
            self.count(Flag::Sign),
        );

        match (c, e, s) {
            (1, 0, 0) => self.symmetric(),
            (0, 1, _) => self.encrypt(),
            (0, 0, 1) => self.sign(text_mode),
            _ => Err(CompileError::UnknownCombination),
        }
    }

    fn symmetric(&mut self) -> Result<(), CompileError> {
        self.claim(Flag::Check);
        self.output();
        self.add("--symmetric");
        self.input()
    }

    /// Public-key encryption, optionally signed.  The first file name is the
    /// data unless filtering, in which case every argument is a recipient.
    fn encrypt(&mut self) -> Result<(), CompileError> {
        self.claim(Flag::Encrypt);
        self.trust();
        self.output();

        let first_recipient = usize::from(!self.has(Flag::Filter) && self.arg_count() != 0);
        let recipients: Vec<String> = self.opts.args[first_recipient..].to_vec();
        for recipient in &recipients {
            self.add_pair("--recipient", recipient);
        }

        if self.opts.encrypt_to_self {
            let own = match self.opts.local_user.clone() {
                Some(user) => user,
                None => self
                    .keys
                    .default_key()
                    .map_err(CompileError::DefaultKey)?,
            };
            self.add_pair("--encrypt-to", &own);
        }

        if self.has(Flag::Sign) {
            self.claim(Flag::Sign);
            self.local_user();
            self.add("--sign");
        }

        self.add("--encrypt");
        self.input()
    }

    fn sign(&mut self, text_mode: bool) -> Result<(), CompileError> {
        self.local_user();
        // The output name depends on `s`, so it is claimed afterwards.
        self.output();
        self.claim(Flag::Sign);

        let detached = self.count(Flag::Detached);
        if self.opts.clearsign && self.opts.armored() && text_mode && detached == 0 {
            self.add("--escape-from");
            self.add("--clearsign");
        } else if detached == 1 {
            self.claim(Flag::Detached);
            self.add("--detach-sign");
        } else {
            self.add("--sign");
        }
        self.input()
    }
}

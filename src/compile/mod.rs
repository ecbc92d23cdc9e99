//! Translation of a parsed legacy invocation into a GnuPG command line.
//!
//! [`compile`] never modifies the caller's [`OptionState`]: it works on a
//! private copy whose flag counters are *claimed* (zeroed) as each branch
//! interprets them.  Any checked flag still set at the end means the legacy
//! invocation combined options that have no translation, and compilation
//! fails instead of silently dropping them.
//!
//! The only side effects are reads: the armor guesser and a readability
//! probe for detached-signature data files, plus the default-key lookup
//! behind [`KeyResolver`] when `+encrypttoself` needs it.
//!
//! | Submodule     | Branch |
//! |---------------|--------|
//! | [`fragments`] | Option fragments shared by several branches. |
//! | [`keys`]      | Key management (`-k…`). |
//! | [`decrypt`]   | Armored store, decryption and signature verification. |
//! | [`crypt`]     | Encryption, signing and conventional encryption. |

mod crypt;
mod decrypt;
mod fragments;
mod keys;

use crate::cli::argv::ArgvBuilder;
use crate::cli::options::{Flag, OptionState};
use crate::defaultkey::KeyResolver;
use crate::error::CompileError;

/// A translated command ready to be launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Target program path followed by its arguments.
    pub argv: ArgvBuilder,
    /// The child's standard input must be the null device.
    pub null_stdin: bool,
}

/// Compiles `opts` into a command line for `program`.
pub fn compile(
    opts: &OptionState,
    program: &str,
    keys: &dyn KeyResolver,
) -> Result<Invocation, CompileError> {
    let mut compiler = Compiler::new(opts, program, keys);
    compiler.dispatch()?;
    compiler.finish()
}

/// Working state of one compilation.
struct Compiler<'a> {
    opts: OptionState,
    argv: ArgvBuilder,
    keys: &'a dyn KeyResolver,
    null_stdin: bool,
}

impl<'a> Compiler<'a> {
    fn new(opts: &OptionState, program: &str, keys: &'a dyn KeyResolver) -> Self {
        Compiler {
            opts: opts.clone(),
            argv: ArgvBuilder::new(program),
            keys,
            null_stdin: false,
        }
    }

    fn dispatch(&mut self) -> Result<(), CompileError> {
        if self.opts.has(Flag::Key) {
            self.key_management()
        } else if !self.opts.has(Flag::Sign)
            && !self.opts.has(Flag::Encrypt)
            && !self.opts.has(Flag::Check)
        {
            self.batchmode();
            if self.opts.armored() {
                self.store()
            } else {
                self.decrypt_or_verify()
            }
        } else {
            self.encrypt_or_sign()
        }
    }

    fn finish(self) -> Result<Invocation, CompileError> {
        let unclaimed = self.opts.flags.unclaimed();
        if !unclaimed.is_empty() {
            let letters = unclaimed.iter().map(|f| f.letter()).collect();
            return Err(CompileError::UnclaimedOptions(letters));
        }
        Ok(Invocation {
            argv: self.argv,
            null_stdin: self.null_stdin,
        })
    }

    // ── Small helpers shared by the branches ────────────────────────────────

    #[inline]
    fn add(&mut self, token: &str) {
        self.argv.add(token);
    }

    #[inline]
    fn add_pair(&mut self, flag: &str, value: &str) {
        self.argv.add_pair(flag, value);
    }

    #[inline]
    fn count(&self, flag: Flag) -> u32 {
        self.opts.count(flag)
    }

    #[inline]
    fn has(&self, flag: Flag) -> bool {
        self.opts.has(flag)
    }

    #[inline]
    fn claim(&mut self, flag: Flag) {
        self.opts.flags.claim(flag);
    }

    fn arg(&self, index: usize) -> Option<String> {
        self.opts.args.get(index).cloned()
    }

    fn arg_count(&self) -> usize {
        self.opts.args.len()
    }
}

//! Default signing key lookup.
//!
//! GnuPG's default key is the first secret key it lists.  The lookup runs
//! the target program in machine-readable listing mode and picks the key id
//! out of the first `sec:` record.

use std::io::{self, BufRead, BufReader};
use std::process::{Command, Stdio};

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use thiserror::Error;

use crate::cli::arg_utils::join_command_line;
use crate::cli::argv::ArgvBuilder;
use crate::config::{self, SECRET_KEY_RECORD};
use crate::debugoutput;

/// Why the default key could not be determined.
#[derive(Debug, Error)]
pub enum KeyLookupError {
    #[error("can't execute `{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("can't read the secret key listing: {0}")]
    Read(#[source] io::Error),

    #[error("no secret key found")]
    NoSecretKey,

    #[error("Wrong keylist format.")]
    Malformed,
}

/// Source of the key id used by `+encrypttoself`.
pub trait KeyResolver {
    fn default_key(&self) -> Result<String, KeyLookupError>;
}

/// Asks a GnuPG binary for its first secret key.
#[derive(Debug, Clone)]
pub struct GpgKeyResolver {
    program: String,
}

impl GpgKeyResolver {
    pub fn new(program: impl Into<String>) -> Self {
        GpgKeyResolver {
            program: program.into(),
        }
    }

    /// Resolver for the configured target program.
    pub fn from_env() -> Self {
        Self::new(config::gpg_path())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Listing command: program path followed by the listing options.
    pub fn listing_argv(&self) -> ArgvBuilder {
        let mut argv = ArgvBuilder::new(&self.program);
        for opt in [
            "--with-colons",
            "--batch",
            "--quiet",
            "--no-verbose",
            "--list-secret-keys",
        ] {
            argv.add(opt);
        }
        argv
    }
}

impl KeyResolver for GpgKeyResolver {
    fn default_key(&self) -> Result<String, KeyLookupError> {
        let argv = self.listing_argv();
        debugoutput!("default key: {}\n", join_command_line(&argv.to_vec()));

        let mut child = Command::new(&self.program)
            .args(argv.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| KeyLookupError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let result = match child.stdout.take() {
            Some(stdout) => parse_default_key(BufReader::new(stdout)),
            None => Err(KeyLookupError::NoSecretKey),
        };

        // The listing is not needed past the first record.
        if let Ok(pid) = i32::try_from(child.id()) {
            let _ = kill(Pid::from_raw(pid), Signal::SIGINT);
        }
        let _ = child.wait();

        result
    }
}

/// Extracts `0x<keyid>` from the first `sec:` record of a `--with-colons`
/// listing.  Other records are skipped.  The key id is the fifth field and
/// must be followed by another colon.
pub fn parse_default_key<R: BufRead>(mut reader: R) -> Result<String, KeyLookupError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(KeyLookupError::Read)? == 0 {
            return Err(KeyLookupError::NoSecretKey);
        }
        if line.starts_with(SECRET_KEY_RECORD.as_bytes()) {
            break;
        }
    }

    let mut fields = line.split(|&b| b == b':');
    let key_id = fields.nth(4).ok_or(KeyLookupError::Malformed)?;
    // A sixth field exists only if the key id was terminated by a colon.
    if fields.next().is_none() {
        return Err(KeyLookupError::Malformed);
    }
    Ok(format!("0x{}", String::from_utf8_lossy(key_id)))
}

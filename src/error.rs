//! Error taxonomy of the translation engine.
//!
//! Parse and compile errors are user-facing and always abort before any
//! process is spawned.  Resource and subprocess failures are carried as
//! `anyhow::Error` by the launcher, where they only need context.

use thiserror::Error;

use crate::defaultkey::KeyLookupError;
use crate::status;

/// Malformed legacy command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid option: -{0}")]
    InvalidOption(char),

    #[error("Option -{0} requires an argument.")]
    MissingValue(char),

    #[error("Malformed option format: `:' is not an option letter.")]
    MalformedFormat,

    #[error("BUG: Option `-{0}' not supported.")]
    UnsupportedOption(char),

    #[error("Help not supported.")]
    HelpUnsupported,

    #[error("Unknown long option `{0}'")]
    UnknownLongOption(String),

    #[error("Sorry, but long option `{0}' is not supported.")]
    UnsupportedLongOption(&'static str),

    #[error("Invalid boolean value `{value}' for long option `{keyword}'.")]
    InvalidBoolean { keyword: String, value: String },

    #[error("Long option `{0}' requires an argument.")]
    MissingLongValue(&'static str),

    #[error("Charset `{0}' not supported.")]
    UnsupportedCharset(String),

    #[error("Unterminated long option value string: '{0}'")]
    UnterminatedValue(String),

    /// Shown lossily; the raw bytes cannot be forwarded as text.
    #[error("Argument `{0}' is not valid UTF-8.")]
    NonUnicodeArgument(String),
}

impl ParseError {
    /// Usage complaints legacy PGP prints on standard output rather than
    /// standard error.
    pub fn is_usage_message(&self) -> bool {
        matches!(self, ParseError::InvalidOption(_) | ParseError::HelpUnsupported)
    }
}

/// Option combination the translator cannot express as one target command.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Filename required.")]
    FilenameRequired,

    #[error("Filename for decryption needed.")]
    DecryptFilenameRequired,

    #[error("Keyfile required.")]
    KeyfileRequired,

    #[error("User-ID required for {0}.")]
    UserIdRequired(&'static str),

    #[error("File to store exported key required.")]
    ExportFileRequired,

    #[error("BUG: Keyring argument not supported.")]
    KeyringArgumentUnsupported,

    #[error("BUG: GnuPG doesn't support removing a key signature.")]
    RemoveSignatureUnsupported,

    #[error("Invalid key command option")]
    InvalidKeyCommand,

    #[error("Unknown command option combination.")]
    UnknownCombination,

    #[error("Can't get default key user id.")]
    DefaultKey(#[source] KeyLookupError),

    /// Letters accepted by the scanner that no compiler branch interpreted.
    #[error("Invalid options: -{0}")]
    UnclaimedOptions(String),
}

/// Any failure of the parse → compile pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl Error {
    /// Legacy exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) => status::PGPERR_UNKNOWN,
            Error::Compile(_) => status::PGPERR_COMPILE,
        }
    }
}

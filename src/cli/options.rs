//! Legacy PGP 2.6 command-line parsing.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return an [`OptionState`] describing every flag, value and file name
//! of the invocation.
//!
//! Short flags are bundled (`-seat`).  The set of letters accepted at any
//! point depends on the mode letters already seen: `k` switches to the key
//! management set, `e`/`s`/`c` to the encryption sets and `d`/`p` to the
//! decryption set.  A positional token that starts with `+` is a long option
//! handled by [`crate::cli::long_opts`].

use std::ffi::OsString;

use crate::cli::constants::LONG_OPTION_MARK;
use crate::cli::getopt::{Scan, Scanner};
use crate::cli::long_opts::apply_long_option;
use crate::error::ParseError;

// ── Option formats ────────────────────────────────────────────────────────────

pub const FORMAT_INITIAL: &str = "hkesabcdpo:@:z:u:fwmt";
pub const FORMAT_KEY: &str = "gafxcresdvu:";
pub const FORMAT_ENCRYPT: &str = "astfo:@:z:u:wm";
pub const FORMAT_SIGN: &str = "aetfbo:z:u:wm";
pub const FORMAT_SIGN_ENCRYPT: &str = "atfo:@:z:u:wm";
pub const FORMAT_SYMMETRIC: &str = "atfo:z:u:wm";
pub const FORMAT_DECRYPT: &str = "pdfo:@:z:";

// ── Mode letters ──────────────────────────────────────────────────────────────

/// A legacy single-letter mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Key,
    Generate,
    Armor,
    Export,
    View,
    Check,
    Remove,
    Encrypt,
    Sign,
    Decrypt,
    Detached,
    Preserve,
    Filter,
    Wipe,
    More,
    Text,
}

impl Flag {
    pub const ALL: [Flag; 16] = [
        Flag::Key,
        Flag::Generate,
        Flag::Armor,
        Flag::Export,
        Flag::View,
        Flag::Check,
        Flag::Remove,
        Flag::Encrypt,
        Flag::Sign,
        Flag::Decrypt,
        Flag::Detached,
        Flag::Preserve,
        Flag::Filter,
        Flag::Wipe,
        Flag::More,
        Flag::Text,
    ];

    /// Flags that must all be claimed by a successful compilation.
    /// `a`, `v`, `w` and `m` are informational.
    pub const CHECKED: [Flag; 12] = [
        Flag::Key,
        Flag::Generate,
        Flag::Export,
        Flag::Check,
        Flag::Remove,
        Flag::Encrypt,
        Flag::Sign,
        Flag::Decrypt,
        Flag::Detached,
        Flag::Preserve,
        Flag::Filter,
        Flag::Text,
    ];

    pub fn letter(self) -> char {
        match self {
            Flag::Key => 'k',
            Flag::Generate => 'g',
            Flag::Armor => 'a',
            Flag::Export => 'x',
            Flag::View => 'v',
            Flag::Check => 'c',
            Flag::Remove => 'r',
            Flag::Encrypt => 'e',
            Flag::Sign => 's',
            Flag::Decrypt => 'd',
            Flag::Detached => 'b',
            Flag::Preserve => 'p',
            Flag::Filter => 'f',
            Flag::Wipe => 'w',
            Flag::More => 'm',
            Flag::Text => 't',
        }
    }

    pub fn from_letter(letter: char) -> Option<Flag> {
        Flag::ALL.into_iter().find(|f| f.letter() == letter)
    }
}

/// Occurrence counters for every [`Flag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagCounts([u32; 16]);

impl FlagCounts {
    pub fn count(&self, flag: Flag) -> u32 {
        self.0[flag as usize]
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.count(flag) != 0
    }

    pub fn bump(&mut self, flag: Flag) {
        let slot = &mut self.0[flag as usize];
        *slot = slot.saturating_add(1);
    }

    /// Consumes a single occurrence (used for `k`, which may be repeated).
    pub fn take_one(&mut self, flag: Flag) {
        let slot = &mut self.0[flag as usize];
        *slot = slot.saturating_sub(1);
    }

    /// Marks `flag` as interpreted.
    pub fn claim(&mut self, flag: Flag) {
        self.0[flag as usize] = 0;
    }

    /// Checked flags that are still set, in canonical order.
    pub fn unclaimed(&self) -> Vec<Flag> {
        Flag::CHECKED
            .into_iter()
            .filter(|&f| self.is_set(f))
            .collect()
    }
}

// ── Option state ──────────────────────────────────────────────────────────────

/// Everything a legacy invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionState {
    pub flags: FlagCounts,
    /// `-z`; the first occurrence wins.
    pub passphrase: Option<String>,
    /// `-o`.
    pub output: Option<String>,
    /// `-u` or `+myname`.
    pub local_user: Option<String>,
    /// GnuPG charset name, already mapped from the legacy name.
    pub charset: Option<String>,
    pub comment: Option<String>,
    pub pubring: Option<String>,
    pub secring: Option<String>,
    pub completes_needed: Option<String>,
    pub marginals_needed: Option<String>,
    pub cert_depth: Option<String>,
    pub batchmode: bool,
    pub force: Option<bool>,
    pub compress: Option<bool>,
    pub armor: bool,
    /// `+textmode`; accepted, but only `-t` selects text mode.
    pub textmode: bool,
    pub clearsign: bool,
    pub encrypt_to_self: bool,
    /// `+verbose`; unset keeps the default display level.
    pub verbose: Option<i32>,
    /// File names and user ids, in command-line order.
    pub args: Vec<String>,
    pub stdin_is_terminal: bool,
    /// Descriptor GnuPG should read the passphrase from.
    pub passphrase_fd: Option<i32>,
}

impl Default for OptionState {
    fn default() -> Self {
        OptionState {
            flags: FlagCounts::default(),
            passphrase: None,
            output: None,
            local_user: None,
            charset: None,
            comment: None,
            pubring: None,
            secring: None,
            completes_needed: None,
            marginals_needed: None,
            cert_depth: None,
            batchmode: false,
            force: None,
            compress: None,
            armor: false,
            textmode: false,
            clearsign: true,
            encrypt_to_self: false,
            verbose: None,
            args: Vec::new(),
            stdin_is_terminal: false,
            passphrase_fd: None,
        }
    }
}

impl OptionState {
    #[inline]
    pub fn count(&self, flag: Flag) -> u32 {
        self.flags.count(flag)
    }

    #[inline]
    pub fn has(&self, flag: Flag) -> bool {
        self.flags.is_set(flag)
    }

    /// Armored output requested by `-a` or `+armor`.
    pub fn armored(&self) -> bool {
        self.has(Flag::Armor) || self.armor
    }

    /// Standard input is data: not a terminal and no file names given.
    pub fn implicit_filter(&self) -> bool {
        !self.stdin_is_terminal && self.args.is_empty()
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse the process arguments (program name skipped).
pub fn parse_args() -> Result<OptionState, ParseError> {
    let argv = args_to_strings(std::env::args_os().skip(1))?;
    parse_args_from(&argv)
}

/// Converts raw process arguments to text, rejecting any that are not UTF-8.
pub fn args_to_strings<I>(args: I) -> Result<Vec<String>, ParseError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| ParseError::NonUnicodeArgument(raw.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Parse an explicit argument list (program name excluded).
pub fn parse_args_from(args: &[String]) -> Result<OptionState, ParseError> {
    let mut opts = OptionState::default();
    let mut scanner = Scanner::new(args);
    let mut format = FORMAT_INITIAL;

    loop {
        match scanner.next(format) {
            Scan::End => break,
            Scan::Positional(token) => match token.strip_prefix(LONG_OPTION_MARK) {
                Some(long) => apply_long_option(&mut opts, long)?,
                None => opts.args.push(token.to_owned()),
            },
            Scan::Flag(letter) => {
                format = switch_format(&mut opts, letter, format)?;
            }
            Scan::FlagWithValue(letter, value) => match letter {
                'z' => {
                    if opts.passphrase.is_none() {
                        opts.passphrase = Some(value.to_owned());
                    }
                }
                'o' => opts.output = Some(value.to_owned()),
                'u' => opts.local_user = Some(value.to_owned()),
                '@' => return Err(ParseError::UnsupportedOption('@')),
                other => return Err(ParseError::InvalidOption(other)),
            },
            Scan::Unknown(letter) => return Err(ParseError::InvalidOption(letter)),
            Scan::MissingValue(letter) => return Err(ParseError::MissingValue(letter)),
            Scan::MalformedFormat => return Err(ParseError::MalformedFormat),
        }
    }

    Ok(opts)
}

/// Counts a value-less flag and returns the format for the next letter.
fn switch_format(
    opts: &mut OptionState,
    letter: char,
    current: &'static str,
) -> Result<&'static str, ParseError> {
    if letter == 'h' {
        return Err(ParseError::HelpUnsupported);
    }
    let flag = Flag::from_letter(letter).ok_or(ParseError::InvalidOption(letter))?;
    let key_mode = opts.has(Flag::Key);
    opts.flags.bump(flag);

    let next = match flag {
        Flag::Key => FORMAT_KEY,
        Flag::Sign if !key_mode => {
            if opts.has(Flag::Encrypt) {
                FORMAT_SIGN_ENCRYPT
            } else {
                FORMAT_SIGN
            }
        }
        Flag::Encrypt if !key_mode => {
            if opts.has(Flag::Sign) {
                FORMAT_SIGN_ENCRYPT
            } else {
                FORMAT_ENCRYPT
            }
        }
        Flag::Check if !key_mode => FORMAT_SYMMETRIC,
        Flag::Decrypt | Flag::Preserve => FORMAT_DECRYPT,
        _ => current,
    };
    Ok(next)
}

//! Single-pass scanner for legacy single-letter flags.
//!
//! The scanner behaves like a classic `getopt(3)` with two differences that
//! legacy PGP scripts depend on:
//!
//! * tokens that do not start with `-` are returned in place as
//!   [`Scan::Positional`] instead of being permuted to the end, and
//! * the format string is passed on **every** call, so the caller can switch
//!   the set of valid letters in the middle of a bundle (`-kv` parses `v`
//!   against the key-management format because `k` switched it).
//!
//! A format string lists the valid letters; a letter followed by `:` takes a
//! value, either the rest of the bundle (`-z5`) or the next token (`-z 5`).
//! All cursor state lives in [`Scanner`], so independent scanners never
//! interfere with each other.

/// Marker that follows a letter taking a value in a format string.
pub const VALUE_MARKER: char = ':';

/// One scanner outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<'a> {
    /// A recognised letter without a value.
    Flag(char),
    /// A recognised letter together with its value.
    FlagWithValue(char, &'a str),
    /// A token that does not start with `-`.
    Positional(&'a str),
    /// A letter missing from the format string (a bare `-` reports `'-'`).
    Unknown(char),
    /// A letter that requires a value appeared as the last token.
    MissingValue(char),
    /// The value marker itself appeared where a letter was expected.
    MalformedFormat,
    /// Every token has been consumed.
    End,
}

/// Cursor over a legacy argument list (program name excluded).
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    args: &'a [String],
    /// Index of the token being scanned.
    index: usize,
    /// Byte offset of the next letter inside a bundled group, or `None` when
    /// the next call starts a fresh token.
    offset: Option<usize>,
    /// Value resolved by the last successful call, if any.
    value: Option<&'a str>,
    /// Letter that caused the last `Unknown` / `MissingValue` outcome.
    failed: Option<char>,
}

impl<'a> Scanner<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Scanner {
            args,
            index: 0,
            offset: None,
            value: None,
            failed: None,
        }
    }

    /// Index of the token the next call will look at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value (or positional token) produced by the last call.
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Offending letter of the last failed call.
    pub fn failed_option(&self) -> Option<char> {
        self.failed
    }

    /// Scans the next flag, value or positional token against `format`.
    pub fn next(&mut self, format: &str) -> Scan<'a> {
        self.value = None;

        if self.index >= self.args.len() {
            return Scan::End;
        }

        let token: &'a str = self.args[self.index].as_str();

        let offset = match self.offset {
            Some(offset) => offset,
            None => {
                if !token.starts_with('-') {
                    self.index += 1;
                    self.value = Some(token);
                    return Scan::Positional(token);
                }
                1
            }
        };

        let Some(letter) = token[offset..].chars().next() else {
            // A bare "-": nothing follows the flag marker.
            self.offset = None;
            self.index += 1;
            self.failed = Some('-');
            return Scan::Unknown('-');
        };
        let after = offset + letter.len_utf8();

        if letter == VALUE_MARKER {
            self.failed = Some(VALUE_MARKER);
            self.advance_within(token, after);
            return Scan::MalformedFormat;
        }

        let Some(pos) = format.find(letter) else {
            self.failed = Some(letter);
            self.advance_within(token, after);
            return Scan::Unknown(letter);
        };

        let takes_value = format[pos + letter.len_utf8()..].starts_with(VALUE_MARKER);
        if !takes_value {
            self.advance_within(token, after);
            return Scan::Flag(letter);
        }

        // Letter with a value: the rest of the bundle, or the next token.
        self.offset = None;
        if after < token.len() {
            self.index += 1;
            let value = &token[after..];
            self.value = Some(value);
            return Scan::FlagWithValue(letter, value);
        }

        self.index += 1;
        if self.index >= self.args.len() {
            self.failed = Some(letter);
            return Scan::MissingValue(letter);
        }
        let value: &'a str = self.args[self.index].as_str();
        self.index += 1;
        self.value = Some(value);
        Scan::FlagWithValue(letter, value)
    }

    /// Moves to `after` inside `token`, or to the next token at its end.
    fn advance_within(&mut self, token: &str, after: usize) {
        if after < token.len() {
            self.offset = Some(after);
        } else {
            self.offset = None;
            self.index += 1;
        }
    }
}

//! Legacy `+keyword[=value]` long options.
//!
//! PGP 2.6 accepts configuration-file keywords on the command line, prefixed
//! with `+`.  Keywords may be abbreviated down to a per-keyword floor and are
//! matched case-insensitively against [`LONG_OPTIONS`] in table order, so the
//! first entry that the input abbreviates wins.

use crate::cli::arg_utils::{abbreviates, atoi, trim_blanks, trim_blanks_start};
use crate::cli::options::OptionState;
use crate::displaylevel;
use crate::error::ParseError;

/// Boolean settings a long option can switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolSetting {
    Armor,
    Batchmode,
    Clearsign,
    Compress,
    EncryptToSelf,
    Force,
    Textmode,
}

/// String settings a long option can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrSetting {
    CertDepth,
    Comment,
    CompletesNeeded,
    MarginalsNeeded,
    LocalUser,
    Pubring,
    Secring,
}

/// What a recognised keyword does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Bool(BoolSetting),
    Str(StrSetting),
    /// Integer verbosity level; a value is required.
    Verbose,
    /// Character set translation, restricted to a few names.
    Charset,
    /// Accepted with a warning, no effect on the translated command.
    Ignore,
    /// Recognised but impossible to translate.
    Reject,
}

/// One row of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongOption {
    pub keyword: &'static str,
    /// Shortest accepted abbreviation.
    pub min_len: usize,
    pub effect: Effect,
}

const fn opt(keyword: &'static str, min_len: usize, effect: Effect) -> LongOption {
    LongOption {
        keyword,
        min_len,
        effect,
    }
}

/// Recognised keywords.  Order matters: resolution takes the first match.
pub static LONG_OPTIONS: &[LongOption] = &[
    opt("armor", 5, Effect::Bool(BoolSetting::Armor)),
    opt("armorlines", 6, Effect::Ignore),
    opt("autosign", 2, Effect::Ignore),
    opt("bakring", 3, Effect::Ignore),
    opt("batchmode", 3, Effect::Bool(BoolSetting::Batchmode)),
    opt("cert_depth", 2, Effect::Str(StrSetting::CertDepth)),
    opt("charset", 2, Effect::Charset),
    opt("clearsig", 2, Effect::Bool(BoolSetting::Clearsign)),
    opt("comment", 4, Effect::Str(StrSetting::Comment)),
    opt("completes_needed", 5, Effect::Str(StrSetting::CompletesNeeded)),
    opt("compress", 5, Effect::Bool(BoolSetting::Compress)),
    opt("encrypttoself", 1, Effect::Bool(BoolSetting::EncryptToSelf)),
    opt("force", 1, Effect::Bool(BoolSetting::Force)),
    opt("interactive", 1, Effect::Ignore),
    opt("keepbinary", 1, Effect::Reject),
    opt("language", 2, Effect::Ignore),
    opt("legal_kludge", 2, Effect::Ignore),
    // PGP itself insists on three letters here.
    opt("marginals_needed", 3, Effect::Str(StrSetting::MarginalsNeeded)),
    opt("myname", 2, Effect::Str(StrSetting::LocalUser)),
    opt("nomanual", 1, Effect::Ignore),
    opt("pager", 2, Effect::Ignore),
    opt("pubring", 2, Effect::Str(StrSetting::Pubring)),
    opt("randseed", 1, Effect::Ignore),
    opt("secring", 2, Effect::Str(StrSetting::Secring)),
    opt("showpass", 2, Effect::Ignore),
    opt("textmode", 2, Effect::Bool(BoolSetting::Textmode)),
    opt("tmp", 2, Effect::Ignore),
    opt("tzfix", 2, Effect::Ignore),
    opt("verbose", 1, Effect::Verbose),
];

/// Charset names accepted by `+charset`, with the GnuPG name they map to
/// (`None` disables conversion).
const CHARSETS: &[(&str, Option<&str>)] = &[
    ("noconv", None),
    ("latin1", Some("iso-8859-1")),
    ("koi8", Some("koi8-r")),
];

/// Resolves a possibly abbreviated keyword against [`LONG_OPTIONS`].
pub fn resolve(keyword: &str) -> Option<&'static LongOption> {
    LONG_OPTIONS
        .iter()
        .find(|entry| abbreviates(entry.keyword, keyword, entry.min_len))
}

/// Splits `keyword[=value]` into a trimmed keyword and an optional value.
///
/// A value that starts with `"` ends at the next `"`; blanks inside the
/// quotes are kept and anything after the closing quote is dropped.
pub fn split_long_option(token: &str) -> Result<(&str, Option<&str>), ParseError> {
    let (keyword, value) = match token.split_once('=') {
        Some((k, v)) => (k, Some(v)),
        None => (token, None),
    };
    let keyword = trim_blanks(keyword);

    let value = match value.map(trim_blanks_start) {
        Some(v) if v.starts_with('"') => {
            let inner = &v[1..];
            match inner.find('"') {
                Some(end) => Some(&inner[..end]),
                None => return Err(ParseError::UnterminatedValue(v.to_owned())),
            }
        }
        Some(v) => Some(v.trim_end_matches([' ', '\t'])),
        None => None,
    };

    Ok((keyword, value))
}

/// Interprets a boolean long-option value: absent means on.
fn fetch_bool(keyword: &str, value: Option<&str>) -> Result<bool, ParseError> {
    match value {
        None => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("on") => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("off") => Ok(false),
        Some(v) => Err(ParseError::InvalidBoolean {
            keyword: keyword.to_owned(),
            value: v.to_owned(),
        }),
    }
}

/// Parses one long option (without its leading `+`) and applies it to `opts`.
pub fn apply_long_option(opts: &mut OptionState, token: &str) -> Result<(), ParseError> {
    let (keyword, value) = split_long_option(token)?;
    crate::debugoutput!("long option: keyword '{}' value {:?}\n", keyword, value);

    let entry = resolve(keyword).ok_or_else(|| ParseError::UnknownLongOption(keyword.to_owned()))?;

    match entry.effect {
        Effect::Bool(setting) => {
            let on = fetch_bool(keyword, value)?;
            match setting {
                BoolSetting::Armor => opts.armor = on,
                BoolSetting::Batchmode => opts.batchmode = on,
                BoolSetting::Clearsign => opts.clearsign = on,
                BoolSetting::Compress => opts.compress = Some(on),
                BoolSetting::EncryptToSelf => opts.encrypt_to_self = on,
                BoolSetting::Force => opts.force = Some(on),
                BoolSetting::Textmode => opts.textmode = on,
            }
        }
        Effect::Str(setting) => {
            let value = value
                .ok_or(ParseError::MissingLongValue(entry.keyword))?
                .to_owned();
            let slot = match setting {
                StrSetting::CertDepth => &mut opts.cert_depth,
                StrSetting::Comment => &mut opts.comment,
                StrSetting::CompletesNeeded => &mut opts.completes_needed,
                StrSetting::MarginalsNeeded => &mut opts.marginals_needed,
                StrSetting::LocalUser => &mut opts.local_user,
                StrSetting::Pubring => &mut opts.pubring,
                StrSetting::Secring => &mut opts.secring,
            };
            *slot = Some(value);
        }
        Effect::Verbose => {
            let value = value.ok_or(ParseError::MissingLongValue(entry.keyword))?;
            opts.verbose = Some(atoi(value));
        }
        Effect::Charset => {
            let value = value.ok_or(ParseError::MissingLongValue(entry.keyword))?;
            let (_, mapped) = CHARSETS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(value))
                .ok_or_else(|| ParseError::UnsupportedCharset(value.to_owned()))?;
            opts.charset = mapped.map(str::to_owned);
        }
        Effect::Ignore => {
            displaylevel!(
                2,
                "Warning: Long option `{}' is not translated/used.\n",
                entry.keyword
            );
        }
        Effect::Reject => return Err(ParseError::UnsupportedLongOption(entry.keyword)),
    }

    Ok(())
}

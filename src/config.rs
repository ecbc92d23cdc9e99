// config.rs — compile-time defaults and the environment variables that
// override them.
//
// Every environment lookup is split into a thin reader and a `*_from` helper
// that takes the raw value, so the conversion rules can be unit-tested
// without touching the process environment.

use crate::cli::arg_utils::atoi;
use crate::displaylevel;

// Target program launched for every translated command.
// Resolved through `PATH` unless `PGPGPG_GPG_BIN` names an explicit path.
pub const GPG_PATH_DEFAULT: &str = "gpg";

// Environment variable overriding the target program.
pub const ENV_GPG_BIN: &str = "PGPGPG_GPG_BIN";

// Passphrase supplied as plain text (legacy PGP convention).
pub const ENV_PGPPASS: &str = "PGPPASS";

// Already-open descriptor the passphrase can be read from (legacy PGP convention).
pub const ENV_PGPPASSFD: &str = "PGPPASSFD";

// Initial slot count of a freshly created argument vector, sentinel included.
pub const ARGV_INITIAL_CAPACITY: usize = 64;

// Record tag that introduces a secret key in `--with-colons` listings.
pub const SECRET_KEY_RECORD: &str = "sec:";

/// Returns the program path to execute, honouring `PGPGPG_GPG_BIN`.
pub fn gpg_path() -> String {
    gpg_path_from(std::env::var(ENV_GPG_BIN).ok().as_deref())
}

/// Testable core of [`gpg_path`].  Empty values fall back to the default.
pub fn gpg_path_from(env_val: Option<&str>) -> String {
    match env_val {
        Some(path) if !path.trim().is_empty() => path.to_owned(),
        _ => GPG_PATH_DEFAULT.to_owned(),
    }
}

/// Parses a `PGPPASSFD` value with C `atoi` semantics: leading digits are
/// used, anything else yields descriptor 0.
pub fn passphrase_fd_from(env_val: &str) -> i32 {
    let fd = atoi(env_val);
    if fd == 0 && !env_val.trim_start().starts_with('0') {
        displaylevel!(
            2,
            "Warning: {}={} is not a descriptor number, reading the passphrase from fd 0\n",
            ENV_PGPPASSFD,
            env_val
        );
    }
    fd
}

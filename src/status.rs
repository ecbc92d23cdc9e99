// status.rs — legacy PGP exit codes and the translation of GnuPG's exit
// status into them.

use std::process::ExitStatus;

use crate::displaylevel;

pub const PGPERR_OK: i32 = 0;
pub const PGPERR_FILE_INVALID: i32 = 1;
pub const PGPERR_FILE_NOT_FOUND: i32 = 2;
pub const PGPERR_FILE_UNKNOWN: i32 = 3;
pub const PGPERR_BATCH: i32 = 4;
pub const PGPERR_ARGUMENT: i32 = 5;
pub const PGPERR_INTERRUPT: i32 = 6;
pub const PGPERR_MEM: i32 = 7;
pub const PGPERR_KEY_GENERATE: i32 = 10;
pub const PGPERR_KEY_NOT_EXIST: i32 = 11;
pub const PGPERR_KEY_IMPORT: i32 = 12;
pub const PGPERR_KEY_EXPORT: i32 = 13;
pub const PGPERR_KEY_EDIT: i32 = 14;
pub const PGPERR_KEY_VIEW: i32 = 15;
pub const PGPERR_KEY_REMOVE: i32 = 16;
pub const PGPERR_KEY_CHECK: i32 = 17;
pub const PGPERR_KEY_SIGN: i32 = 18;
pub const PGPERR_KEY_SIGN_REMOVE: i32 = 19;
pub const PGPERR_ENCR_SIGN: i32 = 20;
pub const PGPERR_ENCR_RSA: i32 = 21;
pub const PGPERR_ENCR_ENCRYPT: i32 = 22;
pub const PGPERR_ENCR_COMPRESS: i32 = 23;
pub const PGPERR_DECR_SIGN: i32 = 30;
pub const PGPERR_DECR_RSA: i32 = 31;
pub const PGPERR_DECR_DECRYPT: i32 = 32;
pub const PGPERR_DECR_COMPRESS: i32 = 33;
/// Not a PGP 2.6 code: any failure that has no better match.
pub const PGPERR_UNKNOWN: i32 = 255;

/// Exit code used when the option combination could not be translated.
pub const PGPERR_COMPILE: i32 = 1;

/// Maps a normal GnuPG exit code onto the legacy code space.
///
/// GnuPG only distinguishes "bad signature" (1) and "other error" (2, which
/// is what it reports for a missing public key).  Every other code has no
/// legacy counterpart and is passed through unchanged.
pub fn map_gpg_exit_code(code: i32) -> i32 {
    match code {
        0 => PGPERR_OK,
        1 => PGPERR_DECR_SIGN,
        2 => PGPERR_KEY_NOT_EXIST,
        other => other,
    }
}

/// Maps a finished child's status, printing the warnings legacy PGP prints.
/// Termination by a signal is always [`PGPERR_UNKNOWN`].
pub fn map_exit_status(status: ExitStatus) -> i32 {
    let Some(code) = status.code() else {
        displaylevel!(1, "Error: Execution of `gpg' failed (Unknown reason).\n");
        return PGPERR_UNKNOWN;
    };

    let mapped = map_gpg_exit_code(code);
    match mapped {
        PGPERR_DECR_SIGN => {
            displaylevel!(1, "WARNING: Bad signature, doesn't match file contents!\n");
        }
        PGPERR_KEY_NOT_EXIST => {
            displaylevel!(
                1,
                "WARNING: Can't find the right public key-- can't check signature integrity.\n"
            );
        }
        _ => {}
    }
    mapped
}

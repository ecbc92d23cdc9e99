// cli/constants.rs — program identity, display level, and the diagnostic macros
// shared by every module of the wrapper.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "pgpgpg";

/// Prefix that turns a positional token into a `+keyword[=value]` long option.
pub const LONG_OPTION_MARK: char = '+';

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = silent; 1 = errors and exit-status warnings; 2 = warnings (default);
// 3 = echo of the legacy and translated command lines; 4 = internal tracing.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Maps a legacy `+verbose=N` level onto the display level.
///
/// PGP treats 0 as quiet, 1 as normal and 2 as verbose; those land on display
/// levels 1, 2 and 3.  Negative values are clamped to quiet.
pub fn display_level_for_verbose(verbose: i32) -> u32 {
    (verbose.max(0) as u32).saturating_add(1).min(4)
}

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output; only active in debug builds and at display level 4.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if $crate::cli::constants::display_level() >= 4 {
                eprint!($($arg)*);
            }
        }
    };
}

// pgpgpg — PGP 2.6 command-line compatibility wrapper for GnuPG

pub mod cli;
pub mod config;
pub mod error;
pub mod status;
pub mod armor;
pub mod defaultkey;
pub mod compile;
pub mod launch;

// ── Version constants ─────────────────────────────────────────────────────────
pub const PGPGPG_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the version string.
pub fn version_string() -> &'static str {
    PGPGPG_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use cli::argv::ArgvBuilder;
pub use cli::options::{parse_args_from, Flag, OptionState};
pub use compile::{compile, Invocation};
pub use defaultkey::{GpgKeyResolver, KeyResolver};
pub use error::{CompileError, Error, ParseError};

//! Command-line interface of the `pgpgpg` wrapper.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, `DISPLAY_LEVEL` and the display macros. |
//! | [`arg_utils`] | String helpers: blank trimming, `atoi`, extension split, keyword abbreviation. |
//! | [`argv`]      | `ArgvBuilder`, the sentinel-terminated argument vector. |
//! | [`getopt`]    | `Scanner`, the bundled single-letter flag scanner. |
//! | [`long_opts`] | `+keyword[=value]` table and interpreter. |
//! | [`options`]   | `OptionState` and the mode-dependent parsing loop. |
//!
//! Typical call sequence: `parse_args` → `compile::compile` → `launch::launch`.

pub mod constants;
pub mod arg_utils;
pub mod argv;
pub mod getopt;
pub mod long_opts;
pub mod options;

//! Binary entry point for the `pgpgpg` wrapper.
//!
//! # Control flow
//!
//! 1. [`parse_args`] turns the legacy command line into an [`OptionState`].
//! 2. The passphrase source is chosen and, for a literal passphrase, the pipe
//!    is created so its descriptor can appear on the translated command line.
//! 3. [`compile`] produces the GnuPG invocation.
//! 4. [`launch`] runs it and its exit status is mapped to a legacy PGP code.

use std::io::IsTerminal;

use pgpgpg::cli::arg_utils::join_command_line;
use pgpgpg::cli::constants::{display_level_for_verbose, set_display_level, PROGRAM_NAME};
use pgpgpg::cli::options::{parse_args, OptionState};
use pgpgpg::compile::compile;
use pgpgpg::defaultkey::GpgKeyResolver;
use pgpgpg::error::Error;
use pgpgpg::launch::{launch, passphrase_source, PassphraseFeed, PassphraseSource};
use pgpgpg::status::{map_exit_status, PGPERR_UNKNOWN};
use pgpgpg::{debugoutput, display, displaylevel, displayout};

/// Sets up the passphrase descriptor on `opts`; returns the feed to write
/// after spawning, if the passphrase travels over a new pipe.
fn prepare_passphrase(opts: &mut OptionState) -> anyhow::Result<Option<PassphraseFeed>> {
    match passphrase_source(opts.passphrase.as_deref()) {
        PassphraseSource::Literal(text) => {
            let feed = PassphraseFeed::new(text)?;
            opts.passphrase_fd = Some(feed.child_fd());
            Ok(Some(feed))
        }
        PassphraseSource::Descriptor(fd) => {
            opts.passphrase_fd = Some(fd);
            Ok(None)
        }
        PassphraseSource::Prompt => Ok(None),
    }
}

/// Runs one translated command and returns the process exit code.
fn run() -> i32 {
    let mut opts = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            if e.is_usage_message() {
                displayout!("{}\n", e);
            } else {
                display!("{}: {}\n", PROGRAM_NAME, e);
            }
            return Error::from(e).exit_code();
        }
    };

    if let Some(verbose) = opts.verbose {
        set_display_level(display_level_for_verbose(verbose));
    }
    debugoutput!("{} {}\n", PROGRAM_NAME, pgpgpg::version_string());
    let legacy: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    displaylevel!(3, "{}\n", join_command_line(&legacy));

    opts.stdin_is_terminal = std::io::stdin().is_terminal();

    let feed = match prepare_passphrase(&mut opts) {
        Ok(feed) => feed,
        Err(e) => {
            display!("{}: {:#}\n", PROGRAM_NAME, e);
            return PGPERR_UNKNOWN;
        }
    };

    let resolver = GpgKeyResolver::from_env();
    let invocation = match compile(&opts, resolver.program(), &resolver) {
        Ok(invocation) => invocation,
        Err(e) => {
            display!("{}: {}\n", PROGRAM_NAME, e);
            return Error::from(e).exit_code();
        }
    };
    displaylevel!(3, "{}\n", join_command_line(&invocation.argv.to_vec()));

    match launch(&invocation, feed) {
        Ok(status) => map_exit_status(status),
        Err(e) => {
            display!("{}: {:#}\n", PROGRAM_NAME, e);
            PGPERR_UNKNOWN
        }
    }
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

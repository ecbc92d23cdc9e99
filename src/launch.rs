//! Running the translated command.
//!
//! The passphrase, when one has to be sent, travels over a pipe created
//! *before* compilation so the child-side descriptor number can be placed on
//! the command line as `--passphrase-fd N`.  The child inherits the read end
//! under the same number; the write end is close-on-exec and stays with the
//! parent, which writes the passphrase once the child is running.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::fd::{AsRawFd, OwnedFd, RawFd};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{anyhow, Context};
use nix::unistd::pipe;

use crate::compile::Invocation;
use crate::config::{self, ENV_PGPPASS, ENV_PGPPASSFD};
use crate::displaylevel;

/// Device the child's standard input is bound to when it must not read it.
pub const NULL_DEVICE: &str = "/dev/null";

/// Where the passphrase comes from, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassphraseSource {
    /// Text to send over a fresh pipe (`-z`, then `PGPPASS`).
    Literal(String),
    /// Descriptor the caller already opened (`PGPPASSFD`).
    Descriptor(i32),
    /// Let the target program ask for itself.
    Prompt,
}

/// Selects the passphrase source from `-z` and the environment.
pub fn passphrase_source(cli: Option<&str>) -> PassphraseSource {
    passphrase_source_from(
        cli,
        std::env::var(ENV_PGPPASSFD).ok().as_deref(),
        std::env::var(ENV_PGPPASS).ok().as_deref(),
    )
}

/// Testable core of [`passphrase_source`]: `-z` wins over `PGPPASSFD`, which
/// wins over `PGPPASS`.
pub fn passphrase_source_from(
    cli: Option<&str>,
    pass_fd_env: Option<&str>,
    pass_env: Option<&str>,
) -> PassphraseSource {
    if let Some(text) = cli {
        return PassphraseSource::Literal(text.to_owned());
    }
    if let Some(fd) = pass_fd_env {
        return PassphraseSource::Descriptor(config::passphrase_fd_from(fd));
    }
    match pass_env {
        Some(text) => PassphraseSource::Literal(text.to_owned()),
        None => PassphraseSource::Prompt,
    }
}

/// A passphrase waiting to be written to the child.
#[derive(Debug)]
pub struct PassphraseFeed {
    passphrase: String,
    read: OwnedFd,
    write: OwnedFd,
}

impl PassphraseFeed {
    /// Creates the pipe.  Only the read end survives `exec`.
    pub fn new(passphrase: impl Into<String>) -> anyhow::Result<Self> {
        let (read, write) = pipe().context("Can't setup pipe for passphrase")?;
        set_cloexec(write.as_raw_fd()).context("Can't setup pipe for passphrase")?;
        Ok(PassphraseFeed {
            passphrase: passphrase.into(),
            read,
            write,
        })
    }

    /// Descriptor number the child reads the passphrase from.
    pub fn child_fd(&self) -> RawFd {
        self.read.as_raw_fd()
    }

    /// Closes the parent's read end, then writes the passphrase and a
    /// newline and closes the write end so the child sees EOF.
    fn send(self) -> io::Result<()> {
        drop(self.read);
        let mut pipe = File::from(self.write);
        pipe.write_all(self.passphrase.as_bytes())?;
        pipe.write_all(b"\n")?;
        pipe.flush()
    }
}

fn set_cloexec(fd: RawFd) -> io::Result<()> {
    // SAFETY: `fd` is an open descriptor owned by the caller; F_SETFD only
    // changes its descriptor flags.
    let rc = unsafe { libc::fcntl(fd, libc::F_SETFD, libc::FD_CLOEXEC) };
    if rc == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Spawns `invocation`, feeds it the passphrase if any, and waits for it.
pub fn launch(invocation: &Invocation, feed: Option<PassphraseFeed>) -> anyhow::Result<ExitStatus> {
    let program = invocation
        .argv
        .program()
        .ok_or_else(|| anyhow!("empty command line"))?;

    let mut command = Command::new(program);
    command.args(invocation.argv.arguments());

    if invocation.null_stdin {
        let null = OpenOptions::new()
            .read(true)
            .write(true)
            .open(NULL_DEVICE)
            .with_context(|| format!("Can't open {NULL_DEVICE}"))?;
        command.stdin(Stdio::from(null));
    }

    let mut child = command
        .spawn()
        .with_context(|| format!("Can't execute `{program}'"))?;

    if let Some(feed) = feed {
        if let Err(e) = feed.send() {
            // The child may have exited without reading; its status decides.
            displaylevel!(1, "Warning: Can't write passphrase to `{}': {}\n", program, e);
        }
    }

    child
        .wait()
        .with_context(|| format!("Can't wait for `{program}'"))
}

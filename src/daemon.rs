/*
 * This file is part of tempdaemon.
 *
 * Copyright (C) 2026 tempdaemon contributors
 *
 * tempdaemon is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * tempdaemon is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with tempdaemon. If not, see <https://www.gnu.org/licenses/>.
 */

//! Process bootstrap: attached vs. detached startup.

use std::ffi::OsStr;
use std::io;

use crate::constants::cli;
use crate::error::{Result, TempDaemonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupMode {
    /// Detach from the terminal before entering the loop
    Daemon,
    /// Stay attached, for debugging
    Foreground,
}

impl StartupMode {
    /// Decide from the arguments after the program name. Only the first one
    /// matters, and only the exact `-nd` keeps the process in the foreground.
    /// Arguments are OS strings; one that is not UTF-8 simply isn't `-nd`.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        match args.into_iter().next() {
            Some(first) if first.as_ref() == OsStr::new(cli::FOREGROUND_FLAG) => Self::Foreground,
            _ => Self::Daemon,
        }
    }

    pub fn is_foreground(self) -> bool {
        self == Self::Foreground
    }
}

/// Classic double-fork detach. Intermediate parents exit with `EXIT_SUCCESS`;
/// only the final grandchild returns from here.
///
/// Must be called while the process is still single-threaded.
pub fn daemonize() -> Result<()> {
    fork_and_exit_parent()?;

    // SAFETY: setsid takes no arguments; the child of a fork is never a group leader.
    if unsafe { libc::setsid() } < 0 {
        return Err(TempDaemonError::Session(io::Error::last_os_error()));
    }

    // SAFETY: installing SIG_IGN for valid signal numbers has no memory-safety requirements.
    unsafe {
        libc::signal(libc::SIGCHLD, libc::SIG_IGN);
        libc::signal(libc::SIGHUP, libc::SIG_IGN);
    }

    // A non-leader can never reacquire a controlling terminal
    fork_and_exit_parent()?;

    // SAFETY: umask only replaces the process file-creation mask.
    unsafe { libc::umask(0) };

    // Not fatal: the loop only uses absolute paths
    let _ = std::env::set_current_dir("/");

    close_inherited_descriptors();
    Ok(())
}

fn fork_and_exit_parent() -> Result<()> {
    // SAFETY: no other threads exist yet, so the child cannot inherit a held lock.
    match unsafe { libc::fork() } {
        pid if pid < 0 => Err(TempDaemonError::Fork(io::Error::last_os_error())),
        0 => Ok(()),
        _ => std::process::exit(libc::EXIT_SUCCESS),
    }
}

/// Close every descriptor up to the `_SC_OPEN_MAX` limit, stdio included.
fn close_inherited_descriptors() {
    // SAFETY: sysconf only queries a limit.
    let max_fd = unsafe { libc::sysconf(libc::_SC_OPEN_MAX) };
    for fd in (0..=max_fd).rev() {
        // SAFETY: nothing in this process owns a descriptor at this point; EBADF is ignored.
        unsafe { libc::close(fd as libc::c_int) };
    }
}

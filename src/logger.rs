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

//! Diagnostic channel
//!
//! A single global `tracing` subscriber, installed once after daemonizing.
//! Records go to the systemd journal when it is running and to syslog(3)
//! otherwise, both tagged `tempdaemon`. Foreground runs also echo to stderr.

use std::ffi::CString;
use std::fmt::{self, Write as _};
use std::path::Path;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config;
use crate::constants::{logging, paths};

/// Which sink ended up receiving records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
    Journald,
    Syslog,
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Journald => f.write_str("systemd journal"),
            Self::Syslog => f.write_str("syslog"),
        }
    }
}

/// Install the process-wide subscriber. Later calls leave the first one in place.
pub fn init_logging(foreground: bool) -> LogSink {
    let log_level = config::log_level();
    let filter = EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| EnvFilter::new(logging::DEFAULT_LEVEL));

    let journald = if Path::new(paths::JOURNALD_SOCKET).exists() {
        match tracing_journald::layer() {
            Ok(layer) => Some(layer.with_syslog_identifier(logging::TAG.to_string())),
            Err(e) => {
                if foreground {
                    eprintln!("Failed to create journald layer: {}, falling back to syslog", e);
                }
                None
            }
        }
    } else {
        None
    };

    let sink = if journald.is_some() { LogSink::Journald } else { LogSink::Syslog };
    let syslog = journald.is_none().then(SyslogLayer::open);
    let stderr = foreground.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(journald)
        .with(syslog)
        .with(stderr)
        .try_init();
    if let Err(e) = installed {
        if foreground {
            eprintln!("Logging already initialized: {}", e);
        }
    }
    sink
}

/// `tracing` layer writing through the C library's syslog(3).
pub struct SyslogLayer {
    _private: (),
}

impl SyslogLayer {
    /// `openlog("tempdaemon", LOG_PID, LOG_DAEMON)`
    pub fn open() -> Self {
        // SAFETY: TAG_C is NUL-terminated and 'static, openlog may keep the pointer.
        unsafe {
            libc::openlog(
                logging::TAG_C.as_ptr() as *const libc::c_char,
                libc::LOG_PID,
                libc::LOG_DAEMON,
            )
        };
        Self { _private: () }
    }
}

impl<S: Subscriber> Layer<S> for SyslogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Ok(message) = CString::new(visitor.finish()) else { return };

        // SAFETY: both pointers are valid NUL-terminated strings; the "%s" format
        // keeps '%' in the message from being interpreted.
        unsafe {
            libc::syslog(
                syslog_priority(event.metadata().level()),
                b"%s\0".as_ptr() as *const libc::c_char,
                message.as_ptr(),
            )
        };
    }
}

fn syslog_priority(level: &Level) -> libc::c_int {
    match *level {
        Level::ERROR => libc::LOG_ERR,
        Level::WARN => libc::LOG_WARNING,
        Level::INFO => libc::LOG_INFO,
        Level::DEBUG | Level::TRACE => libc::LOG_DEBUG,
    }
}

/// Flattens an event into `message key=value ...`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let mut line = self.message;
        if !self.fields.is_empty() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(self.fields.trim_start());
        }
        // An interior NUL would make CString::new fail and drop the record
        line.replace('\0', "\\0")
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

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

//! Unified error handling for tempdaemon
//!
//! One error type for sensor, cooling device and bootstrap failures.
//! Only the bootstrap variants are ever fatal.

use std::io;
use std::path::PathBuf;

/// Result type alias using TempDaemonError
pub type Result<T> = std::result::Result<T, TempDaemonError>;

#[derive(thiserror::Error, Debug)]
pub enum TempDaemonError {
    // ============================================================================
    // Sensor Errors
    // ============================================================================
    #[error("Failed to open sensor {path}: {source}")]
    SensorOpen {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to read sensor {path}: {source}")]
    SensorRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to parse sensor {path}: {raw:?} is not a milli-degree value")]
    SensorParse {
        path: PathBuf,
        raw: String,
    },

    #[error("No temperature sensor produced a reading")]
    NoTemperature,

    // ============================================================================
    // Cooling Device Errors
    // ============================================================================
    #[error("Failed to open cooling device {path}: {source}")]
    CoolingOpen {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to write cooling device {path}: {source}")]
    CoolingWrite {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Invalid fan level: {value} (must be 0-11)")]
    InvalidFanLevel {
        value: u8,
    },

    // ============================================================================
    // Bootstrap Errors
    // ============================================================================
    #[error("fork failed: {0}")]
    Fork(io::Error),

    #[error("setsid failed: {0}")]
    Session(io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_os_error() {
        let err = TempDaemonError::SensorOpen {
            path: PathBuf::from("/sys/class/hwmon/hwmon1/temp3_input"),
            source: io::Error::from_raw_os_error(libc::ENOENT),
        };
        let msg = err.to_string();
        assert!(msg.contains("temp3_input"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_parse_error_quotes_raw_content() {
        let err = TempDaemonError::SensorParse {
            path: PathBuf::from("temp1_input"),
            raw: "garbage".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse sensor temp1_input: \"garbage\" is not a milli-degree value"
        );
    }
}

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

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::curves::FanLevel;
use crate::error::{Result, TempDaemonError};

/// `cur_state` of a thermal cooling device.
#[derive(Clone, Debug)]
pub struct CoolingDevice {
    path: PathBuf,
}

impl CoolingDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_set_fan_speed(&self, level: FanLevel) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| TempDaemonError::CoolingOpen { path: self.path.clone(), source })?;

        // sysfs takes a store as one write
        file.write_all(format!("{}\n", level).as_bytes())
            .map_err(|source| TempDaemonError::CoolingWrite { path: self.path.clone(), source })
    }

    /// Apply `level`, logging instead of returning any failure. The next
    /// cycle is the retry.
    pub fn set_fan_speed(&self, level: FanLevel) {
        if let Err(e) = self.try_set_fan_speed(level) {
            error!("Can not set the fan speed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::count_errors;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_decimal_level_and_newline() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("cur_state");
        let device = CoolingDevice::new(&state);
        assert_eq!(device.path(), state.as_path());

        for level in FanLevel::all() {
            device.try_set_fan_speed(level).unwrap();
            assert_eq!(fs::read_to_string(&state).unwrap(), format!("{}\n", level.get()));
        }
    }

    #[test]
    fn test_previous_content_is_truncated() {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("cur_state");
        fs::write(&state, "11\nleftover\n").unwrap();

        CoolingDevice::new(&state).set_fan_speed(FanLevel::new(3).unwrap());
        assert_eq!(fs::read_to_string(&state).unwrap(), "3\n");
    }

    #[test]
    fn test_open_failure_is_typed() {
        let dir = TempDir::new().unwrap();
        let device = CoolingDevice::new(dir.path().join("missing").join("cur_state"));
        assert!(matches!(
            device.try_set_fan_speed(FanLevel::MAX),
            Err(TempDaemonError::CoolingOpen { .. })
        ));
    }

    #[test]
    fn test_open_failure_is_logged_not_raised() {
        let dir = TempDir::new().unwrap();
        let device = CoolingDevice::new(dir.path().join("missing").join("cur_state"));
        let ((), errors) = count_errors(|| device.set_fan_speed(FanLevel::MAX));
        assert_eq!(errors, 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_logged_not_raised() {
        // /dev/full accepts the open and fails every write with ENOSPC
        if !Path::new("/dev/full").exists() {
            return;
        }
        let device = CoolingDevice::new("/dev/full");
        assert!(matches!(
            device.try_set_fan_speed(FanLevel::STOPPED),
            Err(TempDaemonError::CoolingWrite { .. })
        ));
        let ((), errors) = count_errors(|| device.set_fan_speed(FanLevel::STOPPED));
        assert_eq!(errors, 1);
    }
}

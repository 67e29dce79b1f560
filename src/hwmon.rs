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

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::constants::sensors;
use crate::error::{Result, TempDaemonError};

/// The `temp{N}_input` files of one hwmon chip.
#[derive(Clone, Debug)]
pub struct SensorBank {
    base: PathBuf,
}

/// Outcome of one pass over all sensor indices.
#[derive(Debug)]
pub struct SensorScan {
    /// Highest reading in °C, [`sensors::UNSET_CELSIUS`] if none succeeded
    pub max_celsius: f64,
    /// Most recent per-sensor failure, kept for the diagnostic record
    pub last_error: Option<TempDaemonError>,
}

impl SensorScan {
    fn empty() -> Self {
        Self { max_celsius: sensors::UNSET_CELSIUS, last_error: None }
    }

    /// The maximum, unless it is still at the unset sentinel.
    pub fn reading(&self) -> Option<f64> {
        (self.max_celsius > sensors::UNSET_THRESHOLD_CELSIUS).then_some(self.max_celsius)
    }
}

impl SensorBank {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn sensor_path(&self, index: u8) -> PathBuf {
        self.base.join(format!("temp{}_input", index))
    }

    /// Read one sensor in °C.
    pub fn read_sensor(&self, index: u8) -> Result<f64> {
        let path = self.sensor_path(index);
        let mut file = File::open(&path)
            .map_err(|source| TempDaemonError::SensorOpen { path: path.clone(), source })?;

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|source| TempDaemonError::SensorRead { path: path.clone(), source })?;

        let raw = String::from_utf8_lossy(&buf);
        let millidegrees = parse_millidegrees(&raw).ok_or_else(|| TempDaemonError::SensorParse {
            path,
            raw: raw.trim().to_string(),
        })?;
        Ok(f64::from(millidegrees) / sensors::MILLIDEGREES_PER_DEGREE)
    }

    /// Fold every sensor index into a running maximum. Failures never stop the scan.
    pub fn scan(&self) -> SensorScan {
        sensors::INDICES.fold(SensorScan::empty(), |mut scan, index| {
            match self.read_sensor(index) {
                Ok(celsius) => {
                    if celsius > scan.max_celsius {
                        scan.max_celsius = celsius;
                    }
                }
                Err(e) => {
                    debug!("Skipping sensor {}: {}", index, e);
                    scan.last_error = Some(e);
                }
            }
            scan
        })
    }

    /// Hottest sensor in °C, or [`sensors::FALLBACK_CELSIUS`] when nothing could be read.
    pub fn read_temperature(&self) -> f64 {
        let scan = self.scan();
        match scan.reading() {
            Some(celsius) => celsius,
            None => {
                let cause = scan.last_error.unwrap_or(TempDaemonError::NoTemperature);
                error!("Can not get any temperature: {}", cause);
                sensors::FALLBACK_CELSIUS
            }
        }
    }
}

/// Parse the leading signed decimal integer of a sensor file, like `scanf("%d")`:
/// leading C `isspace` characters are skipped and anything after the digits is ignored.
pub fn parse_millidegrees(raw: &str) -> Option<i32> {
    let s = raw.trim_start_matches(is_c_space);
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// `isspace` in the C locale: space, \t, \n, \v, \f, \r
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

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

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{logging, paths, timing};

/// Endpoints and cadence of the control loop.
///
/// The daemon always runs with [`DaemonConfig::default`]; the fields are
/// only public so tests can aim the loop at a scratch directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaemonConfig {
    /// Directory holding `temp1_input` .. `temp5_input`
    pub sensor_base: PathBuf,
    /// `cur_state` file of the cooling device
    pub cooling_state: PathBuf,
    pub poll_interval: Duration,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            sensor_base: PathBuf::from(paths::SENSOR_BASE),
            cooling_state: PathBuf::from(paths::COOLING_STATE),
            poll_interval: timing::POLL_INTERVAL,
        }
    }
}

/// Log filter directive taken from `TEMPDAEMON_LOG`, `info` when unset.
pub fn log_level() -> String {
    log_level_from(std::env::var(logging::LEVEL_ENV).ok())
}

fn log_level_from(raw: Option<String>) -> String {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| logging::DEFAULT_LEVEL.to_string())
}

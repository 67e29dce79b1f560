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

//! tempdaemon - hwmon temperature to cooling device fan control
//!
//! Samples the `temp{1..5}_input` sensors of one hwmon chip, maps the hottest
//! reading onto a fixed 12-step fan curve and writes the level to a thermal
//! cooling device, four times a second.

pub mod config;
pub mod constants;
pub mod control;
pub mod cooling;
pub mod curves;
pub mod daemon;
pub mod error;
pub mod hwmon;
pub mod logger;

#[cfg(test)]
mod test_utils;

pub use config::DaemonConfig;
pub use control::{Controller, FanActuator, TemperatureSource};
pub use cooling::CoolingDevice;
pub use curves::{level_for_temperature, FanLevel};
pub use daemon::StartupMode;
pub use error::{Result, TempDaemonError};
pub use hwmon::SensorBank;

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

//! Fan Control Loop
//!
//! read → map → write → sleep, forever. Each cycle stands alone: one
//! temperature reading decides one fan level, with no hysteresis,
//! smoothing or state carried into the next cycle.
//!
//! # Failure handling
//! - Sensor failures end in a fallback reading that forces full cooling
//! - Cooling device failures are logged and the cycle is dropped
//! - Nothing in a cycle can stop the loop

use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::config::DaemonConfig;
use crate::cooling::CoolingDevice;
use crate::curves::{level_for_temperature, FanLevel};
use crate::hwmon::SensorBank;

/// Where a cycle gets its temperature from.
#[cfg_attr(test, mockall::automock)]
pub trait TemperatureSource {
    /// °C; must always produce a usable value
    fn read_temperature(&self) -> f64;
}

/// Where a cycle sends its fan level.
#[cfg_attr(test, mockall::automock)]
pub trait FanActuator {
    /// Must not fail the caller
    fn set_fan_speed(&self, level: FanLevel);
}

impl TemperatureSource for SensorBank {
    fn read_temperature(&self) -> f64 {
        SensorBank::read_temperature(self)
    }
}

impl FanActuator for CoolingDevice {
    fn set_fan_speed(&self, level: FanLevel) {
        CoolingDevice::set_fan_speed(self, level)
    }
}

pub struct Controller<T, F> {
    sensors: T,
    fan: F,
    poll_interval: Duration,
}

impl Controller<SensorBank, CoolingDevice> {
    pub fn from_config(config: &DaemonConfig) -> Self {
        Self::new(
            SensorBank::new(&config.sensor_base),
            CoolingDevice::new(&config.cooling_state),
            config.poll_interval,
        )
    }
}

impl<T: TemperatureSource, F: FanActuator> Controller<T, F> {
    pub fn new(sensors: T, fan: F, poll_interval: Duration) -> Self {
        Self { sensors, fan, poll_interval }
    }

    /// One read → map → write pass. Returns the level handed to the fan.
    pub fn run_cycle(&self) -> FanLevel {
        let celsius = self.sensors.read_temperature();
        let level = level_for_temperature(celsius);
        trace!("{:.3}°C -> fan level {}", celsius, level);
        self.fan.set_fan_speed(level);
        level
    }

    /// Run cycles until the process is killed. The sleep is never cut short.
    pub fn run(&self) -> ! {
        loop {
            self.run_cycle();
            thread::sleep(self.poll_interval);
        }
    }
}

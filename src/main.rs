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

use anyhow::Context;
use tracing::info;

use tempdaemon::{daemon, logger, Controller, CoolingDevice, DaemonConfig, SensorBank, StartupMode};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    let mode = StartupMode::from_args(std::env::args_os().skip(1));

    // Detach before anything opens a descriptor; a failure here exits with EXIT_FAILURE
    if mode == StartupMode::Daemon {
        daemon::daemonize().context("failed to daemonize")?;
    }

    let sink = logger::init_logging(mode.is_foreground());
    let config = DaemonConfig::default();

    info!("STARTUP: tempdaemon {} ({:?} mode, logging to {})", VERSION, mode, sink);
    let sensors = SensorBank::new(&config.sensor_base);
    let fan = CoolingDevice::new(&config.cooling_state);
    info!(
        "STARTUP: sensors {}/temp{{1..5}}_input, fan {}, every {:?}",
        sensors.base().display(),
        fan.path().display(),
        config.poll_interval
    );

    Controller::new(sensors, fan, config.poll_interval).run()
}

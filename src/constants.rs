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

//! Constants for tempdaemon
//!
//! Every fixed path, interval and magic temperature lives here.
//! None of these are runtime-configurable.

use std::time::Duration;

/// System paths
pub mod paths {
    /// hwmon chip carrying the CPU core temperature inputs
    pub const SENSOR_BASE: &str = "/sys/class/hwmon/hwmon1";

    /// Thermal cooling device state file driving the fan
    pub const COOLING_STATE: &str = "/sys/class/thermal/cooling_device0/cur_state";

    /// Present when systemd-journald is accepting native protocol records
    pub const JOURNALD_SOCKET: &str = "/run/systemd/journal/socket";
}

/// Sensor sampling
pub mod sensors {
    use std::ops::RangeInclusive;

    /// `temp{N}_input` indices scanned on every cycle
    pub const INDICES: RangeInclusive<u8> = 1..=5;

    /// hwmon reports milli-degrees Celsius
    pub const MILLIDEGREES_PER_DEGREE: f64 = 1000.0;

    /// Initial value of the running maximum, below any real reading
    pub const UNSET_CELSIUS: f64 = -100.0;

    /// A maximum at or below this means no sensor produced a reading
    pub const UNSET_THRESHOLD_CELSIUS: f64 = -99.9;

    /// Reported when every sensor failed; maps to full cooling
    pub const FALLBACK_CELSIUS: f64 = 120.0;
}

/// Control loop timing
pub mod timing {
    use super::Duration;

    /// Sleep between two control cycles
    pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
}

/// Diagnostic channel
pub mod logging {
    /// Tag under which records show up in syslog / the journal
    pub const TAG: &str = "tempdaemon";

    /// NUL-terminated copy of [`TAG`] handed to `openlog(3)`, which keeps the pointer
    pub const TAG_C: &[u8] = b"tempdaemon\0";

    /// Environment variable holding the `EnvFilter` directive
    pub const LEVEL_ENV: &str = "TEMPDAEMON_LOG";

    /// Filter used when [`LEVEL_ENV`] is unset or empty
    pub const DEFAULT_LEVEL: &str = "info";
}

/// Command line
pub mod cli {
    /// First argument that keeps the daemon attached to the terminal
    pub const FOREGROUND_FLAG: &str = "-nd";
}

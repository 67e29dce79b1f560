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

//! Fixed temperature → fan level curve.

use std::fmt;

use crate::error::{Result, TempDaemonError};

/// Discrete cooling device state, 0 (stopped) to 11 (full speed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FanLevel(u8);

impl FanLevel {
    pub const STOPPED: Self = Self(0);
    pub const MAX: Self = Self(11);

    pub fn new(value: u8) -> Result<Self> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(TempDaemonError::InvalidFanLevel { value })
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every level from stopped to full speed, ascending
    pub fn all() -> impl Iterator<Item = FanLevel> {
        (Self::STOPPED.0..=Self::MAX.0).map(Self)
    }
}

impl TryFrom<u8> for FanLevel {
    type Error = TempDaemonError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for FanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive upper temperature bound (°C) for each level below [`FanLevel::MAX`].
/// Bounds are strictly ascending.
pub const FAN_CURVE: [(f64, FanLevel); 11] = [
    (45.0, FanLevel(0)),
    (50.0, FanLevel(1)),
    (55.0, FanLevel(2)),
    (60.0, FanLevel(3)),
    (62.0, FanLevel(4)),
    (64.0, FanLevel(5)),
    (66.0, FanLevel(6)),
    (68.0, FanLevel(7)),
    (70.0, FanLevel(8)),
    (72.0, FanLevel(9)),
    (74.0, FanLevel(10)),
];

/// Map a temperature to a fan level: first bound the reading does not exceed,
/// [`FanLevel::MAX`] above the last one. NaN satisfies no bound and gets full speed.
pub fn level_for_temperature(celsius: f64) -> FanLevel {
    FAN_CURVE
        .iter()
        .find(|(bound, _)| celsius <= *bound)
        .map(|&(_, level)| level)
        .unwrap_or(FanLevel::MAX)
}

//! Degrees ⇄ hour/minute conversion.
//!
//! Angles are stored per picker type as whole degrees clockwise from 12
//! o'clock. Hours collapse onto twelve 30° positions; which of the 24 hours a
//! position means depends on the mode:
//!
//! - 24-hour: the outer ring reads 1–12, the inner ring 13–23 and 0.
//! - 12-hour: one ring reads 12, 1–11 and the AM/PM flag picks the half day.
//!   Hour 12 sits at the top together with midnight, so at 0° the converter
//!   reports 0 for AM and 12 for PM.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::error::{PickerError, Result};
use crate::snap::{DEGREES_FOR_ONE_HOUR, DEGREES_FOR_ONE_MINUTE};

pub const HOURS_IN_DAY: u8 = 24;
pub const MINUTES_IN_HOUR: u8 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PickerType {
    Hours,
    Minutes,
}

impl PickerType {
    pub(crate) fn index(self) -> usize {
        match self {
            PickerType::Hours => 0,
            PickerType::Minutes => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AmPm {
    #[default]
    Am,
    Pm,
}

impl AmPm {
    /// Half of the day `hour` (0-23) falls in. 0 is midnight (AM), 12 is noon (PM).
    pub fn for_hour(hour: u8) -> Self {
        if hour % HOURS_IN_DAY < 12 {
            AmPm::Am
        } else {
            AmPm::Pm
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AmPm::Am => AmPm::Pm,
            AmPm::Pm => AmPm::Am,
        }
    }
}

/// A validated hour/minute pair in 24-hour form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour >= HOURS_IN_DAY {
            return Err(PickerError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_IN_HOUR {
            return Err(PickerError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Current wall-clock time of day in UTC.
    pub fn now_utc() -> Self {
        let secs = unix_secs();
        Self {
            hour: ((secs / 3_600) % 24) as u8,
            minute: ((secs / 60) % 60) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

fn unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Maps between stored angles and hour/minute values for one picker mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueConverter {
    pub is_24_hour: bool,
    pub am_pm: AmPm,
}

impl ValueConverter {
    pub fn new(is_24_hour: bool, am_pm: AmPm) -> Self {
        Self { is_24_hour, am_pm }
    }

    pub fn minute_for_degrees(&self, degrees: u16) -> u8 {
        (degrees / DEGREES_FOR_ONE_MINUTE) as u8
    }

    pub fn degrees_for_minute(&self, minute: u8) -> u16 {
        (minute % MINUTES_IN_HOUR) as u16 * DEGREES_FOR_ONE_MINUTE
    }

    pub fn hour_for_degrees(&self, degrees: u16, inner_circle: bool) -> u8 {
        let mut hour = ((degrees / DEGREES_FOR_ONE_HOUR) % 12) as u8;
        if self.is_24_hour {
            if !inner_circle && hour == 0 {
                hour = 12;
            } else if inner_circle && hour != 0 {
                hour += 12;
            }
        } else if self.am_pm == AmPm::Pm {
            hour += 12;
        }
        hour
    }

    /// Angle of `hour`, independent of the ring it is drawn on (13 and 1 share 30°).
    pub fn degrees_for_hour(&self, hour: u8) -> u16 {
        (hour % 12) as u16 * DEGREES_FOR_ONE_HOUR
    }

    pub fn inner_circle_for_hour(&self, hour: u8) -> bool {
        self.is_24_hour && (hour == 0 || hour > 12)
    }

    pub fn hour_24_to_12(&self, hour: u8) -> u8 {
        if hour == 0 {
            12
        } else if hour > 12 {
            hour - 12
        } else {
            hour
        }
    }

    /// Interprets a 1–12 dial hour in the current half of the day.
    pub fn hour_12_to_24(&self, hour: u8) -> u8 {
        let hour = if hour == 12 { 0 } else { hour };
        match self.am_pm {
            AmPm::Am => hour,
            AmPm::Pm => hour + 12,
        }
    }
}

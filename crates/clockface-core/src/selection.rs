use crate::convert::{AmPm, ClockTime, HOURS_IN_DAY, MINUTES_IN_HOUR, PickerType, ValueConverter};

/// Hour and minute positions currently selected on the dial.
///
/// `degrees[Hours]` is always a multiple of 30 and `degrees[Minutes]` a
/// multiple of 6, both in `0..360`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSelection {
    degrees: [u16; 2],
    is_on_inner_circle: bool,
    am_pm: AmPm,
    is_24_hour: bool,
}

impl TimeSelection {
    pub fn new(time: ClockTime, is_24_hour: bool) -> Self {
        let mut selection = Self {
            degrees: [0, 0],
            is_on_inner_circle: false,
            am_pm: AmPm::Am,
            is_24_hour,
        };
        selection.set_hour(time.hour());
        selection.set_minute(time.minute());
        selection
    }

    /// Starts from the current wall-clock time.
    pub fn now(is_24_hour: bool) -> Self {
        Self::new(ClockTime::now_utc(), is_24_hour)
    }

    pub fn converter(&self) -> ValueConverter {
        ValueConverter::new(self.is_24_hour, self.am_pm)
    }

    pub fn degrees(&self, picker_type: PickerType) -> u16 {
        self.degrees[picker_type.index()]
    }

    pub fn is_on_inner_circle(&self) -> bool {
        self.is_on_inner_circle
    }

    pub fn am_pm(&self) -> AmPm {
        self.am_pm
    }

    pub fn is_24_hour(&self) -> bool {
        self.is_24_hour
    }

    pub fn hour(&self) -> u8 {
        self.converter()
            .hour_for_degrees(self.degrees(PickerType::Hours), self.is_on_inner_circle)
    }

    pub fn minute(&self) -> u8 {
        self.converter()
            .minute_for_degrees(self.degrees(PickerType::Minutes))
    }

    pub fn value(&self, picker_type: PickerType) -> u8 {
        match picker_type {
            PickerType::Hours => self.hour(),
            PickerType::Minutes => self.minute(),
        }
    }

    /// Stores `hour` (0-23), deriving AM/PM and the ring from it.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= 24`.
    pub fn set_hour(&mut self, hour: u8) {
        assert!(hour < HOURS_IN_DAY, "hour {hour} is outside 0..24");
        let converter = self.converter();
        self.degrees[PickerType::Hours.index()] = converter.degrees_for_hour(hour);
        self.am_pm = AmPm::for_hour(hour);
        self.is_on_inner_circle = converter.inner_circle_for_hour(hour);
    }

    /// # Panics
    ///
    /// Panics if `minute >= 60`.
    pub fn set_minute(&mut self, minute: u8) {
        assert!(minute < MINUTES_IN_HOUR, "minute {minute} is outside 0..60");
        self.degrees[PickerType::Minutes.index()] = self.converter().degrees_for_minute(minute);
    }

    pub fn set_am_pm(&mut self, am_pm: AmPm) {
        self.am_pm = am_pm;
    }

    /// Switches the hour mode, keeping the selected 24-hour value.
    pub fn set_24_hour(&mut self, is_24_hour: bool) {
        if self.is_24_hour == is_24_hour {
            return;
        }
        let hour = self.hour();
        self.is_24_hour = is_24_hour;
        self.set_hour(hour);
    }

    /// Writes a snapped dial position for `picker_type`; the ring flag only
    /// applies to hours. Returns `true` if anything changed.
    pub fn apply_snapped(
        &mut self,
        picker_type: PickerType,
        degrees: u16,
        inner_circle: bool,
    ) -> bool {
        debug_assert!(degrees < 360);
        let slot = &mut self.degrees[picker_type.index()];
        let mut changed = *slot != degrees;
        *slot = degrees;
        if picker_type == PickerType::Hours {
            changed |= self.is_on_inner_circle != inner_circle;
            self.is_on_inner_circle = inner_circle;
        }
        changed
    }
}

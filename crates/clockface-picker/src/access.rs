use clockface_core::*;

use crate::picker::{ChangeResult, RadialPicker};

const MINUTE_STEP: i32 = 5;

impl RadialPicker {
    /// Value a screen reader should announce for the dial position under
    /// `point`, without touching the selection.
    ///
    /// Hours read 1–12 in 12-hour mode and 0–23 in 24-hour mode. Minutes snap
    /// to the nearest 5, unless the touch is closer to the current minute.
    pub fn value_at(&self, point: Vec2) -> Option<u8> {
        let hit = self.hit_test(point, true)?;
        let converter = self.selection().converter();
        let snapped = snap_to_hour(hit.degrees, SnapBias::Nearest).rem_euclid(360) as u16;

        let value = match self.current_item_showing() {
            PickerType::Hours => {
                let hour = converter.hour_for_degrees(snapped, self.inner_circle_at(hit.distance));
                if self.is_24_hour() {
                    hour
                } else {
                    converter.hour_24_to_12(hour)
                }
            }
            PickerType::Minutes => {
                let current = self.current_minute() as u16;
                let touched = converter.minute_for_degrees(hit.degrees) as u16;
                let snapped = converter.minute_for_degrees(snapped) as u16;
                let max = MINUTES_IN_HOUR as u16;
                if circular_diff(current, touched, max) < circular_diff(snapped, touched, max) {
                    current as u8
                } else {
                    snapped as u8
                }
            }
        };
        Some(value)
    }

    /// Steps the shown value by `step` (hours by 1, minutes by 5), clamped to
    /// the dial's range. 12-hour steps stay in the current half of the day.
    pub fn adjust(&mut self, step: i32) -> ChangeResult {
        let converter = self.selection().converter();
        match self.current_item_showing() {
            PickerType::Hours => {
                let hour = self.current_hour();
                let (initial, min, max) = if self.is_24_hour() {
                    (hour as i32, 0, 23)
                } else {
                    (converter.hour_24_to_12(hour) as i32, 1, 12)
                };
                let next = initial.saturating_add(step).clamp(min, max) as u8;
                let hour = if self.is_24_hour() {
                    next
                } else {
                    converter.hour_12_to_24(next)
                };
                self.set_current_hour(hour)
            }
            PickerType::Minutes => {
                let initial = self.current_minute() as i32 / MINUTE_STEP;
                let next = initial
                    .saturating_add(step)
                    .saturating_mul(MINUTE_STEP)
                    .clamp(0, 55);
                self.set_current_minute(next as u8)
            }
        }
    }
}

//! Touch handling for the radial picker.
//!
//! A gesture is a down, any number of moves, and an up (or a cancel). Moves
//! and the up each hit-test the sample against the active ring, snap it and
//! commit the result straight into the selection. The up additionally asks
//! the host to auto-advance from hours to minutes, and forces a selection
//! when nothing changed during the gesture so a plain tap still gets
//! feedback.

use std::rc::Rc;

use clockface_core::*;

use crate::config::{PickerConfig, RingGeometry};

/// A value picked on the dial, as reported to the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueSelected {
    pub picker_type: PickerType,
    /// Hour (0-23) or minute (0-59).
    pub value: u8,
    /// The host should switch from hours to minutes.
    pub auto_advance: bool,
}

/// Outcome of one input sample or setter call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeResult {
    pub consumed: bool,
    pub value_changed: bool,
    /// Tap-without-drag confirmation of an unchanged value.
    pub forced: bool,
    pub haptic: bool,
    pub invalidate: bool,
    pub selection: Option<ValueSelected>,
}

impl ChangeResult {
    fn ignored() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }
}

pub struct RadialPicker {
    selection: TimeSelection,
    geometry: RingGeometry,
    snap: &'static SnapTable,
    showing: PickerType,
    constrain_outside: bool,
    input_enabled: bool,

    on_value_selected: Option<Rc<dyn Fn(ValueSelected)>>,
    on_haptic_feedback: Option<Rc<dyn Fn()>>,
    on_invalidate: Option<Rc<dyn Fn()>>,

    // Gesture state
    gesture_start: Option<Vec2>,
    active_pointer: Option<PointerId>,
    changed_during_touch: bool,
}

impl RadialPicker {
    pub fn new(config: PickerConfig) -> Result<Self, PickerError> {
        let time = config.initial_time()?;
        let geometry = config.geometry.validated()?;
        Ok(Self {
            selection: TimeSelection::new(time, config.is_24_hour),
            geometry,
            snap: SnapTable::shared(),
            showing: PickerType::Hours,
            constrain_outside: config.constrain_outside,
            input_enabled: true,
            on_value_selected: None,
            on_haptic_feedback: None,
            on_invalidate: None,
            gesture_start: None,
            active_pointer: None,
            changed_during_touch: false,
        })
    }

    pub fn on_value_selected(mut self, f: impl Fn(ValueSelected) + 'static) -> Self {
        self.on_value_selected = Some(Rc::new(f));
        self
    }

    pub fn on_haptic_feedback(mut self, f: impl Fn() + 'static) -> Self {
        self.on_haptic_feedback = Some(Rc::new(f));
        self
    }

    pub fn on_invalidate(mut self, f: impl Fn() + 'static) -> Self {
        self.on_invalidate = Some(Rc::new(f));
        self
    }

    pub fn selection(&self) -> &TimeSelection {
        &self.selection
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    /// Applies new radii after a host relayout.
    pub fn set_geometry(&mut self, geometry: RingGeometry) -> Result<(), PickerError> {
        self.geometry = geometry.validated()?;
        self.invalidate();
        Ok(())
    }

    pub fn current_hour(&self) -> u8 {
        self.selection.hour()
    }

    pub fn current_minute(&self) -> u8 {
        self.selection.minute()
    }

    pub fn am_pm(&self) -> AmPm {
        self.selection.am_pm()
    }

    pub fn is_24_hour(&self) -> bool {
        self.selection.is_24_hour()
    }

    pub fn is_on_inner_circle(&self) -> bool {
        self.selection.is_on_inner_circle()
    }

    pub fn selection_degrees(&self, picker_type: PickerType) -> u16 {
        self.selection.degrees(picker_type)
    }

    pub fn current_item_showing(&self) -> PickerType {
        self.showing
    }

    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn is_in_gesture(&self) -> bool {
        self.gesture_start.is_some()
    }

    /// Disabling input drops any gesture in progress; its up never arrives.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        if !enabled {
            self.end_gesture();
        }
    }

    pub fn set_constrain_outside(&mut self, constrain: bool) {
        self.constrain_outside = constrain;
    }

    pub fn set_current_item_showing(&mut self, picker_type: PickerType) {
        if self.showing != picker_type {
            log::debug!("showing {picker_type:?}");
            self.showing = picker_type;
            self.invalidate();
        }
    }

    /// Resets the selection without notifying the listener.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= 24` or `minute >= 60`.
    pub fn initialize(&mut self, hour: u8, minute: u8, is_24_hour: bool) {
        self.selection.set_24_hour(is_24_hour);
        self.selection.set_hour(hour);
        self.selection.set_minute(minute);
        self.invalidate();
    }

    pub fn set_24_hour_mode(&mut self, is_24_hour: bool) {
        if self.selection.is_24_hour() != is_24_hour {
            self.selection.set_24_hour(is_24_hour);
            self.invalidate();
        }
    }

    /// # Panics
    ///
    /// Panics if `hour >= 24`.
    pub fn set_current_hour(&mut self, hour: u8) -> ChangeResult {
        let before = self.selection.clone();
        self.selection.set_hour(hour);
        self.programmatic_change(PickerType::Hours, hour, before)
    }

    /// # Panics
    ///
    /// Panics if `minute >= 60`.
    pub fn set_current_minute(&mut self, minute: u8) -> ChangeResult {
        let before = self.selection.clone();
        self.selection.set_minute(minute);
        self.programmatic_change(PickerType::Minutes, minute, before)
    }

    /// Moves the hour into the other half of the day in 12-hour mode; the
    /// listener hears the resulting hour.
    pub fn set_am_pm(&mut self, am_pm: AmPm) -> ChangeResult {
        let before = self.selection.clone();
        self.selection.set_am_pm(am_pm);
        let hour = self.selection.hour();
        self.programmatic_change(PickerType::Hours, hour, before)
    }

    fn programmatic_change(
        &mut self,
        picker_type: PickerType,
        value: u8,
        before: TimeSelection,
    ) -> ChangeResult {
        let selected = ValueSelected {
            picker_type,
            value,
            auto_advance: false,
        };
        self.invalidate();
        self.notify(selected);
        ChangeResult {
            consumed: true,
            value_changed: before != self.selection,
            forced: false,
            haptic: false,
            invalidate: true,
            selection: Some(selected),
        }
    }

    /// Dispatches `event` to the touch handlers. While a gesture is running,
    /// samples from any pointer other than the one that started it are
    /// consumed without effect.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> ChangeResult {
        if let Some(active) = self.active_pointer
            && active != event.id
        {
            log::trace!("{:?} ignored: gesture owned by {active:?}", event.id);
            return ChangeResult::ignored();
        }
        match event.phase {
            PointerPhase::Down => {
                let result = self.handle_touch_down(event.position);
                if self.is_in_gesture() {
                    self.active_pointer = Some(event.id);
                }
                result
            }
            PointerPhase::Move => self.handle_touch_move(event.position),
            PointerPhase::Up => self.handle_touch_up(event.position),
            PointerPhase::Cancel => self.handle_touch_cancel(),
        }
    }

    pub fn handle_touch_down(&mut self, point: Vec2) -> ChangeResult {
        if !self.input_enabled {
            log::warn!("touch down at {point:?} ignored: input disabled");
            return ChangeResult::ignored();
        }
        log::debug!("gesture start at {point:?}");
        self.gesture_start = Some(point);
        self.changed_during_touch = false;
        ChangeResult::ignored()
    }

    pub fn handle_touch_move(&mut self, point: Vec2) -> ChangeResult {
        if !self.input_enabled {
            return ChangeResult::ignored();
        }
        let result = self.handle_touch_input(point, false, false);
        self.changed_during_touch |= result.value_changed;
        result
    }

    pub fn handle_touch_up(&mut self, point: Vec2) -> ChangeResult {
        if !self.input_enabled {
            return ChangeResult::ignored();
        }
        let force_selection = !self.changed_during_touch;
        let result = self.handle_touch_input(point, force_selection, true);
        log::debug!(
            "gesture end at {point:?} (from {:?}), changed={}",
            self.gesture_start,
            self.changed_during_touch || result.value_changed
        );
        self.end_gesture();
        result
    }

    /// Ends the gesture without a final selection. Values already committed
    /// by earlier moves stay.
    pub fn handle_touch_cancel(&mut self) -> ChangeResult {
        if self.gesture_start.is_some() {
            log::debug!("gesture cancelled");
        }
        self.end_gesture();
        ChangeResult::ignored()
    }

    fn end_gesture(&mut self) {
        self.gesture_start = None;
        self.active_pointer = None;
        self.changed_during_touch = false;
    }

    /// Angle and distance of `point` if it falls on the active ring.
    ///
    /// Touches inside the ring's inner edge always miss; touches beyond the
    /// outer edge miss only when `constrain_outside` is set.
    pub fn hit_test(&self, point: Vec2, constrain_outside: bool) -> Option<Polar> {
        let hit = polar(point, self.geometry.center);
        let (inner, outer) = self
            .geometry
            .bounds(self.showing, self.selection.is_24_hour());
        if hit.distance < inner || (constrain_outside && hit.distance > outer) {
            return None;
        }
        Some(hit)
    }

    /// Whether a touch at `distance` picks the inner (13–23, 0) hour ring.
    pub(crate) fn inner_circle_at(&self, distance: f32) -> bool {
        self.selection.is_24_hour()
            && self.showing == PickerType::Hours
            && distance <= self.geometry.halfway_dist()
    }

    /// Snapped, stored-form angle for a raw touch angle on the active dial.
    pub(crate) fn snap_degrees(&self, degrees: u16) -> u16 {
        match self.showing {
            PickerType::Hours => snap_to_hour(degrees, SnapBias::Nearest).rem_euclid(360) as u16,
            PickerType::Minutes => self.snap.snap(degrees) % 360,
        }
    }

    fn handle_touch_input(
        &mut self,
        point: Vec2,
        force_selection: bool,
        auto_advance: bool,
    ) -> ChangeResult {
        let Some(hit) = self.hit_test(point, self.constrain_outside) else {
            log::debug!("touch at {point:?} outside the {:?} ring", self.showing);
            return ChangeResult::ignored();
        };

        let picker_type = self.showing;
        let inner_circle = self.inner_circle_at(hit.distance);
        let snapped = self.snap_degrees(hit.degrees);
        let value_changed = self
            .selection
            .apply_snapped(picker_type, snapped, inner_circle);
        let selected = ValueSelected {
            picker_type,
            value: self.selection.value(picker_type),
            auto_advance,
        };
        log::trace!(
            "touch {}° r={:.1} -> {}° {:?}={} changed={value_changed}",
            hit.degrees,
            hit.distance,
            snapped,
            picker_type,
            selected.value
        );

        self.notify(selected);

        let feedback = value_changed || force_selection;
        if feedback {
            if let Some(cb) = &self.on_haptic_feedback {
                cb();
            }
            self.invalidate();
        }

        ChangeResult {
            consumed: true,
            value_changed,
            forced: force_selection && !value_changed,
            haptic: feedback,
            invalidate: feedback,
            selection: Some(selected),
        }
    }

    fn notify(&self, selected: ValueSelected) {
        if let Some(cb) = &self.on_value_selected {
            cb(selected);
        }
    }

    fn invalidate(&self) {
        if let Some(cb) = &self.on_invalidate {
            cb();
        }
    }
}

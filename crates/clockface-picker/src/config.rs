use clockface_core::*;

/// Radii of the clock face, in the host's pixel units.
///
/// Numerals sit `text_inset_*` inside the face edge; the selector circle
/// drawn over a numeral has radius `selector_radius`, which is also the
/// slack a touch gets on either side of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingGeometry {
    pub center: Vec2,
    pub circle_radius: f32,
    /// Outer hour ring (1–12).
    pub text_inset_hours: f32,
    /// Inner hour ring (13–23, 0), 24-hour mode only.
    pub text_inset_inner: f32,
    pub text_inset_minutes: f32,
    pub selector_radius: f32,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            center: Vec2::new(128.0, 128.0),
            circle_radius: 128.0,
            text_inset_hours: 22.0,
            text_inset_inner: 58.0,
            text_inset_minutes: 22.0,
            selector_radius: 20.0,
        }
    }
}

impl RingGeometry {
    /// Centers the face in the host's box, keeping the insets.
    pub fn laid_out(self, size: Size) -> Result<Self, PickerError> {
        Self {
            center: Vec2::new(size.width / 2.0, size.height / 2.0),
            circle_radius: size.width.min(size.height) / 2.0,
            ..self
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self, PickerError> {
        let values = [
            self.center.x,
            self.center.y,
            self.circle_radius,
            self.text_inset_hours,
            self.text_inset_inner,
            self.text_inset_minutes,
            self.selector_radius,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PickerError::InvalidGeometry("non-finite value".into()));
        }
        if self.circle_radius <= 0.0 || self.selector_radius <= 0.0 {
            return Err(PickerError::InvalidGeometry(format!(
                "radius {} and selector radius {} must be positive",
                self.circle_radius, self.selector_radius
            )));
        }
        if self.text_inset_hours < 0.0 || self.text_inset_minutes < 0.0 {
            return Err(PickerError::InvalidGeometry("negative text inset".into()));
        }
        if self.text_inset_inner <= self.text_inset_hours {
            return Err(PickerError::InvalidGeometry(format!(
                "inner ring inset {} must exceed outer ring inset {}",
                self.text_inset_inner, self.text_inset_hours
            )));
        }
        if self.min_dist_inner() < 0.0 {
            return Err(PickerError::InvalidGeometry(format!(
                "inner ring at inset {} does not fit in radius {}",
                self.text_inset_inner, self.circle_radius
            )));
        }
        Ok(self)
    }

    pub fn min_dist_inner(&self) -> f32 {
        self.circle_radius - self.text_inset_inner - self.selector_radius
    }

    pub fn max_dist_outer(&self) -> f32 {
        self.circle_radius - self.text_inset_hours + self.selector_radius
    }

    /// Distance splitting the inner hour ring from the outer one.
    pub fn halfway_dist(&self) -> f32 {
        self.circle_radius - (self.text_inset_hours + self.text_inset_inner) / 2.0
    }

    /// Touchable annulus `(inner, outer)` for the given dial.
    pub fn bounds(&self, picker_type: PickerType, is_24_hour: bool) -> (f32, f32) {
        match (picker_type, is_24_hour) {
            (PickerType::Hours, true) => (self.min_dist_inner(), self.max_dist_outer()),
            (PickerType::Hours, false) => self.annulus(self.text_inset_hours),
            (PickerType::Minutes, _) => self.annulus(self.text_inset_minutes),
        }
    }

    fn annulus(&self, inset: f32) -> (f32, f32) {
        let ring = self.circle_radius - inset;
        (ring - self.selector_radius, ring + self.selector_radius)
    }
}

/// Construction-time settings for [`RadialPicker`](crate::RadialPicker).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    pub is_24_hour: bool,
    /// Initial hour (0-23); the current UTC hour when unset.
    pub hour: Option<u8>,
    /// Initial minute (0-59); the current UTC minute when unset.
    pub minute: Option<u8>,
    pub geometry: RingGeometry,
    /// Reject touches beyond the outer edge of the active ring.
    pub constrain_outside: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            is_24_hour: false,
            hour: None,
            minute: None,
            geometry: RingGeometry::default(),
            constrain_outside: true,
        }
    }
}

impl PickerConfig {
    pub fn initial_time(&self) -> Result<ClockTime, PickerError> {
        let now = ClockTime::now_utc();
        ClockTime::new(
            self.hour.unwrap_or(now.hour()),
            self.minute.unwrap_or(now.minute()),
        )
    }
}

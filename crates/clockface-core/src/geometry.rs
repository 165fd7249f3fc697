use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A point expressed relative to a center: radial distance plus a clock angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub distance: f32,
    /// Whole degrees clockwise from 12 o'clock, in `0..360`.
    pub degrees: u16,
}

/// Measures `point` around `center`.
///
/// The angle is the `atan2` of the offset shifted by a quarter turn so that
/// 0 points north, rounded half-up to whole degrees.
pub fn polar(point: Vec2, center: Vec2) -> Polar {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let distance = point.distance_to(center);

    let mut raw = (dy.atan2(dx) + FRAC_PI_2).to_degrees();
    if raw < 0.0 {
        raw += 360.0;
    }
    // Anything rounding up to 360 is back at 12 o'clock.
    let degrees = (raw + 0.5).floor() as u32 % 360;

    Polar {
        distance,
        degrees: degrees as u16,
    }
}

/// Shortest distance between two positions on a cycle of length `max`.
pub fn circular_diff(first: u16, second: u16, max: u16) -> u16 {
    let diff = first.abs_diff(second);
    let midpoint = max / 2;
    if diff > midpoint { max - diff } else { diff }
}

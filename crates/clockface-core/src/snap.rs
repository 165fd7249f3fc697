//! Angle snapping for the clock face.
//!
//! Minutes use a lookup table over every whole input degree. The table maps
//! onto the 60 minute positions (multiples of 6°) but hands the 12 numbered
//! positions a much wider catchment than the unnumbered ones, so a drag
//! settles on a printed numeral unless the finger is clearly between two.
//! Hours only ever land on the 12 numbered positions and use plain rounding.

use std::sync::OnceLock;

pub const DEGREES_FOR_ONE_HOUR: u16 = 30;
pub const DEGREES_FOR_ONE_MINUTE: u16 = 6;

const TABLE_LEN: usize = 361;
const FIRST_BAND: u16 = 8;
const NUMBERED_BAND: u16 = 14;
const UNNUMBERED_BAND: u16 = 4;
const SEAM_BAND: u16 = 7;

/// Weighted degree-to-degree snap table for minute selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapTable {
    entries: [u16; TABLE_LEN],
}

impl SnapTable {
    /// Walks inputs `0..=360`, handing each output position its band of
    /// consecutive inputs before moving to the next position.
    pub fn build() -> Self {
        let mut entries = [0u16; TABLE_LEN];
        let mut snapped = 0u16;
        let mut count = 1u16;
        let mut expected = FIRST_BAND;

        for entry in entries.iter_mut() {
            *entry = snapped;
            if count == expected {
                snapped += DEGREES_FOR_ONE_MINUTE;
                expected = if snapped == 360 {
                    SEAM_BAND
                } else if snapped % DEGREES_FOR_ONE_HOUR == 0 {
                    NUMBERED_BAND
                } else {
                    UNNUMBERED_BAND
                };
                count = 1;
            } else {
                count += 1;
            }
        }

        Self { entries }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static SnapTable {
        static TABLE: OnceLock<SnapTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            log::debug!("building minute snap table");
            SnapTable::build()
        })
    }

    /// Snapped output for `degrees` in `0..=360`.
    ///
    /// Inputs near the top of the dial snap to 360; callers reduce modulo 360
    /// before storing a selection.
    ///
    /// # Panics
    ///
    /// Panics if `degrees > 360`.
    pub fn snap(&self, degrees: u16) -> u16 {
        assert!(
            degrees as usize <= 360,
            "snap input {degrees} outside 0..=360"
        );
        self.entries[degrees as usize]
    }

    /// All inputs that snap to `output`.
    pub fn inputs_for(&self, output: u16) -> impl Iterator<Item = u16> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| **e == output)
            .map(|(i, _)| i as u16)
    }

    pub fn entries(&self) -> &[u16] {
        &self.entries
    }
}

impl Default for SnapTable {
    fn default() -> Self {
        Self::build()
    }
}

/// Rounding direction for [`snap_to_hour`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapBias {
    /// Closer multiple of 30; ties go up.
    #[default]
    Nearest,
    /// Always the next multiple of 30 above.
    Up,
    /// Always the multiple of 30 below, stepping down a slot when aligned.
    Down,
}

/// Rounds `degrees` to a multiple of 30.
///
/// The result can be 360 (or -30 for [`SnapBias::Down`] at 0); reduce it with
/// `rem_euclid(360)` to get a stored selection.
pub fn snap_to_hour(degrees: u16, bias: SnapBias) -> i32 {
    let step = DEGREES_FOR_ONE_HOUR as i32;
    let degrees = degrees as i32;
    let mut floor = (degrees / step) * step;
    let ceiling = floor + step;

    match bias {
        SnapBias::Up => ceiling,
        SnapBias::Down => {
            if degrees == floor {
                floor -= step;
            }
            floor
        }
        SnapBias::Nearest => {
            if degrees - floor < ceiling - degrees {
                floor
            } else {
                ceiling
            }
        }
    }
}

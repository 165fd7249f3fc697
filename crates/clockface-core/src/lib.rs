//! # Clock-face math
//!
//! The pieces a radial time picker needs before any touch handling:
//!
//! - [`geometry`] — points and the polar angle/distance of a point around a
//!   center, with 0° at 12 o'clock and angles growing clockwise.
//! - [`snap`] — the weighted 60-position minute table and 30° hour rounding.
//! - [`convert`] — degrees ⇄ hour/minute values for 12- and 24-hour dials.
//! - [`selection`] — the stored hour and minute positions.
//!
//! ```rust
//! use clockface_core::*;
//!
//! let center = Vec2::new(100.0, 100.0);
//! let p = polar(Vec2::new(200.0, 100.0), center);
//! assert_eq!(p.degrees, 90);
//!
//! let minutes = SnapTable::shared().snap(37);
//! assert_eq!(minutes, 30);
//!
//! let conv = ValueConverter::new(true, AmPm::Am);
//! assert_eq!(conv.hour_for_degrees(30, true), 13);
//! ```

pub mod convert;
pub mod error;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod snap;
pub mod tests;

pub use convert::*;
pub use error::PickerError;
pub use geometry::*;
pub use input::*;
pub use selection::*;
pub use snap::*;

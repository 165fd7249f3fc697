//! Radial hour/minute picker state, driven by touch samples.
//!
//! ```rust
//! use clockface_core::{PickerType, Vec2};
//! use clockface_picker::*;
//!
//! let mut picker = RadialPicker::new(PickerConfig {
//!     hour: Some(9),
//!     minute: Some(0),
//!     ..Default::default()
//! })
//! .unwrap()
//! .on_value_selected(|v| println!("{:?} -> {}", v.picker_type, v.value));
//!
//! // Tap the 3 o'clock numeral: 106px right of the default center.
//! let three = Vec2::new(128.0 + 106.0, 128.0);
//! picker.handle_touch_down(three);
//! let result = picker.handle_touch_up(three);
//! assert_eq!(picker.current_hour(), 3);
//! assert!(result.selection.unwrap().auto_advance);
//!
//! picker.set_current_item_showing(PickerType::Minutes);
//! ```

pub mod access;
pub mod config;
pub mod picker;

pub use config::*;
pub use picker::*;

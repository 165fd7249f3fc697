use crate::Vec2;

/// Identifies one finger (or the mouse) for the length of a gesture.
///
/// Hosts that see several pointers at once pass each one's id; the picker
/// follows the pointer that went down first and ignores the rest until it
/// lifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerId(pub u64);

/// Phase of a single pointer sample within a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    /// A sample from the primary pointer.
    pub fn touch(phase: PointerPhase, position: Vec2) -> Self {
        Self {
            id: PointerId::default(),
            phase,
            position,
        }
    }

    pub fn with_id(self, id: PointerId) -> Self {
        Self { id, ..self }
    }
}

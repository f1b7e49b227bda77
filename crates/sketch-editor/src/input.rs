//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and pen pointer events into the four gesture
//! events the tool state machine consumes. Only the primary pointer's
//! surface-local position is carried.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f32, y: f32 },
    /// Pointer moved, with or without a press.
    PointerMove { x: f32, y: f32 },
    /// Pointer released.
    PointerUp { x: f32, y: f32 },
    /// Pointer left the surface; any active gesture is abandoned.
    PointerLeave,
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }
}

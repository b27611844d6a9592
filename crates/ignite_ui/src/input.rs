//! Pointer input for UI.
//!
//! The host feeds mouse events into a [`PointerTracker`] (or implements
//! [`PointerSource`] over its own input system). Once per frame the layout
//! captures an [`InputState`] snapshot and hands it down the control tree.

use crate::geometry::{Pos, Rect, Size};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

impl MouseButton {
    /// Returns the bit mask for a button.
    const fn mask(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Middle => 4,
        }
    }
}

/// Source of pointer state, polled once per frame.
pub trait PointerSource {
    /// Current pointer position in viewport-local pixels.
    fn pointer_position(&self) -> Pos;

    /// Returns true while the primary button is held.
    fn is_primary_down(&self) -> bool;
}

/// Records host mouse events and exposes them as a [`PointerSource`].
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: Pos,
    buttons_down: u8,
}

impl PointerTracker {
    /// Creates a tracker with the pointer at the origin and no buttons held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates mouse position.
    pub fn set_mouse_pos(&mut self, x: i32, y: i32) {
        self.position = Pos::new(x, y);
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        self.buttons_down |= button.mask();
    }

    /// Records a mouse button release.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        self.buttons_down &= !button.mask();
    }

    /// Returns true if the mouse button is currently held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        (self.buttons_down & button.mask()) != 0
    }
}

impl PointerSource for PointerTracker {
    fn pointer_position(&self) -> Pos {
        self.position
    }

    fn is_primary_down(&self) -> bool {
        self.mouse_down(MouseButton::Left)
    }
}

/// Input snapshot for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    /// Pointer position, or [`Pos::OUTSIDE`] when off the viewport.
    pub pointer: Pos,
    /// False when the pointer is off the viewport; nothing is hovered then,
    /// even a control whose frame covers [`Pos::OUTSIDE`].
    pub pointer_inside: bool,
    /// Primary button held.
    pub primary_down: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::idle()
    }
}

impl InputState {
    /// A snapshot with no pointer and no buttons held.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            pointer: Pos::OUTSIDE,
            pointer_inside: false,
            primary_down: false,
        }
    }

    /// Creates a snapshot with the pointer inside the viewport.
    #[must_use]
    pub const fn new(pointer: Pos, primary_down: bool) -> Self {
        Self {
            pointer,
            pointer_inside: true,
            primary_down,
        }
    }

    /// Returns true if the pointer is inside the viewport and over `rect`.
    #[must_use]
    pub const fn is_over(&self, rect: Rect) -> bool {
        self.pointer_inside && rect.contains(self.pointer.x, self.pointer.y)
    }

    /// Polls the source and normalizes the pointer against the viewport.
    ///
    /// Positions outside `[0, w) × [0, h)` become [`Pos::OUTSIDE`].
    #[must_use]
    pub fn capture(source: &dyn PointerSource, viewport: Size) -> Self {
        let Pos { x, y } = source.pointer_position();
        let inside = x >= 0 && x < viewport.w && y >= 0 && y < viewport.h;

        Self {
            pointer: if inside { Pos::new(x, y) } else { Pos::OUTSIDE },
            pointer_inside: inside,
            primary_down: source.is_primary_down(),
        }
    }
}

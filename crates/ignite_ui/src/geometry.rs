//! Geometry primitives in toolkit-local pixel coordinates.
//!
//! All values are whole pixels. Sizes never go negative: every constructor
//! and arithmetic helper that could produce a negative extent clamps to zero.

/// A point in toolkit-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Pos {
    /// Pointer position used when the pointer is outside the viewport.
    ///
    /// Hit tests go through [`crate::InputState::is_over`], which also checks
    /// the inside flag, so a frame covering this point is still not hovered.
    pub const OUTSIDE: Self = Self { x: -1, y: -1 };

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by the given delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A 2D extent, used both as a measurement and as a layout constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Size {
    /// Zero extent.
    pub const ZERO: Self = Self { w: 0, h: 0 };

    /// Creates a size, clamping negative extents to zero.
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self {
            w: if w < 0 { 0 } else { w },
            h: if h < 0 { 0 } else { h },
        }
    }

    /// Returns true if either extent is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Shrinks both axes, clamping at zero.
    #[must_use]
    pub const fn shrink(self, dw: i32, dh: i32) -> Self {
        Self::new(self.w.saturating_sub(dw), self.h.saturating_sub(dh))
    }

    /// Grows both axes, saturating at `i32::MAX`.
    #[must_use]
    pub const fn grow(self, dw: i32, dh: i32) -> Self {
        Self::new(self.w.saturating_add(dw), self.h.saturating_add(dh))
    }
}

/// A rectangle in toolkit-local coordinates (a control's frame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        w: 0,
        h: 0,
    };

    /// Creates a new rectangle. Negative extents are clamped to zero.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        let size = Size::new(w, h);
        Self {
            x,
            y,
            w: size.w,
            h: size.h,
        }
    }

    /// Creates a rectangle from an origin and a size.
    #[must_use]
    pub const fn from_pos_size(pos: Pos, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.w, size.h)
    }

    /// Returns the extent.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Returns the right edge (exclusive).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Returns the bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Returns true if the rectangle has no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Returns true if the point is inside `[x, x+w) × [y, y+h)`.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns this rectangle moved by the given delta.
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Shrinks the rectangle by the given amount on all sides.
    #[must_use]
    pub const fn shrink(&self, amount: i32) -> Self {
        let twice = amount.saturating_mul(2);
        Self::new(
            self.x.saturating_add(amount),
            self.y.saturating_add(amount),
            self.w.saturating_sub(twice),
            self.h.saturating_sub(twice),
        )
    }
}

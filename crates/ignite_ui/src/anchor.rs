//! Anchor-based positioning.

use crate::geometry::{Pos, Size};

/// The point of a control's bounding box that coincides with its declared
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Top-left corner (no offset).
    #[default]
    TopLeft,
    /// Middle of the top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    Left,
    /// Center of the box.
    Center,
    /// Middle of the right edge.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    Bottom,
    /// Bottom-right corner.
    BottomRight,
}

/// Horizontal or vertical placement of an anchor along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Leading,
    Middle,
    Trailing,
}

impl Edge {
    /// Offset to subtract from the declared coordinate. Half extents floor.
    const fn offset(self, extent: i32) -> i32 {
        match self {
            Self::Leading => 0,
            Self::Middle => extent.div_euclid(2),
            Self::Trailing => extent,
        }
    }
}

impl Anchor {
    /// All nine anchors, row by row.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
    ];

    const fn edges(self) -> (Edge, Edge) {
        match self {
            Self::TopLeft => (Edge::Leading, Edge::Leading),
            Self::Top => (Edge::Middle, Edge::Leading),
            Self::TopRight => (Edge::Trailing, Edge::Leading),
            Self::Left => (Edge::Leading, Edge::Middle),
            Self::Center => (Edge::Middle, Edge::Middle),
            Self::Right => (Edge::Trailing, Edge::Middle),
            Self::BottomLeft => (Edge::Leading, Edge::Trailing),
            Self::Bottom => (Edge::Middle, Edge::Trailing),
            Self::BottomRight => (Edge::Trailing, Edge::Trailing),
        }
    }

    /// Resolves a declared position into the top-left origin of a box of
    /// the given size.
    #[must_use]
    pub const fn resolve(self, position: Pos, size: Size) -> Pos {
        let (horizontal, vertical) = self.edges();
        position.offset(-horizontal.offset(size.w), -vertical.offset(size.h))
    }
}

/// Maps `(declared position, anchor, resolved size)` to an origin.
#[must_use]
pub const fn resolve_origin(position: Pos, anchor: Anchor, size: Size) -> Pos {
    anchor.resolve(position, size)
}

//! Root layout: places top-level controls and drives the frame.

use tracing::debug;

use crate::anchor::Anchor;
use crate::control::{Control, ControlId, FrameEvents};
use crate::geometry::{Pos, Size};
use crate::input::{InputState, PointerSource};
use crate::render::Renderer;

/// How one axis of a top-level control is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extent {
    /// Use the measured size.
    #[default]
    Wrap,
    /// Force this many pixels; also used as the measure constraint.
    Fixed(i32),
}

impl Extent {
    const fn constraint(self, available: i32) -> i32 {
        match self {
            Self::Wrap => available,
            Self::Fixed(px) => px,
        }
    }

    const fn resolve(self, measured: i32) -> i32 {
        match self {
            Self::Wrap => measured,
            Self::Fixed(px) => px,
        }
    }
}

/// Where and how a top-level control is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Declared position.
    pub position: Pos,
    /// Which point of the control sits on `position`.
    pub anchor: Anchor,
    /// Width policy.
    pub width: Extent,
    /// Height policy.
    pub height: Extent,
}

impl Placement {
    /// Places a control at `position` with wrap sizing on both axes.
    #[must_use]
    pub const fn new(position: Pos, anchor: Anchor) -> Self {
        Self {
            position,
            anchor,
            width: Extent::Wrap,
            height: Extent::Wrap,
        }
    }

    /// Sets the width policy.
    #[must_use]
    pub const fn with_width(mut self, width: Extent) -> Self {
        self.width = width;
        self
    }

    /// Sets the height policy.
    #[must_use]
    pub const fn with_height(mut self, height: Extent) -> Self {
        self.height = height;
        self
    }
}

#[derive(Debug)]
struct Entry {
    control: Control,
    placement: Placement,
}

/// Owner of the top-level controls of a scene.
#[derive(Debug, Default)]
pub struct Layout {
    entries: Vec<Entry>,
    viewport: Size,
}

impl Layout {
    /// Creates an empty layout with no viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level control with wrap sizing.
    pub fn add_child(&mut self, control: Control, position: Pos, anchor: Anchor) -> ControlId {
        self.add_placed(control, Placement::new(position, anchor))
    }

    /// Adds a top-level control with an explicit placement.
    pub fn add_placed(&mut self, control: Control, placement: Placement) -> ControlId {
        let id = control.id();
        self.entries.push(Entry { control, placement });
        id
    }

    /// Returns the viewport given to the last `resize`.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Number of top-level controls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no top-level controls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates top-level controls in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Control> {
        self.entries.iter().map(|e| &e.control)
    }

    /// Measures and places every top-level control for a new viewport.
    pub fn resize(&mut self, w: i32, h: i32) {
        self.viewport = Size::new(w, h);
        if self.viewport.is_empty() {
            debug!(w, h, "empty viewport, layout idle");
            return;
        }
        debug!(w, h, children = self.entries.len(), "layout resize");

        for Entry { control, placement } in &mut self.entries {
            let constraint = Size::new(
                placement.width.constraint(self.viewport.w),
                placement.height.constraint(self.viewport.h),
            );
            let measured = control.measure(constraint);
            let size = Size::new(
                placement.width.resolve(measured.w),
                placement.height.resolve(measured.h),
            );
            let origin = placement.anchor.resolve(placement.position, size);
            control.set_frame(origin.x, origin.y, size.w, size.h);
        }
    }

    /// Polls the pointer once and advances every control.
    pub fn update(&mut self, dt: f32, pointer: &dyn PointerSource) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.viewport.is_empty() {
            return events;
        }

        let input = InputState::capture(pointer, self.viewport);
        for entry in &mut self.entries {
            entry.control.update(dt, &input, &mut events);
        }
        events
    }

    /// Draws every control in insertion order.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        if self.viewport.is_empty() {
            return;
        }
        for entry in &mut self.entries {
            entry.control.draw(renderer);
        }
    }

    /// Finds a control anywhere in the tree.
    #[must_use]
    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.entries.iter().find_map(|e| e.control.find(id))
    }

    /// Finds a control anywhere in the tree, mutably.
    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.entries.iter_mut().find_map(|e| e.control.find_mut(id))
    }

    /// Returns the deepest enabled control under the point, topmost first.
    #[must_use]
    pub fn control_at(&self, x: i32, y: i32) -> Option<&Control> {
        self.entries.iter().rev().find_map(|e| e.control.control_at(x, y))
    }
}

//! Core control types.
//!
//! A [`Control`] is a shared record (frame, minimum size, stretch policy,
//! enabled flag, interaction state) plus a [`ControlKind`] carrying the
//! per-kind behavior. Children are owned by value; there are no parent
//! links, so every traversal is top-down.

use std::fmt;

use crate::button::Button;
use crate::geometry::{Rect, Size};
use crate::input::InputState;
use crate::label::Label;
use crate::panel::Panel;
use crate::render::Renderer;

/// Unique identifier for a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub u64);

impl ControlId {
    /// Creates a new control ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-axis stretch policy (bitfield).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stretch(u8);

impl Stretch {
    /// Keep the minimum size on both axes.
    pub const NONE: Self = Self(0);
    /// Fill the available width.
    pub const HORIZONTAL: Self = Self(1 << 0);
    /// Fill the available height.
    pub const VERTICAL: Self = Self(1 << 1);
    /// Fill both axes.
    pub const ALL: Self = Self(Self::HORIZONTAL.0 | Self::VERTICAL.0);

    /// Returns true if every bit of `other` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns the union of both policies.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Interaction state, recomputed every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// Idle.
    #[default]
    Normal,
    /// Pointer over the control.
    Hover,
    /// Pressed while over the control.
    Active,
    /// Not accepting input.
    Disabled,
}

/// Events collected during one layout update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    clicked: Vec<ControlId>,
}

impl FrameEvents {
    /// Controls clicked this frame, in traversal order.
    #[must_use]
    pub fn clicked(&self) -> &[ControlId] {
        &self.clicked
    }

    /// Returns true if the control was clicked this frame.
    #[must_use]
    pub fn was_clicked(&self, id: ControlId) -> bool {
        self.clicked.contains(&id)
    }

    /// Returns true if nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clicked.is_empty()
    }

    pub(crate) fn push_click(&mut self, id: ControlId) {
        self.clicked.push(id);
    }
}

/// State shared by every control kind.
#[derive(Debug, Clone)]
pub struct ControlBase {
    /// Control identifier.
    pub id: ControlId,
    /// Resolved frame (zero until the first `set_frame`).
    pub frame: Rect,
    /// Intrinsic minimum size.
    pub min_size: Size,
    /// Stretch policy.
    pub stretch: Stretch,
    /// Accepts input.
    pub enabled: bool,
    /// Current interaction state.
    pub state: InteractionState,
}

impl ControlBase {
    /// Creates the shared record for a new control.
    #[must_use]
    pub fn new(id: ControlId, min_size: Size, stretch: Stretch) -> Self {
        Self {
            id,
            frame: Rect::ZERO,
            min_size,
            stretch,
            enabled: true,
            state: InteractionState::Normal,
        }
    }

    /// Default measurement: per axis, stretch to `max(constraint, min)` or
    /// keep `min(constraint, min)`.
    #[must_use]
    pub fn measure(&self, constraint: Size) -> Size {
        let constraint = Size::new(constraint.w, constraint.h);
        let axis = |bit: Stretch, available: i32, min: i32| {
            if self.stretch.contains(bit) {
                available.max(min)
            } else {
                available.min(min)
            }
        };

        Size::new(
            axis(Stretch::HORIZONTAL, constraint.w, self.min_size.w),
            axis(Stretch::VERTICAL, constraint.h, self.min_size.h),
        )
    }

    /// Returns true if the point is over an enabled control.
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> bool {
        self.enabled && self.frame.contains(x, y)
    }
}

/// The closed set of control kinds.
#[derive(Debug)]
pub enum ControlKind {
    /// Clickable button.
    Button(Button),
    /// Static text.
    Label(Label),
    /// Vertical stack container.
    Panel(Panel),
}

/// A node of the control tree.
#[derive(Debug)]
pub struct Control {
    base: ControlBase,
    kind: ControlKind,
}

impl Control {
    /// Wraps a kind with its shared record.
    #[must_use]
    pub fn new(base: ControlBase, kind: ControlKind) -> Self {
        let mut control = Self { base, kind };
        if let ControlKind::Button(button) = &mut control.kind {
            button.sync_enabled(&mut control.base);
        }
        control
    }

    /// Returns the control's ID.
    #[must_use]
    pub fn id(&self) -> ControlId {
        self.base.id
    }

    /// Returns the shared record.
    #[must_use]
    pub fn base(&self) -> &ControlBase {
        &self.base
    }

    /// Returns the kind-specific part.
    #[must_use]
    pub fn kind(&self) -> &ControlKind {
        &self.kind
    }

    /// Returns the resolved frame.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.base.frame
    }

    /// Returns the current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.base.state
    }

    /// Returns true if the control accepts input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.base.enabled
    }

    /// Enables or disables the control.
    ///
    /// Buttons with an enablement predicate re-evaluate it on the next
    /// update, which overrides this flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.base.enabled == enabled {
            return;
        }
        self.base.enabled = enabled;
        self.base.state = if enabled {
            InteractionState::Normal
        } else {
            InteractionState::Disabled
        };
        if let ControlKind::Button(button) = &mut self.kind {
            button.invalidate();
        }
    }

    /// Returns the desired size for the available space.
    #[must_use]
    pub fn measure(&self, constraint: Size) -> Size {
        let constraint = Size::new(constraint.w, constraint.h);
        match &self.kind {
            ControlKind::Button(_) => self.base.measure(constraint),
            ControlKind::Label(label) => label.measure(),
            ControlKind::Panel(panel) => panel.measure(&self.base, constraint),
        }
    }

    /// Stores the resolved frame and rebuilds cached visuals. Idempotent.
    pub fn set_frame(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.base.frame = Rect::new(x, y, w, h);
        match &mut self.kind {
            ControlKind::Button(button) => button.regenerate(&self.base),
            ControlKind::Label(_) => {}
            ControlKind::Panel(panel) => panel.arrange(&self.base),
        }
    }

    /// Returns self if the point is inside the frame and the control is
    /// enabled.
    #[must_use]
    pub fn hit_test(&self, x: i32, y: i32) -> Option<&Self> {
        self.base.hit(x, y).then_some(self)
    }

    /// Returns the deepest enabled control under the point.
    #[must_use]
    pub fn control_at(&self, x: i32, y: i32) -> Option<&Self> {
        let this = self.hit_test(x, y)?;
        if let ControlKind::Panel(panel) = &self.kind {
            if let Some(child) = panel.children().iter().rev().find_map(|c| c.control_at(x, y)) {
                return Some(child);
            }
        }
        Some(this)
    }

    /// Advances interaction state for one frame.
    pub fn update(&mut self, dt: f32, input: &InputState, events: &mut FrameEvents) {
        match &mut self.kind {
            ControlKind::Button(button) => button.update(&mut self.base, input, events),
            ControlKind::Label(_) => {}
            ControlKind::Panel(panel) => panel.update(&mut self.base, dt, input, events),
        }
    }

    /// Draws the control at its last frame. Draws nothing while unframed.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        if self.base.frame.is_empty() {
            return;
        }
        match &mut self.kind {
            ControlKind::Button(button) => button.draw(&self.base, renderer),
            ControlKind::Label(label) => label.draw(&self.base, renderer),
            ControlKind::Panel(panel) => panel.draw(&self.base, renderer),
        }
    }

    /// Finds a control by ID in this subtree.
    #[must_use]
    pub fn find(&self, id: ControlId) -> Option<&Self> {
        if self.base.id == id {
            return Some(self);
        }
        match &self.kind {
            ControlKind::Panel(panel) => panel.children().iter().find_map(|c| c.find(id)),
            _ => None,
        }
    }

    /// Finds a control by ID in this subtree, mutably.
    pub fn find_mut(&mut self, id: ControlId) -> Option<&mut Self> {
        if self.base.id == id {
            return Some(self);
        }
        match &mut self.kind {
            ControlKind::Panel(panel) => panel.children_mut().iter_mut().find_map(|c| c.find_mut(id)),
            _ => None,
        }
    }

    /// Returns the button if this control is one.
    #[must_use]
    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            ControlKind::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Returns the label if this control is one.
    #[must_use]
    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            ControlKind::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Returns the panel if this control is one.
    #[must_use]
    pub fn as_panel(&self) -> Option<&Panel> {
        match &self.kind {
            ControlKind::Panel(panel) => Some(panel),
            _ => None,
        }
    }
}

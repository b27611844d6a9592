//! Clickable button.
//!
//! ```text
//!            enter              press (armed)
//!   Normal ─────────▶ Hover ─────────────────▶ Active
//!      ▲      leave     │  ◀─────────────────    │
//!      └────────────────┘   release inside:      │ leave
//!                           fires on_click       ▼
//!                                              Normal
//!
//!   any ──── predicate false ───▶ Disabled ──── predicate true ───▶ Normal/Hover
//! ```
//!
//! A click needs both the press and the release inside the frame. The
//! press edge arms the button; leaving keeps it armed, so coming back and
//! releasing inside still clicks, but a press that started outside never
//! arms it.
//!
//! The visual (background for the current state plus the centered title)
//! is cached as a [`Picture`] and rebuilt only on `set_frame` and on state
//! edges.

use std::fmt;

use tracing::{debug, trace};

use crate::control::{ControlBase, FrameEvents, InteractionState};
use crate::geometry::{Rect, Size};
use crate::input::InputState;
use crate::render::{Picture, Renderer};
use crate::resources::Paint;
use crate::style::{ButtonStyle, TextAlign, TextStyle};

/// Predicate deciding whether a button accepts input.
pub type EnabledFn = Box<dyn Fn() -> bool>;

/// Click handler.
pub type ClickFn = Box<dyn FnMut()>;

/// Backgrounds for each interaction state, images already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePaints {
    /// Normal state.
    pub normal: Paint,
    /// Hover state.
    pub hover: Paint,
    /// Active state.
    pub active: Paint,
    /// Disabled state.
    pub disabled: Paint,
}

impl StatePaints {
    const fn for_state(&self, state: InteractionState) -> &Paint {
        match state {
            InteractionState::Normal => &self.normal,
            InteractionState::Hover => &self.hover,
            InteractionState::Active => &self.active,
            InteractionState::Disabled => &self.disabled,
        }
    }
}

/// Button state beyond the shared control record.
pub struct Button {
    title: String,
    title_size: Size,
    style: ButtonStyle,
    paints: StatePaints,
    enabled_when: Option<EnabledFn>,
    on_click: Option<ClickFn>,
    armed: bool,
    primary_was_down: bool,
    visual: Picture,
    dirty: bool,
    generation: u64,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("title", &self.title)
            .field("armed", &self.armed)
            .field("dirty", &self.dirty)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Button {
    /// Creates a button. `title_size` is the measured title extent.
    #[must_use]
    pub fn new(
        title: String,
        title_size: Size,
        style: ButtonStyle,
        paints: StatePaints,
        enabled_when: Option<EnabledFn>,
        on_click: Option<ClickFn>,
    ) -> Self {
        Self {
            title,
            title_size,
            style,
            paints,
            enabled_when,
            on_click,
            armed: false,
            // Treat the button as held until the first frame sees it up, so
            // a press carried over from a previous scene cannot arm it.
            primary_was_down: true,
            visual: Picture::default(),
            dirty: true,
            generation: 0,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the resolved style.
    #[must_use]
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Number of times the cached visual has been rebuilt.
    #[must_use]
    pub fn visual_generation(&self) -> u64 {
        self.generation
    }

    /// Returns the cached visual.
    #[must_use]
    pub fn visual(&self) -> &Picture {
        &self.visual
    }

    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Evaluates the enablement predicate into the shared record.
    pub(crate) fn sync_enabled(&mut self, base: &mut ControlBase) {
        if let Some(enabled_when) = &self.enabled_when {
            base.enabled = enabled_when();
        }
        if !base.enabled && base.state != InteractionState::Disabled {
            base.state = InteractionState::Disabled;
            self.dirty = true;
        }
    }

    pub(crate) fn update(&mut self, base: &mut ControlBase, input: &InputState, events: &mut FrameEvents) {
        if let Some(enabled_when) = &self.enabled_when {
            base.enabled = enabled_when();
        }

        let pressed = input.primary_down && !self.primary_was_down;
        let released = !input.primary_down && self.primary_was_down;
        self.primary_was_down = input.primary_down;

        let next = if base.enabled {
            let inside = input.is_over(base.frame);
            if pressed {
                self.armed = inside;
            }
            if released {
                if self.armed && inside {
                    self.click(base, events);
                }
                self.armed = false;
            }

            match (inside, input.primary_down) {
                (false, _) => InteractionState::Normal,
                (true, true) if self.armed => InteractionState::Active,
                (true, _) => InteractionState::Hover,
            }
        } else {
            self.armed = false;
            InteractionState::Disabled
        };

        if next != base.state {
            trace!(id = %base.id, from = ?base.state, to = ?next, "button state");
            base.state = next;
            self.dirty = true;
        }
    }

    fn click(&mut self, base: &ControlBase, events: &mut FrameEvents) {
        debug!(id = %base.id, title = %self.title, "button clicked");
        events.push_click(base.id);
        if let Some(on_click) = &mut self.on_click {
            on_click();
        }
    }

    /// Rebuilds the cached visual for the current state and frame.
    pub(crate) fn regenerate(&mut self, base: &ControlBase) {
        let size = base.frame.size();
        let paint = *self.paints.for_state(base.state);
        let text = TextStyle {
            font: self.style.font.clone(),
            color: if base.state == InteractionState::Disabled {
                self.style.disabled_text_color
            } else {
                self.style.text_color
            },
            align: TextAlign::Center,
        };
        let title_y = (size.h - self.title_size.h).div_euclid(2);

        self.visual = Picture::record(size, |canvas| {
            paint.draw(canvas, Rect::new(0, 0, size.w, size.h));
            if !self.title.is_empty() {
                canvas.draw_text(&self.title, size.w.div_euclid(2), title_y, &text);
            }
        });
        self.dirty = false;
        self.generation += 1;
        trace!(id = %base.id, state = ?base.state, generation = self.generation, "button visual rebuilt");
    }

    pub(crate) fn draw(&mut self, base: &ControlBase, renderer: &mut dyn Renderer) {
        if self.dirty || self.visual.size() != base.frame.size() {
            self.regenerate(base);
        }
        renderer.draw_picture(&self.visual, base.frame.x, base.frame.y);
    }
}

//! Vertical stack container.
//!
//! Children are stacked top to bottom inside the padding, separated by
//! `spacing`, and always stretched to the panel's inner width.

use tracing::trace;

use crate::control::{Control, ControlBase, FrameEvents, InteractionState, Stretch};
use crate::geometry::{Rect, Size};
use crate::input::InputState;
use crate::render::{Picture, Renderer};
use crate::resources::Paint;
use crate::style::PanelStyle;

/// Panel state beyond the shared control record.
#[derive(Debug)]
pub struct Panel {
    children: Vec<Control>,
    style: PanelStyle,
    background: Paint,
    visual: Picture,
}

impl Panel {
    /// Creates a panel owning `children`.
    #[must_use]
    pub fn new(children: Vec<Control>, style: PanelStyle, background: Paint) -> Self {
        Self {
            children,
            style,
            background,
            visual: Picture::default(),
        }
    }

    /// Returns the children in stacking order.
    #[must_use]
    pub fn children(&self) -> &[Control] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Control] {
        &mut self.children
    }

    /// Returns the resolved style.
    #[must_use]
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    /// Returns the cached background.
    #[must_use]
    pub fn visual(&self) -> &Picture {
        &self.visual
    }

    /// Total gap between children.
    fn total_spacing(&self) -> i32 {
        let gaps = i32::try_from(self.children.len().saturating_sub(1)).unwrap_or(i32::MAX);
        self.style.spacing.saturating_mul(gaps)
    }

    pub(crate) fn measure(&self, base: &ControlBase, constraint: Size) -> Size {
        let padding = self.style.padding.saturating_mul(2);
        let spacing = self.total_spacing();
        let available = constraint.shrink(padding, padding.saturating_add(spacing));

        let mut remaining = available.h;
        let mut width = 0;
        let mut height: i32 = 0;
        for child in &self.children {
            let size = child.measure(Size::new(available.w, remaining));
            width = width.max(size.w);
            height = height.saturating_add(size.h);
            remaining = (remaining - size.h).max(0);
        }

        let mut size = Size::new(width, height).grow(padding, padding.saturating_add(spacing));
        if base.stretch.contains(Stretch::HORIZONTAL) {
            size.w = size.w.max(constraint.w);
        }
        if base.stretch.contains(Stretch::VERTICAL) {
            size.h = size.h.max(constraint.h);
        }
        size
    }

    /// Places every child and rebuilds the background for the new frame.
    pub(crate) fn arrange(&mut self, base: &ControlBase) {
        let frame = base.frame;
        let inner = frame.shrink(self.style.padding);
        let spacing = self.style.spacing;

        let mut remaining = inner.h.saturating_sub(self.total_spacing()).max(0);
        let mut y = inner.y;
        for child in &mut self.children {
            let size = child.measure(Size::new(inner.w, remaining));
            child.set_frame(inner.x, y, inner.w, size.h);
            y = y.saturating_add(size.h).saturating_add(spacing);
            remaining = (remaining - size.h).max(0);
        }

        let size = frame.size();
        let background = self.background;
        self.visual = Picture::record(size, |canvas| {
            background.draw(canvas, Rect::new(0, 0, size.w, size.h));
        });
        trace!(id = %base.id, ?frame, children = self.children.len(), "panel arranged");
    }

    pub(crate) fn update(&mut self, base: &mut ControlBase, dt: f32, input: &InputState, events: &mut FrameEvents) {
        let child_input = if base.enabled {
            base.state = if input.is_over(base.frame) {
                InteractionState::Hover
            } else {
                InteractionState::Normal
            };
            *input
        } else {
            base.state = InteractionState::Disabled;
            InputState::idle()
        };

        for child in &mut self.children {
            child.update(dt, &child_input, events);
        }
    }

    pub(crate) fn draw(&mut self, base: &ControlBase, renderer: &mut dyn Renderer) {
        renderer.draw_picture(&self.visual, base.frame.x, base.frame.y);
        for child in &mut self.children {
            child.draw(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlId, ControlKind};
    use crate::style::Color;

    fn leaf(id: u64, min: Size) -> Control {
        let base = ControlBase::new(ControlId::new(id), min, Stretch::NONE);
        let label = crate::label::Label::new(String::new(), min, crate::style::LabelStyle {
            padding: 0,
            ..crate::style::LabelStyle::default()
        });
        Control::new(base, ControlKind::Label(label))
    }

    fn panel(children: Vec<Control>, padding: i32, spacing: i32) -> Control {
        let style = PanelStyle {
            padding,
            spacing,
            ..PanelStyle::default()
        };
        let base = ControlBase::new(ControlId::new(100), Size::ZERO, Stretch::NONE);
        Control::new(
            base,
            ControlKind::Panel(Panel::new(children, style, Paint::Solid(Color::BLACK))),
        )
    }

    #[test]
    fn test_empty_panel_is_twice_padding() {
        let panel = panel(Vec::new(), 16, 20);
        assert_eq!(panel.measure(Size::new(800, 600)), Size::new(32, 32));
    }

    #[test]
    fn test_height_is_additive() {
        let heights = [10, 25, 40, 7];
        for n in 0..=heights.len() {
            let children = heights[..n]
                .iter()
                .enumerate()
                .map(|(i, h)| leaf(i as u64 + 1, Size::new(50, *h)))
                .collect();
            let panel = panel(children, 8, 5);

            let sum: i32 = heights[..n].iter().sum();
            let gaps = (n as i32 - 1).max(0) * 5;
            assert_eq!(panel.measure(Size::new(1000, 1000)).h, sum + 16 + gaps, "n = {n}");
        }
    }

    #[test]
    fn test_children_stretch_to_inner_width() {
        let mut panel = panel(vec![leaf(1, Size::new(50, 20)), leaf(2, Size::new(120, 30))], 10, 4);

        let size = panel.measure(Size::new(500, 500));
        assert_eq!(size, Size::new(140, 74));

        panel.set_frame(0, 0, size.w, size.h);
        let children = panel.as_panel().unwrap().children();
        assert_eq!(children[0].frame(), Rect::new(10, 10, 120, 20));
        assert_eq!(children[1].frame(), Rect::new(10, 34, 120, 30));
    }

    #[test]
    fn test_tiny_constraint_never_goes_negative() {
        let panel = panel(vec![leaf(1, Size::new(50, 20))], 16, 20);
        let size = panel.measure(Size::new(10, 10));

        assert!(size.w >= 32 && size.h >= 32);
    }

    #[test]
    fn test_huge_padding_saturates() {
        let mut panel = panel(vec![leaf(1, Size::new(50, 20)), leaf(2, Size::new(50, 20))], i32::MAX, i32::MAX);

        let size = panel.measure(Size::new(800, 600));
        assert_eq!(size, Size::new(i32::MAX, i32::MAX));

        panel.set_frame(0, 0, 800, 600);
        let children = panel.as_panel().unwrap().children();
        assert!(children.iter().all(|c| c.frame().is_empty()));
    }

    #[test]
    fn test_set_frame_is_idempotent() {
        let mut panel = panel(vec![leaf(1, Size::new(50, 20))], 10, 4);
        panel.set_frame(5, 5, 100, 60);
        let first = panel.as_panel().unwrap().children()[0].frame();
        panel.set_frame(5, 5, 100, 60);

        assert_eq!(panel.as_panel().unwrap().children()[0].frame(), first);
        assert_eq!(panel.as_panel().unwrap().visual().size(), Size::new(100, 60));
    }
}

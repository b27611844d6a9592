//! Static single-line text.

use crate::control::ControlBase;
use crate::geometry::Size;
use crate::render::Renderer;
use crate::style::{LabelStyle, TextAlign, TextStyle};

/// Label state beyond the shared control record.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    text_size: Size,
    style: LabelStyle,
}

impl Label {
    /// Creates a label. `text_size` is the measured text extent.
    #[must_use]
    pub fn new(text: String, text_size: Size, style: LabelStyle) -> Self {
        Self {
            text,
            text_size,
            style,
        }
    }

    /// Returns the text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the resolved style.
    #[must_use]
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Text extent plus padding on every side. Labels never shrink to fit.
    #[must_use]
    pub fn measure(&self) -> Size {
        let padding = self.style.padding.saturating_mul(2);
        self.text_size.grow(padding, padding)
    }

    pub(crate) fn draw(&self, base: &ControlBase, renderer: &mut dyn Renderer) {
        if self.text.is_empty() {
            return;
        }
        let frame = base.frame;
        let x = match self.style.align {
            TextAlign::Left => frame.x + self.style.padding,
            TextAlign::Center => frame.x + frame.w.div_euclid(2),
            TextAlign::Right => frame.right() - self.style.padding,
        };
        let y = frame.y + (frame.h - self.text_size.h).div_euclid(2);

        let style = TextStyle {
            font: self.style.font.clone(),
            color: self.style.text_color,
            align: self.style.align,
        };
        renderer.draw_text(&self.text, x, y, &style);
    }
}

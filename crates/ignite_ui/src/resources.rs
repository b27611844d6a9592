//! Image and text-metric provider.
//!
//! Controls never load anything themselves: every image is resolved through
//! [`Resources`] while a control is being built, so a missing asset fails the
//! scene up front instead of showing a blank control later.

use std::collections::HashMap;

use crate::error::{UiError, UiResult};
use crate::geometry::{Rect, Size};
use crate::render::{draw_nine_slice, Image, Renderer};
use crate::style::{Background, Color, Font};

/// Resolves logical asset names and measures text.
pub trait Resources {
    /// Returns the image registered under `name`.
    fn image(&self, name: &str) -> Option<Image>;

    /// Returns the bounding box of a single line of text.
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}

/// How [`StaticResources`] measures text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMetrics {
    /// Glyph advance of half the font size, line height of the font size.
    Proportional,
    /// Fixed advance and line height regardless of font.
    Fixed {
        /// Width of every glyph.
        advance: i32,
        /// Height of a line.
        line_height: i32,
    },
}

/// In-memory image registry with monospace text metrics.
#[derive(Debug, Clone)]
pub struct StaticResources {
    images: HashMap<String, Image>,
    next_id: u32,
    metrics: TextMetrics,
}

impl Default for StaticResources {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticResources {
    /// Creates an empty registry with proportional metrics.
    #[must_use]
    pub fn new() -> Self {
        Self {
            images: HashMap::with_capacity(16),
            next_id: 1,
            metrics: TextMetrics::Proportional,
        }
    }

    /// Uses a fixed glyph advance and line height.
    #[must_use]
    pub fn with_fixed_metrics(mut self, advance: i32, line_height: i32) -> Self {
        self.metrics = TextMetrics::Fixed {
            advance,
            line_height,
        };
        self
    }

    /// Registers an image and returns its handle. Re-registering a name
    /// replaces the previous handle.
    pub fn insert(&mut self, name: impl Into<String>, size: Size) -> Image {
        let image = Image {
            id: self.next_id,
            size,
        };
        self.next_id += 1;
        self.images.insert(name.into(), image);
        image
    }
}

impl Resources for StaticResources {
    fn image(&self, name: &str) -> Option<Image> {
        self.images.get(name).copied()
    }

    fn measure_text(&self, text: &str, font: &Font) -> Size {
        let glyphs = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        let (advance, line_height) = match self.metrics {
            TextMetrics::Proportional => (font.size / 2, font.size),
            TextMetrics::Fixed {
                advance,
                line_height,
            } => (advance, line_height),
        };
        Size::new(glyphs.saturating_mul(advance), line_height)
    }
}

/// A background with its image resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid fill.
    Solid(Color),
    /// Nine-sliced image.
    Sliced {
        /// Image handle.
        image: Image,
        /// Corner inset.
        inset: i32,
    },
}

impl Paint {
    /// Resolves a background through the provider.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingImage`] if the image is not registered.
    pub fn resolve(
        background: &Background,
        inset: i32,
        resources: &dyn Resources,
        control: &'static str,
    ) -> UiResult<Self> {
        match background {
            Background::Fill(color) => Ok(Self::Solid(*color)),
            Background::Image(name) => resources
                .image(name)
                .map(|image| Self::Sliced { image, inset })
                .ok_or_else(|| UiError::MissingImage {
                    name: name.clone(),
                    control,
                }),
        }
    }

    /// Paints into `bounds`.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, bounds: Rect) {
        match self {
            Self::Solid(color) => renderer.fill_rect(bounds, *color),
            Self::Sliced { image, inset } => draw_nine_slice(renderer, image, bounds, *inset),
        }
    }
}

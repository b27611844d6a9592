//! Styling for controls.
//!
//! A [`StyleSheet`] holds one fully-resolved style per control kind. Scenes
//! either use [`StyleSheet::default`] or load one from TOML, then override
//! individual fields per control with the `*StyleOverrides` types. Resolved
//! styles are never mutated after a control is built.
//!
//! ```toml
//! [button]
//! font = "32px Jumpman"
//! min_size = { w = 192, h = 64 }
//! normal = "button_square_depth_flat"
//! hover = "button_square_depth_gloss"
//! active = "#1C54B2"
//!
//! [panel]
//! padding = 16
//! spacing = 20
//! background = "button_square_border"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{UiError, UiResult};
use crate::geometry::Size;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidColor`] for anything else.
    pub fn parse(text: &str) -> UiResult<Self> {
        let invalid = || UiError::InvalidColor(text.to_owned());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        let rgba = match digits.len() {
            3 => {
                // #rgb expands each nibble: 0xABC -> 0xAABBCC
                let r = (value >> 8) & 0xF;
                let g = (value >> 4) & 0xF;
                let b = value & 0xF;
                (r * 0x11) << 24 | (g * 0x11) << 16 | (b * 0x11) << 8 | 0xFF
            }
            6 => value << 8 | 0xFF,
            8 => value,
            _ => return Err(invalid()),
        };

        Ok(Self::hex(rgba))
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A font: pixel size plus family name, written `"16px Arial"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    /// Size in pixels.
    pub size: i32,
    /// Family name.
    pub family: String,
}

impl Font {
    /// Creates a font.
    #[must_use]
    pub fn new(size: i32, family: impl Into<String>) -> Self {
        Self {
            size,
            family: family.into(),
        }
    }
}

impl FromStr for Font {
    type Err = UiError;

    fn from_str(text: &str) -> UiResult<Self> {
        let invalid = || UiError::InvalidFont(text.to_owned());
        let (size, family) = text.trim().split_once(' ').ok_or_else(invalid)?;
        let size: i32 = size
            .strip_suffix("px")
            .and_then(|px| px.parse().ok())
            .filter(|px| *px > 0)
            .ok_or_else(invalid)?;
        let family = family.trim();
        if family.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(size, family))
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

/// Font, color and alignment for a single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font.
    pub font: Font,
    /// Text color.
    pub color: Color,
    /// Which point of the line the x coordinate refers to.
    pub align: TextAlign,
}

/// Background of a button state or a panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Solid fill.
    Fill(Color),
    /// Named image, nine-sliced to the frame.
    Image(String),
}

impl Background {
    /// Parses a background string: `#...` is a color, anything else names
    /// an image.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidColor`] for a malformed `#...` value.
    pub fn parse(text: &str) -> UiResult<Self> {
        if text.starts_with('#') {
            Color::parse(text).map(Self::Fill)
        } else {
            Ok(Self::Image(text.to_owned()))
        }
    }
}

/// Resolved button style.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Title font.
    pub font: Font,
    /// Title color.
    pub text_color: Color,
    /// Title color while disabled.
    pub disabled_text_color: Color,
    /// Background in the normal state.
    pub normal: Background,
    /// Background while hovered.
    pub hover: Background,
    /// Background while pressed.
    pub active: Background,
    /// Background while disabled.
    pub disabled: Background,
    /// Default minimum size.
    pub min_size: Size,
    /// Corner inset used when nine-slicing image backgrounds.
    pub slice_inset: i32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            font: Font::new(16, "Arial"),
            text_color: Color::hex(0xFFFF_FFFF),
            disabled_text_color: Color::hex(0xE0E0_E0FF),
            normal: Background::Fill(Color::hex(0x2979_FFFF)),
            hover: Background::Fill(Color::hex(0x5393_FFFF)),
            active: Background::Fill(Color::hex(0x1C54_B2FF)),
            disabled: Background::Fill(Color::hex(0x9E9E_9EFF)),
            min_size: Size::new(100, 40),
            slice_inset: 8,
        }
    }
}

/// Resolved label style.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Text font.
    pub font: Font,
    /// Text color.
    pub text_color: Color,
    /// Padding on every side of the text.
    pub padding: i32,
    /// Horizontal alignment inside the frame.
    pub align: TextAlign,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: Font::new(24, "Arial"),
            text_color: Color::hex(0xFFFF_FFFF),
            padding: 10,
            align: TextAlign::Center,
        }
    }
}

/// Resolved panel style.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    /// Inner padding on every side.
    pub padding: i32,
    /// Vertical gap between children.
    pub spacing: i32,
    /// Background.
    pub background: Background,
    /// Corner inset used when nine-slicing an image background.
    pub slice_inset: i32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            padding: 16,
            spacing: 16,
            background: Background::Fill(Color::hex(0x2222_22E6)),
            slice_inset: 8,
        }
    }
}

/// Partial button style applied on top of a [`ButtonStyle`].
#[derive(Debug, Clone, Default)]
pub struct ButtonStyleOverrides {
    /// Title font.
    pub font: Option<Font>,
    /// Title color.
    pub text_color: Option<Color>,
    /// Title color while disabled.
    pub disabled_text_color: Option<Color>,
    /// Normal background.
    pub normal: Option<Background>,
    /// Hover background.
    pub hover: Option<Background>,
    /// Active background.
    pub active: Option<Background>,
    /// Disabled background.
    pub disabled: Option<Background>,
    /// Default minimum size.
    pub min_size: Option<Size>,
    /// Nine-slice corner inset.
    pub slice_inset: Option<i32>,
}

impl ButtonStyleOverrides {
    /// Sets the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the title color.
    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the normal, hover and active backgrounds.
    #[must_use]
    pub fn backgrounds(mut self, normal: Background, hover: Background, active: Background) -> Self {
        self.normal = Some(normal);
        self.hover = Some(hover);
        self.active = Some(active);
        self
    }

    /// Sets the disabled background.
    #[must_use]
    pub fn disabled(mut self, background: Background) -> Self {
        self.disabled = Some(background);
        self
    }
}

impl ButtonStyle {
    /// Returns a copy with every set override applied.
    #[must_use]
    pub fn merged(&self, overrides: &ButtonStyleOverrides) -> Self {
        let o = overrides.clone();
        Self {
            font: o.font.unwrap_or_else(|| self.font.clone()),
            text_color: o.text_color.unwrap_or(self.text_color),
            disabled_text_color: o.disabled_text_color.unwrap_or(self.disabled_text_color),
            normal: o.normal.unwrap_or_else(|| self.normal.clone()),
            hover: o.hover.unwrap_or_else(|| self.hover.clone()),
            active: o.active.unwrap_or_else(|| self.active.clone()),
            disabled: o.disabled.unwrap_or_else(|| self.disabled.clone()),
            min_size: o.min_size.unwrap_or(self.min_size),
            slice_inset: o.slice_inset.unwrap_or(self.slice_inset),
        }
    }
}

/// Partial label style applied on top of a [`LabelStyle`].
#[derive(Debug, Clone, Default)]
pub struct LabelStyleOverrides {
    /// Text font.
    pub font: Option<Font>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Padding.
    pub padding: Option<i32>,
    /// Alignment.
    pub align: Option<TextAlign>,
}

impl LabelStyleOverrides {
    /// Sets the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the padding.
    #[must_use]
    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the alignment.
    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }
}

impl LabelStyle {
    /// Returns a copy with every set override applied.
    #[must_use]
    pub fn merged(&self, overrides: &LabelStyleOverrides) -> Self {
        Self {
            font: overrides.font.clone().unwrap_or_else(|| self.font.clone()),
            text_color: overrides.text_color.unwrap_or(self.text_color),
            padding: overrides.padding.unwrap_or(self.padding).max(0),
            align: overrides.align.unwrap_or(self.align),
        }
    }
}

/// Partial panel style applied on top of a [`PanelStyle`].
#[derive(Debug, Clone, Default)]
pub struct PanelStyleOverrides {
    /// Padding.
    pub padding: Option<i32>,
    /// Spacing.
    pub spacing: Option<i32>,
    /// Background.
    pub background: Option<Background>,
    /// Nine-slice corner inset.
    pub slice_inset: Option<i32>,
}

impl PanelStyleOverrides {
    /// Sets the padding.
    #[must_use]
    pub fn padding(mut self, padding: i32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the spacing.
    #[must_use]
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Sets the background.
    #[must_use]
    pub fn background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }
}

impl PanelStyle {
    /// Returns a copy with every set override applied.
    #[must_use]
    pub fn merged(&self, overrides: &PanelStyleOverrides) -> Self {
        Self {
            padding: overrides.padding.unwrap_or(self.padding).max(0),
            spacing: overrides.spacing.unwrap_or(self.spacing).max(0),
            background: overrides
                .background
                .clone()
                .unwrap_or_else(|| self.background.clone()),
            slice_inset: overrides.slice_inset.unwrap_or(self.slice_inset),
        }
    }
}

/// Resolved styles for every control kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    /// Button style.
    pub button: ButtonStyle,
    /// Label style.
    pub label: LabelStyle,
    /// Panel style.
    pub panel: PanelStyle,
}

impl StyleSheet {
    /// Parses a TOML style sheet; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidStyle`] for malformed TOML and
    /// [`UiError::InvalidColor`] / [`UiError::InvalidFont`] for bad values.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: StyleSheetConfig = toml::from_str(text)?;
        let defaults = Self::default();

        Ok(Self {
            button: defaults.button.merged(&config.button.resolve()?),
            label: defaults.label.merged(&config.label.resolve()?),
            panel: defaults.panel.merged(&config.panel.resolve()?),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSheetConfig {
    button: ButtonSection,
    label: LabelSection,
    panel: PanelSection,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SizeConfig {
    w: i32,
    h: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ButtonSection {
    font: Option<String>,
    text_color: Option<String>,
    disabled_text_color: Option<String>,
    normal: Option<String>,
    hover: Option<String>,
    active: Option<String>,
    disabled: Option<String>,
    min_size: Option<SizeConfig>,
    slice_inset: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LabelSection {
    font: Option<String>,
    text_color: Option<String>,
    padding: Option<i32>,
    align: Option<TextAlign>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PanelSection {
    padding: Option<i32>,
    spacing: Option<i32>,
    background: Option<String>,
    slice_inset: Option<i32>,
}

fn parse_opt<T>(value: Option<&String>, parse: impl Fn(&str) -> UiResult<T>) -> UiResult<Option<T>> {
    value.map(|v| parse(v.as_str())).transpose()
}

impl ButtonSection {
    fn resolve(&self) -> UiResult<ButtonStyleOverrides> {
        Ok(ButtonStyleOverrides {
            font: parse_opt(self.font.as_ref(), |s| s.parse::<Font>())?,
            text_color: parse_opt(self.text_color.as_ref(), Color::parse)?,
            disabled_text_color: parse_opt(self.disabled_text_color.as_ref(), Color::parse)?,
            normal: parse_opt(self.normal.as_ref(), Background::parse)?,
            hover: parse_opt(self.hover.as_ref(), Background::parse)?,
            active: parse_opt(self.active.as_ref(), Background::parse)?,
            disabled: parse_opt(self.disabled.as_ref(), Background::parse)?,
            min_size: self.min_size.map(|s| Size::new(s.w, s.h)),
            slice_inset: self.slice_inset,
        })
    }
}

impl LabelSection {
    fn resolve(&self) -> UiResult<LabelStyleOverrides> {
        Ok(LabelStyleOverrides {
            font: parse_opt(self.font.as_ref(), |s| s.parse::<Font>())?,
            text_color: parse_opt(self.text_color.as_ref(), Color::parse)?,
            padding: self.padding,
            align: self.align,
        })
    }
}

impl PanelSection {
    fn resolve(&self) -> UiResult<PanelStyleOverrides> {
        Ok(PanelStyleOverrides {
            padding: self.padding,
            spacing: self.spacing,
            background: parse_opt(self.background.as_ref(), Background::parse)?,
            slice_inset: self.slice_inset,
        })
    }
}

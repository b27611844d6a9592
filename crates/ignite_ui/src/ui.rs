//! Control factory.
//!
//! [`Ui`] owns the active [`StyleSheet`] and the [`Resources`] used to
//! resolve images and measure text. Every factory call merges the caller's
//! overrides onto the sheet, resolves images up front and assigns a fresh
//! [`ControlId`].

use crate::button::{Button, ClickFn, EnabledFn, StatePaints};
use crate::control::{Control, ControlBase, ControlId, ControlKind, Stretch};
use crate::error::UiResult;
use crate::geometry::Size;
use crate::label::Label;
use crate::layout::Layout;
use crate::panel::Panel;
use crate::resources::{Paint, Resources};
use crate::style::{Background, ButtonStyleOverrides, LabelStyleOverrides, PanelStyleOverrides, StyleSheet};

/// Options for [`Ui::button`].
#[derive(Default)]
pub struct ButtonOptions {
    /// Minimum size; defaults to the style's `min_size`.
    pub min_size: Option<Size>,
    /// Stretch policy; defaults to [`Stretch::NONE`].
    pub stretch: Option<Stretch>,
    /// Style overrides.
    pub style: ButtonStyleOverrides,
    /// Enablement predicate, evaluated every update.
    pub enabled: Option<EnabledFn>,
    /// Click handler.
    pub on_click: Option<ClickFn>,
}

impl ButtonOptions {
    /// Sets the minimum size.
    #[must_use]
    pub fn min_size(mut self, size: Size) -> Self {
        self.min_size = Some(size);
        self
    }

    /// Sets the stretch policy.
    #[must_use]
    pub fn stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = Some(stretch);
        self
    }

    /// Sets style overrides.
    #[must_use]
    pub fn style(mut self, style: ButtonStyleOverrides) -> Self {
        self.style = style;
        self
    }

    /// Sets the enablement predicate.
    #[must_use]
    pub fn enabled_when(mut self, enabled: impl Fn() -> bool + 'static) -> Self {
        self.enabled = Some(Box::new(enabled));
        self
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click(mut self, on_click: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

/// Options for [`Ui::label`].
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// Style overrides.
    pub style: LabelStyleOverrides,
}

impl LabelOptions {
    /// Sets style overrides.
    #[must_use]
    pub fn style(mut self, style: LabelStyleOverrides) -> Self {
        self.style = style;
        self
    }
}

/// Options for [`Ui::panel`].
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    /// Stretch policy; defaults to [`Stretch::NONE`].
    pub stretch: Option<Stretch>,
    /// Style overrides.
    pub style: PanelStyleOverrides,
}

impl PanelOptions {
    /// Sets the stretch policy.
    #[must_use]
    pub fn stretch(mut self, stretch: Stretch) -> Self {
        self.stretch = Some(stretch);
        self
    }

    /// Sets style overrides.
    #[must_use]
    pub fn style(mut self, style: PanelStyleOverrides) -> Self {
        self.style = style;
        self
    }
}

/// Builds controls against one style sheet and resource provider.
pub struct Ui<'r> {
    resources: &'r dyn Resources,
    style: StyleSheet,
    next_id: u64,
}

impl<'r> Ui<'r> {
    /// Creates a factory with the default style sheet.
    #[must_use]
    pub fn new(resources: &'r dyn Resources) -> Self {
        Self::with_style(resources, StyleSheet::default())
    }

    /// Creates a factory with a custom style sheet.
    #[must_use]
    pub fn with_style(resources: &'r dyn Resources, style: StyleSheet) -> Self {
        Self {
            resources,
            style,
            next_id: 1,
        }
    }

    /// Returns the active style sheet.
    #[must_use]
    pub fn style(&self) -> &StyleSheet {
        &self.style
    }

    /// Replaces the style sheet for controls built from now on.
    pub fn set_style(&mut self, style: StyleSheet) {
        self.style = style;
    }

    /// Creates an empty layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new()
    }

    /// Generates a new unique control ID.
    fn next_id(&mut self) -> ControlId {
        let id = ControlId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Builds a button.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::MissingImage`] if any state background
    /// names an image the provider does not have.
    pub fn button(&mut self, title: impl Into<String>, options: ButtonOptions) -> UiResult<Control> {
        let ButtonOptions {
            min_size,
            stretch,
            style,
            enabled,
            on_click,
        } = options;
        let style = self.style.button.merged(&style);
        let paint = |background: &Background| Paint::resolve(background, style.slice_inset, self.resources, "button");
        let paints = StatePaints {
            normal: paint(&style.normal)?,
            hover: paint(&style.hover)?,
            active: paint(&style.active)?,
            disabled: paint(&style.disabled)?,
        };

        let title = title.into();
        let title_size = self.resources.measure_text(&title, &style.font);
        let base = ControlBase::new(
            self.next_id(),
            min_size.unwrap_or(style.min_size),
            stretch.unwrap_or(Stretch::NONE),
        );
        let button = Button::new(title, title_size, style, paints, enabled, on_click);

        Ok(Control::new(base, ControlKind::Button(button)))
    }

    /// Builds a label.
    pub fn label(&mut self, text: impl Into<String>, options: LabelOptions) -> Control {
        let style = self.style.label.merged(&options.style);
        let text = text.into();
        let text_size = self.resources.measure_text(&text, &style.font);
        let label = Label::new(text, text_size, style);
        let base = ControlBase::new(self.next_id(), label.measure(), Stretch::NONE);

        Control::new(base, ControlKind::Label(label))
    }

    /// Builds a panel that takes ownership of `children`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::MissingImage`] if the background names an
    /// image the provider does not have.
    pub fn panel(&mut self, children: Vec<Control>, options: PanelOptions) -> UiResult<Control> {
        let style = self.style.panel.merged(&options.style);
        let background = Paint::resolve(&style.background, style.slice_inset, self.resources, "panel")?;
        let base = ControlBase::new(
            self.next_id(),
            Size::new(style.padding.saturating_mul(2), style.padding.saturating_mul(2)),
            options.stretch.unwrap_or(Stretch::NONE),
        );

        Ok(Control::new(base, ControlKind::Panel(Panel::new(children, style, background))))
    }
}

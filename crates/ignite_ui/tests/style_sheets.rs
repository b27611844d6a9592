//! Scenes built from TOML style sheets.

use ignite_ui::{
    Anchor, ButtonOptions, Color, CommandBuffer, LabelOptions, PanelOptions, Pos, Rect, RenderCommand, Size,
    StaticResources, StyleSheet, TextAlign, Ui, UiError,
};

const MENU_STYLE: &str = r##"
[button]
font = "32px Jumpman"
text_color = "#ffffff"
normal = "button_square_flat"
hover = "button_square_gloss"
active = "button_square_flat"
disabled = "button_square_flat"
min_size = { w = 192, h = 64 }
slice_inset = 12

[label]
font = "48px Jumpman"
align = "left"
padding = 4

[panel]
background = "button_square_border"
padding = 24
spacing = 8
"##;

fn resources() -> StaticResources {
    let mut resources = StaticResources::new();
    resources.insert("button_square_flat", Size::new(64, 64));
    resources.insert("button_square_gloss", Size::new(64, 64));
    resources.insert("button_square_border", Size::new(64, 64));
    resources
}

#[test]
fn test_sheet_applies_to_factory() {
    let sheet = StyleSheet::from_toml_str(MENU_STYLE).unwrap();
    let resources = resources();
    let mut ui = Ui::with_style(&resources, sheet);

    let button = ui.button("Play", ButtonOptions::default()).unwrap();
    let style = button.as_button().unwrap().style();
    assert_eq!(style.font.to_string(), "32px Jumpman");
    assert_eq!(style.min_size, Size::new(192, 64));
    assert_eq!(button.base().min_size, Size::new(192, 64));

    let label = ui.label("Pong!", LabelOptions::default());
    let label_style = label.as_label().unwrap().style();
    assert_eq!(label_style.align, TextAlign::Left);
    assert_eq!(label_style.text_color, Color::WHITE);

    let panel = ui.panel(vec![label, button], PanelOptions::default()).unwrap();
    assert_eq!(panel.as_panel().unwrap().style().padding, 24);
}

#[test]
fn test_sheet_images_must_exist() {
    let sheet = StyleSheet::from_toml_str(MENU_STYLE).unwrap();
    let resources = StaticResources::new();
    let mut ui = Ui::with_style(&resources, sheet);

    match ui.button("Play", ButtonOptions::default()) {
        Err(UiError::MissingImage { name, control }) => {
            assert_eq!(name, "button_square_flat");
            assert_eq!(control, "button");
        }
        other => panic!("expected missing image, got {other:?}"),
    }
    assert!(matches!(
        ui.panel(Vec::new(), PanelOptions::default()),
        Err(UiError::MissingImage { control: "panel", .. })
    ));
}

#[test]
fn test_styled_panel_draws_sliced_background() {
    let sheet = StyleSheet::from_toml_str(MENU_STYLE).unwrap();
    let resources = resources();
    let mut ui = Ui::with_style(&resources, sheet);

    let panel = ui.panel(Vec::new(), PanelOptions::default()).unwrap();
    let mut layout = ui.layout();
    layout.add_child(panel, Pos::new(0, 0), Anchor::TopLeft);
    layout.resize(640, 480);

    let mut buffer = CommandBuffer::new();
    layout.draw(&mut buffer);

    // 48x48 panel, inset clamped to 8 by the default panel inset.
    let dests: Vec<Rect> = buffer
        .commands()
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Image { dest, .. } => Some(*dest),
            _ => None,
        })
        .collect();
    assert_eq!(dests.len(), 9);
    assert_eq!(dests[0], Rect::new(0, 0, 8, 8));
    assert_eq!(dests[4], Rect::new(8, 8, 32, 32));
}

#[test]
fn test_set_style_affects_later_controls_only() {
    let resources = resources();
    let mut ui = Ui::new(&resources);
    let before = ui.label("a", LabelOptions::default());

    ui.set_style(StyleSheet::from_toml_str("[label]\npadding = 0").unwrap());
    let after = ui.label("a", LabelOptions::default());

    assert_eq!(before.as_label().unwrap().style().padding, 10);
    assert_eq!(after.as_label().unwrap().style().padding, 0);
    assert_eq!(ui.style().label.padding, 0);
}

#[test]
fn test_malformed_sheet_is_rejected() {
    assert!(matches!(
        StyleSheet::from_toml_str("[button\nfont = 3"),
        Err(UiError::InvalidStyle(_))
    ));
    assert!(matches!(
        StyleSheet::from_toml_str("[panel]\nbackground = \"#12\""),
        Err(UiError::InvalidColor(_))
    ));
}

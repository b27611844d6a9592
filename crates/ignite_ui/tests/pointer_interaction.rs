//! Pointer sequences driven through `Layout::update`.

use std::cell::Cell;
use std::rc::Rc;

use ignite_ui::{
    Anchor, ButtonOptions, CommandBuffer, ControlId, InteractionState, Layout, MouseButton, PanelOptions,
    PointerTracker, Pos, Rect, Size, StaticResources, Ui,
};

const DT: f32 = 1.0 / 60.0;

struct Harness {
    layout: Layout,
    pointer: PointerTracker,
    button: ControlId,
    clicks: Rc<Cell<u32>>,
    enabled: Rc<Cell<bool>>,
    predicate_calls: Rc<Cell<u32>>,
}

impl Harness {
    /// A 192x64 button centered at (400, 300): frame (304, 268, 192, 64).
    fn new() -> Self {
        let resources = StaticResources::new();
        let mut ui = Ui::new(&resources);

        let clicks = Rc::new(Cell::new(0));
        let enabled = Rc::new(Cell::new(true));
        let predicate_calls = Rc::new(Cell::new(0));

        let on_click = Rc::clone(&clicks);
        let gate = Rc::clone(&enabled);
        let calls = Rc::clone(&predicate_calls);
        let button = ui
            .button(
                "Play",
                ButtonOptions::default()
                    .min_size(Size::new(192, 64))
                    .enabled_when(move || {
                        calls.set(calls.get() + 1);
                        gate.get()
                    })
                    .on_click(move || on_click.set(on_click.get() + 1)),
            )
            .unwrap();

        let mut layout = ui.layout();
        let id = layout.add_child(button, Pos::new(400, 300), Anchor::Center);
        layout.resize(800, 600);

        let mut harness = Self {
            layout,
            pointer: PointerTracker::new(),
            button: id,
            clicks,
            enabled,
            predicate_calls,
        };
        harness.move_to(0, 0);
        harness
    }

    fn step(&mut self) -> Vec<ControlId> {
        self.layout.update(DT, &self.pointer).clicked().to_vec()
    }

    fn move_to(&mut self, x: i32, y: i32) -> Vec<ControlId> {
        self.pointer.set_mouse_pos(x, y);
        self.step()
    }

    fn press(&mut self) -> Vec<ControlId> {
        self.pointer.mouse_button_down(MouseButton::Left);
        self.step()
    }

    fn release(&mut self) -> Vec<ControlId> {
        self.pointer.mouse_button_up(MouseButton::Left);
        self.step()
    }

    fn state(&self) -> InteractionState {
        self.layout.control(self.button).unwrap().state()
    }
}

#[test]
fn test_press_and_release_inside_clicks_once() {
    let mut h = Harness::new();

    h.move_to(400, 300);
    assert_eq!(h.state(), InteractionState::Hover);

    h.press();
    assert_eq!(h.state(), InteractionState::Active);
    assert_eq!(h.clicks.get(), 0);

    let clicked = h.release();
    assert_eq!(clicked, vec![h.button]);
    assert_eq!(h.clicks.get(), 1);
    assert_eq!(h.state(), InteractionState::Hover);

    // Holding still afterwards never fires again.
    assert!(h.step().is_empty());
    assert_eq!(h.clicks.get(), 1);
}

#[test]
fn test_release_outside_does_not_click() {
    let mut h = Harness::new();

    h.move_to(400, 300);
    h.press();
    h.move_to(10, 10);
    assert_eq!(h.state(), InteractionState::Normal);
    h.release();

    assert_eq!(h.clicks.get(), 0);
}

#[test]
fn test_press_outside_then_release_inside_does_not_click() {
    let mut h = Harness::new();

    h.move_to(10, 10);
    h.press();
    h.move_to(400, 300);
    assert_eq!(h.state(), InteractionState::Hover);
    h.release();

    assert_eq!(h.clicks.get(), 0);
}

#[test]
fn test_leave_and_return_while_held_still_clicks() {
    let mut h = Harness::new();

    h.move_to(400, 300);
    h.press();
    h.move_to(10, 10);
    h.move_to(400, 300);
    assert_eq!(h.state(), InteractionState::Active);
    h.release();

    assert_eq!(h.clicks.get(), 1);
}

#[test]
fn test_button_held_when_scene_starts_does_not_click() {
    let resources = StaticResources::new();
    let mut ui = Ui::new(&resources);
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let button = ui
        .button("Play", ButtonOptions::default().on_click(move || counter.set(counter.get() + 1)))
        .unwrap();

    let mut layout = ui.layout();
    layout.add_child(button, Pos::new(400, 300), Anchor::Center);
    layout.resize(800, 600);

    let mut pointer = PointerTracker::new();
    pointer.set_mouse_pos(400, 300);
    pointer.mouse_button_down(MouseButton::Left);
    layout.update(DT, &pointer);
    pointer.mouse_button_up(MouseButton::Left);
    layout.update(DT, &pointer);

    assert_eq!(clicks.get(), 0);
}

#[test]
fn test_pointer_off_viewport_is_outside() {
    let mut h = Harness::new();

    h.move_to(400, 300);
    h.press();
    h.move_to(900, 300);
    assert_eq!(h.state(), InteractionState::Normal);
    h.release();

    assert_eq!(h.clicks.get(), 0);
}

#[test]
fn test_disabled_button_ignores_input() {
    let mut h = Harness::new();

    h.enabled.set(false);
    h.move_to(400, 300);
    assert_eq!(h.state(), InteractionState::Disabled);
    assert!(h.layout.control(h.button).unwrap().hit_test(400, 300).is_none());
    assert!(h.layout.control_at(400, 300).is_none());

    h.press();
    h.release();
    assert_eq!(h.clicks.get(), 0);
    assert_eq!(h.state(), InteractionState::Disabled);

    h.enabled.set(true);
    h.step();
    assert_eq!(h.state(), InteractionState::Hover);
    assert!(h.layout.control(h.button).unwrap().hit_test(400, 300).is_some());
}

#[test]
fn test_disabling_mid_press_disarms() {
    let mut h = Harness::new();

    h.move_to(400, 300);
    h.press();
    h.enabled.set(false);
    h.step();
    h.enabled.set(true);
    h.release();

    assert_eq!(h.clicks.get(), 0);
}

#[test]
fn test_disabled_panel_gates_children() {
    let resources = StaticResources::new();
    let mut ui = Ui::new(&resources);
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let button = ui
        .button("Play", ButtonOptions::default().on_click(move || counter.set(counter.get() + 1)))
        .unwrap();
    let button_id = button.id();
    let panel = ui.panel(vec![button], PanelOptions::default()).unwrap();

    let mut layout = ui.layout();
    let panel_id = layout.add_child(panel, Pos::new(400, 300), Anchor::Center);
    layout.resize(800, 600);
    layout.control_mut(panel_id).unwrap().set_enabled(false);

    let mut pointer = PointerTracker::new();
    pointer.set_mouse_pos(400, 300);
    layout.update(DT, &pointer);
    pointer.mouse_button_down(MouseButton::Left);
    layout.update(DT, &pointer);
    pointer.mouse_button_up(MouseButton::Left);
    let events = layout.update(DT, &pointer);

    assert!(events.is_empty());
    assert_eq!(clicks.get(), 0);
    assert_eq!(layout.control(panel_id).unwrap().state(), InteractionState::Disabled);
    assert_eq!(layout.control(button_id).unwrap().state(), InteractionState::Normal);
    assert!(layout.control_at(400, 300).is_none());
}

#[test]
fn test_empty_viewport_is_inert() {
    for (w, h) in [(0, 600), (800, 0)] {
        let mut harness = Harness::new();
        harness.layout.resize(w, h);
        let calls = harness.predicate_calls.get();

        harness.move_to(400, 300);
        harness.press();
        harness.release();

        let mut buffer = CommandBuffer::new();
        harness.layout.draw(&mut buffer);

        assert_eq!(harness.predicate_calls.get(), calls, "viewport {w}x{h}");
        assert_eq!(harness.clicks.get(), 0);
        assert_eq!(buffer.command_count(), 0);
    }
}

#[test]
fn test_offscreen_pointer_never_hits_control_over_origin() {
    let resources = StaticResources::new();
    let mut ui = Ui::new(&resources);
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let button = ui
        .button(
            "Corner",
            ButtonOptions::default()
                .min_size(Size::new(100, 100))
                .on_click(move || counter.set(counter.get() + 1)),
        )
        .unwrap();

    let mut layout = ui.layout();
    let id = layout.add_child(button, Pos::new(0, 0), Anchor::Center);
    layout.resize(800, 600);
    assert_eq!(layout.control(id).unwrap().frame(), Rect::new(-50, -50, 100, 100));

    let mut pointer = PointerTracker::new();
    pointer.set_mouse_pos(-300, -300);
    layout.update(DT, &pointer);
    assert_eq!(layout.control(id).unwrap().state(), InteractionState::Normal);

    pointer.mouse_button_down(MouseButton::Left);
    layout.update(DT, &pointer);
    pointer.mouse_button_up(MouseButton::Left);
    let events = layout.update(DT, &pointer);

    assert!(events.is_empty());
    assert_eq!(clicks.get(), 0);
    assert_eq!(layout.control(id).unwrap().state(), InteractionState::Normal);

    // The visible quarter still works.
    pointer.set_mouse_pos(10, 10);
    layout.update(DT, &pointer);
    pointer.mouse_button_down(MouseButton::Left);
    layout.update(DT, &pointer);
    pointer.mouse_button_up(MouseButton::Left);
    layout.update(DT, &pointer);
    assert_eq!(clicks.get(), 1);
}

//! # IGNITE UI
//!
//! Retained-mode UI toolkit for in-game menus:
//! - Buttons, labels and vertical panels in an owned tree
//! - Two-pass sizing (`measure` then `set_frame`)
//! - Anchor-based placement of top-level controls
//! - Pointer state machine with press-and-release click detection
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI PIPELINE                         │
//! ├──────────────────────────────────────────────────────────┤
//! │  resize(viewport) → measure → anchor → set_frame (recurse)│
//! │  update(dt)       → InputState → state machine → clicks   │
//! │  draw(renderer)   → cached Pictures → fill / blit / text  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut ui = Ui::new(&resources);
//! let title = ui.label("Pong!", LabelOptions::default());
//! let play = ui.button("Play", ButtonOptions::default().on_click(start_game))?;
//! let menu = ui.panel(vec![title, play], PanelOptions::default())?;
//!
//! let mut layout = ui.layout();
//! layout.add_child(menu, Pos::new(400, 300), Anchor::Center);
//! layout.resize(800, 600);
//!
//! // every frame
//! layout.update(dt, &pointer);
//! layout.draw(&mut renderer);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod anchor;
pub mod button;
pub mod control;
pub mod error;
pub mod geometry;
pub mod input;
pub mod label;
pub mod layout;
pub mod panel;
pub mod render;
pub mod resources;
pub mod style;
pub mod ui;

pub use anchor::{resolve_origin, Anchor};
pub use button::Button;
pub use control::{Control, ControlId, ControlKind, FrameEvents, InteractionState, Stretch};
pub use error::{UiError, UiResult};
pub use geometry::{Pos, Rect, Size};
pub use input::{InputState, MouseButton, PointerSource, PointerTracker};
pub use label::Label;
pub use layout::{Extent, Layout, Placement};
pub use panel::Panel;
pub use render::{CommandBuffer, Image, Picture, RenderCommand, Renderer, UIBatch, UIVertex};
pub use resources::{Resources, StaticResources};
pub use style::{Background, Color, Font, StyleSheet, TextAlign, TextStyle};
pub use ui::{ButtonOptions, LabelOptions, PanelOptions, Ui};

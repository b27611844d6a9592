//! UI rendering system.
//!
//! Controls draw through the three primitives of [`Renderer`]. Cached
//! visuals are [`Picture`]s: command lists recorded once into an off-screen
//! [`CommandBuffer`] and replayed at the control's origin every frame.
//! Hosts can also record a whole frame into a [`CommandBuffer`] and upload
//! its [`UIBatch`]es to the GPU.

use crate::geometry::{Rect, Size};
use crate::style::{Color, TextStyle};

/// Handle to a drawable image owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Image {
    /// Texture ID in the host's atlas.
    pub id: u32,
    /// Pixel size.
    pub size: Size,
}

impl Image {
    /// Returns the full source rectangle of the image.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.size.w, self.size.h)
    }
}

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Image region stretched to a destination rectangle.
    Image {
        /// Image handle.
        image: Image,
        /// Source region in image pixels.
        source: Rect,
        /// Destination bounds.
        dest: Rect,
    },
    /// Single line of text.
    Text {
        /// Text content.
        text: String,
        /// X position of the alignment point.
        x: i32,
        /// Y position (top of the line).
        y: i32,
        /// Font, color and alignment.
        style: TextStyle,
    },
}

/// Drawing surface.
pub trait Renderer {
    /// Fills a rectangle.
    fn fill_rect(&mut self, bounds: Rect, color: Color);

    /// Blits `source` of `image` stretched into `dest`.
    fn blit_image(&mut self, image: &Image, source: Rect, dest: Rect);

    /// Draws a single line of text. `x` is the alignment point, `y` the top.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle);

    /// Replays a recorded picture with its origin at `(x, y)`.
    fn draw_picture(&mut self, picture: &Picture, x: i32, y: i32) {
        picture.replay(self, x, y);
    }
}

/// Replays one command onto a renderer, moved by `(dx, dy)`. Borrows the
/// recorded text and style as-is.
fn dispatch<R: Renderer + ?Sized>(renderer: &mut R, command: &RenderCommand, dx: i32, dy: i32) {
    match command {
        RenderCommand::Rect { bounds, color } => renderer.fill_rect(bounds.translate(dx, dy), *color),
        RenderCommand::Image {
            image,
            source,
            dest,
        } => renderer.blit_image(image, *source, dest.translate(dx, dy)),
        RenderCommand::Text { text, x, y, style } => renderer.draw_text(text, x + dx, y + dy, style),
    }
}

/// An off-screen surface: commands recorded in local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Picture {
    size: Size,
    commands: Vec<RenderCommand>,
}

impl Picture {
    /// Records a picture of the given size from a paint callback.
    pub fn record(size: Size, paint: impl FnOnce(&mut CommandBuffer)) -> Self {
        let mut buffer = CommandBuffer::new();
        paint(&mut buffer);
        Self {
            size,
            commands: buffer.commands,
        }
    }

    /// Returns the picture size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns true if nothing would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty() || self.commands.is_empty()
    }

    /// Replays every command offset by `(x, y)`.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R, x: i32, y: i32) {
        if self.is_empty() {
            return;
        }
        for command in &self.commands {
            dispatch(renderer, command, x, y);
        }
    }
}

/// Draws `image` into `dest` keeping corners of `inset` pixels unscaled.
///
/// The inset is clamped so opposite corners never overlap, in the image or
/// in the destination.
pub fn draw_nine_slice<R: Renderer + ?Sized>(renderer: &mut R, image: &Image, dest: Rect, inset: i32) {
    if dest.is_empty() || image.size.is_empty() {
        return;
    }
    let inset = inset
        .min(image.size.w / 2)
        .min(image.size.h / 2)
        .min(dest.w / 2)
        .min(dest.h / 2)
        .max(0);

    let spans = |start: i32, extent: i32| {
        [
            (start, inset),
            (start + inset, extent - inset * 2),
            (start + extent - inset, inset),
        ]
    };
    let src_cols = spans(0, image.size.w);
    let src_rows = spans(0, image.size.h);
    let dst_cols = spans(dest.x, dest.w);
    let dst_rows = spans(dest.y, dest.h);

    for row in 0..3 {
        for col in 0..3 {
            let source = Rect::new(src_cols[col].0, src_rows[row].0, src_cols[col].1, src_rows[row].1);
            let target = Rect::new(dst_cols[col].0, dst_rows[row].0, dst_cols[col].1, dst_rows[row].1);
            if source.is_empty() || target.is_empty() {
                continue;
            }
            renderer.blit_image(image, source, target);
        }
    }
}

/// Renderer that records commands instead of drawing them.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: Vec<RenderCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Tessellates rectangles and images into textured quad batches.
    ///
    /// Consecutive quads that share a texture land in one batch. Text is
    /// left to the host's glyph renderer and skipped here.
    #[must_use]
    pub fn batches(&self) -> Vec<UIBatch> {
        let mut batches: Vec<UIBatch> = Vec::new();

        for command in &self.commands {
            let (texture, quad) = match command {
                RenderCommand::Rect { bounds, color } => {
                    (None, quad(*bounds, [0.0, 0.0, 0.0, 0.0], color.to_array()))
                }
                RenderCommand::Image {
                    image,
                    source,
                    dest,
                } => (
                    Some(image.id),
                    quad(*dest, uv_rect(image.size, *source), Color::WHITE.to_array()),
                ),
                RenderCommand::Text { .. } => continue,
            };

            if let Some(batch) = batches.last_mut().filter(|b| b.texture == texture) {
                batch.vertices.extend_from_slice(&quad);
            } else {
                batches.push(UIBatch {
                    texture,
                    vertices: quad.to_vec(),
                });
            }
        }

        batches
    }
}

impl Renderer for CommandBuffer {
    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.push(RenderCommand::Rect { bounds, color });
    }

    fn blit_image(&mut self, image: &Image, source: Rect, dest: Rect) {
        self.push(RenderCommand::Image {
            image: *image,
            source,
            dest,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle) {
        self.push(RenderCommand::Text {
            text: text.to_owned(),
            x,
            y,
            style: style.clone(),
        });
    }
}

#[allow(clippy::cast_precision_loss)]
fn uv_rect(size: Size, source: Rect) -> [f32; 4] {
    let w = size.w.max(1) as f32;
    let h = size.h.max(1) as f32;
    [
        source.x as f32 / w,
        source.y as f32 / h,
        source.right() as f32 / w,
        source.bottom() as f32 / h,
    ]
}

#[allow(clippy::cast_precision_loss)]
fn quad(bounds: Rect, uv: [f32; 4], color: [f32; 4]) -> [UIVertex; 6] {
    let (x0, y0) = (bounds.x as f32, bounds.y as f32);
    let (x1, y1) = (bounds.right() as f32, bounds.bottom() as f32);
    let [u0, v0, u1, v1] = uv;

    let top_left = UIVertex::new(x0, y0, u0, v0, color);
    let top_right = UIVertex::new(x1, y0, u1, v0, color);
    let bottom_left = UIVertex::new(x0, y1, u0, v1, color);
    let bottom_right = UIVertex::new(x1, y1, u1, v1, color);

    [top_left, top_right, bottom_left, bottom_left, top_right, bottom_right]
}

/// Quads sharing one texture (or none, for solid fills).
#[derive(Debug, Clone, PartialEq)]
pub struct UIBatch {
    /// Texture ID, `None` for untextured fills.
    pub texture: Option<u32>,
    /// Triangle-list vertices, six per quad.
    pub vertices: Vec<UIVertex>,
}

impl UIBatch {
    /// Returns the vertex data as raw bytes for buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Font, TextAlign};

    fn atlas_image() -> Image {
        Image {
            id: 7,
            size: Size::new(48, 48),
        }
    }

    #[test]
    fn test_picture_replays_translated() {
        let picture = Picture::record(Size::new(10, 10), |canvas| {
            canvas.fill_rect(Rect::new(0, 0, 10, 10), Color::WHITE);
        });

        let mut frame = CommandBuffer::new();
        frame.draw_picture(&picture, 30, 40);

        assert_eq!(
            frame.commands(),
            &[RenderCommand::Rect {
                bounds: Rect::new(30, 40, 10, 10),
                color: Color::WHITE,
            }]
        );
    }

    /// Remembers where the text it was handed lives.
    #[derive(Default)]
    struct TextAddresses {
        texts: Vec<(*const u8, i32, i32)>,
    }

    impl Renderer for TextAddresses {
        fn fill_rect(&mut self, _bounds: Rect, _color: Color) {}

        fn blit_image(&mut self, _image: &Image, _source: Rect, _dest: Rect) {}

        fn draw_text(&mut self, text: &str, x: i32, y: i32, _style: &TextStyle) {
            self.texts.push((text.as_ptr(), x, y));
        }
    }

    #[test]
    fn test_replay_borrows_recorded_text() {
        let style = TextStyle {
            font: Font::new(16, "Arial"),
            color: Color::WHITE,
            align: TextAlign::Center,
        };
        let picture = Picture::record(Size::new(100, 40), |canvas| {
            canvas.draw_text("Play", 50, 12, &style);
        });
        let recorded = match &picture.commands()[0] {
            RenderCommand::Text { text, .. } => text.as_ptr(),
            other => panic!("expected text, got {other:?}"),
        };

        let mut renderer = TextAddresses::default();
        for _ in 0..3 {
            picture.replay(&mut renderer, 200, 300);
        }

        assert_eq!(renderer.texts, vec![(recorded, 250, 312); 3]);
    }

    #[test]
    fn test_zero_size_picture_draws_nothing() {
        let picture = Picture::record(Size::ZERO, |canvas| {
            canvas.fill_rect(Rect::new(0, 0, 1, 1), Color::BLACK);
        });

        let mut frame = CommandBuffer::new();
        frame.draw_picture(&picture, 0, 0);
        assert_eq!(frame.command_count(), 0);
    }

    #[test]
    fn test_nine_slice_keeps_corners() {
        let mut canvas = CommandBuffer::new();
        draw_nine_slice(&mut canvas, &atlas_image(), Rect::new(100, 50, 200, 80), 8);

        assert_eq!(canvas.command_count(), 9);
        assert_eq!(
            canvas.commands()[0],
            RenderCommand::Image {
                image: atlas_image(),
                source: Rect::new(0, 0, 8, 8),
                dest: Rect::new(100, 50, 8, 8),
            }
        );
        assert_eq!(
            canvas.commands()[4],
            RenderCommand::Image {
                image: atlas_image(),
                source: Rect::new(8, 8, 32, 32),
                dest: Rect::new(108, 58, 184, 64),
            }
        );
        assert_eq!(
            canvas.commands()[8],
            RenderCommand::Image {
                image: atlas_image(),
                source: Rect::new(40, 40, 8, 8),
                dest: Rect::new(292, 122, 8, 8),
            }
        );
    }

    #[test]
    fn test_nine_slice_without_inset_is_one_stretch() {
        let mut canvas = CommandBuffer::new();
        draw_nine_slice(&mut canvas, &atlas_image(), Rect::new(0, 0, 20, 20), 0);

        assert_eq!(
            canvas.commands(),
            &[RenderCommand::Image {
                image: atlas_image(),
                source: Rect::new(0, 0, 48, 48),
                dest: Rect::new(0, 0, 20, 20),
            }]
        );
    }

    #[test]
    fn test_batches_group_by_texture() {
        let mut frame = CommandBuffer::new();
        frame.begin_frame();
        frame.fill_rect(Rect::new(0, 0, 100, 50), Color::WHITE);
        frame.fill_rect(Rect::new(0, 50, 100, 50), Color::BLACK);
        frame.blit_image(&atlas_image(), Rect::new(0, 0, 24, 48), Rect::new(0, 0, 10, 10));
        frame.draw_text(
            "skip",
            0,
            0,
            &TextStyle {
                font: Font::new(16, "Arial"),
                color: Color::WHITE,
                align: TextAlign::Left,
            },
        );

        let batches = frame.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].texture, None);
        assert_eq!(batches[0].vertices.len(), 12);
        assert_eq!(batches[1].texture, Some(7));
        assert_eq!(batches[1].vertices[5].uv, [0.5, 1.0]);
        assert_eq!(batches[1].as_bytes().len(), 6 * std::mem::size_of::<UIVertex>());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Render sink abstraction the carousel engine draws through.
//!
//! The engine never talks to a GUI toolkit directly: it issues a stream of
//! transform, clip, and draw calls against [`RenderSink`]. The Iced shell
//! implements the trait on top of a canvas frame, and [`RecordingSink`]
//! captures the stream verbatim so paint order can be asserted in tests.

use crate::geometry::{Transform, Vec2};
use std::path::{Path, PathBuf};

/// An RGBA color with 8-bit channels, matching the packed hex notation theme
/// files use (`RRGGBB` or `RRGGBBAA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0x00, 0x00, 0x00, 0xFF);
    pub const WHITE: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 0xFF },
        })
    }

    /// Scales the alpha channel by `opacity` in `[0, 1]`.
    #[must_use]
    pub fn faded(self, opacity: f32) -> Self {
        let a = (f32::from(self.a) * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

/// Two-color fill for the carousel background band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientFill {
    pub start: Rgba,
    pub end: Rgba,
    /// `true` runs the gradient along X, `false` along Y.
    pub horizontal: bool,
}

impl GradientFill {
    #[must_use]
    pub fn solid(color: Rgba) -> Self {
        Self {
            start: color,
            end: color,
            horizontal: true,
        }
    }
}

/// Horizontal or vertical text anchoring inside a draw box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Center,
    End,
}

/// A textured quad draw call: an image stretched over a destination box,
/// optionally rotated about an origin given in box-normalized coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TexturedQuad {
    pub image: PathBuf,
    pub pos: Vec2,
    pub size: Vec2,
    pub rotation_degrees: f32,
    /// Rotation origin normalized against `size`; `(0.5, 0.5)` is the center.
    pub rotation_origin: Vec2,
    pub opacity: f32,
}

/// A text draw call laid out inside a box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub content: String,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgba,
    pub font_px: f32,
    pub anchor_x: TextAnchor,
    pub anchor_y: TextAnchor,
    pub rotation_degrees: f32,
    pub rotation_origin: Vec2,
    pub opacity: f32,
}

/// Sink for the engine's draw stream.
///
/// Coordinates in draw calls are local to the current transform. Clip
/// rectangles are given in transformed (absolute) coordinates and nest as a
/// stack; sinks may implement them as exact clipping or as culling regions.
pub trait RenderSink {
    fn set_transform(&mut self, transform: &Transform);
    fn push_clip(&mut self, pos: Vec2, size: Vec2);
    fn pop_clip(&mut self);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, fill: GradientFill);
    fn draw_quad(&mut self, quad: &TexturedQuad);
    fn draw_text(&mut self, span: &TextSpan);
}

/// One recorded sink operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOp {
    SetTransform(Transform),
    PushClip { pos: Vec2, size: Vec2 },
    PopClip,
    FillRect { pos: Vec2, size: Vec2, fill: GradientFill },
    Quad(TexturedQuad),
    Text(TextSpan),
}

/// A sink that records every call in order. Backs the paint-order tests and
/// the windowing benchmark.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ops: Vec<RenderOp>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the drawn quads/texts in draw order, for compact assertions.
    pub fn drawn_labels(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Quad(quad) => {
                    Some(quad.image.file_stem()?.to_string_lossy().into_owned())
                }
                RenderOp::Text(span) => Some(span.content.clone()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn set_transform(&mut self, transform: &Transform) {
        self.ops.push(RenderOp::SetTransform(*transform));
    }

    fn push_clip(&mut self, pos: Vec2, size: Vec2) {
        self.ops.push(RenderOp::PushClip { pos, size });
    }

    fn pop_clip(&mut self) {
        self.ops.push(RenderOp::PopClip);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, fill: GradientFill) {
        self.ops.push(RenderOp::FillRect { pos, size, fill });
    }

    fn draw_quad(&mut self, quad: &TexturedQuad) {
        self.ops.push(RenderOp::Quad(quad.clone()));
    }

    fn draw_text(&mut self, span: &TextSpan) {
        self.ops.push(RenderOp::Text(span.clone()));
    }
}

/// Convenience for constructing quads from a path reference.
impl TexturedQuad {
    #[must_use]
    pub fn new(image: &Path, pos: Vec2, size: Vec2) -> Self {
        Self {
            image: image.to_path_buf(),
            pos,
            size,
            rotation_degrees: 0.0,
            rotation_origin: Vec2::new(0.5, 0.5),
            opacity: 1.0,
        }
    }
}

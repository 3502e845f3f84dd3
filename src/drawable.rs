// SPDX-License-Identifier: MPL-2.0
//! Drawable building blocks owned by carousel entries: the image-or-text logo
//! and the background decoration layers.

use crate::geometry::{Transform, Vec2};
use crate::render::{RenderSink, Rgba, TextAnchor, TextSpan, TexturedQuad};
use crate::theme::ThemeElement;
use std::path::PathBuf;

/// Per-frame presentation computed by the windowing pass and handed to a
/// logo's render call, so drawables stay immutable during rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoFrame {
    pub scale: f32,
    pub opacity: u8,
    /// Rotation in degrees about an origin normalized to the logo box;
    /// `None` for the non-wheel orientations.
    pub rotation: Option<(f32, Vec2)>,
}

/// A collection's visual identity: a themed image when the theme provides
/// one, otherwise the collection name as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Logo {
    Image(ImageLogo),
    Text(TextLogo),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageLogo {
    pub path: PathBuf,
    pub pos: Vec2,
    pub size: Vec2,
    /// Normalized anchor inside the logo box.
    pub origin: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLogo {
    pub text: String,
    pub pos: Vec2,
    pub size: Vec2,
    pub origin: Vec2,
    pub color: Rgba,
    pub font_px: f32,
    pub anchor_x: TextAnchor,
    pub anchor_y: TextAnchor,
}

impl Logo {
    pub fn set_origin(&mut self, origin: Vec2) {
        match self {
            Logo::Image(logo) => logo.origin = origin,
            Logo::Text(logo) => logo.origin = origin,
        }
    }

    pub fn set_position(&mut self, pos: Vec2) {
        match self {
            Logo::Image(logo) => logo.pos = pos,
            Logo::Text(logo) => logo.pos = pos,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Vec2 {
        match self {
            Logo::Image(logo) => logo.origin,
            Logo::Text(logo) => logo.origin,
        }
    }

    /// Draws the logo under `trans` with the given per-frame presentation.
    /// The box shrinks about the logo's origin when `frame.scale != 1`.
    pub fn render(&self, trans: &Transform, frame: LogoFrame, sink: &mut dyn RenderSink) {
        sink.set_transform(trans);
        let opacity = f32::from(frame.opacity) / 255.0;
        let (rotation_degrees, rotation_origin) =
            frame.rotation.unwrap_or((0.0, Vec2::new(0.5, 0.5)));
        match self {
            Logo::Image(logo) => {
                let size = logo.size * frame.scale;
                let top_left = logo.pos - size * logo.origin;
                sink.draw_quad(&TexturedQuad {
                    image: logo.path.clone(),
                    pos: top_left,
                    size,
                    rotation_degrees,
                    rotation_origin,
                    opacity,
                });
            }
            Logo::Text(logo) => {
                let size = logo.size * frame.scale;
                let top_left = logo.pos - size * logo.origin;
                sink.draw_text(&TextSpan {
                    content: logo.text.clone(),
                    pos: top_left,
                    size,
                    color: logo.color,
                    font_px: logo.font_px * frame.scale,
                    anchor_x: logo.anchor_x,
                    anchor_y: logo.anchor_y,
                    rotation_degrees,
                    rotation_origin,
                    opacity,
                });
            }
        }
    }
}

/// What a decoration layer draws.
#[derive(Debug, Clone, PartialEq)]
pub enum DecorationVisual {
    Image { path: PathBuf },
    Text { content: String, color: Rgba, font_px: f32 },
}

/// One background decoration layer, positioned in screen space and ordered
/// by its z-index.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub z_index: f32,
    pub pos: Vec2,
    pub size: Vec2,
    pub visual: DecorationVisual,
}

impl Decoration {
    /// Builds a decoration from a theme element flagged `extra`. Returns
    /// `None` when the element kind is unknown or its payload attribute is
    /// missing; the layer is then skipped rather than erroring.
    pub fn from_element(element: &ThemeElement, screen: Vec2) -> Option<Self> {
        let pos = element.vec2("pos").unwrap_or(Vec2::ZERO) * screen;
        let size = element.vec2("size").unwrap_or(Vec2::new(1.0, 1.0)) * screen;
        let z_index = element.float("z_index").unwrap_or(0.0);
        let visual = match element.kind() {
            "image" => DecorationVisual::Image {
                path: element.path("path")?,
            },
            "text" => DecorationVisual::Text {
                content: element.string("text")?.to_string(),
                color: element.color("color").unwrap_or(Rgba::BLACK),
                font_px: element.float("font_size").unwrap_or(0.035) * screen.y,
            },
            _ => return None,
        };
        Some(Self {
            z_index,
            pos,
            size,
            visual,
        })
    }

    pub fn render(&self, trans: &Transform, sink: &mut dyn RenderSink) {
        sink.set_transform(trans);
        match &self.visual {
            DecorationVisual::Image { path } => {
                sink.draw_quad(&TexturedQuad::new(path, self.pos, self.size));
            }
            DecorationVisual::Text {
                content,
                color,
                font_px,
            } => {
                sink.draw_text(&TextSpan {
                    content: content.clone(),
                    pos: self.pos,
                    size: self.size,
                    color: *color,
                    font_px: *font_px,
                    anchor_x: TextAnchor::Center,
                    anchor_y: TextAnchor::Center,
                    rotation_degrees: 0.0,
                    rotation_origin: Vec2::new(0.5, 0.5),
                    opacity: 1.0,
                });
            }
        }
    }
}

/// Stable ascending z-index order, so higher keys paint later (on top).
pub fn sort_decorations(decorations: &mut [Decoration]) {
    decorations.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
}

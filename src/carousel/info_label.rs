// SPDX-License-Identifier: MPL-2.0
//! The info label under the carousel band ("120 ENTRIES AVAILABLE").

use super::config::CarouselConfig;
use crate::geometry::{Transform, Vec2};
use crate::render::{GradientFill, RenderSink, Rgba, TextAnchor, TextSpan};
use crate::theme::ThemeElement;

#[derive(Debug, Clone, PartialEq)]
pub struct InfoLabel {
    pub text: String,
    /// Current fade opacity in `[0, 1]`; starts invisible and is driven by
    /// the two info animation slots.
    pub opacity: f32,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Rgba,
    pub background: Rgba,
    pub font_px: f32,
    pub z_index: f32,
}

impl InfoLabel {
    /// Defaults: a band directly under the carousel.
    #[must_use]
    pub fn defaults(screen: Vec2, carousel: &CarouselConfig) -> Self {
        let font_px = 0.035 * screen.y;
        Self {
            text: String::new(),
            opacity: 0.0,
            pos: Vec2::new(0.0, carousel.pos.y + carousel.size.y - 0.2),
            size: Vec2::new(screen.x, font_px * 2.2),
            color: Rgba::BLACK,
            background: Rgba::from_hex("DDDDDDD8").unwrap_or(Rgba::WHITE),
            font_px,
            z_index: 50.0,
        }
    }

    pub fn apply_theme(&mut self, element: &ThemeElement, screen: Vec2) {
        if let Some(pos) = element.vec2("pos") {
            self.pos = pos * screen;
        }
        if let Some(size) = element.vec2("size") {
            self.size = size * screen;
        }
        if let Some(color) = element.color("color") {
            self.color = color;
        }
        if let Some(background) = element.color("background_color") {
            self.background = background;
        }
        if let Some(font_size) = element.float("font_size") {
            self.font_px = font_size * screen.y;
        }
        if let Some(z_index) = element.float("z_index") {
            self.z_index = z_index;
        }
    }

    pub fn render(&self, trans: &Transform, sink: &mut dyn RenderSink) {
        sink.set_transform(trans);
        sink.fill_rect(
            self.pos,
            self.size,
            GradientFill::solid(self.background.faded(self.opacity)),
        );
        if !self.text.is_empty() {
            sink.draw_text(&TextSpan {
                content: self.text.clone(),
                pos: self.pos,
                size: self.size,
                color: self.color,
                font_px: self.font_px,
                anchor_x: TextAnchor::Center,
                anchor_y: TextAnchor::Center,
                rotation_degrees: 0.0,
                rotation_origin: Vec2::new(0.5, 0.5),
                opacity: self.opacity,
            });
        }
    }
}

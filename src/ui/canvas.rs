// SPDX-License-Identifier: MPL-2.0
//! Canvas adapter: implements the engine's [`RenderSink`] on top of an Iced
//! canvas frame.
//!
//! The engine's transforms are axis-aligned (translate + scale), so draw
//! boxes map to screen rectangles directly; per-draw rotation is applied
//! through the frame's own transform stack. Clip rectangles are tracked as a
//! stack of intersections and used to cull draws that fall fully outside.

use crate::carousel::CarouselView;
use crate::geometry::{Transform, Vec2};
use crate::render::{GradientFill, RenderSink, Rgba, TextAnchor, TextSpan, TexturedQuad};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::image::Handle;
use iced::{alignment, mouse, Color, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};

/// Canvas program that paints a [`CarouselView`], scaled to the widget
/// bounds.
pub struct CarouselCanvas<'a> {
    pub view: &'a CarouselView,
}

impl<Message> canvas::Program<Message> for CarouselCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let screen = self.view.screen();
        let root = Transform::scaling(Vec2::new(
            bounds.width / screen.x,
            bounds.height / screen.y,
        ));
        {
            let mut sink = FrameSink::new(&mut frame);
            self.view.render(&root, &mut sink);
        }
        vec![frame.into_geometry()]
    }
}

/// [`RenderSink`] writing into a canvas frame.
pub struct FrameSink<'a> {
    frame: &'a mut Frame,
    transform: Transform,
    /// Stack of intersected clip rectangles in frame coordinates.
    clips: Vec<Option<(Vec2, Vec2)>>,
}

impl<'a> FrameSink<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self {
            frame,
            transform: Transform::IDENTITY,
            clips: Vec::new(),
        }
    }

    fn current_clip(&self) -> Option<&Option<(Vec2, Vec2)>> {
        self.clips.last()
    }

    /// Intersection of two rectangles, `None` when they do not overlap.
    fn intersect(a: (Vec2, Vec2), b: (Vec2, Vec2)) -> Option<(Vec2, Vec2)> {
        let x0 = a.0.x.max(b.0.x);
        let y0 = a.0.y.max(b.0.y);
        let x1 = (a.0.x + a.1.x).min(b.0.x + b.1.x);
        let y1 = (a.0.y + a.1.y).min(b.0.y + b.1.y);
        (x1 > x0 && y1 > y0).then(|| (Vec2::new(x0, y0), Vec2::new(x1 - x0, y1 - y0)))
    }

    /// Whether a frame-space box overlaps the active clip region.
    fn is_visible(&self, pos: Vec2, size: Vec2) -> bool {
        match self.current_clip() {
            None => true,
            Some(None) => false,
            Some(Some(clip)) => Self::intersect(*clip, (pos, size)).is_some(),
        }
    }

    /// Maps an engine-space box through the current transform.
    fn map_box(&self, pos: Vec2, size: Vec2) -> (Vec2, Vec2) {
        (self.transform.apply(pos), size * self.transform.scale_factors())
    }

    fn color(rgba: Rgba, opacity: f32) -> Color {
        Color {
            a: (f32::from(rgba.a) / 255.0) * opacity.clamp(0.0, 1.0),
            ..Color::from_rgb8(rgba.r, rgba.g, rgba.b)
        }
    }

    /// Runs `draw` with the frame rotated by `degrees` about `pivot`.
    fn with_rotation(
        &mut self,
        degrees: f32,
        pivot: Vec2,
        draw: impl FnOnce(&mut Frame),
    ) {
        if degrees == 0.0 {
            draw(&mut *self.frame);
            return;
        }
        self.frame.with_save(|frame| {
            frame.translate(Vector::new(pivot.x, pivot.y));
            frame.rotate(Radians(degrees.to_radians()));
            frame.translate(Vector::new(-pivot.x, -pivot.y));
            draw(frame);
        });
    }
}

impl RenderSink for FrameSink<'_> {
    fn set_transform(&mut self, transform: &Transform) {
        self.transform = *transform;
    }

    fn push_clip(&mut self, pos: Vec2, size: Vec2) {
        let next = match self.current_clip() {
            None => Some((pos, size)),
            Some(None) => None,
            Some(Some(clip)) => Self::intersect(*clip, (pos, size)),
        };
        self.clips.push(next);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, fill: GradientFill) {
        let (pos, size) = self.map_box(pos, size);
        let clipped = match self.current_clip() {
            None => Some((pos, size)),
            Some(None) => None,
            Some(Some(clip)) => Self::intersect(*clip, (pos, size)),
        };
        let Some((pos, size)) = clipped else {
            return;
        };
        let top_left = Point::new(pos.x, pos.y);
        let box_size = Size::new(size.x, size.y);
        if fill.start == fill.end {
            self.frame
                .fill_rectangle(top_left, box_size, Self::color(fill.start, 1.0));
        } else {
            // `horizontal` runs the gradient along X (left to right), otherwise
            // along Y (top to bottom). The canvas gradient is defined by its
            // absolute start/end points across the box.
            let end_point = if fill.horizontal {
                Point::new(top_left.x + box_size.width, top_left.y)
            } else {
                Point::new(top_left.x, top_left.y + box_size.height)
            };
            let gradient = canvas::gradient::Linear::new(top_left, end_point)
                .add_stop(0.0, Self::color(fill.start, 1.0))
                .add_stop(1.0, Self::color(fill.end, 1.0));
            self.frame
                .fill_rectangle(top_left, box_size, gradient);
        }
    }

    fn draw_quad(&mut self, quad: &TexturedQuad) {
        let (pos, size) = self.map_box(quad.pos, quad.size);
        if !self.is_visible(pos, size) {
            return;
        }
        let handle = Handle::from_path(&quad.image);
        let image = canvas::Image::new(handle).opacity(quad.opacity);
        let bounds = Rectangle::new(Point::new(pos.x, pos.y), Size::new(size.x, size.y));
        let pivot = pos + size * quad.rotation_origin;
        self.with_rotation(quad.rotation_degrees, pivot, |frame| {
            frame.draw_image(bounds, image);
        });
    }

    fn draw_text(&mut self, span: &TextSpan) {
        let (pos, size) = self.map_box(span.pos, span.size);
        if !self.is_visible(pos, size) {
            return;
        }
        let (x, align_x) = match span.anchor_x {
            TextAnchor::Start => (pos.x, alignment::Horizontal::Left),
            TextAnchor::Center => (pos.x + size.x / 2.0, alignment::Horizontal::Center),
            TextAnchor::End => (pos.x + size.x, alignment::Horizontal::Right),
        };
        let (y, align_y) = match span.anchor_y {
            TextAnchor::Start => (pos.y, alignment::Vertical::Top),
            TextAnchor::Center => (pos.y + size.y / 2.0, alignment::Vertical::Center),
            TextAnchor::End => (pos.y + size.y, alignment::Vertical::Bottom),
        };
        let text = canvas::Text {
            content: span.content.clone(),
            position: Point::new(x, y),
            color: Self::color(span.color, span.opacity),
            size: (span.font_px * self.transform.scale_factors().y).into(),
            align_x: align_x.into(),
            align_y: align_y.into(),
            ..canvas::Text::default()
        };
        let pivot = pos + size * span.rotation_origin;
        self.with_rotation(span.rotation_degrees, pivot, |frame| {
            frame.fill_text(text);
        });
    }
}

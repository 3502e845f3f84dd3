// SPDX-License-Identifier: MPL-2.0
//! The carousel view: a circular, animated band of collection logos with
//! themed background decoration layers and an info label.
//!
//! The view owns all mutable state (entries, camera offsets, animation
//! slots) and is driven from outside by discrete intents, a per-frame tick,
//! and a render call against a [`RenderSink`]. It never touches a GUI
//! toolkit, the filesystem (beyond probing logo paths at populate time), or
//! any global state.

pub mod animation;
pub mod config;
pub mod info_label;
pub mod scroller;
pub mod windowing;

use crate::catalog::{Catalog, Collection, CollectionKind};
use crate::config::{Settings, UiMode};
use crate::drawable::{sort_decorations, Decoration, ImageLogo, Logo, LogoFrame, TextLogo};
use crate::geometry::{Transform, Vec2};
use crate::render::{GradientFill, RenderSink, Rgba, TextAnchor};
use crate::script::EventSink;
use crate::theme::{Theme, ThemeSet};
use animation::{Animation, CameraMove, Descriptor, InfoFade, TransitionStyle};
use config::{CarouselConfig, CarouselType, LogoAlignment};
use info_label::InfoLabel;
use scroller::Scroller;
use windowing::{ring_opacity, ring_scale, velocity_buffers, window_slots, wrap_index};

/// Themed view name the carousel reads its elements from.
pub const VIEW_NAME: &str = "system";

const CAROUSEL_ELEMENT: &str = "systemcarousel";
const INFO_ELEMENT: &str = "systeminfo";
const LOGO_ELEMENT: &str = "logo";
const LOGO_TEXT_ELEMENT: &str = "logo_text";

/// Animation slot assignments; one in-flight animation per slot,
/// last-writer-wins.
const SLOT_CAMERA: usize = 0;
const SLOT_INFO_FADE_OUT: usize = 1;
const SLOT_INFO_FADE_IN: usize = 2;

/// Transition length for a real move.
const TRANSITION_MS: u32 = 500;
/// Delay before the info label fades back in.
const INFO_FADE_IN_DELAY_MS: u32 = 2000;

/// One populated carousel entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub collection: Collection,
    pub logo: Logo,
    /// Background decoration layers, ascending z-index.
    pub extras: Vec<Decoration>,
}

/// Discrete input intents, already mapped from whatever device the host
/// listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Step against the scroll axis (up/left).
    Previous,
    /// Step along the scroll axis (down/right).
    Next,
    /// The held direction was released.
    DirectionReleased,
    /// Commit the current selection.
    Activate,
    /// Jump to an arbitrary entry (e.g. a random pick), animated.
    JumpTo(usize),
}

/// Result of a repopulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulateOutcome {
    Populated { entries: usize },
    /// Nothing is visible. `mode_was_reset` is `true` the one time a
    /// restricted UI mode was switched back to full; the host should persist
    /// the settings and surface its acknowledgment dialog exactly then.
    EmptyCatalog { mode_was_reset: bool },
}

/// A control hint for the host's help bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpPrompt {
    pub control: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveAnimation {
    animation: Animation,
    on_finish: Option<CompletionAction>,
}

#[derive(Debug, Clone, PartialEq)]
enum CompletionAction {
    SetInfoText(String),
}

/// The carousel view state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    screen: Vec2,
    entries: Vec<Entry>,
    cursor: usize,
    cam_offset: f32,
    extras_cam_offset: f32,
    extras_fade_opacity: f32,
    showing: bool,
    view_needs_reload: bool,
    config: CarouselConfig,
    info: InfoLabel,
    scroller: Scroller,
    slots: [Option<ActiveAnimation>; 3],
    transition_style: TransitionStyle,
    move_carousel: bool,
}

impl CarouselView {
    #[must_use]
    pub fn new(screen: Vec2) -> Self {
        let config = CarouselConfig::defaults(screen);
        let info = InfoLabel::defaults(screen, &config);
        Self {
            screen,
            entries: Vec::new(),
            cursor: 0,
            cam_offset: 0.0,
            extras_cam_offset: 0.0,
            extras_fade_opacity: 0.0,
            showing: false,
            view_needs_reload: true,
            config,
            info,
            scroller: Scroller::new(),
            slots: [None, None, None],
            transition_style: TransitionStyle::Instant,
            move_carousel: true,
        }
    }

    /// Applies the host's transition preferences (read from settings).
    pub fn set_transition(&mut self, style: TransitionStyle, move_carousel: bool) {
        self.transition_style = style;
        self.move_carousel = move_carousel;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn cam_offset(&self) -> f32 {
        self.cam_offset
    }

    #[must_use]
    pub fn extras_cam_offset(&self) -> f32 {
        self.extras_cam_offset
    }

    #[must_use]
    pub fn extras_fade_opacity(&self) -> f32 {
        self.extras_fade_opacity
    }

    #[must_use]
    pub fn info_text(&self) -> &str {
        &self.info.text
    }

    #[must_use]
    pub fn info_opacity(&self) -> f32 {
        self.info.opacity
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The logical screen size layout was computed against.
    #[must_use]
    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    /// Whether directional input should map from the vertical axis.
    #[must_use]
    pub fn is_vertical_axis(&self) -> bool {
        self.config.kind.is_vertical()
    }

    pub fn on_show(&mut self) {
        self.showing = true;
    }

    pub fn on_hide(&mut self) {
        self.showing = false;
    }

    /// Marks the themed view elements stale; the next populate re-reads them.
    pub fn on_theme_changed(&mut self) {
        tracing::debug!("carousel theme changed");
        self.view_needs_reload = true;
    }

    /// Orientation-dependent control hints.
    #[must_use]
    pub fn help_prompts(&self) -> Vec<HelpPrompt> {
        let choose = if self.is_vertical_axis() {
            "up/down"
        } else {
            "left/right"
        };
        vec![
            HelpPrompt { control: choose, action: "choose" },
            HelpPrompt { control: "enter", action: "select" },
            HelpPrompt { control: "r", action: "random" },
        ]
    }

    /// Rebuilds the entry list from the catalog's visible collections.
    ///
    /// Scroll state survives the rebuild; only the cursor is clamped back
    /// into range. An empty result while a restricted UI mode is active
    /// resets the mode to [`UiMode::Full`] (once) so the host can recover.
    pub fn populate(
        &mut self,
        catalog: &Catalog,
        themes: &ThemeSet,
        settings: &mut Settings,
    ) -> PopulateOutcome {
        self.entries.clear();

        for collection in catalog.visible() {
            let theme = themes.theme_for(collection.theme.as_deref());
            if self.view_needs_reload {
                self.apply_view_theme(theme);
            }
            let logo = self.build_logo(collection, theme);
            let mut extras: Vec<Decoration> = theme
                .extras(VIEW_NAME)
                .into_iter()
                .filter_map(|element| Decoration::from_element(element, self.screen))
                .collect();
            sort_decorations(&mut extras);
            self.entries.push(Entry {
                collection: collection.clone(),
                logo,
                extras,
            });
        }

        if self.entries.is_empty() {
            let mode_was_reset = settings.ui_mode().is_restricted();
            if mode_was_reset {
                tracing::info!(
                    mode = settings.ui_mode().name(),
                    "catalog empty in restricted mode, returning to full"
                );
                settings.set_ui_mode(UiMode::Full);
            }
            return PopulateOutcome::EmptyCatalog { mode_was_reset };
        }

        if self.cursor >= self.entries.len() {
            self.cursor = 0;
        }
        PopulateOutcome::Populated {
            entries: self.entries.len(),
        }
    }

    /// Re-reads the carousel and info elements from a theme, falling back to
    /// defaults for anything absent.
    fn apply_view_theme(&mut self, theme: &Theme) {
        tracing::debug!("reloading carousel view elements");
        self.config = CarouselConfig::defaults(self.screen);
        self.info = InfoLabel {
            text: std::mem::take(&mut self.info.text),
            opacity: self.info.opacity,
            ..InfoLabel::defaults(self.screen, &self.config)
        };
        if !theme.has_view(VIEW_NAME) {
            self.view_needs_reload = false;
            return;
        }
        if let Some(element) = theme.element(VIEW_NAME, CAROUSEL_ELEMENT, "carousel") {
            self.config.apply_theme(element, self.screen);
        }
        if let Some(element) = theme.element(VIEW_NAME, INFO_ELEMENT, "text") {
            self.info.apply_theme(element, self.screen);
        }
        self.view_needs_reload = false;
    }

    fn build_logo(&self, collection: &Collection, theme: &Theme) -> Logo {
        if let Some(element) = theme.element(VIEW_NAME, LOGO_ELEMENT, "image") {
            if let Some(path) = element.path("path") {
                if path.is_file() {
                    let mut logo = Logo::Image(ImageLogo {
                        path,
                        pos: Vec2::ZERO,
                        size: self.config.logo_size * self.config.logo_scale,
                        origin: Vec2::new(0.5, 0.5),
                    });
                    self.place_logo(&mut logo);
                    return logo;
                }
            }
        }

        let text_element = theme.element(VIEW_NAME, LOGO_TEXT_ELEMENT, "text");
        let color = text_element
            .and_then(|e| e.color("color"))
            .unwrap_or(Rgba::BLACK);
        let font_px = text_element
            .and_then(|e| e.float("font_size"))
            .map(|size| size * self.screen.y)
            .unwrap_or(0.085 * self.screen.y);

        let (anchor_x, anchor_y) = if self.config.kind.is_vertical() {
            let x = match self.config.logo_alignment {
                LogoAlignment::Left => TextAnchor::Start,
                LogoAlignment::Right => TextAnchor::End,
                _ => TextAnchor::Center,
            };
            (x, TextAnchor::Center)
        } else {
            let y = match self.config.logo_alignment {
                LogoAlignment::Top => TextAnchor::Start,
                LogoAlignment::Bottom => TextAnchor::End,
                _ => TextAnchor::Center,
            };
            (TextAnchor::Center, y)
        };

        let mut logo = Logo::Text(TextLogo {
            text: collection.display_name().to_string(),
            pos: Vec2::ZERO,
            size: self.config.logo_size * self.config.logo_scale,
            origin: Vec2::new(0.5, 0.5),
            color,
            font_px,
            anchor_x,
            anchor_y,
        });
        self.place_logo(&mut logo);
        logo
    }

    /// Anchors a logo inside its slot box according to the alignment.
    fn place_logo(&self, logo: &mut Logo) {
        let origin = if self.config.kind.is_vertical() {
            match self.config.logo_alignment {
                LogoAlignment::Left => Vec2::new(0.0, 0.5),
                LogoAlignment::Right => Vec2::new(1.0, 0.5),
                _ => Vec2::new(0.5, 0.5),
            }
        } else {
            match self.config.logo_alignment {
                LogoAlignment::Top => Vec2::new(0.5, 0.0),
                LogoAlignment::Bottom => Vec2::new(0.5, 1.0),
                _ => Vec2::new(0.5, 0.5),
            }
        };
        logo.set_origin(origin);
        logo.set_position(self.config.logo_size * origin);
    }

    /// Feeds a discrete intent into the view. Returns the activated
    /// collection's name when the intent committed a selection.
    pub fn handle_intent(
        &mut self,
        intent: Intent,
        events: &mut dyn EventSink,
    ) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        match intent {
            Intent::Previous => {
                self.list_input(-1);
                None
            }
            Intent::Next => {
                self.list_input(1);
                None
            }
            Intent::DirectionReleased => {
                self.scroller.stop();
                if let Some(entry) = self.selected() {
                    events.fire_event("collection-select", &entry.collection.name, "input");
                }
                None
            }
            Intent::Activate => {
                self.scroller.stop();
                let name = self.selected()?.collection.name.clone();
                events.fire_event("collection-activate", &name, "input");
                Some(name)
            }
            Intent::JumpTo(index) => {
                let index = index % self.entries.len();
                self.go_to(index, true);
                None
            }
        }
    }

    fn list_input(&mut self, direction: i32) {
        let step = self.scroller.set_direction(direction);
        if step != 0 {
            self.step_cursor(step);
        }
    }

    fn step_cursor(&mut self, steps: i32) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = wrap_index(self.cursor as i64 + i64::from(steps), self.entries.len());
        self.on_cursor_changed();
    }

    /// Moves the selection to `index`, optionally skipping the transition.
    pub fn go_to(&mut self, index: usize, animate: bool) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = index % self.entries.len();
        self.on_cursor_changed();
        if !animate {
            self.finish_animation(SLOT_CAMERA);
        }
    }

    /// Per-frame tick: advances held-key scrolling and the animation slots.
    pub fn update(&mut self, dt_ms: u32) {
        let steps = self.scroller.update(dt_ms);
        if steps != 0 {
            self.step_cursor(steps);
        }
        self.tick_animations(dt_ms);
    }

    /// Recomputes the camera target and schedules the transition and info
    /// label animations for the new selection.
    fn on_cursor_changed(&mut self) {
        let Some(selected) = self.entries.get(self.cursor) else {
            return;
        };

        let start_pos = self.cam_offset;
        let pos_max = self.entries.len() as f32;
        let target = self.cursor as f32;

        // Pick the wrap candidate closest to the current offset so the
        // camera never animates the long way around.
        let mut end_pos = target;
        let dist = (end_pos - start_pos).abs();
        if (target + pos_max - start_pos).abs() < dist {
            end_pos = target + pos_max;
        }
        if (target - pos_max - start_pos).abs() < dist {
            end_pos = target - pos_max;
        }

        let go_fast = self.transition_style == TransitionStyle::Instant;

        let info_start = self.info.opacity;
        let fade_out_ms = (info_start * if go_fast { 10.0 } else { 150.0 }) as u32;
        let info_text = match selected.collection.kind {
            CollectionKind::Configuration => "CONFIGURATION".to_string(),
            CollectionKind::Browsable => {
                let count = selected.collection.entry_count;
                if count == 1 {
                    "1 ENTRY AVAILABLE".to_string()
                } else {
                    format!("{} ENTRIES AVAILABLE", count)
                }
            }
        };
        self.slots[SLOT_INFO_FADE_OUT] = Some(ActiveAnimation {
            animation: Animation::new(
                Descriptor::InfoFade(InfoFade { from: info_start, to: 0.0 }),
                0,
                fade_out_ms,
            ),
            on_finish: Some(CompletionAction::SetInfoText(info_text)),
        });
        self.slots[SLOT_INFO_FADE_IN] = Some(ActiveAnimation {
            animation: Animation::new(
                Descriptor::InfoFade(InfoFade { from: 0.0, to: 1.0 }),
                if go_fast { 0 } else { INFO_FADE_IN_DELAY_MS },
                if go_fast { 10 } else { 300 },
            ),
            on_finish: None,
        });

        if end_pos == self.cam_offset && end_pos == self.extras_cam_offset {
            return;
        }

        let camera = CameraMove {
            style: self.transition_style,
            start: start_pos,
            end: end_pos,
            wrap_len: pos_max,
            move_carousel: self.move_carousel,
            start_extras_fade: self.extras_fade_opacity,
        };
        let duration = match self.transition_style {
            TransitionStyle::Fade | TransitionStyle::Slide => TRANSITION_MS,
            TransitionStyle::Instant => {
                if self.move_carousel {
                    TRANSITION_MS
                } else {
                    1
                }
            }
        };
        self.slots[SLOT_CAMERA] = Some(ActiveAnimation {
            animation: Animation::new(Descriptor::Camera(camera), 0, duration),
            on_finish: None,
        });
    }

    fn tick_animations(&mut self, dt_ms: u32) {
        for slot in 0..self.slots.len() {
            let (descriptor, progress, finished) = match self.slots[slot].as_mut() {
                Some(active) => {
                    active.animation.advance(dt_ms);
                    (
                        active.animation.descriptor,
                        active.animation.progress(),
                        active.animation.is_finished(),
                    )
                }
                None => continue,
            };
            if let Some(t) = progress {
                self.apply_animation(&descriptor, t);
            }
            if finished {
                let done = self.slots[slot].take();
                if let Some(CompletionAction::SetInfoText(text)) =
                    done.and_then(|a| a.on_finish)
                {
                    self.info.text = text;
                }
            }
        }
    }

    fn apply_animation(&mut self, descriptor: &Descriptor, t: f32) {
        match descriptor {
            Descriptor::Camera(camera) => {
                let sample = camera.sample(t);
                self.cam_offset = sample.cam_offset;
                if let Some(extras) = sample.extras_cam_offset {
                    self.extras_cam_offset = extras;
                }
                if let Some(fade) = sample.extras_fade_opacity {
                    self.extras_fade_opacity = fade;
                }
            }
            Descriptor::InfoFade(fade) => {
                self.info.opacity = fade.sample(t).clamp(0.0, 1.0);
            }
        }
    }

    /// Completes the animation in `slot` immediately (including its
    /// completion action), as if its whole envelope had elapsed.
    fn finish_animation(&mut self, slot: usize) {
        let descriptor = match self.slots[slot].as_mut() {
            Some(active) => {
                active.animation.finish();
                active.animation.descriptor
            }
            None => return,
        };
        self.apply_animation(&descriptor, 1.0);
        let done = self.slots[slot].take();
        if let Some(CompletionAction::SetInfoText(text)) = done.and_then(|a| a.on_finish) {
            self.info.text = text;
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Issues the full frame in paint order: far decorations, the fade
    /// overlay, then carousel and info label interleaved with the remaining
    /// decoration z-ranges.
    pub fn render(&self, parent: &Transform, sink: &mut dyn RenderSink) {
        if self.entries.is_empty() {
            return;
        }
        let carousel_z = self.config.z_index;
        let info_z = self.info.z_index;
        let lo = carousel_z.min(info_z);
        let hi = carousel_z.max(info_z);

        self.render_extras(parent, sink, f32::NEG_INFINITY, lo);
        self.render_fade(parent, sink);

        if carousel_z > info_z {
            self.render_info(parent, sink);
        } else {
            self.render_carousel(parent, sink);
        }

        self.render_extras(parent, sink, lo, hi);

        if carousel_z > info_z {
            self.render_carousel(parent, sink);
        } else {
            self.render_info(parent, sink);
        }

        self.render_extras(parent, sink, hi, f32::INFINITY);
    }

    fn render_carousel(&self, parent: &Transform, sink: &mut dyn RenderSink) {
        let config = &self.config;
        let band_origin = config.origin * config.size;
        let carousel_trans = parent
            .translated(config.pos)
            .translated(band_origin * -1.0);

        sink.push_clip(
            carousel_trans.apply(Vec2::ZERO),
            config.size * carousel_trans.scale_factors(),
        );
        sink.set_transform(&carousel_trans);
        sink.fill_rect(
            Vec2::ZERO,
            config.size,
            GradientFill {
                start: config.color,
                end: config.color_end,
                horizontal: config.gradient_horizontal,
            },
        );

        let max_count = config.max_logo_count.max(1) as f32;
        let logo = config.logo_size;
        let mut spacing = Vec2::ZERO;
        let (x_off, y_off) = match config.kind {
            CarouselType::VerticalWheel => {
                let y = (config.size.y - logo.y) / 2.0;
                let x = match config.logo_alignment {
                    LogoAlignment::Left => logo.x / 10.0,
                    LogoAlignment::Right => config.size.x - logo.x * 1.1,
                    _ => (config.size.x - logo.x) / 2.0,
                };
                (x, y)
            }
            CarouselType::Vertical => {
                spacing.y = (config.size.y - logo.y * max_count) / max_count + logo.y;
                let y = (config.size.y - logo.y) / 2.0 - self.cam_offset * spacing.y;
                let x = match config.logo_alignment {
                    LogoAlignment::Left => logo.x / 10.0,
                    LogoAlignment::Right => config.size.x - logo.x * 1.1,
                    _ => (config.size.x - logo.x) / 2.0,
                };
                (x, y)
            }
            CarouselType::HorizontalWheel => {
                let x = (config.size.x - logo.x) / 2.0;
                let y = match config.logo_alignment {
                    LogoAlignment::Top => logo.y / 10.0,
                    LogoAlignment::Bottom => config.size.y - logo.y * 1.1,
                    _ => (config.size.y - logo.y) / 2.0,
                };
                (x, y)
            }
            CarouselType::Horizontal => {
                spacing.x = (config.size.x - logo.x * max_count) / max_count + logo.x;
                let x = (config.size.x - logo.x) / 2.0 - self.cam_offset * spacing.x;
                let y = match config.logo_alignment {
                    LogoAlignment::Top => logo.y / 10.0,
                    LogoAlignment::Bottom => config.size.y - logo.y * 1.1,
                    _ => (config.size.y - logo.y) / 2.0,
                };
                (x, y)
            }
        };

        let slots = window_slots(
            self.entries.len(),
            config.max_logo_count,
            self.cam_offset,
            self.scroller.velocity(),
        );
        for slot in slots {
            let logo_trans = carousel_trans.translated(Vec2::new(
                slot.slot as f32 * spacing.x + x_off,
                slot.slot as f32 * spacing.y + y_off,
            ));
            let rotation = config
                .kind
                .is_wheel()
                .then(|| (config.logo_rotation * slot.slot_distance, config.logo_rotation_origin));
            let frame = LogoFrame {
                scale: ring_scale(slot.ring_distance),
                opacity: ring_opacity(slot.ring_distance),
                rotation,
            };
            self.entries[slot.index].logo.render(&logo_trans, frame, sink);
        }

        sink.pop_clip();
    }

    /// Draws the decoration layers whose z-index falls in `[lower, upper)`,
    /// windowed around the extras camera offset. While the view is hidden
    /// only the selected entry's decorations draw.
    fn render_extras(
        &self,
        parent: &Transform,
        sink: &mut dyn RenderSink,
        lower: f32,
        upper: f32,
    ) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let extras_center = self.extras_cam_offset as i64;
        let (buffer_left, buffer_right) = velocity_buffers(self.scroller.velocity());

        sink.push_clip(
            parent.apply(Vec2::ZERO),
            self.screen * parent.scale_factors(),
        );

        for i in (extras_center + i64::from(buffer_left))
            ..=(extras_center + i64::from(buffer_right))
        {
            let index = wrap_index(i, len);
            if !self.showing && index != self.cursor {
                continue;
            }

            let shift = i as f32 - self.extras_cam_offset;
            let offset = if self.config.kind.is_vertical() {
                Vec2::new(0.0, shift * self.screen.y)
            } else {
                Vec2::new(shift * self.screen.x, 0.0)
            };
            let extras_trans = parent.translated(offset);

            sink.push_clip(
                extras_trans.apply(Vec2::ZERO),
                self.screen * extras_trans.scale_factors(),
            );
            for decoration in &self.entries[index].extras {
                if decoration.z_index >= lower && decoration.z_index < upper {
                    decoration.render(&extras_trans, sink);
                }
            }
            sink.pop_clip();
        }

        sink.pop_clip();
    }

    /// Black overlay used by the fade transition.
    fn render_fade(&self, parent: &Transform, sink: &mut dyn RenderSink) {
        if self.extras_fade_opacity > 0.0 {
            let alpha = (self.extras_fade_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
            sink.set_transform(parent);
            sink.fill_rect(
                Vec2::ZERO,
                self.screen,
                GradientFill::solid(Rgba::new(0, 0, 0, alpha)),
            );
        }
    }

    fn render_info(&self, parent: &Transform, sink: &mut dyn RenderSink) {
        self.info.render(parent, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingSink, RenderOp};
    use crate::script::RecordingEventSink;
    use std::collections::HashMap;

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    fn sample_catalog(n: usize) -> Catalog {
        let collections = (0..n)
            .map(|i| Collection {
                name: format!("col{i}"),
                full_name: None,
                kind: CollectionKind::Browsable,
                entry_count: (i as u32 + 1) * 10,
                theme: None,
                visible: true,
            })
            .collect();
        Catalog::new(collections)
    }

    fn make_view(n: usize) -> CarouselView {
        let mut view = CarouselView::new(SCREEN);
        let mut settings = Settings::default();
        view.populate(&sample_catalog(n), &ThemeSet::default(), &mut settings);
        view
    }

    fn themed_set(toml: &str) -> ThemeSet {
        let theme = Theme::from_toml_str(toml, std::path::Path::new("/theme"))
            .expect("theme should parse");
        let mut themes = HashMap::new();
        themes.insert("t".to_string(), theme);
        ThemeSet::from_themes(themes)
    }

    fn themed_view(n: usize, theme_toml: &str) -> CarouselView {
        let mut catalog = sample_catalog(n);
        let collections: Vec<Collection> = catalog
            .collections()
            .iter()
            .cloned()
            .map(|mut c| {
                c.theme = Some("t".to_string());
                c
            })
            .collect();
        catalog = Catalog::new(collections);
        let mut view = CarouselView::new(SCREEN);
        let mut settings = Settings::default();
        view.populate(&catalog, &themed_set(theme_toml), &mut settings);
        view
    }

    #[test]
    fn populate_builds_text_logo_entries_in_order() {
        let view = make_view(3);
        assert_eq!(view.len(), 3);
        let names: Vec<_> = view
            .entries()
            .iter()
            .map(|e| e.collection.name.as_str())
            .collect();
        assert_eq!(names, vec!["col0", "col1", "col2"]);
        assert!(matches!(view.entries()[0].logo, Logo::Text(_)));
    }

    #[test]
    fn empty_populate_resets_restricted_mode_exactly_once() {
        let mut view = CarouselView::new(SCREEN);
        let mut settings = Settings::default();
        settings.set_ui_mode(UiMode::Kiosk);

        let first = view.populate(&Catalog::default(), &ThemeSet::default(), &mut settings);
        assert_eq!(first, PopulateOutcome::EmptyCatalog { mode_was_reset: true });
        assert_eq!(settings.ui_mode(), UiMode::Full);

        let second = view.populate(&Catalog::default(), &ThemeSet::default(), &mut settings);
        assert_eq!(second, PopulateOutcome::EmptyCatalog { mode_was_reset: false });
    }

    #[test]
    fn transition_picks_the_short_way_around_the_seam() {
        let mut view = make_view(10);
        view.go_to(9, false);
        assert_eq!(view.cam_offset(), 9.0);

        view.go_to(0, true);
        view.update(100);
        // Moving forward through the seam, not back across the whole list.
        assert!(view.cam_offset() > 9.0);

        view.update(400);
        assert_eq!(view.cam_offset(), 0.0);
        // The decoration offset snaps to the unwrapped endpoint.
        assert_eq!(view.extras_cam_offset(), 10.0);
    }

    #[test]
    fn instant_without_carousel_motion_snaps_in_one_tick() {
        let mut view = make_view(5);
        view.set_transition(TransitionStyle::Instant, false);
        view.go_to(3, true);
        view.update(1);
        assert_eq!(view.cam_offset(), 3.0);
        assert_eq!(view.extras_cam_offset(), 3.0);
    }

    #[test]
    fn fade_transition_crossfades_decorations() {
        let mut view = make_view(5);
        view.set_transition(TransitionStyle::Fade, true);
        view.go_to(1, true);

        view.update(100); // t = 0.2, ramping up
        assert!(view.extras_fade_opacity() > 0.5);
        assert_eq!(view.extras_cam_offset(), 0.0);

        view.update(200); // t = 0.6, held at full fade, index swapped
        assert_eq!(view.extras_fade_opacity(), 1.0);
        assert_eq!(view.extras_cam_offset(), 1.0);

        view.update(200); // t = 1.0, faded back out
        assert!(view.extras_fade_opacity().abs() < 1e-6);
    }

    #[test]
    fn slide_transition_moves_decorations_with_camera() {
        let mut view = make_view(5);
        view.set_transition(TransitionStyle::Slide, true);
        view.go_to(1, true);
        view.update(250);
        assert_eq!(view.extras_cam_offset(), view.cam_offset());
        assert!(view.cam_offset() > 0.0);
    }

    #[test]
    fn info_text_reflects_entry_count_after_fade_out() {
        let mut view = make_view(5);
        view.go_to(1, true);
        view.update(1);
        assert_eq!(view.info_text(), "20 ENTRIES AVAILABLE");

        // The fade-in brings the label back to full opacity.
        view.update(20);
        assert_eq!(view.info_opacity(), 1.0);
    }

    #[test]
    fn configuration_collections_report_configuration() {
        let catalog = Catalog::new(vec![Collection {
            name: "settings".to_string(),
            full_name: None,
            kind: CollectionKind::Configuration,
            entry_count: 0,
            theme: None,
            visible: true,
        }]);
        let mut view = CarouselView::new(SCREEN);
        let mut settings = Settings::default();
        view.populate(&catalog, &ThemeSet::default(), &mut settings);
        view.go_to(0, false);
        view.update(1);
        assert_eq!(view.info_text(), "CONFIGURATION");
    }

    #[test]
    fn singular_entry_count_uses_singular_label() {
        let catalog = Catalog::new(vec![Collection {
            name: "lone".to_string(),
            full_name: None,
            kind: CollectionKind::Browsable,
            entry_count: 1,
            theme: None,
            visible: true,
        }]);
        let mut view = CarouselView::new(SCREEN);
        let mut settings = Settings::default();
        view.populate(&catalog, &ThemeSet::default(), &mut settings);
        view.go_to(0, false);
        view.update(1);
        assert_eq!(view.info_text(), "1 ENTRY AVAILABLE");
    }

    #[test]
    fn direction_release_fires_selection_event() {
        let mut view = make_view(5);
        let mut events = RecordingEventSink::default();
        view.handle_intent(Intent::Next, &mut events);
        assert!(events.events.is_empty());
        view.handle_intent(Intent::DirectionReleased, &mut events);
        assert_eq!(
            events.events,
            vec![(
                "collection-select".to_string(),
                "col1".to_string(),
                "input".to_string()
            )]
        );
    }

    #[test]
    fn activate_stops_scrolling_and_reports_the_selection() {
        let mut view = make_view(5);
        let mut events = RecordingEventSink::default();
        view.handle_intent(Intent::Next, &mut events);
        let activated = view.handle_intent(Intent::Activate, &mut events);
        assert_eq!(activated.as_deref(), Some("col1"));
        assert_eq!(events.events.last().unwrap().0, "collection-activate");
    }

    #[test]
    fn jump_to_wraps_modulo_length() {
        let mut view = make_view(5);
        let mut events = RecordingEventSink::default();
        view.handle_intent(Intent::JumpTo(7), &mut events);
        assert_eq!(view.cursor(), 2);
    }

    #[test]
    fn intents_on_an_empty_view_are_ignored() {
        let mut view = CarouselView::new(SCREEN);
        let mut events = RecordingEventSink::default();
        assert_eq!(view.handle_intent(Intent::Next, &mut events), None);
        assert_eq!(view.handle_intent(Intent::Activate, &mut events), None);
        assert!(events.events.is_empty());
    }

    #[test]
    fn render_paints_center_logo_last() {
        let mut view = make_view(5);
        view.go_to(2, false);
        let mut sink = RecordingSink::new();
        view.render(&Transform::IDENTITY, &mut sink);

        let labels = sink.drawn_labels();
        assert!(!labels.is_empty());
        assert_eq!(labels.last().map(String::as_str), Some("col2"));
        // The carousel band background precedes every logo.
        let first_rect = sink
            .ops
            .iter()
            .position(|op| matches!(op, RenderOp::FillRect { .. }))
            .unwrap();
        let first_text = sink
            .ops
            .iter()
            .position(|op| matches!(op, RenderOp::Text(_)))
            .unwrap();
        assert!(first_rect < first_text);
    }

    #[test]
    fn single_visible_logo_renders_exactly_one_slot() {
        let view = themed_view(
            6,
            r#"
            [system.systemcarousel]
            kind = "carousel"
            max_logo_count = 1
            "#,
        );
        let mut sink = RecordingSink::new();
        view.render(&Transform::IDENTITY, &mut sink);
        assert_eq!(sink.drawn_labels().len(), 1);
    }

    #[test]
    fn hidden_view_draws_only_the_selected_entrys_extras() {
        let theme_toml = r#"
        [system.backdrop]
        kind = "image"
        extra = true
        z_index = 10.0
        path = "backdrop.png"
        "#;
        let mut view = themed_view(5, theme_toml);

        let quad_count = |view: &CarouselView| {
            let mut sink = RecordingSink::new();
            view.render(&Transform::IDENTITY, &mut sink);
            sink.ops
                .iter()
                .filter(|op| matches!(op, RenderOp::Quad(_)))
                .count()
        };

        assert_eq!(quad_count(&view), 1);
        view.on_show();
        assert_eq!(quad_count(&view), 5);
    }

    #[test]
    fn render_on_an_empty_view_draws_nothing() {
        let view = CarouselView::new(SCREEN);
        let mut sink = RecordingSink::new();
        view.render(&Transform::IDENTITY, &mut sink);
        assert!(sink.ops.is_empty());
    }

    #[test]
    fn help_prompts_follow_the_scroll_axis() {
        let horizontal = make_view(3);
        assert_eq!(horizontal.help_prompts()[0].control, "left/right");

        let vertical = themed_view(
            3,
            r#"
            [system.systemcarousel]
            kind = "carousel"
            type = "vertical"
            "#,
        );
        assert_eq!(vertical.help_prompts()[0].control, "up/down");
    }

    #[test]
    fn scroll_state_survives_repopulation() {
        let mut view = make_view(5);
        view.go_to(3, false);
        let mut settings = Settings::default();
        view.populate(&sample_catalog(5), &ThemeSet::default(), &mut settings);
        assert_eq!(view.cam_offset(), 3.0);
        assert_eq!(view.cursor(), 3);

        // Shrinking the catalog clamps the cursor back into range.
        view.populate(&sample_catalog(2), &ThemeSet::default(), &mut settings);
        assert_eq!(view.cursor(), 0);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Transition animations for the carousel camera and the info label.
//!
//! Animations are plain descriptor structs sampled from normalized progress.
//! The view advances them once per tick; there are no closures capturing
//! view state, so a descriptor can be inspected and tested in isolation.

/// How a selection change moves the camera and the decoration layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// Camera eases; decorations snap straight to the target.
    #[default]
    Instant,
    /// Decorations slide in lockstep with the camera.
    Slide,
    /// Decorations cross-fade through black while the camera eases.
    Fade,
}

impl TransitionStyle {
    /// Parses a style name; anything unrecognized reads as
    /// [`TransitionStyle::Instant`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "fade" => TransitionStyle::Fade,
            "slide" => TransitionStyle::Slide,
            _ => TransitionStyle::Instant,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TransitionStyle::Instant => "instant",
            TransitionStyle::Slide => "slide",
            TransitionStyle::Fade => "fade",
        }
    }
}

#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Cubic ease-out: fast start, settling into the target.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = t - 1.0;
    u * u * u + 1.0
}

/// Camera transition descriptor. `end` may lie outside `[0, wrap_len)` when
/// the shortest path crosses the wrap seam; the eased value is wrapped back
/// into range each sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMove {
    pub style: TransitionStyle,
    pub start: f32,
    pub end: f32,
    pub wrap_len: f32,
    /// `false` pins the camera to the endpoint (the logo band snaps) while
    /// decorations still animate.
    pub move_carousel: bool,
    /// Fade opacity at the moment the transition started, biasing the ramp-up
    /// when a fade interrupts another fade.
    pub start_extras_fade: f32,
}

/// One sampled camera state. `None` fields leave the current value untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSample {
    pub cam_offset: f32,
    pub extras_cam_offset: Option<f32>,
    pub extras_fade_opacity: Option<f32>,
}

impl CameraMove {
    #[must_use]
    pub fn sample(&self, t: f32) -> CameraSample {
        let mut eased = lerp(self.start, self.end, ease_out_cubic(t));
        if eased < 0.0 {
            eased += self.wrap_len;
        }
        if eased >= self.wrap_len {
            eased -= self.wrap_len;
        }
        let cam_offset = if self.move_carousel { eased } else { self.end };

        match self.style {
            TransitionStyle::Instant => CameraSample {
                cam_offset,
                extras_cam_offset: Some(self.end),
                extras_fade_opacity: None,
            },
            TransitionStyle::Slide => CameraSample {
                cam_offset,
                extras_cam_offset: Some(eased),
                extras_fade_opacity: None,
            },
            TransitionStyle::Fade => {
                let fade = if t < 0.3 {
                    (t / 0.3 + self.start_extras_fade).min(1.0)
                } else if t < 0.7 {
                    1.0
                } else {
                    lerp(1.0, 0.0, (t - 0.7) / 0.3)
                };
                CameraSample {
                    cam_offset,
                    // The decoration index only swaps past the midpoint, so
                    // the old layers fade out and the new ones fade in.
                    extras_cam_offset: (t > 0.5).then_some(self.end),
                    extras_fade_opacity: Some(fade),
                }
            }
        }
    }
}

/// Linear opacity fade for the info label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoFade {
    pub from: f32,
    pub to: f32,
}

impl InfoFade {
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        lerp(self.from, self.to, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Descriptor {
    Camera(CameraMove),
    InfoFade(InfoFade),
}

/// A scheduled animation: a descriptor plus its timing envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub descriptor: Descriptor,
    delay_ms: u32,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl Animation {
    #[must_use]
    pub fn new(descriptor: Descriptor, delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            descriptor,
            delay_ms,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    pub fn advance(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    /// Normalized progress in `[0, 1]`, or `None` while the start delay has
    /// not elapsed. A zero duration reports `1.0` as soon as the delay ends.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        let active = self.elapsed_ms.checked_sub(self.delay_ms)?;
        if self.duration_ms == 0 {
            return Some(1.0);
        }
        Some((active as f32 / self.duration_ms as f32).min(1.0))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Jumps straight to the end of the envelope.
    pub fn finish(&mut self) {
        self.elapsed_ms = self.delay_ms.saturating_add(self.duration_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names_round_trip_and_unknowns_fall_back() {
        assert_eq!(TransitionStyle::from_name("fade"), TransitionStyle::Fade);
        assert_eq!(TransitionStyle::from_name("SLIDE"), TransitionStyle::Slide);
        assert_eq!(TransitionStyle::from_name("instant"), TransitionStyle::Instant);
        assert_eq!(TransitionStyle::from_name("teleport"), TransitionStyle::Instant);
    }

    #[test]
    fn ease_out_cubic_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // Ease-out front-loads motion.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    fn fade_move() -> CameraMove {
        CameraMove {
            style: TransitionStyle::Fade,
            start: 2.0,
            end: 4.0,
            wrap_len: 5.0,
            move_carousel: true,
            start_extras_fade: 0.0,
        }
    }

    #[test]
    fn fade_envelope_matches_breakpoints() {
        let anim = fade_move();
        assert_eq!(anim.sample(0.0).extras_fade_opacity, Some(0.0));
        assert_eq!(anim.sample(0.3).extras_fade_opacity, Some(1.0));
        assert_eq!(anim.sample(0.5).extras_fade_opacity, Some(1.0));
        let tail = anim.sample(1.0).extras_fade_opacity.unwrap();
        assert!(tail.abs() < 1e-6);
    }

    #[test]
    fn fade_swaps_decorations_only_past_midpoint() {
        let anim = fade_move();
        assert_eq!(anim.sample(0.49).extras_cam_offset, None);
        assert_eq!(anim.sample(0.51).extras_cam_offset, Some(4.0));
    }

    #[test]
    fn fade_ramp_is_biased_by_interrupted_fade() {
        let anim = CameraMove {
            start_extras_fade: 0.5,
            ..fade_move()
        };
        assert_eq!(anim.sample(0.0).extras_fade_opacity, Some(0.5));
        assert_eq!(anim.sample(0.15).extras_fade_opacity, Some(1.0));
    }

    #[test]
    fn slide_moves_decorations_with_camera() {
        let anim = CameraMove {
            style: TransitionStyle::Slide,
            ..fade_move()
        };
        let mid = anim.sample(0.5);
        assert_eq!(mid.extras_cam_offset, Some(mid.cam_offset));
        assert_eq!(mid.extras_fade_opacity, None);
    }

    #[test]
    fn instant_snaps_decorations_to_endpoint() {
        let anim = CameraMove {
            style: TransitionStyle::Instant,
            ..fade_move()
        };
        assert_eq!(anim.sample(0.1).extras_cam_offset, Some(4.0));
    }

    #[test]
    fn eased_offset_wraps_across_the_seam() {
        let anim = CameraMove {
            style: TransitionStyle::Slide,
            start: 9.0,
            end: 10.0,
            wrap_len: 10.0,
            move_carousel: true,
            start_extras_fade: 0.0,
        };
        let done = anim.sample(1.0);
        assert_eq!(done.cam_offset, 0.0);
    }

    #[test]
    fn pinned_camera_snaps_even_past_the_seam() {
        let anim = CameraMove {
            move_carousel: false,
            ..fade_move()
        };
        assert_eq!(anim.sample(0.1).cam_offset, 4.0);
    }

    #[test]
    fn delay_gates_progress() {
        let mut anim = Animation::new(
            Descriptor::InfoFade(InfoFade { from: 0.0, to: 1.0 }),
            2000,
            300,
        );
        anim.advance(1999);
        assert_eq!(anim.progress(), None);
        anim.advance(151);
        assert_eq!(anim.progress(), Some(0.5));
        assert!(!anim.is_finished());
        anim.advance(150);
        assert_eq!(anim.progress(), Some(1.0));
        assert!(anim.is_finished());
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut anim = Animation::new(
            Descriptor::InfoFade(InfoFade { from: 1.0, to: 0.0 }),
            0,
            0,
        );
        assert!(anim.is_finished());
        anim.advance(0);
        assert_eq!(anim.progress(), Some(1.0));
    }

    #[test]
    fn finish_jumps_to_the_end() {
        let mut anim = Animation::new(
            Descriptor::InfoFade(InfoFade { from: 0.0, to: 1.0 }),
            500,
            500,
        );
        anim.finish();
        assert!(anim.is_finished());
        assert_eq!(anim.progress(), Some(1.0));
    }
}

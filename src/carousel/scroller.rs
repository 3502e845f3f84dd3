// SPDX-License-Identifier: MPL-2.0
//! Held-key auto-repeat scrolling.
//!
//! A directional press steps the cursor once immediately; holding the key
//! past the initial delay repeats the step at a fixed interval until release.
//! The velocity sign feeds the windowing buffer table while scrolling.

/// Hold time before auto-repeat kicks in.
const AUTOSCROLL_DELAY_MS: u32 = 500;
/// Step interval once auto-repeating.
const AUTOSCROLL_INTERVAL_MS: u32 = 150;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scroller {
    direction: i32,
    held_ms: u32,
    steps_taken: u32,
}

impl Scroller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directional input. Returns the immediate cursor step to
    /// take: the direction on a fresh press, `0` for a repeat of the held
    /// direction or a release.
    pub fn set_direction(&mut self, direction: i32) -> i32 {
        if direction == 0 {
            self.stop();
            return 0;
        }
        if direction == self.direction {
            return 0;
        }
        self.direction = direction.signum();
        self.held_ms = 0;
        self.steps_taken = 0;
        self.direction
    }

    pub fn stop(&mut self) {
        self.direction = 0;
        self.held_ms = 0;
        self.steps_taken = 0;
    }

    /// Current velocity class: `-1`, `0`, or `+1`.
    #[must_use]
    pub fn velocity(&self) -> i32 {
        self.direction
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.direction != 0
    }

    /// Advances hold time and returns the signed number of auto-repeat steps
    /// due this tick.
    pub fn update(&mut self, dt_ms: u32) -> i32 {
        if self.direction == 0 {
            return 0;
        }
        self.held_ms = self.held_ms.saturating_add(dt_ms);
        if self.held_ms < AUTOSCROLL_DELAY_MS {
            return 0;
        }
        let due = 1 + (self.held_ms - AUTOSCROLL_DELAY_MS) / AUTOSCROLL_INTERVAL_MS;
        let new_steps = due.saturating_sub(self.steps_taken);
        self.steps_taken = due;
        new_steps as i32 * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_press_steps_immediately() {
        let mut scroller = Scroller::new();
        assert_eq!(scroller.set_direction(1), 1);
        assert_eq!(scroller.velocity(), 1);
    }

    #[test]
    fn os_key_repeat_of_held_direction_is_ignored() {
        let mut scroller = Scroller::new();
        scroller.set_direction(-1);
        assert_eq!(scroller.set_direction(-1), 0);
    }

    #[test]
    fn release_stops_scrolling() {
        let mut scroller = Scroller::new();
        scroller.set_direction(1);
        assert_eq!(scroller.set_direction(0), 0);
        assert_eq!(scroller.velocity(), 0);
        assert!(!scroller.is_scrolling());
    }

    #[test]
    fn no_repeat_before_the_delay() {
        let mut scroller = Scroller::new();
        scroller.set_direction(1);
        assert_eq!(scroller.update(499), 0);
    }

    #[test]
    fn repeats_accumulate_with_hold_time() {
        let mut scroller = Scroller::new();
        scroller.set_direction(1);
        // Crossing the delay produces the first repeat step.
        assert_eq!(scroller.update(500), 1);
        // Not enough time for another.
        assert_eq!(scroller.update(100), 0);
        // Held 800ms: repeats were due at 500/650/800 and one was taken.
        assert_eq!(scroller.update(200), 2);
    }

    #[test]
    fn large_tick_emits_multiple_steps() {
        let mut scroller = Scroller::new();
        scroller.set_direction(-1);
        assert_eq!(scroller.update(500 + 450), -4);
    }

    #[test]
    fn direction_flip_resets_the_delay() {
        let mut scroller = Scroller::new();
        scroller.set_direction(1);
        scroller.update(600);
        assert_eq!(scroller.set_direction(-1), -1);
        assert_eq!(scroller.update(100), 0);
        assert_eq!(scroller.velocity(), -1);
    }
}

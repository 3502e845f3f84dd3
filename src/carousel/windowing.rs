// SPDX-License-Identifier: MPL-2.0
//! Circular windowing and paint ordering for the logo band.
//!
//! Given the continuous camera offset and the current scroll velocity, this
//! module decides which slots are worth drawing (with extra buffer slots in
//! the scroll direction so logos never pop in late), wraps each slot to a
//! real entry index, and orders the result far-to-near so the centered logo
//! paints on top.

/// Buffer slot counts indexed by `velocity + 1` (left, stopped, right).
const LOGO_BUFFERS_LEFT: [i32; 3] = [-5, -2, -1];
const LOGO_BUFFERS_RIGHT: [i32; 3] = [1, 2, 5];

/// Wraps a possibly-negative slot number into `[0, len)`.
#[must_use]
pub fn wrap_index(slot: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    slot.rem_euclid(len as i64) as usize
}

/// Shortest-path distance between two indices on a cycle of size `len`:
/// `min(|a - b|, len - |a - b|)`, with the sign resolved by comparing the raw
/// difference against half the cycle.
#[must_use]
pub fn ring_distance(from: usize, to: usize, len: usize) -> i32 {
    debug_assert!(from < len && to < len);
    let mut d = from as i64 - to as i64;
    let half = (len / 2) as i64;
    if d > half {
        d -= len as i64;
    } else if d < -half {
        d += len as i64;
    }
    d.unsigned_abs() as i32
}

/// The raw buffer pair for a velocity class, without the single-logo
/// collapse. The extras pass windows with these directly.
#[must_use]
pub fn velocity_buffers(velocity: i32) -> (i32, i32) {
    let index = (velocity + 1).clamp(0, 2) as usize;
    (LOGO_BUFFERS_LEFT[index], LOGO_BUFFERS_RIGHT[index])
}

/// Buffer pair for the logo band; a single visible logo disables the side
/// buffers entirely.
#[must_use]
pub fn scroll_buffers(velocity: i32, visible_count: usize) -> (i32, i32) {
    if visible_count == 1 {
        return (0, 0);
    }
    velocity_buffers(velocity)
}

/// One slot selected for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSlot {
    /// Wrapped entry index, always in `[0, len)`.
    pub index: usize,
    /// Unwrapped slot number, used for spacing offsets.
    pub slot: i64,
    /// Signed distance in slots from the camera; drives wheel rotation and
    /// the paint-order tie-break.
    pub slot_distance: f32,
    /// Circular distance from the rounded camera center; drives depth,
    /// scale, and opacity.
    pub ring_distance: i32,
}

/// Enumerates the visible slot window and returns it in paint order:
/// descending ring distance first, then descending `|slot_distance|`, so the
/// entry nearest the visual center is painted last (on top).
#[must_use]
pub fn window_slots(
    len: usize,
    max_visible: usize,
    cam_offset: f32,
    velocity: i32,
) -> Vec<WindowSlot> {
    if len == 0 {
        return Vec::new();
    }

    let visible = max_visible.min(len);
    // Truncated slot base for the enumeration, rounded center for ring
    // distances; rounding keeps depth stable while the camera is mid-flight.
    let center_slot = cam_offset as i64;
    let center_index = wrap_index(cam_offset.round() as i64, len);

    let (buffer_left, buffer_right) = scroll_buffers(velocity, visible);
    let half = (visible / 2) as i64;

    let first = center_slot - half + buffer_left as i64;
    let last = center_slot + half + buffer_right as i64;

    let mut slots: Vec<WindowSlot> = (first..=last)
        .map(|slot| {
            let index = wrap_index(slot, len);
            WindowSlot {
                index,
                slot,
                slot_distance: slot as f32 - cam_offset,
                ring_distance: ring_distance(index, center_index, len),
            }
        })
        .collect();

    slots.sort_by(|a, b| {
        b.ring_distance.cmp(&a.ring_distance).then_with(|| {
            b.slot_distance
                .abs()
                .total_cmp(&a.slot_distance.abs())
        })
    });

    slots
}

/// Two-tier logo scale: full size at the center, fixed reduction elsewhere.
#[must_use]
pub fn ring_scale(ring_distance: i32) -> f32 {
    if ring_distance == 0 {
        1.0
    } else {
        0.75
    }
}

/// Two-tier logo opacity matching [`ring_scale`].
#[must_use]
pub fn ring_opacity(ring_distance: i32) -> u8 {
    if ring_distance == 0 {
        255
    } else {
        210
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_index_handles_negative_slots() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(-6, 5), 4);
        assert_eq!(wrap_index(7, 5), 2);
        assert_eq!(wrap_index(0, 1), 0);
    }

    #[test]
    fn ring_distance_is_symmetric_shortest_path() {
        for len in 1..=8usize {
            for a in 0..len {
                for b in 0..len {
                    let d = ring_distance(a, b, len);
                    let raw = (a as i32 - b as i32).abs();
                    assert_eq!(d, raw.min(len as i32 - raw), "a={a} b={b} len={len}");
                    assert_eq!(d, ring_distance(b, a, len));
                }
            }
        }
    }

    #[test]
    fn buffers_follow_velocity_sign() {
        assert_eq!(velocity_buffers(-1), (-5, 1));
        assert_eq!(velocity_buffers(0), (-2, 2));
        assert_eq!(velocity_buffers(1), (-1, 5));
        // Out-of-range velocities clamp to the nearest profile.
        assert_eq!(velocity_buffers(-7), (-5, 1));
        assert_eq!(velocity_buffers(3), (-1, 5));
    }

    #[test]
    fn single_visible_logo_collapses_buffers() {
        for velocity in -1..=1 {
            assert_eq!(scroll_buffers(velocity, 1), (0, 0));
            let slots = window_slots(8, 1, 3.0, velocity);
            assert_eq!(slots.len(), 1, "velocity={velocity}");
            assert_eq!(slots[0].index, 3);
        }
    }

    #[test]
    fn all_wrapped_indices_stay_in_range() {
        for len in 1..=7usize {
            for velocity in -1..=1 {
                for tenth in -40..=40 {
                    let cam = tenth as f32 / 4.0;
                    for slot in window_slots(len, 3, cam, velocity) {
                        assert!(slot.index < len, "len={len} cam={cam} slot={slot:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(window_slots(0, 3, 0.0, 0).is_empty());
    }

    #[test]
    fn stopped_window_of_five_at_center_two() {
        // n=5, maxVisible=3, stopped buffers (-2, +2), c=2.0: slots -1..=5.
        let slots = window_slots(5, 3, 2.0, 0);
        assert_eq!(slots.len(), 7);

        let mut enumerated: Vec<i64> = slots.iter().map(|s| s.slot).collect();
        enumerated.sort_unstable();
        assert_eq!(enumerated, vec![-1, 0, 1, 2, 3, 4, 5]);

        // The center entry paints last, full-size and opaque.
        let last = slots.last().unwrap();
        assert_eq!(last.index, 2);
        assert_eq!(last.ring_distance, 0);
        assert_eq!(ring_scale(last.ring_distance), 1.0);
        assert_eq!(ring_opacity(last.ring_distance), 255);
    }

    #[test]
    fn paint_order_is_far_to_near_with_slot_tiebreak() {
        let slots = window_slots(5, 3, 2.0, 0);
        for pair in slots.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.ring_distance > b.ring_distance
                    || (a.ring_distance == b.ring_distance
                        && a.slot_distance.abs() >= b.slot_distance.abs()),
                "out of order: {a:?} then {b:?}"
            );
        }
    }

    #[test]
    fn ring_depth_uses_rounded_center_during_motion() {
        // Camera at 2.6 rounds to 3: entry 3 is the depth center even though
        // the slot enumeration still bases at truncated slot 2.
        let slots = window_slots(5, 3, 2.6, 0);
        let top = slots.last().unwrap();
        assert_eq!(top.index, 3);
        assert_eq!(top.ring_distance, 0);
    }

    #[test]
    fn scale_and_opacity_are_two_tier() {
        assert_eq!(ring_scale(1), 0.75);
        assert_eq!(ring_scale(2), 0.75);
        assert_eq!(ring_opacity(1), 210);
        assert_eq!(ring_opacity(2), 210);
    }
}

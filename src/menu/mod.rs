//! Radial pop-up menus
//!
//! Both menus share the same four local offsets, anchored to the right
//! controller's grip and probed with the left controller's tip. The spawn
//! menu maps each slot to a shape; the texture menu maps slot `n` to
//! texture `n % 3`, so slots 0 and 3 deliberately alias to texture 0.

use crate::scene::Shape;

pub const MENU_SLOTS: usize = 4;

/// Local offsets of the four entries relative to the anchor.
pub const MENU_OFFSET_X: [f32; MENU_SLOTS] = [-0.2, -0.1, -0.2, -0.1];
pub const MENU_OFFSET_Y: [f32; MENU_SLOTS] = [0.1, 0.1, 0.0, 0.0];

/// Squared hit radius around each entry (0.03 m).
pub const MENU_HIT_RADIUS_SQ: f32 = 0.03 * 0.03;

/// Spawn-menu slot to shape mapping, in slot order.
pub const MENU_SHAPES: [Shape; MENU_SLOTS] = [
    Shape::Cube,
    Shape::Sphere,
    Shape::Cylinder,
    Shape::Torus,
];

/// Number of distinct texture slots the texture menu can assign.
pub const TEXTURE_CHOICES: u32 = 3;

/// Which menu is open this frame, if any. The two are mutually exclusive
/// per frame; the spawn menu wins when both hold conditions are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMenu {
    Spawn,
    Texture,
}

/// Slot under the probe point, or `None` when the probe is off-menu.
///
/// Entries are 0.1 m apart with a 0.03 m hit radius, so at most one slot
/// can match; the first match is the nearest.
pub fn slot_under(anchor: [f32; 3], probe: [f32; 3]) -> Option<usize> {
    let x = probe[0] - anchor[0];
    let y = probe[1] - anchor[1];
    let z = probe[2] - anchor[2];
    for slot in 0..MENU_SLOTS {
        let dx = x - MENU_OFFSET_X[slot];
        let dy = y - MENU_OFFSET_Y[slot];
        if dx * dx + dy * dy + z * z < MENU_HIT_RADIUS_SQ {
            return Some(slot);
        }
    }
    None
}

/// Texture index a texture-menu slot resolves to.
pub fn texture_for_slot(slot: usize) -> u32 {
    (slot as u32) % TEXTURE_CHOICES
}

#[cfg(test)]
mod tests {
    use super::{slot_under, texture_for_slot, MENU_OFFSET_X, MENU_OFFSET_Y, MENU_SLOTS};

    #[test]
    fn probe_on_each_entry_hits_its_slot() {
        let anchor = [0.3, 1.2, -0.5];
        for slot in 0..MENU_SLOTS {
            let probe = [
                anchor[0] + MENU_OFFSET_X[slot],
                anchor[1] + MENU_OFFSET_Y[slot],
                anchor[2],
            ];
            assert_eq!(slot_under(anchor, probe), Some(slot));
        }
    }

    #[test]
    fn probe_near_an_entry_still_hits() {
        let anchor = [0.0; 3];
        let probe = [MENU_OFFSET_X[1] + 0.02, MENU_OFFSET_Y[1] - 0.01, 0.01];
        assert_eq!(slot_under(anchor, probe), Some(1));
    }

    #[test]
    fn probe_off_menu_misses() {
        let anchor = [0.0; 3];
        assert_eq!(slot_under(anchor, [0.0, 0.0, 0.0]), None);
        assert_eq!(slot_under(anchor, [-0.15, 0.05, 0.0]), None);
        // Depth matters too: in plane but pushed past the hit radius.
        assert_eq!(slot_under(anchor, [-0.2, 0.1, 0.05]), None);
    }

    #[test]
    fn texture_slots_wrap_modulo_three() {
        assert_eq!(texture_for_slot(0), 0);
        assert_eq!(texture_for_slot(1), 1);
        assert_eq!(texture_for_slot(2), 2);
        // Slot 3 aliases back onto texture 0.
        assert_eq!(texture_for_slot(3), 0);
        assert_eq!(texture_for_slot(0), texture_for_slot(3));
    }
}

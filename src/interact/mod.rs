//! Two-handed gesture state machine
//!
//! Consumes both controller snapshots and the object store once per frame
//! and resolves which gesture is in effect: menu browsing, spawning,
//! grab-and-move, two-handed scaling, single-handed rotating, or texture
//! picking. Branches run in a fixed priority order using only the current
//! frame's held/press/release predicates; degraded conditions (nothing
//! under the probe, nothing in grab radius, tracking loss upstream) make a
//! branch a no-op for the frame, never an error.
//!
//! One deliberate quirk is carried over from the system this models: a
//! single `grab_scale` flag gates both the single-hand move and the
//! two-hand scale. Grabbing an object with the left trigger is what arms
//! scaling, and releasing the left trigger disarms both.

use crate::input::{ControllerSnapshot, SIDE_BUTTON, TRIGGER};
use crate::menu::{self, OpenMenu, MENU_SHAPES};
use crate::scene::{SceneState, GRAB_RADIUS_SQ};

/// Scale pinned onto an object while it is being spawned.
pub const SPAWN_SCALE: [f32; 3] = [0.03, 0.03, 0.03];

/// Mutually-exclusive view of the frame's active gesture, derived from the
/// interaction flags for observability. The flags themselves can overlap
/// (a rotate can run while a grab is armed); the tag reports the one that
/// takes priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    Idle,
    MenuOpen,
    Spawning,
    TexturePicking,
    Grabbing,
    Scaling,
    Rotating,
}

/// Gesture flags and transient indices for one session. Owned by the
/// session context and passed into the per-frame update by reference.
#[derive(Default)]
pub struct InteractionState {
    /// A freshly spawned object is still slaved to the left tip.
    spawning: bool,
    /// Left-trigger grab is in effect. Also arms two-handed scaling.
    grab_scale: bool,
    rotating: bool,
    texture_picking: bool,
    /// Most recently resolved store index. Valid only while a gesture that
    /// resolved it is active; later branches in the same frame overwrite it.
    active_object: Option<usize>,
    /// Menu entry under the probe, while a menu is open.
    highlight: Option<usize>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_object(&self) -> Option<usize> {
        self.active_object
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Which menu is open given this frame's right-hand buttons. Spawn and
    /// texture menus are mutually exclusive per frame; spawn wins when the
    /// side button and trigger are both down.
    pub fn open_menu(&self, right: &ControllerSnapshot) -> Option<OpenMenu> {
        if right.held(SIDE_BUTTON) && !self.grab_scale {
            Some(OpenMenu::Spawn)
        } else if right.held(TRIGGER) && !self.grab_scale && !self.rotating {
            Some(OpenMenu::Texture)
        } else {
            None
        }
    }

    /// The single gesture in effect this frame.
    pub fn mode(&self, left: &ControllerSnapshot, right: &ControllerSnapshot) -> GestureMode {
        if self.spawning {
            GestureMode::Spawning
        } else if self.texture_picking {
            GestureMode::TexturePicking
        } else if self.grab_scale {
            if left.held(TRIGGER) && right.held(TRIGGER) {
                GestureMode::Scaling
            } else {
                GestureMode::Grabbing
            }
        } else if self.rotating {
            GestureMode::Rotating
        } else if self.open_menu(right).is_some() {
            GestureMode::MenuOpen
        } else {
            GestureMode::Idle
        }
    }

    /// Run one frame of gesture resolution, mutating `scene` in place.
    /// Controller snapshots must already be refreshed for this frame.
    pub fn update(
        &mut self,
        left: &ControllerSnapshot,
        right: &ControllerSnapshot,
        scene: &mut SceneState,
    ) {
        // Menu browse and spawn. The menu is anchored to the right hand
        // and probed with the left tip; a fresh left-trigger press on a
        // highlighted entry spawns that shape.
        if right.held(SIDE_BUTTON) && !self.grab_scale {
            let slot = menu::slot_under(right.position(), left.tip());
            if let Some(slot) = slot {
                if left.pressed(TRIGGER) {
                    let index = scene.spawn(MENU_SHAPES[slot]);
                    self.active_object = Some(index);
                    self.spawning = true;
                    log::debug!("spawned {:?} as object {index}", MENU_SHAPES[slot]);
                }
            }
        }

        // A spawning object rides the left tip until the trigger drops,
        // its scale pinned small.
        if self.spawning {
            let last = scene.len().wrapping_sub(1);
            if let Some(object) = scene.object_mut(last) {
                object.position = left.tip();
                object.orientation = left.orientation();
                object.scale = SPAWN_SCALE;
            }
        }

        // Texture pick entry: right trigger alone, nothing else in flight.
        if right.held(TRIGGER)
            && !left.held(TRIGGER)
            && !self.grab_scale
            && !self.rotating
        {
            self.texture_picking = true;
        }

        // Texture pick: the right tip re-resolves the target every frame;
        // while both triggers are down, the entry under the probe is
        // written through. Same slot, same value each frame, so holding
        // still is idempotent.
        if self.texture_picking {
            self.active_object = scene.nearest_within(right.tip(), GRAB_RADIUS_SQ);
            if right.held(TRIGGER) && left.held(TRIGGER) {
                let slot = menu::slot_under(right.position(), left.tip());
                if let (Some(slot), Some(index)) = (slot, self.active_object) {
                    if let Some(object) = scene.object_mut(index) {
                        object.texture = Some(menu::texture_for_slot(slot));
                    }
                }
            }
        }
        if left.released(TRIGGER) && self.texture_picking {
            self.texture_picking = false;
        }

        // Grab: left trigger alone picks up the nearest object and slaves
        // its position to the left tip. Orientation is left unchanged on
        // purpose. A successful grab is also what arms two-handed scaling.
        if left.held(TRIGGER)
            && !right.held(TRIGGER)
            && !right.held(SIDE_BUTTON)
            && !self.spawning
            && !self.texture_picking
        {
            self.active_object = scene.nearest_within(left.tip(), GRAB_RADIUS_SQ);
            if let Some(index) = self.active_object {
                if let Some(object) = scene.object_mut(index) {
                    object.position = left.tip();
                    self.grab_scale = true;
                }
            }
        }

        // Two-handed scale: per-axis absolute spread between the tips,
        // rewritten every frame. Reuses whatever index is currently
        // resolved; it does not re-run the hit test.
        if left.held(TRIGGER) && right.held(TRIGGER) && self.grab_scale && !self.texture_picking {
            if let Some(object) = self.active_object.and_then(|i| scene.object_mut(i)) {
                let (lt, rt) = (left.tip(), right.tip());
                object.scale = [
                    (rt[0] - lt[0]).abs(),
                    (rt[1] - lt[1]).abs(),
                    (rt[2] - lt[2]).abs(),
                ];
            }
        }
        if left.released(TRIGGER) && self.grab_scale {
            self.grab_scale = false;
        }

        // Rotate: checked every frame the left side button is down,
        // independently of the branches above.
        if left.held(SIDE_BUTTON) {
            self.active_object = scene.nearest_within(left.tip(), GRAB_RADIUS_SQ);
            if let Some(index) = self.active_object {
                if let Some(object) = scene.object_mut(index) {
                    object.orientation = left.orientation();
                    self.rotating = true;
                }
            }
        }
        if left.released(SIDE_BUTTON) && self.rotating {
            self.rotating = false;
        }

        // Releasing the left trigger always ends a spawn in progress.
        if left.released(TRIGGER) {
            self.spawning = false;
        }

        // Highlight tracks the open menu; cleared whenever no menu is up.
        self.highlight = match self.open_menu(right) {
            Some(_) => menu::slot_under(right.position(), left.tip()),
            None => None,
        };
    }
}

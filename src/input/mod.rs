//! Per-frame controller snapshots
//!
//! Wraps the session host's raw controller reads in a stable per-frame
//! view: pose, per-button held state, and edge-triggered press/release
//! derived from the previous frame's committed buttons. The previous-frame
//! ring advances exactly once per frame, in `commit_frame`, after all
//! gesture logic has run — so a press stays "pressed" for one whole frame
//! no matter where in the frame it is queried.

use crate::math::MatrixStack;

/// Buttons reported per device by the session host.
pub const BUTTON_COUNT: usize = 6;

/// Primary trigger index.
pub const TRIGGER: usize = 1;

/// Side (secondary) button index.
pub const SIDE_BUTTON: usize = 2;

/// Forward offset from the grip pose to the device's working end, meters.
const TIP_OFFSET: f32 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// One raw controller read from the session host. `None` at the host
/// boundary means the device is not tracked this frame.
#[derive(Debug, Clone, Copy)]
pub struct ControllerSample {
    pub position: [f32; 3],
    /// Quaternion, `[x, y, z, w]`.
    pub orientation: [f32; 4],
    pub buttons: [bool; BUTTON_COUNT],
}

/// Stable per-frame controller view. Created once when the immersive
/// session becomes active and kept for the session's lifetime.
pub struct ControllerSnapshot {
    hand: Hand,
    position: [f32; 3],
    orientation: [f32; 4],
    held: [bool; BUTTON_COUNT],
    held_prev: [bool; BUTTON_COUNT],
    tip: [f32; 3],
}

impl ControllerSnapshot {
    pub fn new(hand: Hand) -> Self {
        Self {
            hand,
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
            held: [false; BUTTON_COUNT],
            held_prev: [false; BUTTON_COUNT],
            tip: [0.0, 0.0, -TIP_OFFSET],
        }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Absorb this frame's host read. On tracking loss the previous pose
    /// and buttons are kept, freezing the affordance in place for the
    /// frame rather than propagating an undefined pose.
    pub fn refresh(&mut self, sample: Option<&ControllerSample>, m: &mut MatrixStack) {
        if let Some(sample) = sample {
            self.position = sample.position;
            self.orientation = sample.orientation;
            self.held = sample.buttons;
        }
        self.tip = compute_tip(self.position, self.orientation, m);
    }

    /// Advance the button ring: current becomes previous. Once per frame,
    /// after rendering.
    pub fn commit_frame(&mut self) {
        self.held_prev = self.held;
    }

    pub fn held(&self, button: usize) -> bool {
        self.held.get(button).copied().unwrap_or(false)
    }

    /// Held this frame, not held last frame.
    pub fn pressed(&self, button: usize) -> bool {
        self.held(button) && !self.held_prev.get(button).copied().unwrap_or(false)
    }

    /// Not held this frame, held last frame.
    pub fn released(&self, button: usize) -> bool {
        !self.held(button) && self.held_prev.get(button).copied().unwrap_or(false)
    }

    pub fn position(&self) -> [f32; 3] {
        self.position
    }

    pub fn orientation(&self) -> [f32; 4] {
        self.orientation
    }

    /// Working-end point, cached at `refresh`. All hit tests this frame
    /// use this value, so a fast hand motion resolves against where the
    /// tip is *now*, not where it was last render.
    pub fn tip(&self) -> [f32; 3] {
        self.tip
    }
}

/// Grip pose pushed forward along the device's local -Z. Runs through the
/// shared transform stack, bracketed by save/restore so the caller's
/// composed matrix is untouched.
fn compute_tip(position: [f32; 3], orientation: [f32; 4], m: &mut MatrixStack) -> [f32; 3] {
    m.save();
    m.identity();
    m.translate(position[0], position[1], position[2]);
    m.rotate_quat(orientation);
    m.translate(0.0, 0.0, -TIP_OFFSET);
    let tip = m.origin();
    m.restore();
    tip
}

//! Session context and frame loop
//!
//! One `Session` owns all per-session state: the transform stack, the
//! object store, the gesture state machine, the renderer, and the two
//! controller snapshots. An external host drives `frame` once per display
//! refresh; within a frame nothing blocks or suspends, and the order is
//! fixed: refresh snapshots, resolve gestures, render, commit button
//! state for next frame's edge detection.

use crate::input::{ControllerSample, ControllerSnapshot, Hand};
use crate::interact::InteractionState;
use crate::math::MatrixStack;
use crate::render::{DrawBackend, SceneRenderer};
use crate::scene::SceneState;

/// Immersive session collaborator: tracked-device reads and session
/// activity. `controller` returns `None` when the device has no live pose
/// this frame.
pub trait SessionHost {
    fn immersive_active(&self) -> bool;
    fn controller(&self, hand: Hand) -> Option<ControllerSample>;
}

pub struct Session {
    m: MatrixStack,
    scene: SceneState,
    interaction: InteractionState,
    renderer: SceneRenderer,
    /// Created once, on the first frame the immersive session is active;
    /// kept for the session's lifetime.
    controllers: Option<(ControllerSnapshot, ControllerSnapshot)>,
    /// Maps the virtual room origin onto the physical tracked space.
    /// Computed lazily on first immersive entry and cached.
    calibration: Option<[f32; 16]>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            m: MatrixStack::new(),
            scene: SceneState::new(),
            interaction: InteractionState::new(),
            renderer: SceneRenderer::new(),
            controllers: None,
            calibration: None,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Mutable store access, for loading a saved scene between frames.
    pub fn scene_mut(&mut self) -> &mut SceneState {
        &mut self.scene
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn calibration(&self) -> Option<&[f32; 16]> {
        self.calibration.as_ref()
    }

    /// Run one frame: refresh → gestures → render → commit.
    pub fn frame(&mut self, host: &dyn SessionHost, backend: &mut dyn DrawBackend) {
        if host.immersive_active() {
            if self.controllers.is_none() {
                self.controllers = Some((
                    ControllerSnapshot::new(Hand::Left),
                    ControllerSnapshot::new(Hand::Right),
                ));
                log::info!("immersive session active, controller adapters created");
            }
            if self.calibration.is_none() {
                self.calibration = Some(compute_calibration(&mut self.m));
                log::info!("room calibration computed");
            }
        }

        if let Some((left, right)) = &mut self.controllers {
            let left_sample = host.controller(Hand::Left);
            let right_sample = host.controller(Hand::Right);
            left.refresh(left_sample.as_ref(), &mut self.m);
            right.refresh(right_sample.as_ref(), &mut self.m);
            self.interaction.update(left, right, &mut self.scene);
        }

        self.renderer.render_pass(
            backend,
            &mut self.m,
            &self.scene,
            &self.interaction,
            self.controllers.as_ref().map(|(l, r)| (l, r)),
            self.calibration.as_ref(),
        );

        if let Some((left, right)) = &mut self.controllers {
            left.commit_frame();
            right.commit_frame();
        }
    }
}

/// Fixed mapping from the virtual room origin to the physical tracked
/// space: a quarter turn about Y, then a shift to the tracked origin.
fn compute_calibration(m: &mut MatrixStack) -> [f32; 16] {
    m.save();
    m.identity();
    m.rotate_y(std::f32::consts::FRAC_PI_2);
    m.translate(-2.01, 0.04, 0.0);
    let calibration = m.value();
    m.restore();
    calibration
}

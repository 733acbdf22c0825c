//! Scene draw pass
//!
//! Walks the object store and the fixed scene geometry through the
//! transform stack and emits draw calls to the external render backend.
//! One pass draws, in order: both controller avatars, the open menu (at
//! most one per frame), every placed object, then the room shell and
//! tables under the session calibration transform.
//!
//! Geometry upload is cached one-deep: a draw re-uploads its shape only
//! when it differs from the immediately preceding draw call. Consecutive
//! draws of the same shape reuse the bound geometry, which is what keeps
//! the furniture walk (a long run of cubes) cheap.

pub mod furniture;

use crate::input::{ControllerSnapshot, TRIGGER};
use crate::interact::InteractionState;
use crate::math::MatrixStack;
use crate::menu::{
    self, OpenMenu, MENU_OFFSET_X, MENU_OFFSET_Y, MENU_SHAPES, MENU_SLOTS,
};
use crate::scene::{SceneState, Shape};

/// External rendering collaborator. Geometry binding is stateful: a draw
/// uses whatever shape was uploaded last.
pub trait DrawBackend {
    /// Upload (and bind) geometry for `shape`.
    fn upload_shape(&mut self, shape: Shape);

    /// Draw the bound shape with a column-major model matrix.
    fn draw_shape(
        &mut self,
        shape: Shape,
        model: &[f32; 16],
        color: [f32; 3],
        texture: Option<u32>,
        texture_scale: f32,
    );
}

const LEFT_AVATAR_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const RIGHT_AVATAR_COLOR: [f32; 3] = [0.0, 1.0, 1.0];
const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.5, 0.5];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

pub struct SceneRenderer {
    last_uploaded: Option<Shape>,
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            last_uploaded: None,
        }
    }

    /// Emit one complete frame of draw calls.
    ///
    /// The pass starts from identity so no transform leaks across frames,
    /// and must leave the stack's save depth exactly where it found it.
    pub fn render_pass(
        &mut self,
        backend: &mut dyn DrawBackend,
        m: &mut MatrixStack,
        scene: &SceneState,
        interaction: &InteractionState,
        controllers: Option<(&ControllerSnapshot, &ControllerSnapshot)>,
        calibration: Option<&[f32; 16]>,
    ) {
        let depth_before = m.depth();
        m.identity();
        self.last_uploaded = None;

        if let Some((left, right)) = controllers {
            self.draw_controller(backend, m, left, LEFT_AVATAR_COLOR);
            self.draw_controller(backend, m, right, RIGHT_AVATAR_COLOR);
            match interaction.open_menu(right) {
                Some(OpenMenu::Spawn) => {
                    self.draw_spawn_menu(backend, m, right.position(), interaction.highlight());
                }
                Some(OpenMenu::Texture) => {
                    self.draw_texture_menu(backend, m, right.position(), interaction.highlight());
                }
                None => {}
            }
        }

        for object in scene.objects() {
            let p = object.position;
            let s = object.scale;
            m.save();
            m.translate(p[0], p[1], p[2]);
            m.scale(s[0], s[1], s[2]);
            m.rotate_quat(object.orientation);
            self.draw(backend, m, object.shape, WHITE, object.texture, 1.0);
            m.restore();
        }

        if let Some(calibration) = calibration {
            m.set_from(calibration);
        }
        m.translate(0.0, -furniture::EYE_HEIGHT, 0.0);
        furniture::draw_room_shell(self, backend, m);
        furniture::draw_tables(self, backend, m);

        debug_assert_eq!(
            m.depth(),
            depth_before,
            "draw pass leaked a transform save"
        );
        if m.depth() != depth_before {
            log::warn!(
                "draw pass left {} unbalanced transform saves",
                m.depth() as isize - depth_before as isize
            );
        }
    }

    /// Draw through the one-deep upload cache.
    pub(crate) fn draw(
        &mut self,
        backend: &mut dyn DrawBackend,
        m: &MatrixStack,
        shape: Shape,
        color: [f32; 3],
        texture: Option<u32>,
        texture_scale: f32,
    ) {
        if self.last_uploaded != Some(shape) {
            backend.upload_shape(shape);
            self.last_uploaded = Some(shape);
        }
        backend.draw_shape(shape, &m.value(), color, texture, texture_scale);
    }

    fn draw_spawn_menu(
        &mut self,
        backend: &mut dyn DrawBackend,
        m: &mut MatrixStack,
        anchor: [f32; 3],
        highlight: Option<usize>,
    ) {
        for slot in 0..MENU_SLOTS {
            let color = if highlight == Some(slot) {
                HIGHLIGHT_COLOR
            } else {
                WHITE
            };
            m.save();
            m.translate(
                anchor[0] + MENU_OFFSET_X[slot],
                anchor[1] + MENU_OFFSET_Y[slot],
                anchor[2],
            );
            m.scale(0.03, 0.03, 0.03);
            self.draw(backend, m, MENU_SHAPES[slot], color, None, 1.0);
            m.restore();
        }
    }

    /// Texture menu entries are all cubes, each carrying the texture its
    /// slot resolves to (slots 0 and 3 show the same texture).
    fn draw_texture_menu(
        &mut self,
        backend: &mut dyn DrawBackend,
        m: &mut MatrixStack,
        anchor: [f32; 3],
        highlight: Option<usize>,
    ) {
        for slot in 0..MENU_SLOTS {
            let color = if highlight == Some(slot) {
                HIGHLIGHT_COLOR
            } else {
                WHITE
            };
            m.save();
            m.translate(
                anchor[0] + MENU_OFFSET_X[slot],
                anchor[1] + MENU_OFFSET_Y[slot],
                anchor[2],
            );
            m.scale(0.03, 0.03, 0.03);
            self.draw(
                backend,
                m,
                Shape::Cube,
                color,
                Some(menu::texture_for_slot(slot)),
                1.0,
            );
            m.restore();
        }
    }

    /// Controller avatar: two grip slabs that pinch in while the trigger
    /// is held, a button box, and an angled barrel ending in a sphere tip.
    fn draw_controller(
        &mut self,
        backend: &mut dyn DrawBackend,
        m: &mut MatrixStack,
        controller: &ControllerSnapshot,
        color: [f32; 3],
    ) {
        let p = controller.position();
        let s = if controller.held(TRIGGER) { 0.0125 } else { 0.0225 };
        m.save();
        m.translate(p[0], p[1], p[2]);
        m.rotate_quat(controller.orientation());
        m.save();
        m.translate(-s, 0.0, 0.001);
        m.scale(0.0125, 0.016, 0.036);
        self.draw(backend, m, Shape::Cube, color, None, 1.0);
        m.restore();
        m.save();
        m.translate(s, 0.0, 0.001);
        m.scale(0.0125, 0.016, 0.036);
        self.draw(backend, m, Shape::Cube, color, None, 1.0);
        m.restore();
        m.save();
        m.translate(0.0, 0.0, 0.025);
        m.scale(0.015, 0.015, 0.01);
        self.draw(backend, m, Shape::Cube, BLACK, None, 1.0);
        m.restore();
        m.save();
        m.translate(0.0, 0.0, 0.035);
        m.rotate_x(0.5);
        m.save();
        m.translate(0.0, -0.001, 0.035);
        m.scale(0.014, 0.014, 0.042);
        self.draw(backend, m, Shape::Cylinder, BLACK, None, 1.0);
        m.restore();
        m.save();
        m.translate(0.0, -0.001, 0.077);
        m.scale(0.014, 0.014, 0.014);
        self.draw(backend, m, Shape::Sphere, BLACK, None, 1.0);
        m.restore();
        m.restore();
        m.restore();
    }
}

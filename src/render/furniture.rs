//! Fixed architectural geometry
//!
//! The room shell and the two tables model a real tracked space. The
//! source measurements are in inches, converted to meters here once.

use crate::math::MatrixStack;
use crate::render::{DrawBackend, SceneRenderer};
use crate::scene::Shape;

const INCH: f32 = 0.0254;

pub const EYE_HEIGHT: f32 = INCH * 69.0;
pub const HALL_LENGTH: f32 = INCH * 306.0;
pub const HALL_WIDTH: f32 = INCH * 213.0;
pub const TABLE_DEPTH: f32 = INCH * 30.0;
pub const TABLE_HEIGHT: f32 = INCH * 29.0;
pub const TABLE_WIDTH: f32 = INCH * 60.0;
pub const TABLE_THICKNESS: f32 = INCH * 11.0 / 8.0;
pub const LEG_THICKNESS: f32 = INCH * 2.5;

const TABLE_TOP_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const TABLE_LEG_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
const ROOM_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// The room as an inside-out cube: negative scale on all three axes flips
/// the faces inward, the usual trick for interiors.
pub(super) fn draw_room_shell(
    renderer: &mut SceneRenderer,
    backend: &mut dyn DrawBackend,
    m: &mut MatrixStack,
) {
    m.save();
    m.translate(0.0, HALL_WIDTH / 2.0, 0.0);
    m.scale(-HALL_WIDTH / 2.0, -HALL_WIDTH / 2.0, -HALL_LENGTH / 2.0);
    renderer.draw(backend, m, Shape::Cube, ROOM_COLOR, Some(1), 2.0);
    m.restore();
}

/// Two tables against the long walls, mirrored across the room center.
pub(super) fn draw_tables(
    renderer: &mut SceneRenderer,
    backend: &mut dyn DrawBackend,
    m: &mut MatrixStack,
) {
    let offset = (HALL_WIDTH - TABLE_DEPTH) / 2.0;
    for x in [offset, -offset] {
        m.save();
        m.translate(x, 0.0, 0.0);
        draw_table(renderer, backend, m);
        m.restore();
    }
}

fn draw_table(renderer: &mut SceneRenderer, backend: &mut dyn DrawBackend, m: &mut MatrixStack) {
    m.save();
    m.translate(0.0, TABLE_HEIGHT - TABLE_THICKNESS / 2.0, 0.0);
    m.scale(TABLE_DEPTH / 2.0, TABLE_THICKNESS / 2.0, TABLE_WIDTH / 2.0);
    renderer.draw(backend, m, Shape::Cube, TABLE_TOP_COLOR, Some(0), 1.0);
    m.restore();

    m.save();
    let h = (TABLE_HEIGHT - TABLE_THICKNESS) / 2.0;
    let dx = (TABLE_DEPTH - LEG_THICKNESS) / 2.0;
    let dz = (TABLE_WIDTH - LEG_THICKNESS) / 2.0;
    for x in [-dx, dx] {
        for z in [-dz, dz] {
            m.save();
            m.translate(x, h, z);
            m.scale(LEG_THICKNESS / 2.0, h, LEG_THICKNESS / 2.0);
            renderer.draw(backend, m, Shape::Cube, TABLE_LEG_COLOR, None, 1.0);
            m.restore();
        }
    }
    m.restore();
}

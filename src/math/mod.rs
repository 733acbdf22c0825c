//! Stack-based transform builder
//!
//! A single mutable 4x4 affine matrix with save/restore, used to compose
//! nested local frames while walking the scene. Every draw call reads the
//! top-of-stack value as its model matrix, and controller tip points are
//! derived through the same stack (isolated by save/restore).
//!
//! Convention: column-major `[f32; 16]`, translation in elements 12..14,
//! matching the render backend's model-matrix layout. New operations
//! post-multiply, so `translate` then `rotate_quat` places the rotation
//! inside the translated frame.

use glam::{Mat4, Quat, Vec3};

pub struct MatrixStack {
    current: Mat4,
    saved: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    pub fn new() -> Self {
        Self {
            current: Mat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Reset the current matrix to identity. Does not touch saved entries.
    pub fn identity(&mut self) {
        self.current = Mat4::IDENTITY;
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.current *= Mat4::from_translation(Vec3::new(x, y, z));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.current *= Mat4::from_scale(Vec3::new(x, y, z));
    }

    pub fn rotate_x(&mut self, angle: f32) {
        self.current *= Mat4::from_rotation_x(angle);
    }

    pub fn rotate_y(&mut self, angle: f32) {
        self.current *= Mat4::from_rotation_y(angle);
    }

    pub fn rotate_z(&mut self, angle: f32) {
        self.current *= Mat4::from_rotation_z(angle);
    }

    pub fn rotate_axis(&mut self, axis: [f32; 3], angle: f32) {
        self.current *= Mat4::from_axis_angle(Vec3::from_array(axis).normalize(), angle);
    }

    /// Rotate by a quaternion given as `[x, y, z, w]`, the layout the
    /// session host reports controller orientations in.
    pub fn rotate_quat(&mut self, q: [f32; 4]) {
        self.current *= Mat4::from_quat(Quat::from_xyzw(q[0], q[1], q[2], q[3]).normalize());
    }

    /// Push a copy of the current matrix.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop the most recent save, replacing the current matrix with it.
    ///
    /// Call sites are statically balanced with `save`; popping an empty
    /// stack means a drawing routine leaked a restore and the composed
    /// matrix can no longer be trusted, so this aborts the pass.
    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(m) => self.current = m,
            None => panic!("MatrixStack::restore with no matching save"),
        }
    }

    /// Number of saved entries. The renderer checks this returns to its
    /// pre-pass value after every complete draw pass.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Current matrix as column-major floats.
    pub fn value(&self) -> [f32; 16] {
        self.current.to_cols_array()
    }

    /// Overwrite the current matrix from column-major floats.
    pub fn set_from(&mut self, m: &[f32; 16]) {
        self.current = Mat4::from_cols_array(m);
    }

    /// Translation column of the current matrix.
    pub fn origin(&self) -> [f32; 3] {
        let v = self.current.to_cols_array();
        [v[12], v[13], v[14]]
    }
}

#[cfg(test)]
mod tests {
    use super::MatrixStack;

    #[test]
    fn identity_value() {
        let m = MatrixStack::new();
        let v = m.value();
        assert_eq!(v[0], 1.0);
        assert_eq!(v[5], 1.0);
        assert_eq!(v[10], 1.0);
        assert_eq!(v[15], 1.0);
        assert_eq!([v[12], v[13], v[14]], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn translate_lands_in_last_column() {
        let mut m = MatrixStack::new();
        m.translate(1.0, 2.0, 3.0);
        assert_eq!(m.origin(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn operations_post_multiply() {
        // Rotate the frame a quarter turn about Y, then step forward along
        // local -Z: that step must come out along world -X.
        let mut m = MatrixStack::new();
        m.rotate_y(std::f32::consts::FRAC_PI_2);
        m.translate(0.0, 0.0, -1.0);
        let o = m.origin();
        assert!((o[0] + 1.0).abs() < 1e-6, "x = {}", o[0]);
        assert!(o[1].abs() < 1e-6);
        assert!(o[2].abs() < 1e-6);
    }

    #[test]
    fn save_restore_round_trips() {
        let mut m = MatrixStack::new();
        m.translate(5.0, 0.0, 0.0);
        let before = m.value();
        m.save();
        m.translate(0.0, 9.0, 0.0);
        m.scale(2.0, 2.0, 2.0);
        m.restore();
        assert_eq!(m.value(), before);
        assert_eq!(m.depth(), 0);
    }

    #[test]
    fn nested_saves_unwind_in_order() {
        let mut m = MatrixStack::new();
        m.save();
        m.translate(1.0, 0.0, 0.0);
        m.save();
        m.translate(0.0, 1.0, 0.0);
        assert_eq!(m.depth(), 2);
        m.restore();
        assert_eq!(m.origin(), [1.0, 0.0, 0.0]);
        m.restore();
        assert_eq!(m.origin(), [0.0, 0.0, 0.0]);
        assert_eq!(m.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "no matching save")]
    fn restore_without_save_aborts() {
        let mut m = MatrixStack::new();
        m.restore();
    }

    #[test]
    fn set_from_round_trips() {
        let mut m = MatrixStack::new();
        m.translate(-2.01, 0.04, 0.0);
        m.rotate_y(0.7);
        let snapshot = m.value();
        let mut other = MatrixStack::new();
        other.set_from(&snapshot);
        assert_eq!(other.value(), snapshot);
    }

    #[test]
    fn rotate_quat_matches_axis_rotation() {
        let half = std::f32::consts::FRAC_PI_4 / 2.0;
        // Quaternion for a 45 degree rotation about Y.
        let q = [0.0, half.sin(), 0.0, half.cos()];
        let mut a = MatrixStack::new();
        a.rotate_quat(q);
        let mut b = MatrixStack::new();
        b.rotate_y(std::f32::consts::FRAC_PI_4);
        let (va, vb) = (a.value(), b.value());
        for i in 0..16 {
            assert!((va[i] - vb[i]).abs() < 1e-6, "element {i}: {} vs {}", va[i], vb[i]);
        }
    }
}

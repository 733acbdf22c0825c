pub mod serialization;

/// Solid shape handle. Value equality is what the renderer's upload cache
/// compares, so two objects with the same kind share uploaded geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    Cube,
    Sphere,
    Cylinder,
    Torus,
}

/// Squared distance below which a controller tip counts as "on" an object
/// for grab/rotate/texture hit-testing (about a 0.3 m radius).
pub const GRAB_RADIUS_SQ: f32 = 0.09;

/// A placed object. Mutated in place by gestures; never deleted.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneObject {
    pub shape: Shape,
    pub position: [f32; 3],
    /// Quaternion, `[x, y, z, w]`.
    pub orientation: [f32; 4],
    pub scale: [f32; 3],
    /// Texture slot, or `None` for untextured.
    pub texture: Option<u32>,
}

/// Ordered store of placed objects. The interaction layer mutates it, the
/// renderer only reads it.
#[derive(Default, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    objects: Vec<SceneObject>,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn object(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    /// Append a new object at the origin with unit scale and no texture.
    /// Returns its index (always the last).
    pub fn spawn(&mut self, shape: Shape) -> usize {
        self.objects.push(SceneObject {
            shape,
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
            texture: None,
        });
        self.objects.len() - 1
    }

    /// Index of the object with minimum squared distance to `point`, if
    /// that minimum is below `radius_sq`. Linear scan with a strictly
    /// smaller running minimum, so ties go to the lowest index.
    pub fn nearest_within(&self, point: [f32; 3], radius_sq: f32) -> Option<usize> {
        let mut best = radius_sq;
        let mut found = None;
        for (index, object) in self.objects.iter().enumerate() {
            let dx = point[0] - object.position[0];
            let dy = point[1] - object.position[1];
            let dz = point[2] - object.position[2];
            let d = dx * dx + dy * dy + dz * dz;
            if d < best {
                best = d;
                found = Some(index);
            }
        }
        found
    }

    #[cfg(test)]
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }
}

use crate::scene::SceneState;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SerializationError>;

pub fn save_scene_to_file(scene: &SceneState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(scene)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_scene_from_file(path: &Path) -> Result<SceneState> {
    let json = std::fs::read_to_string(path)?;
    let scene: SceneState = serde_json::from_str(&json)?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use crate::scene::{SceneObject, SceneState, Shape};

    #[test]
    fn empty_scene_round_trips() {
        let scene = SceneState::new();
        let json = serde_json::to_string_pretty(&scene).unwrap();
        let loaded: SceneState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.len(), 0);
    }

    #[test]
    fn placed_objects_round_trip() {
        let mut scene = SceneState::new();
        scene.add_object(SceneObject {
            shape: Shape::Sphere,
            position: [0.1, 0.8, -0.4],
            orientation: [0.0, 0.383, 0.0, 0.924],
            scale: [0.2, 0.1, 0.3],
            texture: Some(2),
        });
        scene.add_object(SceneObject {
            shape: Shape::Torus,
            position: [0.0, 0.7, 0.0],
            orientation: [0.0, 0.0, 0.0, 1.0],
            scale: [0.03; 3],
            texture: None,
        });

        let json = serde_json::to_string_pretty(&scene).unwrap();
        let loaded: SceneState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.objects()[0].shape, Shape::Sphere);
        assert_eq!(loaded.objects()[0].texture, Some(2));
        assert_eq!(loaded.objects()[1].scale, [0.03; 3]);
        assert_eq!(loaded.objects()[1].texture, None);
    }

    #[test]
    fn save_load_via_file() {
        let mut scene = SceneState::new();
        let index = scene.spawn(Shape::Cylinder);
        scene.object_mut(index).unwrap().position = [0.5, 0.6, 0.7];

        let mut path = std::env::temp_dir();
        let nonce = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        path.push(format!(
            "roomcraft_scene_{}_{}.json",
            std::process::id(),
            nonce
        ));

        super::save_scene_to_file(&scene, &path).unwrap();
        let loaded = super::load_scene_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.objects()[0].shape, Shape::Cylinder);
        assert_eq!(loaded.objects()[0].position, [0.5, 0.6, 0.7]);

        let _ = std::fs::remove_file(path);
    }
}

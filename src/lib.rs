//! Roomcraft - two-handed immersive scene-modeling core
//!
//! Per-frame interaction and placement logic for a direct-manipulation
//! scene editor driven by two tracked controllers: spawn simple solids
//! from a hand-anchored pop-up menu, grab and move them, scale them with
//! both hands, rotate them, and pick their textures.
//!
//! The crate is the frame-synchronous core only. Rendering, device
//! tracking, and session management are external collaborators behind
//! the [`render::DrawBackend`] and [`session::SessionHost`] traits; the
//! host calls [`session::Session::frame`] once per display refresh.

pub mod input;
pub mod interact;
pub mod math;
pub mod menu;
pub mod render;
pub mod scene;
pub mod session;

pub use input::{ControllerSample, ControllerSnapshot, Hand};
pub use interact::{GestureMode, InteractionState};
pub use math::MatrixStack;
pub use render::{DrawBackend, SceneRenderer};
pub use scene::{SceneObject, SceneState, Shape};
pub use session::{Session, SessionHost};

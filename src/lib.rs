//! A small interactive 3D tabletop scene viewer
//!
//! Renders a fixed still-life scene (mug, can, coaster, wood block,
//! backdrop wall) with wgpu and lets the user inspect it with either a
//! first-person free-look camera or a fixed orthographic framing:
//! - WASD moves, Q/E flies up/down, the mouse looks around, and the
//!   scroll wheel tunes movement speed
//! - O switches to the fixed orthographic inspection view, P returns to
//!   the perspective free-look camera

pub mod app;
pub mod core;
pub mod input;
pub mod render;
pub mod scene;
pub mod view;

// Re-exports for convenience
pub use glam;
pub use wgpu;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::app::{App, ViewerConfig};
    pub use crate::core::FrameClock;
    pub use crate::input::{Edge, InputState, KeyBindings, KeyEdge, ViewerAction};
    pub use crate::render::{Material, Mesh, Primitive, Renderer, Texture, Vertex};
    pub use crate::scene::SceneManager;
    pub use crate::view::{
        Camera, ProjectionController, ProjectionMode, ViewManager, ViewUniforms,
    };
    pub use glam::{Mat4, Vec2, Vec3, Vec4};
    pub use winit::keyboard::KeyCode;
}

//! Camera and view module
//!
//! Owns everything between raw input and the per-frame view/projection
//! uniforms: the free-look camera, the perspective/orthographic mode
//! state machine, and the orchestrating view manager.

mod camera;
mod manager;
mod projection;

pub use camera::Camera;
pub use manager::ViewManager;
pub use projection::{ProjectionController, ProjectionMode, ViewUniforms};

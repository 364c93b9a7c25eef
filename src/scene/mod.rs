//! Still life scene

mod builder;
mod manager;

pub use builder::{
    assemble_scene, build_backdrop, build_can, build_coaster, build_mug, build_wood_block,
    compose_transform, ScenePart,
};
pub use manager::SceneManager;

//! Rendering module

mod context;
mod lights;
mod material;
mod mesh;
mod texture;

pub use context::{ModelUniform, RenderFrame, Renderer};
pub use lights::{GpuLight, Light, LightRig, LightsUniform, LIGHT_COUNT};
pub use material::{Material, MaterialUniform};
pub use mesh::{Mesh, Primitive, Vertex};
pub use texture::{Texture, TextureError};
